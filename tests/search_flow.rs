//! Integration tests for the search and pagination flow.
//!
//! Drives the application through the same event sequences the plugin shim
//! produces: typing a query, submitting it, completing fetches, loading more
//! pages and recovering from failures.

use zplash::api::{FetchOutcome, FetchRequest, SearchResponse};
use zplash::app::FETCH_ERROR_MSG;
use zplash::domain::{Image, ImageUrls};
use zplash::{handle_event, Action, AppState, Event, InputMode, Theme};

fn new_state() -> AppState {
    AppState::new(Theme::default())
}

/// Types the query into the input and submits it, returning the dispatched
/// fetch request.
fn submit(state: &mut AppState, query: &str) -> FetchRequest {
    handle_event(state, &Event::SearchMode).unwrap();
    for c in query.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    let (should_render, actions) = handle_event(state, &Event::SubmitSearch).unwrap();
    assert!(should_render);
    match actions.into_iter().next() {
        Some(Action::Fetch(request)) => request,
        other => panic!("expected a fetch action, got {other:?}"),
    }
}

/// Requests the next page, returning the dispatched fetch request.
fn load_more(state: &mut AppState) -> FetchRequest {
    let (should_render, actions) = handle_event(state, &Event::LoadMore).unwrap();
    assert!(should_render);
    match actions.into_iter().next() {
        Some(Action::Fetch(request)) => request,
        other => panic!("expected a fetch action, got {other:?}"),
    }
}

/// Builds a page of `count` images starting at index `start`.
fn page_of(count: usize, start: usize, total_pages: u32) -> SearchResponse {
    let results = (0..count)
        .map(|i| Image {
            id: format!("img-{}", start + i),
            urls: ImageUrls {
                small: format!("https://images.example/{}-small.jpg", start + i),
            },
            alt_description: Some(format!("photo {}", start + i)),
        })
        .collect();

    SearchResponse {
        results,
        total_pages,
    }
}

/// Completes a fetch with the given outcome, returning whether it applied.
fn complete(state: &mut AppState, request: &FetchRequest, outcome: FetchOutcome) -> bool {
    let (applied, actions) = handle_event(
        state,
        &Event::FetchCompleted {
            request: request.clone(),
            outcome,
        },
    )
    .unwrap();
    assert!(actions.is_empty());
    applied
}

#[test]
fn submitting_empty_query_is_a_no_op() {
    let mut state = new_state();

    let (should_render, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();

    assert!(!should_render);
    assert!(actions.is_empty());
    assert!(!state.loading);
    assert!(!state.search_performed);
    assert_eq!(state.input_mode, InputMode::Search);
}

#[test]
fn submitting_a_query_dispatches_a_page_one_fetch() {
    let mut state = new_state();

    let request = submit(&mut state, "cats");

    assert_eq!(request.query, "cats");
    assert_eq!(request.page, 1);
    assert!(state.loading);
    assert!(!state.search_performed);
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn three_page_search_accumulates_results_until_the_last_page() {
    let mut state = new_state();

    // Page 1: 8 of 20 results.
    let request = submit(&mut state, "cats");
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 0, 3))
    ));
    assert_eq!(state.images.len(), 8);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages, 3);
    assert!(state.search_performed);
    assert!(!state.loading);
    assert!(state.can_load_more());

    // Page 2 appends.
    let request = load_more(&mut state);
    assert_eq!(request.page, 2);
    assert_eq!(request.query, "cats");
    assert!(state.load_more_loading);
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 8, 3))
    ));
    assert_eq!(state.images.len(), 16);
    assert_eq!(state.page, 2);
    assert!(!state.load_more_loading);
    assert_eq!(state.images[0].id, "img-0");
    assert_eq!(state.images[8].id, "img-8");

    // Page 3 is the final, partial page.
    let request = load_more(&mut state);
    assert_eq!(request.page, 3);
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(4, 16, 3))
    ));
    assert_eq!(state.images.len(), 20);
    assert_eq!(state.page, 3);
    assert!(!state.can_load_more());

    // No further fetch is dispatched on the last page.
    let (should_render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!should_render);
    assert!(actions.is_empty());
}

#[test]
fn zero_result_search_shows_empty_state_without_error() {
    let mut state = new_state();

    let request = submit(&mut state, "xyzzy");
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(SearchResponse {
            results: vec![],
            total_pages: 0,
        })
    ));

    assert!(state.images.is_empty());
    assert!(state.search_performed);
    assert!(state.error_msg.is_empty());
    assert!(!state.can_load_more());

    let vm = state.compute_viewmodel(30, 100);
    let header = vm.result_header.expect("result header should be shown");
    assert_eq!(header.query, "xyzzy");
    assert_eq!(header.count_label, "0 images found");
    let empty = vm.empty_state.expect("empty state should be shown");
    assert_eq!(empty.message, "No images found");
    assert!(vm.load_more.is_none());
    assert!(vm.error.is_none());
}

#[test]
fn failed_fetch_reports_error_and_keeps_previous_results() {
    let mut state = new_state();

    let request = submit(&mut state, "cats");
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 0, 3))
    ));

    // A failing load-more leaves the result set and pagination untouched.
    let request = load_more(&mut state);
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Failure("status 500".to_string())
    ));

    assert_eq!(state.error_msg, FETCH_ERROR_MSG);
    assert_eq!(state.images.len(), 8);
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages, 3);
    assert!(!state.load_more_loading);

    // The failed page can be retried, and success clears the error.
    let request = load_more(&mut state);
    assert_eq!(request.page, 2);
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 8, 3))
    ));
    assert!(state.error_msg.is_empty());
    assert_eq!(state.images.len(), 16);
    assert_eq!(state.page, 2);
}

#[test]
fn stale_completion_from_superseded_search_is_discarded() {
    let mut state = new_state();

    let first = submit(&mut state, "cats");

    // A second search supersedes the first before it completes. The input
    // still holds "cats", so typing appends to it.
    let second = submit(&mut state, "dogs");
    assert_ne!(first.id, second.id);
    assert_eq!(second.query, "catsdogs");

    // The first completion arrives late and must not apply.
    let applied = complete(&mut state, &first, FetchOutcome::Success(page_of(8, 0, 5)));
    assert!(!applied);
    assert!(state.images.is_empty());
    assert!(state.loading);
    assert!(!state.search_performed);

    // The second completion applies normally.
    let applied = complete(
        &mut state,
        &second,
        FetchOutcome::Success(page_of(3, 0, 1)),
    );
    assert!(applied);
    assert_eq!(state.images.len(), 3);
    assert_eq!(state.submitted_query, second.query);
    assert!(!state.loading);
}

#[test]
fn load_more_is_unavailable_before_a_search_or_while_fetching() {
    let mut state = new_state();

    // No search yet.
    let (should_render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!should_render);
    assert!(actions.is_empty());

    // Page-1 fetch in flight.
    let request = submit(&mut state, "cats");
    let (should_render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!should_render);
    assert!(actions.is_empty());

    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 0, 3))
    ));

    // Load-more fetch in flight blocks a second one.
    let _pending = load_more(&mut state);
    let (should_render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!should_render);
    assert!(actions.is_empty());
}

#[test]
fn query_editing_is_confined_to_search_mode() {
    let mut state = new_state();

    handle_event(&mut state, &Event::Char('c')).unwrap();
    handle_event(&mut state, &Event::Char('a')).unwrap();
    handle_event(&mut state, &Event::Char('t')).unwrap();
    handle_event(&mut state, &Event::Backspace).unwrap();
    assert_eq!(state.query, "ca");

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.input_mode, InputMode::Normal);

    let (should_render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
    assert!(!should_render);
    let (should_render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
    assert!(!should_render);
    assert_eq!(state.query, "ca");
}

#[test]
fn viewmodel_reflects_loading_and_mode() {
    let mut state = new_state();

    // Fresh state: search box visible, nothing else.
    let vm = state.compute_viewmodel(30, 100);
    assert!(vm.search_bar.is_some());
    assert!(vm.result_header.is_none());
    assert!(!vm.loading);
    assert_eq!(vm.footer.keybindings, "Enter: search  ESC: cancel  Type to edit query");

    // In-flight page-1 fetch hides items and shows the loading marker.
    let request = submit(&mut state, "cats");
    let vm = state.compute_viewmodel(30, 100);
    assert!(vm.loading);
    assert!(vm.items.is_empty());
    assert!(vm.search_bar.is_none());

    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 0, 3))
    ));
    let vm = state.compute_viewmodel(30, 100);
    assert!(!vm.loading);
    assert_eq!(vm.items.len(), 8);
    assert_eq!(vm.items[0].description, "photo 0");
    assert_eq!(vm.items[0].url, "https://images.example/0-small.jpg");
    let header = vm.result_header.expect("result header should be shown");
    assert_eq!(header.count_label, "24 images found");
    let load_more = vm.load_more.expect("load more should be offered");
    assert!(!load_more.in_flight);
    assert_eq!(
        vm.footer.keybindings,
        "j/k: scroll  m: load more  /: search  q: quit"
    );
}

#[test]
fn scrolling_windows_the_visible_results() {
    let mut state = new_state();

    let request = submit(&mut state, "cats");
    assert!(complete(
        &mut state,
        &request,
        FetchOutcome::Success(page_of(8, 0, 1))
    ));

    // Small terminal: chrome leaves few rows for items.
    let vm = state.compute_viewmodel(14, 100);
    assert!(vm.items.len() < 8);
    let visible = vm.items.len();
    assert_eq!(vm.items[0].description, "photo 0");

    for _ in 0..2 {
        handle_event(&mut state, &Event::ScrollDown).unwrap();
    }
    let vm = state.compute_viewmodel(14, 100);
    assert_eq!(vm.items.len(), visible);
    assert_eq!(vm.items[0].description, "photo 2");

    handle_event(&mut state, &Event::ScrollUp).unwrap();
    let vm = state.compute_viewmodel(14, 100);
    assert_eq!(vm.items[0].description, "photo 1");
}

#[test]
fn close_focus_emits_the_close_action() {
    let mut state = new_state();

    let (should_render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();

    assert!(!should_render);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
