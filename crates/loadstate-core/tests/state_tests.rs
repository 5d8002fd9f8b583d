// Rust guideline compliant 2026-10-17

//! Unit tests for the loading-state families.
//!
//! These tests walk the documented fetch and search flows and check the
//! equality rules, including errors compared by rendered text.

use loadstate_core::{
    CustomError, EmptyableLoadingState, Failure, LoadingState, Phase, ResultState,
    SearchableLoadingState,
};

#[test]
fn test_plain_fetch_flow() {
    let mut state: LoadingState<i32> = LoadingState::Idle;
    assert!(state.is_loading(), "Idle counts as loading");
    assert_eq!(state.result(), None);

    state = LoadingState::Loading;
    assert!(state.is_loading());

    state = LoadingState::Result(42);
    assert!(state.is_result());
    assert_eq!(state.result(), Some(&42));
    assert!(!state.is_loading());

    state = LoadingState::Error(Failure::msg("timeout"));
    assert_eq!(state.error().map(Failure::render).as_deref(), Some("timeout"));
    assert_eq!(state.result(), None);
}

#[test]
fn test_search_flow() {
    let mut state: SearchableLoadingState<Vec<i32>> =
        SearchableLoadingState::Result(vec![1, 2, 3]);
    assert!(state.has_content());

    state = SearchableLoadingState::search("abc");
    assert!(state.is_searching());
    assert!(state.is_loading());
    assert_eq!(state.search_query(), Some("abc"));
    assert!(!state.has_content());
    assert_eq!(state.success_result(), None);

    state = SearchableLoadingState::SearchResult {
        query: "abc".to_string(),
        result: vec![4],
    };
    assert!(state.has_content());
    assert!(state.is_search_result());
    assert_eq!(state.success_result(), Some(&vec![4]));
    assert_eq!(state.search_query(), Some("abc"));

    state = SearchableLoadingState::SearchEmpty {
        query: "xyz".to_string(),
    };
    assert!(state.is_search_empty());
    assert!(!state.is_searching());
    assert!(!state.is_result());
    assert!(!state.is_search_result());
    assert_eq!(state.success_result(), None);
    assert_eq!(state.search_query(), Some("xyz"));
}

#[test]
fn test_any_transition_is_accepted() {
    // Error straight back to SearchResult without an intermediate Search.
    let mut state: SearchableLoadingState<u8> = SearchableLoadingState::Error(Failure::msg("x"));
    assert_eq!(state.phase(), Phase::Error);

    state = SearchableLoadingState::SearchResult {
        query: "q".to_string(),
        result: 1,
    };
    assert_eq!(state.phase(), Phase::SearchResult);
}

#[test]
fn test_errors_with_same_text_are_equal() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "network unreachable");
    let custom = CustomError::new("network unreachable").with_detail("different cause");

    let lhs: LoadingState<i32> = LoadingState::Error(Failure::from(io));
    let rhs: LoadingState<i32> = LoadingState::Error(Failure::from(custom));
    assert_eq!(lhs, rhs);

    let other: LoadingState<i32> = LoadingState::Error(Failure::msg("permission denied"));
    assert_ne!(lhs, other);
}

#[test]
fn test_errors_with_same_text_are_equal_across_families() {
    let lhs: EmptyableLoadingState<i32> = EmptyableLoadingState::Error(Failure::msg("offline"));
    let rhs: EmptyableLoadingState<i32> =
        EmptyableLoadingState::Error(Failure::from(CustomError::new("offline")));
    assert_eq!(lhs, rhs);

    let lhs: SearchableLoadingState<i32> = SearchableLoadingState::Error(Failure::msg("offline"));
    let rhs: SearchableLoadingState<i32> = SearchableLoadingState::Error(Failure::msg("Offline"));
    assert_ne!(lhs, rhs, "Rendered text comparison is case-sensitive");
}

#[test]
fn test_custom_error_type_parameter() {
    let lhs: LoadingState<i32, CustomError> =
        LoadingState::Error(CustomError::new("quota").with_suggestion("wait"));
    let rhs: LoadingState<i32, CustomError> = LoadingState::Error(CustomError::new("quota"));
    assert_eq!(lhs, rhs, "Suggestion is not part of the rendered text");
}

#[test]
fn test_payload_equality() {
    let a: LoadingState<i32> = LoadingState::Result(1);
    assert_eq!(a, LoadingState::Result(1));
    assert_ne!(a, LoadingState::Result(2));

    let s: SearchableLoadingState<i32> = SearchableLoadingState::search("a");
    assert_eq!(s, SearchableLoadingState::search("a"));
    assert_ne!(s, SearchableLoadingState::search("b"));
}

#[test]
fn test_cross_variant_inequality() {
    let idle: LoadingState<i32> = LoadingState::Idle;
    assert_ne!(idle, LoadingState::Loading);

    let result: SearchableLoadingState<i32> = SearchableLoadingState::Result(5);
    let search_result = SearchableLoadingState::SearchResult {
        query: "q".to_string(),
        result: 5,
    };
    assert_ne!(result, search_result);

    let empty: SearchableLoadingState<i32> = SearchableLoadingState::Empty;
    assert_ne!(
        empty,
        SearchableLoadingState::SearchEmpty {
            query: String::new()
        }
    );

    let emptyable: EmptyableLoadingState<i32> = EmptyableLoadingState::Empty;
    assert_ne!(emptyable, EmptyableLoadingState::Idle);
}

#[test]
fn test_search_result_needs_matching_query_and_payload() {
    let base: SearchableLoadingState<i32> = SearchableLoadingState::SearchResult {
        query: "q".to_string(),
        result: 1,
    };
    assert_eq!(
        base,
        SearchableLoadingState::SearchResult {
            query: "q".to_string(),
            result: 1,
        }
    );
    assert_ne!(
        base,
        SearchableLoadingState::SearchResult {
            query: "q".to_string(),
            result: 2,
        }
    );
    assert_ne!(
        base,
        SearchableLoadingState::SearchResult {
            query: "Q".to_string(),
            result: 1,
        }
    );
}

#[test]
fn test_emptyable_predicates() {
    let empty: EmptyableLoadingState<i32> = EmptyableLoadingState::Empty;
    assert!(empty.is_empty());
    assert!(!empty.is_loading());
    assert!(!empty.has_content());
    assert!(empty.is_terminal());

    let idle: EmptyableLoadingState<i32> = EmptyableLoadingState::Idle;
    assert!(idle.is_loading());
    assert!(!idle.is_terminal());
}

#[test]
fn test_plain_has_content_matches_result() {
    let state: LoadingState<&str> = LoadingState::Result("ok");
    assert!(ResultState::has_content(&state));

    let state: LoadingState<&str> = LoadingState::Loading;
    assert!(!ResultState::has_content(&state));
}
