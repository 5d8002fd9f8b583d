// Rust guideline compliant 2026-10-17

//! Property-based tests for the loading-state families.
//!
//! These tests validate that predicates agree with the active variant and
//! that the custom equality behaves like an equivalence relation.

use loadstate_core::{
    CustomError, EmptyableLoadingState, Failure, LoadingState, Phase, ResultState,
    SearchableLoadingState,
};
use proptest::prelude::*;

/// Generates failures whose rendered text comes from a small pool, wrapped
/// in different concrete error types.
fn arb_failure() -> impl Strategy<Value = Failure> {
    let text = prop_oneof![
        Just("timeout"),
        Just("network unreachable"),
        Just("permission denied"),
    ];
    (text, any::<bool>()).prop_map(|(text, custom)| {
        if custom {
            Failure::from(CustomError::new(text))
        } else {
            Failure::msg(text)
        }
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-c]{1,3}", "[A-C]{1,3}"]
}

fn arb_loading() -> impl Strategy<Value = LoadingState<i32>> {
    prop_oneof![
        Just(LoadingState::Idle),
        Just(LoadingState::Loading),
        (0..4i32).prop_map(LoadingState::Result),
        arb_failure().prop_map(LoadingState::Error),
    ]
}

fn arb_emptyable() -> impl Strategy<Value = EmptyableLoadingState<i32>> {
    prop_oneof![
        Just(EmptyableLoadingState::Idle),
        Just(EmptyableLoadingState::Loading),
        (0..4i32).prop_map(EmptyableLoadingState::Result),
        Just(EmptyableLoadingState::Empty),
        arb_failure().prop_map(EmptyableLoadingState::Error),
    ]
}

fn arb_searchable() -> impl Strategy<Value = SearchableLoadingState<i32>> {
    prop_oneof![
        Just(SearchableLoadingState::Idle),
        Just(SearchableLoadingState::Loading),
        (0..4i32).prop_map(SearchableLoadingState::Result),
        arb_query().prop_map(|query| SearchableLoadingState::Search { query }),
        (arb_query(), 0..4i32)
            .prop_map(|(query, result)| SearchableLoadingState::SearchResult { query, result }),
        arb_query().prop_map(|query| SearchableLoadingState::SearchEmpty { query }),
        Just(SearchableLoadingState::Empty),
        arb_failure().prop_map(SearchableLoadingState::Error),
    ]
}

proptest! {
    /// Exactly the predicate naming the active variant is true.
    #[test]
    fn prop_searchable_predicates_match_phase(state in arb_searchable()) {
        let phase = state.phase();
        prop_assert_eq!(state.is_searching(), phase == Phase::Search);
        prop_assert_eq!(state.is_result(), phase == Phase::Result);
        prop_assert_eq!(state.is_search_result(), phase == Phase::SearchResult);
        prop_assert_eq!(state.is_search_empty(), phase == Phase::SearchEmpty);
        prop_assert_eq!(state.is_empty(), phase == Phase::Empty);
        prop_assert_eq!(state.failure_error().is_some(), phase == Phase::Error);
    }

    /// Loading covers exactly the in-progress phases; content exactly the payload phases.
    #[test]
    fn prop_searchable_loading_and_content(state in arb_searchable()) {
        let phase = state.phase();
        prop_assert_eq!(
            state.is_loading(),
            matches!(phase, Phase::Idle | Phase::Loading | Phase::Search)
        );
        prop_assert_eq!(state.is_loading(), !state.is_terminal());
        prop_assert_eq!(
            state.has_content(),
            matches!(phase, Phase::Result | Phase::SearchResult)
        );
        prop_assert_eq!(state.has_content(), state.success_result().is_some());
        prop_assert_eq!(
            state.search_query().is_some(),
            matches!(phase, Phase::Search | Phase::SearchResult | Phase::SearchEmpty)
        );
    }

    #[test]
    fn prop_emptyable_predicates(state in arb_emptyable()) {
        let phase = state.phase();
        prop_assert_eq!(state.is_loading(), matches!(phase, Phase::Idle | Phase::Loading));
        prop_assert_eq!(state.is_result(), phase == Phase::Result);
        prop_assert_eq!(state.is_empty(), phase == Phase::Empty);
        prop_assert_eq!(state.has_content(), phase == Phase::Result);
        prop_assert_eq!(state.success_result().is_some(), phase == Phase::Result);
        prop_assert_eq!(state.failure_error().is_some(), phase == Phase::Error);
    }

    #[test]
    fn prop_loading_predicates(state in arb_loading()) {
        let phase = state.phase();
        prop_assert_eq!(state.is_loading(), matches!(phase, Phase::Idle | Phase::Loading));
        prop_assert_eq!(state.is_result(), phase == Phase::Result);
        prop_assert_eq!(state.result().is_some(), phase == Phase::Result);
        prop_assert_eq!(state.error().is_some(), phase == Phase::Error);
    }

    /// Equality is reflexive and symmetric, and never crosses variants.
    #[test]
    fn prop_searchable_equality(lhs in arb_searchable(), rhs in arb_searchable()) {
        prop_assert!(lhs == lhs.clone());
        prop_assert_eq!(lhs == rhs, rhs == lhs);
        if lhs.phase() != rhs.phase() {
            prop_assert!(lhs != rhs);
        }
    }

    /// Error states are equal exactly when their rendered text is.
    #[test]
    fn prop_error_equality_by_text(lhs in arb_failure(), rhs in arb_failure()) {
        let same_text = lhs.render() == rhs.render();
        prop_assert_eq!(
            LoadingState::<i32>::Error(lhs.clone()) == LoadingState::Error(rhs.clone()),
            same_text
        );
        prop_assert_eq!(
            EmptyableLoadingState::<i32>::Error(lhs.clone())
                == EmptyableLoadingState::Error(rhs.clone()),
            same_text
        );
        prop_assert_eq!(
            SearchableLoadingState::<i32>::Error(lhs) == SearchableLoadingState::Error(rhs),
            same_text
        );
    }

    /// Payload and query projections return the constructed values.
    #[test]
    fn prop_projections_return_inputs(query in arb_query(), result in any::<i32>()) {
        let state: SearchableLoadingState<i32> = SearchableLoadingState::SearchResult {
            query: query.clone(),
            result,
        };
        prop_assert_eq!(state.success_result(), Some(&result));
        prop_assert_eq!(state.search_query(), Some(query.as_str()));

        let plain: LoadingState<i32> = LoadingState::Result(result);
        prop_assert_eq!(plain.result(), Some(&result));
    }
}
