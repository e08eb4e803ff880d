//! Tests for the page view-state reducer

use cakematrix::application::{reduce, Action, ViewState};
use cakematrix::domain::{emoji, BranchingMode};

fn apply(state: ViewState, actions: Vec<Action>) -> ViewState {
    actions
        .into_iter()
        .fold(state, |state, action| reduce(&state, action))
}

#[test]
fn given_open_selector_when_selecting_emoji_then_selected_and_closed() {
    let state = apply(
        ViewState::default(),
        vec![
            Action::ToggleEmojiSelector,
            Action::SelectEmoji("🦊".to_string()),
        ],
    );

    assert_eq!(state.selected_emoji, "🦊");
    assert!(!state.emoji_selector_open);
}

#[test]
fn given_unknown_emoji_when_selecting_then_state_unchanged() {
    let open = reduce(&ViewState::default(), Action::ToggleEmojiSelector);

    let next = reduce(&open, Action::SelectEmoji("not-an-emoji".to_string()));

    assert_eq!(next, open);
}

#[test]
fn given_page_past_end_when_paging_then_clamped_to_last_page() {
    let state = reduce(&ViewState::default(), Action::SetEmojiPage(7));
    assert_eq!(state.emoji_page, emoji::page_count() - 1);
}

#[test]
fn given_level_tabs_when_selecting_then_only_valid_levels_apply() {
    let state = reduce(&ViewState::default(), Action::SelectLevel(3));
    assert_eq!(state.current_level, 3);

    assert_eq!(reduce(&state, Action::SelectLevel(0)).current_level, 3);
    assert_eq!(reduce(&state, Action::SelectLevel(6)).current_level, 3);
}

#[test]
fn given_input_when_calculating_then_result_is_stored() {
    let state = apply(
        ViewState::default(),
        vec![
            Action::OpenCalculator,
            Action::SetCalculatorInput("1".to_string()),
            Action::Calculate,
        ],
    );

    assert!(state.calculator_open);
    let result = state.calculator_result.expect("result");
    assert_eq!(result.total_network, 121);
    assert_eq!(result.total_income, 266);
}

#[test]
fn given_result_when_input_changes_then_result_is_cleared() {
    let calculated = apply(
        ViewState::default(),
        vec![Action::SetCalculatorInput("5".to_string()), Action::Calculate],
    );
    assert!(calculated.calculator_result.is_some());

    let edited = reduce(&calculated, Action::SetCalculatorInput("6".to_string()));
    assert!(edited.calculator_result.is_none());

    let same = reduce(&calculated, Action::SetCalculatorInput("5".to_string()));
    assert!(same.calculator_result.is_some());
}

#[test]
fn given_result_when_mode_changes_then_result_is_cleared() {
    let calculated = apply(
        ViewState::default(),
        vec![Action::SetCalculatorInput("2".to_string()), Action::Calculate],
    );

    let unchanged = reduce(&calculated, Action::SetCalculatorMode(BranchingMode::LinearTriple));
    assert!(unchanged.calculator_result.is_some());

    let switched = reduce(&calculated, Action::SetCalculatorMode(BranchingMode::LinearTen));
    assert_eq!(switched.calculator_mode, BranchingMode::LinearTen);
    assert!(switched.calculator_result.is_none());

    let recalculated = reduce(&switched, Action::Calculate);
    assert_eq!(
        recalculated.calculator_result.map(|r| r.total_network),
        Some(22_222)
    );
}

#[test]
fn given_non_numeric_input_when_calculating_then_no_result() {
    let state = apply(
        ViewState::default(),
        vec![
            Action::SetCalculatorInput("abc".to_string()),
            Action::Calculate,
        ],
    );
    assert!(state.calculator_result.is_none());
}

#[test]
fn given_income_modal_when_toggled_then_opens_and_closes() {
    let open = reduce(&ViewState::default(), Action::OpenIncomeModal);
    assert!(open.income_modal_open);
    assert!(!reduce(&open, Action::CloseIncomeModal).income_modal_open);
}
