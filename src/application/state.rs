//! Page view state as an immutable value driven by actions
//!
//! Every interaction is an [`Action`]; [`reduce`] returns the next state and
//! never mutates the previous one.

use crate::domain::{emoji, parse_seed_count, project, BranchingMode, ProjectionResult, LEVELS};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub selected_emoji: String,
    pub emoji_selector_open: bool,
    /// Zero-based picker page
    pub emoji_page: usize,
    /// One-based matrix level tab
    pub current_level: usize,
    pub calculator_open: bool,
    pub calculator_mode: BranchingMode,
    pub calculator_input: String,
    pub calculator_result: Option<ProjectionResult>,
    pub income_modal_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_emoji: emoji::DEFAULT_EMOJI.to_string(),
            emoji_selector_open: false,
            emoji_page: 0,
            current_level: 1,
            calculator_open: false,
            calculator_mode: BranchingMode::default(),
            calculator_input: String::new(),
            calculator_result: None,
            income_modal_open: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleEmojiSelector,
    SetEmojiPage(usize),
    SelectEmoji(String),
    SelectLevel(usize),
    OpenCalculator,
    CloseCalculator,
    SetCalculatorMode(BranchingMode),
    SetCalculatorInput(String),
    Calculate,
    OpenIncomeModal,
    CloseIncomeModal,
}

/// Apply `action` to `state`, returning the new state.
///
/// Invalid requests (unknown emoji, level outside 1..=5) leave the state unchanged.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::ToggleEmojiSelector => next.emoji_selector_open = !state.emoji_selector_open,
        Action::SetEmojiPage(page) => next.emoji_page = page.min(emoji::page_count() - 1),
        Action::SelectEmoji(selected) => {
            if emoji::is_known(&selected) {
                next.selected_emoji = selected;
                next.emoji_selector_open = false;
            }
        }
        Action::SelectLevel(level) => {
            if (1..=LEVELS).contains(&level) {
                next.current_level = level;
            }
        }
        Action::OpenCalculator => next.calculator_open = true,
        Action::CloseCalculator => next.calculator_open = false,
        Action::SetCalculatorMode(mode) => {
            if mode != state.calculator_mode {
                next.calculator_mode = mode;
                next.calculator_result = None;
            }
        }
        Action::SetCalculatorInput(input) => {
            if input != state.calculator_input {
                next.calculator_input = input;
                next.calculator_result = None;
            }
        }
        Action::Calculate => {
            let seed_count = parse_seed_count(&state.calculator_input);
            next.calculator_result = project(seed_count, state.calculator_mode);
        }
        Action::OpenIncomeModal => next.income_modal_open = true,
        Action::CloseIncomeModal => next.income_modal_open = false,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_state_then_ninja_and_level_one() {
        let state = ViewState::default();
        assert_eq!(state.selected_emoji, "🥷");
        assert_eq!(state.current_level, 1);
        assert_eq!(state.calculator_mode, BranchingMode::LinearTriple);
    }

    #[test]
    fn given_action_then_previous_state_is_untouched() {
        let before = ViewState::default();
        let after = reduce(&before, Action::OpenIncomeModal);
        assert!(!before.income_modal_open);
        assert!(after.income_modal_open);
    }
}
