use crate::api::DrinkId;
use crate::ui::mvi::UiState;

/// The answer currently highlighted in the dialog.
///
/// Defaults to `No`: affirming a destructive action takes a deliberate
/// keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    Yes,
    #[default]
    No,
}

/// State of the delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        /// Record the confirmation is about.
        id: DrinkId,
        /// Its title, for the prompt text.
        title: String,
        selected: ConfirmChoice,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(ConfirmDialogState::default(), ConfirmDialogState::Hidden);
    }

    #[test]
    fn no_is_the_default_choice() {
        assert_eq!(ConfirmChoice::default(), ConfirmChoice::No);
    }

    #[test]
    fn visibility_check() {
        assert!(!ConfirmDialogState::Hidden.is_visible());
        assert!(ConfirmDialogState::Visible {
            id: DrinkId::new("7"),
            title: "Cola".into(),
            selected: ConfirmChoice::No,
        }
        .is_visible());
    }
}
