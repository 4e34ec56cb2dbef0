use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::{ConfirmChoice, ConfirmDialogState};
use crate::ui::mvi::Reducer;

/// Reducer for the confirmation dialog state transitions.
///
/// Whether an affirmed dialog actually issues the delete is the app's
/// business; the reducer only tracks visibility and the highlight.
pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open { id, title } => ConfirmDialogState::Visible {
                id,
                title,
                selected: ConfirmChoice::default(),
            },

            ConfirmIntent::ToggleChoice => match state {
                ConfirmDialogState::Visible {
                    id,
                    title,
                    selected,
                } => ConfirmDialogState::Visible {
                    id,
                    title,
                    selected: match selected {
                        ConfirmChoice::Yes => ConfirmChoice::No,
                        ConfirmChoice::No => ConfirmChoice::Yes,
                    },
                },
                hidden => hidden,
            },

            ConfirmIntent::Select(choice) => match state {
                ConfirmDialogState::Visible { id, title, .. } => ConfirmDialogState::Visible {
                    id,
                    title,
                    selected: choice,
                },
                hidden => hidden,
            },

            ConfirmIntent::Close => ConfirmDialogState::Hidden,
        }
    }
}
