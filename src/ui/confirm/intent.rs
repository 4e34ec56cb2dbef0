use crate::api::DrinkId;
use crate::ui::confirm::state::ConfirmChoice;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the confirmation dialog.
#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Delete was invoked on a record; ask before issuing anything.
    Open { id: DrinkId, title: String },

    /// Move the highlight between Yes and No.
    ToggleChoice,

    /// Jump the highlight to a specific answer.
    Select(ConfirmChoice),

    /// Dismiss without any request ("no" answer or escape).
    Close,
}

impl Intent for ConfirmIntent {}
