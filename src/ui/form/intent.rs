use crate::api::Drink;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the form dialog.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// "Add New" action: open with empty fields.
    OpenCreate,

    /// "Edit" action on a record: open pre-filled with a snapshot of its
    /// current field values.
    OpenEdit { drink: Drink },

    /// A printable character typed into the focused field.
    Input(char),

    /// Delete the last character of the focused field.
    Backspace,

    /// Move focus to the next field (wrapping).
    FocusNext,

    /// Move focus to the previous field (wrapping).
    FocusPrev,

    /// The payload validated and the remote call was issued.
    SubmitStarted,

    /// The remote call succeeded; the dialog closes.
    SubmitSucceeded,

    /// The remote call failed; the dialog stays open for a retry.
    SubmitFailed,

    /// Client-side validation rejected the payload; nothing was issued.
    Rejected { message: String },

    /// Cancel action or dialog dismissal.
    Cancel,
}

impl Intent for FormIntent {}
