use crate::api::DrinkId;
use crate::ui::form::fields::FormFields;
use crate::ui::mvi::UiState;

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(DrinkId),
}

/// State of the create/edit form dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormDialogState {
    /// Dialog is not visible.
    #[default]
    Closed,

    /// Dialog is visible.
    Open {
        mode: FormMode,
        /// Field buffers; for edit mode, a snapshot of the record taken
        /// when the dialog opened.
        fields: FormFields,
        /// Index of the focused field.
        focused: usize,
        /// A submission is outstanding; duplicate submits are suppressed.
        submitting: bool,
        /// Client-side validation message shown inside the dialog.
        error: Option<String>,
    },
}

impl UiState for FormDialogState {}

impl FormDialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open { submitting: true, .. })
    }

    /// Dialog title, matching the mode.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Open {
                mode: FormMode::Edit(_),
                ..
            } => "Update Drink",
            _ => "Add New Drink",
        }
    }

    /// Label of the submit action, matching the mode.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Open {
                mode: FormMode::Edit(_),
                ..
            } => "Update",
            _ => "Create",
        }
    }
}
