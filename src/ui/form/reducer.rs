use crate::ui::form::fields::{FormFields, FIELD_COUNT};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormDialogState, FormMode};
use crate::ui::mvi::Reducer;

/// Reducer for the form dialog state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormDialogState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Open actions only apply while closed; at most one dialog
            // exists at a time.
            FormIntent::OpenCreate => match state {
                FormDialogState::Closed => FormDialogState::Open {
                    mode: FormMode::Create,
                    fields: FormFields::default(),
                    focused: 0,
                    submitting: false,
                    error: None,
                },
                open => open,
            },

            FormIntent::OpenEdit { drink } => match state {
                FormDialogState::Closed => FormDialogState::Open {
                    mode: FormMode::Edit(drink.id.clone()),
                    fields: FormFields::from_drink(&drink),
                    focused: 0,
                    submitting: false,
                    error: None,
                },
                open => open,
            },

            FormIntent::Input(ch) => match state {
                FormDialogState::Open {
                    mode,
                    mut fields,
                    focused,
                    submitting: false,
                    ..
                } => {
                    fields.push_char(field_at(focused), ch);
                    FormDialogState::Open {
                        mode,
                        fields,
                        focused,
                        submitting: false,
                        error: None,
                    }
                }
                other => other,
            },

            FormIntent::Backspace => match state {
                FormDialogState::Open {
                    mode,
                    mut fields,
                    focused,
                    submitting: false,
                    ..
                } => {
                    fields.pop_char(field_at(focused));
                    FormDialogState::Open {
                        mode,
                        fields,
                        focused,
                        submitting: false,
                        error: None,
                    }
                }
                other => other,
            },

            FormIntent::FocusNext => move_focus(state, 1),
            FormIntent::FocusPrev => move_focus(state, -1),

            FormIntent::SubmitStarted => match state {
                FormDialogState::Open {
                    mode,
                    fields,
                    focused,
                    submitting: false,
                    ..
                } => FormDialogState::Open {
                    mode,
                    fields,
                    focused,
                    submitting: true,
                    error: None,
                },
                other => other,
            },

            FormIntent::SubmitSucceeded | FormIntent::Cancel => FormDialogState::Closed,

            FormIntent::SubmitFailed => match state {
                FormDialogState::Open {
                    mode,
                    fields,
                    focused,
                    ..
                } => FormDialogState::Open {
                    mode,
                    fields,
                    focused,
                    submitting: false,
                    error: None,
                },
                closed => closed,
            },

            FormIntent::Rejected { message } => match state {
                FormDialogState::Open {
                    mode,
                    fields,
                    focused,
                    submitting: false,
                    ..
                } => FormDialogState::Open {
                    mode,
                    fields,
                    focused,
                    submitting: false,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}

fn field_at(focused: usize) -> crate::ui::form::fields::Field {
    crate::ui::form::fields::Field::ALL[focused.min(FIELD_COUNT - 1)]
}

fn move_focus(state: FormDialogState, direction: i32) -> FormDialogState {
    match state {
        FormDialogState::Open {
            mode,
            fields,
            focused,
            submitting: false,
            error,
        } => {
            let next = if direction.is_negative() {
                if focused == 0 {
                    FIELD_COUNT - 1
                } else {
                    focused - 1
                }
            } else if focused + 1 >= FIELD_COUNT {
                0
            } else {
                focused + 1
            };
            FormDialogState::Open {
                mode,
                fields,
                focused: next,
                submitting: false,
                error,
            }
        }
        other => other,
    }
}
