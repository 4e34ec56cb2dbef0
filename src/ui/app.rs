use crate::api::worker::{ApiCommand, ApiCommandSender, ApiEvent};
use crate::api::Drink;
use crate::store::DrinkStore;
use crate::ui::confirm::{ConfirmChoice, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::form::{FormDialogState, FormIntent, FormMode, FormReducer};
use crate::ui::mvi::Reducer;
use crate::ui::toast::Toast;
use tracing::warn;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All view state, owned by the running session and torn down with it.
pub struct App {
    should_quit: bool,
    /// The drink collection synchronized with the remote service.
    store: DrinkStore,
    /// List selection index.
    selected: usize,
    /// State of the create/edit form dialog (MVI pattern).
    form: FormDialogState,
    /// State of the delete confirmation dialog (MVI pattern).
    confirm: ConfirmDialogState,
    /// Current transient notification, if any.
    toast: Option<Toast>,
    /// Channel to the mutation dispatcher worker.
    api_sender: Option<ApiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            store: DrinkStore::new(),
            selected: 0,
            form: FormDialogState::default(),
            confirm: ConfirmDialogState::default(),
            toast: None,
            api_sender: None,
        }
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &DrinkStore {
        &self.store
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_drink(&self) -> Option<&Drink> {
        self.store.get(self.selected)
    }

    pub fn form(&self) -> &FormDialogState {
        &self.form
    }

    pub fn confirm(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    /// Move the list selection, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Issue a full-collection read.
    pub fn request_refresh(&mut self) {
        if self.send_command(ApiCommand::Refresh) {
            self.store.begin_refresh();
        }
    }

    /// "Add New Drink" action.
    pub fn open_create(&mut self) {
        self.dispatch_form(FormIntent::OpenCreate);
    }

    /// "Edit" action on the selected record.
    pub fn open_edit_selected(&mut self) {
        let Some(drink) = self.selected_drink().cloned() else {
            return;
        };
        self.dispatch_form(FormIntent::OpenEdit { drink });
    }

    /// "Delete" action on the selected record: opens the confirmation
    /// dialog, issues nothing yet.
    pub fn open_delete_confirm(&mut self) {
        let Some(drink) = self.selected_drink() else {
            return;
        };
        let intent = ConfirmIntent::Open {
            id: drink.id.clone(),
            title: drink.title.clone(),
        };
        self.dispatch_confirm(intent);
    }

    /// Submit the open form: validate client-side, then issue the create
    /// or update matching the dialog mode. Suppressed while a submission
    /// is already outstanding.
    pub fn submit_form(&mut self) {
        let FormDialogState::Open {
            mode,
            fields,
            submitting,
            ..
        } = &self.form
        else {
            return;
        };
        if *submitting {
            return;
        }

        match fields.validate() {
            Ok(draft) => {
                let command = match mode {
                    FormMode::Create => ApiCommand::Create(draft),
                    FormMode::Edit(id) => ApiCommand::Update {
                        id: id.clone(),
                        draft,
                    },
                };
                if self.send_command(command) {
                    self.dispatch_form(FormIntent::SubmitStarted);
                }
            }
            Err(message) => self.dispatch_form(FormIntent::Rejected {
                message: message.to_string(),
            }),
        }
    }

    /// Act on the confirmation dialog's highlighted answer: Yes issues the
    /// delete, No just dismisses. Either way the dialog closes.
    pub fn confirm_delete(&mut self) {
        let ConfirmDialogState::Visible { id, selected, .. } = &self.confirm else {
            return;
        };
        if *selected == ConfirmChoice::Yes {
            let id = id.clone();
            self.send_command(ApiCommand::Delete(id));
        }
        self.dispatch_confirm(ConfirmIntent::Close);
    }

    /// Handle an outcome from the mutation dispatcher.
    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Loaded(drinks) => {
                self.store.replace(drinks);
                self.clamp_selection();
            }
            ApiEvent::LoadFailed(detail) => {
                warn!(%detail, "collection read failed");
                self.store.mark_load_failed();
                self.toast = Some(Toast::error("Failed to load drinks"));
            }
            ApiEvent::Created => {
                self.dispatch_form(FormIntent::SubmitSucceeded);
                self.toast = Some(Toast::success("Drink added successfully"));
            }
            ApiEvent::CreateFailed(detail) => {
                warn!(%detail, "create failed");
                self.dispatch_form(FormIntent::SubmitFailed);
                self.toast = Some(Toast::error("Failed to add drink"));
            }
            ApiEvent::Updated => {
                self.dispatch_form(FormIntent::SubmitSucceeded);
                self.toast = Some(Toast::success("Drink updated successfully"));
            }
            ApiEvent::UpdateFailed(detail) => {
                warn!(%detail, "update failed");
                self.dispatch_form(FormIntent::SubmitFailed);
                self.toast = Some(Toast::error("Failed to update drink"));
            }
            ApiEvent::Deleted => {
                self.toast = Some(Toast::success("Drink deleted"));
            }
            ApiEvent::DeleteFailed(detail) => {
                warn!(%detail, "delete failed");
                self.toast = Some(Toast::error("Failed to delete drink"));
            }
        }
    }

    /// Tick: expire the toast.
    pub fn on_tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.api_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "api command send failed");
                self.toast = Some(Toast::error("Request could not be issued"));
                false
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
