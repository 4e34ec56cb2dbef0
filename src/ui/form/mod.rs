//! Create/edit form dialog: a small state machine governing whether the
//! form is visible, which record (if any) it is editing, and the in-flight
//! submission flag.

pub mod dialog;
mod fields;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use fields::{Field, FormFields, FIELD_COUNT};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormDialogState, FormMode};
