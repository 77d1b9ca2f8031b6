//! Application services for the task draft lifecycle.

mod commit;
mod dialog;

pub use commit::CommitHandler;
pub use dialog::{
    DialogOutcome, DialogSeed, DialogState, TaskDialog, TaskDialogError, TaskDialogResult,
};
