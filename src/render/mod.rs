//! Result rendering.
//!
//! [`project`] turns the controller's state into a [`View`]; the TUI and the
//! plain-text printer only ever draw a `View`, never the state itself.

mod text;
mod view;

pub use text::to_plain_text;
pub use view::{
    AnswerView, Citations, ERROR_PREFIX, NO_CITATIONS, Output, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
    SubmitControl, View, citation_line, project,
};
