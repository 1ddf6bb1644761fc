pub mod api;
pub mod cli;
pub mod logging;
pub mod query;
pub mod render;
pub mod tui;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{AnswerResult, ApiError, AskClient, AskClientBuilder, AskClientTrait, Citation};
pub use query::{Phase, QueryController, QueryState};
pub use render::{View, project, to_plain_text};
