//! Plain-text rendering of a [`View`] for non-interactive output.

use super::view::{Citations, ERROR_PREFIX, NO_CITATIONS, Output, View};

/// Renders the output region of a view as plain text.
///
/// Returns an empty string when there is nothing to show. The context
/// preview is copied verbatim, including its whitespace.
pub fn to_plain_text(view: &View) -> String {
    match &view.output {
        Output::Empty => String::new(),
        Output::Error(message) => format!("{ERROR_PREFIX} {message}\n"),
        Output::Answer(answer) => {
            let mut out = String::new();
            out.push_str(&format!("Mode: {}\n\n", answer.mode));
            out.push_str("Answer\n");
            out.push_str(&answer.answer);
            out.push_str("\n\nCitations\n");
            match &answer.citations {
                Citations::Lines(lines) => {
                    for line in lines {
                        out.push_str(&format!("- {line}\n"));
                    }
                }
                Citations::Empty => {
                    out.push_str(NO_CITATIONS);
                    out.push('\n');
                }
            }
            if let Some(preview) = &answer.context_preview {
                out.push_str("\nRetrieved Context Preview\n");
                out.push_str(preview);
                out.push('\n');
            }
            out
        }
    }
}
