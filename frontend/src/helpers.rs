//! Small utilities shared by both comment box renderers.
//!
//! - Reading the textarea value out of an `input` event.
//! - Unique DOM ids for widget instances, so two widgets on one page never
//!   share a selector.
//! - Console logging of render snapshots.

use common::model::view::CommentBoxView;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

/// Prefix of every id generated by [`instance_id`].
pub const INSTANCE_ID_PREFIX: &str = "comment-box-";

/// Returns the full current value of the textarea that fired `event`.
///
/// Falls back to an empty string when the event did not come from a
/// textarea, which the length logic treats as "nothing typed".
pub fn textarea_value(event: &InputEvent) -> String {
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|textarea| textarea.value())
        .unwrap_or_default()
}

/// Generates a DOM id unique to one widget instance.
pub fn instance_id() -> String {
    format!("{}{}", INSTANCE_ID_PREFIX, uuid::Uuid::new_v4())
}

/// Formats a snapshot for the console, e.g. `[imperative] {"remaining":230,...}`.
pub fn format_view(source: &str, view: &CommentBoxView) -> Result<String, serde_json::Error> {
    Ok(format!("[{}] {}", source, serde_json::to_string(view)?))
}

/// Writes a snapshot to the browser console at debug level.
pub fn log_view(source: &str, view: &CommentBoxView) {
    match format_view(source, view) {
        Ok(line) => gloo_console::debug!(line),
        Err(e) => gloo_console::error!(format!("[{}] could not serialize view: {}", source, e)),
    }
}
