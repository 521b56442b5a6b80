use serde::{Deserialize, Serialize};

/// Label of the photo toggle while no photo is attached.
pub const ADD_PHOTO_LABEL: &str = "Add Photo";

/// Label of the photo toggle while a photo is attached.
pub const PHOTO_ADDED_LABEL: &str = "Photo Added";

/// Everything a renderer needs to draw the widget.
///
/// Renderers must draw strictly from this value; it is produced by
/// [`CommentBoxState::view`](super::comment_box::CommentBoxState::view)
/// after every update.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentBoxView {
    /// Characters left before the limit. Negative once the limit is exceeded.
    pub remaining: i64,
    /// Whether the comment button is enabled.
    pub can_submit: bool,
    /// Whether the photo toggle is on.
    pub photo_attached: bool,
}

impl CommentBoxView {
    pub fn photo_label(&self) -> &'static str {
        if self.photo_attached {
            PHOTO_ADDED_LABEL
        } else {
            ADD_PHOTO_LABEL
        }
    }

    /// Caption shown under the textarea, e.g. `"230 remaining characters."`.
    pub fn remaining_caption(&self) -> String {
        format!("{} remaining characters.", self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_photo_flag() {
        let mut view = CommentBoxView {
            remaining: 300,
            can_submit: false,
            photo_attached: false,
        };
        assert_eq!(view.photo_label(), "Add Photo");
        view.photo_attached = true;
        assert_eq!(view.photo_label(), "Photo Added");
    }

    #[test]
    fn caption_keeps_negative_counts() {
        let view = CommentBoxView {
            remaining: -10,
            can_submit: false,
            photo_attached: true,
        };
        assert_eq!(view.remaining_caption(), "-10 remaining characters.");
    }
}
