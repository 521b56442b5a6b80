//! State of a single comment box.
//!
//! Only the two primitive inputs are stored: how long the typed text is and
//! whether the photo toggle is on. The effective length, the remaining count
//! and the submit flag are derived on every read, so repeated toggles can
//! never make them drift apart.

use super::limits::CommentLimits;
use super::view::CommentBoxView;

/// Per-instance state of a comment box widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommentBoxState {
    text_length: usize,
    photo_attached: bool,
    limits: CommentLimits,
}

impl CommentBoxState {
    /// Empty text, no photo, default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: CommentLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Records the full current contents of the text field.
    ///
    /// Length is counted in UTF-16 code units, the unit a browser textarea
    /// reports for `value.length`.
    pub fn on_text_changed(&mut self, new_text: &str) {
        self.text_length = text_length(new_text);
    }

    /// Replaces the limits. The typed length and photo flag are kept; every
    /// derived value follows the new limits on the next read.
    pub fn set_limits(&mut self, limits: CommentLimits) {
        self.limits = limits;
    }

    /// Flips the photo toggle.
    pub fn on_photo_toggled(&mut self) {
        self.photo_attached = !self.photo_attached;
    }

    pub fn text_length(&self) -> usize {
        self.text_length
    }

    pub fn photo_attached(&self) -> bool {
        self.photo_attached
    }

    pub fn limits(&self) -> CommentLimits {
        self.limits
    }

    /// Typed length plus the photo penalty while a photo is attached.
    ///
    /// No clamping: limits are `u32`, and any text that can actually be
    /// allocated is far shorter than `i64::MAX - u32::MAX` code units, so
    /// both this sum and `remaining` are exact.
    pub fn effective_length(&self) -> u64 {
        let penalty = if self.photo_attached {
            u64::from(self.limits.photo_penalty)
        } else {
            0
        };
        self.text_length as u64 + penalty
    }

    /// Characters left before the limit; negative when over it.
    pub fn remaining(&self) -> i64 {
        i64::from(self.limits.max_length) - self.effective_length() as i64
    }

    /// True iff the effective length is in `(0, max_length]`.
    pub fn can_submit(&self) -> bool {
        let effective = self.effective_length();
        effective > 0 && effective <= u64::from(self.limits.max_length)
    }

    pub fn view(&self) -> CommentBoxView {
        CommentBoxView {
            remaining: self.remaining(),
            can_submit: self.can_submit(),
            photo_attached: self.photo_attached,
        }
    }
}

/// Length of `text` as a browser would report it.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}
