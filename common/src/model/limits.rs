use serde::{Deserialize, Serialize};

/// Default upper bound for the effective length of a comment.
pub const DEFAULT_MAX_LENGTH: u32 = 300;

/// Default number of characters an attached photo counts for.
pub const DEFAULT_PHOTO_PENALTY: u32 = 20;

/// Length rules applied by a comment box instance.
///
/// Passed down from the embedding page (as Yew properties in the frontend).
/// Any field missing from a serialized configuration falls back to its
/// default, so `{}` is a valid configuration.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CommentLimits {
    /// Largest effective length for which submitting is allowed.
    pub max_length: u32,
    /// Characters added to the effective length while a photo is attached.
    pub photo_penalty: u32,
}

impl Default for CommentLimits {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            photo_penalty: DEFAULT_PHOTO_PENALTY,
        }
    }
}
