//! Component state for the declarative comment box.

use common::model::comment_box::CommentBoxState;
use common::model::limits::CommentLimits;
use yew::prelude::*;

/// State container for `CommentBoxComponent`.
///
/// Fields are `pub` because they are read by the `view` and `update` modules.
pub struct CommentBoxComponent {
    /// Length and photo flag; everything rendered is derived from it.
    pub state: CommentBoxState,

    /// Reference to the `<textarea>` DOM node.
    pub textarea_ref: NodeRef,
}

impl CommentBoxComponent {
    pub fn new(limits: CommentLimits) -> Self {
        Self {
            state: CommentBoxState::with_limits(limits),
            textarea_ref: Default::default(),
        }
    }

    /// Swaps in new limits while keeping what the user already entered.
    pub fn apply_limits(&mut self, limits: CommentLimits) {
        self.state.set_limits(limits);
    }
}
