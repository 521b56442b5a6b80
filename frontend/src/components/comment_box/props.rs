//! Properties accepted by `CommentBoxComponent`.

use common::model::limits::CommentLimits;
use common::model::view::CommentBoxView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CommentBoxProps {
    /// Length rules for this instance. Defaults to 300 characters with a
    /// 20 character photo penalty.
    #[prop_or_default]
    pub limits: CommentLimits,

    /// Called with the new snapshot after every text change or photo toggle.
    #[prop_or_default]
    pub on_change: Callback<CommentBoxView>,
}
