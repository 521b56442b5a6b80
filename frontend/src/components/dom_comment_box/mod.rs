//! Yew host for the imperative comment box.
//!
//! Renders an empty container and, once it is in the document, hands it to
//! `DomCommentBox::mount`. Yew never touches the children the widget creates.

use common::model::limits::CommentLimits;
use yew::prelude::*;

mod widget;

pub use widget::DomCommentBox;

#[derive(Properties, PartialEq, Clone)]
pub struct DomCommentBoxProps {
    #[prop_or_default]
    pub limits: CommentLimits,
}

pub struct DomCommentBoxHost {
    host_ref: NodeRef,
    widget: Option<DomCommentBox>,
}

impl Component for DomCommentBoxHost {
    type Message = ();
    type Properties = DomCommentBoxProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            host_ref: NodeRef::default(),
            widget: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().limits != old_props.limits {
            // Remounted with the new limits in `rendered`.
            self.widget = None;
            return true;
        }
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="dom-comment-box" ref={self.host_ref.clone()} />
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.widget.is_some() {
            return;
        }
        let Some(host) = self.host_ref.cast::<web_sys::Element>() else {
            return;
        };
        match DomCommentBox::mount(&host, ctx.props().limits) {
            Ok(widget) => {
                gloo_console::log!(format!("mounted comment box {}", widget.id()));
                self.widget = Some(widget);
            }
            Err(e) => gloo_console::error!("failed to mount comment box", e),
        }
    }
}
