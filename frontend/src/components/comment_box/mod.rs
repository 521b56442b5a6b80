//! Declarative comment box: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! The view is a pure function of `CommentBoxState`; nothing here writes to
//! the DOM directly.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CommentBoxProps;
pub use state::CommentBoxComponent;

impl Component for CommentBoxComponent {
    type Message = Msg;
    type Properties = CommentBoxProps;

    fn create(ctx: &Context<Self>) -> Self {
        CommentBoxComponent::new(ctx.props().limits)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let limits = ctx.props().limits;
        if limits != old_props.limits {
            self.apply_limits(limits);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
