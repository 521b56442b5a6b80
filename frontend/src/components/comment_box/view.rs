//! View rendering for the declarative comment box.
//!
//! Markup: textarea, remaining-characters caption, photo toggle and the
//! comment button. Every dynamic value comes from `CommentBoxView`.

use super::messages::Msg;
use super::state::CommentBoxComponent;
use crate::helpers::textarea_value;
use yew::prelude::*;

pub fn view(component: &CommentBoxComponent, ctx: &Context<CommentBoxComponent>) -> Html {
    let link = ctx.link();
    let view = component.state.view();

    html! {
        <div class="well clearfix">
            <textarea
                ref={component.textarea_ref.clone()}
                class="form-control"
                oninput={link.callback(|e: InputEvent| Msg::TextChanged(textarea_value(&e)))}
            />
            <br />
            <span class="count">{ view.remaining_caption() }</span>
            <button
                class="btn btn-primary pull-right photo-btn"
                onclick={link.callback(|_| Msg::TogglePhoto)}
            >
                { view.photo_label() }
            </button>
            <button class="btn btn-primary pull-right comment-btn" disabled={!view.can_submit}>
                { "Comment" }
            </button>
        </div>
    }
}
