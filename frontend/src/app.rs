use crate::components::comment_box::CommentBoxComponent;
use crate::components::dom_comment_box::DomCommentBoxHost;
use crate::helpers::log_view;
use common::model::view::CommentBoxView;
use yew::{html, Callback, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let on_change = Callback::from(|view: CommentBoxView| log_view("declarative", &view));

        html! {
            <div class="comment-box-demo">
                <section>
                    <h2>{"Declarative"}</h2>
                    <CommentBoxComponent {on_change} />
                </section>
                <section>
                    <h2>{"Imperative"}</h2>
                    <DomCommentBoxHost />
                </section>
            </div>
        }
    }
}
