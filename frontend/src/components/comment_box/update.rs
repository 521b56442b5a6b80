//! Update function for the declarative comment box.
//!
//! Elm-style: applies the message to the state, notifies the parent through
//! `on_change`, and asks Yew to re-render.

use common::model::comment_box::CommentBoxState;
use common::model::view::CommentBoxView;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CommentBoxComponent;

pub fn update(
    component: &mut CommentBoxComponent,
    ctx: &Context<CommentBoxComponent>,
    msg: Msg,
) -> bool {
    let view = apply(&mut component.state, msg);
    ctx.props().on_change.emit(view);
    true
}

/// Applies `msg` to `state` and returns the snapshot to render and emit.
pub fn apply(state: &mut CommentBoxState, msg: Msg) -> CommentBoxView {
    match msg {
        Msg::TextChanged(text) => state.on_text_changed(&text),
        Msg::TogglePhoto => state.on_photo_toggled(),
    }
    state.view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn text_message_returns_fresh_view() {
        let mut state = CommentBoxState::new();
        let view = apply(&mut state, Msg::TextChanged("x".repeat(50)));
        assert_eq!(view.remaining, 250);
        assert!(view.can_submit);
        assert_eq!(view, state.view());
    }

    #[test]
    fn toggle_message_flips_photo_and_back() {
        let mut state = CommentBoxState::new();
        let on = apply(&mut state, Msg::TogglePhoto);
        assert!(on.photo_attached);
        assert_eq!(on.remaining, 280);
        assert!(on.can_submit);

        let off = apply(&mut state, Msg::TogglePhoto);
        assert!(!off.photo_attached);
        assert_eq!(off.remaining, 300);
        assert!(!off.can_submit);
    }

    #[test]
    fn emitted_views_track_every_message() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = Rc::clone(&seen);
            Callback::from(move |view: CommentBoxView| seen.borrow_mut().push(view))
        };

        let mut state = CommentBoxState::new();
        for msg in [
            Msg::TextChanged("a".repeat(290)),
            Msg::TogglePhoto,
            Msg::TextChanged(String::new()),
        ] {
            on_change.emit(apply(&mut state, msg));
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].remaining, 10);
        assert_eq!(seen[1].remaining, -10);
        assert!(!seen[1].can_submit);
        assert_eq!(seen[2].remaining, 280);
        assert!(seen[2].can_submit);
    }

    #[test]
    fn limit_change_keeps_entered_input() {
        let mut component = CommentBoxComponent::new(Default::default());
        apply(&mut component.state, Msg::TextChanged("a".repeat(50)));
        apply(&mut component.state, Msg::TogglePhoto);

        component.apply_limits(common::model::limits::CommentLimits {
            max_length: 60,
            photo_penalty: 20,
        });

        assert_eq!(component.state.text_length(), 50);
        assert!(component.state.photo_attached());
        assert_eq!(component.state.remaining(), -10);
        assert!(!component.state.can_submit());
    }
}
