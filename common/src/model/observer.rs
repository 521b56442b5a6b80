//! Observer registry wrapped around [`CommentBoxState`].
//!
//! Renderers that mutate the page themselves (rather than re-running a view
//! function) subscribe here and get a fresh [`CommentBoxView`] after every
//! update.

use super::comment_box::CommentBoxState;
use super::limits::CommentLimits;
use super::view::CommentBoxView;

/// Handle returned by [`CommentBox::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CommentBoxView)>;

/// A comment box state plus the listeners interested in it.
pub struct CommentBox {
    state: CommentBoxState,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl CommentBox {
    pub fn new(limits: CommentLimits) -> Self {
        Self {
            state: CommentBoxState::with_limits(limits),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `listener`; it is called after each update, in subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CommentBoxView) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn text_changed(&mut self, new_text: &str) {
        self.state.on_text_changed(new_text);
        self.notify();
    }

    pub fn toggle_photo(&mut self) {
        self.state.on_photo_toggled();
        self.notify();
    }

    pub fn state(&self) -> &CommentBoxState {
        &self.state
    }

    pub fn view(&self) -> CommentBoxView {
        self.state.view()
    }

    fn notify(&mut self) {
        let view = self.state.view();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&view);
        }
    }
}

impl Default for CommentBox {
    fn default() -> Self {
        Self::new(CommentLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<CommentBoxView>>>, impl FnMut(&CommentBoxView)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |view: &CommentBoxView| sink.borrow_mut().push(*view))
    }

    #[test]
    fn every_update_notifies_once() {
        let mut comment_box = CommentBox::default();
        let (seen, listener) = recorder();
        comment_box.subscribe(listener);

        comment_box.text_changed(&"x".repeat(50));
        comment_box.toggle_photo();
        comment_box.toggle_photo();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].remaining, 250);
        assert_eq!(seen[1].remaining, 230);
        assert!(seen[1].photo_attached);
        assert_eq!(seen[2], seen[0]);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let mut comment_box = CommentBox::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            comment_box.subscribe(move |_| order.borrow_mut().push(tag));
        }

        comment_box.toggle_photo();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut comment_box = CommentBox::default();
        let (seen, listener) = recorder();
        let id = comment_box.subscribe(listener);

        comment_box.text_changed("a");
        assert!(comment_box.unsubscribe(id));
        assert!(!comment_box.unsubscribe(id));
        comment_box.text_changed("ab");

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(comment_box.state().text_length(), 2);
    }

    #[test]
    fn view_is_consistent_with_state() {
        let mut comment_box = CommentBox::new(CommentLimits {
            max_length: 5,
            photo_penalty: 2,
        });
        comment_box.text_changed("abcd");
        comment_box.toggle_photo();
        let view = comment_box.view();
        assert_eq!(view.remaining, -1);
        assert!(!view.can_submit);
        assert_eq!(view, comment_box.state().view());
    }
}
