//! Imperative comment box built directly on `web-sys`.
//!
//! The widget creates its own markup under a host element, listens for
//! `input` and `click` events, and redraws from a `CommentBoxView` pushed by
//! the observer registry in `common`. Each instance owns its state; nothing
//! is shared between widgets on the same page.

use std::cell::RefCell;
use std::rc::Rc;

use common::model::limits::CommentLimits;
use common::model::observer::CommentBox;
use common::model::view::CommentBoxView;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlTextAreaElement};

use crate::helpers::{instance_id, log_view};

/// Nodes rewritten on every update.
struct Outputs {
    count: Element,
    photo_btn: Element,
    comment_btn: HtmlButtonElement,
}

impl Outputs {
    fn render(&self, view: &CommentBoxView) {
        self.count.set_text_content(Some(&view.remaining.to_string()));
        self.photo_btn.set_text_content(Some(view.photo_label()));
        self.comment_btn.set_disabled(!view.can_submit);
    }
}

/// A mounted imperative comment box. Dropping it unmounts the widget.
pub struct DomCommentBox {
    root: Element,
    textarea: HtmlTextAreaElement,
    photo_btn: Element,
    on_input: Closure<dyn FnMut(Event)>,
    on_photo_click: Closure<dyn FnMut(Event)>,
}

impl DomCommentBox {
    /// Builds the widget as the last child of `host`.
    pub fn mount(host: &Element, limits: CommentLimits) -> Result<Self, JsValue> {
        let document = host
            .owner_document()
            .ok_or_else(|| JsValue::from_str("host element has no owner document"))?;

        let root = create(&document, "div", "well clearfix")?;
        root.set_id(&instance_id());

        let textarea = create(&document, "textarea", "form-control")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(JsValue::from)?;

        let caption = document.create_element("span")?;
        let count = create(&document, "span", "count")?;
        caption.append_child(&count)?;
        caption.insert_adjacent_text("beforeend", " remaining characters.")?;

        let photo_btn = create(&document, "button", "btn btn-primary pull-right photo-btn")?;
        let comment_btn = create(&document, "button", "btn btn-primary pull-right comment-btn")?
            .dyn_into::<HtmlButtonElement>()
            .map_err(JsValue::from)?;
        comment_btn.set_text_content(Some("Comment"));

        let line_break = document.create_element("br")?;
        root.append_child(&textarea)?;
        root.append_child(&line_break)?;
        root.append_child(&caption)?;
        root.append_child(&photo_btn)?;
        root.append_child(&comment_btn)?;

        let comment_box = Rc::new(RefCell::new(CommentBox::new(limits)));
        let outputs = Outputs {
            count,
            photo_btn: photo_btn.clone(),
            comment_btn,
        };
        outputs.render(&comment_box.borrow().view());
        comment_box.borrow_mut().subscribe(move |view| {
            log_view("imperative", view);
            outputs.render(view);
        });

        let on_input = {
            let comment_box = Rc::clone(&comment_box);
            let textarea = textarea.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                comment_box.borrow_mut().text_changed(&textarea.value());
            })
        };
        textarea.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;

        // The closures own the state from here on.
        let on_photo_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            comment_box.borrow_mut().toggle_photo();
        });
        photo_btn
            .add_event_listener_with_callback("click", on_photo_click.as_ref().unchecked_ref())?;

        host.append_child(&root)?;

        Ok(Self {
            root,
            textarea,
            photo_btn,
            on_input,
            on_photo_click,
        })
    }

    pub fn id(&self) -> String {
        self.root.id()
    }
}

impl Drop for DomCommentBox {
    fn drop(&mut self) {
        let _ = self
            .textarea
            .remove_event_listener_with_callback("input", self.on_input.as_ref().unchecked_ref());
        let _ = self.photo_btn.remove_event_listener_with_callback(
            "click",
            self.on_photo_click.as_ref().unchecked_ref(),
        );
        self.root.remove();
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}
