/// The two input events of the widget.
#[derive(Clone, Debug)]
pub enum Msg {
    /// Full current contents of the textarea.
    TextChanged(String),
    TogglePhoto,
}
