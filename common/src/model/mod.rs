pub mod comment_box;
pub mod limits;
pub mod observer;
pub mod view;
