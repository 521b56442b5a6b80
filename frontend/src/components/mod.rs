pub mod comment_box;
pub mod dom_comment_box;
