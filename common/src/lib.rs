//! Platform-independent core of the comment box widget.
//!
//! Shared by every renderer in the `frontend` crate. Nothing in here touches
//! the DOM, so the whole state model is testable on the host.

pub mod model;
