//! Widget state machines for the venue page.
//!
//! DESIGN
//! ======
//! Each widget owns one plain state object. Components wrap it in an
//! `RwSignal` and only mutate it through the methods defined here, so every
//! rule (clamping, wraparound, one-shot reveals, single live timer) is
//! testable without a browser.

pub mod accordion;
pub mod booking;
pub mod carousel;
pub mod form_status;
pub mod lightbox;
pub mod nav;
pub mod newsletter;
pub mod reveal;
pub mod scoreboard;
pub mod tabs;
