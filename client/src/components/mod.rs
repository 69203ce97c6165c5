//! Page widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns its widget state in a local signal and renders the
//! markup it attaches to. Widgets never call each other.

pub mod accordion;
pub mod booking_form;
pub mod carousel;
pub mod gallery;
pub mod newsletter_form;
pub mod reveal;
pub mod rules_tabs;
pub mod scoreboard;
pub mod site_footer;
pub mod site_nav;
