//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so widget rules stay testable off the browser.

pub mod dom;
pub mod scroll;
pub mod validation;
#[cfg(feature = "hydrate")]
pub mod viewport;
