//! Attribute engine, escaping and tag primitives.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "core")]
//! use sticky_forms::core::markup::to_attributes;
//! ```

#[cfg(feature = "core")]
pub use sticky_forms_core::*;
