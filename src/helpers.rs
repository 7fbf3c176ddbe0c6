//! Request-aware form tag helpers.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "helpers")]
//! use sticky_forms::helpers::options::STATE_CODES;
//! ```

#[cfg(feature = "helpers")]
pub use sticky_forms_helpers::*;
