//! # Application Layer
//!
//! Use cases and the trait seams they depend on (snapshot storage, cloning,
//! progress reporting).

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
