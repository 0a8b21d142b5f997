#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the cpals project.

Do NOT depend on this crate directly.
Use `cpals-io` instead.
"#]

pub mod error;
pub mod fixed;
pub mod single;
pub mod repeating;
pub mod hamming;

pub use error::XorError;
