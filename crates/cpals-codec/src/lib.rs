#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the cpals project.

Do NOT depend on this crate directly.
Use `cpals-io` instead.
"#]

pub mod error;
pub mod hex;
pub mod base64;
pub mod convert;

pub use error::{Base64Error, HexError};
