#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the cpals project.

Do NOT depend on this crate directly.
Use `cpals-io` instead.
"#]

pub mod error;
pub mod options;
pub mod single_byte;
pub mod detect;
pub mod repeating;

pub use error::CrackError;
pub use options::KeySizeOptions;
pub use single_byte::SingleByteKey;
pub use detect::{Detection, detect_single_byte};
pub use repeating::{KeySizeScore, RepeatingKey};
