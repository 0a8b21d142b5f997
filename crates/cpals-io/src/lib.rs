//! `cpals-io` is the single supported public entrypoint for the cpals codecs,
//! XOR primitives, and the XOR attacks built on them.
//!
//! It adds the pieces the internal crates leave out:
//! - line-oriented input parsing (hex per line, wrapped base64)
//! - serialisable reports for attack results

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `cpals_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

/// Hex and base64 codecs.
#[doc(hidden)]
pub mod codec {
    pub use cpals_codec::convert::{base64_to_hex, hex_to_base64};
    pub use cpals_codec::{Base64Error, HexError, base64, hex};
}

/// XOR primitives.
#[doc(hidden)]
pub mod xor {
    pub use cpals_xor::{XorError, fixed, hamming, repeating, single};
}

/// Plaintext scoring.
#[doc(hidden)]
pub mod freq {
    pub use cpals_freq::{ENGLISH_FREQ, english_likeness, printable_ratio, score};
}

/// XOR attacks.
#[doc(hidden)]
pub mod crack {
    pub use cpals_crack::repeating::{rank_key_sizes, shortest_period, transpose};
    pub use cpals_crack::{
        CrackError, Detection, KeySizeOptions, KeySizeScore, RepeatingKey, SingleByteKey,
        detect_single_byte, repeating, single_byte,
    };
}

/// Line-oriented input parsing.
pub mod input;

/// Serialisable attack reports.
pub mod report;

/// Report format version.
pub mod version;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::codec::{Base64Error, HexError, base64, base64_to_hex, hex, hex_to_base64};
    pub use crate::crack::{
        CrackError, Detection, KeySizeOptions, KeySizeScore, RepeatingKey, SingleByteKey,
        detect_single_byte, rank_key_sizes, repeating as repeating_attack, shortest_period, single_byte,
        transpose,
    };
    pub use crate::freq::{english_likeness, printable_ratio, score};
    pub use crate::input::{HexLine, InputError, read_base64_lines, read_hex_lines};
    pub use crate::report::{DetectionHit, DetectionReport, RepeatingKeyReport, SingleByteReport};
    pub use crate::xor::{XorError, fixed, hamming, repeating, single};
    pub use crate::{report, version};
}
