//! JSON-friendly views of attack results.
//!
//! Keys are lowercase hex; plaintexts are lossy UTF-8 so binary noise never
//! breaks serialisation.

use cpals_codec::hex;
use cpals_crack::{Detection, RepeatingKey, SingleByteKey};
use serde::{Deserialize, Serialize};

use crate::input::HexLine;
use crate::version::CPALS_REPORT_V;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleByteReport {
    pub v: u8,
    /// Key byte as two hex digits.
    pub key: String,
    pub score: f64,
    pub plaintext: String,
}

impl SingleByteReport {
    pub fn from_key(found: &SingleByteKey) -> Self {
        Self {
            v: CPALS_REPORT_V,
            key: hex::encode(&[found.key]),
            score: found.score,
            plaintext: lossy(&found.plaintext),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionHit {
    /// 1-based source line of the candidate.
    pub line: usize,
    pub key: String,
    pub score: f64,
    pub plaintext: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub v: u8,
    /// Candidates considered.
    pub candidates: usize,
    /// Best hits first.
    pub hits: Vec<DetectionHit>,
}

impl DetectionReport {
    /// Build a report from detections over `lines`, keeping the `top` best.
    ///
    /// `Detection::index` is resolved to the source line through `lines`.
    pub fn from_detections(detections: &[Detection], lines: &[HexLine], top: usize) -> Self {
        let hits = detections
            .iter()
            .take(top)
            .map(|d| DetectionHit {
                line: lines.get(d.index).map_or(d.index + 1, |l| l.line),
                key: hex::encode(&[d.key.key]),
                score: d.key.score,
                plaintext: lossy(&d.key.plaintext),
            })
            .collect();

        Self {
            v: CPALS_REPORT_V,
            candidates: lines.len(),
            hits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatingKeyReport {
    pub v: u8,
    pub key: String,
    /// The key as text, when it is printable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_text: Option<String>,
    pub key_size: usize,
    pub distance: f64,
    pub score: f64,
    pub plaintext: String,
}

impl RepeatingKeyReport {
    pub fn from_key(found: &RepeatingKey) -> Self {
        let key_text = found
            .key
            .iter()
            .all(|b| b.is_ascii_graphic() || *b == b' ')
            .then(|| lossy(&found.key));

        Self {
            v: CPALS_REPORT_V,
            key: hex::encode(&found.key),
            key_text,
            key_size: found.key.len(),
            distance: found.distance,
            score: found.score,
            plaintext: lossy(&found.plaintext),
        }
    }
}

/// Serialize a report as minified JSON (no whitespace).
pub fn to_minified_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report as pretty JSON.
pub fn to_pretty_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
