use cpals_io::prelude::*;
use cpals_io::report::{to_minified_json, to_pretty_json};
use cpals_io::version::CPALS_REPORT_V;
use serde_json::Value;

#[test]
fn single_byte_report_shape() {
    let ct = hex::decode("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736").unwrap();
    let found = single_byte::crack(&ct).unwrap();

    let report = SingleByteReport::from_key(&found);
    let v: Value = serde_json::from_str(&to_minified_json(&report).unwrap()).unwrap();

    assert_eq!(v["v"], CPALS_REPORT_V);
    assert_eq!(v["key"], "58");
    assert_eq!(v["plaintext"], "Cooking MC's like a pound of bacon");
    assert!(v["score"].as_f64().unwrap() > 0.95);
}

#[test]
fn detection_report_resolves_source_lines() {
    let secret = hex::encode(&single::xor_byte(b"Now that the party is jumping", 0x42));
    let text = format!("\n{}\n\n{}\n", "00".repeat(29), secret);
    let lines = read_hex_lines(&text).unwrap();
    let bytes: Vec<&[u8]> = lines.iter().map(|l| l.bytes.as_slice()).collect();

    let detections = detect_single_byte(&bytes).unwrap();
    let report = DetectionReport::from_detections(&detections, &lines, 1);

    assert_eq!(report.candidates, 2);
    assert_eq!(report.hits.len(), 1);
    assert_eq!(report.hits[0].line, 4);
    assert_eq!(report.hits[0].key, "42");
    assert_eq!(report.hits[0].plaintext, "Now that the party is jumping");
}

#[test]
fn repeating_key_report_includes_printable_key_text() {
    let found = RepeatingKey {
        key: b"ICE".to_vec(),
        score: 0.9,
        plaintext: b"hello".to_vec(),
        distance: 2.5,
    };

    let report = RepeatingKeyReport::from_key(&found);

    assert_eq!(report.key, "494345");
    assert_eq!(report.key_text.as_deref(), Some("ICE"));
    assert_eq!(report.key_size, 3);

    let pretty = to_pretty_json(&report).unwrap();
    assert!(pretty.contains("\"key_text\": \"ICE\""));
}

#[test]
fn repeating_key_report_omits_binary_key_text() {
    let found = RepeatingKey {
        key: vec![0x00, 0x9f],
        score: 0.1,
        plaintext: vec![0xff, b'a'],
        distance: 3.0,
    };

    let report = RepeatingKeyReport::from_key(&found);
    let json = to_minified_json(&report).unwrap();

    assert!(report.key_text.is_none());
    assert!(!json.contains("key_text"));
    assert_eq!(report.plaintext, "\u{fffd}a");
}

#[test]
fn reports_round_trip_through_json() {
    let report = SingleByteReport {
        v: CPALS_REPORT_V,
        key: "2a".to_string(),
        score: 0.5,
        plaintext: "x".to_string(),
    };
    let back: SingleByteReport = serde_json::from_str(&to_minified_json(&report).unwrap()).unwrap();
    assert_eq!(back, report);
}
