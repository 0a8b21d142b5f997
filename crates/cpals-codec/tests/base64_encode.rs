use cpals_codec::base64::{decode, decode_lines, encode, encode_string};
use cpals_codec::convert::{base64_to_hex, hex_to_base64};
use cpals_codec::hex;

const SET1_HEX: &str = "49276d206b696c6c696e6720796f757220627261696e206c696b65206120706f69736f6e6f7573206d757368726f6f6d";
const SET1_B64: &str = "SSdtIGtpbGxpbmcgeW91ciBicmFpbiBsaWtlIGEgcG9pc29ub3VzIG11c2hyb29t";

#[test]
fn encodes_known_sentence() {
    let bytes = hex::decode(SET1_HEX).unwrap();
    assert_eq!(encode(&bytes), SET1_B64.as_bytes());
}

#[test]
fn empty_input_is_empty_output() {
    assert!(encode(&[]).is_empty());
    assert_eq!(encode_string(&[]), "");
}

#[test]
fn pads_partial_groups() {
    assert_eq!(encode(&[0]), b"AA==");
    assert_eq!(encode_string(&[255]), "/w==");
    assert_eq!(encode_string(&[255, 255]), "//8=");
    assert_eq!(encode_string(&[255, 255, 255]), "////");
}

#[test]
fn output_is_ascii() {
    let all: Vec<u8> = (0..=255u8).collect();
    assert!(encode(&all).iter().all(|b| b.is_ascii_alphanumeric() || b"+/=".contains(b)));
}

#[test]
fn decodes_hello_world() {
    assert_eq!(decode("SGVsbG8gV29ybGQ=").unwrap(), b"Hello World");
}

#[test]
fn decode_rejects_invalid_character() {
    assert!(decode("SGVsbG8sIFdvcmxkI!Q==").is_err());
}

#[test]
fn decode_requires_padding() {
    assert!(decode("SGVsbG8gV29ybGQ").is_err());
    assert!(decode("AA").is_err());
    assert_eq!(decode("AA==").unwrap(), [0]);
}

#[test]
fn decode_lines_joins_wrapped_text() {
    let wrapped = "SSdtIGtpbGxpbmcgeW91ciBicmFp\r\nbiBsaWtlIGEgcG9pc29ub3VzIG11\n  c2hyb29t  \n\n";
    assert_eq!(
        decode_lines(wrapped).unwrap(),
        b"I'm killing your brain like a poisonous mushroom"
    );
}

#[test]
fn hex_to_base64_chains_both_codecs() {
    assert_eq!(hex_to_base64(SET1_HEX).unwrap(), SET1_B64);
    assert_eq!(hex_to_base64("").unwrap(), "");
    assert_eq!(hex_to_base64("00").unwrap(), "AA==");
    assert!(hex_to_base64("FFA").is_err());
}

#[test]
fn base64_to_hex_chains_both_codecs() {
    assert_eq!(base64_to_hex(SET1_B64).unwrap(), SET1_HEX);
    assert!(base64_to_hex("!!!").is_err());
}
