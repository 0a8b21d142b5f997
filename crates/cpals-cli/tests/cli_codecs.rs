use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const SET1_HEX: &str = "49276d206b696c6c696e6720796f757220627261696e206c696b65206120706f69736f6e6f7573206d757368726f6f6d";
const SET1_B64: &str = "SSdtIGtpbGxpbmcgeW91ciBicmFpbiBsaWtlIGEgcG9pc29ub3VzIG11c2hyb29t";

#[test]
fn hex_to_base64_prints_encoded_text() {
    let mut cmd = cargo_bin_cmd!("cpals");
    cmd.args(["hex-to-base64", SET1_HEX]);

    cmd.assert().success().stdout(format!("{SET1_B64}\n"));
}

#[test]
fn hex_to_base64_single_zero_byte() {
    let mut cmd = cargo_bin_cmd!("cpals");
    cmd.args(["hex-to-base64", "00"]);

    cmd.assert().success().stdout("AA==\n");
}

#[test]
fn hex_to_base64_odd_length_exits_2() {
    let mut cmd = cargo_bin_cmd!("cpals");
    cmd.args(["hex-to-base64", "0"]);

    cmd.assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("malformed byte string"));
}

#[test]
fn hex_to_base64_bad_character_exits_2() {
    let mut cmd = cargo_bin_cmd!("cpals");
    cmd.args(["hex-to-base64", "zz"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid hex character 'z' at position 0"));
}

#[test]
fn base64_to_hex_prints_lowercase_hex() {
    let mut cmd = cargo_bin_cmd!("cpals");
    cmd.args(["base64-to-hex", SET1_B64]);

    cmd.assert().success().stdout(format!("{SET1_HEX}\n"));
}

#[test]
fn base64_to_hex_rejects_garbage() {
    let mut cmd = cargo_bin_cmd!("cpals");
    cmd.args(["base64-to-hex", "!!!!"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid base64"));
}
