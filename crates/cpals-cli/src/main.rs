use clap::{Args, Parser, Subcommand};
use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::process;

use cpals_io::prelude::*;
use cpals_io::report::{to_minified_json, to_pretty_json};
use serde::Serialize;
use tabwriter::TabWriter;
use tracing::info;

mod logging;

/// Unreadable input files.
const EXIT_IO: i32 = 1;
/// Malformed input or nothing to work on.
const EXIT_INPUT: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "cpals", version, about = "Hex/base64 codecs and XOR cryptanalysis tools")]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug", "cpals_crack=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
    /// Minify the JSON report
    #[arg(long, requires = "json")]
    min: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a hex string and print it as base64.
    HexToBase64 { hex: String },

    /// Decode base64 and print it as lowercase hex.
    Base64ToHex { base64: String },

    /// XOR two equal-length hex strings.
    FixedXor {
        input: String,
        /// Key, hex, same length as input
        key: String,
    },

    /// Encrypt (or decrypt) a file with repeating-key XOR; prints hex.
    RepeatingXor {
        /// Input file path
        input: String,
        /// Key text
        #[arg(long)]
        key: String,
    },

    /// Recover the key of a single-byte XOR ciphertext.
    CrackSingle {
        /// Ciphertext, hex
        hex: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Find the single-byte XOR encrypted line in a file of hex lines.
    DetectSingle {
        /// Input file path, one hex string per line
        input: String,
        /// Number of best candidates to list
        #[arg(long, default_value_t = 1)]
        top: usize,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Recover the key of a repeating-key XOR ciphertext.
    CrackRepeating {
        /// Input file path, base64 (may be wrapped)
        input: String,
        #[arg(long, default_value_t = KeySizeOptions::default().min_key_size)]
        min_key_size: usize,
        #[arg(long, default_value_t = KeySizeOptions::default().max_key_size)]
        max_key_size: usize,
        /// Key sizes fully cracked before picking the best
        #[arg(long, default_value_t = KeySizeOptions::default().candidates)]
        candidates: usize,
        #[command(flatten)]
        output: OutputArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match cli.cmd {
        Command::HexToBase64 { hex } => {
            info!(command = "hex-to-base64", len = hex.len(), "running");
            let out = or_exit(hex_to_base64(&hex), EXIT_INPUT);
            println!("{out}");
        }

        Command::Base64ToHex { base64 } => {
            info!(command = "base64-to-hex", len = base64.len(), "running");
            let out = or_exit(base64_to_hex(&base64), EXIT_INPUT);
            println!("{out}");
        }

        Command::FixedXor { input, key } => {
            info!(command = "fixed-xor", "running");
            let input = or_exit(hex::decode(&input), EXIT_INPUT);
            let key = or_exit(hex::decode(&key), EXIT_INPUT);
            let out = or_exit(fixed::xor(&input, &key), EXIT_INPUT);
            println!("{}", hex::encode(&out));
        }

        Command::RepeatingXor { input, key } => {
            info!(command = "repeating-xor", input = %input, "running");
            let bytes = or_exit(fs::read(&input).map_err(|e| format!("{input}: {e}")), EXIT_IO);
            let out = or_exit(repeating::xor(&bytes, key.as_bytes()), EXIT_INPUT);
            println!("{}", hex::encode(&out));
        }

        Command::CrackSingle { hex: ct, output } => {
            info!(command = "crack-single", len = ct.len(), "running");
            let ct = or_exit(hex::decode(&ct), EXIT_INPUT);
            let found = or_exit(single_byte::crack(&ct), EXIT_INPUT);

            if output.json {
                print_json(&SingleByteReport::from_key(&found), output.min)?;
            } else {
                println!("key: {}", hex::encode(&[found.key]));
                println!("score: {:.4}", found.score);
                println!(
                    "plaintext: {}",
                    String::from_utf8_lossy(&found.plaintext).escape_debug()
                );
            }
        }

        Command::DetectSingle { input, top, output } => {
            info!(command = "detect-single", input = %input, top, "running");
            let text = read_input(&input);
            let lines = or_exit(read_hex_lines(&text), EXIT_INPUT);
            let candidates: Vec<&[u8]> = lines.iter().map(|l| l.bytes.as_slice()).collect();
            let detections = or_exit(detect_single_byte(&candidates), EXIT_INPUT);
            let report = DetectionReport::from_detections(&detections, &lines, top);

            if output.json {
                print_json(&report, output.min)?;
            } else {
                let mut tw = TabWriter::new(io::stdout());
                writeln!(tw, "line\tkey\tscore\tplaintext")?;
                for hit in &report.hits {
                    writeln!(
                        tw,
                        "{}\t{}\t{:.4}\t{}",
                        hit.line,
                        hit.key,
                        hit.score,
                        hit.plaintext.escape_debug()
                    )?;
                }
                tw.flush()?;
            }
        }

        Command::CrackRepeating {
            input,
            min_key_size,
            max_key_size,
            candidates,
            output,
        } => {
            info!(command = "crack-repeating", input = %input, "running");
            let opts = KeySizeOptions {
                min_key_size,
                max_key_size,
                candidates,
            };
            let text = read_input(&input);
            let ct = or_exit(read_base64_lines(&text), EXIT_INPUT);
            let found = or_exit(repeating_attack::crack(&ct, &opts), EXIT_INPUT);
            let report = RepeatingKeyReport::from_key(&found);

            if output.json {
                print_json(&report, output.min)?;
            } else {
                match &report.key_text {
                    Some(key_text) => println!("key: {key_text} ({})", report.key),
                    None => println!("key: {}", report.key),
                }
                println!("score: {:.4}", report.score);
                println!();
                print!("{}", report.plaintext);
                if !report.plaintext.ends_with('\n') {
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: &str) -> String {
    let bytes = or_exit(fs::read(path).map_err(|e| format!("{path}: {e}")), EXIT_IO);
    or_exit(
        String::from_utf8(bytes).map_err(|e| format!("{path}: {e}")),
        EXIT_INPUT,
    )
}

/// Unwrap `result`, or print the error to stderr and exit with `code`.
fn or_exit<T, E: Display>(result: Result<T, E>, code: i32) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            process::exit(code);
        }
    }
}

fn print_json<T: Serialize>(report: &T, min: bool) -> anyhow::Result<()> {
    let out = if min {
        to_minified_json(report)?
    } else {
        to_pretty_json(report)?
    };
    println!("{out}");
    Ok(())
}
