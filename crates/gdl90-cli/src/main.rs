#![doc = include_str!("../readme.md")]

use std::io::{self, Read};

use clap::Parser;
use gdl90::error::ErrorKind;
use gdl90::message::Message;
use gdl90::stream::Stream;

/// Decode GDL-90 frames from hex strings or standard input.
#[derive(Debug, Parser)]
#[command(
    name = "gdl90-cli",
    version,
    author = "xoolive",
    about = "Decode a GDL-90 byte stream into structured messages"
)]
struct Options {
    /// Activate debug output (pretty-printed) instead of JSON lines
    #[arg(long, default_value = "false")]
    debug: bool,

    /// Hex-encoded frames to decode; reads standard input if none are given
    frames: Vec<String>,
}

fn print_message(msg: &Message, debug: bool) {
    if debug {
        println!("{msg:#?}");
    } else {
        println!("{}", serde_json::to_string(msg).expect("failed to serialize"));
    }
}

fn print_error(id: Option<u8>, kind: ErrorKind) {
    match id {
        Some(id) => eprintln!("message id 0x{id:02X}: {kind}"),
        None => eprintln!("{kind}"),
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let options = Options::parse();

    let mut stream = Stream::new(
        |msg| print_message(&msg, options.debug),
        print_error,
    );

    if !options.frames.is_empty() {
        for frame in &options.frames {
            match hex::decode(frame) {
                Ok(bytes) => stream.process(&bytes),
                Err(err) => eprintln!("invalid hex input {frame:?}: {err}"),
            }
        }
        return;
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("failed to read standard input");
    for line in input.split_whitespace() {
        match hex::decode(line) {
            Ok(bytes) => stream.process(&bytes),
            Err(err) => eprintln!("invalid hex input {line:?}: {err}"),
        }
    }
}
