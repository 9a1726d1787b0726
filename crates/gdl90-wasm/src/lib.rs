#![allow(rustdoc::missing_crate_level_docs)]

use gdl90::crc::{CrcResult, CrcTable};
use gdl90::error::ErrorKind;
use gdl90::frame;
use gdl90::message::{self, Message, MessageId};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

struct DecodeError(ErrorKind);

impl From<DecodeError> for JsError {
    fn from(error: DecodeError) -> Self {
        JsError::new(&format!("{}", error.0))
    }
}

/// Decode a single flag-delimited GDL-90 frame given as a hex string and
/// return its fields as a plain JS object.
#[wasm_bindgen]
pub fn decode(hex_frame: &str) -> Result<JsValue, JsError> {
    let framed = hex::decode(hex_frame)?;
    let body = frame::unescape(&framed).map_err(|e| JsError::new(&e.to_string()))?;
    match CrcTable::new().validate(&body) {
        CrcResult::Ok => {}
        CrcResult::Mismatch => return Err(DecodeError(ErrorKind::CrcError).into()),
        CrcResult::InvalidInput => return Err(DecodeError(ErrorKind::InvalidMessage).into()),
    }
    let payload = &body[..body.len() - 2];
    let id = payload
        .first()
        .copied()
        .and_then(MessageId::from_byte)
        .ok_or_else(|| JsError::new("unknown message type"))?;
    let msg = message::decode(id, payload).map_err(DecodeError)?;
    Ok(serde_wasm_bindgen::to_value(&msg)?)
}

/// Decode every frame found in a concatenated hex-encoded byte stream,
/// returning an array of decoded messages (errors are skipped).
#[wasm_bindgen]
pub fn decode_stream(hex_stream: &str) -> Result<JsValue, JsError> {
    let bytes = hex::decode(hex_stream)?;
    let mut messages: Vec<Message> = Vec::new();
    let mut stream = gdl90::stream::Stream::new(
        |msg| messages.push(msg),
        |_id: Option<u8>, _err: ErrorKind| {},
    );
    stream.process(&bytes);
    Ok(serde_wasm_bindgen::to_value(&messages)?)
}
