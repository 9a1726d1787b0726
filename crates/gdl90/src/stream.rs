//! Stateful frame scanner (Section 4): feed it arbitrary byte chunks and it
//! reassembles, unescapes, CRC-checks and dispatches complete frames as they
//! arrive, the way [`crate::frame`] and [`crate::crc`] only do for one frame
//! at a time.

use tracing::{debug, trace, warn};

use crate::crc::{CrcResult, CrcTable};
use crate::error::ErrorKind;
use crate::frame::{self, FLAG};
use crate::message::{self, Message, MessageId};

/// Scans a byte stream for `0x7E`-delimited GDL-90 frames and dispatches
/// decoded messages through `on_message`, or failures through `on_error`.
///
/// Bytes preceding the first flag, and any trailing partial frame, are
/// buffered across calls to [`Stream::process`].
pub struct Stream<M, E> {
    crc: CrcTable,
    buffer: Vec<u8>,
    on_message: M,
    on_error: E,
}

impl<M, E> Stream<M, E>
where
    M: FnMut(Message),
    E: FnMut(Option<u8>, ErrorKind),
{
    pub fn new(on_message: M, on_error: E) -> Self {
        Stream { crc: CrcTable::new(), buffer: Vec::new(), on_message, on_error }
    }

    /// Feed the next chunk of bytes, dispatching every complete frame found.
    pub fn process(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);

        loop {
            let Some(start) = self.buffer.iter().position(|&b| b == FLAG) else {
                self.buffer.clear();
                return;
            };
            if start > 0 {
                self.buffer.drain(..start);
            }

            let Some(end_offset) =
                self.buffer[1..].iter().position(|&b| b == FLAG).map(|i| i + 1)
            else {
                // No closing flag yet; wait for more data.
                return;
            };

            if end_offset <= 1 {
                // Two adjacent flags with nothing between: skip, not an error.
                self.buffer.drain(..=end_offset);
                continue;
            }

            let frame = self.buffer[..=end_offset].to_vec();
            self.buffer.drain(..=end_offset);

            self.dispatch_frame(&frame);
        }
    }

    fn dispatch_frame(&mut self, frame: &[u8]) {
        let body = match frame::unescape(frame) {
            Ok(body) => body,
            Err(err) => {
                warn!(?err, "dropping unparseable frame");
                // The id byte survives unescaping failures that occur past it
                // (e.g. a dangling escape later in the frame), so it is only
                // partially known here.
                (self.on_error)(frame.get(1).copied(), ErrorKind::InvalidMessage);
                return;
            }
        };

        match self.crc.validate(&body) {
            CrcResult::Ok => {}
            CrcResult::Mismatch => {
                debug!("CRC mismatch, dropping frame");
                (self.on_error)(body.first().copied(), ErrorKind::CrcError);
                return;
            }
            CrcResult::InvalidInput => {
                (self.on_error)(body.first().copied(), ErrorKind::InvalidMessage);
                return;
            }
        }

        let payload = &body[..body.len() - 2];
        let raw_id = payload.first().copied();
        let Some(id) = raw_id.and_then(MessageId::from_byte) else {
            (self.on_error)(raw_id, ErrorKind::UnknownMessageType);
            return;
        };

        match message::decode(id, payload) {
            Ok(msg) => {
                trace!(?id, "decoded message");
                (self.on_message)(msg);
            }
            Err(err) => (self.on_error)(raw_id, err),
        }
    }
}
