//! Error types shared by framing and dispatch.

use thiserror::Error;

/// Failure while unescaping a candidate frame.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The frame ended on a lone `0x7D` with no follower byte to unescape.
    #[error("frame ended on a dangling escape byte")]
    DanglingEscape,
    /// The frame contained only the opening and closing flag bytes.
    #[error("frame body is empty")]
    EmptyBody,
}

/// A decoder rejected a payload shorter than the message's documented minimum.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("payload of {len} bytes is shorter than the minimum of {min} for this message")]
pub struct PayloadTooShort {
    pub len: usize,
    pub min: usize,
}

/// The three error kinds `Stream::process` may report to `on_error`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The frame unescaped cleanly but its transmitted CRC did not match.
    #[error("CRC mismatch")]
    CrcError,
    /// The frame unescaped cleanly but its payload was shorter than the
    /// documented minimum for its message id, or the decoder rejected it.
    #[error("invalid message payload")]
    InvalidMessage,
    /// The id byte is not one of the known GDL-90 message ids.
    #[error("unknown message type")]
    UnknownMessageType,
}
