//! 3.3 Uplink Data message: an opaque RTCA/DO-282 payload carried pass-through.

use serde::Serialize;

use crate::error::PayloadTooShort;
use crate::message::tor;

const MIN_LEN: usize = 436;
pub const PAYLOAD_LEN: usize = 432;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UplinkData {
    /// Nanoseconds since the start of the second, or 0 if `has_valid_tor` is false.
    pub time_of_reception: u64,
    pub has_valid_tor: bool,
    /// Opaque RTCA/DO-282 payload, always exactly [`PAYLOAD_LEN`] bytes.
    pub payload: Vec<u8>,
}

impl UplinkData {
    pub fn decode(data: &[u8]) -> Result<Self, PayloadTooShort> {
        if data.len() < MIN_LEN {
            return Err(PayloadTooShort { len: data.len(), min: MIN_LEN });
        }
        let t = tor::decode(data);
        let payload = data[4..4 + PAYLOAD_LEN].to_vec();
        Ok(UplinkData { time_of_reception: t.nanos, has_valid_tor: t.valid, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tor_le: [u8; 3]) -> Vec<u8> {
        let mut data = vec![0x07, tor_le[0], tor_le[1], tor_le[2]];
        data.extend(std::iter::repeat_n(0xAAu8, PAYLOAD_LEN));
        data
    }

    #[test]
    fn length_435_fails_436_succeeds() {
        let mut short = frame([0, 0, 0]);
        short.pop();
        assert!(UplinkData::decode(&short).is_err());

        let full = frame([0, 0, 0]);
        assert_eq!(full.len(), 436);
        assert!(UplinkData::decode(&full).is_ok());
    }

    #[test]
    fn sentinel_tor_is_invalid() {
        let data = frame([0xFF, 0xFF, 0xFF]);
        let msg = UplinkData::decode(&data).unwrap();
        assert!(!msg.has_valid_tor);
        assert_eq!(msg.time_of_reception, 0);
        assert_eq!(msg.payload[0], 0xAA);
    }
}
