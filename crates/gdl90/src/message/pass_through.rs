//! 3.6 Pass-through reports: BasicReport and LongReport, which differ only
//! in their opaque RTCA/DO-282 payload length.

use serde::Serialize;

use crate::error::PayloadTooShort;
use crate::message::tor;

/// Decoded 3.6 Basic Report (id `0x1E`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicReport {
    pub time_of_reception: u64,
    pub has_valid_tor: bool,
    pub payload: Vec<u8>,
}

/// Decoded 3.6 Long Report (id `0x1F`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongReport {
    pub time_of_reception: u64,
    pub has_valid_tor: bool,
    pub payload: Vec<u8>,
}

const BASIC_PAYLOAD_LEN: usize = 18;
const BASIC_MIN_LEN: usize = 22;
const LONG_PAYLOAD_LEN: usize = 34;
const LONG_MIN_LEN: usize = 38;

impl BasicReport {
    pub fn decode(data: &[u8]) -> Result<Self, PayloadTooShort> {
        if data.len() < BASIC_MIN_LEN {
            return Err(PayloadTooShort { len: data.len(), min: BASIC_MIN_LEN });
        }
        let t = tor::decode(data);
        let payload = data[4..4 + BASIC_PAYLOAD_LEN].to_vec();
        Ok(BasicReport { time_of_reception: t.nanos, has_valid_tor: t.valid, payload })
    }
}

impl LongReport {
    pub fn decode(data: &[u8]) -> Result<Self, PayloadTooShort> {
        if data.len() < LONG_MIN_LEN {
            return Err(PayloadTooShort { len: data.len(), min: LONG_MIN_LEN });
        }
        let t = tor::decode(data);
        let payload = data[4..4 + LONG_PAYLOAD_LEN].to_vec();
        Ok(LongReport { time_of_reception: t.nanos, has_valid_tor: t.valid, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_report_rejects_short_payload_and_decodes_full() {
        let mut data = vec![0x1E, 0, 0, 0];
        data.extend(std::iter::repeat_n(0u8, BASIC_PAYLOAD_LEN));
        assert_eq!(data.len(), BASIC_MIN_LEN);
        let msg = BasicReport::decode(&data).unwrap();
        assert!(msg.has_valid_tor);
        assert_eq!(msg.payload.len(), BASIC_PAYLOAD_LEN);

        data.pop();
        assert!(BasicReport::decode(&data).is_err());
    }

    #[test]
    fn long_report_rejects_short_payload_and_decodes_full() {
        let mut data = vec![0x1F, 0xFF, 0xFF, 0xFF];
        data.extend(std::iter::repeat_n(0u8, LONG_PAYLOAD_LEN));
        assert_eq!(data.len(), LONG_MIN_LEN);
        let msg = LongReport::decode(&data).unwrap();
        assert!(!msg.has_valid_tor);
        assert_eq!(msg.payload.len(), LONG_PAYLOAD_LEN);

        data.pop();
        assert!(LongReport::decode(&data).is_err());
    }
}
