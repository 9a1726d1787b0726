//! Time of Reception (TOR), shared by UplinkData, BasicReport and LongReport.
//!
//! The 24-bit counter is transmitted little-endian (bytes `[1],[2],[3]` are
//! LSB to MSB) but is assembled MSB-first via [`crate::bits::u24_be`] with the
//! byte order reversed, then scaled by its 80 ns LSB.

use crate::bits::u24_be;

const SENTINEL: u32 = 0xFF_FFFF;
const LSB_NANOS: u64 = 80;

/// Time of reception in nanoseconds, and whether the wire value was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfReception {
    pub nanos: u64,
    pub valid: bool,
}

/// Decode the TOR out of `payload[1..=3]` (little-endian on the wire).
pub fn decode(payload: &[u8]) -> TimeOfReception {
    let tor = u24_be(payload[3], payload[2], payload[1]);
    if tor == SENTINEL {
        TimeOfReception { nanos: 0, valid: false }
    } else {
        TimeOfReception { nanos: u64::from(tor) * LSB_NANOS, valid: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_invalid() {
        let tor = decode(&[0x00, 0xFF, 0xFF, 0xFF]);
        assert!(!tor.valid);
        assert_eq!(tor.nanos, 0);
    }

    #[test]
    fn scales_by_80ns() {
        // wire bytes LSB..MSB = 0x01, 0x00, 0x00 -> tor = 1
        let tor = decode(&[0x00, 0x01, 0x00, 0x00]);
        assert!(tor.valid);
        assert_eq!(tor.nanos, 80);
    }
}
