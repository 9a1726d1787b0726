//! 3.8 Ownship Geometric Altitude message.

use serde::Serialize;

use crate::bits::i16_be;
use crate::error::PayloadTooShort;

const MIN_LEN: usize = 5;
const VFOM_MAX: u16 = 0x7FFE;
const VFOM_SENTINEL_MASK: u8 = 0x7F;

/// Decoded 3.8 Ownship Geometric Altitude message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OwnshipGeometricAltitude {
    /// Geometric altitude in feet, already scaled by 5.
    pub geo_altitude: i32,
    pub vertical_warning: bool,
    /// Vertical Figure of Merit in meters, or 0 if `has_valid_vfom` is false.
    pub vertical_figure_of_merit: u16,
    pub has_valid_vfom: bool,
}

impl OwnshipGeometricAltitude {
    pub fn decode(payload: &[u8]) -> Result<Self, PayloadTooShort> {
        if payload.len() < MIN_LEN {
            return Err(PayloadTooShort { len: payload.len(), min: MIN_LEN });
        }
        let geo_altitude = i16_be(payload[1], payload[2]) * 5;
        let vertical_warning = (payload[3] >> 7) & 1 != 0;

        let vfom_hi = payload[3] & VFOM_SENTINEL_MASK;
        let (vertical_figure_of_merit, has_valid_vfom) =
            if vfom_hi == VFOM_SENTINEL_MASK && payload[4] == 0xFF {
                (0, false)
            } else {
                let raw = (u16::from(vfom_hi) << 8) | u16::from(payload[4]);
                (raw.min(VFOM_MAX), true)
            };

        Ok(OwnshipGeometricAltitude {
            geo_altitude,
            vertical_warning,
            vertical_figure_of_merit,
            has_valid_vfom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_example_d() {
        let msg = OwnshipGeometricAltitude::decode(&[0x0B, 0x00, 0xC8, 0x00, 0x0A]).unwrap();
        assert_eq!(msg.geo_altitude, 1000);
        assert!(!msg.vertical_warning);
        assert_eq!(msg.vertical_figure_of_merit, 10);
        assert!(msg.has_valid_vfom);
    }

    #[test]
    fn decodes_example_e() {
        let msg = OwnshipGeometricAltitude::decode(&[0x0B, 0xFF, 0x38, 0xFF, 0xFF]).unwrap();
        assert_eq!(msg.geo_altitude, -1000);
        assert!(msg.vertical_warning);
        assert!(!msg.has_valid_vfom);
    }
}
