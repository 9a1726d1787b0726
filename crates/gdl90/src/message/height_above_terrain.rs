//! 3.7 Height Above Terrain message (ground-to-air, In).

use serde::Serialize;

use crate::bits::i16_be;
use crate::error::PayloadTooShort;
use crate::message::MessageId;

const MIN_LEN: usize = 3;
const SENTINEL: i32 = -32768;

/// Decoded 3.7 Height Above Terrain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightAboveTerrain {
    /// Height above terrain in feet; callers should check [`Self::is_valid`]
    /// before trusting this against the documented `0x8000` sentinel.
    pub height_above_terrain: i32,
}

impl HeightAboveTerrain {
    pub fn decode(payload: &[u8]) -> Result<Self, PayloadTooShort> {
        if payload.len() < MIN_LEN {
            return Err(PayloadTooShort { len: payload.len(), min: MIN_LEN });
        }
        let height_above_terrain = i16_be(payload[1], payload[2]);
        Ok(HeightAboveTerrain { height_above_terrain })
    }

    pub fn is_valid(&self) -> bool {
        self.height_above_terrain != SENTINEL
    }

    /// 3 bytes: id | high byte | low byte, ready to be flag-escaped.
    pub fn to_bytes(&self) -> [u8; 3] {
        let v = self.height_above_terrain as i16;
        [MessageId::HeightAboveTerrain as u8, (v >> 8) as u8, v as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_positive_value() {
        let hat = HeightAboveTerrain::decode(&[0x09, 0x01, 0x00]).unwrap();
        assert_eq!(hat.height_above_terrain, 256);
        assert!(hat.is_valid());
    }

    #[test]
    fn decodes_sentinel_as_invalid() {
        let hat = HeightAboveTerrain::decode(&[0x09, 0x80, 0x00]).unwrap();
        assert_eq!(hat.height_above_terrain, -32768);
        assert!(!hat.is_valid());
    }

    #[test]
    fn round_trips_through_to_bytes() {
        let hat = HeightAboveTerrain { height_above_terrain: -100 };
        let bytes = hat.to_bytes();
        let decoded = HeightAboveTerrain::decode(&bytes).unwrap();
        assert_eq!(decoded, hat);
    }
}
