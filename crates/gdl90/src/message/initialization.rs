//! 3.2 Initialization message (ground-to-air, In).

use serde::Serialize;

use crate::error::PayloadTooShort;
use crate::message::MessageId;

const MIN_LEN: usize = 3;

mod config1_bit {
    pub const CDTI_OK: u8 = 0;
    pub const AUDIO_INHIBIT: u8 = 1;
    pub const AUDIO_TEST: u8 = 6;
}

mod config2_bit {
    pub const CSA_DISABLE: u8 = 0;
    pub const CSA_AUDIO_DISABLE: u8 = 1;
}

/// Decoded 3.2 Initialization message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Initialization {
    pub configuration1: u8,
    pub configuration2: u8,
}

impl Initialization {
    pub fn decode(payload: &[u8]) -> Result<Self, PayloadTooShort> {
        if payload.len() < MIN_LEN {
            return Err(PayloadTooShort { len: payload.len(), min: MIN_LEN });
        }
        Ok(Initialization { configuration1: payload[1], configuration2: payload[2] })
    }

    pub fn cdti_ok(&self) -> bool {
        self.configuration1 & (1 << config1_bit::CDTI_OK) != 0
    }

    pub fn audio_inhibit(&self) -> bool {
        self.configuration1 & (1 << config1_bit::AUDIO_INHIBIT) != 0
    }

    pub fn audio_test(&self) -> bool {
        self.configuration1 & (1 << config1_bit::AUDIO_TEST) != 0
    }

    pub fn csa_disable(&self) -> bool {
        self.configuration2 & (1 << config2_bit::CSA_DISABLE) != 0
    }

    pub fn csa_audio_disable(&self) -> bool {
        self.configuration2 & (1 << config2_bit::CSA_AUDIO_DISABLE) != 0
    }

    /// 3 bytes: id | configuration1 | configuration2, ready to be flag-escaped.
    pub fn to_bytes(&self) -> [u8; 3] {
        [MessageId::Initialization as u8, self.configuration1, self.configuration2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_to_bytes() {
        let init = Initialization { configuration1: 0x03, configuration2: 0x01 };
        let bytes = init.to_bytes();
        assert_eq!(bytes, [0x02, 0x03, 0x01]);
        let decoded = Initialization::decode(&bytes).unwrap();
        assert_eq!(decoded, init);
        assert!(decoded.cdti_ok());
        assert!(decoded.audio_inhibit());
        assert!(!decoded.audio_test());
        assert!(decoded.csa_disable());
        assert!(!decoded.csa_audio_disable());
    }

    #[test]
    fn rejects_short_payload() {
        assert!(Initialization::decode(&[0x02, 0x00]).is_err());
    }
}
