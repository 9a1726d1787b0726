//! 3.1 Heartbeat message.

use serde::Serialize;

use crate::error::PayloadTooShort;

const MIN_LEN: usize = 7;

/// Status byte 1 bit positions (560-1058-00 Rev A, Table 3-1).
mod status1_bit {
    pub const UAT_INITIALIZED: u8 = 0;
    pub const RATCS: u8 = 1;
    pub const GPS_BATT_LOW: u8 = 3;
    pub const ADDR_TYPE: u8 = 4;
    pub const IDENT: u8 = 5;
    pub const MAINT_REQD: u8 = 6;
    pub const GPS_POS_VALID: u8 = 7;
}

mod status2_bit {
    pub const UTC_OK: u8 = 0;
    pub const CSA_NOT_AVAILABLE: u8 = 5;
    pub const CSA_REQUESTED: u8 = 6;
}

/// Decoded 3.1 Heartbeat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heartbeat {
    pub status1: u8,
    pub status2: u8,
    /// UAT time stamp, a 17-bit second-of-day counter.
    pub timestamp: u32,
    /// Number of Uplink messages received during the previous second.
    pub uplink_count: u8,
    /// Number of Basic and Long reports received during the previous second.
    pub basic_long_count: u16,
}

impl Heartbeat {
    pub fn decode(payload: &[u8]) -> Result<Self, PayloadTooShort> {
        if payload.len() < MIN_LEN {
            return Err(PayloadTooShort { len: payload.len(), min: MIN_LEN });
        }
        let status1 = payload[1];
        let status2 = payload[2];
        let timestamp = (u32::from((status2 >> 7) & 1) << 16)
            | (u32::from(payload[4]) << 8)
            | u32::from(payload[3]);
        let uplink_count = payload[5] >> 3;
        let basic_long_count = (u16::from(payload[5] & 0x03) << 8) | u16::from(payload[6]);
        Ok(Heartbeat { status1, status2, timestamp, uplink_count, basic_long_count })
    }

    pub fn uat_initialized(&self) -> bool {
        self.status1 & (1 << status1_bit::UAT_INITIALIZED) != 0
    }

    pub fn ratcs(&self) -> bool {
        self.status1 & (1 << status1_bit::RATCS) != 0
    }

    pub fn gps_batt_low(&self) -> bool {
        self.status1 & (1 << status1_bit::GPS_BATT_LOW) != 0
    }

    /// `true` for anonymous (self-assigned) address, `false` for set/known.
    pub fn addr_type_anonymous(&self) -> bool {
        self.status1 & (1 << status1_bit::ADDR_TYPE) != 0
    }

    pub fn ident(&self) -> bool {
        self.status1 & (1 << status1_bit::IDENT) != 0
    }

    pub fn maintenance_required(&self) -> bool {
        self.status1 & (1 << status1_bit::MAINT_REQD) != 0
    }

    pub fn gps_pos_valid(&self) -> bool {
        self.status1 & (1 << status1_bit::GPS_POS_VALID) != 0
    }

    pub fn utc_ok(&self) -> bool {
        self.status2 & (1 << status2_bit::UTC_OK) != 0
    }

    pub fn csa_not_available(&self) -> bool {
        self.status2 & (1 << status2_bit::CSA_NOT_AVAILABLE) != 0
    }

    pub fn csa_requested(&self) -> bool {
        self.status2 & (1 << status2_bit::CSA_REQUESTED) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_example_a() {
        let payload = [0x00, 0x81, 0x41, 0x0F, 0xFF, 0x01, 0xFF];
        let hb = Heartbeat::decode(&payload).unwrap();
        assert!(hb.gps_pos_valid());
        assert!(hb.uat_initialized());
        assert!(hb.utc_ok());
        assert!(hb.csa_requested());
        assert_eq!(hb.uplink_count, 0);
        assert_eq!(hb.basic_long_count, 0x1FF);
    }

    #[test]
    fn rejects_short_payload() {
        assert!(Heartbeat::decode(&[0x00, 0x81, 0x41, 0x0F, 0xFF, 0x01]).is_err());
    }
}
