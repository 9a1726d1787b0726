//! 3.4/3.5 Ownship Report and Traffic Report: two message ids sharing one
//! decoded shape (560-1058-00 Rev A, Section 3.5.1).

use serde::Serialize;

use crate::bits::{i12, i24_be, u12, u24_be};
use crate::error::PayloadTooShort;
use crate::message::MessageId;

const MIN_LEN: usize = 28;
const LATLON_RESOLUTION: f64 = 180.0 / 8_388_608.0; // 180 / 2^23

/// s = 0/1 in 3.5.1.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertStatus {
    NoAlert,
    TrafficAlert,
    /// Reserved codes 2-15.
    Reserved(u8),
}

impl AlertStatus {
    fn from_nibble(n: u8) -> Self {
        match n {
            0 => AlertStatus::NoAlert,
            1 => AlertStatus::TrafficAlert,
            other => AlertStatus::Reserved(other),
        }
    }
}

/// t = 0..5 in 3.5.1.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressType {
    AdsbIcao,
    AdsbSelfAssigned,
    TisbIcao,
    TisbTrackFileId,
    SurfaceVehicle,
    GroundStationBeacon,
    Reserved(u8),
}

impl AddressType {
    fn from_nibble(n: u8) -> Self {
        match n {
            0 => AddressType::AdsbIcao,
            1 => AddressType::AdsbSelfAssigned,
            2 => AddressType::TisbIcao,
            3 => AddressType::TisbTrackFileId,
            4 => AddressType::SurfaceVehicle,
            5 => AddressType::GroundStationBeacon,
            other => AddressType::Reserved(other),
        }
    }
}

/// "tt" in 3.5.1.5, misc indicator bits 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackHeadingType {
    Invalid,
    TrueTrack,
    HeadingMagnetic,
    HeadingTrue,
}

impl TrackHeadingType {
    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => TrackHeadingType::Invalid,
            0b01 => TrackHeadingType::TrueTrack,
            0b10 => TrackHeadingType::HeadingMagnetic,
            0b11 => TrackHeadingType::HeadingTrue,
            _ => unreachable!(),
        }
    }
}

/// Misc indicator bit 2: 0 = Updated, 1 = Extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportStatus {
    Updated,
    Extrapolated,
}

/// Misc indicator bit 3: 0 = On Ground, 1 = Airborne.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AirGroundState {
    OnGround,
    Airborne,
}

/// p = 0..6 in 3.5.1.12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmergencyPriorityCode {
    NoEmergency,
    GeneralEmergency,
    MedicalEmergency,
    MinimumFuel,
    NoCommunication,
    UnlawfulInterference,
    DownedAircraft,
    Reserved(u8),
}

impl EmergencyPriorityCode {
    fn from_nibble(n: u8) -> Self {
        match n {
            0 => EmergencyPriorityCode::NoEmergency,
            1 => EmergencyPriorityCode::GeneralEmergency,
            2 => EmergencyPriorityCode::MedicalEmergency,
            3 => EmergencyPriorityCode::MinimumFuel,
            4 => EmergencyPriorityCode::NoCommunication,
            5 => EmergencyPriorityCode::UnlawfulInterference,
            6 => EmergencyPriorityCode::DownedAircraft,
            other => EmergencyPriorityCode::Reserved(other),
        }
    }
}

/// Decoded Ownship Report (0x0A) or Traffic Report (0x14); the originating
/// id is preserved in [`Self::id`] so callers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficReport {
    pub id: MessageId,
    pub alert_status: AlertStatus,
    pub address_type: AddressType,
    pub participant_address: u32,
    /// Degrees, in `[-90, 90]`.
    pub latitude: f64,
    /// Degrees, in `[-180, 180]`.
    pub longitude: f64,
    /// Feet, or 0 if `has_valid_altitude` is false.
    pub altitude: i32,
    pub has_valid_altitude: bool,
    pub track_heading_type: TrackHeadingType,
    pub report_status: ReportStatus,
    pub air_ground_state: AirGroundState,
    pub nic: u8,
    pub nacp: u8,
    /// Knots, or 0 if `has_valid_horizontal_velocity` is false.
    pub horizontal_velocity: u16,
    pub has_valid_horizontal_velocity: bool,
    /// Feet per minute, or 0 if `has_valid_vertical_velocity` is false.
    pub vertical_velocity: i32,
    pub has_valid_vertical_velocity: bool,
    /// Degrees.
    pub track_heading: f64,
    pub emitter_category: u8,
    /// ASCII, null/space-padded bytes trimmed at the first terminator.
    pub callsign: String,
    pub emergency_priority_code: EmergencyPriorityCode,
    pub spare: u8,
    pub has_valid_position: bool,
}

impl TrafficReport {
    pub fn decode(payload: &[u8], id: MessageId) -> Result<Self, PayloadTooShort> {
        if payload.len() < MIN_LEN {
            return Err(PayloadTooShort { len: payload.len(), min: MIN_LEN });
        }

        let alert_status = AlertStatus::from_nibble(payload[1] >> 4);
        let address_type = AddressType::from_nibble(payload[1] & 0x0F);
        let participant_address = u24_be(payload[2], payload[3], payload[4]);

        let lat_raw = i24_be(payload[5], payload[6], payload[7]);
        let lon_raw = i24_be(payload[8], payload[9], payload[10]);
        let latitude = f64::from(lat_raw) * LATLON_RESOLUTION;
        let longitude = f64::from(lon_raw) * LATLON_RESOLUTION;

        let (altitude, has_valid_altitude) =
            if payload[11] == 0xFF && (payload[12] & 0xF0) == 0xF0 {
                (0, false)
            } else {
                (i32::from(u12(payload[11], payload[12], true)) * 25 - 1000, true)
            };

        let mi_bits = payload[12] & 0x0F;
        let track_heading_type = TrackHeadingType::from_bits(mi_bits);
        let report_status = if mi_bits & 0b100 != 0 {
            ReportStatus::Extrapolated
        } else {
            ReportStatus::Updated
        };
        let air_ground_state = if mi_bits & 0b1000 != 0 {
            AirGroundState::Airborne
        } else {
            AirGroundState::OnGround
        };

        let nic = payload[13] >> 4;
        let nacp = payload[13] & 0x0F;

        let (horizontal_velocity, has_valid_horizontal_velocity) =
            if payload[14] == 0xFF && (payload[15] & 0xF0) == 0x00 {
                (0, false)
            } else {
                (u12(payload[14], payload[15], true), true)
            };

        let (vertical_velocity, has_valid_vertical_velocity) =
            if (payload[15] & 0x0F) == 0x08 && payload[16] == 0x00 {
                (0, false)
            } else {
                (i32::from(i12(payload[15], payload[16], false)) * 64, true)
            };

        let track_heading = f64::from(payload[17]) * (360.0 / 256.0);
        let emitter_category = payload[18];

        let callsign_bytes = &payload[19..=26];
        let end = callsign_bytes
            .iter()
            .position(|&b| b == 0x00 || b == 0x20)
            .unwrap_or(callsign_bytes.len());
        let callsign = String::from_utf8_lossy(&callsign_bytes[..end]).into_owned();

        let emergency_priority_code = EmergencyPriorityCode::from_nibble(payload[27] >> 4);
        let spare = payload[27] & 0x0F;

        let has_valid_position = !(lat_raw == 0 && lon_raw == 0 && nic == 0);

        Ok(TrafficReport {
            id,
            alert_status,
            address_type,
            participant_address,
            latitude,
            longitude,
            altitude,
            has_valid_altitude,
            track_heading_type,
            report_status,
            air_ground_state,
            nic,
            nacp,
            horizontal_velocity,
            has_valid_horizontal_velocity,
            vertical_velocity,
            has_valid_vertical_velocity,
            track_heading,
            emitter_category,
            callsign,
            emergency_priority_code,
            spare,
            has_valid_position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_f() -> Vec<u8> {
        hex::decode(concat!(
            "14", "00", "AB4549", "1FEF15", "A88978", "0F", "09", "A907", "B0",
            "0120", "014E", "38323556", "202020", "00"
        ))
        .unwrap()
    }

    #[test]
    fn decodes_example_f() {
        let payload = example_f();
        let msg = TrafficReport::decode(&payload, MessageId::TrafficReport).unwrap();
        assert_eq!(msg.participant_address, 0xAB4549);
        assert!((msg.latitude - 44.907).abs() < 1e-2);
        assert!((msg.longitude - -122.995).abs() < 1e-2);
        assert_eq!(msg.altitude, 5000);
        assert!(msg.has_valid_altitude);
        assert!(matches!(msg.air_ground_state, AirGroundState::Airborne));
        assert!(matches!(msg.track_heading_type, TrackHeadingType::TrueTrack));
        assert_eq!(msg.nic, 10);
        assert_eq!(msg.horizontal_velocity, 123);
        assert_eq!(msg.vertical_velocity, 64);
        assert!((msg.track_heading - 45.0).abs() < 1.0);
        assert_eq!(msg.callsign, "N825V");
    }

    #[test]
    fn example_g_vertical_velocity_invalid() {
        let mut payload = example_f();
        payload[15] = 0x08;
        payload[16] = 0x00;
        let msg = TrafficReport::decode(&payload, MessageId::TrafficReport).unwrap();
        assert!(!msg.has_valid_vertical_velocity);
        assert_eq!(msg.vertical_velocity, 0);
    }

    #[test]
    fn example_h_altitude_saturates() {
        let mut payload = example_f();
        payload[11] = 0xFF;
        payload[12] = (payload[12] & 0x0F) | 0xE0;
        let msg = TrafficReport::decode(&payload, MessageId::TrafficReport).unwrap();
        assert_eq!(msg.altitude, 101_350);
    }

    #[test]
    fn callsign_trims_at_first_terminator() {
        let mut payload = example_f();
        payload[19..27].copy_from_slice(b"N825V\0\0\0");
        let msg = TrafficReport::decode(&payload, MessageId::TrafficReport).unwrap();
        assert_eq!(msg.callsign, "N825V");
    }

    #[test]
    fn position_invalid_only_when_lat_lon_nic_all_zero() {
        let mut payload = example_f();
        payload[5..=10].fill(0);
        payload[13] &= 0x0F; // nic = 0
        let msg = TrafficReport::decode(&payload, MessageId::TrafficReport).unwrap();
        assert!(!msg.has_valid_position);
    }
}
