//! Enum-to-text mappings for the CLI and tests (Section 4.6). The core
//! exposes these but never calls them itself.

use crate::message::traffic::{
    AddressType, AirGroundState, AlertStatus, EmergencyPriorityCode, ReportStatus,
    TrackHeadingType,
};

pub fn alert_status(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::NoAlert => "No Alert",
        AlertStatus::TrafficAlert => "Traffic Alert",
        AlertStatus::Reserved(_) => "Reserved",
    }
}

pub fn address_type(addr: AddressType) -> &'static str {
    match addr {
        AddressType::AdsbIcao => "ADS-B with ICAO address",
        AddressType::AdsbSelfAssigned => "ADS-B with Self-assigned address",
        AddressType::TisbIcao => "TIS-B with ICAO address",
        AddressType::TisbTrackFileId => "TIS-B with track file ID",
        AddressType::SurfaceVehicle => "Surface Vehicle",
        AddressType::GroundStationBeacon => "Ground Station Beacon",
        AddressType::Reserved(_) => "Reserved",
    }
}

pub fn track_heading_type(t: TrackHeadingType) -> &'static str {
    match t {
        TrackHeadingType::Invalid => "Invalid",
        TrackHeadingType::TrueTrack => "True Track Angle",
        TrackHeadingType::HeadingMagnetic => "Heading (Magnetic)",
        TrackHeadingType::HeadingTrue => "Heading (True)",
    }
}

pub fn report_status(s: ReportStatus) -> &'static str {
    match s {
        ReportStatus::Updated => "Updated",
        ReportStatus::Extrapolated => "Extrapolated",
    }
}

pub fn air_ground_state(s: AirGroundState) -> &'static str {
    match s {
        AirGroundState::OnGround => "On Ground",
        AirGroundState::Airborne => "Airborne",
    }
}

/// Navigation Integrity Category, a 4-bit code carried in the high nibble of
/// the TrafficReport NIC/NACp byte.
pub fn nic(code: u8) -> &'static str {
    match code {
        0 => "Unknown",
        1 => "< 20.0 NM",
        2 => "< 8.0 NM",
        3 => "< 4.0 NM",
        4 => "< 2.0 NM",
        5 => "< 1.0 NM",
        6 => "< 0.6 NM",
        7 => "< 0.2 NM",
        8 => "< 0.1 NM",
        9 => "HPL < 75 m and VPL < 112 m",
        10 => "HPL < 25 m and VPL < 37.5 m",
        11 => "HPL < 7.5 m and VPL < 11 m",
        _ => "Unused",
    }
}

/// Navigation Accuracy Category for Position, the low nibble of the same byte.
pub fn nacp(code: u8) -> &'static str {
    match code {
        0 => "Unknown",
        1 => "< 10.0 NM",
        2 => "< 4.0 NM",
        3 => "< 2.0 NM",
        4 => "< 1.0 NM",
        5 => "< 0.5 NM",
        6 => "< 0.3 NM",
        7 => "< 0.1 NM",
        8 => "< 0.05 NM",
        9 => "HFOM < 30 m and VFOM < 45 m",
        10 => "HFOM < 10 m and VFOM < 15 m",
        11 => "HFOM < 3 m and VFOM < 4 m",
        _ => "Unused",
    }
}

pub fn emitter_category(category: u8) -> &'static str {
    match category {
        0 => "No aircraft type information",
        1 => "Light (ICAO) < 15 500 lbs",
        2 => "Small - 15 500 to 75 000 lbs",
        3 => "Large - 75 000 to 300 000 lbs",
        4 => "High Vortex Large (e.g., aircraft such as B757)",
        5 => "Heavy (ICAO) - > 300 000 lbs",
        6 => "Highly Maneuverable > 5G acceleration and high speed",
        7 => "Rotorcraft",
        9 => "Glider/sailplane",
        10 => "Lighter than air",
        11 => "Parachutist/sky diver",
        12 => "Ultra light/hang glider/paraglider",
        14 => "Unmanned aerial vehicle",
        15 => "Space/transatmospheric vehicle",
        17 => "Surface vehicle - emergency vehicle",
        18 => "Surface vehicle - service vehicle",
        19 => "Point Obstacle (includes tethered balloons)",
        20 => "Cluster Obstacle",
        21 => "Line Obstacle",
        8 | 13 | 16 => "Unassigned",
        _ => "Reserved",
    }
}

pub fn emergency_priority_code(code: EmergencyPriorityCode) -> &'static str {
    match code {
        EmergencyPriorityCode::NoEmergency => "No emergency",
        EmergencyPriorityCode::GeneralEmergency => "General emergency",
        EmergencyPriorityCode::MedicalEmergency => "Medical emergency",
        EmergencyPriorityCode::MinimumFuel => "Minimum fuel",
        EmergencyPriorityCode::NoCommunication => "No communication",
        EmergencyPriorityCode::UnlawfulInterference => "Unlawful interference",
        EmergencyPriorityCode::DownedAircraft => "Downed aircraft",
        EmergencyPriorityCode::Reserved(_) => "Reserved",
    }
}
