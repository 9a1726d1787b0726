//! GDL-90 message ids and the decoded message sum type (Section 3).

pub mod geo_altitude;
pub mod heartbeat;
pub mod height_above_terrain;
pub mod initialization;
pub mod pass_through;
pub mod tor;
pub mod traffic;
pub mod uplink;

use serde::Serialize;

use crate::error::{ErrorKind, PayloadTooShort};
use geo_altitude::OwnshipGeometricAltitude;
use heartbeat::Heartbeat;
use height_above_terrain::HeightAboveTerrain;
use initialization::Initialization;
use pass_through::{BasicReport, LongReport};
use traffic::TrafficReport;
use uplink::UplinkData;

/// Message id byte, Table 3-1 plus the 3.4/3.5/3.6 report family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum MessageId {
    Heartbeat = 0x00,
    Initialization = 0x02,
    UplinkData = 0x07,
    HeightAboveTerrain = 0x09,
    OwnshipReport = 0x0A,
    OwnshipGeometricAltitude = 0x0B,
    TrafficReport = 0x14,
    BasicReport = 0x1E,
    LongReport = 0x1F,
}

impl MessageId {
    pub fn from_byte(id: u8) -> Option<Self> {
        Some(match id {
            0x00 => MessageId::Heartbeat,
            0x02 => MessageId::Initialization,
            0x07 => MessageId::UplinkData,
            0x09 => MessageId::HeightAboveTerrain,
            0x0A => MessageId::OwnshipReport,
            0x0B => MessageId::OwnshipGeometricAltitude,
            0x14 => MessageId::TrafficReport,
            0x1E => MessageId::BasicReport,
            0x1F => MessageId::LongReport,
            _ => return None,
        })
    }
}

/// Every message this crate can decode, tagged by its own [`MessageId`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "id")]
pub enum Message {
    Heartbeat(Heartbeat),
    Initialization(Initialization),
    UplinkData(UplinkData),
    HeightAboveTerrain(HeightAboveTerrain),
    OwnshipReport(TrafficReport),
    OwnshipGeometricAltitude(OwnshipGeometricAltitude),
    TrafficReport(TrafficReport),
    BasicReport(BasicReport),
    LongReport(LongReport),
}

impl Message {
    pub fn id(&self) -> MessageId {
        match self {
            Message::Heartbeat(_) => MessageId::Heartbeat,
            Message::Initialization(_) => MessageId::Initialization,
            Message::UplinkData(_) => MessageId::UplinkData,
            Message::HeightAboveTerrain(_) => MessageId::HeightAboveTerrain,
            Message::OwnshipReport(_) => MessageId::OwnshipReport,
            Message::OwnshipGeometricAltitude(_) => MessageId::OwnshipGeometricAltitude,
            Message::TrafficReport(_) => MessageId::TrafficReport,
            Message::BasicReport(_) => MessageId::BasicReport,
            Message::LongReport(_) => MessageId::LongReport,
        }
    }
}

/// Dispatch an unescaped, CRC-validated frame body (id byte included) to the
/// matching decoder.
pub fn decode(id: MessageId, body: &[u8]) -> Result<Message, ErrorKind> {
    let map_short = |_: PayloadTooShort| ErrorKind::InvalidMessage;
    Ok(match id {
        MessageId::Heartbeat => Message::Heartbeat(Heartbeat::decode(body).map_err(map_short)?),
        MessageId::Initialization => {
            Message::Initialization(Initialization::decode(body).map_err(map_short)?)
        }
        MessageId::UplinkData => Message::UplinkData(UplinkData::decode(body).map_err(map_short)?),
        MessageId::HeightAboveTerrain => {
            Message::HeightAboveTerrain(HeightAboveTerrain::decode(body).map_err(map_short)?)
        }
        MessageId::OwnshipReport => {
            Message::OwnshipReport(TrafficReport::decode(body, id).map_err(map_short)?)
        }
        MessageId::OwnshipGeometricAltitude => Message::OwnshipGeometricAltitude(
            OwnshipGeometricAltitude::decode(body).map_err(map_short)?,
        ),
        MessageId::TrafficReport => {
            Message::TrafficReport(TrafficReport::decode(body, id).map_err(map_short)?)
        }
        MessageId::BasicReport => Message::BasicReport(BasicReport::decode(body).map_err(map_short)?),
        MessageId::LongReport => Message::LongReport(LongReport::decode(body).map_err(map_short)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_byte_rejects_unknown_id() {
        assert!(MessageId::from_byte(0x03).is_none());
        assert_eq!(MessageId::from_byte(0x00), Some(MessageId::Heartbeat));
    }

    #[test]
    fn decode_dispatches_heartbeat() {
        let body = [0x00, 0x81, 0x41, 0x0F, 0xFF, 0x01, 0xFF];
        let msg = decode(MessageId::Heartbeat, &body).unwrap();
        assert_eq!(msg.id(), MessageId::Heartbeat);
        assert!(matches!(msg, Message::Heartbeat(_)));
    }

    #[test]
    fn decode_surfaces_short_payload_as_invalid_message() {
        let err = decode(MessageId::Heartbeat, &[0x00]).unwrap_err();
        assert_eq!(err, ErrorKind::InvalidMessage);
    }
}
