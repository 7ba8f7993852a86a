//! Wire shapes exchanged with the ticket-type storage service.
//!
//! Field names and timestamp text are dictated by the remote contract and
//! round-trip verbatim. Timestamps travel as UTC without an offset suffix,
//! `YYYY-MM-DDTHH:MM:SS.mmm`; the parser additionally accepts RFC 3339 so
//! an offset-carrying listing still loads.

use crate::ids::{PriceTierId, TicketTypeId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serde helpers for the wire timestamp format.
///
/// Serialization always emits the offset-less UTC millisecond form the
/// service expects. Deserialization is lenient: the offset-less form,
/// with or without a fractional part, and RFC 3339 are all accepted.
pub mod wire_time {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

    /// Renders a timestamp in the wire format
    #[must_use]
    pub fn to_wire(value: &DateTime<Utc>) -> String {
        value.format(WIRE_FORMAT).to_string()
    }

    /// Parses wire timestamp text.
    ///
    /// # Errors
    ///
    /// Returns the text back when it matches neither the offset-less wire
    /// form nor RFC 3339.
    pub fn from_wire(text: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| format!("unrecognized timestamp: {text:?}"))
    }

    /// Serializes a required wire timestamp
    ///
    /// # Errors
    ///
    /// Forwards serializer errors.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_wire(value))
    }

    /// Deserializes a required wire timestamp
    ///
    /// # Errors
    ///
    /// Fails when the text matches no accepted format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        from_wire(&text).map_err(de::Error::custom)
    }

    /// Serde helpers for optional wire timestamps (`null` when unset)
    pub mod option {
        use super::{DateTime, Deserialize, Deserializer, Serializer, Utc, de, from_wire, to_wire};

        /// Serializes an optional wire timestamp
        ///
        /// # Errors
        ///
        /// Forwards serializer errors.
        pub fn serialize<S>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_some(&to_wire(value)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional wire timestamp
        ///
        /// # Errors
        ///
        /// Fails when present text matches no accepted format.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let text = Option::<String>::deserialize(deserializer)?;
            text.map(|text| from_wire(&text).map_err(de::Error::custom))
                .transpose()
        }
    }
}

/// A price tier as the storage service returns it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePricePoint {
    /// Remote tier identifier
    pub id: PriceTierId,
    /// Tier display name
    pub name: String,
    /// Price in minor units
    pub price_in_cents: Money,
    /// When this tier goes on sale
    #[serde(with = "wire_time::option")]
    pub start_date: Option<DateTime<Utc>>,
    /// When this tier goes off sale
    #[serde(with = "wire_time::option")]
    pub end_date: Option<DateTime<Utc>>,
}

/// A ticket type as the storage service returns it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTicketType {
    /// Remote ticket-type identifier
    pub id: TicketTypeId,
    /// Ticket-type display name
    pub name: String,
    /// Total sellable quantity; the service may return null
    pub capacity: Option<u32>,
    /// Purchase increment; the service may return null
    pub increment: Option<u32>,
    /// When the ticket type goes on sale
    #[serde(with = "wire_time::option")]
    pub start_date: Option<DateTime<Utc>>,
    /// When the ticket type goes off sale
    #[serde(with = "wire_time::option")]
    pub end_date: Option<DateTime<Utc>>,
    /// Ordered price tiers
    pub ticket_pricing: Vec<RemotePricePoint>,
}

/// One price tier of a create/update payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePointPayload {
    /// Remote tier id; present means update that tier in place, absent
    /// means the service should create a new tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PriceTierId>,
    /// Tier display name
    pub name: String,
    /// Price in minor units
    pub price_in_cents: Money,
    /// Tier on-sale instant
    #[serde(with = "wire_time::option")]
    pub start_date: Option<DateTime<Utc>>,
    /// Tier off-sale instant
    #[serde(with = "wire_time::option")]
    pub end_date: Option<DateTime<Utc>>,
}

/// The fully denormalized body of a create/update operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypePayload {
    /// Ticket-type display name
    pub name: String,
    /// Total sellable quantity
    pub capacity: u32,
    /// Purchase increment
    pub increment: u32,
    /// Ticket-type on-sale instant
    #[serde(with = "wire_time::option")]
    pub start_date: Option<DateTime<Utc>>,
    /// Ticket-type off-sale instant
    #[serde(with = "wire_time::option")]
    pub end_date: Option<DateTime<Utc>>,
    /// Ordered price tiers
    pub ticket_pricing: Vec<PricePointPayload>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn july(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn wire_format_has_milliseconds_and_no_offset() {
        assert_eq!(wire_time::to_wire(&july(1, 17)), "2026-07-01T17:00:00.000");
    }

    #[test]
    fn parses_wire_and_rfc3339_forms() {
        let expected = july(1, 17);
        assert_eq!(wire_time::from_wire("2026-07-01T17:00:00.000").unwrap(), expected);
        assert_eq!(wire_time::from_wire("2026-07-01T17:00:00").unwrap(), expected);
        assert_eq!(wire_time::from_wire("2026-07-01T17:00:00Z").unwrap(), expected);
        assert_eq!(
            wire_time::from_wire("2026-07-01T19:00:00+02:00").unwrap(),
            expected
        );
        assert!(wire_time::from_wire("next tuesday").is_err());
    }

    #[test]
    fn remote_ticket_type_round_trips() {
        let json = serde_json::json!({
            "id": "tt-1",
            "name": "General Admission",
            "capacity": 100,
            "increment": 1,
            "start_date": "2026-07-01T09:00:00.000",
            "end_date": "2026-07-04T17:00:00.000",
            "ticket_pricing": [{
                "id": "tp-1",
                "name": "Early Bird",
                "price_in_cents": 1000,
                "start_date": "2026-07-01T09:00:00.000",
                "end_date": "2026-07-02T09:00:00.000"
            }]
        });

        let remote: RemoteTicketType = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(remote.capacity, Some(100));
        assert_eq!(remote.ticket_pricing[0].price_in_cents, Money::from_cents(1000));
        assert_eq!(serde_json::to_value(&remote).unwrap(), json);
    }

    #[test]
    fn null_dates_load_as_unset() {
        let json = serde_json::json!({
            "id": "tt-2",
            "name": "Door",
            "capacity": null,
            "increment": null,
            "start_date": null,
            "end_date": null,
            "ticket_pricing": []
        });

        let remote: RemoteTicketType = serde_json::from_value(json).unwrap();
        assert_eq!(remote.start_date, None);
        assert_eq!(remote.capacity, None);
    }

    #[test]
    fn payload_omits_absent_tier_id() {
        let payload = PricePointPayload {
            id: None,
            name: "Early Bird".to_string(),
            price_in_cents: Money::from_cents(1000),
            start_date: Some(july(1, 9)),
            end_date: Some(july(2, 9)),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
    }
}
