//! Record kinds and typed record IDs.
//!
//! Each record kind owns a public prefix and a salt namespace. Orders and
//! clients are the only kinds that are ever shown to customers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::define_record_id;
use crate::error::IdError;

/// Public prefixes of every record kind, in [`RecordKind::ALL`] order.
pub const PREFIXES: &[&str] = &["ORD", "CUS"];

/// The type of record a public identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A rental order.
    Order,
    /// A client (customer) record.
    Client,
}

impl RecordKind {
    /// Every record kind.
    pub const ALL: [RecordKind; 2] = [RecordKind::Order, RecordKind::Client];

    /// The public prefix, e.g. `ORD`.
    pub const fn prefix(self) -> &'static str {
        match self {
            RecordKind::Order => "ORD",
            RecordKind::Client => "CUS",
        }
    }

    /// Suffix appended to the base salt for this kind's namespace.
    pub const fn salt_suffix(self) -> &'static str {
        match self {
            RecordKind::Order => "orders",
            RecordKind::Client => "clients",
        }
    }

    /// Lowercase name used in logs, JSON, and the CLI.
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordKind::Order => "order",
            RecordKind::Client => "client",
        }
    }

    /// Looks up a kind by its public prefix, ignoring ASCII case.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.prefix().eq_ignore_ascii_case(prefix))
    }

    /// Strips `"<PREFIX>-"` for this kind from the front of `input`, ignoring
    /// ASCII case. Returns `None` if the prefix is absent.
    pub fn strip_prefix(self, input: &str) -> Option<&str> {
        let prefix = self.prefix();
        let head = input.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        input[prefix.len()..].strip_prefix('-')
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "order" | "orders" | "ord" => Ok(RecordKind::Order),
            "client" | "clients" | "customer" | "customers" | "cus" => Ok(RecordKind::Client),
            _ => Err(IdError::UnknownKind(s.to_string())),
        }
    }
}

// =============================================================================
// Typed record IDs
// =============================================================================

define_record_id!(OrderId, RecordKind::Order);
define_record_id!(ClientId, RecordKind::Client);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(RecordKind::Order.prefix(), "ORD");
        assert_eq!(RecordKind::Client.prefix(), "CUS");
        let listed: Vec<_> = RecordKind::ALL.iter().map(|k| k.prefix()).collect();
        assert_eq!(listed, PREFIXES);
    }

    #[test]
    fn test_from_prefix_case_insensitive() {
        assert_eq!(RecordKind::from_prefix("ord"), Some(RecordKind::Order));
        assert_eq!(RecordKind::from_prefix("Cus"), Some(RecordKind::Client));
        assert_eq!(RecordKind::from_prefix("INV"), None);
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(RecordKind::Order.strip_prefix("ord-abc"), Some("abc"));
        assert_eq!(RecordKind::Order.strip_prefix("ORD-"), Some(""));
        assert_eq!(RecordKind::Order.strip_prefix("ORDABC"), None);
        assert_eq!(RecordKind::Order.strip_prefix("CUS-ABC"), None);
        assert_eq!(RecordKind::Order.strip_prefix("OR"), None);
        // Multi-byte input must not panic on a char boundary.
        assert_eq!(RecordKind::Order.strip_prefix("Ö-ABC"), None);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Order".parse::<RecordKind>().unwrap(), RecordKind::Order);
        assert_eq!("customers".parse::<RecordKind>().unwrap(), RecordKind::Client);
        assert!(matches!(
            "invoice".parse::<RecordKind>(),
            Err(IdError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_kind_json() {
        assert_eq!(
            serde_json::to_string(&RecordKind::Client).unwrap(),
            "\"client\""
        );
        let kind: RecordKind = serde_json::from_str("\"order\"").unwrap();
        assert_eq!(kind, RecordKind::Order);
    }

    #[test]
    fn test_record_id_try_from_negative() {
        assert_eq!(OrderId::try_from(5i64).unwrap().value(), 5);
        assert_eq!(
            ClientId::try_from(-3i64).unwrap_err(),
            IdError::NegativeId(-3)
        );
    }

    #[test]
    fn test_record_id_json_roundtrip() {
        let id = OrderId::new(12345);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12345");
        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
        assert!(serde_json::from_str::<OrderId>("-1").is_err());
    }

    #[test]
    fn test_record_id_kinds() {
        assert_eq!(OrderId::KIND, RecordKind::Order);
        assert_eq!(ClientId::KIND, RecordKind::Client);
    }
}
