//! Syntactic public identifiers (`ORD-XXXXXX`, `CUS-XXXXXX`).
//!
//! [`PublicId`] only checks shape: a known prefix, a dash, and a token drawn
//! from an alphabet. [`PublicId::parse`] assumes the default alphabet; codecs
//! built with a custom alphabet parse through
//! [`PublicIdCodec::parse_public_id`](crate::PublicIdCodec::parse_public_id).
//! Whether the token actually decodes is the codec's business.

use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_ALPHABET;
use crate::error::IdError;
use crate::types::{RecordKind, PREFIXES};

/// A parsed `<PREFIX>-<TOKEN>` string in canonical form.
///
/// The prefix is always uppercase; the token is uppercase unless it came from
/// a case-sensitive alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicId {
    kind: RecordKind,
    token: String,
}

impl PublicId {
    /// Parses a public ID against the default alphabet, ignoring ASCII case
    /// and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        Self::parse_with(s, DEFAULT_ALPHABET, true)
    }

    pub(crate) fn parse_with(
        s: &str,
        alphabet: &str,
        case_insensitive: bool,
    ) -> Result<Self, IdError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let Some((prefix, token)) = s.split_once('-') else {
            return Err(IdError::MissingSeparator);
        };

        let kind = RecordKind::from_prefix(prefix).ok_or_else(|| IdError::InvalidPrefix {
            expected: PREFIXES,
            actual: prefix.to_string(),
        })?;

        let token = if case_insensitive {
            token.to_ascii_uppercase()
        } else {
            token.to_string()
        };
        if token.is_empty() {
            return Err(IdError::InvalidToken {
                token,
                reason: "token is empty",
            });
        }
        if !token.chars().all(|c| alphabet.contains(c)) {
            return Err(IdError::InvalidToken {
                token,
                reason: "token contains characters outside the alphabet",
            });
        }

        Ok(Self { kind, token })
    }

    /// The record kind named by the prefix.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The encoded portion.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.prefix(), self.token)
    }
}

impl FromStr for PublicId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for PublicId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for PublicId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
