//! # chv-id
//!
//! Reversible public identifiers for CaroHans Ventures records.
//!
//! Orders and clients are stored under sequential integer keys. Showing those
//! keys in URLs, invoices, and support emails leaks record counts and invites
//! enumeration, so every customer-facing surface shows a public ID instead:
//!
//! - `ORD-JL995L` for an order
//! - `CUS-QL4J2L` for a client
//!
//! ## Format
//!
//! `{prefix}-{token}` where the token is at least six characters from
//! `ABCDEFGHJKLMNPQRSTUVWXYZ23456789`. Tokens are derived from the key and a
//! per-kind salt (`{base salt}-orders`, `{base salt}-clients`) and are never
//! stored; they are computed when rendering and decoded when resolving input.
//!
//! The format is a public contract. Changing the alphabet, minimum length, or
//! salt invalidates every ID already handed out.
//!
//! ## Usage
//!
//! ```
//! use chv_id::{CodecConfig, PublicIdCodec, RecordKind};
//!
//! let codec = PublicIdCodec::new(&CodecConfig::new("test-salt")).unwrap();
//! let public = codec.encode(RecordKind::Order, 101);
//! assert_eq!(public, "ORD-JL995L");
//! assert_eq!(codec.decode(RecordKind::Order, "ord-jl995l"), Some(101));
//! assert_eq!(codec.decode(RecordKind::Order, "not-a-real-id"), None);
//! ```
//!
//! Decoding never fails loudly: anything that does not decode is `None`, and
//! [`PublicIdCodec::resolve_lookup`] turns it into a literal search term.
//!
//! This is obfuscation, not access control. Bare tokens are not tagged with
//! their kind, so a token from one namespace can occasionally decode in the
//! other; only the prefix separates them.

mod classify;
mod codec;
mod config;
mod error;
mod hashids;
mod macros;
mod public_id;
mod types;

pub use classify::{looks_like_public_id, looks_like_token, LookupKey};
pub use codec::PublicIdCodec;
pub use config::{
    CodecConfig, DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH, DEFAULT_SALT, SALT_ENV_VAR,
};
pub use error::IdError;
pub use hashids::{Hashids, MAX_MIN_LENGTH, MIN_ALPHABET_LENGTH};
pub use public_id::PublicId;
pub use types::*;
