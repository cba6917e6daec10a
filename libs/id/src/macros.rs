//! Macros for defining typed record IDs.

/// Macro to define a typed record ID bound to a [`RecordKind`](crate::RecordKind).
///
/// This generates a newtype wrapper around the raw `u64` primary key with:
/// - A `KIND` constant
/// - `new()` / `value()` accessors
/// - `to_public()` and `from_public()` that go through a
///   [`PublicIdCodec`](crate::PublicIdCodec)
/// - `Display`, `From<u64>`, and `TryFrom<i64>` (rejecting negatives)
/// - `Serialize` and `Deserialize` as a plain number
///
/// # Example
///
/// ```ignore
/// define_record_id!(OrderId, RecordKind::Order);
///
/// let public = OrderId::new(101).to_public(&codec);
/// let back = OrderId::from_public(&codec, &public);
/// ```
#[macro_export]
macro_rules! define_record_id {
    ($name:ident, $kind:expr) => {
        /// A raw primary key for this record kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// The record kind this ID belongs to.
            pub const KIND: $crate::RecordKind = $kind;

            /// Wraps a raw primary key.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw primary key.
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Renders the public identifier, e.g. `ORD-JL995L`.
            #[must_use]
            pub fn to_public(&self, codec: &$crate::PublicIdCodec) -> String {
                codec.encode(Self::KIND, self.0)
            }

            /// Resolves a public identifier or bare token back to the raw key.
            pub fn from_public(codec: &$crate::PublicIdCodec, input: &str) -> Option<Self> {
                codec.decode(Self::KIND, input).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::IdError;

            fn try_from(id: i64) -> Result<Self, Self::Error> {
                u64::try_from(id)
                    .map(Self)
                    .map_err(|_| $crate::IdError::NegativeId(id))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u64(self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let id = u64::deserialize(deserializer)?;
                Ok(Self(id))
            }
        }
    };
}
