//! Codec configuration.
//!
//! The salt is the only secret. It is read once (usually at process start)
//! and handed to [`crate::PublicIdCodec::new`]; nothing in this crate reads
//! the environment behind the caller's back.

use std::fmt;

use crate::types::RecordKind;

/// Environment variable holding the base salt.
pub const SALT_ENV_VAR: &str = "CHV_ID_SALT";

/// Salt used when [`SALT_ENV_VAR`] is unset.
///
/// This value ships in the source tree and offers no secrecy. Running with it
/// in production makes every public ID reversible by anyone.
pub const DEFAULT_SALT: &str = "carohans-ventures-public-ids";

/// Token alphabet: A-Z and 2-9 without `I` and `O`.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Minimum token length.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Configuration for a [`crate::PublicIdCodec`].
///
/// Changing any field after IDs have been shared externally invalidates
/// every previously issued public ID.
#[derive(Clone, PartialEq, Eq)]
pub struct CodecConfig {
    salt: String,
    alphabet: String,
    min_length: usize,
    default_salt: bool,
}

impl CodecConfig {
    /// Creates a configuration with the default alphabet and minimum length.
    pub fn new(salt: impl Into<String>) -> Self {
        let salt = salt.into();
        let default_salt = salt == DEFAULT_SALT;
        Self {
            salt,
            alphabet: DEFAULT_ALPHABET.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            default_salt,
        }
    }

    /// Reads the salt from [`SALT_ENV_VAR`], falling back to [`DEFAULT_SALT`].
    ///
    /// A blank value counts as unset; any other value is used verbatim,
    /// surrounding whitespace included. The fallback is logged at warn level.
    pub fn from_env() -> Self {
        Self::from_salt_var(std::env::var(SALT_ENV_VAR).ok())
    }

    /// Builds a configuration from an optional salt setting, applying the
    /// same fallback rules as [`CodecConfig::from_env`].
    pub fn from_salt_var(value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(salt) => Self::new(salt),
            None => {
                tracing::warn!(
                    env_var = SALT_ENV_VAR,
                    "public ID salt not configured, using the built-in default salt; \
                     issued IDs are not private"
                );
                Self::new(DEFAULT_SALT)
            }
        }
    }

    /// Overrides the token alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Overrides the minimum token length.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// The base salt shared by all record kinds.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The token alphabet.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// The minimum token length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns true when running on [`DEFAULT_SALT`].
    pub fn uses_default_salt(&self) -> bool {
        self.default_salt
    }

    /// The salt namespace for one record kind: `{base}-{suffix}`.
    pub fn salt_for(&self, kind: RecordKind) -> String {
        format!("{}-{}", self.salt, kind.salt_suffix())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SALT)
    }
}

impl fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecConfig")
            .field("salt", &"<redacted>")
            .field("alphabet", &self.alphabet)
            .field("min_length", &self.min_length)
            .field("default_salt", &self.default_salt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.salt(), DEFAULT_SALT);
        assert_eq!(config.alphabet(), DEFAULT_ALPHABET);
        assert_eq!(config.min_length(), 6);
        assert!(config.uses_default_salt());
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        assert_eq!(DEFAULT_ALPHABET.chars().count(), 32);
        for c in ['0', '1', 'O', 'I'] {
            assert!(!DEFAULT_ALPHABET.contains(c), "alphabet contains {c}");
        }
    }

    #[test]
    fn test_salt_var_fallback() {
        assert!(CodecConfig::from_salt_var(None).uses_default_salt());
        assert!(CodecConfig::from_salt_var(Some("   ".to_string())).uses_default_salt());

        // Non-blank values are kept verbatim.
        let config = CodecConfig::from_salt_var(Some(" s3cret ".to_string()));
        assert_eq!(config.salt(), " s3cret ");
        assert!(!config.uses_default_salt());
    }

    #[test]
    fn test_salt_for_kind() {
        let config = CodecConfig::new("base");
        assert_eq!(config.salt_for(RecordKind::Order), "base-orders");
        assert_eq!(config.salt_for(RecordKind::Client), "base-clients");
    }

    #[test]
    fn test_builder_overrides() {
        let config = CodecConfig::new("base")
            .with_alphabet("abcdefghijklmnopqrstuvwxyz")
            .with_min_length(10);
        assert_eq!(config.alphabet(), "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(config.min_length(), 10);
    }

    #[test]
    fn test_debug_redacts_salt() {
        let rendered = format!("{:?}", CodecConfig::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
