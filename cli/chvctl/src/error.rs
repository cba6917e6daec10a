//! Error handling and display for the CLI.

use chv_id::IdError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{count} of {total} input(s) could not be decoded")]
    Undecodable { count: usize, total: usize },

    #[error("{0} is outside the primary key range 0..={max}", max = u64::MAX)]
    KeyOutOfRange(i128),

    #[error("{0}")]
    Id(#[from] IdError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

pub(crate) fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let cli_err = err.downcast_ref::<CliError>().or_else(|| {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<CliError>())
    })?;

    match cli_err {
        CliError::Undecodable { .. } => Some(
            "Hint: IDs only decode with the salt they were issued under. \
             Check --salt / CHV_ID_SALT and the record kind.",
        ),
        CliError::KeyOutOfRange(_) => {
            Some("Hint: primary keys are unsigned 64-bit integers; check the value you copied.")
        }
        CliError::Id(IdError::NegativeId(_)) => {
            Some("Hint: primary keys are never negative; check the value you copied.")
        }
        CliError::Id(IdError::InvalidConfig { .. }) => {
            Some("Hint: check min_length in config.json; it must be between 0 and 64.")
        }
        CliError::Id(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn test_hint_for_undecodable() {
        let err: anyhow::Error = CliError::Undecodable { count: 1, total: 2 }.into();
        assert_eq!(err.to_string(), "1 of 2 input(s) could not be decoded");
        assert!(hint_for(&err).unwrap().contains("salt"));
    }

    #[test]
    fn test_hint_through_context() {
        let err = Err::<(), _>(CliError::Id(IdError::NegativeId(-4)))
            .context("failed to encode order -4")
            .unwrap_err();
        assert!(hint_for(&err).unwrap().contains("never negative"));
    }

    #[test]
    fn test_hint_for_out_of_range_key() {
        let err: anyhow::Error = CliError::KeyOutOfRange(-1 << 70).into();
        assert!(err.to_string().contains("18446744073709551615"));
        assert!(hint_for(&err).unwrap().contains("64-bit"));
    }

    #[test]
    fn test_no_hint_for_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert!(hint_for(&err).is_none());
    }
}
