use texel_format_registry::FormatError;
use thiserror::Error;

/// Errors surfaced to the user by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),
}
