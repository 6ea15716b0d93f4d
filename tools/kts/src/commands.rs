//! `kts extract` and `kts strip`.

use std::io;

use kts_extract::{extract_block, partition, InvalidKeyword, Keyword};

use crate::options::{ExtractOptions, Output};

/// Failure to run a command. Reported on stderr with exit code 2.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("invalid keyword: {0}")]
    InvalidKeyword(#[from] InvalidKeyword),
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },
}

impl CommandError {
    /// Whether printing usage would help.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CommandError::MissingPath
                | CommandError::UnknownOption(_)
                | CommandError::UnexpectedArgument(_)
        )
    }
}

fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound { path },
            io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CommandError::InvalidUtf8 { path },
            _ => CommandError::Read { path, source },
        }
    })
}

/// Reads the script named in `options` and validates the keyword.
fn load(options: &ExtractOptions) -> Result<(String, Keyword<'_>), CommandError> {
    let path = options.path.as_deref().ok_or(CommandError::MissingPath)?;
    let keyword = Keyword::new(&options.keyword)?;
    tracing::debug!(path, keyword = keyword.as_str(), "loading script");
    Ok((read_file(path)?, keyword))
}

/// What `kts extract` prints for `source`, or `None` when the block is absent.
pub fn render_extract(source: &str, keyword: &Keyword<'_>, output: Output) -> Option<String> {
    let span = extract_block(source, keyword)?;
    Some(match output {
        Output::Text => source[span.to_range()].to_string(),
        Output::Range => span.to_string(),
    })
}

/// `source` with the block blanked, or unchanged when absent.
pub fn render_strip(source: &str, keyword: &Keyword<'_>) -> String {
    partition(source, keyword).body.into_owned()
}

/// Returns `false` when the script has no such block.
pub fn extract(options: &ExtractOptions) -> Result<bool, CommandError> {
    let (source, keyword) = load(options)?;
    match render_extract(&source, &keyword, options.output) {
        Some(rendered) => {
            println!("{rendered}");
            Ok(true)
        }
        None => {
            tracing::debug!(keyword = keyword.as_str(), "no top-level block");
            Ok(false)
        }
    }
}

pub fn strip(options: &ExtractOptions) -> Result<(), CommandError> {
    let (source, keyword) = load(options)?;
    print!("{}", render_strip(&source, &keyword));
    Ok(())
}
