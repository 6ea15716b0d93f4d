//! Command-line options for `kts extract` and `kts strip`.

use crate::commands::CommandError;

/// Keyword used when neither `--keyword` nor `KTS_KEYWORD` is given.
pub const DEFAULT_KEYWORD: &str = "buildscript";

/// Environment variable overriding [`DEFAULT_KEYWORD`].
pub const KEYWORD_ENV: &str = "KTS_KEYWORD";

/// What `kts extract` prints for a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Output {
    /// The block text itself.
    #[default]
    Text,
    /// The half-open byte range, `start..end`.
    Range,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Script to scan.
    pub path: Option<String>,
    /// Block keyword to search for.
    pub keyword: String,
    pub output: Output,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            path: None,
            keyword: DEFAULT_KEYWORD.to_string(),
            output: Output::Text,
        }
    }
}

impl ExtractOptions {
    /// Defaults, with the keyword taken from `KTS_KEYWORD` when set.
    pub fn from_env() -> Self {
        Self::with_env_keyword(std::env::var(KEYWORD_ENV).ok())
    }

    fn with_env_keyword(keyword: Option<String>) -> Self {
        match keyword {
            Some(keyword) if !keyword.is_empty() => ExtractOptions {
                keyword,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Applies `args` (everything after the subcommand) on top of `self`.
    ///
    /// `--range` is only meaningful for `extract`; `strip` passes
    /// `allow_range = false` and gets an error for it.
    pub fn parse(mut self, args: &[String], allow_range: bool) -> Result<Self, CommandError> {
        for arg in args {
            if let Some(keyword) = arg.strip_prefix("--keyword=") {
                self.keyword = keyword.to_string();
            } else if arg == "--range" && allow_range {
                self.output = Output::Range;
            } else if arg.starts_with('-') {
                return Err(CommandError::UnknownOption(arg.clone()));
            } else if self.path.is_none() {
                self.path = Some(arg.clone());
            } else {
                return Err(CommandError::UnexpectedArgument(arg.clone()));
            }
        }
        Ok(self)
    }
}
