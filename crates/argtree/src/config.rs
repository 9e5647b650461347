//! Tunable bounds and matching behavior of the parser.

/// Parser configuration.
///
/// Inputs exceeding a limit are rejected up front with a dedicated error,
/// nothing is ever truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of tokens per invocation.
    ///
    /// Default: 256.
    pub max_tokens: usize,

    /// Maximum length of a single token, in bytes.
    ///
    /// Default: 4096.
    pub max_token_len: usize,

    /// Maximum number of option markers per invocation.
    ///
    /// Default: 256.
    pub max_options: usize,

    /// Accept an unambiguous prefix of a long option name, e.g. `--app` for
    /// `--apple`. An exact match always takes precedence.
    ///
    /// Default: off.
    pub long_prefix_match: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tokens: 0x100,
            max_token_len: 0x1000,
            max_options: 0x100,
            long_prefix_match: false,
        }
    }
}

impl Config {
    pub fn with_max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = max;
        self
    }

    pub fn with_max_options(mut self, max: usize) -> Self {
        self.max_options = max;
        self
    }

    pub fn with_long_prefix_match(mut self, yes: bool) -> Self {
        self.long_prefix_match = yes;
        self
    }
}
