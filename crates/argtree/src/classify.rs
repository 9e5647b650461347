//! Tagging of raw tokens.
//!
//! Only `--<alpha><alpha>...` and `-<alpha>` are option markers. Anything
//! else, `-1` included, is a value: a positional one before the first marker,
//! an option value afterwards.

use crate::{config::Config, error::ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Positional,
    ShortOption,
    LongOption,
    OptionValue,
}

impl TokenKind {
    pub fn is_marker(self) -> bool {
        matches!(self, TokenKind::ShortOption | TokenKind::LongOption)
    }
}

/// Classifies a single token.
///
/// `positional_phase` is true until the first option marker of the stream.
pub fn classify(token: &str, positional_phase: bool) -> TokenKind {
    if let Some(name) = token.strip_prefix("--") {
        if name.len() >= 2 && name.bytes().all(|it| it.is_ascii_alphabetic()) {
            return TokenKind::LongOption;
        }
    }
    if let [b'-', c] = token.as_bytes() {
        if c.is_ascii_alphabetic() {
            return TokenKind::ShortOption;
        }
    }
    if positional_phase {
        TokenKind::Positional
    } else {
        TokenKind::OptionValue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub(crate) idx: usize,
    pub(crate) text: &'t str,
    pub(crate) kind: TokenKind,
}

pub(crate) fn check_limits<S: AsRef<str>>(tokens: &[S], config: &Config) -> Result<(), ErrorKind> {
    if tokens.len() > config.max_tokens {
        return Err(ErrorKind::TooManyTokens { count: tokens.len(), max: config.max_tokens });
    }
    for (index, token) in tokens.iter().enumerate() {
        let len = token.as_ref().len();
        if len > config.max_token_len {
            return Err(ErrorKind::TokenTooLong { index, len, max: config.max_token_len });
        }
    }
    Ok(())
}

/// Tags every token in a single left-to-right pass.
pub(crate) fn classify_all<S: AsRef<str>>(tokens: &[S]) -> Vec<Token<'_>> {
    let mut positional_phase = true;
    let mut res = Vec::with_capacity(tokens.len());
    for (idx, text) in tokens.iter().map(AsRef::as_ref).enumerate() {
        let kind = classify(text, positional_phase);
        if kind.is_marker() {
            positional_phase = false;
        }
        tracing::trace!(idx, text, ?kind, "classified token");
        res.push(Token { idx, text, kind });
    }
    res
}

/// The tokens left to consume, popped from the back.
pub(crate) struct Tokens<'t> {
    rtoks: Vec<Token<'t>>,
}

impl<'t> Tokens<'t> {
    pub(crate) fn new(mut toks: Vec<Token<'t>>) -> Self {
        toks.reverse();
        Self { rtoks: toks }
    }

    pub(crate) fn peek(&self) -> Option<&Token<'t>> {
        self.rtoks.last()
    }

    pub(crate) fn next_if(&mut self, kind: TokenKind) -> Option<Token<'t>> {
        if self.peek()?.kind == kind {
            self.rtoks.pop()
        } else {
            None
        }
    }

    pub(crate) fn next(&mut self) -> Option<Token<'t>> {
        self.rtoks.pop()
    }

    pub(crate) fn markers(&self) -> usize {
        self.rtoks.iter().filter(|it| it.kind.is_marker()).count()
    }
}
