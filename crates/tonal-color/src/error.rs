// SPDX-License-Identifier: MIT
//
// The one failure the color layer knows about: a notation it cannot read.

use thiserror::Error;

/// A rendered or user-supplied notation could not be interpreted.
///
/// Palette generation never surfaces this to the user: callers substitute
/// the fallback color (`L = 0, C = 0, H = 0`) and log the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse color notation `{input}`: {reason}")]
pub struct ParseFailure {
    /// The text that failed to parse.
    pub input: String,
    /// What the parser tripped over.
    pub reason: &'static str,
}

impl ParseFailure {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}
