// Copyright (C) 2021-2026 The Dryad Authors.
// This file is part of the Dryad library.

// The Dryad library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Dryad library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Dryad library. If not, see <https://www.gnu.org/licenses/>.

use dryad_span::Span;

use backtrace::Backtrace;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

/// Whether a diagnostic is an error or a warning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// The letter prefixed to the code identifier, `E` or `W`.
    pub fn letter(self) -> char {
        match self {
            Self::Error => 'E',
            Self::Warning => 'W',
        }
    }

    /// The tag used in the one-line diagnostic format.
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
        }
    }
}

/// A diagnostic with a stable code, a message, and a source location.
///
/// The one-line rendering used by emitters is
/// `fileName(line:column)[error|warn]: message`.
#[derive(Clone, Debug, Serialize)]
pub struct FormattedError {
    /// The severity of the diagnostic.
    pub severity: Severity,
    /// The index of the message within its error type, offset by the mask.
    pub exit_code: i32,
    /// The code prefix identifying the originating crate, e.g. `PAR`.
    pub code_identifier: String,
    /// The rendered message text.
    pub message: String,
    /// Optional help text displayed beneath the message.
    pub help: Option<String>,
    /// Where the diagnostic points in the source.
    pub span: Span,
    /// Captured only when `RUST_BACKTRACE` is set.
    #[serde(skip)]
    backtrace: Option<Backtrace>,
}

impl FormattedError {
    /// Creates a formatted diagnostic at `span`.
    pub fn new_from_span(
        message: String,
        help: Option<String>,
        exit_code: i32,
        code_identifier: impl Into<String>,
        severity: Severity,
        span: Span,
    ) -> Self {
        let backtrace = match std::env::var("RUST_BACKTRACE").as_deref() {
            Ok("0") | Err(_) => None,
            Ok(_) => Some(Backtrace::new()),
        };

        Self {
            severity,
            exit_code,
            code_identifier: code_identifier.into(),
            message,
            help,
            span,
            backtrace,
        }
    }

    /// The full code string, e.g. `EPAR0370003`.
    pub fn code(&self) -> String {
        format!("{}{}{:07}", self.severity.letter(), self.code_identifier, self.exit_code)
    }

    /// Renders the diagnostic on one line, prefixed with the file name it
    /// belongs to: `fileName(line:column)[error|warn]: message`.
    pub fn format_with_file(&self, file_name: &str) -> String {
        format!("{}({})[{}]: {}", file_name, self.span, self.severity.label(), self.message)
    }

    /// Renders the one-line format with the severity tag colored, for
    /// terminal emitters.
    pub fn format_with_file_colored(&self, file_name: &str) -> String {
        let label = match self.severity {
            Severity::Error => self.severity.label().bold().red(),
            Severity::Warning => self.severity.label().bold().yellow(),
        };
        format!("{}({})[{}]: {}", file_name, self.span, label, self.message)
    }
}

impl fmt::Display for FormattedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]({}): {}", self.code(), self.span, self.message)?;
        if let Some(help) = &self.help {
            write!(f, "\n    = {}", help)?;
        }
        if let Some(backtrace) = &self.backtrace {
            write!(f, "\n{:?}", backtrace)?;
        }
        Ok(())
    }
}

impl PartialEq for FormattedError {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity
            && self.exit_code == other.exit_code
            && self.code_identifier == other.code_identifier
            && self.message == other.message
            && self.span == other.span
    }
}

impl Eq for FormattedError {}

impl std::error::Error for FormattedError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormattedError {
        FormattedError::new_from_span(
            "expected ';' -- found '}'".into(),
            None,
            370_001,
            "PAR",
            Severity::Error,
            Span::new(3, 14, 27),
        )
    }

    #[test]
    fn code_shape() {
        assert_eq!(sample().code(), "EPAR0370001");
    }

    #[test]
    fn one_line_format() {
        assert_eq!(
            sample().format_with_file("app.d"),
            "app.d(3:14)[error]: expected ';' -- found '}'"
        );
    }
}
