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

//! A recoverable recursive-descent parser turning a pre-lexed D token
//! vector into a typed [`Module`] AST.
//!
//! The entry point is [`parse_module`]. A file with errors still yields a
//! partial tree; the [`Handler`]'s error count tells callers not to rely
//! on completeness.

#![forbid(unsafe_code)]

pub mod tokens;
pub use tokens::{Relex, Token, TokenKind};

pub mod parser;
pub use parser::*;

#[cfg(test)]
mod test;

use dryad_ast::{Module, NodeBuilder};
use dryad_errors::emitter::{CallbackEmitter, Handler};

use tracing::trace;

/// Parses `tokens` into a [`Module`], reporting diagnostics through
/// `handler` with `file_name` attached verbatim.
///
/// Always returns a root node; recovery skips unparsable regions and a
/// non-zero `handler.err_count()` signals the tree may be partial.
pub fn parse_module<'b, 'h: 'b>(
    handler: &'b Handler<'h>,
    node_builder: &'b NodeBuilder,
    tokens: Vec<Token>,
    file_name: &str,
) -> Module {
    parse_module_with_options(handler, node_builder, tokens, file_name, ParserOptions::default())
}

/// [`parse_module`] with explicit [`ParserOptions`].
pub fn parse_module_with_options<'b, 'h: 'b>(
    handler: &'b Handler<'h>,
    node_builder: &'b NodeBuilder,
    tokens: Vec<Token>,
    file_name: &str,
    options: ParserOptions<'b>,
) -> Module {
    trace!(file = file_name, tokens = tokens.len(), "parsing module");
    handler.set_file_name(file_name);
    let mut context = ParserContext::new(handler, node_builder, tokens, options);
    let module = context.parse_module();
    trace!(
        file = file_name,
        errors = handler.err_count(),
        warnings = handler.warn_count(),
        "parsed module"
    );
    module
}

/// Parses `tokens` into a [`Module`], forwarding each diagnostic to
/// `on_message` as `(file_name, line, column, message, is_error)` and
/// writing the final counters on return.
pub fn parse_module_with_callback(
    tokens: Vec<Token>,
    file_name: &str,
    on_message: impl FnMut(&str, usize, usize, &str, bool),
    error_out: Option<&mut usize>,
    warning_out: Option<&mut usize>,
) -> Module {
    let handler = Handler::new(CallbackEmitter::new(on_message));
    let node_builder = NodeBuilder::default();
    let module = parse_module(&handler, &node_builder, tokens, file_name);
    if let Some(error_out) = error_out {
        *error_out = handler.err_count();
    }
    if let Some(warning_out) = warning_out {
        *warning_out = handler.warn_count();
    }
    module
}
