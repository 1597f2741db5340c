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

use crate::tokens::{Token, TokenKind, RECOVERY_ANCHOR_TOKENS};
use crate::ParserOptions;

use dryad_ast::{Identifier, NodeBuilder, NodeID};
use dryad_errors::emitter::Handler;
use dryad_errors::{ParserError, ParserWarning, Result};
use dryad_span::Span;

use fxhash::FxHashMap;

/// Stores a module in tokenized format plus additional context.
/// May be converted into a [`dryad_ast::Module`] by parsing all tokens.
pub struct ParserContext<'b, 'h: 'b> {
    /// Handler used to side-channel emit errors and warnings from the parser.
    pub(crate) handler: &'b Handler<'h>,
    /// The source of node IDs.
    pub(crate) node_builder: &'b NodeBuilder,
    /// The token vector; an `Eof` token is guaranteed at the end.
    tokens: Vec<Token>,
    /// The cursor: an index into `tokens`.
    index: usize,
    /// Parser behavior switches.
    pub(crate) options: ParserOptions<'b>,
    /// Memoized answers of `is_associative_array_literal`, keyed by the
    /// index of the opening bracket.
    pub(crate) aa_literal_cache: FxHashMap<usize, bool>,
}

/// An opaque cursor restore point. Setting one opens a diagnostic
/// suppression scope; it must be closed by exactly one of
/// [`ParserContext::go_to_bookmark`] or [`ParserContext::abandon_bookmark`].
#[must_use]
pub struct Bookmark(usize);

impl<'b, 'h: 'b> ParserContext<'b, 'h> {
    /// Returns a new [`ParserContext`] over `tokens`.
    pub fn new(
        handler: &'b Handler<'h>,
        node_builder: &'b NodeBuilder,
        mut tokens: Vec<Token>,
        options: ParserOptions<'b>,
    ) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let eof = match tokens.last() {
                Some(last) => Token::eof(last.offset, last.line, last.column),
                None => Token::eof(0, 1, 1),
            };
            tokens.push(eof);
        }
        Self { handler, node_builder, tokens, index: 0, options, aa_literal_cache: FxHashMap::default() }
    }

    // ---- cursor -----------------------------------------------------------

    /// The current token.
    pub fn current(&self) -> &Token {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    /// The kind of the current token.
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The token `n` positions ahead of the current one, clamped to `Eof`.
    pub fn peek_n(&self, n: usize) -> &Token {
        let idx = (self.index + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// The token immediately after the current one.
    pub fn peek(&self) -> &Token {
        self.peek_n(1)
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.index.saturating_sub(1)]
    }

    /// Advances the cursor by one token; it never moves past `Eof`.
    pub fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Returns `true` once the cursor sits on `Eof`.
    pub fn at_eof(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Returns `true` if unconsumed tokens remain.
    pub fn has_next(&self) -> bool {
        !self.at_eof()
    }

    /// The raw cursor index, used by the memo table and spans.
    pub(crate) fn cursor(&self) -> usize {
        self.index
    }

    // ---- kind tests -------------------------------------------------------

    /// Checks whether the current token is of kind `kind`.
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Checks whether the current token is one of `kinds`.
    pub fn current_is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Checks whether the next token is of kind `kind`.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Checks whether the next token is one of `kinds`.
    pub fn peek_is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    /// Checks whether the upcoming tokens begin with `kinds`, in order.
    pub fn starts_with(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().enumerate().all(|(n, kind)| self.peek_n(n).kind == *kind)
    }

    // ---- consumption ------------------------------------------------------

    /// Consumes the current token if it is of kind `kind`, returning
    /// whether anything was eaten. The consumed token is `previous()`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Eats any of the given `kinds`, returning `true` if anything was eaten.
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> bool {
        if self.current_is_one_of(kinds) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Eats the expected `kind`, or reports a diagnostic and fails.
    ///
    /// On a mismatch the cursor advances one token so parsing cannot spin,
    /// unless it sits on a recovery anchor (`;`, `)`, `]`, `}`) or `Eof`,
    /// where it holds position for the enclosing production to resynchronize.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.handler.suppressed_over_cap() {
            return self.fail(ParserError::lookahead_exhausted(self.current_span()));
        }
        if self.current_is(kind) {
            let token = self.current().clone();
            self.advance();
            return Ok(token);
        }
        let err = if self.at_eof() {
            ParserError::unexpected_eof(format!("'{}'", kind), self.current_span())
        } else {
            ParserError::unexpected_token(self.current(), format!("'{}'", kind), self.current_span())
        };
        if !self.current_is_one_of(RECOVERY_ANCHOR_TOKENS) && !self.at_eof() {
            self.advance();
        }
        self.fail(err)
    }

    /// Eats an identifier token and converts it to an AST [`Identifier`],
    /// or reports a diagnostic and fails.
    pub fn expect_identifier(&mut self) -> Result<Identifier> {
        if self.current_is(TokenKind::Identifier) {
            let span = self.current_span();
            let name = self.current().text.clone().unwrap_or_default();
            self.advance();
            return Ok(Identifier::new(name, span, self.next_id()));
        }
        let err = ParserError::expected_identifier(self.current(), self.current_span());
        if !self.current_is_one_of(RECOVERY_ANCHOR_TOKENS) && !self.at_eof() {
            self.advance();
        }
        self.fail(err)
    }

    /// Eats the current identifier without failing; used where the caller
    /// has already checked the kind.
    pub(crate) fn eat_identifier(&mut self) -> Option<Identifier> {
        if !self.current_is(TokenKind::Identifier) {
            return None;
        }
        let span = self.current_span();
        let name = self.current().text.clone().unwrap_or_default();
        self.advance();
        Some(Identifier::new(name, span, self.next_id()))
    }

    // ---- balanced regions -------------------------------------------------

    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) {
        if !self.current_is(open) {
            return;
        }
        let mut depth = 0usize;
        while !self.at_eof() {
            let kind = self.current_kind();
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                self.advance();
                if depth == 0 {
                    return;
                }
                continue;
            }
            self.advance();
        }
    }

    /// Advances past a balanced `{ ... }` region, counting nesting.
    pub fn skip_braces(&mut self) {
        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace);
    }

    /// Advances past a balanced `( ... )` region, counting nesting.
    pub fn skip_parens(&mut self) {
        self.skip_balanced(TokenKind::LParen, TokenKind::RParen);
    }

    /// Advances past a balanced `[ ... ]` region, counting nesting.
    pub fn skip_brackets(&mut self) {
        self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket);
    }

    fn peek_past_balanced(&self, open: TokenKind, close: TokenKind) -> Option<&Token> {
        if !self.current_is(open) {
            return None;
        }
        let mut depth = 0usize;
        let mut idx = self.index;
        while idx < self.tokens.len() {
            let kind = self.tokens[idx].kind;
            if kind == TokenKind::Eof {
                return None;
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    return self.tokens.get(idx + 1);
                }
            }
            idx += 1;
        }
        None
    }

    /// The token immediately after the balanced `( ... )` region starting
    /// at the current token, without moving the cursor.
    pub fn peek_past_parens(&self) -> Option<&Token> {
        self.peek_past_balanced(TokenKind::LParen, TokenKind::RParen)
    }

    /// The token immediately after the balanced `[ ... ]` region starting
    /// at the current token, without moving the cursor.
    pub fn peek_past_brackets(&self) -> Option<&Token> {
        self.peek_past_balanced(TokenKind::LBracket, TokenKind::RBracket)
    }

    /// The token immediately after the balanced `{ ... }` region starting
    /// at the current token, without moving the cursor.
    pub fn peek_past_braces(&self) -> Option<&Token> {
        self.peek_past_balanced(TokenKind::LBrace, TokenKind::RBrace)
    }

    // ---- bookmarks --------------------------------------------------------

    /// Captures the cursor and opens a diagnostic suppression scope.
    pub fn set_bookmark(&mut self) -> Bookmark {
        self.handler.push_suppression();
        Bookmark(self.index)
    }

    /// Restores the cursor to `bookmark` and closes its suppression scope.
    pub fn go_to_bookmark(&mut self, bookmark: Bookmark) {
        self.index = bookmark.0;
        self.handler.pop_suppression();
    }

    /// Keeps the advanced cursor and closes the bookmark's suppression scope.
    pub fn abandon_bookmark(&mut self, bookmark: Bookmark) {
        let Bookmark(_) = bookmark;
        self.handler.pop_suppression();
    }

    // ---- diagnostics ------------------------------------------------------

    /// Emits `err` (or counts it while suppressed) and returns it as the
    /// failure value for the enclosing recovery point.
    pub(crate) fn fail<T>(&self, err: ParserError) -> Result<T> {
        self.handler.emit_err(err.clone().into());
        Err(err.into())
    }

    /// Emits the warning `warning` (or counts it while suppressed).
    pub(crate) fn warn(&self, warning: ParserWarning) {
        self.handler.emit_warning(warning.into());
    }

    /// Returns `true` once speculative parsing has to be cut off.
    pub(crate) fn lookahead_exhausted(&self) -> bool {
        self.handler.suppressed_over_cap()
    }

    // ---- spans, ids, comments ---------------------------------------------

    /// The span of the current token.
    pub fn current_span(&self) -> Span {
        let token = self.current();
        Span::new(token.line, token.column, self.index)
    }

    /// The span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        let token = self.previous();
        Span::new(token.line, token.column, self.index.saturating_sub(1))
    }

    /// Hands out the next node ID.
    pub(crate) fn next_id(&self) -> NodeID {
        self.node_builder.next_id()
    }

    /// Claims the doc comment of the current token.
    ///
    /// Outside of speculation the comment is removed from the token so it
    /// cannot be claimed by a second node; under a bookmark the comment is
    /// only copied, keeping it available for the committed re-parse.
    pub(crate) fn take_comment(&mut self) -> Option<String> {
        if self.handler.is_suppressed() {
            self.current().comment.clone()
        } else {
            self.tokens[self.index].comment.take()
        }
    }

    // ---- list helpers -----------------------------------------------------

    /// Parses a `,`-separated list of `inner` until `close` shows up,
    /// accepting a trailing comma. The closing token is not consumed.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        close: TokenKind,
        mut inner: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut list = Vec::new();
        while !self.current_is(close) && !self.at_eof() {
            list.push(inner(self)?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(list)
    }

    /// Parses `( item, item, ... )`, accepting a trailing comma.
    pub(crate) fn parse_paren_comma_list<T>(
        &mut self,
        inner: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.expect(TokenKind::LParen)?;
        let list = self.parse_comma_list(TokenKind::RParen, inner)?;
        self.expect(TokenKind::RParen)?;
        Ok(list)
    }
}
