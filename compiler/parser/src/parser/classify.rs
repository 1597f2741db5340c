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

//! The bounded-lookahead grammar oracles. None of these observably move
//! the cursor; the speculative ones run under a bookmark.

use super::ParserContext;
use crate::tokens::TokenKind;

/// The tokens that unambiguously begin a statement, never a declaration.
const STATEMENT_ONLY_TOKENS: &[TokenKind] = &[
    TokenKind::Asm,
    TokenKind::Assert,
    TokenKind::Break,
    TokenKind::Case,
    TokenKind::Continue,
    TokenKind::Default,
    TokenKind::Do,
    TokenKind::For,
    TokenKind::Foreach,
    TokenKind::ForeachReverse,
    TokenKind::Goto,
    TokenKind::If,
    TokenKind::Return,
    TokenKind::Switch,
    TokenKind::Throw,
    TokenKind::Try,
    TokenKind::While,
    TokenKind::With,
    TokenKind::LBrace,
];

/// The storage-class keywords tested by `is_storage_class`.
const STORAGE_CLASS_TOKENS: &[TokenKind] = &[
    TokenKind::Abstract,
    TokenKind::Auto,
    TokenKind::Const,
    TokenKind::Deprecated,
    TokenKind::Enum,
    TokenKind::Extern,
    TokenKind::Final,
    TokenKind::Gshared,
    TokenKind::Immutable,
    TokenKind::Inout,
    TokenKind::Lazy,
    TokenKind::Nothrow,
    TokenKind::Override,
    TokenKind::Pure,
    TokenKind::Ref,
    TokenKind::Scope,
    TokenKind::Shared,
    TokenKind::Static,
    TokenKind::Synchronized,
];

impl ParserContext<'_, '_> {
    /// Returns `true` iff the current token begins an attribute: a storage
    /// class, protection, linkage, `@x(...)`, pragma, alignment, or
    /// deprecation.
    ///
    /// The notable ambiguities: `shared`/`const`/`immutable`/`inout`/
    /// `scope` are attributes only when *not* followed by `(` (otherwise
    /// they are type constructors or a scope guard); `pragma` is an
    /// attribute only when its parenthesized form is not followed by `;`;
    /// `static` is not an attribute before `assert`, `this`, `if`, `~`,
    /// or a `foreach`; `shared static this`/`~this` belongs to the
    /// static-constructor family.
    pub fn is_attribute(&self) -> bool {
        match self.current_kind() {
            TokenKind::Const | TokenKind::Immutable | TokenKind::Inout | TokenKind::Scope => {
                !self.peek_is(TokenKind::LParen)
            }
            TokenKind::Shared => {
                if self.peek_is(TokenKind::LParen) {
                    return false;
                }
                // `shared static this()` / `shared static ~this()`.
                !(self.peek_is(TokenKind::Static)
                    && matches!(self.peek_n(2).kind, TokenKind::This | TokenKind::Tilde))
            }
            TokenKind::Static => !matches!(
                self.peek().kind,
                TokenKind::Assert
                    | TokenKind::This
                    | TokenKind::If
                    | TokenKind::Tilde
                    | TokenKind::Foreach
                    | TokenKind::ForeachReverse
            ),
            TokenKind::Synchronized => !self.peek_is(TokenKind::LParen),
            TokenKind::Pragma => {
                if !self.peek_is(TokenKind::LParen) {
                    return false;
                }
                !matches!(self.peek_past_parens().map(|t| t.kind), Some(TokenKind::Semicolon))
            }
            TokenKind::Abstract
            | TokenKind::Align
            | TokenKind::At
            | TokenKind::Auto
            | TokenKind::Deprecated
            | TokenKind::Export
            | TokenKind::Extern
            | TokenKind::Final
            | TokenKind::Gshared
            | TokenKind::Lazy
            | TokenKind::Nothrow
            | TokenKind::Override
            | TokenKind::Package
            | TokenKind::Private
            | TokenKind::Protected
            | TokenKind::Public
            | TokenKind::Pure
            | TokenKind::Ref => true,
            _ => false,
        }
    }

    /// `is_attribute` restricted to the storage-class tokens.
    pub fn is_storage_class(&self) -> bool {
        self.current_is_one_of(STORAGE_CLASS_TOKENS) && self.is_attribute()
    }

    /// Returns `true` iff the tokens inside `cast(` form one of the
    /// admitted qualifier runs: `const`, `const shared`, `shared`,
    /// `shared const`, `immutable`, `inout`, `inout shared`,
    /// `shared inout`, each closing the paren.
    pub fn is_cast_qualifier(&self) -> bool {
        match self.current_kind() {
            TokenKind::Const => {
                self.peek_is(TokenKind::RParen)
                    || (self.peek_is(TokenKind::Shared) && self.peek_n(2).kind == TokenKind::RParen)
            }
            TokenKind::Immutable => self.peek_is(TokenKind::RParen),
            TokenKind::Inout => {
                self.peek_is(TokenKind::RParen)
                    || (self.peek_is(TokenKind::Shared) && self.peek_n(2).kind == TokenKind::RParen)
            }
            TokenKind::Shared => {
                self.peek_is(TokenKind::RParen)
                    || (self.peek_is_one_of(&[TokenKind::Const, TokenKind::Inout])
                        && self.peek_n(2).kind == TokenKind::RParen)
            }
            _ => false,
        }
    }

    /// Returns `true` iff the `[` at the cursor opens an associative
    /// array literal: a speculatively parsed first element followed by
    /// `:`. Memoized by the bracket's token index.
    pub fn is_associative_array_literal(&mut self) -> bool {
        debug_assert!(self.current_is(TokenKind::LBracket));
        let key = self.cursor();
        if let Some(answer) = self.aa_literal_cache.get(&key) {
            return *answer;
        }
        let bookmark = self.set_bookmark();
        self.advance();
        let answer = !self.current_is(TokenKind::RBracket)
            && self.parse_assign_expression().is_ok()
            && self.current_is(TokenKind::Colon);
        self.go_to_bookmark(bookmark);
        self.aa_literal_cache.insert(key, answer);
        answer
    }

    /// The pivotal declaration-vs-statement oracle.
    ///
    /// A whitelist covers the tokens that always open a declaration, a
    /// blacklist the unambiguous statement starters; for everything else
    /// the answer is a full speculative `parse_declaration`.
    pub fn is_declaration(&mut self) -> bool {
        match self.current_kind() {
            TokenKind::Final => !self.peek_is(TokenKind::Switch),
            TokenKind::Debug | TokenKind::Version => {
                if self.peek_is(TokenKind::Assign) {
                    return true;
                }
                self.speculate_declaration()
            }
            TokenKind::Synchronized => {
                if self.peek_is(TokenKind::LParen) {
                    false
                } else {
                    self.speculate_declaration()
                }
            }
            TokenKind::Static => match self.peek().kind {
                TokenKind::If
                | TokenKind::Assert
                | TokenKind::Foreach
                | TokenKind::ForeachReverse => false,
                TokenKind::This | TokenKind::Tilde => true,
                _ => true,
            },
            TokenKind::Scope => {
                // `scope (exit|success|failure)` is a guard statement.
                if self.peek_is(TokenKind::LParen) {
                    false
                } else {
                    true
                }
            }
            TokenKind::Alias
            | TokenKind::Class
            | TokenKind::Enum
            | TokenKind::Import
            | TokenKind::Interface
            | TokenKind::Invariant
            | TokenKind::Struct
            | TokenKind::Template
            | TokenKind::Union
            | TokenKind::Unittest
            | TokenKind::This
            | TokenKind::Tilde
            | TokenKind::At => true,
            kind if kind.is_basic_type() => {
                !self.peek_is_one_of(&[TokenKind::Dot, TokenKind::LParen])
            }
            kind if kind.is_literal() => false,
            kind if STATEMENT_ONLY_TOKENS.contains(&kind) => false,
            _ if self.is_attribute() => true,
            _ => self.speculate_declaration(),
        }
    }

    fn speculate_declaration(&mut self) -> bool {
        if self.lookahead_exhausted() {
            return false;
        }
        let bookmark = self.set_bookmark();
        let answer = self.parse_declaration().is_ok();
        self.go_to_bookmark(bookmark);
        answer
    }

    /// Only valid while deciding template parameters and arguments:
    /// speculatively parses a type and answers `true` iff it is followed
    /// by `,`, `)`, or `=`.
    pub fn is_type(&mut self) -> bool {
        if self.lookahead_exhausted() {
            return false;
        }
        let bookmark = self.set_bookmark();
        let answer = self.parse_type().is_ok()
            && self.current_is_one_of(&[TokenKind::Comma, TokenKind::RParen, TokenKind::Assign]);
        self.go_to_bookmark(bookmark);
        answer
    }
}
