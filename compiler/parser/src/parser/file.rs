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

use super::ParserContext;
use crate::tokens::TokenKind;

use dryad_ast::*;

impl ParserContext<'_, '_> {
    /// Returns a [`Module`]: an optional script line, an optional module
    /// declaration, then top-level declarations until the stream is
    /// exhausted. Declarations that fail to parse are skipped after their
    /// diagnostics are emitted; a partial tree is still produced.
    pub fn parse_module(&mut self) -> Module {
        let span = self.current_span();

        let script_line = if self.current_is(TokenKind::ScriptLine) {
            let text = self.current().text.clone().unwrap_or_default();
            self.advance();
            Some(text)
        } else {
            None
        };

        let module_declaration = if self.at_module_declaration() {
            match self.parse_module_declaration() {
                Ok(declaration) => Some(declaration),
                Err(_) => {
                    self.recover_top_level();
                    None
                }
            }
        } else {
            None
        };

        let mut declarations = Vec::new();
        while self.has_next() {
            // `__EOF__` ends the module early.
            if self.current_is(TokenKind::SpecialEof) {
                break;
            }
            let before = self.cursor();
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(_) => {
                    if self.cursor() == before {
                        self.advance();
                    }
                    self.recover_top_level();
                }
            }
        }

        Module { script_line, module_declaration, declarations, span, id: self.next_id() }
    }

    /// `module` directly, or a bookmarked `deprecated ( ... ) module` /
    /// `deprecated module` prefix.
    fn at_module_declaration(&mut self) -> bool {
        if self.current_is(TokenKind::Module) {
            return true;
        }
        if !self.current_is(TokenKind::Deprecated) {
            return false;
        }
        if self.peek_is(TokenKind::Module) {
            return true;
        }
        let bookmark = self.set_bookmark();
        self.advance();
        let answer = self.current_is(TokenKind::LParen)
            && matches!(self.peek_past_parens().map(|t| t.kind), Some(TokenKind::Module));
        self.go_to_bookmark(bookmark);
        answer
    }

    fn parse_module_declaration(&mut self) -> dryad_errors::Result<ModuleDeclaration> {
        let span = self.current_span();
        let comment = self.take_comment();
        let deprecated = if self.eat(TokenKind::Deprecated) {
            let message = if self.eat(TokenKind::LParen) {
                let message = self.parse_assign_expression()?;
                self.expect(TokenKind::RParen)?;
                Some(message)
            } else {
                None
            };
            Some(DeprecatedModule { message })
        } else {
            None
        };
        self.expect(TokenKind::Module)?;
        if !self.current_is(TokenKind::Identifier) {
            return self.fail(dryad_errors::ParserError::expected_module_name(
                self.current(),
                self.current_span(),
            ));
        }
        let name = self.parse_identifier_chain()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(ModuleDeclaration { deprecated, name, comment, span, id: self.next_id() })
    }

    /// Resynchronizes after a failed top-level declaration: past a `;`,
    /// past a balanced brace block, or over a stray closer.
    fn recover_top_level(&mut self) {
        loop {
            match self.current_kind() {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::LBrace => {
                    self.skip_braces();
                    return;
                }
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    self.advance();
                    return;
                }
                TokenKind::Eof => return,
                _ => self.advance(),
            }
        }
    }
}
