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
use dryad_errors::{ParserError, Result};

use smallvec::SmallVec;

impl ParserContext<'_, '_> {
    /// Returns a [`Statement`] AST node; dispatches `case`/`default`
    /// first, everything else to [`Self::parse_statement_no_case_no_default`].
    pub fn parse_statement(&mut self) -> Result<Statement> {
        match self.current_kind() {
            TokenKind::Case => self.parse_case_statement(),
            TokenKind::Default => self.parse_default_statement(),
            _ => self.parse_statement_no_case_no_default(),
        }
    }

    /// All statement forms except case groups.
    pub(crate) fn parse_statement_no_case_no_default(&mut self) -> Result<Statement> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(Statement::Empty(EmptyStatement { span, id: self.next_id() }))
            }
            TokenKind::LBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let condition = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                let body = Box::new(self.parse_statement_no_case_no_default()?);
                Ok(Statement::While(Box::new(WhileStatement {
                    condition,
                    body,
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Do => {
                self.advance();
                let body = Box::new(self.parse_statement_no_case_no_default()?);
                self.expect(TokenKind::While)?;
                self.expect(TokenKind::LParen)?;
                let condition = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Statement::DoWhile(Box::new(DoWhileStatement {
                    body,
                    condition,
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Foreach | TokenKind::ForeachReverse => {
                let foreach_ = self.parse_foreach_statement()?;
                Ok(Statement::Foreach(Box::new(foreach_)))
            }
            TokenKind::Switch => self.parse_switch_statement(false),
            TokenKind::Final if self.peek_is(TokenKind::Switch) => {
                self.advance();
                self.parse_switch_statement(true)
            }
            TokenKind::Break => {
                self.advance();
                let label = self.eat_identifier();
                self.expect(TokenKind::Semicolon)?;
                Ok(Statement::Break(BreakStatement { label, span, id: self.next_id() }))
            }
            TokenKind::Continue => {
                self.advance();
                let label = self.eat_identifier();
                self.expect(TokenKind::Semicolon)?;
                Ok(Statement::Continue(ContinueStatement { label, span, id: self.next_id() }))
            }
            TokenKind::Return => {
                self.advance();
                let expression = if self.current_is(TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expression()?)
                };
                self.expect(TokenKind::Semicolon)?;
                Ok(Statement::Return(ReturnStatement { expression, span, id: self.next_id() }))
            }
            TokenKind::Goto => self.parse_goto_statement(),
            TokenKind::With => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let expression = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                let body = Box::new(self.parse_statement_no_case_no_default()?);
                Ok(Statement::With(Box::new(WithStatement {
                    expression,
                    body,
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Synchronized => {
                if self.peek_is(TokenKind::LParen) {
                    self.advance();
                    self.expect(TokenKind::LParen)?;
                    let expression = self.parse_expression()?;
                    self.expect(TokenKind::RParen)?;
                    let body = Box::new(self.parse_statement_no_case_no_default()?);
                    return Ok(Statement::Synchronized(Box::new(SynchronizedStatement {
                        expression: Some(expression),
                        body,
                        span,
                        id: self.next_id(),
                    })));
                }
                if self.is_declaration() {
                    let declaration = self.parse_declaration()?;
                    return Ok(Statement::Declaration(Box::new(declaration)));
                }
                self.advance();
                let body = Box::new(self.parse_statement_no_case_no_default()?);
                Ok(Statement::Synchronized(Box::new(SynchronizedStatement {
                    expression: None,
                    body,
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Throw => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Statement::Throw(ThrowStatement { expression, span, id: self.next_id() }))
            }
            TokenKind::Scope if self.peek_is(TokenKind::LParen) => self.parse_scope_guard(),
            TokenKind::Asm => self.parse_asm_statement(),
            TokenKind::Static if self.peek_is(TokenKind::If) => {
                let condition = self.parse_static_if_condition()?;
                self.parse_conditional_statement_tail(condition, span)
            }
            TokenKind::Static if self.peek_is(TokenKind::Assert) => {
                let assert = self.parse_static_assert_declaration()?;
                Ok(Statement::StaticAssert(assert))
            }
            TokenKind::Static
                if self.peek_is_one_of(&[TokenKind::Foreach, TokenKind::ForeachReverse]) =>
            {
                self.advance();
                let foreach_ = self.parse_foreach_statement()?;
                Ok(Statement::StaticForeach(Box::new(foreach_)))
            }
            TokenKind::Version if self.peek_is(TokenKind::LParen) => {
                let condition = self.parse_version_condition()?;
                self.parse_conditional_statement_tail(CompileCondition::Version(condition), span)
            }
            TokenKind::Debug if !self.peek_is(TokenKind::Assign) => {
                let condition = self.parse_debug_condition()?;
                self.parse_conditional_statement_tail(CompileCondition::Debug(condition), span)
            }
            TokenKind::Identifier if self.peek_is(TokenKind::Colon) => {
                let label = self.expect_identifier()?;
                self.advance();
                let statement = if self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
                    None
                } else {
                    Some(Box::new(self.parse_statement()?))
                };
                Ok(Statement::Labeled(Box::new(LabeledStatement {
                    label,
                    statement,
                    span,
                    id: self.next_id(),
                })))
            }
            _ => {
                if self.is_declaration() {
                    let declaration = self.parse_declaration()?;
                    return Ok(Statement::Declaration(Box::new(declaration)));
                }
                if !self.starts_expression() {
                    return self.fail(ParserError::expected_statement(
                        self.current(),
                        self.current_span(),
                    ));
                }
                let expression = self.parse_expression()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Statement::Expression(ExpressionStatement {
                    expression,
                    span,
                    id: self.next_id(),
                }))
            }
        }
    }

    /// A declaration or a statement, decided by the `is_declaration` oracle.
    pub(crate) fn parse_declaration_or_statement(&mut self) -> Result<Statement> {
        if self.is_declaration() {
            let declaration = self.parse_declaration()?;
            Ok(Statement::Declaration(Box::new(declaration)))
        } else {
            self.parse_statement()
        }
    }

    /// Returns a [`Block`]: `{ declarations-and-statements }` with
    /// per-item recovery.
    pub fn parse_block(&mut self) -> Result<Block> {
        let span = self.current_span();
        self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
            let before = self.cursor();
            match self.parse_declaration_or_statement() {
                Ok(statement) => statements.push(statement),
                Err(_) => {
                    if self.cursor() == before {
                        self.advance();
                    }
                    self.recover_inside_braces();
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Block { statements, span, id: self.next_id() })
    }

    /// Skips to the next plausible item boundary inside a brace list:
    /// past a `;`, past a nested balanced block, or up to the closing
    /// brace.
    pub(crate) fn recover_inside_braces(&mut self) {
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
                TokenKind::RBrace | TokenKind::Eof => return,
                _ => self.advance(),
            }
        }
    }

    fn parse_if_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_if_condition()?;
        self.expect(TokenKind::RParen)?;
        let then = Box::new(self.parse_statement_no_case_no_default()?);
        let otherwise = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement_no_case_no_default()?))
        } else {
            None
        };
        Ok(Statement::If(Box::new(IfStatement {
            condition,
            then,
            otherwise,
            span,
            id: self.next_id(),
        })))
    }

    /// The `if` condition state machine: an optional `auto`/type-constructor
    /// run, then either a declared variable with an initializer or a bare
    /// expression. A bookmark decides.
    fn parse_if_condition(&mut self) -> Result<IfCondition> {
        // `auto x = expr`
        if self.current_is(TokenKind::Auto) && self.peek_is(TokenKind::Identifier) {
            self.advance();
            let name = self.expect_identifier()?;
            self.expect(TokenKind::Assign)?;
            let expression = self.parse_expression()?;
            return Ok(IfCondition {
                variable: Some(IfConditionVariable {
                    is_auto: true,
                    constructors: SmallVec::new(),
                    type_: None,
                    name,
                }),
                expression,
            });
        }

        let bookmark = self.set_bookmark();
        match self.parse_if_condition_variable() {
            Ok(condition) => {
                self.abandon_bookmark(bookmark);
                Ok(condition)
            }
            Err(_) => {
                self.go_to_bookmark(bookmark);
                let expression = self.parse_expression()?;
                Ok(IfCondition { variable: None, expression })
            }
        }
    }

    fn parse_if_condition_variable(&mut self) -> Result<IfCondition> {
        let mut constructors = SmallVec::new();
        while let Some(constructor) = Self::token_to_type_constructor(self.current_kind()) {
            if self.peek_is(TokenKind::LParen) {
                break;
            }
            constructors.push(constructor);
            self.advance();
        }
        // `const x = e` declares with an inferred type; otherwise a type
        // must follow.
        let (type_, name) = if !constructors.is_empty()
            && self.current_is(TokenKind::Identifier)
            && self.peek_is(TokenKind::Assign)
        {
            (None, self.expect_identifier()?)
        } else {
            let type_ = self.parse_type()?;
            let name = self.expect_identifier()?;
            (Some(type_), name)
        };
        self.expect(TokenKind::Assign)?;
        let expression = self.parse_expression()?;
        Ok(IfCondition {
            variable: Some(IfConditionVariable { is_auto: false, constructors, type_, name }),
            expression,
        })
    }

    fn parse_for_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;
        let initializer = if self.eat(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_declaration_or_statement()?))
        };
        let condition = if self.current_is(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;
        let increment = if self.current_is(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement_no_case_no_default()?);
        Ok(Statement::For(Box::new(ForStatement {
            initializer,
            condition,
            increment,
            body,
            span,
            id: self.next_id(),
        })))
    }

    /// A foreach over an aggregate or a range; the range form must
    /// declare exactly one loop variable.
    pub(crate) fn parse_foreach_statement(&mut self) -> Result<ForeachStatement> {
        let span = self.current_span();
        let (kind, variables, aggregate, high) = self.parse_foreach_header(span)?;
        let body = Box::new(self.parse_statement_no_case_no_default()?);
        Ok(ForeachStatement { kind, variables, aggregate, high, body, span, id: self.next_id() })
    }

    /// The shared `foreach (vars; aggregate)` / `foreach (var; low .. high)`
    /// header of runtime and static foreach forms.
    pub(crate) fn parse_foreach_header(
        &mut self,
        span: dryad_span::Span,
    ) -> Result<(ForeachKind, Vec<ForeachType>, Expression, Option<Expression>)> {
        let kind = if self.current_is(TokenKind::ForeachReverse) {
            ForeachKind::ForeachReverse
        } else {
            ForeachKind::Foreach
        };
        if !self.eat(TokenKind::Foreach) && !self.eat(TokenKind::ForeachReverse) {
            return self.fail(ParserError::unexpected_token(
                self.current(),
                "'foreach' or 'foreach_reverse'",
                self.current_span(),
            ));
        }
        self.expect(TokenKind::LParen)?;
        let mut variables = vec![self.parse_foreach_type()?];
        while self.eat(TokenKind::Comma) {
            variables.push(self.parse_foreach_type()?);
        }
        self.expect(TokenKind::Semicolon)?;
        let aggregate = self.parse_expression()?;
        let high = if self.eat(TokenKind::DotDot) {
            if variables.len() != 1 {
                self.handler.emit_err(
                    ParserError::foreach_range_single_variable(variables.len(), span).into(),
                );
            }
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        Ok((kind, variables, aggregate, high))
    }

    /// One foreach loop variable: `ref`?, type constructors, an optional
    /// type, and the name.
    pub(crate) fn parse_foreach_type(&mut self) -> Result<ForeachType> {
        let span = self.current_span();
        let is_ref = self.eat(TokenKind::Ref);
        let mut constructors = SmallVec::new();
        while let Some(constructor) = Self::token_to_type_constructor(self.current_kind()) {
            if self.peek_is(TokenKind::LParen) {
                break;
            }
            constructors.push(constructor);
            self.advance();
        }
        let (type_, name) = if self.current_is(TokenKind::Identifier)
            && self.peek_is_one_of(&[TokenKind::Comma, TokenKind::Semicolon])
        {
            (None, self.expect_identifier()?)
        } else {
            let type_ = self.parse_type()?;
            let name = self.expect_identifier()?;
            (Some(type_), name)
        };
        Ok(ForeachType { is_ref, constructors, type_, name, span, id: self.next_id() })
    }

    fn parse_switch_statement(&mut self, is_final: bool) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Switch)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement_no_case_no_default()?);
        Ok(Statement::Switch(Box::new(SwitchStatement {
            is_final,
            condition,
            body,
            span,
            id: self.next_id(),
        })))
    }

    /// A `case` group, with the `: ..` lookahead for case ranges.
    fn parse_case_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Case)?;
        let mut expressions = vec![self.parse_assign_expression()?];
        while self.eat(TokenKind::Comma) && !self.current_is(TokenKind::Colon) {
            expressions.push(self.parse_assign_expression()?);
        }
        self.expect(TokenKind::Colon)?;

        if self.current_is(TokenKind::DotDot) {
            self.advance();
            self.expect(TokenKind::Case)?;
            let high = self.parse_assign_expression()?;
            self.expect(TokenKind::Colon)?;
            let statements = self.parse_case_body()?;
            let low = expressions.swap_remove(0);
            return Ok(Statement::CaseRange(Box::new(CaseRangeStatement {
                low,
                high,
                statements,
                span,
                id: self.next_id(),
            })));
        }

        let statements = self.parse_case_body()?;
        Ok(Statement::Case(Box::new(CaseStatement {
            expressions,
            statements,
            span,
            id: self.next_id(),
        })))
    }

    fn parse_default_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Default)?;
        self.expect(TokenKind::Colon)?;
        let statements = self.parse_case_body()?;
        Ok(Statement::Default(Box::new(DefaultStatement { statements, span, id: self.next_id() })))
    }

    /// The statements of a case group, up to the next `case`, `default`,
    /// or closing brace.
    fn parse_case_body(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.current_is_one_of(&[
            TokenKind::Case,
            TokenKind::Default,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]) {
            let before = self.cursor();
            match self.parse_declaration_or_statement() {
                Ok(statement) => statements.push(statement),
                Err(_) => {
                    if self.cursor() == before {
                        self.advance();
                    }
                    self.recover_inside_braces();
                }
            }
        }
        Ok(statements)
    }

    fn parse_goto_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Goto)?;
        let target = match self.current_kind() {
            TokenKind::Default => {
                self.advance();
                GotoTarget::Default
            }
            TokenKind::Case => {
                self.advance();
                if self.current_is(TokenKind::Semicolon) {
                    GotoTarget::Case(None)
                } else {
                    GotoTarget::Case(Some(self.parse_expression()?))
                }
            }
            _ => GotoTarget::Label(self.expect_identifier()?),
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::Goto(GotoStatement { target, span, id: self.next_id() }))
    }

    /// `try` requires at least one of `catch`/`finally`; a parameterless
    /// catch terminates the catch list.
    fn parse_try_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Try)?;
        let block = Box::new(self.parse_statement_no_case_no_default()?);
        let mut catches = Vec::new();
        let mut last_catch = None;
        while self.current_is(TokenKind::Catch) {
            let catch_span = self.current_span();
            self.advance();
            if self.eat(TokenKind::LParen) {
                let type_ = self.parse_type()?;
                let name = self.eat_identifier();
                self.expect(TokenKind::RParen)?;
                let body = Box::new(self.parse_statement_no_case_no_default()?);
                catches.push(Catch { type_, name, body, span: catch_span, id: self.next_id() });
            } else {
                let body = Box::new(self.parse_statement_no_case_no_default()?);
                last_catch = Some(LastCatch { body, span: catch_span, id: self.next_id() });
                break;
            }
        }
        let finally = if self.current_is(TokenKind::Finally) {
            let finally_span = self.current_span();
            self.advance();
            let body = Box::new(self.parse_statement_no_case_no_default()?);
            Some(Finally { body, span: finally_span, id: self.next_id() })
        } else {
            None
        };
        if catches.is_empty() && last_catch.is_none() && finally.is_none() {
            return self.fail(ParserError::try_without_catch_or_finally(span));
        }
        Ok(Statement::Try(Box::new(TryStatement {
            block,
            catches,
            last_catch,
            finally,
            span,
            id: self.next_id(),
        })))
    }

    fn parse_scope_guard(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Scope)?;
        self.expect(TokenKind::LParen)?;
        let keyword = self.expect_identifier()?;
        let kind = match keyword.name.as_str() {
            "exit" => ScopeGuardKind::Exit,
            "success" => ScopeGuardKind::Success,
            "failure" => ScopeGuardKind::Failure,
            _ => {
                return self.fail(ParserError::unexpected_token(
                    &keyword.name,
                    "'exit', 'success', or 'failure'",
                    keyword.span,
                ))
            }
        };
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement_no_case_no_default()?);
        Ok(Statement::ScopeGuard(Box::new(ScopeGuardStatement {
            kind,
            body,
            span,
            id: self.next_id(),
        })))
    }

    /// The `else` half of a compile-time conditional over statements.
    pub(crate) fn parse_conditional_statement_tail(
        &mut self,
        condition: CompileCondition,
        span: dryad_span::Span,
    ) -> Result<Statement> {
        let true_statement = Box::new(self.parse_declaration_or_statement()?);
        let false_statement = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_declaration_or_statement()?))
        } else {
            None
        };
        Ok(Statement::Conditional(Box::new(ConditionalStatement {
            condition,
            true_statement,
            false_statement,
            span,
            id: self.next_id(),
        })))
    }
}
