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

use super::type_::TYPE_CTOR_TOKENS;
use super::ParserContext;
use crate::tokens::{TokenKind, SPECIAL_KEYWORD_TOKENS};

use dryad_ast::*;
use dryad_errors::{ParserError, ParserWarning, Result};

use smallvec::SmallVec;

const ASSIGN_TOKENS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::UShrEq,
    TokenKind::ShrEq,
    TokenKind::ShlEq,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::PercentEq,
    TokenKind::AmpEq,
    TokenKind::SlashEq,
    TokenKind::PipeEq,
    TokenKind::CaretCaretEq,
    TokenKind::CaretEq,
    TokenKind::TildeEq,
];

const REL_TOKENS: &[TokenKind] = &[
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::Gt,
    TokenKind::GtEq,
    TokenKind::LtGt,
    TokenKind::LtGtEq,
    TokenKind::NotLt,
    TokenKind::NotLtEq,
    TokenKind::NotGt,
    TokenKind::NotGtEq,
    TokenKind::NotLtGt,
    TokenKind::NotLtGtEq,
];

const PREFIX_OP_TOKENS: &[TokenKind] = &[
    TokenKind::Amp,
    TokenKind::Not,
    TokenKind::Star,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Tilde,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
];

impl ParserContext<'_, '_> {
    /// Returns an [`Expression`]: comma-separated assign expressions,
    /// left-associative.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let mut expr = self.parse_assign_expression()?;
        while self.current_is(TokenKind::Comma) {
            self.advance();
            let right = self.parse_assign_expression()?;
            expr = Self::bin_expr(expr, right, BinaryOperation::Comma, self.next_id());
        }
        Ok(expr)
    }

    /// Returns an [`Expression`]: a ternary, optionally followed by an
    /// assignment operator and its value.
    pub fn parse_assign_expression(&mut self) -> Result<Expression> {
        let place = self.parse_ternary_expression()?;
        if let Some(op) = self.eat_assign_op() {
            let value = self.parse_expression()?;
            let span = place.span();
            return Ok(Expression::Assign(Box::new(AssignExpression {
                place: Box::new(place),
                value: Box::new(value),
                op,
                span,
                id: self.next_id(),
            })));
        }
        Ok(place)
    }

    fn eat_assign_op(&mut self) -> Option<AssignOperation> {
        if !self.eat_any(ASSIGN_TOKENS) {
            return None;
        }
        Some(match self.previous().kind {
            TokenKind::Assign => AssignOperation::Assign,
            TokenKind::UShrEq => AssignOperation::UShrAssign,
            TokenKind::ShrEq => AssignOperation::ShrAssign,
            TokenKind::ShlEq => AssignOperation::ShlAssign,
            TokenKind::PlusEq => AssignOperation::AddAssign,
            TokenKind::MinusEq => AssignOperation::SubAssign,
            TokenKind::StarEq => AssignOperation::MulAssign,
            TokenKind::PercentEq => AssignOperation::RemAssign,
            TokenKind::AmpEq => AssignOperation::AndAssign,
            TokenKind::SlashEq => AssignOperation::DivAssign,
            TokenKind::PipeEq => AssignOperation::OrAssign,
            TokenKind::CaretCaretEq => AssignOperation::PowAssign,
            TokenKind::CaretEq => AssignOperation::XorAssign,
            TokenKind::TildeEq => AssignOperation::CatAssign,
            _ => unreachable!("`eat_assign_op` shouldn't produce this"),
        })
    }

    /// Returns an [`Expression`]: an or-or, optionally followed by
    /// `? Expression : TernaryExpression`.
    pub(crate) fn parse_ternary_expression(&mut self) -> Result<Expression> {
        let condition = self.parse_or_or_expression()?;
        if !self.eat(TokenKind::Question) {
            return Ok(condition);
        }
        let if_true = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        let if_false = self.parse_ternary_expression()?;
        let span = condition.span();
        Ok(Expression::Ternary(Box::new(TernaryExpression {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
            span,
            id: self.next_id(),
        })))
    }

    /// Constructs a binary expression `left op right`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation, id: NodeID) -> Expression {
        let span = left.span();
        Expression::Binary(Box::new(BinaryExpression {
            left: Box::new(left),
            right: Box::new(right),
            op,
            span,
            id,
        }))
    }

    /// Parses a left-associative binary expression `<left> token <right>`
    /// using `f` for left/right.
    fn parse_bin_expr(
        &mut self,
        tokens: &[TokenKind],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let mut expr = f(self)?;
        while let Some(op) = self.eat_bin_op(tokens) {
            expr = Self::bin_expr(expr, f(self)?, op, self.next_id());
        }
        Ok(expr)
    }

    /// Eats one of the binary operators matching any in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[TokenKind]) -> Option<BinaryOperation> {
        if !self.eat_any(tokens) {
            return None;
        }
        Some(match self.previous().kind {
            TokenKind::PipePipe => BinaryOperation::OrOr,
            TokenKind::AmpAmp => BinaryOperation::AndAnd,
            TokenKind::Pipe => BinaryOperation::BitOr,
            TokenKind::Caret => BinaryOperation::BitXor,
            TokenKind::Amp => BinaryOperation::BitAnd,
            TokenKind::EqEq => BinaryOperation::Eq,
            TokenKind::NotEq => BinaryOperation::NotEq,
            TokenKind::Lt => BinaryOperation::Lt,
            TokenKind::LtEq => BinaryOperation::LtEq,
            TokenKind::Gt => BinaryOperation::Gt,
            TokenKind::GtEq => BinaryOperation::GtEq,
            TokenKind::LtGt => BinaryOperation::LtGt,
            TokenKind::LtGtEq => BinaryOperation::LtGtEq,
            TokenKind::NotLt => BinaryOperation::NotLt,
            TokenKind::NotLtEq => BinaryOperation::NotLtEq,
            TokenKind::NotGt => BinaryOperation::NotGt,
            TokenKind::NotGtEq => BinaryOperation::NotGtEq,
            TokenKind::NotLtGt => BinaryOperation::NotLtGt,
            TokenKind::NotLtGtEq => BinaryOperation::NotLtGtEq,
            TokenKind::Shl => BinaryOperation::Shl,
            TokenKind::Shr => BinaryOperation::Shr,
            TokenKind::UShr => BinaryOperation::UShr,
            TokenKind::Plus => BinaryOperation::Add,
            TokenKind::Minus => BinaryOperation::Sub,
            TokenKind::Tilde => BinaryOperation::Cat,
            TokenKind::Star => BinaryOperation::Mul,
            TokenKind::Slash => BinaryOperation::Div,
            TokenKind::Percent => BinaryOperation::Rem,
            TokenKind::CaretCaret => BinaryOperation::Pow,
            _ => unreachable!("`eat_bin_op` shouldn't produce this"),
        })
    }

    fn parse_or_or_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[TokenKind::PipePipe], Self::parse_and_and_expression)
    }

    fn parse_and_and_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[TokenKind::AmpAmp], Self::parse_or_expression)
    }

    fn parse_or_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[TokenKind::Pipe], Self::parse_xor_expression)
    }

    fn parse_xor_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[TokenKind::Caret], Self::parse_and_expression)
    }

    fn parse_and_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[TokenKind::Amp], Self::parse_cmp_expression)
    }

    /// The comparison level: a shift expression followed by at most one of
    /// an equality, identity, membership, or relational tail.
    fn parse_cmp_expression(&mut self) -> Result<Expression> {
        let left = self.parse_shift_expression()?;
        let op = match self.current_kind() {
            TokenKind::EqEq => {
                self.advance();
                Some(BinaryOperation::Eq)
            }
            TokenKind::NotEq => {
                self.advance();
                Some(BinaryOperation::NotEq)
            }
            TokenKind::Is => {
                self.advance();
                Some(BinaryOperation::Is)
            }
            TokenKind::In => {
                self.advance();
                Some(BinaryOperation::In)
            }
            TokenKind::Not if self.peek_is(TokenKind::Is) => {
                self.advance();
                self.advance();
                Some(BinaryOperation::NotIs)
            }
            TokenKind::Not if self.peek_is(TokenKind::In) => {
                self.advance();
                self.advance();
                Some(BinaryOperation::NotIn)
            }
            kind if REL_TOKENS.contains(&kind) => self.eat_bin_op(REL_TOKENS),
            _ => None,
        };
        match op {
            None => Ok(left),
            Some(op) => {
                let right = self.parse_shift_expression()?;
                Ok(Self::bin_expr(left, right, op, self.next_id()))
            }
        }
    }

    fn parse_shift_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(
            &[TokenKind::Shl, TokenKind::Shr, TokenKind::UShr],
            Self::parse_add_expression,
        )
    }

    fn parse_add_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(
            &[TokenKind::Plus, TokenKind::Minus, TokenKind::Tilde],
            Self::parse_mul_expression,
        )
    }

    fn parse_mul_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
            Self::parse_pow_expression,
        )
    }

    fn parse_pow_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[TokenKind::CaretCaret], Self::parse_unary_expression)
    }

    /// Returns an [`Expression`]: prefix operators, `new`, `delete`,
    /// `cast`, `assert`, the qualified-call and `(Type).member` forms, or
    /// a primary — followed by the postfix loop.
    pub(crate) fn parse_unary_expression(&mut self) -> Result<Expression> {
        if self.current_is_one_of(PREFIX_OP_TOKENS) {
            // `!` before `is`/`in` belongs to the comparison level, but in
            // prefix position there is no left operand to compare; it is
            // plain negation here.
            let span = self.current_span();
            let op = match self.current_kind() {
                TokenKind::Amp => UnaryOperation::AddressOf,
                TokenKind::Not => UnaryOperation::Not,
                TokenKind::Star => UnaryOperation::Deref,
                TokenKind::Plus => UnaryOperation::Plus,
                TokenKind::Minus => UnaryOperation::Minus,
                TokenKind::Tilde => UnaryOperation::Complement,
                TokenKind::PlusPlus => UnaryOperation::PreIncrement,
                TokenKind::MinusMinus => UnaryOperation::PreDecrement,
                _ => unreachable!("`parse_unary_expression` shouldn't produce this"),
            };
            self.advance();
            let operand = self.parse_unary_expression()?;
            return Ok(Expression::Unary(Box::new(UnaryExpression {
                operand: Box::new(operand),
                op,
                span,
                id: self.next_id(),
            })));
        }

        let expr = match self.current_kind() {
            TokenKind::New => self.parse_new_expression()?,
            TokenKind::Delete => {
                let span = self.current_span();
                self.advance();
                let operand = self.parse_unary_expression()?;
                Expression::Delete(Box::new(DeleteExpression {
                    operand: Box::new(operand),
                    span,
                    id: self.next_id(),
                }))
            }
            TokenKind::Cast => self.parse_cast_expression()?,
            TokenKind::Assert => self.parse_assert_expression()?,
            TokenKind::Const
            | TokenKind::Immutable
            | TokenKind::Inout
            | TokenKind::Shared
                if self.peek_is(TokenKind::LParen) =>
            {
                // A type-qualified construction call, `immutable(char)(c)`,
                // or a qualified type property, `const(int).max`.
                let span = self.current_span();
                let type_ = self.parse_type()?;
                Expression::Type(Box::new(TypeExpression { type_, span, id: self.next_id() }))
            }
            TokenKind::LParen => {
                // `(Type).member` only when a bookmarked type parse closes
                // the paren and a member access follows.
                match self.try_parse_paren_type()? {
                    Some(expr) => expr,
                    None => self.parse_primary_expression()?,
                }
            }
            _ => self.parse_primary_expression()?,
        };

        self.parse_postfix_loop(expr)
    }

    fn try_parse_paren_type(&mut self) -> Result<Option<Expression>> {
        let bookmark = self.set_bookmark();
        let span = self.current_span();
        self.advance();
        match self.parse_type() {
            Ok(type_)
                if self.current_is(TokenKind::RParen)
                    && self.peek_is(TokenKind::Dot)
                    && self.peek_n(2).kind == TokenKind::Identifier =>
            {
                self.abandon_bookmark(bookmark);
                self.advance();
                self.advance();
                let member = self.ident_or_template_instance()?;
                let base =
                    Expression::Type(Box::new(TypeExpression { type_, span, id: self.next_id() }));
                Ok(Some(Expression::Member(Box::new(MemberAccess {
                    base: Some(Box::new(base)),
                    member: Box::new(member),
                    span,
                    id: self.next_id(),
                }))))
            }
            _ => {
                self.go_to_bookmark(bookmark);
                Ok(None)
            }
        }
    }

    /// The postfix loop: calls, indexes and slices, `++`/`--`, and dotted
    /// member accesses.
    fn parse_postfix_loop(&mut self, mut expr: Expression) -> Result<Expression> {
        loop {
            match self.current_kind() {
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let op = if self.current_is(TokenKind::PlusPlus) {
                        PostfixOperation::Increment
                    } else {
                        PostfixOperation::Decrement
                    };
                    self.advance();
                    let span = expr.span();
                    expr = Expression::Postfix(Box::new(PostfixExpression {
                        operand: Box::new(expr),
                        op,
                        span,
                        id: self.next_id(),
                    }));
                }
                TokenKind::LParen => {
                    let arguments =
                        self.parse_paren_comma_list(Self::parse_assign_expression)?;
                    let span = expr.span();
                    expr = Expression::Call(Box::new(CallExpression {
                        function: Box::new(expr),
                        arguments,
                        span,
                        id: self.next_id(),
                    }));
                }
                TokenKind::LBracket => {
                    expr = self.parse_index_or_slice(expr)?;
                }
                TokenKind::Dot => {
                    self.advance();
                    let span = expr.span();
                    let member = match self.current_kind() {
                        TokenKind::Identifier => self.ident_or_template_instance()?,
                        TokenKind::New => self.parse_new_expression()?,
                        TokenKind::This => {
                            let keyword_span = self.current_span();
                            self.advance();
                            Expression::Special(SpecialKeywordExpression {
                                keyword: SpecialKeyword::This,
                                span: keyword_span,
                                id: self.next_id(),
                            })
                        }
                        _ => {
                            return self.fail(ParserError::expected_identifier(
                                self.current(),
                                self.current_span(),
                            ))
                        }
                    };
                    expr = Expression::Member(Box::new(MemberAccess {
                        base: Some(Box::new(expr)),
                        member: Box::new(member),
                        span,
                        id: self.next_id(),
                    }));
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_index_or_slice(&mut self, base: Expression) -> Result<Expression> {
        let span = base.span();
        self.expect(TokenKind::LBracket)?;
        if self.eat(TokenKind::RBracket) {
            return Ok(Expression::Slice(Box::new(SliceExpression {
                base: Box::new(base),
                low: None,
                high: None,
                span,
                id: self.next_id(),
            })));
        }
        let first = self.parse_assign_expression()?;
        if self.eat(TokenKind::DotDot) {
            let high = self.parse_assign_expression()?;
            self.expect(TokenKind::RBracket)?;
            return Ok(Expression::Slice(Box::new(SliceExpression {
                base: Box::new(base),
                low: Some(Box::new(first)),
                high: Some(Box::new(high)),
                span,
                id: self.next_id(),
            })));
        }
        let mut arguments = vec![first];
        while self.eat(TokenKind::Comma) && !self.current_is(TokenKind::RBracket) {
            arguments.push(self.parse_assign_expression()?);
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Expression::Index(Box::new(IndexExpression {
            base: Box::new(base),
            arguments,
            span,
            id: self.next_id(),
        })))
    }

    /// An identifier, or a template instance when `!` follows and the
    /// token after `!` is not `is`/`in`.
    pub(crate) fn ident_or_template_instance(&mut self) -> Result<Expression> {
        let identifier = self.expect_identifier()?;
        if self.current_is(TokenKind::Not) && !self.peek_is_one_of(&[TokenKind::Is, TokenKind::In])
        {
            let span = identifier.span;
            let instance = self.parse_template_instance(identifier)?;
            return Ok(Expression::TemplateInstance(TemplateInstanceExpression {
                instance,
                span,
                id: self.next_id(),
            }));
        }
        Ok(Expression::Identifier(identifier))
    }

    fn parse_new_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        self.expect(TokenKind::New)?;

        // Try the full type first; when its bracket suffix cannot be read
        // as part of the type, fall back to `new T[allocation_size]`.
        let bookmark = self.set_bookmark();
        let (type_, size) = match self.parse_type() {
            Ok(type_) => {
                self.abandon_bookmark(bookmark);
                (type_, None)
            }
            Err(_) => {
                self.go_to_bookmark(bookmark);
                let type_ = self.parse_type_no_bracket_suffix()?;
                let size = if self.eat(TokenKind::LBracket) {
                    let size = self.parse_assign_expression()?;
                    self.expect(TokenKind::RBracket)?;
                    Some(Box::new(size))
                } else {
                    None
                };
                (type_, size)
            }
        };

        let arguments = if self.current_is(TokenKind::LParen) {
            Some(self.parse_paren_comma_list(Self::parse_assign_expression)?)
        } else {
            None
        };

        Ok(Expression::New(Box::new(NewExpression {
            type_,
            size,
            arguments,
            span,
            id: self.next_id(),
        })))
    }

    fn parse_cast_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        self.expect(TokenKind::Cast)?;
        self.expect(TokenKind::LParen)?;
        let target = if self.current_is(TokenKind::RParen) {
            CastTarget::None
        } else if self.is_cast_qualifier() {
            let mut qualifiers = SmallVec::new();
            while let Some(qualifier) = Self::token_to_type_constructor(self.current_kind()) {
                qualifiers.push(qualifier);
                self.advance();
            }
            CastTarget::Qualifier(qualifiers)
        } else {
            // A run of nothing but qualifier keywords up to the closing
            // paren that is not one of the admitted sequences is a bad
            // qualifier, not a missing type.
            let mut ahead = 0;
            while TYPE_CTOR_TOKENS.contains(&self.peek_n(ahead).kind) {
                ahead += 1;
            }
            if ahead > 0 && self.peek_n(ahead).kind == TokenKind::RParen {
                return self.fail(ParserError::invalid_cast_qualifier(
                    self.current(),
                    self.current_span(),
                ));
            }
            CastTarget::Type(self.parse_type()?)
        };
        self.expect(TokenKind::RParen)?;
        let operand = self.parse_unary_expression()?;
        Ok(Expression::Cast(Box::new(CastExpression {
            target,
            operand: Box::new(operand),
            span,
            id: self.next_id(),
        })))
    }

    fn parse_assert_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        self.expect(TokenKind::Assert)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_assign_expression()?;
        let message = if self.eat(TokenKind::Comma) && !self.current_is(TokenKind::RParen) {
            let message = self.parse_assign_expression()?;
            self.eat(TokenKind::Comma);
            Some(Box::new(message))
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        Ok(Expression::Assert(Box::new(AssertExpression {
            condition: Box::new(condition),
            message,
            span,
            id: self.next_id(),
        })))
    }

    /// Returns `true` if the current token can begin an expression; the
    /// statement parser uses this to pick its fallthrough diagnostic.
    pub(crate) fn starts_expression(&self) -> bool {
        match self.current_kind() {
            TokenKind::New
            | TokenKind::Delete
            | TokenKind::Cast
            | TokenKind::Assert
            | TokenKind::Const
            | TokenKind::Immutable
            | TokenKind::Inout
            | TokenKind::Shared
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Function
            | TokenKind::Delegate
            | TokenKind::Typeof
            | TokenKind::Typeid
            | TokenKind::Is
            | TokenKind::Traits
            | TokenKind::Mixin
            | TokenKind::Import
            | TokenKind::Vector
            | TokenKind::Dollar
            | TokenKind::This
            | TokenKind::Super
            | TokenKind::Identifier
            | TokenKind::Dot => true,
            kind if PREFIX_OP_TOKENS.contains(&kind) => true,
            kind if SPECIAL_KEYWORD_TOKENS.contains(&kind) => true,
            kind if kind.is_literal() => true,
            kind if kind.is_basic_type() => true,
            _ => false,
        }
    }

    /// Returns an [`Expression`] for a primary.
    pub(crate) fn parse_primary_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Dot => {
                self.advance();
                let member = self.ident_or_template_instance()?;
                Ok(Expression::Member(Box::new(MemberAccess {
                    base: None,
                    member: Box::new(member),
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Identifier => {
                if self.peek_is(TokenKind::FatArrow) {
                    return self.parse_identifier_lambda();
                }
                self.ident_or_template_instance()
            }
            kind if kind.is_basic_type() => {
                let builtin = Self::token_to_builtin_type(kind).unwrap();
                self.advance();
                let type_ = Type {
                    constructors: SmallVec::new(),
                    base: BaseType::Builtin(builtin),
                    suffixes: Vec::new(),
                    span,
                    id: self.next_id(),
                };
                Ok(Expression::Type(Box::new(TypeExpression { type_, span, id: self.next_id() })))
            }
            TokenKind::Function | TokenKind::Delegate | TokenKind::LBrace => {
                self.parse_function_literal()
            }
            TokenKind::LParen => self.parse_paren_or_literal(),
            TokenKind::LBracket => self.parse_array_or_aa_literal(),
            TokenKind::Typeof => {
                let typeof_span = self.current_span();
                self.advance();
                self.expect(TokenKind::LParen)?;
                let target = if self.eat(TokenKind::Return) {
                    TypeofTarget::Return
                } else {
                    TypeofTarget::Expression(Box::new(self.parse_expression()?))
                };
                self.expect(TokenKind::RParen)?;
                Ok(Expression::Typeof(Box::new(TypeofExpression {
                    target,
                    span: typeof_span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Typeid => self.parse_typeid_expression(),
            TokenKind::Is => self.parse_is_expression(),
            TokenKind::Traits => self.parse_traits_expression(),
            TokenKind::Mixin => {
                self.advance();
                let arguments = self.parse_paren_comma_list(Self::parse_assign_expression)?;
                Ok(Expression::Mixin(MixinExpression { arguments, span, id: self.next_id() }))
            }
            TokenKind::Import => {
                self.advance();
                self.expect(TokenKind::LParen)?;
                let argument = self.parse_assign_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expression::Import(Box::new(ImportExpression {
                    argument: Box::new(argument),
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Vector => {
                let type_ = self.parse_type()?;
                Ok(Expression::Type(Box::new(TypeExpression { type_, span, id: self.next_id() })))
            }
            TokenKind::Dollar => {
                self.advance();
                Ok(self.special(SpecialKeyword::Dollar, span))
            }
            TokenKind::This => {
                self.advance();
                Ok(self.special(SpecialKeyword::This, span))
            }
            TokenKind::Super => {
                self.advance();
                Ok(self.special(SpecialKeyword::Super, span))
            }
            kind if SPECIAL_KEYWORD_TOKENS.contains(&kind) => {
                let keyword = match kind {
                    TokenKind::SpecialDate => SpecialKeyword::Date,
                    TokenKind::SpecialFile => SpecialKeyword::File,
                    TokenKind::SpecialFileFullPath => SpecialKeyword::FileFullPath,
                    TokenKind::SpecialFunction => SpecialKeyword::Function,
                    TokenKind::SpecialLine => SpecialKeyword::Line,
                    TokenKind::SpecialModule => SpecialKeyword::Module,
                    TokenKind::SpecialPrettyFunction => SpecialKeyword::PrettyFunction,
                    TokenKind::SpecialTime => SpecialKeyword::Time,
                    TokenKind::SpecialTimestamp => SpecialKeyword::Timestamp,
                    TokenKind::SpecialVendor => SpecialKeyword::Vendor,
                    TokenKind::SpecialVersion => SpecialKeyword::Version,
                    _ => unreachable!("special keyword table mismatch"),
                };
                self.advance();
                Ok(self.special(keyword, span))
            }
            TokenKind::Null => {
                self.advance();
                Ok(self.literal(LiteralValue::Null, span))
            }
            TokenKind::True | TokenKind::False => {
                let value = self.current_is(TokenKind::True);
                self.advance();
                Ok(self.literal(LiteralValue::Boolean(value), span))
            }
            kind if kind.is_string_literal() => self.parse_string_literal_chain(),
            TokenKind::CharacterLiteral => {
                let text = self.current().text.clone().unwrap_or_default();
                self.advance();
                Ok(self.literal(LiteralValue::Character(text), span))
            }
            kind if kind.is_literal() => {
                let text = self.current().text.clone().unwrap_or_default();
                let value = match kind {
                    TokenKind::IntLiteral => LiteralValue::Integer(IntegerKind::Int, text),
                    TokenKind::UintLiteral => LiteralValue::Integer(IntegerKind::Uint, text),
                    TokenKind::LongLiteral => LiteralValue::Integer(IntegerKind::Long, text),
                    TokenKind::UlongLiteral => LiteralValue::Integer(IntegerKind::Ulong, text),
                    TokenKind::FloatLiteral => LiteralValue::Float(FloatKind::Float, text),
                    TokenKind::DoubleLiteral => LiteralValue::Float(FloatKind::Double, text),
                    TokenKind::RealLiteral => LiteralValue::Float(FloatKind::Real, text),
                    TokenKind::IfloatLiteral => LiteralValue::Float(FloatKind::Ifloat, text),
                    TokenKind::IdoubleLiteral => LiteralValue::Float(FloatKind::Idouble, text),
                    TokenKind::IrealLiteral => LiteralValue::Float(FloatKind::Ireal, text),
                    _ => unreachable!("literal table mismatch"),
                };
                self.advance();
                Ok(self.literal(value, span))
            }
            _ => self.fail(ParserError::expected_expression(self.current(), self.current_span())),
        }
    }

    fn special(&self, keyword: SpecialKeyword, span: dryad_span::Span) -> Expression {
        Expression::Special(SpecialKeywordExpression { keyword, span, id: self.next_id() })
    }

    fn literal(&self, value: LiteralValue, span: dryad_span::Span) -> Expression {
        Expression::Literal(LiteralExpression { value, span, id: self.next_id() })
    }

    /// Concatenates a run of adjacent string literals into one primary,
    /// warning once per chain about the implicit concatenation.
    fn parse_string_literal_chain(&mut self) -> Result<Expression> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::WstringLiteral => StringKind::Utf16,
            TokenKind::DstringLiteral => StringKind::Utf32,
            _ => StringKind::Utf8,
        };
        let mut text = self.current().text.clone().unwrap_or_default();
        self.advance();
        let mut warned = false;
        while self.current_kind().is_string_literal() {
            if !warned {
                self.warn(ParserWarning::implicit_string_concatenation(self.current_span()));
                warned = true;
            }
            text.push_str(self.current().text.as_deref().unwrap_or_default());
            self.advance();
        }
        Ok(self.literal(LiteralValue::String(kind, text), span))
    }

    fn parse_identifier_lambda(&mut self) -> Result<Expression> {
        let span = self.current_span();
        let parameter_span = self.current_span();
        let name = self.expect_identifier()?;
        let parameters = Parameters {
            parameters: vec![Parameter {
                attributes: Vec::new(),
                type_: None,
                name: Some(name),
                default: None,
                varargs: false,
                span: parameter_span,
                id: self.next_id(),
            }],
            varargs: false,
            span: parameter_span,
            id: self.next_id(),
        };
        self.expect(TokenKind::FatArrow)?;
        let body = self.parse_assign_expression()?;
        Ok(Expression::FunctionLiteral(Box::new(FunctionLiteralExpression {
            kind: None,
            return_type: None,
            parameters: Some(parameters),
            attributes: Vec::new(),
            body: FunctionLiteralBody::Lambda(Box::new(body)),
            span,
            id: self.next_id(),
        })))
    }

    /// A function or delegate literal: optional keyword, optional return
    /// type, optional parameters and attributes, then a block or `=>`.
    pub(crate) fn parse_function_literal(&mut self) -> Result<Expression> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Function => {
                self.advance();
                Some(CallableKind::Function)
            }
            TokenKind::Delegate => {
                self.advance();
                Some(CallableKind::Delegate)
            }
            _ => None,
        };
        let return_type = if kind.is_some()
            && !self.current_is_one_of(&[TokenKind::LParen, TokenKind::LBrace, TokenKind::FatArrow])
        {
            Some(self.parse_type()?)
        } else {
            None
        };
        let parameters = if self.current_is(TokenKind::LParen) {
            Some(self.parse_parameters()?)
        } else {
            None
        };
        let attributes = self.parse_member_function_attributes()?;
        let body = if self.eat(TokenKind::FatArrow) {
            FunctionLiteralBody::Lambda(Box::new(self.parse_assign_expression()?))
        } else if self.current_is(TokenKind::LBrace) {
            FunctionLiteralBody::Block(self.parse_block()?)
        } else {
            return self.fail(ParserError::unexpected_token(
                self.current(),
                "'{' or '=>'",
                self.current_span(),
            ));
        };
        Ok(Expression::FunctionLiteral(Box::new(FunctionLiteralExpression {
            kind,
            return_type,
            parameters,
            attributes,
            body,
            span,
            id: self.next_id(),
        })))
    }

    /// A `(`-led primary: a parenthesized expression, or a function
    /// literal when the balanced parens are followed by `{` or `=>`.
    fn parse_paren_or_literal(&mut self) -> Result<Expression> {
        if matches!(
            self.peek_past_parens().map(|t| t.kind),
            Some(TokenKind::LBrace) | Some(TokenKind::FatArrow)
        ) {
            return self.parse_function_literal();
        }
        self.expect(TokenKind::LParen)?;
        let inner = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(inner)
    }

    fn parse_array_or_aa_literal(&mut self) -> Result<Expression> {
        let span = self.current_span();
        if self.is_associative_array_literal() {
            self.expect(TokenKind::LBracket)?;
            let pairs = self.parse_comma_list(TokenKind::RBracket, |p| {
                let pair_span = p.current_span();
                let key = p.parse_assign_expression()?;
                p.expect(TokenKind::Colon)?;
                let value = p.parse_assign_expression()?;
                Ok(KeyValuePair { key, value, span: pair_span, id: p.next_id() })
            })?;
            self.expect(TokenKind::RBracket)?;
            return Ok(Expression::AssocArrayLiteral(AssocArrayLiteralExpression {
                pairs,
                span,
                id: self.next_id(),
            }));
        }
        self.expect(TokenKind::LBracket)?;
        let elements = self.parse_comma_list(TokenKind::RBracket, Self::parse_assign_expression)?;
        self.expect(TokenKind::RBracket)?;
        Ok(Expression::ArrayLiteral(ArrayLiteralExpression { elements, span, id: self.next_id() }))
    }

    fn parse_typeid_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        self.expect(TokenKind::Typeid)?;
        self.expect(TokenKind::LParen)?;
        let bookmark = self.set_bookmark();
        let target = match self.parse_type() {
            Ok(type_) if self.current_is(TokenKind::RParen) => {
                self.abandon_bookmark(bookmark);
                TypeidTarget::Type(type_)
            }
            _ => {
                self.go_to_bookmark(bookmark);
                TypeidTarget::Expression(Box::new(self.parse_expression()?))
            }
        };
        self.expect(TokenKind::RParen)?;
        Ok(Expression::Typeid(Box::new(TypeidExpression { target, span, id: self.next_id() })))
    }

    fn parse_is_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        self.expect(TokenKind::Is)?;
        self.expect(TokenKind::LParen)?;
        let type_ = self.parse_type()?;
        let identifier = self.eat_identifier();
        let comparison = if self.current_is_one_of(&[TokenKind::Colon, TokenKind::EqEq]) {
            let kind = if self.current_is(TokenKind::Colon) {
                IsComparisonKind::Implicit
            } else {
                IsComparisonKind::Exact
            };
            self.advance();
            let target = match self.is_specialization_keyword() {
                Some(specialization)
                    if self.peek_is_one_of(&[TokenKind::RParen, TokenKind::Comma]) =>
                {
                    self.advance();
                    IsTarget::Specialization(specialization)
                }
                _ => IsTarget::Type(self.parse_type()?),
            };
            Some(IsComparison { kind, target })
        } else {
            None
        };
        let template_parameters = if self.eat(TokenKind::Comma) {
            let parameters_span = self.current_span();
            let parameters =
                self.parse_comma_list(TokenKind::RParen, Self::parse_template_parameter)?;
            Some(TemplateParameters { parameters, span: parameters_span, id: self.next_id() })
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        Ok(Expression::Is(Box::new(IsExpression {
            type_,
            identifier,
            comparison,
            template_parameters,
            span,
            id: self.next_id(),
        })))
    }

    fn is_specialization_keyword(&self) -> Option<IsSpecialization> {
        Some(match self.current_kind() {
            TokenKind::Struct => IsSpecialization::Struct,
            TokenKind::Union => IsSpecialization::Union,
            TokenKind::Class => IsSpecialization::Class,
            TokenKind::Interface => IsSpecialization::Interface,
            TokenKind::Enum => IsSpecialization::Enum,
            TokenKind::Function => IsSpecialization::Function,
            TokenKind::Delegate => IsSpecialization::Delegate,
            TokenKind::Super => IsSpecialization::Super,
            TokenKind::Const => IsSpecialization::Const,
            TokenKind::Immutable => IsSpecialization::Immutable,
            TokenKind::Inout => IsSpecialization::Inout,
            TokenKind::Shared => IsSpecialization::Shared,
            TokenKind::Return => IsSpecialization::Return,
            TokenKind::Parameters => IsSpecialization::Parameters,
            TokenKind::Module => IsSpecialization::Module,
            TokenKind::Package => IsSpecialization::Package,
            _ => return None,
        })
    }

    fn parse_traits_expression(&mut self) -> Result<Expression> {
        let span = self.current_span();
        self.expect(TokenKind::Traits)?;
        self.expect(TokenKind::LParen)?;
        let name = self.expect_identifier()?;
        let mut arguments = Vec::new();
        while self.eat(TokenKind::Comma) && !self.current_is(TokenKind::RParen) {
            arguments.push(self.parse_template_argument()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(Expression::Traits(TraitsExpression { name, arguments, span, id: self.next_id() }))
    }
}
