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

/// The tokens that may open a type constructor run.
pub(crate) const TYPE_CTOR_TOKENS: &[TokenKind] =
    &[TokenKind::Const, TokenKind::Immutable, TokenKind::Inout, TokenKind::Shared];

impl ParserContext<'_, '_> {
    /// Maps a type constructor token to its AST value.
    pub(crate) fn token_to_type_constructor(kind: TokenKind) -> Option<TypeConstructor> {
        Some(match kind {
            TokenKind::Const => TypeConstructor::Const,
            TokenKind::Immutable => TypeConstructor::Immutable,
            TokenKind::Inout => TypeConstructor::Inout,
            TokenKind::Shared => TypeConstructor::Shared,
            _ => return None,
        })
    }

    /// Maps a basic type token to its AST value.
    pub(crate) fn token_to_builtin_type(kind: TokenKind) -> Option<BuiltinType> {
        Some(match kind {
            TokenKind::Bool => BuiltinType::Bool,
            TokenKind::Byte => BuiltinType::Byte,
            TokenKind::Ubyte => BuiltinType::Ubyte,
            TokenKind::Short => BuiltinType::Short,
            TokenKind::Ushort => BuiltinType::Ushort,
            TokenKind::Int => BuiltinType::Int,
            TokenKind::Uint => BuiltinType::Uint,
            TokenKind::Long => BuiltinType::Long,
            TokenKind::Ulong => BuiltinType::Ulong,
            TokenKind::Cent => BuiltinType::Cent,
            TokenKind::Ucent => BuiltinType::Ucent,
            TokenKind::Char => BuiltinType::Char,
            TokenKind::Wchar => BuiltinType::Wchar,
            TokenKind::Dchar => BuiltinType::Dchar,
            TokenKind::Float => BuiltinType::Float,
            TokenKind::Double => BuiltinType::Double,
            TokenKind::Real => BuiltinType::Real,
            TokenKind::Ifloat => BuiltinType::Ifloat,
            TokenKind::Idouble => BuiltinType::Idouble,
            TokenKind::Ireal => BuiltinType::Ireal,
            TokenKind::Cfloat => BuiltinType::Cfloat,
            TokenKind::Cdouble => BuiltinType::Cdouble,
            TokenKind::Creal => BuiltinType::Creal,
            TokenKind::Void => BuiltinType::Void,
            _ => return None,
        })
    }

    /// Returns a [`Type`] AST node: a type constructor run, a base type,
    /// and a suffix loop.
    pub fn parse_type(&mut self) -> Result<Type> {
        self.parse_type_impl(true)
    }

    /// `parse_type` without the bracketed suffixes; used inside `new`
    /// expressions where `[` is the allocation bracket when the type
    /// reading fails.
    pub(crate) fn parse_type_no_bracket_suffix(&mut self) -> Result<Type> {
        self.parse_type_impl(false)
    }

    fn parse_type_impl(&mut self, allow_brackets: bool) -> Result<Type> {
        let span = self.current_span();
        let mut constructors = SmallVec::new();
        while self.current_is_one_of(TYPE_CTOR_TOKENS) && !self.peek_is(TokenKind::LParen) {
            constructors.push(Self::token_to_type_constructor(self.current_kind()).unwrap());
            self.advance();
        }
        let base = self.parse_base_type()?;
        let suffixes = self.parse_type_suffixes(allow_brackets)?;
        Ok(Type { constructors, base, suffixes, span, id: self.next_id() })
    }

    /// Returns a [`BaseType`] AST node.
    pub(crate) fn parse_base_type(&mut self) -> Result<BaseType> {
        match self.current_kind() {
            kind if kind.is_basic_type() => {
                let builtin = Self::token_to_builtin_type(kind).unwrap();
                self.advance();
                Ok(BaseType::Builtin(builtin))
            }
            TokenKind::Identifier | TokenKind::Dot => {
                Ok(BaseType::Symbol(self.parse_symbol_chain()?))
            }
            TokenKind::Typeof => {
                let typeof_ = self.parse_typeof_type()?;
                Ok(BaseType::Typeof(Box::new(typeof_)))
            }
            TokenKind::Const | TokenKind::Immutable | TokenKind::Inout | TokenKind::Shared => {
                // A constructor run not consumed above means `ctor ( Type )`.
                let span = self.current_span();
                let constructor = Self::token_to_type_constructor(self.current_kind()).unwrap();
                self.advance();
                self.expect(TokenKind::LParen)?;
                let inner = self.parse_type()?;
                self.expect(TokenKind::RParen)?;
                Ok(BaseType::Qualified(Box::new(QualifiedType {
                    constructor,
                    inner,
                    span,
                    id: self.next_id(),
                })))
            }
            TokenKind::Vector => {
                let span = self.current_span();
                self.advance();
                self.expect(TokenKind::LParen)?;
                let element = self.parse_type()?;
                self.expect(TokenKind::RParen)?;
                Ok(BaseType::Vector(Box::new(VectorType { element, span, id: self.next_id() })))
            }
            TokenKind::Traits => {
                let span = self.current_span();
                self.advance();
                if !self.current_is(TokenKind::LParen) {
                    return self.fail(ParserError::unexpected_token(
                        self.current(),
                        "'('",
                        self.current_span(),
                    ));
                }
                self.skip_parens();
                Ok(BaseType::Traits(TraitsType { span, id: self.next_id() }))
            }
            _ => self.fail(ParserError::expected_type(self.current(), self.current_span())),
        }
    }

    /// Returns a [`TypeofType`]: `typeof(expression|return)` with its
    /// optional trailing `. chain`.
    pub(crate) fn parse_typeof_type(&mut self) -> Result<TypeofType> {
        let span = self.current_span();
        self.expect(TokenKind::Typeof)?;
        self.expect(TokenKind::LParen)?;
        let target = if self.eat(TokenKind::Return) {
            TypeofTarget::Return
        } else {
            TypeofTarget::Expression(Box::new(self.parse_expression()?))
        };
        self.expect(TokenKind::RParen)?;
        let chain = if self.current_is(TokenKind::Dot) && self.peek_is(TokenKind::Identifier) {
            self.advance();
            Some(self.parse_symbol_chain()?)
        } else {
            None
        };
        Ok(TypeofType { target, chain, span, id: self.next_id() })
    }

    /// Returns a [`SymbolChain`]: `.`-separated identifiers or template
    /// instances, with an optional leading dot.
    pub(crate) fn parse_symbol_chain(&mut self) -> Result<SymbolChain> {
        let span = self.current_span();
        let leading_dot = self.eat(TokenKind::Dot);
        let mut segments = vec![self.parse_symbol_segment()?];
        while self.current_is(TokenKind::Dot) && self.peek_is(TokenKind::Identifier) {
            self.advance();
            segments.push(self.parse_symbol_segment()?);
        }
        Ok(SymbolChain { leading_dot, segments, span, id: self.next_id() })
    }

    fn parse_symbol_segment(&mut self) -> Result<SymbolSegment> {
        let identifier = self.expect_identifier()?;
        if self.current_is(TokenKind::Not)
            && !self.peek_is_one_of(&[TokenKind::Is, TokenKind::In])
        {
            let instance = self.parse_template_instance(identifier)?;
            return Ok(SymbolSegment::TemplateInstance(instance));
        }
        Ok(SymbolSegment::Identifier(identifier))
    }

    /// Returns a [`TemplateInstance`] for `identifier` sitting before `!`.
    pub(crate) fn parse_template_instance(&mut self, identifier: Identifier) -> Result<TemplateInstance> {
        let span = identifier.span;
        let arguments = self.parse_template_arguments()?;
        Ok(TemplateInstance { identifier, arguments, span, id: self.next_id() })
    }

    /// Parses `!arg` or `!(args...)`.
    pub(crate) fn parse_template_arguments(&mut self) -> Result<TemplateArguments> {
        let span = self.current_span();
        self.expect(TokenKind::Not)?;
        if self.eat(TokenKind::LParen) {
            let arguments =
                self.parse_comma_list(TokenKind::RParen, Self::parse_template_argument)?;
            self.expect(TokenKind::RParen)?;
            return Ok(TemplateArguments { arguments, single_token: false, span, id: self.next_id() });
        }
        let argument = self.parse_single_token_template_argument()?;
        Ok(TemplateArguments { arguments: vec![argument], single_token: true, span, id: self.next_id() })
    }

    /// A template argument: a type when a speculative type parse ends on
    /// `,` or `)`, otherwise an assign expression.
    pub(crate) fn parse_template_argument(&mut self) -> Result<TemplateArgument> {
        let bookmark = self.set_bookmark();
        match self.parse_type() {
            Ok(type_)
                if self.current_is_one_of(&[TokenKind::Comma, TokenKind::RParen]) =>
            {
                self.abandon_bookmark(bookmark);
                Ok(TemplateArgument::Type(type_))
            }
            _ => {
                self.go_to_bookmark(bookmark);
                Ok(TemplateArgument::Expression(self.parse_assign_expression()?))
            }
        }
    }

    fn parse_single_token_template_argument(&mut self) -> Result<TemplateArgument> {
        let span = self.current_span();
        let kind = self.current_kind();
        if let Some(builtin) = Self::token_to_builtin_type(kind) {
            self.advance();
            return Ok(TemplateArgument::Type(Type {
                constructors: SmallVec::new(),
                base: BaseType::Builtin(builtin),
                suffixes: Vec::new(),
                span,
                id: self.next_id(),
            }));
        }
        if kind == TokenKind::Identifier {
            let identifier = self.eat_identifier().unwrap();
            return Ok(TemplateArgument::Expression(Expression::Identifier(identifier)));
        }
        // Literals and the special single-token primaries.
        let expression = self.parse_primary_expression()?;
        Ok(TemplateArgument::Expression(expression))
    }

    /// Parses the type suffix loop: `*`, the `[ ... ]` forms, and
    /// `delegate`/`function` signatures.
    pub(crate) fn parse_type_suffixes(&mut self, allow_brackets: bool) -> Result<Vec<TypeSuffix>> {
        let mut suffixes = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::Star => {
                    let span = self.current_span();
                    self.advance();
                    suffixes.push(TypeSuffix { kind: TypeSuffixKind::Pointer, span, id: self.next_id() });
                }
                TokenKind::LBracket if allow_brackets => {
                    suffixes.push(self.parse_array_type_suffix()?);
                }
                TokenKind::Delegate | TokenKind::Function => {
                    let span = self.current_span();
                    let kind = if self.current_is(TokenKind::Delegate) {
                        CallableKind::Delegate
                    } else {
                        CallableKind::Function
                    };
                    self.advance();
                    let parameters = self.parse_parameters()?;
                    let attributes = self.parse_member_function_attributes()?;
                    suffixes.push(TypeSuffix {
                        kind: TypeSuffixKind::Callable { kind, parameters, attributes },
                        span,
                        id: self.next_id(),
                    });
                }
                _ => break,
            }
        }
        Ok(suffixes)
    }

    /// One bracketed suffix. A bookmark decides between a key type and an
    /// index expression; a `..` after the expression makes it a slice.
    fn parse_array_type_suffix(&mut self) -> Result<TypeSuffix> {
        let span = self.current_span();
        self.expect(TokenKind::LBracket)?;
        if self.eat(TokenKind::RBracket) {
            return Ok(TypeSuffix {
                kind: TypeSuffixKind::Array(ArraySuffix::Dynamic),
                span,
                id: self.next_id(),
            });
        }

        let bookmark = self.set_bookmark();
        match self.parse_type() {
            Ok(key) if self.current_is(TokenKind::RBracket) => {
                self.abandon_bookmark(bookmark);
                self.advance();
                return Ok(TypeSuffix {
                    kind: TypeSuffixKind::Array(ArraySuffix::Type(Box::new(key))),
                    span,
                    id: self.next_id(),
                });
            }
            _ => self.go_to_bookmark(bookmark),
        }

        let low = self.parse_assign_expression()?;
        let kind = if self.eat(TokenKind::DotDot) {
            let high = self.parse_assign_expression()?;
            ArraySuffix::Slice { low: Box::new(low), high: Box::new(high) }
        } else {
            ArraySuffix::Index(Box::new(low))
        };
        self.expect(TokenKind::RBracket)?;
        Ok(TypeSuffix { kind: TypeSuffixKind::Array(kind), span, id: self.next_id() })
    }
}
