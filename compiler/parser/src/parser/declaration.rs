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
use dryad_errors::{ParserError, ParserWarning, Result};

use smallvec::SmallVec;

impl ParserContext<'_, '_> {
    /// Returns a [`Declaration`]: a leading attribute run, then one of the
    /// declaration variants.
    pub fn parse_declaration(&mut self) -> Result<Declaration> {
        let span = self.current_span();
        let comment = self.take_comment();

        let mut attributes = Vec::new();
        while self.is_attribute() {
            if self.lookahead_exhausted() {
                return self.fail(ParserError::lookahead_exhausted(self.current_span()));
            }
            attributes.push(self.parse_attribute()?);
        }

        if !attributes.is_empty() {
            // `attr:` applies the attributes to everything that follows.
            if self.current_is(TokenKind::Colon) {
                let marker_span = self.current_span();
                self.advance();
                return Ok(Declaration {
                    attributes,
                    comment,
                    supplemental_comment: None,
                    kind: DeclarationKind::Attribute(AttributeDeclaration {
                        span: marker_span,
                        id: self.next_id(),
                    }),
                    span,
                    id: self.next_id(),
                });
            }
            // Attributes with nothing left to decorate.
            if self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
                return self.fail(ParserError::attribute_without_declaration(
                    self.current(),
                    self.current_span(),
                ));
            }
            // `attr { ... }` applies them to a group.
            if self.current_is(TokenKind::LBrace) {
                let group_span = self.current_span();
                let declarations = self.parse_braced_declaration_list()?;
                return Ok(Declaration {
                    attributes,
                    comment,
                    supplemental_comment: None,
                    kind: DeclarationKind::Group(DeclarationGroup {
                        declarations,
                        span: group_span,
                        id: self.next_id(),
                    }),
                    span,
                    id: self.next_id(),
                });
            }
        }

        let mut kind = self.parse_declaration_kind(&mut attributes)?;

        // A conditional construct's comment is copied onto the
        // declarations of its true branch.
        if let DeclarationKind::Conditional(conditional) = &mut kind {
            if let Some(comment) = &comment {
                for declaration in &mut conditional.true_declarations {
                    declaration.supplemental_comment = Some(comment.clone());
                }
            }
        }

        Ok(Declaration { attributes, comment, supplemental_comment: None, kind, span, id: self.next_id() })
    }

    fn parse_declaration_kind(&mut self, attributes: &mut Vec<Attribute>) -> Result<DeclarationKind> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(DeclarationKind::Empty(EmptyDeclaration { span, id: self.next_id() }))
            }
            TokenKind::Alias => self.parse_alias_declaration(),
            TokenKind::Class => Ok(DeclarationKind::Class(self.parse_class_declaration()?)),
            TokenKind::Interface => {
                Ok(DeclarationKind::Interface(self.parse_interface_declaration()?))
            }
            TokenKind::Struct => Ok(DeclarationKind::Struct(self.parse_struct_declaration()?)),
            TokenKind::Union => Ok(DeclarationKind::Union(self.parse_union_declaration()?)),
            TokenKind::Enum => self.parse_enum_family(attributes),
            TokenKind::Import => Ok(DeclarationKind::Import(self.parse_import_declaration()?)),
            TokenKind::Mixin => self.parse_mixin_family(),
            TokenKind::Pragma => {
                let pragma = self.parse_pragma_expression()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(DeclarationKind::Pragma(PragmaDeclaration { pragma, span, id: self.next_id() }))
            }
            TokenKind::Shared => {
                // Only `shared static this`/`~this` reaches here.
                self.advance();
                self.expect(TokenKind::Static)?;
                if self.eat(TokenKind::Tilde) {
                    let (member_attributes, body) = self.parse_special_function_tail()?;
                    Ok(DeclarationKind::SharedStaticDestructor(SharedStaticDestructor {
                        member_attributes,
                        body,
                        span,
                        id: self.next_id(),
                    }))
                } else {
                    let (member_attributes, body) = self.parse_special_function_tail()?;
                    Ok(DeclarationKind::SharedStaticConstructor(SharedStaticConstructor {
                        member_attributes,
                        body,
                        span,
                        id: self.next_id(),
                    }))
                }
            }
            TokenKind::Static => match self.peek().kind {
                TokenKind::This => {
                    self.advance();
                    let (member_attributes, body) = self.parse_special_function_tail()?;
                    Ok(DeclarationKind::StaticConstructor(StaticConstructor {
                        member_attributes,
                        body,
                        span,
                        id: self.next_id(),
                    }))
                }
                TokenKind::Tilde => {
                    self.advance();
                    self.advance();
                    let (member_attributes, body) = self.parse_special_function_tail()?;
                    Ok(DeclarationKind::StaticDestructor(StaticDestructor {
                        member_attributes,
                        body,
                        span,
                        id: self.next_id(),
                    }))
                }
                TokenKind::If => {
                    let condition = self.parse_static_if_condition()?;
                    Ok(DeclarationKind::Conditional(
                        self.parse_conditional_declaration_tail(condition, span)?,
                    ))
                }
                TokenKind::Assert => {
                    Ok(DeclarationKind::StaticAssert(self.parse_static_assert_declaration()?))
                }
                TokenKind::Foreach | TokenKind::ForeachReverse => Ok(
                    DeclarationKind::StaticForeach(self.parse_static_foreach_declaration()?),
                ),
                _ => self.fail(ParserError::expected_declaration(
                    self.current(),
                    self.current_span(),
                )),
            },
            TokenKind::Template => {
                Ok(DeclarationKind::Template(self.parse_template_declaration()?))
            }
            TokenKind::This => {
                if self.starts_with(&[
                    TokenKind::This,
                    TokenKind::LParen,
                    TokenKind::This,
                    TokenKind::RParen,
                ]) {
                    self.advance();
                    self.advance();
                    self.advance();
                    self.advance();
                    let member_attributes = self.parse_member_function_attributes()?;
                    let body = self.parse_function_body()?;
                    return Ok(DeclarationKind::Postblit(Postblit {
                        member_attributes,
                        body,
                        span,
                        id: self.next_id(),
                    }));
                }
                Ok(DeclarationKind::Constructor(self.parse_constructor()?))
            }
            TokenKind::Tilde => {
                self.advance();
                self.expect(TokenKind::This)?;
                let (member_attributes, body) = self.parse_special_function_tail()?;
                Ok(DeclarationKind::Destructor(Destructor {
                    member_attributes,
                    body,
                    span,
                    id: self.next_id(),
                }))
            }
            TokenKind::Invariant => {
                Ok(DeclarationKind::Invariant(self.parse_invariant_declaration()?))
            }
            TokenKind::Unittest => {
                self.advance();
                let block = self.parse_block()?;
                Ok(DeclarationKind::Unittest(UnittestDeclaration { block, span, id: self.next_id() }))
            }
            TokenKind::Version => {
                if self.peek_is(TokenKind::Assign) {
                    self.advance();
                    self.advance();
                    let token = self.parse_condition_token()?;
                    self.expect(TokenKind::Semicolon)?;
                    return Ok(DeclarationKind::VersionSpecification(VersionSpecification {
                        token,
                        span,
                        id: self.next_id(),
                    }));
                }
                let condition = CompileCondition::Version(self.parse_version_condition()?);
                Ok(DeclarationKind::Conditional(
                    self.parse_conditional_declaration_tail(condition, span)?,
                ))
            }
            TokenKind::Debug => {
                if self.peek_is(TokenKind::Assign) {
                    self.advance();
                    self.advance();
                    let token = self.parse_condition_token()?;
                    self.expect(TokenKind::Semicolon)?;
                    return Ok(DeclarationKind::DebugSpecification(DebugSpecification {
                        token,
                        span,
                        id: self.next_id(),
                    }));
                }
                let condition = CompileCondition::Debug(self.parse_debug_condition()?);
                Ok(DeclarationKind::Conditional(
                    self.parse_conditional_declaration_tail(condition, span)?,
                ))
            }
            _ => self.parse_variable_or_function(attributes),
        }
    }

    /// Parses `{ declarations }` with per-item recovery.
    pub(crate) fn parse_braced_declaration_list(&mut self) -> Result<Vec<Declaration>> {
        self.expect(TokenKind::LBrace)?;
        let mut declarations = Vec::new();
        while !self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
            let before = self.cursor();
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(_) => {
                    if self.handler.is_suppressed() {
                        // Inside speculation the whole list attempt fails.
                        return Err(ParserError::expected_declaration(
                            self.current(),
                            self.current_span(),
                        )
                        .into());
                    }
                    if self.cursor() == before {
                        self.advance();
                    }
                    self.recover_inside_braces();
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(declarations)
    }

    // ---- attributes -------------------------------------------------------

    /// One attribute of an attribute run; callers have checked
    /// `is_attribute`.
    pub(crate) fn parse_attribute(&mut self) -> Result<Attribute> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::At => AttributeKind::At(self.parse_at_attribute()?),
            TokenKind::Pragma => AttributeKind::Pragma(self.parse_pragma_expression()?),
            TokenKind::Extern => {
                if self.peek_is(TokenKind::LParen) {
                    AttributeKind::Linkage(self.parse_linkage_attribute()?)
                } else {
                    self.advance();
                    AttributeKind::Simple(AttributeKeyword::Extern)
                }
            }
            TokenKind::Align => {
                self.advance();
                if self.eat(TokenKind::LParen) {
                    let alignment = self.parse_assign_expression()?;
                    self.expect(TokenKind::RParen)?;
                    AttributeKind::Align(Some(Box::new(alignment)))
                } else {
                    AttributeKind::Align(None)
                }
            }
            TokenKind::Deprecated => {
                self.advance();
                if self.eat(TokenKind::LParen) {
                    let message = self.parse_assign_expression()?;
                    self.expect(TokenKind::RParen)?;
                    AttributeKind::Deprecated(Some(Box::new(message)))
                } else {
                    AttributeKind::Deprecated(None)
                }
            }
            TokenKind::Package => {
                self.advance();
                if self.eat(TokenKind::LParen) {
                    let chain = self.parse_identifier_chain()?;
                    self.expect(TokenKind::RParen)?;
                    AttributeKind::Package(Some(chain))
                } else {
                    AttributeKind::Package(None)
                }
            }
            kind => {
                let keyword = match kind {
                    TokenKind::Abstract => AttributeKeyword::Abstract,
                    TokenKind::Auto => AttributeKeyword::Auto,
                    TokenKind::Const => AttributeKeyword::Const,
                    TokenKind::Export => AttributeKeyword::Export,
                    TokenKind::Final => AttributeKeyword::Final,
                    TokenKind::Gshared => AttributeKeyword::Gshared,
                    TokenKind::Immutable => AttributeKeyword::Immutable,
                    TokenKind::Inout => AttributeKeyword::Inout,
                    TokenKind::Lazy => AttributeKeyword::Lazy,
                    TokenKind::Nothrow => AttributeKeyword::Nothrow,
                    TokenKind::Override => AttributeKeyword::Override,
                    TokenKind::Private => AttributeKeyword::Private,
                    TokenKind::Protected => AttributeKeyword::Protected,
                    TokenKind::Public => AttributeKeyword::Public,
                    TokenKind::Pure => AttributeKeyword::Pure,
                    TokenKind::Ref => AttributeKeyword::Ref,
                    TokenKind::Scope => AttributeKeyword::Scope,
                    TokenKind::Shared => AttributeKeyword::Shared,
                    TokenKind::Static => AttributeKeyword::Static,
                    TokenKind::Synchronized => AttributeKeyword::Synchronized,
                    _ => {
                        return self.fail(ParserError::unexpected_token(
                            self.current(),
                            "an attribute",
                            self.current_span(),
                        ))
                    }
                };
                self.advance();
                AttributeKind::Simple(keyword)
            }
        };
        Ok(Attribute { kind, span, id: self.next_id() })
    }

    /// `@ident`, `@ident(args)`, `@(args)`, or a bare unary expression.
    pub(crate) fn parse_at_attribute(&mut self) -> Result<AtAttribute> {
        let span = self.current_span();
        self.expect(TokenKind::At)?;
        if self.current_is(TokenKind::Identifier) {
            let identifier = self.expect_identifier()?;
            let arguments = if self.current_is(TokenKind::LParen) {
                Some(self.parse_paren_comma_list(Self::parse_assign_expression)?)
            } else {
                None
            };
            return Ok(AtAttribute { identifier: Some(identifier), arguments, expression: None, span, id: self.next_id() });
        }
        if self.current_is(TokenKind::LParen) {
            let arguments = self.parse_paren_comma_list(Self::parse_assign_expression)?;
            return Ok(AtAttribute { identifier: None, arguments: Some(arguments), expression: None, span, id: self.next_id() });
        }
        let expression = self.parse_unary_expression()?;
        Ok(AtAttribute {
            identifier: None,
            arguments: None,
            expression: Some(Box::new(expression)),
            span,
            id: self.next_id(),
        })
    }

    fn parse_linkage_attribute(&mut self) -> Result<LinkageAttribute> {
        let span = self.current_span();
        self.expect(TokenKind::Extern)?;
        self.expect(TokenKind::LParen)?;
        let identifier = self.expect_identifier()?;
        let has_plus_plus = self.eat(TokenKind::PlusPlus);
        let chain = if self.eat(TokenKind::Comma) {
            Some(self.parse_identifier_chain()?)
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        Ok(LinkageAttribute { identifier, has_plus_plus, chain, span, id: self.next_id() })
    }

    /// `pragma ( name , args? )`.
    pub(crate) fn parse_pragma_expression(&mut self) -> Result<PragmaExpression> {
        let span = self.current_span();
        self.expect(TokenKind::Pragma)?;
        self.expect(TokenKind::LParen)?;
        let name = self.expect_identifier()?;
        let arguments = if self.eat(TokenKind::Comma) {
            let arguments =
                self.parse_comma_list(TokenKind::RParen, Self::parse_assign_expression)?;
            Some(arguments)
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        Ok(PragmaExpression { name, arguments, span, id: self.next_id() })
    }

    /// The attribute loop after a member function's parameter list.
    pub(crate) fn parse_member_function_attributes(&mut self) -> Result<Vec<MemberFunctionAttribute>> {
        let mut attributes = Vec::new();
        loop {
            let span = self.current_span();
            let kind = match self.current_kind() {
                TokenKind::Const => MemberFunctionAttributeKind::Const,
                TokenKind::Immutable => MemberFunctionAttributeKind::Immutable,
                TokenKind::Inout => MemberFunctionAttributeKind::Inout,
                TokenKind::Shared => MemberFunctionAttributeKind::Shared,
                TokenKind::Pure => MemberFunctionAttributeKind::Pure,
                TokenKind::Nothrow => MemberFunctionAttributeKind::Nothrow,
                TokenKind::Return => MemberFunctionAttributeKind::Return,
                TokenKind::Scope => MemberFunctionAttributeKind::Scope,
                TokenKind::At => {
                    let at = self.parse_at_attribute()?;
                    attributes.push(MemberFunctionAttribute {
                        kind: MemberFunctionAttributeKind::At(at),
                        span,
                        id: self.next_id(),
                    });
                    continue;
                }
                _ => break,
            };
            self.advance();
            attributes.push(MemberFunctionAttribute { kind, span, id: self.next_id() });
        }
        Ok(attributes)
    }

    // ---- parameters -------------------------------------------------------

    /// A parenthesized runtime parameter list.
    pub(crate) fn parse_parameters(&mut self) -> Result<Parameters> {
        let span = self.current_span();
        self.expect(TokenKind::LParen)?;
        let mut parameters = Vec::new();
        let mut varargs = false;
        while !self.current_is_one_of(&[TokenKind::RParen, TokenKind::Eof]) {
            if self.eat(TokenKind::Ellipsis) {
                varargs = true;
                break;
            }
            parameters.push(self.parse_parameter()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(Parameters { parameters, varargs, span, id: self.next_id() })
    }

    fn parse_parameter(&mut self) -> Result<Parameter> {
        let span = self.current_span();
        let mut attributes = Vec::new();
        loop {
            let attribute = match self.current_kind() {
                TokenKind::Const if !self.peek_is(TokenKind::LParen) => ParameterAttribute::Const,
                TokenKind::Immutable if !self.peek_is(TokenKind::LParen) => {
                    ParameterAttribute::Immutable
                }
                TokenKind::Inout if !self.peek_is(TokenKind::LParen) => ParameterAttribute::Inout,
                TokenKind::Shared if !self.peek_is(TokenKind::LParen) => ParameterAttribute::Shared,
                TokenKind::Final => ParameterAttribute::Final,
                TokenKind::In => ParameterAttribute::In,
                TokenKind::Lazy => ParameterAttribute::Lazy,
                TokenKind::Out => ParameterAttribute::Out,
                TokenKind::Ref => ParameterAttribute::Ref,
                TokenKind::Return => ParameterAttribute::Return,
                TokenKind::Scope => ParameterAttribute::Scope,
                TokenKind::At => {
                    let at = self.parse_at_attribute()?;
                    attributes.push(ParameterAttribute::At(at));
                    continue;
                }
                _ => break,
            };
            self.advance();
            attributes.push(attribute);
        }
        // A lone identifier at a declarator boundary is a name without a
        // type, as in the parameters of `(a, b) => a + b`.
        let (type_, name) = if self.current_is(TokenKind::Identifier)
            && self.peek_is_one_of(&[TokenKind::Comma, TokenKind::RParen, TokenKind::Assign])
        {
            (None, self.eat_identifier())
        } else {
            (Some(self.parse_type()?), self.eat_identifier())
        };
        let varargs = self.eat(TokenKind::Ellipsis);
        let default = if self.eat(TokenKind::Assign) {
            Some(self.parse_assign_expression()?)
        } else {
            None
        };
        Ok(Parameter { attributes, type_, name, default, varargs, span, id: self.next_id() })
    }

    // ---- function machinery -----------------------------------------------

    /// The shared `()`-attrs-body tail of destructors and the static
    /// constructor family.
    fn parse_special_function_tail(&mut self) -> Result<(Vec<MemberFunctionAttribute>, FunctionBody)> {
        self.expect(TokenKind::This)?;
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        let member_attributes = self.parse_member_function_attributes()?;
        let body = self.parse_function_body()?;
        Ok((member_attributes, body))
    }

    fn parse_constructor(&mut self) -> Result<Constructor> {
        let span = self.current_span();
        self.expect(TokenKind::This)?;
        // A second paren group after the first one means the constructor
        // is templated.
        let template_parameters = if self.current_is(TokenKind::LParen)
            && matches!(self.peek_past_parens().map(|t| t.kind), Some(TokenKind::LParen))
        {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let parameters = self.parse_parameters()?;
        let member_attributes = self.parse_member_function_attributes()?;
        let constraint = self.parse_optional_constraint()?;
        let body = self.parse_function_body()?;
        Ok(Constructor {
            template_parameters,
            parameters,
            member_attributes,
            constraint,
            body,
            span,
            id: self.next_id(),
        })
    }

    /// A function body: contracts, then `;`, a brace block, or `=> expr;`.
    ///
    /// Matched brace blocks are always parsed so their diagnostics
    /// surface; the statements are kept only when body retention is on.
    pub(crate) fn parse_function_body(&mut self) -> Result<FunctionBody> {
        let span = self.current_span();
        let mut contracts = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::In => contracts.push(self.parse_in_contract()?),
                TokenKind::Out => contracts.push(self.parse_out_contract()?),
                _ => break,
            }
        }

        if !contracts.is_empty() {
            if self.current_is(TokenKind::Body) {
                self.warn(ParserWarning::body_keyword_deprecated(self.current_span()));
                self.advance();
            } else {
                self.eat(TokenKind::Do);
            }
            if self.eat(TokenKind::Semicolon) {
                return Ok(FunctionBody {
                    contracts,
                    had_a_body: false,
                    kind: FunctionBodyKind::Semicolon,
                    span,
                    id: self.next_id(),
                });
            }
            let block = self.parse_minimized_block()?;
            return Ok(FunctionBody {
                contracts,
                had_a_body: true,
                kind: FunctionBodyKind::Block { block },
                span,
                id: self.next_id(),
            });
        }

        match self.current_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(FunctionBody {
                    contracts,
                    had_a_body: false,
                    kind: FunctionBodyKind::Semicolon,
                    span,
                    id: self.next_id(),
                })
            }
            TokenKind::LBrace => {
                let block = self.parse_minimized_block()?;
                Ok(FunctionBody {
                    contracts,
                    had_a_body: true,
                    kind: FunctionBodyKind::Block { block },
                    span,
                    id: self.next_id(),
                })
            }
            TokenKind::FatArrow => {
                self.advance();
                let expression = self.parse_assign_expression()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(FunctionBody {
                    contracts,
                    had_a_body: true,
                    kind: FunctionBodyKind::Shortened(expression),
                    span,
                    id: self.next_id(),
                })
            }
            _ => self.fail(ParserError::missing_function_body(self.current(), self.current_span())),
        }
    }

    /// Parses a brace block and applies the memory-minimization policy.
    fn parse_minimized_block(&mut self) -> Result<Option<Block>> {
        let block = self.parse_block()?;
        if self.options.retain_function_bodies {
            Ok(Some(block))
        } else {
            Ok(None)
        }
    }

    fn parse_in_contract(&mut self) -> Result<FunctionContract> {
        let span = self.current_span();
        self.expect(TokenKind::In)?;
        let kind = if self.current_is(TokenKind::LBrace) {
            ContractKind::InBlock(self.parse_block()?)
        } else {
            self.expect(TokenKind::LParen)?;
            let condition = self.parse_assign_expression()?;
            let message = if self.eat(TokenKind::Comma) && !self.current_is(TokenKind::RParen) {
                Some(self.parse_assign_expression()?)
            } else {
                None
            };
            self.expect(TokenKind::RParen)?;
            ContractKind::InExpression { condition, message }
        };
        Ok(FunctionContract { kind, span, id: self.next_id() })
    }

    fn parse_out_contract(&mut self) -> Result<FunctionContract> {
        let span = self.current_span();
        self.expect(TokenKind::Out)?;
        let kind = if self.current_is(TokenKind::LBrace) {
            ContractKind::OutBlock { parameter: None, block: self.parse_block()? }
        } else {
            self.expect(TokenKind::LParen)?;
            let parameter = self.eat_identifier();
            if self.eat(TokenKind::Semicolon) {
                let condition = self.parse_assign_expression()?;
                let message = if self.eat(TokenKind::Comma) && !self.current_is(TokenKind::RParen)
                {
                    Some(self.parse_assign_expression()?)
                } else {
                    None
                };
                self.expect(TokenKind::RParen)?;
                ContractKind::OutExpression { parameter, condition, message }
            } else if self.eat(TokenKind::RParen) {
                ContractKind::OutBlock { parameter, block: self.parse_block()? }
            } else {
                return self.fail(ParserError::invalid_out_contract(
                    self.current(),
                    self.current_span(),
                ));
            }
        };
        Ok(FunctionContract { kind, span, id: self.next_id() })
    }

    // ---- aggregates -------------------------------------------------------

    fn parse_class_declaration(&mut self) -> Result<ClassDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Class)?;
        let name = self.expect_identifier()?;
        let template_parameters = if self.current_is(TokenKind::LParen) {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let mut constraint = self.parse_optional_constraint()?;
        let base_classes = self.parse_base_class_list()?;
        if constraint.is_none() {
            constraint = self.parse_optional_constraint()?;
        }
        let body = self.parse_aggregate_body()?;
        Ok(ClassDeclaration {
            name,
            template_parameters,
            constraint,
            base_classes,
            body,
            span,
            id: self.next_id(),
        })
    }

    fn parse_interface_declaration(&mut self) -> Result<InterfaceDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Interface)?;
        let name = self.expect_identifier()?;
        let template_parameters = if self.current_is(TokenKind::LParen) {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let mut constraint = self.parse_optional_constraint()?;
        let base_classes = self.parse_base_class_list()?;
        if constraint.is_none() {
            constraint = self.parse_optional_constraint()?;
        }
        let body = self.parse_aggregate_body()?;
        Ok(InterfaceDeclaration {
            name,
            template_parameters,
            constraint,
            base_classes,
            body,
            span,
            id: self.next_id(),
        })
    }

    fn parse_struct_declaration(&mut self) -> Result<StructDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Struct)?;
        let name = self.eat_identifier();
        let template_parameters = if name.is_some() && self.current_is(TokenKind::LParen) {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let constraint = self.parse_optional_constraint()?;
        let body = self.parse_aggregate_body()?;
        Ok(StructDeclaration { name, template_parameters, constraint, body, span, id: self.next_id() })
    }

    fn parse_union_declaration(&mut self) -> Result<UnionDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Union)?;
        let name = self.eat_identifier();
        let template_parameters = if name.is_some() && self.current_is(TokenKind::LParen) {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let constraint = self.parse_optional_constraint()?;
        let body = self.parse_aggregate_body()?;
        Ok(UnionDeclaration { name, template_parameters, constraint, body, span, id: self.next_id() })
    }

    /// `: Base, Base2` with the deprecated protection keywords tolerated.
    fn parse_base_class_list(&mut self) -> Result<Vec<BaseClass>> {
        if !self.eat(TokenKind::Colon) {
            return Ok(Vec::new());
        }
        let mut base_classes = Vec::new();
        loop {
            if self.current_is_one_of(&[
                TokenKind::Private,
                TokenKind::Protected,
                TokenKind::Public,
                TokenKind::Package,
            ]) {
                self.warn(ParserWarning::base_class_protection(self.current_span()));
                self.advance();
            }
            let span = self.current_span();
            let type_ = self.parse_type()?;
            base_classes.push(BaseClass { type_, span, id: self.next_id() });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(base_classes)
    }

    fn parse_aggregate_body(&mut self) -> Result<Option<StructBody>> {
        if self.eat(TokenKind::Semicolon) {
            return Ok(None);
        }
        let span = self.current_span();
        let declarations = self.parse_braced_declaration_list()?;
        Ok(Some(StructBody { declarations, span, id: self.next_id() }))
    }

    // ---- templates --------------------------------------------------------

    fn parse_template_declaration(&mut self) -> Result<TemplateDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Template)?;
        let name = self.expect_identifier()?;
        let parameters = self.parse_template_parameters()?;
        let constraint = self.parse_optional_constraint()?;
        let declarations = self.parse_braced_declaration_list()?;
        Ok(TemplateDeclaration { name, parameters, constraint, declarations, span, id: self.next_id() })
    }

    /// `( TemplateParameter, ... )`.
    pub(crate) fn parse_template_parameters(&mut self) -> Result<TemplateParameters> {
        let span = self.current_span();
        self.expect(TokenKind::LParen)?;
        let parameters = self.parse_comma_list(TokenKind::RParen, Self::parse_template_parameter)?;
        self.expect(TokenKind::RParen)?;
        Ok(TemplateParameters { parameters, span, id: self.next_id() })
    }

    /// One template parameter: type, value, alias, tuple, or this.
    pub(crate) fn parse_template_parameter(&mut self) -> Result<TemplateParameter> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Alias => {
                self.advance();
                let type_ = if self.current_is(TokenKind::Identifier)
                    && self.peek_is_one_of(&[
                        TokenKind::Colon,
                        TokenKind::Assign,
                        TokenKind::Comma,
                        TokenKind::RParen,
                    ]) {
                    None
                } else {
                    Some(self.parse_type()?)
                };
                let name = self.expect_identifier()?;
                let specialization = if self.eat(TokenKind::Colon) {
                    Some(self.parse_type_or_expr_argument()?)
                } else {
                    None
                };
                let default = if self.eat(TokenKind::Assign) {
                    Some(self.parse_type_or_expr_argument()?)
                } else {
                    None
                };
                TemplateParameterKind::Alias { type_, name, specialization, default }
            }
            TokenKind::This => {
                self.advance();
                TemplateParameterKind::This(self.parse_template_type_parameter()?)
            }
            TokenKind::Identifier if self.peek_is(TokenKind::Ellipsis) => {
                let name = self.expect_identifier()?;
                self.advance();
                TemplateParameterKind::Tuple(name)
            }
            TokenKind::Identifier
                if self.peek_is_one_of(&[
                    TokenKind::Comma,
                    TokenKind::RParen,
                    TokenKind::Colon,
                    TokenKind::Assign,
                ]) =>
            {
                TemplateParameterKind::Type(self.parse_template_type_parameter()?)
            }
            _ => {
                let type_ = self.parse_type()?;
                let name = self.expect_identifier()?;
                let specialization = if self.eat(TokenKind::Colon) {
                    Some(self.parse_assign_expression()?)
                } else {
                    None
                };
                let default = if self.eat(TokenKind::Assign) {
                    Some(self.parse_assign_expression()?)
                } else {
                    None
                };
                TemplateParameterKind::Value { type_, name, specialization, default }
            }
        };
        Ok(TemplateParameter { kind, span, id: self.next_id() })
    }

    fn parse_template_type_parameter(&mut self) -> Result<TemplateTypeParameter> {
        let name = self.expect_identifier()?;
        let specialization = if self.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let default = if self.eat(TokenKind::Assign) {
            Some(self.parse_type()?)
        } else {
            None
        };
        Ok(TemplateTypeParameter { name, specialization, default })
    }

    /// A type when the speculative type parse stops at a boundary token,
    /// otherwise an assign expression.
    fn parse_type_or_expr_argument(&mut self) -> Result<TemplateArgument> {
        let bookmark = self.set_bookmark();
        match self.parse_type() {
            Ok(type_)
                if self.current_is_one_of(&[
                    TokenKind::Comma,
                    TokenKind::RParen,
                    TokenKind::Assign,
                ]) =>
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

    /// The optional `if (expression)` constraint.
    pub(crate) fn parse_optional_constraint(&mut self) -> Result<Option<Constraint>> {
        if !self.current_is(TokenKind::If) {
            return Ok(None);
        }
        let span = self.current_span();
        self.advance();
        self.expect(TokenKind::LParen)?;
        let expression = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(Some(Constraint { expression, span, id: self.next_id() }))
    }

    // ---- conditional compilation ------------------------------------------

    /// The integer/identifier/`unittest`/`assert` argument of version and
    /// debug conditions.
    fn parse_condition_token(&mut self) -> Result<ConditionToken> {
        let token = match self.current_kind() {
            TokenKind::IntLiteral => {
                ConditionToken::Integer(self.current().text.clone().unwrap_or_default())
            }
            TokenKind::Identifier => {
                ConditionToken::Identifier(self.current().text.clone().unwrap_or_default())
            }
            TokenKind::Unittest => ConditionToken::Unittest,
            TokenKind::Assert => ConditionToken::Assert,
            _ => {
                return self.fail(ParserError::unexpected_token(
                    self.current(),
                    "an integer, identifier, 'unittest', or 'assert'",
                    self.current_span(),
                ))
            }
        };
        self.advance();
        Ok(token)
    }

    /// `version ( token )`.
    pub(crate) fn parse_version_condition(&mut self) -> Result<VersionCondition> {
        let span = self.current_span();
        self.expect(TokenKind::Version)?;
        self.expect(TokenKind::LParen)?;
        let token = self.parse_condition_token()?;
        self.expect(TokenKind::RParen)?;
        Ok(VersionCondition { token, span, id: self.next_id() })
    }

    /// `debug` or `debug ( token )`.
    pub(crate) fn parse_debug_condition(&mut self) -> Result<DebugCondition> {
        let span = self.current_span();
        self.expect(TokenKind::Debug)?;
        let token = if self.eat(TokenKind::LParen) {
            let token = self.parse_condition_token()?;
            self.expect(TokenKind::RParen)?;
            Some(token)
        } else {
            None
        };
        Ok(DebugCondition { token, span, id: self.next_id() })
    }

    /// `static if ( expression )`.
    pub(crate) fn parse_static_if_condition(&mut self) -> Result<CompileCondition> {
        let span = self.current_span();
        self.expect(TokenKind::Static)?;
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let expression = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(CompileCondition::StaticIf(StaticIfCondition { expression, span, id: self.next_id() }))
    }

    /// Both branches of a conditional declaration become child lists;
    /// nothing is evaluated.
    fn parse_conditional_declaration_tail(
        &mut self,
        condition: CompileCondition,
        span: dryad_span::Span,
    ) -> Result<ConditionalDeclaration> {
        let true_declarations = self.parse_conditional_branch()?;
        let false_declarations = if self.eat(TokenKind::Else) {
            self.parse_conditional_branch()?
        } else {
            Vec::new()
        };
        Ok(ConditionalDeclaration {
            condition,
            true_declarations,
            false_declarations,
            span,
            id: self.next_id(),
        })
    }

    /// One branch: `{ decls }`, `: decls-to-scope-end`, or a single
    /// declaration.
    fn parse_conditional_branch(&mut self) -> Result<Vec<Declaration>> {
        if self.current_is(TokenKind::LBrace) {
            return self.parse_braced_declaration_list();
        }
        if self.eat(TokenKind::Colon) {
            let mut declarations = Vec::new();
            while !self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
                let before = self.cursor();
                match self.parse_declaration() {
                    Ok(declaration) => declarations.push(declaration),
                    Err(_) => {
                        if self.handler.is_suppressed() {
                            return Err(ParserError::expected_declaration(
                                self.current(),
                                self.current_span(),
                            )
                            .into());
                        }
                        if self.cursor() == before {
                            self.advance();
                        }
                        self.recover_inside_braces();
                    }
                }
            }
            return Ok(declarations);
        }
        Ok(vec![self.parse_declaration()?])
    }

    /// `static assert ( condition , message? ) ;`
    pub(crate) fn parse_static_assert_declaration(&mut self) -> Result<StaticAssertDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Static)?;
        self.expect(TokenKind::Assert)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_assign_expression()?;
        let message = if self.eat(TokenKind::Comma) && !self.current_is(TokenKind::RParen) {
            let message = self.parse_assign_expression()?;
            self.eat(TokenKind::Comma);
            Some(message)
        } else {
            None
        };
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(StaticAssertDeclaration { condition, message, span, id: self.next_id() })
    }

    /// `static foreach (...)` over declarations.
    fn parse_static_foreach_declaration(&mut self) -> Result<StaticForeachDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Static)?;
        let (kind, variables, aggregate, high) = self.parse_foreach_header(span)?;
        let declarations = if self.current_is(TokenKind::LBrace) {
            self.parse_braced_declaration_list()?
        } else {
            vec![self.parse_declaration()?]
        };
        Ok(StaticForeachDeclaration {
            kind,
            variables,
            aggregate,
            high,
            declarations,
            span,
            id: self.next_id(),
        })
    }

    // ---- the enum family --------------------------------------------------

    /// After `enum`, the lookaheads `: { identifier` distinguish an
    /// anonymous enum, a named enum, an eponymous template, or `enum`
    /// acting as a storage class for a variable or function.
    fn parse_enum_family(&mut self, attributes: &mut Vec<Attribute>) -> Result<DeclarationKind> {
        let span = self.current_span();
        match self.peek().kind {
            TokenKind::Colon | TokenKind::LBrace => {
                Ok(DeclarationKind::AnonymousEnum(self.parse_anonymous_enum()?))
            }
            TokenKind::Identifier => match self.peek_n(2).kind {
                TokenKind::LParen => {
                    // `enum ident (...) =` is an eponymous template; any
                    // other second paren group falls through to the
                    // function path with `enum` as a storage class.
                    let eponymous = {
                        let bookmark = self.set_bookmark();
                        self.advance();
                        self.advance();
                        let past = self.peek_past_parens().map(|t| t.kind);
                        self.go_to_bookmark(bookmark);
                        past == Some(TokenKind::Assign)
                    };
                    if eponymous {
                        return Ok(DeclarationKind::EponymousTemplate(
                            self.parse_eponymous_template()?,
                        ));
                    }
                    self.push_enum_attribute(attributes, span);
                    self.advance();
                    self.parse_variable_or_function(attributes)
                }
                TokenKind::Assign => {
                    self.push_enum_attribute(attributes, span);
                    self.advance();
                    let variable = self.parse_variable_declaration(None)?;
                    Ok(DeclarationKind::Variable(variable))
                }
                TokenKind::Colon | TokenKind::LBrace | TokenKind::Semicolon => {
                    Ok(DeclarationKind::Enum(self.parse_named_enum()?))
                }
                _ => {
                    self.push_enum_attribute(attributes, span);
                    self.advance();
                    self.parse_variable_or_function(attributes)
                }
            },
            _ => {
                self.push_enum_attribute(attributes, span);
                self.advance();
                self.parse_variable_or_function(attributes)
            }
        }
    }

    fn push_enum_attribute(&self, attributes: &mut Vec<Attribute>, span: dryad_span::Span) {
        attributes.push(Attribute {
            kind: AttributeKind::Simple(AttributeKeyword::Enum),
            span,
            id: self.next_id(),
        });
    }

    fn parse_named_enum(&mut self) -> Result<EnumDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Enum)?;
        let name = self.expect_identifier()?;
        let base_type = if self.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        if self.eat(TokenKind::Semicolon) {
            return Ok(EnumDeclaration { name, base_type, members: None, span, id: self.next_id() });
        }
        self.expect(TokenKind::LBrace)?;
        let members = self.parse_comma_list(TokenKind::RBrace, Self::parse_enum_member)?;
        self.expect(TokenKind::RBrace)?;
        Ok(EnumDeclaration { name, base_type, members: Some(members), span, id: self.next_id() })
    }

    fn parse_enum_member(&mut self) -> Result<EnumMember> {
        let span = self.current_span();
        let comment = self.take_comment();
        let name = self.expect_identifier()?;
        let value = if self.eat(TokenKind::Assign) {
            Some(self.parse_assign_expression()?)
        } else {
            None
        };
        Ok(EnumMember { name, value, comment, span, id: self.next_id() })
    }

    fn parse_anonymous_enum(&mut self) -> Result<AnonymousEnumDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Enum)?;
        let base_type = if self.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::LBrace)?;
        let members = self.parse_comma_list(TokenKind::RBrace, Self::parse_anonymous_enum_member)?;
        self.expect(TokenKind::RBrace)?;
        Ok(AnonymousEnumDeclaration { base_type, members, span, id: self.next_id() })
    }

    fn parse_anonymous_enum_member(&mut self) -> Result<AnonymousEnumMember> {
        let span = self.current_span();
        let comment = self.take_comment();
        let type_ = if self.current_is(TokenKind::Identifier)
            && self.peek_is_one_of(&[TokenKind::Comma, TokenKind::RBrace, TokenKind::Assign])
        {
            None
        } else {
            Some(self.parse_type()?)
        };
        let name = self.expect_identifier()?;
        let value = if self.eat(TokenKind::Assign) {
            Some(self.parse_assign_expression()?)
        } else {
            None
        };
        Ok(AnonymousEnumMember { type_, name, value, comment, span, id: self.next_id() })
    }

    /// `enum name(TemplateParameters) = value ;`
    fn parse_eponymous_template(&mut self) -> Result<EponymousTemplateDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Enum)?;
        let name = self.expect_identifier()?;
        let template_parameters = self.parse_template_parameters()?;
        self.expect(TokenKind::Assign)?;
        let value = {
            let bookmark = self.set_bookmark();
            match self.parse_type() {
                Ok(type_) if self.current_is(TokenKind::Semicolon) => {
                    self.abandon_bookmark(bookmark);
                    EponymousValue::Type(type_)
                }
                _ => {
                    self.go_to_bookmark(bookmark);
                    EponymousValue::Expression(self.parse_assign_expression()?)
                }
            }
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(EponymousTemplateDeclaration {
            name,
            template_parameters,
            value,
            span,
            id: self.next_id(),
        })
    }

    // ---- alias ------------------------------------------------------------

    fn parse_alias_declaration(&mut self) -> Result<DeclarationKind> {
        let span = self.current_span();
        self.expect(TokenKind::Alias)?;

        // `alias ident this;`
        if self.current_is(TokenKind::Identifier) && self.peek_is(TokenKind::This) {
            let name = self.expect_identifier()?;
            self.advance();
            self.expect(TokenKind::Semicolon)?;
            return Ok(DeclarationKind::AliasThis(AliasThisDeclaration {
                name,
                span,
                id: self.next_id(),
            }));
        }

        // New style: `alias ident = ...` or templated `alias ident(...) = ...`.
        let new_style = self.current_is(TokenKind::Identifier)
            && (self.peek_is(TokenKind::Assign)
                || (self.peek_is(TokenKind::LParen) && {
                    let bookmark = self.set_bookmark();
                    self.advance();
                    let past = self.peek_past_parens().map(|t| t.kind);
                    self.go_to_bookmark(bookmark);
                    past == Some(TokenKind::Assign)
                }));
        if new_style {
            let initializers =
                self.parse_comma_list(TokenKind::Semicolon, Self::parse_alias_initializer)?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(DeclarationKind::Alias(AliasDeclaration {
                kind: AliasKind::New(initializers),
                span,
                id: self.next_id(),
            }));
        }

        // Old style: `alias storage* Type name1, name2 ;`.
        while self.is_storage_class() {
            self.advance();
        }
        let type_ = self.parse_type()?;
        if self.current_is(TokenKind::Identifier) && self.peek_is(TokenKind::LParen) {
            // The legacy `alias Type func() @attr;` form: tolerated with a
            // warning, skipping everything up to the semicolon.
            self.warn(ParserWarning::legacy_alias_syntax(self.current_span()));
            let name = self.expect_identifier()?;
            while !self.current_is_one_of(&[TokenKind::Semicolon, TokenKind::Eof]) {
                self.advance();
            }
            self.expect(TokenKind::Semicolon)?;
            return Ok(DeclarationKind::Alias(AliasDeclaration {
                kind: AliasKind::Old(OldAliasDeclaration { type_, names: vec![name] }),
                span,
                id: self.next_id(),
            }));
        }
        let mut names = vec![self.expect_identifier()?];
        while self.eat(TokenKind::Comma) {
            names.push(self.expect_identifier()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(DeclarationKind::Alias(AliasDeclaration {
            kind: AliasKind::Old(OldAliasDeclaration { type_, names }),
            span,
            id: self.next_id(),
        }))
    }

    fn parse_alias_initializer(&mut self) -> Result<AliasInitializer> {
        let span = self.current_span();
        let name = self.expect_identifier()?;
        let template_parameters = if self.current_is(TokenKind::LParen) {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        self.expect(TokenKind::Assign)?;
        let value = if self.current_is(TokenKind::Identifier) && self.peek_is(TokenKind::FatArrow)
        {
            AliasValue::Lambda(self.parse_assign_expression()?)
        } else {
            AliasValue::Type(self.parse_type()?)
        };
        Ok(AliasInitializer { name, template_parameters, value, span, id: self.next_id() })
    }

    // ---- imports ----------------------------------------------------------

    fn parse_import_declaration(&mut self) -> Result<ImportDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Import)?;
        let mut imports = vec![self.parse_single_import()?];
        while self.eat(TokenKind::Comma) {
            imports.push(self.parse_single_import()?);
        }
        let bindings = if self.eat(TokenKind::Colon) {
            let import = imports.pop().unwrap();
            let mut binds = vec![self.parse_import_bind()?];
            while self.eat(TokenKind::Comma) {
                binds.push(self.parse_import_bind()?);
            }
            Some(ImportBindings { import, binds })
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(ImportDeclaration { imports, bindings, span, id: self.next_id() })
    }

    fn parse_single_import(&mut self) -> Result<SingleImport> {
        let span = self.current_span();
        let rename = if self.current_is(TokenKind::Identifier) && self.peek_is(TokenKind::Assign) {
            let rename = self.expect_identifier()?;
            self.advance();
            Some(rename)
        } else {
            None
        };
        let chain = self.parse_identifier_chain()?;
        Ok(SingleImport { rename, chain, span, id: self.next_id() })
    }

    fn parse_import_bind(&mut self) -> Result<ImportBind> {
        let span = self.current_span();
        let first = self.expect_identifier()?;
        if self.eat(TokenKind::Assign) {
            let name = self.expect_identifier()?;
            return Ok(ImportBind { rename: Some(first), name, span, id: self.next_id() });
        }
        Ok(ImportBind { rename: None, name: first, span, id: self.next_id() })
    }

    /// A plain dotted identifier chain (no template instances).
    pub(crate) fn parse_identifier_chain(&mut self) -> Result<IdentifierChain> {
        let span = self.current_span();
        let mut identifiers = vec![self.expect_identifier()?];
        while self.eat(TokenKind::Dot) {
            identifiers.push(self.expect_identifier()?);
        }
        Ok(IdentifierChain { identifiers, span, id: self.next_id() })
    }

    // ---- mixins -----------------------------------------------------------

    fn parse_mixin_family(&mut self) -> Result<DeclarationKind> {
        let span = self.current_span();
        if self.peek_is(TokenKind::Template) {
            self.advance();
            let template = self.parse_template_declaration()?;
            return Ok(DeclarationKind::MixinTemplate(MixinTemplateDeclaration {
                template,
                span,
                id: self.next_id(),
            }));
        }
        if self.peek_is(TokenKind::LParen) {
            return self.parse_string_mixin_declaration();
        }
        // `mixin a.b.Name!(args) ident?;`
        self.advance();
        let mixin_span = span;
        let name = self.parse_symbol_chain()?;
        let identifier = self.eat_identifier();
        self.expect(TokenKind::Semicolon)?;
        Ok(DeclarationKind::Mixin(MixinDeclaration {
            kind: MixinDeclarationKind::Template(TemplateMixin {
                name,
                identifier,
                span: mixin_span,
                id: self.next_id(),
            }),
            trivial_declarations: Vec::new(),
            span,
            id: self.next_id(),
        }))
    }

    /// `mixin(args);` — when the sole argument is a `q{...}` token string
    /// the payload is re-lexed through the configured collaborator and
    /// parsed as a sub-module.
    fn parse_string_mixin_declaration(&mut self) -> Result<DeclarationKind> {
        let span = self.current_span();
        self.expect(TokenKind::Mixin)?;
        // Capture the raw token before the list parse consumes it.
        let payload = if self.peek().kind.is_string_literal() {
            self.peek().text.clone().zip(Some(self.peek().line))
        } else {
            None
        };
        let arguments = self.parse_paren_comma_list(Self::parse_assign_expression)?;
        self.expect(TokenKind::Semicolon)?;

        let mut trivial_declarations = Vec::new();
        if arguments.len() == 1 {
            if let Some((text, line)) = payload {
                if let Some(inner) = text.strip_prefix("q{").and_then(|rest| rest.strip_suffix('}'))
                {
                    trivial_declarations = self.parse_mixin_payload(inner, line);
                }
            }
        }

        Ok(DeclarationKind::Mixin(MixinDeclaration {
            kind: MixinDeclarationKind::Expression(arguments),
            trivial_declarations,
            span,
            id: self.next_id(),
        }))
    }

    fn parse_mixin_payload(&mut self, source: &str, line_offset: usize) -> Vec<Declaration> {
        let Some(relexer) = self.options.relexer else {
            return Vec::new();
        };
        match relexer.relex(source, line_offset) {
            Ok(tokens) => {
                let mut sub =
                    ParserContext::new(self.handler, self.node_builder, tokens, self.options);
                let module = sub.parse_module();
                module.declarations
            }
            Err(detail) => {
                self.handler
                    .emit_err(ParserError::mixin_relex_failed(detail, self.previous_span()).into());
                Vec::new()
            }
        }
    }

    // ---- invariant --------------------------------------------------------

    fn parse_invariant_declaration(&mut self) -> Result<InvariantDeclaration> {
        let span = self.current_span();
        self.expect(TokenKind::Invariant)?;
        if self.eat(TokenKind::LParen) {
            if self.eat(TokenKind::RParen) {
                let block = self.parse_block()?;
                return Ok(InvariantDeclaration {
                    block: Some(block),
                    expression: None,
                    span,
                    id: self.next_id(),
                });
            }
            let expression = self.parse_assign_expression()?;
            self.expect(TokenKind::RParen)?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(InvariantDeclaration {
                block: None,
                expression: Some(expression),
                span,
                id: self.next_id(),
            });
        }
        let block = self.parse_block()?;
        Ok(InvariantDeclaration { block: Some(block), expression: None, span, id: self.next_id() })
    }

    // ---- variables and functions ------------------------------------------

    /// The generic `type identifier ...` path, deciding between a function
    /// and a variable by whether the first paren group after the name is
    /// followed by `=`.
    fn parse_variable_or_function(&mut self, attributes: &mut Vec<Attribute>) -> Result<DeclarationKind> {
        // Storage-class-only declarations: `auto x = ...`, `auto f() {}`.
        if !attributes.is_empty() && self.current_is(TokenKind::Identifier) {
            if self.peek_is(TokenKind::Assign) {
                return Ok(DeclarationKind::Variable(self.parse_variable_declaration(None)?));
            }
            if self.peek_is(TokenKind::LParen) {
                let past = {
                    let bookmark = self.set_bookmark();
                    self.advance();
                    let past = self.peek_past_parens().map(|t| t.kind);
                    self.go_to_bookmark(bookmark);
                    past
                };
                if past == Some(TokenKind::Assign) {
                    return Ok(DeclarationKind::Variable(self.parse_variable_declaration(None)?));
                }
                let name = self.expect_identifier()?;
                return Ok(DeclarationKind::Function(
                    self.parse_function_declaration_tail(None, name)?,
                ));
            }
        }

        let type_ = self.parse_type()?;
        if !self.current_is(TokenKind::Identifier) {
            return self.fail(ParserError::expected_identifier(
                self.current(),
                self.current_span(),
            ));
        }

        if self.peek_is(TokenKind::LParen) {
            let past = {
                let bookmark = self.set_bookmark();
                self.advance();
                let past = self.peek_past_parens().map(|t| t.kind);
                self.go_to_bookmark(bookmark);
                past
            };
            if past != Some(TokenKind::Assign) {
                let name = self.expect_identifier()?;
                return Ok(DeclarationKind::Function(
                    self.parse_function_declaration_tail(Some(type_), name)?,
                ));
            }
        }

        Ok(DeclarationKind::Variable(self.parse_variable_declaration(Some(type_))?))
    }

    fn parse_function_declaration_tail(
        &mut self,
        return_type: Option<Type>,
        name: Identifier,
    ) -> Result<FunctionDeclaration> {
        let span = name.span;
        let template_parameters = if self.current_is(TokenKind::LParen)
            && matches!(self.peek_past_parens().map(|t| t.kind), Some(TokenKind::LParen))
        {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let parameters = self.parse_parameters()?;
        let member_attributes = self.parse_member_function_attributes()?;
        let constraint = self.parse_optional_constraint()?;
        let body = self.parse_function_body()?;
        Ok(FunctionDeclaration {
            return_type,
            name,
            template_parameters,
            parameters,
            member_attributes,
            constraint,
            body,
            span,
            id: self.next_id(),
        })
    }

    /// A declarator list with initializers; `type_` is `None` for
    /// storage-class-only declarations.
    pub(crate) fn parse_variable_declaration(&mut self, type_: Option<Type>) -> Result<VariableDeclaration> {
        let span = match &type_ {
            Some(type_) => type_.span(),
            None => self.current_span(),
        };
        let mut declarators = vec![self.parse_declarator()?];
        while self.eat(TokenKind::Comma) {
            declarators.push(self.parse_declarator()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(VariableDeclaration { type_, declarators, span, id: self.next_id() })
    }

    fn parse_declarator(&mut self) -> Result<Declarator> {
        let span = self.current_span();
        let name = self.expect_identifier()?;
        let template_parameters = if self.current_is(TokenKind::LParen) {
            Some(self.parse_template_parameters()?)
        } else {
            None
        };
        let mut c_style_suffixes = Vec::new();
        while self.current_is(TokenKind::LBracket) {
            self.warn(ParserWarning::c_style_array_declarator(self.current_span()));
            c_style_suffixes.extend(self.parse_type_suffixes(true)?);
        }
        let initializer = if self.eat(TokenKind::Assign) {
            Some(self.parse_initializer()?)
        } else {
            None
        };
        Ok(Declarator { name, template_parameters, c_style_suffixes, initializer, span, id: self.next_id() })
    }

    /// An initializer: `void`, an array or struct initializer, or an
    /// assign expression.
    pub(crate) fn parse_initializer(&mut self) -> Result<Initializer> {
        match self.current_kind() {
            TokenKind::Void
                if self.peek_is_one_of(&[TokenKind::Comma, TokenKind::Semicolon]) =>
            {
                self.advance();
                Ok(Initializer::Void)
            }
            TokenKind::LBracket => Ok(Initializer::Array(self.parse_array_initializer()?)),
            TokenKind::LBrace => {
                // `{` could also open a function literal; commit to the
                // struct initializer only when it parses cleanly up to a
                // declarator boundary.
                let bookmark = self.set_bookmark();
                match self.parse_struct_initializer() {
                    Ok(struct_init)
                        if self.current_is_one_of(&[
                            TokenKind::Comma,
                            TokenKind::Semicolon,
                        ]) =>
                    {
                        self.abandon_bookmark(bookmark);
                        Ok(Initializer::Struct(struct_init))
                    }
                    _ => {
                        self.go_to_bookmark(bookmark);
                        Ok(Initializer::Expression(self.parse_assign_expression()?))
                    }
                }
            }
            _ => Ok(Initializer::Expression(self.parse_assign_expression()?)),
        }
    }

    fn parse_array_initializer(&mut self) -> Result<ArrayInitializer> {
        let span = self.current_span();
        self.expect(TokenKind::LBracket)?;
        let members = self.parse_comma_list(TokenKind::RBracket, Self::parse_array_member_initializer)?;
        self.expect(TokenKind::RBracket)?;
        Ok(ArrayInitializer { members, span, id: self.next_id() })
    }

    fn parse_array_member_initializer(&mut self) -> Result<ArrayMemberInitializer> {
        let span = self.current_span();
        let bookmark = self.set_bookmark();
        let key = match self.parse_assign_expression() {
            Ok(key) if self.current_is(TokenKind::Colon) => {
                self.abandon_bookmark(bookmark);
                self.advance();
                Some(key)
            }
            _ => {
                self.go_to_bookmark(bookmark);
                None
            }
        };
        let value = Box::new(self.parse_initializer()?);
        Ok(ArrayMemberInitializer { key, value, span, id: self.next_id() })
    }

    fn parse_struct_initializer(&mut self) -> Result<StructInitializer> {
        let span = self.current_span();
        self.expect(TokenKind::LBrace)?;
        let members = self.parse_comma_list(TokenKind::RBrace, |p| {
            let member_span = p.current_span();
            let name = if p.current_is(TokenKind::Identifier) && p.peek_is(TokenKind::Colon) {
                let name = p.expect_identifier()?;
                p.advance();
                Some(name)
            } else {
                None
            };
            let value = Box::new(p.parse_initializer()?);
            Ok(StructMemberInitializer { name, value, span: member_span, id: p.next_id() })
        })?;
        self.expect(TokenKind::RBrace)?;
        Ok(StructInitializer { members, span, id: self.next_id() })
    }
}
