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

pub mod access;
pub use access::*;

pub mod array_literal;
pub use array_literal::*;

pub mod assign;
pub use assign::*;

pub mod binary;
pub use binary::*;

pub mod function_literal;
pub use function_literal::*;

pub mod is_expression;
pub use is_expression::*;

pub mod literal;
pub use literal::*;

pub mod new_cast;
pub use new_cast::*;

pub mod special;
pub use special::*;

pub mod template_instance;
pub use template_instance::*;

pub mod ternary;
pub use ternary::*;

pub mod unary;
pub use unary::*;

use crate::Node;
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An expression in a parsed module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// An array literal, `[1, 2, 3]`.
    ArrayLiteral(ArrayLiteralExpression),
    /// An `assert(condition, message?)` expression.
    Assert(Box<AssertExpression>),
    /// An assignment, `place op= value`.
    Assign(Box<AssignExpression>),
    /// An associative array literal, `[1: "a", 2: "b"]`.
    AssocArrayLiteral(AssocArrayLiteralExpression),
    /// A binary operator expression.
    Binary(Box<BinaryExpression>),
    /// A call, `callee(args)`.
    Call(Box<CallExpression>),
    /// A `cast(...)` expression.
    Cast(Box<CastExpression>),
    /// A `delete` expression.
    Delete(Box<DeleteExpression>),
    /// A placeholder kept in the tree after recovery.
    Err(ErrExpression),
    /// A function or delegate literal, or a lambda.
    FunctionLiteral(Box<FunctionLiteralExpression>),
    /// A plain identifier.
    Identifier(crate::Identifier),
    /// An `import(expr)` expression.
    Import(Box<ImportExpression>),
    /// An index expression, `base[args]`.
    Index(Box<IndexExpression>),
    /// An `is(...)` expression.
    Is(Box<IsExpression>),
    /// A literal token.
    Literal(LiteralExpression),
    /// A member access, `base.member` or a leading `.member`.
    Member(Box<MemberAccess>),
    /// A `mixin(args)` expression.
    Mixin(MixinExpression),
    /// A `new` expression.
    New(Box<NewExpression>),
    /// A postfix `++` or `--`.
    Postfix(Box<PostfixExpression>),
    /// A slice, `base[]` or `base[low .. high]`.
    Slice(Box<SliceExpression>),
    /// `$`, `this`, `super`, or one of the `__FILE__`-family keywords.
    Special(SpecialKeywordExpression),
    /// A template instantiation used as a value, `map!f`.
    TemplateInstance(TemplateInstanceExpression),
    /// A ternary conditional, `c ? a : b`.
    Ternary(Box<TernaryExpression>),
    /// A `__traits(...)` expression.
    Traits(TraitsExpression),
    /// A type in expression position, e.g. the `(Type)` of `(Type).max`.
    Type(Box<TypeExpression>),
    /// A `typeid(...)` expression.
    Typeid(Box<TypeidExpression>),
    /// A `typeof(...)` expression.
    Typeof(Box<TypeofExpression>),
    /// A prefix unary operator expression.
    Unary(Box<UnaryExpression>),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Expression::*;
        match self {
            ArrayLiteral(x) => x.fmt(f),
            Assert(x) => x.fmt(f),
            Assign(x) => x.fmt(f),
            AssocArrayLiteral(x) => x.fmt(f),
            Binary(x) => x.fmt(f),
            Call(x) => x.fmt(f),
            Cast(x) => x.fmt(f),
            Delete(x) => x.fmt(f),
            Err(x) => x.fmt(f),
            FunctionLiteral(x) => x.fmt(f),
            Identifier(x) => x.fmt(f),
            Import(x) => x.fmt(f),
            Index(x) => x.fmt(f),
            Is(x) => x.fmt(f),
            Literal(x) => x.fmt(f),
            Member(x) => x.fmt(f),
            Mixin(x) => x.fmt(f),
            New(x) => x.fmt(f),
            Postfix(x) => x.fmt(f),
            Slice(x) => x.fmt(f),
            Special(x) => x.fmt(f),
            TemplateInstance(x) => x.fmt(f),
            Ternary(x) => x.fmt(f),
            Traits(x) => x.fmt(f),
            Type(x) => x.fmt(f),
            Typeid(x) => x.fmt(f),
            Typeof(x) => x.fmt(f),
            Unary(x) => x.fmt(f),
        }
    }
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            ArrayLiteral(n) => n.span(),
            Assert(n) => n.span(),
            Assign(n) => n.span(),
            AssocArrayLiteral(n) => n.span(),
            Binary(n) => n.span(),
            Call(n) => n.span(),
            Cast(n) => n.span(),
            Delete(n) => n.span(),
            Err(n) => n.span(),
            FunctionLiteral(n) => n.span(),
            Identifier(n) => n.span(),
            Import(n) => n.span(),
            Index(n) => n.span(),
            Is(n) => n.span(),
            Literal(n) => n.span(),
            Member(n) => n.span(),
            Mixin(n) => n.span(),
            New(n) => n.span(),
            Postfix(n) => n.span(),
            Slice(n) => n.span(),
            Special(n) => n.span(),
            TemplateInstance(n) => n.span(),
            Ternary(n) => n.span(),
            Traits(n) => n.span(),
            Type(n) => n.span(),
            Typeid(n) => n.span(),
            Typeof(n) => n.span(),
            Unary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            ArrayLiteral(n) => n.set_span(span),
            Assert(n) => n.set_span(span),
            Assign(n) => n.set_span(span),
            AssocArrayLiteral(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            Call(n) => n.set_span(span),
            Cast(n) => n.set_span(span),
            Delete(n) => n.set_span(span),
            Err(n) => n.set_span(span),
            FunctionLiteral(n) => n.set_span(span),
            Identifier(n) => n.set_span(span),
            Import(n) => n.set_span(span),
            Index(n) => n.set_span(span),
            Is(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Member(n) => n.set_span(span),
            Mixin(n) => n.set_span(span),
            New(n) => n.set_span(span),
            Postfix(n) => n.set_span(span),
            Slice(n) => n.set_span(span),
            Special(n) => n.set_span(span),
            TemplateInstance(n) => n.set_span(span),
            Ternary(n) => n.set_span(span),
            Traits(n) => n.set_span(span),
            Type(n) => n.set_span(span),
            Typeid(n) => n.set_span(span),
            Typeof(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
        }
    }

    fn id(&self) -> crate::NodeID {
        use Expression::*;
        match self {
            ArrayLiteral(n) => n.id(),
            Assert(n) => n.id(),
            Assign(n) => n.id(),
            AssocArrayLiteral(n) => n.id(),
            Binary(n) => n.id(),
            Call(n) => n.id(),
            Cast(n) => n.id(),
            Delete(n) => n.id(),
            Err(n) => n.id(),
            FunctionLiteral(n) => n.id(),
            Identifier(n) => n.id(),
            Import(n) => n.id(),
            Index(n) => n.id(),
            Is(n) => n.id(),
            Literal(n) => n.id(),
            Member(n) => n.id(),
            Mixin(n) => n.id(),
            New(n) => n.id(),
            Postfix(n) => n.id(),
            Slice(n) => n.id(),
            Special(n) => n.id(),
            TemplateInstance(n) => n.id(),
            Ternary(n) => n.id(),
            Traits(n) => n.id(),
            Type(n) => n.id(),
            Typeid(n) => n.id(),
            Typeof(n) => n.id(),
            Unary(n) => n.id(),
        }
    }

    fn set_id(&mut self, id: crate::NodeID) {
        use Expression::*;
        match self {
            ArrayLiteral(n) => n.set_id(id),
            Assert(n) => n.set_id(id),
            Assign(n) => n.set_id(id),
            AssocArrayLiteral(n) => n.set_id(id),
            Binary(n) => n.set_id(id),
            Call(n) => n.set_id(id),
            Cast(n) => n.set_id(id),
            Delete(n) => n.set_id(id),
            Err(n) => n.set_id(id),
            FunctionLiteral(n) => n.set_id(id),
            Identifier(n) => n.set_id(id),
            Import(n) => n.set_id(id),
            Index(n) => n.set_id(id),
            Is(n) => n.set_id(id),
            Literal(n) => n.set_id(id),
            Member(n) => n.set_id(id),
            Mixin(n) => n.set_id(id),
            New(n) => n.set_id(id),
            Postfix(n) => n.set_id(id),
            Slice(n) => n.set_id(id),
            Special(n) => n.set_id(id),
            TemplateInstance(n) => n.set_id(id),
            Ternary(n) => n.set_id(id),
            Traits(n) => n.set_id(id),
            Type(n) => n.set_id(id),
            Typeid(n) => n.set_id(id),
            Typeof(n) => n.set_id(id),
            Unary(n) => n.set_id(id),
        }
    }
}

/// A placeholder node kept in the tree where an expression failed to parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrExpression {
    pub span: Span,
    pub id: crate::NodeID,
}

impl fmt::Display for ErrExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<error>")
    }
}

crate::simple_node_impl!(ErrExpression);
