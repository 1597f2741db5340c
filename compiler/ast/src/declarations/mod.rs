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

pub mod aggregate;
pub use aggregate::*;

pub mod alias;
pub use alias::*;

pub mod attributes;
pub use attributes::*;

pub mod conditional;
pub use conditional::*;

pub mod constructor;
pub use constructor::*;

pub mod enum_;
pub use enum_::*;

pub mod function;
pub use function::*;

pub mod import;
pub use import::*;

pub mod misc;
pub use misc::*;

pub mod mixin;
pub use mixin::*;

pub mod template;
pub use template::*;

pub mod variable;
pub use variable::*;

use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A declaration with its attribute prefix and attached documentation.
///
/// The doc comment of the token starting the declaration is claimed here
/// exactly once; `supplemental_comment` is the comment of an enclosing
/// conditional-compilation construct copied onto the declarations of its
/// true branch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// The attributes preceding the declaration proper.
    pub attributes: Vec<Attribute>,
    /// The doc comment attached to the declaration's first token.
    pub comment: Option<String>,
    /// A parent conditional construct's comment, copied in.
    pub supplemental_comment: Option<String>,
    /// The declaration itself.
    pub kind: DeclarationKind,
    /// The span of the declaration's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: crate::NodeID,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for attribute in &self.attributes {
            write!(f, "{} ", attribute)?;
        }
        self.kind.fmt(f)
    }
}

crate::simple_node_impl!(Declaration);

/// The kinds of declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    /// An `alias` declaration in either style.
    Alias(AliasDeclaration),
    /// An `alias identifier this;` declaration.
    AliasThis(AliasThisDeclaration),
    /// An anonymous `enum { ... }`.
    AnonymousEnum(AnonymousEnumDeclaration),
    /// An attribute run terminated by `:`.
    Attribute(AttributeDeclaration),
    /// A `class` declaration.
    Class(ClassDeclaration),
    /// A conditional-compilation construct over declarations.
    Conditional(ConditionalDeclaration),
    /// A constructor.
    Constructor(Constructor),
    /// A `debug = x;` specification.
    DebugSpecification(DebugSpecification),
    /// A destructor.
    Destructor(Destructor),
    /// A bare `;`.
    Empty(EmptyDeclaration),
    /// A named `enum` declaration.
    Enum(EnumDeclaration),
    /// An eponymous template, `enum name(T) = expression;`.
    EponymousTemplate(EponymousTemplateDeclaration),
    /// A function declaration.
    Function(FunctionDeclaration),
    /// An attribute run applied to a braced group of declarations.
    Group(DeclarationGroup),
    /// An `import` declaration.
    Import(ImportDeclaration),
    /// An `interface` declaration.
    Interface(InterfaceDeclaration),
    /// An `invariant` declaration.
    Invariant(InvariantDeclaration),
    /// A `mixin(...)` or template mixin declaration.
    Mixin(MixinDeclaration),
    /// A `mixin template` definition.
    MixinTemplate(MixinTemplateDeclaration),
    /// A postblit, `this(this)`.
    Postblit(Postblit),
    /// A `pragma(...)` declaration.
    Pragma(PragmaDeclaration),
    /// A `shared static this()`.
    SharedStaticConstructor(SharedStaticConstructor),
    /// A `shared static ~this()`.
    SharedStaticDestructor(SharedStaticDestructor),
    /// A `static assert(...)` declaration.
    StaticAssert(StaticAssertDeclaration),
    /// A `static this()`.
    StaticConstructor(StaticConstructor),
    /// A `static ~this()`.
    StaticDestructor(StaticDestructor),
    /// A `static foreach` over declarations.
    StaticForeach(StaticForeachDeclaration),
    /// A `struct` declaration.
    Struct(StructDeclaration),
    /// A `template` declaration.
    Template(TemplateDeclaration),
    /// A `union` declaration.
    Union(UnionDeclaration),
    /// A `unittest` block.
    Unittest(UnittestDeclaration),
    /// A variable declaration.
    Variable(VariableDeclaration),
    /// A `version = x;` specification.
    VersionSpecification(VersionSpecification),
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DeclarationKind::*;
        match self {
            Alias(x) => x.fmt(f),
            AliasThis(x) => x.fmt(f),
            AnonymousEnum(x) => x.fmt(f),
            Attribute(x) => x.fmt(f),
            Class(x) => x.fmt(f),
            Conditional(x) => x.fmt(f),
            Constructor(x) => x.fmt(f),
            DebugSpecification(x) => x.fmt(f),
            Destructor(x) => x.fmt(f),
            Empty(x) => x.fmt(f),
            Enum(x) => x.fmt(f),
            EponymousTemplate(x) => x.fmt(f),
            Function(x) => x.fmt(f),
            Group(x) => x.fmt(f),
            Import(x) => x.fmt(f),
            Interface(x) => x.fmt(f),
            Invariant(x) => x.fmt(f),
            Mixin(x) => x.fmt(f),
            MixinTemplate(x) => x.fmt(f),
            Postblit(x) => x.fmt(f),
            Pragma(x) => x.fmt(f),
            SharedStaticConstructor(x) => x.fmt(f),
            SharedStaticDestructor(x) => x.fmt(f),
            StaticAssert(x) => x.fmt(f),
            StaticConstructor(x) => x.fmt(f),
            StaticDestructor(x) => x.fmt(f),
            StaticForeach(x) => x.fmt(f),
            Struct(x) => x.fmt(f),
            Template(x) => x.fmt(f),
            Union(x) => x.fmt(f),
            Unittest(x) => x.fmt(f),
            Variable(x) => x.fmt(f),
            VersionSpecification(x) => x.fmt(f),
        }
    }
}

/// An attribute run terminated by `:`; the attributes live on the
/// enclosing [`Declaration`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDeclaration {
    /// The span of the `:`.
    pub span: Span,
    /// The ID of the node.
    pub id: crate::NodeID,
}

impl fmt::Display for AttributeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ":")
    }
}

crate::simple_node_impl!(AttributeDeclaration);

/// An attribute run applied to `{ declarations }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationGroup {
    pub declarations: Vec<Declaration>,
    /// The span of the opening brace.
    pub span: Span,
    /// The ID of the node.
    pub id: crate::NodeID,
}

impl fmt::Display for DeclarationGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ {} }}", self.declarations.iter().format(" "))
    }
}

crate::simple_node_impl!(DeclarationGroup);

/// A bare `;` at declaration level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyDeclaration {
    /// The span of the `;`.
    pub span: Span,
    /// The ID of the node.
    pub id: crate::NodeID,
}

impl fmt::Display for EmptyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ";")
    }
}

crate::simple_node_impl!(EmptyDeclaration);
