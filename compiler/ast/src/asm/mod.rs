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

//! Nodes for `asm { ... }` blocks. Inline assembly has its own small
//! expression grammar, separate from the host language's.

use crate::{Identifier, IdentifierChain, LiteralExpression, MemberFunctionAttribute, Node, NodeID};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `asm attrs? { instructions }` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmStatement {
    /// Function attributes between `asm` and `{`.
    pub attributes: Vec<MemberFunctionAttribute>,
    pub instructions: Vec<AsmInstruction>,
    /// The span of the `asm`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AsmStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "asm")?;
        for attribute in &self.attributes {
            write!(f, " {}", attribute)?;
        }
        write!(f, " {{ {} }}", self.instructions.iter().format(" "))
    }
}

crate::simple_node_impl!(AsmStatement);

/// One `;`-terminated asm instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmInstruction {
    pub kind: AsmInstructionKind,
    /// The span of the instruction's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AsmInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{};", self.kind)
    }
}

crate::simple_node_impl!(AsmInstruction);

/// The instruction forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsmInstructionKind {
    /// `label: instruction?`
    Label { name: Identifier, instruction: Option<Box<AsmInstruction>> },
    /// `align n`
    Align(AsmExp),
    /// `opcode operands?`
    Opcode { name: Identifier, operands: Vec<AsmExp> },
    /// An empty instruction (a stray `;`).
    Empty,
}

impl fmt::Display for AsmInstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Label { name, instruction: Some(instruction) } => {
                write!(f, "{}: {}", name, instruction)
            }
            Self::Label { name, instruction: None } => write!(f, "{}:", name),
            Self::Align(alignment) => write!(f, "align {}", alignment),
            Self::Opcode { name, operands } if operands.is_empty() => write!(f, "{}", name),
            Self::Opcode { name, operands } => {
                write!(f, "{} {}", name, operands.iter().format(", "))
            }
            Self::Empty => Ok(()),
        }
    }
}

/// An expression inside an asm instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsmExp {
    /// `condition ? if_true : if_false`
    Ternary(Box<AsmTernaryExp>),
    /// A binary operator application.
    Binary(Box<AsmBinaryExp>),
    /// A prefix operator application.
    Unary(Box<AsmUnaryExp>),
    /// A type-prefixed operand, `dword ptr [eax]`.
    TypePrefix(Box<AsmTypePrefixExp>),
    /// A bracketed memory operand, `base?[index]`.
    Bracket(Box<AsmBracketExp>),
    /// A machine register, optionally with a segment-override expression.
    Register(AsmRegisterExp),
    /// A numeric or string literal.
    Literal(LiteralExpression),
    /// A D symbol referenced from asm.
    Identifier(IdentifierChain),
    /// `$` — the current location counter.
    Dollar(AsmDollar),
}

impl fmt::Display for AsmExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ternary(x) => x.fmt(f),
            Self::Binary(x) => x.fmt(f),
            Self::Unary(x) => x.fmt(f),
            Self::TypePrefix(x) => x.fmt(f),
            Self::Bracket(x) => x.fmt(f),
            Self::Register(x) => x.fmt(f),
            Self::Literal(x) => x.fmt(f),
            Self::Identifier(x) => x.fmt(f),
            Self::Dollar(x) => x.fmt(f),
        }
    }
}

impl Node for AsmExp {
    fn span(&self) -> Span {
        match self {
            Self::Ternary(n) => n.span(),
            Self::Binary(n) => n.span(),
            Self::Unary(n) => n.span(),
            Self::TypePrefix(n) => n.span(),
            Self::Bracket(n) => n.span(),
            Self::Register(n) => n.span(),
            Self::Literal(n) => n.span(),
            Self::Identifier(n) => n.span(),
            Self::Dollar(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Self::Ternary(n) => n.set_span(span),
            Self::Binary(n) => n.set_span(span),
            Self::Unary(n) => n.set_span(span),
            Self::TypePrefix(n) => n.set_span(span),
            Self::Bracket(n) => n.set_span(span),
            Self::Register(n) => n.set_span(span),
            Self::Literal(n) => n.set_span(span),
            Self::Identifier(n) => n.set_span(span),
            Self::Dollar(n) => n.set_span(span),
        }
    }

    fn id(&self) -> NodeID {
        match self {
            Self::Ternary(n) => n.id(),
            Self::Binary(n) => n.id(),
            Self::Unary(n) => n.id(),
            Self::TypePrefix(n) => n.id(),
            Self::Bracket(n) => n.id(),
            Self::Register(n) => n.id(),
            Self::Literal(n) => n.id(),
            Self::Identifier(n) => n.id(),
            Self::Dollar(n) => n.id(),
        }
    }

    fn set_id(&mut self, id: NodeID) {
        match self {
            Self::Ternary(n) => n.set_id(id),
            Self::Binary(n) => n.set_id(id),
            Self::Unary(n) => n.set_id(id),
            Self::TypePrefix(n) => n.set_id(id),
            Self::Bracket(n) => n.set_id(id),
            Self::Register(n) => n.set_id(id),
            Self::Literal(n) => n.set_id(id),
            Self::Identifier(n) => n.set_id(id),
            Self::Dollar(n) => n.set_id(id),
        }
    }
}

/// A ternary asm expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmTernaryExp {
    pub condition: AsmExp,
    pub if_true: AsmExp,
    pub if_false: AsmExp,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmTernaryExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ? {} : {}", self.condition, self.if_true, self.if_false)
    }
}

crate::simple_node_impl!(AsmTernaryExp);

/// A binary asm expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmBinaryExp {
    pub left: AsmExp,
    pub right: AsmExp,
    pub op: AsmBinaryOp,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmBinaryExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

crate::simple_node_impl!(AsmBinaryExp);

/// The binary operators of the asm expression grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsmBinaryOp {
    LogOr,
    LogAnd,
    Or,
    Xor,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl AsmBinaryOp {
    pub fn as_str(self) -> &'static str {
        use AsmBinaryOp::*;
        match self {
            LogOr => "||",
            LogAnd => "&&",
            Or => "|",
            Xor => "^",
            And => "&",
            Eq => "==",
            NotEq => "!=",
            Lt => "<",
            LtEq => "<=",
            Gt => ">",
            GtEq => ">=",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
        }
    }
}

impl fmt::Display for AsmBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A prefix asm expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmUnaryExp {
    pub operand: AsmExp,
    pub op: AsmUnaryOp,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmUnaryExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op {
            AsmUnaryOp::Offsetof => write!(f, "offsetof {}", self.operand),
            AsmUnaryOp::Seg => write!(f, "seg {}", self.operand),
            _ => write!(f, "{}{}", self.op, self.operand),
        }
    }
}

crate::simple_node_impl!(AsmUnaryExp);

/// The prefix operators of the asm expression grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsmUnaryOp {
    Plus,
    Minus,
    Not,
    Complement,
    Offsetof,
    Seg,
}

impl fmt::Display for AsmUnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Not => write!(f, "!"),
            Self::Complement => write!(f, "~"),
            Self::Offsetof => write!(f, "offsetof"),
            Self::Seg => write!(f, "seg"),
        }
    }
}

/// A type-size prefix, e.g. `dword ptr`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmTypePrefixExp {
    pub prefix: AsmTypePrefix,
    /// `true` when followed by `ptr`.
    pub has_ptr: bool,
    pub operand: AsmExp,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmTypePrefixExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        if self.has_ptr {
            write!(f, " ptr")?;
        }
        write!(f, " {}", self.operand)
    }
}

crate::simple_node_impl!(AsmTypePrefixExp);

/// The recognized operand-size prefixes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsmTypePrefix {
    Near,
    Far,
    Word,
    Dword,
    Qword,
    Byte,
    Short,
    Int,
    Float,
    Double,
    Real,
}

impl AsmTypePrefix {
    pub fn as_str(self) -> &'static str {
        use AsmTypePrefix::*;
        match self {
            Near => "near",
            Far => "far",
            Word => "word",
            Dword => "dword",
            Qword => "qword",
            Byte => "byte",
            Short => "short",
            Int => "int",
            Float => "float",
            Double => "double",
            Real => "real",
        }
    }
}

impl fmt::Display for AsmTypePrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bracketed memory operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmBracketExp {
    /// The expression preceding the bracket, absent for a bare `[index]`.
    pub base: Option<AsmExp>,
    pub index: AsmExp,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmBracketExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(base) = &self.base {
            write!(f, "{}", base)?;
        }
        write!(f, "[{}]", self.index)
    }
}

crate::simple_node_impl!(AsmBracketExp);

/// A machine register operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmRegisterExp {
    /// The register name as written.
    pub name: Identifier,
    /// A segment-override expression after `:`.
    pub segment: Option<Box<AsmExp>>,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmRegisterExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(segment) = &self.segment {
            write!(f, ":{}", segment)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(AsmRegisterExp);

/// `$` inside an asm expression.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmDollar {
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for AsmDollar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "$")
    }
}

crate::simple_node_impl!(AsmDollar);
