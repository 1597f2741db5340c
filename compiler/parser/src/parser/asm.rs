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

//! The inline-assembly sub-parser. Asm blocks have their own operator
//! precedence cascade and addressing-mode grammar, separate from the host
//! expression parser.

use super::ParserContext;
use crate::tokens::TokenKind;

use dryad_ast::*;
use dryad_errors::{ParserError, Result};

use lazy_static::lazy_static;

lazy_static! {
    /// The x86 register names, sorted for binary search.
    static ref REGISTER_NAMES: Vec<&'static str> = {
        let mut names = vec![
            "AH", "AL", "AX", "BH", "BL", "BP", "BPL", "BX", "CH", "CL", "CR0", "CR2", "CR3",
            "CR4", "CS", "CX", "DH", "DI", "DIL", "DL", "DR0", "DR1", "DR2", "DR3", "DR6", "DR7",
            "DS", "DX", "EAX", "EBP", "EBX", "ECX", "EDI", "EDX", "ES", "ESI", "ESP", "FS", "GS",
            "MM0", "MM1", "MM2", "MM3", "MM4", "MM5", "MM6", "MM7", "R10", "R10B", "R10D", "R10W",
            "R11", "R11B", "R11D", "R11W", "R12", "R12B", "R12D", "R12W", "R13", "R13B", "R13D",
            "R13W", "R14", "R14B", "R14D", "R14W", "R15", "R15B", "R15D", "R15W", "R8", "R8B",
            "R8D", "R8W", "R9", "R9B", "R9D", "R9W", "RAX", "RBP", "RBX", "RCX", "RDI", "RDX",
            "RSI", "RSP", "SI", "SIL", "SP", "SPL", "SS", "ST", "TR3", "TR4", "TR5", "TR6", "TR7",
            "XMM0", "XMM1", "XMM10", "XMM11", "XMM12", "XMM13", "XMM14", "XMM15", "XMM2", "XMM3",
            "XMM4", "XMM5", "XMM6", "XMM7", "XMM8", "XMM9", "YMM0", "YMM1", "YMM10", "YMM11",
            "YMM12", "YMM13", "YMM14", "YMM15", "YMM2", "YMM3", "YMM4", "YMM5", "YMM6", "YMM7",
            "YMM8", "YMM9",
        ];
        names.sort_unstable();
        names
    };
}

/// Looks up `name` in the sorted register table.
fn is_register(name: &str) -> bool {
    REGISTER_NAMES.binary_search_by(|probe| (*probe).cmp(name)).is_ok()
}

impl ParserContext<'_, '_> {
    /// Returns a [`Statement`] for `asm attrs? { instructions }`.
    pub(crate) fn parse_asm_statement(&mut self) -> Result<Statement> {
        let span = self.current_span();
        self.expect(TokenKind::Asm)?;
        let attributes = self.parse_member_function_attributes()?;
        self.expect(TokenKind::LBrace)?;
        let mut instructions = Vec::new();
        while !self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
            let before = self.cursor();
            match self.parse_asm_instruction() {
                Ok(instruction) => instructions.push(instruction),
                Err(_) => {
                    if self.cursor() == before {
                        self.advance();
                    }
                    while !self.current_is_one_of(&[
                        TokenKind::Semicolon,
                        TokenKind::RBrace,
                        TokenKind::Eof,
                    ]) {
                        self.advance();
                    }
                    self.eat(TokenKind::Semicolon);
                }
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Statement::Asm(AsmStatement { attributes, instructions, span, id: self.next_id() }))
    }

    /// One `;`-terminated instruction: a label, `align`, or an opcode with
    /// operands.
    fn parse_asm_instruction(&mut self) -> Result<AsmInstruction> {
        let span = self.current_span();
        if self.eat(TokenKind::Semicolon) {
            return Ok(AsmInstruction { kind: AsmInstructionKind::Empty, span, id: self.next_id() });
        }
        if self.current_is(TokenKind::Align) {
            self.advance();
            let alignment = self.parse_asm_exp()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(AsmInstruction {
                kind: AsmInstructionKind::Align(alignment),
                span,
                id: self.next_id(),
            });
        }

        let name = self.parse_opcode_name()?;

        if self.eat(TokenKind::Colon) {
            let instruction = if self.current_is_one_of(&[TokenKind::RBrace, TokenKind::Eof]) {
                None
            } else {
                Some(Box::new(self.parse_asm_instruction()?))
            };
            return Ok(AsmInstruction {
                kind: AsmInstructionKind::Label { name, instruction },
                span,
                id: self.next_id(),
            });
        }

        let mut operands = Vec::new();
        if !self.current_is(TokenKind::Semicolon) {
            operands.push(self.parse_asm_exp()?);
            while self.eat(TokenKind::Comma) {
                operands.push(self.parse_asm_exp()?);
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(AsmInstruction {
            kind: AsmInstructionKind::Opcode { name, operands },
            span,
            id: self.next_id(),
        })
    }

    /// Opcode names are identifiers, plus the D keywords that double as
    /// x86 mnemonics (`in`, `out`, `int`).
    fn parse_opcode_name(&mut self) -> Result<Identifier> {
        match self.current_kind() {
            TokenKind::Identifier => self.expect_identifier(),
            TokenKind::In | TokenKind::Out | TokenKind::Int => {
                let span = self.current_span();
                let name = self.current_kind().as_str().to_string();
                self.advance();
                Ok(Identifier::new(name, span, self.next_id()))
            }
            _ => self.fail(ParserError::invalid_asm_operand(self.current(), self.current_span())),
        }
    }

    /// The top of the asm cascade: `log-or (? asm-exp : asm-exp)?`.
    pub(crate) fn parse_asm_exp(&mut self) -> Result<AsmExp> {
        let span = self.current_span();
        let condition = self.parse_asm_log_or_exp()?;
        if self.eat(TokenKind::Question) {
            let if_true = self.parse_asm_exp()?;
            self.expect(TokenKind::Colon)?;
            let if_false = self.parse_asm_exp()?;
            return Ok(AsmExp::Ternary(Box::new(AsmTernaryExp {
                condition,
                if_true,
                if_false,
                span,
                id: self.next_id(),
            })));
        }
        Ok(condition)
    }

    fn asm_bin(
        &self,
        left: AsmExp,
        right: AsmExp,
        op: AsmBinaryOp,
        span: dryad_span::Span,
    ) -> AsmExp {
        AsmExp::Binary(Box::new(AsmBinaryExp { left, right, op, span, id: self.next_id() }))
    }

    fn parse_asm_left_assoc(
        &mut self,
        table: &[(TokenKind, AsmBinaryOp)],
        mut f: impl FnMut(&mut Self) -> Result<AsmExp>,
    ) -> Result<AsmExp> {
        let span = self.current_span();
        let mut expr = f(self)?;
        'outer: loop {
            for (kind, op) in table {
                if self.current_is(*kind) {
                    self.advance();
                    let right = f(self)?;
                    expr = self.asm_bin(expr, right, *op, span);
                    continue 'outer;
                }
            }
            break;
        }
        Ok(expr)
    }

    fn parse_asm_log_or_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[(TokenKind::PipePipe, AsmBinaryOp::LogOr)],
            Self::parse_asm_log_and_exp,
        )
    }

    fn parse_asm_log_and_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[(TokenKind::AmpAmp, AsmBinaryOp::LogAnd)],
            Self::parse_asm_or_exp,
        )
    }

    fn parse_asm_or_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(&[(TokenKind::Pipe, AsmBinaryOp::Or)], Self::parse_asm_xor_exp)
    }

    fn parse_asm_xor_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(&[(TokenKind::Caret, AsmBinaryOp::Xor)], Self::parse_asm_and_exp)
    }

    fn parse_asm_and_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(&[(TokenKind::Amp, AsmBinaryOp::And)], Self::parse_asm_eq_exp)
    }

    fn parse_asm_eq_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[(TokenKind::EqEq, AsmBinaryOp::Eq), (TokenKind::NotEq, AsmBinaryOp::NotEq)],
            Self::parse_asm_rel_exp,
        )
    }

    fn parse_asm_rel_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[
                (TokenKind::Lt, AsmBinaryOp::Lt),
                (TokenKind::LtEq, AsmBinaryOp::LtEq),
                (TokenKind::Gt, AsmBinaryOp::Gt),
                (TokenKind::GtEq, AsmBinaryOp::GtEq),
            ],
            Self::parse_asm_shift_exp,
        )
    }

    fn parse_asm_shift_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[
                (TokenKind::Shl, AsmBinaryOp::Shl),
                (TokenKind::Shr, AsmBinaryOp::Shr),
                (TokenKind::UShr, AsmBinaryOp::UShr),
            ],
            Self::parse_asm_add_exp,
        )
    }

    fn parse_asm_add_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[(TokenKind::Plus, AsmBinaryOp::Add), (TokenKind::Minus, AsmBinaryOp::Sub)],
            Self::parse_asm_mul_exp,
        )
    }

    fn parse_asm_mul_exp(&mut self) -> Result<AsmExp> {
        self.parse_asm_left_assoc(
            &[
                (TokenKind::Star, AsmBinaryOp::Mul),
                (TokenKind::Slash, AsmBinaryOp::Div),
                (TokenKind::Percent, AsmBinaryOp::Rem),
            ],
            Self::parse_asm_br_exp,
        )
    }

    /// Bracketed indexing: `base[index]` chains, or a bare `[index]`
    /// memory operand.
    fn parse_asm_br_exp(&mut self) -> Result<AsmExp> {
        let span = self.current_span();
        if self.current_is(TokenKind::LBracket) {
            self.advance();
            let index = self.parse_asm_exp()?;
            self.expect(TokenKind::RBracket)?;
            let mut expr = AsmExp::Bracket(Box::new(AsmBracketExp {
                base: None,
                index,
                span,
                id: self.next_id(),
            }));
            while self.current_is(TokenKind::LBracket) {
                self.advance();
                let index = self.parse_asm_exp()?;
                self.expect(TokenKind::RBracket)?;
                expr = AsmExp::Bracket(Box::new(AsmBracketExp {
                    base: Some(expr),
                    index,
                    span,
                    id: self.next_id(),
                }));
            }
            return Ok(expr);
        }
        let mut expr = self.parse_asm_una_exp()?;
        while self.current_is(TokenKind::LBracket) {
            self.advance();
            let index = self.parse_asm_exp()?;
            self.expect(TokenKind::RBracket)?;
            expr = AsmExp::Bracket(Box::new(AsmBracketExp {
                base: Some(expr),
                index,
                span,
                id: self.next_id(),
            }));
        }
        Ok(expr)
    }

    /// Prefixes: operand-size type prefixes (`dword ptr`), `offsetof`/
    /// `seg`, and the arithmetic prefix operators.
    fn parse_asm_una_exp(&mut self) -> Result<AsmExp> {
        let span = self.current_span();

        if let Some(prefix) = self.asm_type_prefix() {
            self.advance();
            let has_ptr = self.current_is(TokenKind::Identifier)
                && self.current().text.as_deref() == Some("ptr");
            if has_ptr {
                self.advance();
            }
            let operand = self.parse_asm_exp()?;
            return Ok(AsmExp::TypePrefix(Box::new(AsmTypePrefixExp {
                prefix,
                has_ptr,
                operand,
                span,
                id: self.next_id(),
            })));
        }

        if self.current_is(TokenKind::Identifier) {
            let text = self.current().text.as_deref().unwrap_or_default();
            let op = match text {
                "offsetof" => Some(AsmUnaryOp::Offsetof),
                "seg" => Some(AsmUnaryOp::Seg),
                _ => None,
            };
            if let Some(op) = op {
                self.advance();
                let operand = self.parse_asm_exp()?;
                return Ok(AsmExp::Unary(Box::new(AsmUnaryExp {
                    operand,
                    op,
                    span,
                    id: self.next_id(),
                })));
            }
        }

        let op = match self.current_kind() {
            TokenKind::Plus => Some(AsmUnaryOp::Plus),
            TokenKind::Minus => Some(AsmUnaryOp::Minus),
            TokenKind::Not => Some(AsmUnaryOp::Not),
            TokenKind::Tilde => Some(AsmUnaryOp::Complement),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_asm_una_exp()?;
            return Ok(AsmExp::Unary(Box::new(AsmUnaryExp { operand, op, span, id: self.next_id() })));
        }

        self.parse_asm_primary_exp()
    }

    /// Type-prefix keywords: `near far word dword qword` are identifiers
    /// recognized by text, the rest are type keywords.
    fn asm_type_prefix(&self) -> Option<AsmTypePrefix> {
        match self.current_kind() {
            TokenKind::Identifier => match self.current().text.as_deref() {
                Some("near") => Some(AsmTypePrefix::Near),
                Some("far") => Some(AsmTypePrefix::Far),
                Some("word") => Some(AsmTypePrefix::Word),
                Some("dword") => Some(AsmTypePrefix::Dword),
                Some("qword") => Some(AsmTypePrefix::Qword),
                _ => None,
            },
            TokenKind::Byte => Some(AsmTypePrefix::Byte),
            TokenKind::Short => Some(AsmTypePrefix::Short),
            TokenKind::Int => Some(AsmTypePrefix::Int),
            TokenKind::Float => Some(AsmTypePrefix::Float),
            TokenKind::Double => Some(AsmTypePrefix::Double),
            TokenKind::Real => Some(AsmTypePrefix::Real),
            _ => None,
        }
    }

    fn parse_asm_primary_exp(&mut self) -> Result<AsmExp> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Dollar => {
                self.advance();
                Ok(AsmExp::Dollar(AsmDollar { span, id: self.next_id() }))
            }
            TokenKind::This => {
                self.advance();
                let identifier = Identifier::new("this", span, self.next_id());
                Ok(AsmExp::Identifier(IdentifierChain {
                    identifiers: vec![identifier],
                    span,
                    id: self.next_id(),
                }))
            }
            TokenKind::IntLiteral
            | TokenKind::UintLiteral
            | TokenKind::LongLiteral
            | TokenKind::UlongLiteral => {
                let text = self.current().text.clone().unwrap_or_default();
                self.advance();
                Ok(AsmExp::Literal(LiteralExpression {
                    value: LiteralValue::Integer(IntegerKind::Int, text),
                    span,
                    id: self.next_id(),
                }))
            }
            TokenKind::FloatLiteral | TokenKind::DoubleLiteral | TokenKind::RealLiteral => {
                let text = self.current().text.clone().unwrap_or_default();
                self.advance();
                Ok(AsmExp::Literal(LiteralExpression {
                    value: LiteralValue::Float(FloatKind::Double, text),
                    span,
                    id: self.next_id(),
                }))
            }
            TokenKind::StringLiteral => {
                let text = self.current().text.clone().unwrap_or_default();
                self.advance();
                Ok(AsmExp::Literal(LiteralExpression {
                    value: LiteralValue::String(StringKind::Utf8, text),
                    span,
                    id: self.next_id(),
                }))
            }
            TokenKind::Identifier => {
                let text = self.current().text.clone().unwrap_or_default();
                if is_register(&text) {
                    let name = self.expect_identifier()?;
                    let segment = if self.eat(TokenKind::Colon) {
                        Some(Box::new(self.parse_asm_exp()?))
                    } else {
                        None
                    };
                    return Ok(AsmExp::Register(AsmRegisterExp {
                        name,
                        segment,
                        span,
                        id: self.next_id(),
                    }));
                }
                let chain = self.parse_identifier_chain()?;
                Ok(AsmExp::Identifier(chain))
            }
            _ => self.fail(ParserError::invalid_asm_operand(self.current(), self.current_span())),
        }
    }
}
