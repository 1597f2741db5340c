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

//! Test support and the parser's scenario tests.
//!
//! Lexing is out of scope for the crate, but the tests need token
//! vectors, so a small lexer covering the syntax the tests use lives
//! here. It is not a full D lexer.

use crate::tokens::{Relex, Token, TokenKind};
use crate::{parse_module, parse_module_with_options, ParserContext, ParserOptions};

use dryad_ast::*;
use dryad_errors::emitter::{BufferEmitter, Handler};

mod lexer {
    use super::*;

    fn keyword_kind(word: &str) -> Option<TokenKind> {
        use TokenKind::*;
        Some(match word {
            "abstract" => Abstract,
            "alias" => Alias,
            "align" => Align,
            "asm" => Asm,
            "assert" => Assert,
            "auto" => Auto,
            "body" => Body,
            "bool" => Bool,
            "break" => Break,
            "byte" => Byte,
            "case" => Case,
            "cast" => Cast,
            "catch" => Catch,
            "cdouble" => Cdouble,
            "cent" => Cent,
            "cfloat" => Cfloat,
            "char" => Char,
            "class" => Class,
            "const" => Const,
            "continue" => Continue,
            "creal" => Creal,
            "dchar" => Dchar,
            "debug" => Debug,
            "default" => Default,
            "delegate" => Delegate,
            "delete" => Delete,
            "deprecated" => Deprecated,
            "do" => Do,
            "double" => Double,
            "else" => Else,
            "enum" => Enum,
            "export" => Export,
            "extern" => Extern,
            "false" => False,
            "final" => Final,
            "finally" => Finally,
            "float" => Float,
            "for" => For,
            "foreach" => Foreach,
            "foreach_reverse" => ForeachReverse,
            "function" => Function,
            "goto" => Goto,
            "idouble" => Idouble,
            "if" => If,
            "ifloat" => Ifloat,
            "immutable" => Immutable,
            "import" => Import,
            "in" => In,
            "inout" => Inout,
            "int" => Int,
            "interface" => Interface,
            "invariant" => Invariant,
            "ireal" => Ireal,
            "is" => Is,
            "lazy" => Lazy,
            "long" => Long,
            "macro" => Macro,
            "mixin" => Mixin,
            "module" => Module,
            "new" => New,
            "nothrow" => Nothrow,
            "null" => Null,
            "out" => Out,
            "override" => Override,
            "package" => Package,
            "pragma" => Pragma,
            "private" => Private,
            "protected" => Protected,
            "public" => Public,
            "pure" => Pure,
            "real" => Real,
            "ref" => Ref,
            "return" => Return,
            "scope" => Scope,
            "shared" => Shared,
            "short" => Short,
            "static" => Static,
            "struct" => Struct,
            "super" => Super,
            "switch" => Switch,
            "synchronized" => Synchronized,
            "template" => Template,
            "this" => This,
            "throw" => Throw,
            "true" => True,
            "try" => Try,
            "typeid" => Typeid,
            "typeof" => Typeof,
            "ubyte" => Ubyte,
            "ucent" => Ucent,
            "uint" => Uint,
            "ulong" => Ulong,
            "union" => Union,
            "unittest" => Unittest,
            "ushort" => Ushort,
            "version" => Version,
            "void" => Void,
            "wchar" => Wchar,
            "while" => While,
            "with" => With,
            "__gshared" => Gshared,
            "__traits" => Traits,
            "__vector" => Vector,
            "__parameters" => Parameters,
            "__DATE__" => SpecialDate,
            "__EOF__" => SpecialEof,
            "__FILE__" => SpecialFile,
            "__FILE_FULL_PATH__" => SpecialFileFullPath,
            "__FUNCTION__" => SpecialFunction,
            "__LINE__" => SpecialLine,
            "__MODULE__" => SpecialModule,
            "__PRETTY_FUNCTION__" => SpecialPrettyFunction,
            "__TIME__" => SpecialTime,
            "__TIMESTAMP__" => SpecialTimestamp,
            "__VENDOR__" => SpecialVendor,
            "__VERSION__" => SpecialVersion,
            _ => return None,
        })
    }

    const OPERATORS: &[(&str, TokenKind)] = &[
        (">>>=", TokenKind::UShrEq),
        ("!<>=", TokenKind::NotLtGtEq),
        ("<<=", TokenKind::ShlEq),
        (">>=", TokenKind::ShrEq),
        (">>>", TokenKind::UShr),
        ("^^=", TokenKind::CaretCaretEq),
        ("...", TokenKind::Ellipsis),
        ("!<=", TokenKind::NotLtEq),
        ("!>=", TokenKind::NotGtEq),
        ("!<>", TokenKind::NotLtGt),
        ("<>=", TokenKind::LtGtEq),
        ("..", TokenKind::DotDot),
        ("+=", TokenKind::PlusEq),
        ("-=", TokenKind::MinusEq),
        ("*=", TokenKind::StarEq),
        ("/=", TokenKind::SlashEq),
        ("%=", TokenKind::PercentEq),
        ("&=", TokenKind::AmpEq),
        ("|=", TokenKind::PipeEq),
        ("^=", TokenKind::CaretEq),
        ("~=", TokenKind::TildeEq),
        ("==", TokenKind::EqEq),
        ("!=", TokenKind::NotEq),
        ("<=", TokenKind::LtEq),
        (">=", TokenKind::GtEq),
        ("<<", TokenKind::Shl),
        (">>", TokenKind::Shr),
        ("&&", TokenKind::AmpAmp),
        ("||", TokenKind::PipePipe),
        ("++", TokenKind::PlusPlus),
        ("--", TokenKind::MinusMinus),
        ("=>", TokenKind::FatArrow),
        ("^^", TokenKind::CaretCaret),
        ("<>", TokenKind::LtGt),
        ("!<", TokenKind::NotLt),
        ("!>", TokenKind::NotGt),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("/", TokenKind::Slash),
        ("!", TokenKind::Not),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
        ("=", TokenKind::Assign),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        ("?", TokenKind::Question),
        (";", TokenKind::Semicolon),
        (":", TokenKind::Colon),
        ("$", TokenKind::Dollar),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("%", TokenKind::Percent),
        ("&", TokenKind::Amp),
        ("|", TokenKind::Pipe),
        ("^", TokenKind::Caret),
        ("~", TokenKind::Tilde),
        ("@", TokenKind::At),
    ];

    /// Lexes `source` into the token shape the parser consumes. Handles
    /// exactly the syntax the tests exercise.
    pub fn lex_from(source: &str, line_offset: usize) -> Vec<Token> {
        let bytes = source.as_bytes();
        let mut tokens = Vec::new();
        let mut i = 0usize;
        let mut line = line_offset.max(1);
        let mut column = 1usize;
        let mut pending_comment: Option<String> = None;

        let mut push = |kind: TokenKind,
                        text: Option<String>,
                        offset: usize,
                        line: usize,
                        column: usize,
                        pending: &mut Option<String>| {
            tokens.push(Token {
                kind,
                text,
                comment: pending.take(),
                trailing_comment: None,
                offset,
                line,
                column,
            });
        };

        if bytes.starts_with(b"#!") {
            let end = source.find('\n').unwrap_or(source.len());
            push(
                TokenKind::ScriptLine,
                Some(source[..end].to_string()),
                0,
                line,
                column,
                &mut pending_comment,
            );
            i = end;
        }

        while i < bytes.len() {
            let c = bytes[i] as char;
            if c == '\n' {
                i += 1;
                line += 1;
                column = 1;
                continue;
            }
            if c.is_whitespace() {
                i += 1;
                column += 1;
                continue;
            }
            // Comments: `///` doc comments attach to the next token.
            if source[i..].starts_with("///") {
                let end = source[i..].find('\n').map(|n| i + n).unwrap_or(bytes.len());
                let text = source[i + 3..end].trim().to_string();
                pending_comment = match pending_comment.take() {
                    Some(mut existing) => {
                        existing.push('\n');
                        existing.push_str(&text);
                        Some(existing)
                    }
                    None => Some(text),
                };
                column += end - i;
                i = end;
                continue;
            }
            if source[i..].starts_with("//") {
                let end = source[i..].find('\n').map(|n| i + n).unwrap_or(bytes.len());
                column += end - i;
                i = end;
                continue;
            }
            // Token strings are kept raw, delimiters included.
            if source[i..].starts_with("q{") {
                let start = i;
                let start_column = column;
                let mut depth = 0usize;
                let mut j = i + 1;
                while j < bytes.len() {
                    match bytes[j] as char {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                j += 1;
                                break;
                            }
                        }
                        _ => {}
                    }
                    j += 1;
                }
                push(
                    TokenKind::StringLiteral,
                    Some(source[start..j].to_string()),
                    start,
                    line,
                    start_column,
                    &mut pending_comment,
                );
                column += j - i;
                i = j;
                continue;
            }
            if c == '"' {
                let start = i;
                let start_column = column;
                let mut j = i + 1;
                while j < bytes.len() && bytes[j] as char != '"' {
                    if bytes[j] as char == '\\' {
                        j += 1;
                    }
                    j += 1;
                }
                let text = source[i + 1..j.min(bytes.len())].to_string();
                j = (j + 1).min(bytes.len());
                push(
                    TokenKind::StringLiteral,
                    Some(text),
                    start,
                    line,
                    start_column,
                    &mut pending_comment,
                );
                column += j - i;
                i = j;
                continue;
            }
            if c == '\'' {
                let start = i;
                let start_column = column;
                let mut j = i + 1;
                while j < bytes.len() && bytes[j] as char != '\'' {
                    if bytes[j] as char == '\\' {
                        j += 1;
                    }
                    j += 1;
                }
                let text = source[i + 1..j.min(bytes.len())].to_string();
                j = (j + 1).min(bytes.len());
                push(
                    TokenKind::CharacterLiteral,
                    Some(text),
                    start,
                    line,
                    start_column,
                    &mut pending_comment,
                );
                column += j - i;
                i = j;
                continue;
            }
            if c.is_ascii_digit() {
                let start = i;
                let start_column = column;
                let mut j = i;
                while j < bytes.len() && (bytes[j] as char).is_ascii_digit() {
                    j += 1;
                }
                let mut is_float = false;
                if j + 1 < bytes.len()
                    && bytes[j] as char == '.'
                    && (bytes[j + 1] as char).is_ascii_digit()
                {
                    is_float = true;
                    j += 1;
                    while j < bytes.len() && (bytes[j] as char).is_ascii_digit() {
                        j += 1;
                    }
                }
                let digits_end = j;
                let kind = if j < bytes.len() && bytes[j] as char == 'f' {
                    j += 1;
                    TokenKind::FloatLiteral
                } else if j < bytes.len() && bytes[j] as char == 'L' {
                    j += 1;
                    if is_float {
                        TokenKind::RealLiteral
                    } else if j < bytes.len() && bytes[j] as char == 'u' {
                        j += 1;
                        TokenKind::UlongLiteral
                    } else {
                        TokenKind::LongLiteral
                    }
                } else if j < bytes.len() && (bytes[j] as char == 'u' || bytes[j] as char == 'U') {
                    j += 1;
                    if j < bytes.len() && bytes[j] as char == 'L' {
                        j += 1;
                        TokenKind::UlongLiteral
                    } else {
                        TokenKind::UintLiteral
                    }
                } else if is_float {
                    TokenKind::DoubleLiteral
                } else {
                    TokenKind::IntLiteral
                };
                push(
                    kind,
                    Some(source[start..digits_end].to_string()),
                    start,
                    line,
                    start_column,
                    &mut pending_comment,
                );
                column += j - i;
                i = j;
                continue;
            }
            if c.is_ascii_alphabetic() || c == '_' {
                let start = i;
                let start_column = column;
                let mut j = i;
                while j < bytes.len()
                    && ((bytes[j] as char).is_ascii_alphanumeric() || bytes[j] as char == '_')
                {
                    j += 1;
                }
                let word = &source[start..j];
                match keyword_kind(word) {
                    Some(kind) => {
                        push(kind, None, start, line, start_column, &mut pending_comment)
                    }
                    None => push(
                        TokenKind::Identifier,
                        Some(word.to_string()),
                        start,
                        line,
                        start_column,
                        &mut pending_comment,
                    ),
                }
                column += j - i;
                i = j;
                continue;
            }
            // Operators, longest first.
            let mut matched = false;
            for (text, kind) in OPERATORS {
                if source[i..].starts_with(text) {
                    push(*kind, None, i, line, column, &mut pending_comment);
                    column += text.len();
                    i += text.len();
                    matched = true;
                    break;
                }
            }
            if !matched {
                // Skip anything the test lexer does not know.
                i += 1;
                column += 1;
            }
        }

        tokens
    }

    pub fn lex(source: &str) -> Vec<Token> {
        lex_from(source, 1)
    }

    /// The `Relex` collaborator used by the string-mixin tests.
    pub struct TestLexer;

    impl Relex for TestLexer {
        fn relex(&self, source: &str, line_offset: usize) -> Result<Vec<Token>, String> {
            Ok(lex_from(source, line_offset))
        }
    }
}

pub(crate) use lexer::{lex, TestLexer};

/// Parses `source` and returns the module plus the buffered diagnostics.
fn parse_source(source: &str) -> (Module, Vec<String>, Vec<String>) {
    let (handler, buf) = Handler::new_with_buf();
    let node_builder = NodeBuilder::default();
    let module = parse_module(&handler, &node_builder, lex(source), "test.d");
    (module, buf.extract_errs(), buf.extract_warnings())
}

fn parse_source_retaining(source: &str) -> (Module, Vec<String>, Vec<String>) {
    let (handler, buf) = Handler::new_with_buf();
    let node_builder = NodeBuilder::default();
    let options = ParserOptions { retain_function_bodies: true, relexer: None };
    let module =
        parse_module_with_options(&handler, &node_builder, lex(source), "test.d", options);
    (module, buf.extract_errs(), buf.extract_warnings())
}

/// Runs `f` on a fresh `ParserContext` over `source`.
fn with_context<R>(source: &str, f: impl FnOnce(&mut ParserContext) -> R) -> (R, Vec<String>) {
    let (handler, buf) = Handler::new_with_buf();
    let node_builder = NodeBuilder::default();
    let mut context =
        ParserContext::new(&handler, &node_builder, lex(source), ParserOptions::default());
    let result = f(&mut context);
    (result, buf.extract_errs())
}

fn only_declaration(module: &Module) -> &Declaration {
    assert_eq!(module.declarations.len(), 1, "expected exactly one declaration");
    &module.declarations[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn module_declaration_chain() {
        let (module, errs, _) = parse_source("module a.b.c;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = module.module_declaration.expect("module declaration");
        assert_eq!(declaration.name.names(), vec!["a", "b", "c"]);
        assert!(module.declarations.is_empty());
    }

    #[test]
    fn variable_initializer_precedence() {
        let (module, errs, _) = parse_source("int x = 1 + 2 * 3;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Variable(variable) = &declaration.kind else {
            panic!("expected a variable declaration, got {:?}", declaration.kind);
        };
        let type_ = variable.type_.as_ref().expect("explicit type");
        assert!(matches!(type_.base, BaseType::Builtin(BuiltinType::Int)));
        assert_eq!(variable.declarators.len(), 1);
        let Some(Initializer::Expression(Expression::Binary(add))) =
            &variable.declarators[0].initializer
        else {
            panic!("expected a binary initializer");
        };
        assert_eq!(add.op, BinaryOperation::Add);
        assert!(matches!(
            &*add.left,
            Expression::Literal(LiteralExpression { value: LiteralValue::Integer(_, text), .. })
                if text == "1"
        ));
        let Expression::Binary(mul) = &*add.right else {
            panic!("expected multiplication on the right");
        };
        assert_eq!(mul.op, BinaryOperation::Mul);
    }

    #[test]
    fn new_style_alias_to_function_pointer() {
        let (module, errs, _) = parse_source("alias F = int function(int);");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Alias(alias) = &declaration.kind else {
            panic!("expected an alias declaration");
        };
        let AliasKind::New(initializers) = &alias.kind else {
            panic!("expected the new alias style");
        };
        assert_eq!(initializers.len(), 1);
        assert_eq!(initializers[0].name.name, "F");
        assert!(initializers[0].template_parameters.is_none());
        let AliasValue::Type(type_) = &initializers[0].value else {
            panic!("expected a type value");
        };
        assert!(matches!(type_.base, BaseType::Builtin(BuiltinType::Int)));
        assert_eq!(type_.suffixes.len(), 1);
        let TypeSuffixKind::Callable { kind, parameters, .. } = &type_.suffixes[0].kind else {
            panic!("expected a callable suffix");
        };
        assert_eq!(*kind, CallableKind::Function);
        assert_eq!(parameters.parameters.len(), 1);
    }

    #[test]
    fn static_if_records_both_branches() {
        let (module, errs, _) = parse_source("static if (X) { int a; } else { int b; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Conditional(conditional) = &declaration.kind else {
            panic!("expected a conditional declaration");
        };
        assert!(matches!(conditional.condition, CompileCondition::StaticIf(_)));
        assert_eq!(conditional.true_declarations.len(), 1);
        assert_eq!(conditional.false_declarations.len(), 1);
        let DeclarationKind::Variable(a) = &conditional.true_declarations[0].kind else {
            panic!("expected a variable in the true branch");
        };
        assert_eq!(a.declarators[0].name.name, "a");
        let DeclarationKind::Variable(b) = &conditional.false_declarations[0].kind else {
            panic!("expected a variable in the false branch");
        };
        assert_eq!(b.declarators[0].name.name, "b");
    }

    #[test]
    fn foreach_over_range() {
        let (statement, errs) = with_context("foreach (int i; 0 .. 10) {}", |p| p.parse_statement());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Statement::Foreach(foreach_)) = statement else {
            panic!("expected a foreach statement");
        };
        assert_eq!(foreach_.kind, ForeachKind::Foreach);
        assert_eq!(foreach_.variables.len(), 1);
        let variable = &foreach_.variables[0];
        assert!(matches!(
            variable.type_.as_ref().map(|t| &t.base),
            Some(BaseType::Builtin(BuiltinType::Int))
        ));
        assert_eq!(variable.name.name, "i");
        assert!(matches!(
            &foreach_.aggregate,
            Expression::Literal(LiteralExpression { value: LiteralValue::Integer(_, text), .. })
                if text == "0"
        ));
        assert!(matches!(
            foreach_.high.as_ref(),
            Some(Expression::Literal(LiteralExpression {
                value: LiteralValue::Integer(_, text),
                ..
            })) if text == "10"
        ));
    }

    #[test]
    fn bang_is_negated_identity_not_template() {
        let (result, errs) = with_context("a !is b", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::Binary(binary)) = result else {
            panic!("expected a binary expression");
        };
        assert_eq!(binary.op, BinaryOperation::NotIs);
    }

    #[test]
    fn bang_before_paren_is_template_call() {
        let (result, errs) = with_context("a!b(c)", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::Call(call)) = result else {
            panic!("expected a call expression");
        };
        let Expression::TemplateInstance(instance) = &*call.function else {
            panic!("expected a template-instantiated callee");
        };
        assert_eq!(instance.instance.identifier.name, "a");
        assert_eq!(call.arguments.len(), 1);
    }

    #[test]
    fn binary_operators_are_left_associative() {
        let (result, errs) = with_context("a - b - c", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::Binary(outer)) = result else {
            panic!("expected a binary expression");
        };
        assert_eq!(outer.op, BinaryOperation::Sub);
        let Expression::Binary(inner) = &*outer.left else {
            panic!("left child must be the earlier subtraction");
        };
        assert_eq!(inner.op, BinaryOperation::Sub);
        assert!(matches!(&*outer.right, Expression::Identifier(id) if id.name == "c"));
    }

    #[test]
    fn bookmarks_restore_the_cursor_exactly() {
        let ((), _) = with_context("int x = 1 ;", |p| {
            let start_kind = p.current_kind();
            let bookmark = p.set_bookmark();
            p.advance();
            p.advance();
            p.advance();
            assert_ne!(p.current_kind(), start_kind);
            p.go_to_bookmark(bookmark);
            assert_eq!(p.current_kind(), start_kind);

            let bookmark = p.set_bookmark();
            p.advance();
            let advanced = p.current_kind();
            p.abandon_bookmark(bookmark);
            assert_eq!(p.current_kind(), advanced);
        });
    }

    #[test]
    fn doc_comment_claimed_once() {
        let (module, errs, _) = parse_source("/// Docs for x.\nint x;\nint y;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(module.declarations.len(), 2);
        assert_eq!(module.declarations[0].comment.as_deref(), Some("Docs for x."));
        assert_eq!(module.declarations[1].comment, None);
    }

    #[test]
    fn conditional_comment_propagates_as_supplemental() {
        let (module, errs, _) = parse_source("/// Shared docs.\nversion (X) { int a; int b; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        assert_eq!(declaration.comment.as_deref(), Some("Shared docs."));
        let DeclarationKind::Conditional(conditional) = &declaration.kind else {
            panic!("expected a conditional declaration");
        };
        for inner in &conditional.true_declarations {
            assert_eq!(inner.supplemental_comment.as_deref(), Some("Shared docs."));
        }
    }

    #[test]
    fn implicit_string_concatenation_warns_once_per_chain() {
        let (_, errs, warnings) = parse_source(r#"auto s = "a" "b" "c";"#);
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(warnings.len(), 1, "expected one warning, got {warnings:?}");
        assert!(warnings[0].contains("implicit concatenation"));
    }

    #[test]
    fn recovery_keeps_later_declarations() {
        let (module, errs, _) = parse_source("int x = ;\nint y = 2;");
        assert!(!errs.is_empty(), "the bad initializer must be reported");
        let recovered = module.declarations.iter().any(|declaration| {
            matches!(
                &declaration.kind,
                DeclarationKind::Variable(variable)
                    if variable.declarators.first().map(|d| d.name.name.as_str()) == Some("y")
            )
        });
        assert!(recovered, "the declaration after the error must survive");
    }

    #[test]
    fn pathological_input_terminates() {
        let (module, errs, _) = parse_source("((((((((((((((((((((");
        assert!(!errs.is_empty());
        assert!(module.declarations.is_empty());
    }

    #[test]
    fn function_bodies_are_minimized_by_default() {
        let (module, errs, _) = parse_source("void f() { int x = 1; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Function(function) = &declaration.kind else {
            panic!("expected a function declaration");
        };
        assert!(function.body.had_a_body);
        assert!(matches!(function.body.kind, FunctionBodyKind::Block { block: None }));
    }

    #[test]
    fn function_bodies_can_be_retained() {
        let (module, errs, _) = parse_source_retaining("void f() { int x = 1; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Function(function) = &declaration.kind else {
            panic!("expected a function declaration");
        };
        let FunctionBodyKind::Block { block: Some(block) } = &function.body.kind else {
            panic!("expected a retained block");
        };
        assert_eq!(block.statements.len(), 1);
    }

    #[test]
    fn body_errors_surface_even_when_minimized() {
        let (_, errs, _) = parse_source("void f() { int x = ; }");
        assert!(!errs.is_empty(), "dropped bodies still report their errors");
    }

    #[test]
    fn try_without_catch_or_finally_is_an_error() {
        let (result, errs) = with_context("try { } int x;", |p| p.parse_statement());
        assert!(result.is_err());
        assert!(errs.iter().any(|e| e.contains("`try` statement")), "got {errs:?}");
    }

    #[test]
    fn asm_block_operands() {
        let (result, errs) =
            with_context("asm { mov EAX, 1; L1: ; jmp L1; }", |p| p.parse_statement());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Statement::Asm(asm)) = result else {
            panic!("expected an asm statement");
        };
        assert_eq!(asm.instructions.len(), 3);
        let AsmInstructionKind::Opcode { name, operands } = &asm.instructions[0].kind else {
            panic!("expected an opcode instruction");
        };
        assert_eq!(name.name, "mov");
        assert_eq!(operands.len(), 2);
        assert!(matches!(&operands[0], AsmExp::Register(register) if register.name.name == "EAX"));
        assert!(matches!(
            &asm.instructions[1].kind,
            AsmInstructionKind::Label { name, .. } if name.name == "L1"
        ));
    }

    #[test]
    fn string_mixin_payload_is_reparsed() {
        let (handler, buf) = Handler::new_with_buf();
        let node_builder = NodeBuilder::default();
        let relexer = TestLexer;
        let options = ParserOptions { retain_function_bodies: false, relexer: Some(&relexer) };
        let module = parse_module_with_options(
            &handler,
            &node_builder,
            lex("mixin(q{int x;});"),
            "test.d",
            options,
        );
        assert!(buf.extract_errs().is_empty());
        let declaration = only_declaration(&module);
        let DeclarationKind::Mixin(mixin) = &declaration.kind else {
            panic!("expected a mixin declaration");
        };
        assert_eq!(mixin.trivial_declarations.len(), 1);
        assert!(matches!(mixin.trivial_declarations[0].kind, DeclarationKind::Variable(_)));
    }

    #[test]
    fn case_range_lookahead() {
        let (result, errs) = with_context(
            "switch (x) { case 1: .. case 5: break; default: break; }",
            |p| p.parse_statement(),
        );
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Statement::Switch(switch)) = result else {
            panic!("expected a switch statement");
        };
        let Statement::Block(body) = &*switch.body else {
            panic!("expected a block body");
        };
        assert!(matches!(body.statements[0], Statement::CaseRange(_)));
        assert!(matches!(body.statements[1], Statement::Default(_)));
    }

    #[test]
    fn deprecated_module_declaration() {
        let (module, errs, _) = parse_source(r#"deprecated("use b") module a;"#);
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = module.module_declaration.expect("module declaration");
        assert!(declaration.deprecated.is_some());
        assert_eq!(declaration.name.names(), vec!["a"]);
    }

    #[test]
    fn postblit_and_constructor() {
        let (module, errs, _) =
            parse_source("struct S { this(this) {} this(int x) {} ~this() {} }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Struct(struct_) = &declaration.kind else {
            panic!("expected a struct");
        };
        let body = struct_.body.as_ref().expect("struct body");
        assert!(matches!(body.declarations[0].kind, DeclarationKind::Postblit(_)));
        assert!(matches!(body.declarations[1].kind, DeclarationKind::Constructor(_)));
        assert!(matches!(body.declarations[2].kind, DeclarationKind::Destructor(_)));
    }

    #[test]
    fn eponymous_template_enum() {
        let (module, errs, _) = parse_source("enum isSmall(T) = T.sizeof < 4;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::EponymousTemplate(eponymous) = &declaration.kind else {
            panic!("expected an eponymous template, got {:?}", declaration.kind);
        };
        assert_eq!(eponymous.name.name, "isSmall");
        assert_eq!(eponymous.template_parameters.parameters.len(), 1);
    }

    #[test]
    fn import_with_bindings() {
        let (module, errs, _) = parse_source("import io = std.stdio : writeln, w = writef;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Import(import) = &declaration.kind else {
            panic!("expected an import declaration");
        };
        assert!(import.imports.is_empty());
        let bindings = import.bindings.as_ref().expect("bindings");
        assert_eq!(bindings.import.rename.as_ref().map(|r| r.name.as_str()), Some("io"));
        assert_eq!(bindings.import.chain.names(), vec!["std", "stdio"]);
        assert_eq!(bindings.binds.len(), 2);
        assert_eq!(bindings.binds[1].rename.as_ref().map(|r| r.name.as_str()), Some("w"));
    }

    #[test]
    fn goto_forms() {
        let forms =
            ["goto done;", "goto default;", "goto case;", "goto case 5;"];
        for source in forms {
            let (result, errs) = with_context(source, |p| p.parse_statement());
            assert!(errs.is_empty(), "unexpected errors for {source}: {errs:?}");
            assert!(matches!(result, Ok(Statement::Goto(_))), "failed to parse {source}");
        }
    }

    #[test]
    fn scope_guard_statement() {
        let (result, errs) = with_context("scope(exit) x = 1;", |p| p.parse_statement());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Statement::ScopeGuard(guard)) = result else {
            panic!("expected a scope guard");
        };
        assert_eq!(guard.kind, ScopeGuardKind::Exit);
    }

    #[test]
    fn contracts_with_do_keyword() {
        let (module, errs, warnings) =
            parse_source("int f(int x) in (x > 0) out (r; r > 0) do { return x; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Function(function) = &declaration.kind else {
            panic!("expected a function");
        };
        assert_eq!(function.body.contracts.len(), 2);
        assert!(function.body.had_a_body);
    }

    #[test]
    fn body_keyword_is_deprecated() {
        let (_, errs, warnings) =
            parse_source("int f(int x) in { } body { return x; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert!(warnings.iter().any(|w| w.contains("`body`")), "got {warnings:?}");
    }

    #[test]
    fn c_style_array_declarator_warns() {
        let (module, errs, warnings) = parse_source("int x[3];");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert!(warnings.iter().any(|w| w.contains("C-style")), "got {warnings:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Variable(variable) = &declaration.kind else {
            panic!("expected a variable");
        };
        assert_eq!(variable.declarators[0].c_style_suffixes.len(), 1);
    }

    #[test]
    fn is_expression_with_specialization() {
        let (result, errs) = with_context("is(T == struct)", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::Is(is)) = result else {
            panic!("expected an is expression");
        };
        let comparison = is.comparison.as_ref().expect("comparison");
        assert_eq!(comparison.kind, IsComparisonKind::Exact);
        assert!(matches!(
            comparison.target,
            IsTarget::Specialization(IsSpecialization::Struct)
        ));
    }

    #[test]
    fn associative_array_literal_memoized_decision() {
        let (result, errs) = with_context(r#"[1: "a", 2: "b"]"#, |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert!(matches!(result, Ok(Expression::AssocArrayLiteral(literal)) if literal.pairs.len() == 2));

        let (result, errs) = with_context("[1, 2, 3]", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert!(matches!(result, Ok(Expression::ArrayLiteral(literal)) if literal.elements.len() == 3));
    }

    #[test]
    fn lambda_and_paren_literal() {
        let (result, errs) = with_context("x => x + 1", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert!(matches!(result, Ok(Expression::FunctionLiteral(_))));

        let (result, errs) = with_context("(a, b) => a + b", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::FunctionLiteral(literal)) = result else {
            panic!("expected a function literal");
        };
        assert!(matches!(literal.body, FunctionLiteralBody::Lambda(_)));
        assert_eq!(literal.parameters.as_ref().map(|p| p.parameters.len()), Some(2));
    }

    #[test]
    fn paren_type_member_access() {
        let (result, errs) = with_context("(const(int)).max", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::Member(member)) = result else {
            panic!("expected a member access, got something else");
        };
        assert!(matches!(member.base.as_deref(), Some(Expression::Type(_))));
    }

    #[test]
    fn version_specification_vs_condition() {
        let (module, errs, _) = parse_source("version = FastPath;\nversion (FastPath) int x;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(module.declarations.len(), 2);
        assert!(matches!(
            module.declarations[0].kind,
            DeclarationKind::VersionSpecification(_)
        ));
        assert!(matches!(module.declarations[1].kind, DeclarationKind::Conditional(_)));
    }

    #[test]
    fn error_counters_via_callback() {
        let mut messages = Vec::new();
        let mut errors = 0usize;
        let mut warnings = 0usize;
        let module = crate::parse_module_with_callback(
            lex("int x = ;"),
            "cb.d",
            |file, line, column, message, is_error| {
                messages.push(format!("{file}({line}:{column}) {is_error}: {message}"));
            },
            Some(&mut errors),
            Some(&mut warnings),
        );
        assert!(errors > 0);
        assert!(!messages.is_empty());
        assert!(messages[0].starts_with("cb.d("));
        drop(module);
    }

    #[test]
    fn expect_holds_position_on_recovery_anchors() {
        let ((), errs) = with_context("; )", |p| {
            // On `;` (an anchor) a failed expect must not advance.
            let before = p.current_kind();
            let _ = p.expect(TokenKind::Identifier);
            assert_eq!(p.current_kind(), before);
            // A failed expect on a non-anchor advances one token.
            p.advance();
            assert_eq!(p.current_kind(), TokenKind::RParen);
        });
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn template_declaration_with_constraint() {
        let (module, errs, _) =
            parse_source("template Tuple(T...) if (T.length > 0) { alias Tuple = T; }");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let declaration = only_declaration(&module);
        let DeclarationKind::Template(template) = &declaration.kind else {
            panic!("expected a template declaration");
        };
        assert_eq!(template.name.name, "Tuple");
        assert!(template.constraint.is_some());
        assert_eq!(template.declarations.len(), 1);
    }

    #[test]
    fn statement_fallthrough_reports_expected_statement() {
        let (result, errs) = with_context("else ;", |p| p.parse_statement());
        assert!(result.is_err());
        assert!(errs.iter().any(|e| e.contains("expected a statement")), "got {errs:?}");
    }

    #[test]
    fn dangling_attributes_are_reported() {
        let (_, errs, _) = parse_source("struct S { @safe }");
        assert!(
            errs.iter().any(|e| e.contains("after attributes")),
            "got {errs:?}"
        );
    }

    #[test]
    fn malformed_cast_qualifier_is_reported() {
        let (result, errs) = with_context("cast(const const) x", |p| p.parse_expression());
        assert!(result.is_err());
        assert!(errs.iter().any(|e| e.contains("invalid qualifier sequence")), "got {errs:?}");

        // The admitted sequences still parse as qualifier casts.
        let (result, errs) = with_context("cast(shared const) x", |p| p.parse_expression());
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let Ok(Expression::Cast(cast)) = result else {
            panic!("expected a cast expression");
        };
        assert!(matches!(&cast.target, CastTarget::Qualifier(qualifiers) if qualifiers.len() == 2));
    }

    #[test]
    fn ast_serializes_to_json() {
        let (module, errs, _) = parse_source("module a;\nint x = 1;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        let value = serde_json::to_value(&module).expect("the tree must serialize");
        assert_eq!(value["module_declaration"]["name"]["identifiers"][0]["name"], "a");
    }

    #[test]
    fn eof_token_ends_the_module() {
        let (module, errs, _) = parse_source("int x;\n__EOF__");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(module.declarations.len(), 1);
    }

    #[test]
    fn attribute_colon_declaration() {
        let (module, errs, _) = parse_source("private:\nint x;\nint y;");
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(module.declarations.len(), 3);
        assert!(matches!(module.declarations[0].kind, DeclarationKind::Attribute(_)));
        assert!(matches!(
            module.declarations[0].attributes[0].kind,
            AttributeKind::Simple(AttributeKeyword::Private)
        ));
    }
}
