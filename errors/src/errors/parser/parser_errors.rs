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

use crate::create_messages;
use std::fmt::Display;

create_messages!(
    /// ParserError enum that represents all the errors for the `dryad-parser` crate.
    ParserError,
    code_mask: 370_000i32,
    code_prefix: "PAR",
    severity: Error,

    /// For when the parser encountered an unexpected token.
    @formatted
    unexpected_token {
        args: (found: impl Display, expected: impl Display),
        msg: format!("expected {expected} -- found '{found}'"),
        help: None,
    }

    /// For when the token stream ended inside an unfinished construct.
    @formatted
    unexpected_eof {
        args: (expected: impl Display),
        msg: format!("expected {expected} -- found end of input"),
        help: None,
    }

    /// For when an identifier was required.
    @formatted
    expected_identifier {
        args: (found: impl Display),
        msg: format!("expected an identifier -- found '{found}'"),
        help: None,
    }

    /// For when no declaration could be parsed at a declaration position.
    @formatted
    expected_declaration {
        args: (found: impl Display),
        msg: format!("expected a declaration -- found '{found}'"),
        help: None,
    }

    /// For when no statement could be parsed at a statement position.
    @formatted
    expected_statement {
        args: (found: impl Display),
        msg: format!("expected a statement -- found '{found}'"),
        help: None,
    }

    /// For when a type was required.
    @formatted
    expected_type {
        args: (found: impl Display),
        msg: format!("expected a type -- found '{found}'"),
        help: None,
    }

    /// For when a primary expression could not be started.
    @formatted
    expected_expression {
        args: (found: impl Display),
        msg: format!("expected an expression -- found '{found}'"),
        help: None,
    }

    /// For when a `try` statement has neither `catch` nor `finally`.
    @formatted
    try_without_catch_or_finally {
        args: (),
        msg: "a `try` statement must have a `catch` or a `finally` clause".to_string(),
        help: None,
    }

    /// For when a foreach over a range declares more than one variable.
    @formatted
    foreach_range_single_variable {
        args: (count: impl Display),
        msg: format!("a foreach over a range must declare exactly one loop variable, found {count}"),
        help: None,
    }

    /// For when speculative lookahead produced too many errors.
    @formatted
    lookahead_exhausted {
        args: (),
        msg: "lookahead abandoned after too many speculative parse errors".to_string(),
        help: None,
    }

    /// For when a mixed-in token string could not be re-lexed.
    @formatted
    mixin_relex_failed {
        args: (detail: impl Display),
        msg: format!("could not re-lex mixed-in token string: {detail}"),
        help: None,
    }

    /// For when a function is missing a `;`, a body, or contracts.
    @formatted
    missing_function_body {
        args: (found: impl Display),
        msg: format!("expected ';', '{{', '=>', 'in', or 'out' to begin a function body -- found '{found}'"),
        help: None,
    }

    /// For when an attribute run is not followed by anything it can decorate.
    @formatted
    attribute_without_declaration {
        args: (found: impl Display),
        msg: format!("expected a declaration after attributes -- found '{found}'"),
        help: None,
    }

    /// For when an asm operand could not be parsed.
    @formatted
    invalid_asm_operand {
        args: (found: impl Display),
        msg: format!("expected an asm operand -- found '{found}'"),
        help: None,
    }

    /// For when a cast qualifier sequence is not one of the admitted forms.
    @formatted
    invalid_cast_qualifier {
        args: (found: impl Display),
        msg: format!("invalid qualifier sequence inside `cast(` -- found '{found}'"),
        help: None,
    }

    /// For when a module declaration has no name.
    @formatted
    expected_module_name {
        args: (found: impl Display),
        msg: format!("expected a module name -- found '{found}'"),
        help: None,
    }

    /// For when an `out` contract is malformed.
    @formatted
    invalid_out_contract {
        args: (found: impl Display),
        msg: format!("expected ')', identifier, or ';' inside an `out` contract -- found '{found}'"),
        help: None,
    }
);
