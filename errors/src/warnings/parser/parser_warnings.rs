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

create_messages!(
    /// ParserWarning enum that represents all the warnings for the `dryad-parser` crate.
    ParserWarning,
    code_mask: 370_000i32,
    code_prefix: "PAR",
    severity: Warning,

    /// For when two string literals sit next to each other.
    @formatted
    implicit_string_concatenation {
        args: (),
        msg: "implicit concatenation of adjacent string literals is deprecated, use `~`".to_string(),
        help: None,
    }

    /// For when a base class carries a protection attribute.
    @formatted
    base_class_protection {
        args: (),
        msg: "protection attributes on base classes are deprecated".to_string(),
        help: None,
    }

    /// For when a variable uses a C-style array declarator.
    @formatted
    c_style_array_declarator {
        args: (),
        msg: "C-style array declarators are deprecated, put the brackets on the type".to_string(),
        help: None,
    }

    /// For when an old-style alias puts the attributes after the signature.
    @formatted
    legacy_alias_syntax {
        args: (),
        msg: "this alias syntax is deprecated, use `alias name = type;`".to_string(),
        help: None,
    }

    /// For when a contract block is closed by `body` instead of `do`.
    @formatted
    body_keyword_deprecated {
        args: (),
        msg: "`body` as a contract-block introducer is deprecated, use `do`".to_string(),
        help: None,
    }
);
