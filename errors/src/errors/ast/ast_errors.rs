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
use std::fmt::{Debug, Display};

create_messages!(
    /// AstError enum that represents all the errors for the `dryad-ast` crate.
    AstError,
    code_mask: 300_000i32,
    code_prefix: "AST",
    severity: Error,

    /// For when the AST fails to be represented as a JSON string.
    @formatted
    failed_to_convert_ast_to_json_string {
        args: (error: impl Display),
        msg: format!("failed to convert ast to a json string {error}"),
        help: None,
    }

    /// For when the AST fails to be represented as a JSON value.
    @formatted
    failed_to_convert_ast_to_json_value {
        args: (error: impl Display),
        msg: format!("failed to convert ast to a json value {error}"),
        help: None,
    }

    /// For when the AST fails to create the AST JSON file.
    @formatted
    failed_to_create_ast_json_file {
        args: (path: impl Debug, error: impl Display),
        msg: format!("failed to create ast json file `{path:?}` {error}"),
        help: None,
    }

    /// For when the AST fails to write the AST JSON file.
    @formatted
    failed_to_write_ast_to_json_file {
        args: (path: impl Debug, error: impl Display),
        msg: format!("failed to write ast to a json file `{path:?}` {error}"),
        help: None,
    }
);
