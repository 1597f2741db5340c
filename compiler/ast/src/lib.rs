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

//! The abstract syntax tree (ast) for a D module.
//!
//! This crate defines the node families produced by the Dryad parser:
//! expressions, statements, declarations, template machinery, types, inline
//! assembly, and the root [`Module`]. Every node records the location of
//! its first significant token and a [`NodeID`] handed out by the
//! [`NodeBuilder`]. The [`Ast`] wrapper carries a parsed module and its
//! serialization helpers.

#![forbid(unsafe_code)]
#![allow(ambiguous_glob_reexports)]

pub mod asm;
pub use self::asm::*;

pub mod common;
pub use self::common::*;

pub mod declarations;
pub use self::declarations::*;

pub mod expressions;
pub use self::expressions::*;

pub mod module;
pub use self::module::*;

pub mod statements;
pub use self::statements::*;

pub mod templates;
pub use self::templates::*;

pub mod types;
pub use self::types::*;

use dryad_errors::{AstError, Result};

/// The abstract syntax tree of a single D module.
///
/// The [`Ast`] type represents a parsed source file as a series of
/// recursive data types beginning at a [`Module`] root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ast {
    pub ast: Module,
}

impl Ast {
    /// Creates a new AST from a given module tree.
    pub fn new(module: Module) -> Self {
        Self { ast: module }
    }

    /// Returns a reference to the inner module representation.
    pub fn as_repr(&self) -> &Module {
        &self.ast
    }

    pub fn into_repr(self) -> Module {
        self.ast
    }

    /// Serializes the ast into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.ast)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_string(&e, Default::default()))?)
    }

    /// Converts the ast into a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.ast)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_value(&e, Default::default()))?)
    }

    /// Serializes the ast into a JSON file.
    pub fn to_json_file(&self, mut path: std::path::PathBuf, file_name: &str) -> Result<()> {
        path.push(file_name);
        let file = std::fs::File::create(&path)
            .map_err(|e| AstError::failed_to_create_ast_json_file(&path, &e, Default::default()))?;
        let writer = std::io::BufWriter::new(file);
        Ok(serde_json::to_writer_pretty(writer, &self.ast)
            .map_err(|e| AstError::failed_to_write_ast_to_json_file(&path, &e, Default::default()))?)
    }
}
