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

/// This module contains the parser error definitions.
pub mod parser_errors;
pub use parser_errors::*;
