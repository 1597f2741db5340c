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

/// Generates a diagnostic type with one constructor per message.
///
/// Each message receives a stable exit code, `code_mask + index`, where the
/// index is the position of the message in the declaration order. Adding
/// messages at the end keeps existing codes stable. One invocation per
/// module; the hidden index enum is not namespaced by type.
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        severity: $severity:ident,
        $(
            $(#[$docs:meta])*
            @formatted
            $name:ident {
                args: ( $( $arg_name:ident: $arg_ty:ty ),* $(,)? ),
                msg: $msg:expr,
                help: $help:expr,
            }
        )*
    ) => {
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone)]
        #[doc(hidden)]
        enum __Code { $( $name, )* __Count }

        $(#[$error_type_docs])*
        #[derive(Clone, Debug, ::thiserror::Error, PartialEq, Eq)]
        pub enum $type_ {
            #[error(transparent)]
            Formatted(#[from] $crate::common::FormattedError),
        }

        impl $type_ {
            $(
                $(#[$docs])*
                #[allow(clippy::too_many_arguments)]
                pub fn $name( $( $arg_name: $arg_ty, )* span: ::dryad_span::Span ) -> Self {
                    Self::Formatted($crate::common::FormattedError::new_from_span(
                        $msg.to_string(),
                        $help,
                        $code_mask + (__Code::$name as i32),
                        $code_prefix,
                        $crate::common::Severity::$severity,
                        span,
                    ))
                }
            )*

            /// Returns the code of the message, e.g. `EPAR0370001`.
            pub fn error_code(&self) -> String {
                match self {
                    Self::Formatted(formatted) => formatted.code(),
                }
            }

            /// Returns the formatted payload of the message.
            pub fn formatted(&self) -> &$crate::common::FormattedError {
                match self {
                    Self::Formatted(formatted) => formatted,
                }
            }

            /// Returns the exit code of the message.
            pub fn exit_code(&self) -> i32 {
                match self {
                    Self::Formatted(formatted) => formatted.exit_code,
                }
            }

            /// Returns the number of messages defined for this type.
            pub fn num_exit_codes() -> i32 {
                __Code::__Count as i32
            }
        }
    };
}
