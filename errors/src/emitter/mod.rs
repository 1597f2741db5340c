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

//! The diagnostic sink: counting, suppression scopes, and pluggable output.

use crate::{DryadError, DryadWarning};

use std::cell::RefCell;
use std::rc::Rc;

/// Once more than this many diagnostics have been swallowed inside
/// suppression scopes, speculative parsing is cut off so pathological
/// inputs cannot explode lookahead.
pub const SUPPRESSED_ERROR_CAP: usize = 500;

/// Types that are sinks for compiler errors and warnings.
///
/// `file_name` is the name the active parser was constructed with, passed
/// through verbatim.
pub trait Emitter {
    /// Emit the error `err`.
    fn emit_err(&mut self, err: &DryadError, file_name: &str);

    /// Emit the warning `warning`.
    fn emit_warning(&mut self, warning: &DryadWarning, file_name: &str);
}

/// A trivial `Emitter` using the standard error stream.
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: &DryadError, file_name: &str) {
        eprintln!("{}", err.formatted().format_with_file_colored(file_name));
    }

    fn emit_warning(&mut self, warning: &DryadWarning, file_name: &str) {
        eprintln!("{}", warning.formatted().format_with_file_colored(file_name));
    }
}

/// An `Emitter` that collects the one-line renderings into shared buffers,
/// used in tests and by tooling that wants diagnostics as data.
#[derive(Clone, Default)]
pub struct BufferEmitter {
    errs: Rc<RefCell<Vec<String>>>,
    warnings: Rc<RefCell<Vec<String>>>,
}

impl BufferEmitter {
    /// Returns a new buffered emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the contents of the error buffer.
    pub fn extract_errs(&self) -> Vec<String> {
        self.errs.borrow().clone()
    }

    /// Extracts the contents of the warning buffer.
    pub fn extract_warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: &DryadError, file_name: &str) {
        self.errs.borrow_mut().push(err.formatted().format_with_file(file_name));
    }

    fn emit_warning(&mut self, warning: &DryadWarning, file_name: &str) {
        self.warnings.borrow_mut().push(warning.formatted().format_with_file(file_name));
    }
}

/// The message callback signature exposed to embedders:
/// `(file_name, line, column, message, is_error)`.
pub type MessageFn<'a> = dyn FnMut(&str, usize, usize, &str, bool) + 'a;

/// An `Emitter` that forwards each diagnostic to a caller-supplied
/// function instead of rendering it.
pub struct CallbackEmitter<'a> {
    callback: Box<MessageFn<'a>>,
}

impl<'a> CallbackEmitter<'a> {
    /// Returns a new emitter forwarding to `callback`.
    pub fn new(callback: impl FnMut(&str, usize, usize, &str, bool) + 'a) -> Self {
        Self { callback: Box::new(callback) }
    }
}

impl Emitter for CallbackEmitter<'_> {
    fn emit_err(&mut self, err: &DryadError, file_name: &str) {
        let formatted = err.formatted();
        (self.callback)(file_name, formatted.span.line, formatted.span.column, &formatted.message, true);
    }

    fn emit_warning(&mut self, warning: &DryadWarning, file_name: &str) {
        let formatted = warning.formatted();
        (self.callback)(file_name, formatted.span.line, formatted.span.column, &formatted.message, false);
    }
}

/// Contains the actual data for `Handler`.
/// Modeled this way to afford an API using interior mutability.
struct HandlerInner<'a> {
    /// The sink active diagnostics are published to.
    emitter: Box<dyn Emitter + 'a>,
    /// The file name handed to the emitter with each event.
    file_name: String,
    /// The number of published errors.
    err_count: usize,
    /// The number of published warnings.
    warn_count: usize,
    /// The number of diagnostics swallowed inside suppression scopes.
    suppressed_count: usize,
    /// How many suppression scopes are currently open.
    suppress_depth: usize,
}

impl HandlerInner<'_> {
    fn emit_err(&mut self, err: &DryadError) {
        if self.suppress_depth > 0 {
            self.suppressed_count += 1;
            return;
        }
        self.err_count = self.err_count.saturating_add(1);
        self.emitter.emit_err(err, &self.file_name);
    }

    fn emit_warning(&mut self, warning: &DryadWarning) {
        if self.suppress_depth > 0 {
            self.suppressed_count += 1;
            return;
        }
        self.warn_count = self.warn_count.saturating_add(1);
        self.emitter.emit_warning(warning, &self.file_name);
    }
}

/// A handler deals with diagnostics on behalf of the parser:
/// counting them, routing them through the configured emitter, and
/// swallowing them inside suppression scopes opened by bookmarks.
pub struct Handler<'a> {
    inner: RefCell<HandlerInner<'a>>,
}

impl Default for Handler<'_> {
    fn default() -> Self {
        Self::new(StderrEmitter)
    }
}

impl<'a> Handler<'a> {
    /// Construct a `Handler` using the given `emitter`.
    pub fn new(emitter: impl Emitter + 'a) -> Self {
        Self {
            inner: RefCell::new(HandlerInner {
                emitter: Box::new(emitter),
                file_name: String::new(),
                err_count: 0,
                warn_count: 0,
                suppressed_count: 0,
                suppress_depth: 0,
            }),
        }
    }

    /// Construct a `Handler` that will append to the given buffer.
    pub fn new_with_buf() -> (Self, BufferEmitter) {
        let buf = BufferEmitter::new();
        let handler = Self::new(buf.clone());
        (handler, buf)
    }

    /// Sets the file name published with each diagnostic.
    pub fn set_file_name(&self, file_name: &str) {
        self.inner.borrow_mut().file_name = file_name.to_string();
    }

    /// Emit the error `err`, or count it if a suppression scope is open.
    pub fn emit_err(&self, err: DryadError) {
        self.inner.borrow_mut().emit_err(&err);
    }

    /// Emit the warning `warning`, or count it if a suppression scope is open.
    pub fn emit_warning(&self, warning: DryadWarning) {
        self.inner.borrow_mut().emit_warning(&warning);
    }

    /// Opens a suppression scope; diagnostics are counted, not published.
    pub fn push_suppression(&self) {
        self.inner.borrow_mut().suppress_depth += 1;
    }

    /// Closes the innermost suppression scope.
    pub fn pop_suppression(&self) {
        let mut inner = self.inner.borrow_mut();
        debug_assert!(inner.suppress_depth > 0, "unbalanced suppression scope");
        inner.suppress_depth = inner.suppress_depth.saturating_sub(1);
    }

    /// Returns `true` if a suppression scope is open.
    pub fn is_suppressed(&self) -> bool {
        self.inner.borrow().suppress_depth > 0
    }

    /// Returns `true` once the suppressed diagnostics exceed
    /// [`SUPPRESSED_ERROR_CAP`]; speculative parsing must then fail fast.
    pub fn suppressed_over_cap(&self) -> bool {
        self.inner.borrow().suppressed_count > SUPPRESSED_ERROR_CAP
    }

    /// The number of errors published so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().err_count
    }

    /// The number of warnings published so far.
    pub fn warn_count(&self) -> usize {
        self.inner.borrow().warn_count
    }

    /// The number of diagnostics swallowed by suppression scopes so far.
    pub fn suppressed_count(&self) -> usize {
        self.inner.borrow().suppressed_count
    }

    /// Returns `true` if any errors were published.
    pub fn had_errors(&self) -> bool {
        self.inner.borrow().err_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;
    use dryad_span::Span;

    fn err() -> DryadError {
        ParserError::unexpected_token("}", "';'", Span::new(1, 1, 0)).into()
    }

    #[test]
    fn counts_published_errors() {
        let (handler, buf) = Handler::new_with_buf();
        handler.set_file_name("test.d");
        handler.emit_err(err());
        assert_eq!(handler.err_count(), 1);
        assert_eq!(buf.extract_errs().len(), 1);
        assert!(buf.extract_errs()[0].starts_with("test.d(1:1)[error]"));
    }

    #[test]
    fn suppression_scopes_swallow() {
        let (handler, buf) = Handler::new_with_buf();
        handler.push_suppression();
        handler.emit_err(err());
        handler.pop_suppression();
        assert_eq!(handler.err_count(), 0);
        assert_eq!(handler.suppressed_count(), 1);
        assert!(buf.extract_errs().is_empty());

        // Published again once the scope closes.
        handler.emit_err(err());
        assert_eq!(handler.err_count(), 1);
    }

    #[test]
    fn cap_trips_only_past_the_bound() {
        let (handler, _) = Handler::new_with_buf();
        handler.push_suppression();
        for _ in 0..SUPPRESSED_ERROR_CAP {
            handler.emit_err(err());
        }
        assert!(!handler.suppressed_over_cap());
        handler.emit_err(err());
        assert!(handler.suppressed_over_cap());
        handler.pop_suppression();
    }
}
