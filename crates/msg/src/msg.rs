//! Per-call message accumulator.
//!
//! upstream: msg.cpp — class `_msg` buffers into an `ostringstream` and its
//! destructor hands the finished string to the registered handler.

use std::fmt::{self, Write as _};

use crate::category::Category;
use crate::handler::dispatch;

/// A single in-flight diagnostic message.
///
/// A `Msg` is created per logging call, collects appended text, and delivers
/// `(category, text)` to the active handler exactly once when it goes out of
/// scope — normally at the semicolon of the statement that composed it.
/// Because [`append`](Self::append) consumes and returns the accumulator,
/// appending after delivery is impossible by construction.
///
/// The handler is looked up at delivery time, not at construction, so a
/// handler registered while a message is being composed receives it
/// (last-handler-wins). An accumulator that had nothing appended still
/// delivers its empty text.
///
/// # Examples
///
/// Compose and deliver in one statement:
///
/// ```
/// use msg::Msg;
///
/// # let _guard = msg::scoped_handler(|_, _| {});
/// Msg::status().append("found ").append(4).append(" devices\n");
/// ```
///
/// [`std::fmt::Write`] is implemented as well, so `write!` composes with
/// ordinary format strings:
///
/// ```
/// use std::fmt::Write;
/// use msg::Msg;
///
/// # let _guard = msg::scoped_handler(|_, _| {});
/// let mut message = Msg::warning();
/// writeln!(message, "gain {:.1} dB out of range", 76.5).unwrap();
/// // delivered when `message` drops
/// ```
#[derive(Debug)]
pub struct Msg {
    category: Category,
    buffer: String,
}

impl Msg {
    /// Starts an empty message of the given category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            buffer: String::new(),
        }
    }

    /// Starts a [`Category::Status`] message.
    pub fn status() -> Self {
        Self::new(Category::Status)
    }

    /// Starts a [`Category::Warning`] message.
    pub fn warning() -> Self {
        Self::new(Category::Warning)
    }

    /// Starts a [`Category::Error`] message.
    pub fn error() -> Self {
        Self::new(Category::Error)
    }

    /// Starts a [`Category::Fastpath`] message.
    pub fn fastpath() -> Self {
        Self::new(Category::Fastpath)
    }

    /// Appends the textual rendering of `value` and returns the accumulator
    /// so appends chain within a single expression.
    ///
    /// Anything [`Display`](std::fmt::Display) is accepted: strings,
    /// numbers, `char`, or `format_args!` output when base, width, or fill
    /// directives are needed.
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        // Formatting into a String only fails if a Display impl reports a
        // spurious error; such fragments are dropped rather than escalated,
        // since the reporting path must never fail itself.
        let _ = write!(self.buffer, "{value}");
        self
    }

    /// Returns the category chosen at construction.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the text accumulated so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl fmt::Write for Msg {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Drop for Msg {
    fn drop(&mut self) {
        dispatch(self.category, &self.buffer);
    }
}
