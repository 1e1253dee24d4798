#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `msg` is a process-wide, pluggable message-reporting facility ported from
//! UHD's `uhd::msg` utility. Library code emits categorized human-readable
//! diagnostics — [`Category::Status`], [`Category::Warning`],
//! [`Category::Error`], and high-frequency [`Category::Fastpath`] notices —
//! through a single indirection point that the embedding application may
//! redirect with [`register_handler`].
//!
//! # Design
//!
//! Each logging call constructs a [`Msg`] accumulator for a chosen
//! [`Category`], composes text onto it with chained
//! [`append`](Msg::append) calls (or `write!`, via the [`std::fmt::Write`]
//! impl), and lets it drop at the end of the statement. Destruction
//! delivers the finished `(category, text)` pair to whichever [`Handler`]
//! is registered at that moment. Absent any registration, the built-in
//! console policy prints status output to stdout and titled, indented
//! warning/error blocks to stderr, while fastpath notices are written to
//! stderr verbatim with no formatting overhead.
//!
//! # Invariants
//!
//! - Every accumulator delivers to the handler exactly once, at end of
//!   life, on every exit path — even when nothing was appended.
//! - Exactly one handler is active at any time; registration is a total
//!   overwrite, and the handler active at *delivery* wins for messages
//!   still being composed when a swap happens.
//! - Appends on one accumulator occur in program order on its owning
//!   thread; independent accumulators on other threads may deliver
//!   concurrently, and handlers own their thread-safety on shared output
//!   channels.
//!
//! # Errors
//!
//! The facility reports failures, it does not produce them: the only
//! recoverable error is [`ParseCategoryError`] from `str::parse`. Failures
//! inside a user-supplied handler are neither caught nor suppressed.
//!
//! # Examples
//!
//! Compose a status line and redirect delivery into a capture sink:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use msg::{Category, Msg};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _guard = msg::scoped_handler(move |category: Category, text: &str| {
//!     sink.lock().unwrap().push((category, text.to_owned()));
//! });
//!
//! Msg::status().append("found ").append(2).append(" devices\n");
//!
//! assert_eq!(
//!     seen.lock().unwrap().as_slice(),
//!     [(Category::Status, "found 2 devices\n".to_owned())]
//! );
//! ```
//!
//! # See also
//!
//! - The `tracing_bridge` module (feature `tracing`) for routing messages
//!   into an existing `tracing` subscriber.

mod category;
mod console;
mod handler;
mod macros;
mod msg;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use category::{Category, ParseCategoryError};
pub use console::default_msg_handler;
pub use handler::{
    Handler, HandlerGuard, get_handler, register_handler, reset_handler, scoped_handler,
    swap_handler,
};
pub use msg::Msg;
