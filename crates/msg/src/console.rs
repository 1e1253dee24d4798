//! Default console policy.
//!
//! Routes each category to a process output channel with the canonical UHD
//! decoration. Warnings share the error channel: the original's
//! `msg_to_cerr` sent both warnings and errors to `std::cerr`, and keeping
//! status output alone on stdout lets applications pipe it cleanly.
//!
//! upstream: msg.cpp — `msg_to_cout`/`msg_to_cerr` plus the `switch` in
//! `default_msg_handler()`.

use std::io::{self, Write};

use crate::category::Category;

const WARNING_TITLE: &str = "UHD Warning";
const ERROR_TITLE: &str = "UHD Error";

/// Default handler for printing system messages to the console.
///
/// This is the handler active at process start, before any registration:
///
/// - `Status` goes to stdout verbatim.
/// - `Warning` and `Error` go to stderr as a titled block with each line of
///   the message indented by four spaces.
/// - `Fastpath` goes to stderr verbatim and is flushed immediately with no
///   decoration, keeping per-message overhead near zero for high-frequency
///   notices.
///
/// Output is best-effort: write errors on the channels are ignored rather
/// than surfaced, matching the original's unchecked stream writes. Each
/// delivery holds the channel's lock for the whole message so concurrent
/// deliveries from other threads cannot interleave mid-message.
///
/// An empty message still flushes its channel; for `Warning` and `Error` the
/// title block is printed even when no text was accumulated.
pub fn default_msg_handler(category: Category, message: &str) {
    match category {
        Category::Status => {
            let mut out = io::stdout().lock();
            let _ = out.write_all(message.as_bytes());
            let _ = out.flush();
        }
        Category::Warning => {
            let mut err = io::stderr().lock();
            let _ = write_titled(&mut err, WARNING_TITLE, message);
            let _ = err.flush();
        }
        Category::Error => {
            let mut err = io::stderr().lock();
            let _ = write_titled(&mut err, ERROR_TITLE, message);
            let _ = err.flush();
        }
        Category::Fastpath => {
            // upstream: msg.cpp — fastpath is a single unbuffered write, no
            // formatting pass at all.
            let mut err = io::stderr().lock();
            let _ = err.write_all(message.as_bytes());
            let _ = err.flush();
        }
    }
}

/// Writes `message` as a titled block: a leading blank line, the title with
/// a trailing colon, then every line of the message indented.
///
/// upstream: msg.cpp — `msg_to_cerr()` tokenizes the message on newlines and
/// prefixes each line with four spaces.
fn write_titled<W: Write>(writer: &mut W, title: &str, message: &str) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{title}:")?;
    for line in message.lines() {
        writeln!(writer, "    {line}")?;
    }
    Ok(())
}
