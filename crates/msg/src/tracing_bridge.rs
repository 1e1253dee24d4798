//! Bridge into the `tracing` ecosystem.
//!
//! Applications already running a `tracing` subscriber can route this
//! facility's messages into it instead of the console: the bridge registers
//! a handler that re-emits each delivery as a `tracing` event under the
//! `uhd::msg` target, mapping the four categories onto `tracing` levels.
//! High-frequency fastpath notices land at `TRACE` so they stay cheap to
//! filter out.

use tracing::Level;

use crate::category::Category;
use crate::handler::register_handler;

/// Event target used for all bridged messages.
pub const TRACING_TARGET: &str = "uhd::msg";

/// Returns the `tracing` level a category is bridged at.
///
/// # Examples
///
/// ```
/// use msg::Category;
/// use msg::tracing_bridge::tracing_level;
/// use tracing::Level;
///
/// assert_eq!(tracing_level(Category::Error), Level::ERROR);
/// assert_eq!(tracing_level(Category::Fastpath), Level::TRACE);
/// ```
#[must_use]
pub const fn tracing_level(category: Category) -> Level {
    match category {
        Category::Status => Level::INFO,
        Category::Warning => Level::WARN,
        Category::Error => Level::ERROR,
        Category::Fastpath => Level::TRACE,
    }
}

/// Handler that re-emits a delivery as a `tracing` event.
///
/// The trailing newline that line-oriented call sites append is trimmed,
/// since `tracing` subscribers terminate events themselves.
pub fn forward_to_tracing(category: Category, message: &str) {
    let text = message.trim_end_matches('\n');
    match category {
        Category::Status => tracing::info!(target: "uhd::msg", "{text}"),
        Category::Warning => tracing::warn!(target: "uhd::msg", "{text}"),
        Category::Error => tracing::error!(target: "uhd::msg", "{text}"),
        Category::Fastpath => tracing::trace!(target: "uhd::msg", "{text}"),
    }
}

/// Registers [`forward_to_tracing`] as the active message handler.
///
/// From this point on the default console policy is bypassed and every
/// message reaches whichever `tracing` subscriber is current where the
/// emitting statement runs.
pub fn install_tracing_handler() {
    register_handler(forward_to_tracing);
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[test]
    fn levels_follow_category_severity() {
        assert_eq!(tracing_level(Category::Status), Level::INFO);
        assert_eq!(tracing_level(Category::Warning), Level::WARN);
        assert_eq!(tracing_level(Category::Error), Level::ERROR);
        assert_eq!(tracing_level(Category::Fastpath), Level::TRACE);
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).expect("utf-8")
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn forwarded_events_carry_target_and_text() {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            forward_to_tracing(Category::Warning, "gain out of range\n");
            forward_to_tracing(Category::Fastpath, "O");
        });

        let output = buffer.contents();
        assert!(output.contains("uhd::msg"));
        assert!(output.contains("WARN"));
        assert!(output.contains("gain out of range"));
        assert!(output.contains("TRACE"));
    }
}
