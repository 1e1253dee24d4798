#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Shared test utilities for the msg workspace.
//!
//! The handler slot is process-wide, so tests that register handlers must
//! not run concurrently with each other: [`handler_lock`] serializes them.
//! [`CaptureHandler`] is the standard capture sink used by those tests to
//! assert on delivered `(category, text)` pairs in arrival order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use msg::{Category, HandlerGuard};

static HANDLER_TESTS: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate the process-wide handler slot.
///
/// Hold the returned guard for the duration of the test. Poison from a
/// previously failed test is absorbed so one failure does not cascade.
#[must_use]
pub fn handler_lock() -> MutexGuard<'static, ()> {
    HANDLER_TESTS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Capture sink recording every delivery in arrival order.
///
/// Cloning is cheap and shares the underlying buffer, so a test can keep one
/// clone for assertions while the installed handler owns another.
///
/// # Examples
///
/// ```
/// use msg::{Category, Msg};
/// use test_support::CaptureHandler;
///
/// let capture = CaptureHandler::new();
/// let _guard = capture.install();
///
/// Msg::error().append("boom");
///
/// assert_eq!(capture.take(), [(Category::Error, "boom".to_owned())]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureHandler {
    events: Arc<Mutex<Vec<(Category, String)>>>,
}

impl CaptureHandler {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers this sink as the active handler for the guard's lifetime.
    ///
    /// Dropping the returned [`HandlerGuard`] restores whichever handler was
    /// active before.
    #[must_use]
    pub fn install(&self) -> HandlerGuard {
        let events = Arc::clone(&self.events);
        msg::scoped_handler(move |category, text: &str| {
            events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((category, text.to_owned()));
        })
    }

    /// Drains and returns everything captured so far, in arrival order.
    #[must_use]
    pub fn take(&self) -> Vec<(Category, String)> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Returns the number of deliveries captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
