//! Process-wide handler slot.
//!
//! Exactly one handler is active at a time. The slot starts out pointing at
//! the default console policy and is totally overwritten by each
//! registration; there is no unregister operation, only replacement.
//!
//! upstream: msg.cpp — `msg_resource_type` holds a single `handler` member
//! guarded by a mutex; `register_handler()` overwrites it in place.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::category::Category;
use crate::console::default_msg_handler;

/// The registered message handler: `(category, text) -> ()`.
///
/// Handlers run synchronously at the call sites that emit messages, on
/// whichever thread the message was composed. They are responsible for their
/// own thread-safety on shared output channels, and they must not fail in
/// ways the embedding application cannot tolerate at arbitrary call sites —
/// the facility neither catches nor suppresses handler panics.
pub type Handler = Arc<dyn Fn(Category, &str) + Send + Sync>;

// Read-mostly: registration typically happens once at startup while every
// delivery takes the read side. Poison is absorbed so a panicking registrant
// cannot wedge subsequent deliveries.
static HANDLER: LazyLock<RwLock<Handler>> =
    LazyLock::new(|| RwLock::new(Arc::new(default_msg_handler)));

/// Registers `handler` as the active message handler.
///
/// This replaces the default console policy (or any previously registered
/// handler) for every delivery initiated after this call returns.
/// Accumulators already composing a message pick up the new handler when
/// they deliver; deliveries already in flight keep the handler they
/// observed. Registering a no-op closure is legal and silently drops all
/// subsequent messages.
///
/// # Examples
///
/// ```
/// use msg::Category;
///
/// msg::register_handler(|category: Category, text: &str| {
///     eprintln!("[{category}] {text}");
/// });
/// # msg::reset_handler();
/// ```
pub fn register_handler<F>(handler: F)
where
    F: Fn(Category, &str) + Send + Sync + 'static,
{
    drop(swap_handler(Arc::new(handler)));
}

/// Returns the currently active [`Handler`].
///
/// The returned clone keeps targeting the same handler even if another
/// thread replaces the slot afterwards, which is what delivery relies on for
/// its no-retroactive-rerouting guarantee.
#[must_use]
pub fn get_handler() -> Handler {
    HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Installs `handler` and returns the handler that was active before.
///
/// This is the primitive behind [`register_handler`], [`reset_handler`], and
/// [`scoped_handler`]; it exists on its own so callers can stash the
/// previous handler and reinstate it later.
pub fn swap_handler(handler: Handler) -> Handler {
    let mut slot = HANDLER.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, handler)
}

/// Delivers a finished message to the currently active handler.
///
/// The handler is cloned out of the slot before the call so a registration
/// racing this delivery cannot reroute it and a handler that itself emits a
/// message does not re-enter the slot lock.
pub(crate) fn dispatch(category: Category, text: &str) {
    let handler = get_handler();
    (*handler)(category, text);
}

/// Reinstates the default console policy.
pub fn reset_handler() {
    drop(swap_handler(Arc::new(default_msg_handler)));
}

/// Registers `handler` for the lifetime of the returned [`HandlerGuard`].
///
/// Dropping the guard restores whichever handler was active when
/// `scoped_handler` was called. This is the registration shape test code and
/// short-lived redirections want; long-lived applications normally call
/// [`register_handler`] once at startup instead.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use msg::Msg;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// {
///     let seen = Arc::clone(&seen);
///     let _guard = msg::scoped_handler(move |_category, text: &str| {
///         seen.lock().unwrap().push(text.to_owned());
///     });
///     Msg::status().append("captured");
/// }
/// assert_eq!(seen.lock().unwrap().as_slice(), ["captured"]);
/// ```
pub fn scoped_handler<F>(handler: F) -> HandlerGuard
where
    F: Fn(Category, &str) + Send + Sync + 'static,
{
    HandlerGuard {
        previous: Some(swap_handler(Arc::new(handler))),
    }
}

/// RAII guard that restores the previously active handler on drop.
///
/// Created by [`scoped_handler`]. While the guard is alive, deliveries go to
/// the scoped handler; dropping it reinstates the handler that was active
/// before, so nested scopes unwind in the expected order.
#[must_use = "dropping the guard immediately restores the previous handler"]
pub struct HandlerGuard {
    previous: Option<Handler>,
}

impl HandlerGuard {
    /// Consumes the guard without restoring the previous handler.
    ///
    /// The scoped handler becomes the new baseline and the handler that was
    /// active before the scope is returned to the caller.
    pub fn into_handler(mut self) -> Handler {
        self.previous
            .take()
            .expect("handler guard retains the previous handler until consumed")
    }
}

impl Drop for HandlerGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            drop(swap_handler(previous));
        }
    }
}
