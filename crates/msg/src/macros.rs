//! Call-site convenience macros.
//!
//! Pure textual sugar over [`Msg`](crate::Msg): each macro expands to a
//! status accumulator expression, so used as a statement it delivers at the
//! trailing semicolon.
//!
//! upstream: msg.hpp — `UHD_HERE()`, `UHD_VAR()`, and `UHD_HEX()`.

/// Emits the current source location as a status message.
///
/// # Examples
///
/// ```
/// # let _guard = msg::scoped_handler(|_, _| {});
/// msg::msg_here!();
/// ```
#[macro_export]
macro_rules! msg_here {
    () => {
        $crate::Msg::status().append(::core::format_args!("{}:{}\n", file!(), line!()))
    };
}

/// Emits a named variable and its value as a status message.
///
/// # Examples
///
/// ```
/// # let _guard = msg::scoped_handler(|_, _| {});
/// let decim = 8;
/// msg::msg_var!(decim);
/// ```
#[macro_export]
macro_rules! msg_var {
    ($var:expr) => {
        $crate::Msg::status().append(::core::format_args!(
            "{} = {}\n",
            ::core::stringify!($var),
            $var
        ))
    };
}

/// Emits a named variable in zero-filled eight-digit hexadecimal.
///
/// # Examples
///
/// ```
/// # let _guard = msg::scoped_handler(|_, _| {});
/// let ctrl_word = 0x00beefu32;
/// msg::msg_hex!(ctrl_word);
/// ```
#[macro_export]
macro_rules! msg_hex {
    ($var:expr) => {
        $crate::Msg::status().append(::core::format_args!(
            "{} = {:#010x}\n",
            ::core::stringify!($var),
            $var
        ))
    };
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::Category;
    use crate::handler::scoped_handler;

    fn capture() -> (
        crate::handler::HandlerGuard,
        Arc<Mutex<Vec<(Category, String)>>>,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let guard = scoped_handler(move |category, text: &str| {
            sink.lock().unwrap().push((category, text.to_owned()));
        });
        (guard, seen)
    }

    #[test]
    fn msg_here_reports_file_and_line() {
        let _lock = test_support::handler_lock();
        let (_guard, seen) = capture();

        msg_here!();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Category::Status);
        assert!(seen[0].1.contains("macros.rs:"));
        assert!(seen[0].1.ends_with('\n'));
    }

    #[test]
    fn msg_var_renders_name_and_value() {
        let _lock = test_support::handler_lock();
        let (_guard, seen) = capture();

        let master_clock_rate = 100_000_000u64;
        msg_var!(master_clock_rate);

        assert_eq!(
            seen.lock().unwrap()[0].1,
            "master_clock_rate = 100000000\n"
        );
    }

    #[test]
    fn msg_hex_is_zero_filled_to_eight_digits() {
        let _lock = test_support::handler_lock();
        let (_guard, seen) = capture();

        let reg = 0xBEEF_u32;
        msg_hex!(reg);

        assert_eq!(seen.lock().unwrap()[0].1, "reg = 0x0000beef\n");
    }

    #[test]
    fn macros_accept_arbitrary_expressions() {
        let _lock = test_support::handler_lock();
        let (_guard, seen) = capture();

        msg_var!(2 + 2);

        assert_eq!(seen.lock().unwrap()[0].1, "2 + 2 = 4\n");
    }
}
