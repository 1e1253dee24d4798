//! Integration tests for delivery ordering and the exactly-once contract.
//!
//! A capturing handler stores `(category, text)` pairs in arrival order;
//! single-threaded emission must reproduce program order exactly, and each
//! logging statement must reach the handler exactly once regardless of how
//! many values it appended.

use msg::{Category, Msg};
use test_support::{CaptureHandler, handler_lock};

#[test]
fn same_thread_deliveries_arrive_in_program_order() {
    let _lock = handler_lock();
    let capture = CaptureHandler::new();
    let _guard = capture.install();

    Msg::status().append("a");
    Msg::warning().append("b");
    Msg::error().append("c");

    assert_eq!(
        capture.take(),
        [
            (Category::Status, "a".to_owned()),
            (Category::Warning, "b".to_owned()),
            (Category::Error, "c".to_owned()),
        ]
    );
}

#[test]
fn one_statement_is_one_delivery() {
    let _lock = handler_lock();
    let capture = CaptureHandler::new();
    let _guard = capture.install();

    Msg::status();
    Msg::status().append("one");
    Msg::status().append("two ").append("halves");

    let captured = capture.take();
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0].1, "");
    assert_eq!(captured[1].1, "one");
    assert_eq!(captured[2].1, "two halves");
}

#[test]
fn delivered_text_is_concatenation_of_appends() {
    let _lock = handler_lock();
    let capture = CaptureHandler::new();
    let _guard = capture.install();

    Msg::status()
        .append("rx rate: ")
        .append(6.25)
        .append(" Msps on channel ")
        .append(0)
        .append('\n');

    assert_eq!(
        capture.take(),
        [(Category::Status, "rx rate: 6.25 Msps on channel 0\n".to_owned())]
    );
}

#[test]
fn early_return_still_delivers() {
    let _lock = handler_lock();
    let capture = CaptureHandler::new();
    let _guard = capture.install();

    fn emit_and_bail(flag: bool) -> Option<u32> {
        let _message = Msg::warning().append("bailing out");
        if flag {
            return None;
        }
        Some(1)
    }

    assert!(emit_and_bail(true).is_none());
    assert_eq!(
        capture.take(),
        [(Category::Warning, "bailing out".to_owned())]
    );
}
