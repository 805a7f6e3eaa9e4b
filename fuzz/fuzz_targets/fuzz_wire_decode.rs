#![no_main]

use bitext_core::Side;
use bitext_runtime::{Session, decode_intent};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic regardless of input.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let decoded = decode_intent(text);

    // Whatever decodes must also apply without panicking, and a rejected
    // envelope must leave the session as it was.
    let mut session = Session::new([], [], []);
    let before = session.state().clone();
    match session.dispatch_json(text) {
        Ok(_) => assert!(decoded.is_ok()),
        Err(_) => {
            assert!(decoded.is_err());
            assert_eq!(session.state(), &before);
        }
    }
    let _ = session.project(Side::Source);
});
