#![no_main]

use libfuzzer_sys::fuzz_target;

// Splits the input at the first newline: operation name, then JSON arguments.
// Goal: no panics, whatever the name, arity or payload.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (operation, args) = text.split_once('\n').unwrap_or((text, "[]"));
    let _ = object_coercion_core::invoke_json(operation, args, "{}");
});
