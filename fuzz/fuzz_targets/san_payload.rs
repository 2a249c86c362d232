#![no_main]
use libfuzzer_sys::fuzz_target;
use uzi_reader::san::{other_name_payload, UziFields};

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = other_name_payload(data) {
        let _ = payload.parse::<UziFields>();
    }
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<UziFields>();
    }
});
