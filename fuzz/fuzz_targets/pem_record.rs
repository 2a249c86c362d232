#![no_main]
use libfuzzer_sys::fuzz_target;
use uzi_reader::prelude::*;

fuzz_target!(|data: &[u8]| {
    let validator = PolicyValidator::new(PolicyConfig::new(true).allow_type("Z"));
    let text = std::str::from_utf8(data).ok();
    for kind in &[UziKind::Generic, UziKind::PassUser, UziKind::Server] {
        if let Ok(user) = UziRecord::from_der(*kind, Verification::Success, Some(data)) {
            let _ = validator.is_valid(Some(&user));
        }
        if let Some(text) = text {
            if let Ok(user) = UziRecord::from_pem(*kind, Verification::Success, Some(text)) {
                let _ = validator.is_valid(Some(&user));
            }
        }
    }
});
