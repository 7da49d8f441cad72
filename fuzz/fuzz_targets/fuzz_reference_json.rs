#![no_main]

use libfuzzer_sys::fuzz_target;
use modpack::infrastructure::{parse_entries, render_reference};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Enumeration parsing and rendering must never panic
        if let Ok(entries) = parse_entries(std::path::Path::new("enum.json"), content) {
            let _ = render_reference("Fuzz", &entries);
        }
    }
});
