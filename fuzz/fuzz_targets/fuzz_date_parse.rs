#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Date parsing should reject malformed input without panicking
        if let Ok(date) = content.parse::<arsenal::FlexibleDate>() {
            // Display must round-trip what FromStr accepted
            let rendered = date.to_string();
            let reparsed: arsenal::FlexibleDate = rendered.parse().unwrap();
            assert_eq!(date, reparsed);
        }
    }
});
