#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Catalog deserialization and validation should never panic
        if let Ok(catalog) = serde_yaml_ng::from_str::<arsenal::Catalog>(content) {
            let vocabulary = arsenal::Vocabulary::default();
            let _ = arsenal::validate_catalog(&catalog, &vocabulary, &[]);
        }
    }
});
