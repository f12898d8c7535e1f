#![no_main]

use capture_formats::registry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let registry = registry();

    for chunk in data.chunks_exact(4) {
        let code = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);

        let _ = registry.lookup_by_raw_id(code);
        let _ = registry.lookup_by_legacy_code(code as i32);
        if let Some(desc) = registry.lookup_by_modern_code(code) {
            assert_eq!(desc.modern_code_raw(), code);
            assert!(!desc.is_deprecated());
        }
    }
});
