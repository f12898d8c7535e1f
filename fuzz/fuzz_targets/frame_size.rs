#![no_main]

use capture_formats::registry;
use capture_formats::BitDepth;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let width = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let height = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let registry = registry();
    let desc = &registry.formats()[data[8] as usize % registry.len()];

    let size = desc.byte_size_for_frame(width, height);
    if let (Ok(size), BitDepth::Fixed(bits)) = (size, desc.depth) {
        // Never undersized.
        assert!(size as u128 * 8 >= width as u128 * height as u128 * bits as u128);
    }
});
