#![no_main]

use libfuzzer_sys::fuzz_target;

use trigsum_core::term::term_range_sum;

fuzz_target!(|data: &[u8]| {
    if data.len() < 20 {
        return;
    }
    let x = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let start = u64::from(u32::from_le_bytes([data[8], data[9], data[10], data[11]]));
    let len = u64::from(u16::from_le_bytes([data[12], data[13]]));
    let eps = f64::from(u32::from_le_bytes([data[14], data[15], data[16], data[17]])) / f64::from(u32::MAX);

    // Should not panic, and an accepted range always has a finite sum
    if let Ok(sum) = term_range_sum(x, start, start.saturating_add(len), eps) {
        assert!(sum.is_finite());
    }
});
