#![no_main]

use libfuzzer_sys::fuzz_target;

use trigsum_core::partition::plan;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let eps = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    // Keep plans small enough to walk.
    let eps = eps.abs().max(1e-6);
    let threads = usize::from(u16::from_le_bytes([data[8], data[9]]) % 512);

    let Ok(plan) = plan(eps, threads) else {
        return;
    };

    assert_eq!(plan.chunks.len(), threads);
    let mut next = 1;
    for chunk in &plan.chunks {
        assert_eq!(chunk.start_n, next);
        next = chunk.end_n + 1;
    }
    assert_eq!(next, plan.max_n + 1);
});
