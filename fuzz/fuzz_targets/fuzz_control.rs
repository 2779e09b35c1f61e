#![no_main]

use libfuzzer_sys::fuzz_target;

use trigsum_core::control::{analytical_sum, control_value};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let x = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    // Either a domain error or a finite value, and both functions agree on which
    match (control_value(x), analytical_sum(x)) {
        (Ok(control), Ok(analytical)) => {
            assert!(control.is_finite());
            assert!(analytical.is_finite());
        }
        (Err(_), Err(_)) => {}
        (c, a) => panic!("control {c:?} and analytical {a:?} disagree at x = {x}"),
    }
});
