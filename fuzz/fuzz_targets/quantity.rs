#![no_main]

use eekit_core::{CircuitMode, parse_number, parse_quantity, reduce_network};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_number(s);
        if let Ok(v) = parse_quantity(s) {
            assert!(v.is_finite());
        }
        let values: Vec<&str> = s.split(',').collect();
        for mode in [CircuitMode::Series, CircuitMode::Parallel] {
            let ohms = reduce_network(values.as_slice(), mode);
            assert!(ohms >= 0.0);
        }
    }
});
