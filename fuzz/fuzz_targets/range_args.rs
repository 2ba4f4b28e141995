#![no_main]

use cursorkit::{prelude::*, util::Numeric};
use libfuzzer_sys::fuzz_target;

/// Longest prefix drained per input
const HEAD: usize = 1024;

fn check<T: Numeric>(args: &[T]) {
    // Malformed or uncountable arguments must be rejected, never panic
    let Ok(range) = Range::from_args(args) else {
        return;
    };

    let Some(size) = range.size() else {
        panic!("range without a size");
    };
    let stop = range.stop();

    // Seek straight to the last element instead of draining the whole range
    let mut tail = range.clone();
    if size > 0 {
        assert!(tail.next_n(size));
        assert_eq!(tail.get(), stop);
        assert!(tail.is_last());
    }
    assert!(!tail.next());

    let head = range.take_n(HEAD).materialize();
    assert_eq!(head.len(), size.min(HEAD));
    assert!(head.windows(2).all(|pair| pair[0] <= pair[1]));
    if head.len() == size {
        assert_eq!(head.last().copied(), stop);
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    match width % 3 {
        0 => {
            let args: Vec<i64> = rest
                .chunks_exact(8)
                .take(4)
                .filter_map(|c| c.try_into().ok().map(i64::from_le_bytes))
                .collect();
            check(&args);
        },
        1 => {
            let args: Vec<u64> = rest
                .chunks_exact(8)
                .take(4)
                .filter_map(|c| c.try_into().ok().map(u64::from_le_bytes))
                .collect();
            check(&args);
        },
        _ => {
            let args: Vec<f64> = rest
                .chunks_exact(8)
                .take(4)
                .filter_map(|c| c.try_into().ok().map(f64::from_le_bytes))
                .collect();
            check(&args);
        },
    }
});
