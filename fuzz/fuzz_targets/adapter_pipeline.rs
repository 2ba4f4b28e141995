#![no_main]

use cursorkit::prelude::*;
use libfuzzer_sys::fuzz_target;

type Cursor<'a> = Box<dyn Forward<Item = u8> + 'a>;

// First byte picks the stages, the rest is the source data
fuzz_target!(|data: &[u8]| {
    let Some((&plan, source)) = data.split_first() else {
        return;
    };

    let mut iter: Cursor<'_> = Box::new(SliceIterator::new(source));
    let mut bits = plan;
    for _ in 0..4 {
        let arg = bits >> 3;
        iter = match bits & 0b111 {
            0 => Box::new(iter.take_n(arg as usize)),
            1 => Box::new(iter.drop_n(arg as usize)),
            2 => Box::new(iter.take_if(move |x| *x > arg)),
            3 => Box::new(iter.drop_while(move |x| *x < arg)),
            4 => Box::new(iter.strided(arg as usize % 4)),
            5 => Box::new(iter.replace_if(move |x| *x == arg, 0)),
            6 => Box::new(iter.transform(move |x: u8| x.checked_add(arg).ok_or(std::fmt::Error))),
            _ => Box::new(iter.take_while(move |x| *x != arg)),
        };
        bits = bits.rotate_left(3);
    }

    let mut emitted = 0;
    assert!(iter.is_begin());
    while iter.next() {
        assert_eq!(iter.index(), Some(emitted));
        assert_eq!(iter.get(), iter.get());
        emitted += 1;
    }
    assert!(iter.is_end());
    assert_eq!(iter.size(), Some(emitted));
    assert!(!iter.next());

    // A failed stage is reported once, at the outer ordinal it cut off
    if let Some(fault) = iter.take_fault() {
        assert_eq!(fault.index, emitted);
    }
    assert!(iter.take_fault().is_none());
});
