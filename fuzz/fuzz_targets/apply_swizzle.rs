#![no_main]

use libfuzzer_sys::fuzz_target;
use vecmath::{Int3, Int4, Swizzle};

fuzz_target!(|input: (Int4, Int3, [u8; 3])| {
    let (vector, value, letters) = input;
    let Ok(pattern) = std::str::from_utf8(&letters) else {
        return;
    };
    let Ok(swizzle) = Swizzle::<3>::parse(pattern) else {
        return;
    };

    let mut written = vector;
    match swizzle.write(&mut written, &value) {
        Ok(()) => {
            assert_eq!(swizzle.read(&written), Ok(value));
            for index in 0..4 {
                if !swizzle.slots().contains(&vecmath::Slot::Component(index)) {
                    assert_eq!(written[index], vector[index]);
                }
            }
        }
        Err(_) => assert_eq!(written, vector),
    }
});
