#![no_main]

use libfuzzer_sys::fuzz_target;
use vecmath::{Bool3, Double4, Float3, Int2, UInt4};

fuzz_target!(|text: &str| {
    if let Ok(v) = text.parse::<Float3>() {
        let reparsed: Float3 = v.to_string().parse().unwrap();
        assert_eq!(reparsed.is_nan(), v.is_nan());
        assert!((reparsed.equal(&v) | v.is_nan()).all());
    }
    if let Ok(v) = text.parse::<Double4>() {
        let reparsed: Double4 = v.to_string().parse().unwrap();
        assert_eq!(reparsed.is_nan(), v.is_nan());
        assert!((reparsed.equal(&v) | v.is_nan()).all());
    }
    if let Ok(v) = text.parse::<Int2>() {
        assert_eq!(v.to_string().parse::<Int2>(), Ok(v));
    }
    if let Ok(v) = text.parse::<UInt4>() {
        assert_eq!(v.to_string().parse::<UInt4>(), Ok(v));
    }
    if let Ok(v) = text.parse::<Bool3>() {
        assert_eq!(v.to_string().parse::<Bool3>(), Ok(v));
    }
});
