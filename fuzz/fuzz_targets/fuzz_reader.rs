#![no_main]
use rge::{FieldReader, LengthPrefix};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let mut reader = FieldReader::new(rest);
    for op in std::iter::repeat(selector).take(64) {
        let before = reader.position();
        let ok = match op % 5 {
            0 => reader.read_u32().is_ok(),
            1 => reader.read_prefixed(LengthPrefix::U16).is_ok(),
            2 => reader.read_prefixed_str(LengthPrefix::U32).is_ok(),
            3 => reader.read_fixed_str(usize::from(op)).is_ok(),
            _ => reader.read_tag().is_ok(),
        };

        assert!(reader.position() <= rest.len());
        if !ok {
            assert_eq!(reader.position(), before);
            break;
        }
    }
});
