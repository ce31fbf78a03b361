#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use schem_wire::ByteCursor;

#[derive(Arbitrary, Debug)]
enum Read {
    U8,
    I16,
    I32,
    I64,
    F64,
    Bytes(u16),
    ArrayLen(u8),
    String,
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    reads: Vec<Read>,
    data: &'a [u8],
}

// Fuzz target: ByteCursor reads in arbitrary order.
//
// A failed read must leave the position where it was.
fuzz_target!(|input: Input<'_>| {
    let mut cursor = ByteCursor::new(input.data);
    for read in input.reads {
        let before = cursor.position();
        let ok = match read {
            Read::U8 => cursor.read_u8().is_ok(),
            Read::I16 => cursor.read_i16().is_ok(),
            Read::I32 => cursor.read_i32().is_ok(),
            Read::I64 => cursor.read_i64().is_ok(),
            Read::F64 => cursor.read_f64().is_ok(),
            Read::Bytes(n) => cursor.read_bytes(usize::from(n)).is_ok(),
            Read::ArrayLen(width) => cursor.read_array_len(usize::from(width)).is_ok(),
            Read::String => cursor.read_string().is_ok(),
        };
        if !ok {
            assert_eq!(cursor.position(), before);
        }
        assert!(cursor.position() <= input.data.len());
    }
});
