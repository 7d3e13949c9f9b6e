use endianio::convert;
use endianio::ByteOrder;

const ORDERS: [ByteOrder; 2] = [ByteOrder::Big, ByteOrder::Little];

macro_rules! roundtrip {
    ($get:ident, $put:ident, $to:ident, $width:expr, $values:expr) => {
        let mut buf = [0u8; $width];
        for &order in &ORDERS {
            for &value in $values.iter() {
                convert::$put(&mut buf, 0, order, value);
                assert_eq!(convert::$get(&buf, 0, order), value);
                assert_eq!(convert::$to(value, order), buf);
            }
        }
    };
}

#[test]
fn roundtrip_i16() {
    roundtrip!(get_i16, put_i16, i16_to_bytes, 2, [i16::MIN, -1, 0, 1, 0x1234, i16::MAX]);
}

#[test]
fn roundtrip_u16() {
    roundtrip!(get_u16, put_u16, u16_to_bytes, 2, [0u16, 1, 0x1234, 0x8000, u16::MAX]);
}

#[test]
fn roundtrip_i32() {
    roundtrip!(get_i32, put_i32, i32_to_bytes, 4, [i32::MIN, -1, 0, 1, 0x12345678, i32::MAX]);
}

#[test]
fn roundtrip_u32() {
    roundtrip!(get_u32, put_u32, u32_to_bytes, 4, [0u32, 1, 0xdeadbeef, u32::MAX]);
}

#[test]
fn roundtrip_i64() {
    roundtrip!(
        get_i64,
        put_i64,
        i64_to_bytes,
        8,
        [i64::MIN, -1, 0, 1, 0x0123456789abcdef, i64::MAX]
    );
}

#[test]
fn roundtrip_u64() {
    roundtrip!(get_u64, put_u64, u64_to_bytes, 8, [0u64, 1, 0xfedcba9876543210, u64::MAX]);
}

#[test]
fn roundtrip_f32() {
    roundtrip!(
        get_f32,
        put_f32,
        f32_to_bytes,
        4,
        [0.0f32, 1.0, -1.0, f32::MIN_POSITIVE, f32::MAX, f32::INFINITY, f32::NEG_INFINITY]
    );
}

#[test]
fn roundtrip_f64() {
    roundtrip!(
        get_f64,
        put_f64,
        f64_to_bytes,
        8,
        [0.0f64, 1.0, -1.0, f64::MIN_POSITIVE, f64::MAX, f64::INFINITY, f64::NEG_INFINITY]
    );
}

#[test]
fn roundtrip_nan_bit_patterns() {
    let mut buf = [0u8; 8];
    for &order in &ORDERS {
        convert::put_f32(&mut buf, 0, order, f32::NAN);
        assert_eq!(convert::get_f32(&buf, 0, order).to_bits(), f32::NAN.to_bits());

        convert::put_f64(&mut buf, 0, order, f64::NAN);
        assert_eq!(convert::get_f64(&buf, 0, order).to_bits(), f64::NAN.to_bits());
    }
}

#[test]
fn roundtrip_single_byte_forms() {
    let mut buf = [0u8; 1];

    for &value in &[false, true] {
        convert::put_bool(&mut buf, 0, value);
        assert_eq!(convert::get_bool(&buf, 0), value);
        assert_eq!(convert::bool_to_bytes(value), buf);
    }

    for &value in &[i8::MIN, -1, 0, 1, i8::MAX] {
        convert::put_i8(&mut buf, 0, value);
        assert_eq!(convert::get_i8(&buf, 0), value);
        assert_eq!(convert::i8_to_bytes(value), buf);
    }

    for &value in &[0u8, 1, 0x80, u8::MAX] {
        convert::put_u8(&mut buf, 0, value);
        assert_eq!(convert::get_u8(&buf, 0), value);
        assert_eq!(convert::u8_to_bytes(value), buf);
    }
}

#[test]
fn bool_decodes_any_nonzero_byte() {
    assert!(!convert::get_bool(&[0x00], 0));
    assert!(convert::get_bool(&[0x01], 0));
    assert!(convert::get_bool(&[0x7f], 0));
    assert!(convert::get_bool(&[0xff], 0));
}

#[test]
fn known_byte_patterns() {
    let mut buf = [0u8; 4];

    convert::put_u32(&mut buf, 0, ByteOrder::Big, 0xdeadbeef);
    assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);

    convert::put_u32(&mut buf, 0, ByteOrder::Little, 0xdeadbeef);
    assert_eq!(buf, [0xef, 0xbe, 0xad, 0xde]);

    let mut buf = [0u8; 2];
    convert::put_i16(&mut buf, 0, ByteOrder::Big, 0x1234);
    assert_eq!(buf, [0x12, 0x34]);

    convert::put_i16(&mut buf, 0, ByteOrder::Little, 0x1234);
    assert_eq!(buf, [0x34, 0x12]);
}

#[test]
fn unsigned_reads_keep_the_full_range() {
    let buf = [0xff, 0xff, 0xff, 0xff];

    for &order in &ORDERS {
        assert_eq!(convert::get_u32(&buf, 0, order), 4294967295);
        assert_eq!(convert::get_i32(&buf, 0, order), -1);
        assert_eq!(convert::get_u16(&buf, 0, order), 65535);
        assert_eq!(convert::get_i16(&buf, 0, order), -1);
    }

    assert_eq!(convert::u32_to_bytes(4294967295, ByteOrder::Little), buf);
}

#[test]
fn sign_extension() {
    let buf = [0x80, 0x00];
    assert_eq!(convert::get_i16(&buf, 0, ByteOrder::Big), i16::MIN);
    assert_eq!(convert::get_u16(&buf, 0, ByteOrder::Big), 0x8000);
    assert_eq!(convert::get_i16(&buf, 0, ByteOrder::Little), 0x0080);
}

#[test]
fn orders_disagree_unless_palindromic() {
    let buf = [0x12, 0x34, 0x56, 0x78];
    assert_ne!(
        convert::get_u32(&buf, 0, ByteOrder::Big),
        convert::get_u32(&buf, 0, ByteOrder::Little)
    );

    let palindrome = [0xab, 0xab];
    assert_eq!(
        convert::get_u16(&palindrome, 0, ByteOrder::Big),
        convert::get_u16(&palindrome, 0, ByteOrder::Little)
    );
}

#[test]
fn char16_matches_u16() {
    let mut buf = [0u8; 2];
    for &order in &ORDERS {
        convert::put_char16(&mut buf, 0, order, 0xfeff);
        assert_eq!(convert::get_char16(&buf, 0, order), 0xfeff);
        assert_eq!(convert::get_u16(&buf, 0, order), 0xfeff);
        assert_eq!(convert::char16_to_bytes(0xfeff, order), buf);
    }
}

#[test]
fn offsets_are_respected() {
    let mut buf = [0u8; 8];
    convert::put_u16(&mut buf, 3, ByteOrder::Big, 0xcafe);
    assert_eq!(buf, [0, 0, 0, 0xca, 0xfe, 0, 0, 0]);
    assert_eq!(convert::get_u16(&buf, 3, ByteOrder::Big), 0xcafe);
}

#[test]
#[should_panic]
fn get_out_of_bounds_panics() {
    convert::get_u32(&[0u8; 4], 1, ByteOrder::Big);
}

#[test]
#[should_panic]
fn put_out_of_bounds_panics() {
    convert::put_u64(&mut [0u8; 8], 1, ByteOrder::Little, 0);
}

#[test]
#[should_panic]
fn get_empty_buffer_panics() {
    convert::get_u8(&[], 0);
}
