use common::{common_test_setup, contents, digit_boundaries, PseudoRandom};
use logstream::{Append, LogStream};
use std::fmt::Debug;
use std::str::FromStr;

fn check_roundtrip<T>(value: T)
where
    T: Append + FromStr + PartialEq + Debug + Copy,
    <T as FromStr>::Err: Debug,
{
    let mut stream = LogStream::<64>::new();
    stream.push(value);
    let text = contents(&stream);
    assert_eq!(text.parse::<T>().unwrap(), value, "formatted as {:?}", text);
}

macro_rules! roundtrip_all {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            common_test_setup();
            for v in [<$t>::MIN, <$t>::MIN + 1, 0 as $t, 1 as $t, <$t>::MAX - 1, <$t>::MAX] {
                check_roundtrip(v);
            }
            for v in digit_boundaries() {
                check_roundtrip(v as $t);
            }
            for v in PseudoRandom::new(0x5EED).take(10_000) {
                check_roundtrip(v as $t);
            }
        }
    };
}

roundtrip_all!(roundtrip_i8, i8);
roundtrip_all!(roundtrip_u8, u8);
roundtrip_all!(roundtrip_i16, i16);
roundtrip_all!(roundtrip_u16, u16);
roundtrip_all!(roundtrip_i32, i32);
roundtrip_all!(roundtrip_u32, u32);
roundtrip_all!(roundtrip_i64, i64);
roundtrip_all!(roundtrip_u64, u64);
roundtrip_all!(roundtrip_isize, isize);
roundtrip_all!(roundtrip_usize, usize);

#[test]
fn matches_std_formatting() {
    common_test_setup();
    for v in PseudoRandom::new(42).take(10_000) {
        let v = v as i64;
        let mut stream = LogStream::<64>::new();
        stream.push(v);
        assert_eq!(contents(&stream), v.to_string());
    }
}

#[test]
fn concrete_values() {
    common_test_setup();
    let mut stream = LogStream::<256>::new();
    stream.push(0).push(' ').push(-1).push(' ').push(i32::MIN);
    assert_eq!(contents(&stream), "0 -1 -2147483648");
}
