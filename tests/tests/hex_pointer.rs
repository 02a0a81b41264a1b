use common::{common_test_setup, contents, PseudoRandom};
use logstream::LogStream;

fn pointer_text(address: usize) -> String {
    let mut stream = LogStream::<64>::new();
    stream.push(address as *const u8);
    contents(&stream)
}

#[test]
fn beef() {
    common_test_setup();
    assert_eq!(pointer_text(0xBEEF), "0xBEEF");
}

#[test]
fn shortest_uppercase_roundtrip() {
    common_test_setup();
    let samples = [0, 1, 0xF, 0x10, 0xFF, 0x100, usize::MAX, usize::MAX >> 4];
    let random = PseudoRandom::new(0xADD2E55).take(10_000).map(|v| v as usize);
    for address in samples.into_iter().chain(random) {
        let text = pointer_text(address);
        let digits = text.strip_prefix("0x").expect("missing 0x prefix");
        assert!(!digits.is_empty());
        assert!(
            digits == "0" || !digits.starts_with('0'),
            "leading zero in {}",
            text
        );
        assert!(digits.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
        assert_eq!(usize::from_str_radix(digits, 16).unwrap(), address);
    }
}

#[test]
fn real_references() {
    common_test_setup();
    let value = 17u32;
    let mut stream = LogStream::<64>::new();
    stream.push(&value as *const u32);
    // {:#X} also prints a lowercase "0x" prefix
    assert_eq!(contents(&stream), format!("{:#X}", &value as *const u32 as usize));
}
