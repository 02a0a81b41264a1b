use common::{common_test_setup, contents, fill_until_available};
use logstream::{Append, Fmt, LogStream, MAX_NUMERIC_SIZE, SMALL_BUFFER};

fn assert_dropped<T: Append + Copy>(value: T) {
    let mut stream = LogStream::<256>::new();
    fill_until_available(&mut stream, MAX_NUMERIC_SIZE - 1);
    let before = stream.buffer().clone();
    stream.push(value);
    assert_eq!(stream.buffer().len(), before.len());
    assert_eq!(stream.buffer(), &before);
}

fn assert_written<T: Append + Copy>(value: T) {
    let mut stream = LogStream::<256>::new();
    fill_until_available(&mut stream, MAX_NUMERIC_SIZE);
    let before = stream.buffer().len();
    stream.push(value);
    assert!(stream.buffer().len() > before);
}

#[test]
fn numeric_fields_need_full_width() {
    common_test_setup();
    assert_dropped(0i8);
    assert_dropped(0u16);
    assert_dropped(1i32);
    assert_dropped(1u32);
    assert_dropped(i64::MIN);
    assert_dropped(u64::MAX);
    assert_dropped(7isize);
    assert_dropped(7usize);
    assert_dropped(1.5f32);
    assert_dropped(0.1f64);
    assert_dropped(0xBEEF as *const u8);
    assert_dropped(0xBEEF as *mut u8);
}

#[test]
fn numeric_fields_written_at_full_width() {
    common_test_setup();
    assert_written(i64::MIN);
    assert_written(u64::MAX);
    assert_written(f64::MIN);
    assert_written(usize::MAX as *const u8);
}

#[test]
fn later_fields_still_written() {
    common_test_setup();
    let mut stream = LogStream::<64>::new();
    fill_until_available(&mut stream, 10);
    stream.push(12345).push("|").push(true);
    assert!(contents(&stream).ends_with(".|1"));
}

#[test]
fn unbounded_string_truncates() {
    common_test_setup();
    let mut stream = LogStream::<64>::new();
    fill_until_available(&mut stream, 2);
    let before = stream.buffer().len();
    stream.push("test");
    assert_eq!(stream.buffer().len(), before + 2);
    assert!(contents(&stream).ends_with("te"));
    assert_eq!(stream.buffer().available(), 0);
    // Nothing can be added any more, nothing breaks either
    stream.push("more").push('x').push(1).push(Fmt::new(format_args!("{}", 2)));
    assert_eq!(stream.buffer().len(), before + 2);
}

#[test]
fn full_line_of_default_size() {
    common_test_setup();
    let mut stream: LogStream = LogStream::new();
    let chunk = "0123456789";
    for _ in 0..SMALL_BUFFER {
        stream.push(chunk);
    }
    assert_eq!(stream.buffer().len(), SMALL_BUFFER - 1);
    assert_eq!(stream.buffer_mut().debug_view().to_bytes().len(), SMALL_BUFFER - 1);
}
