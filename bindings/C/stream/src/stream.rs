use crate::LogStreamStatus;
use core::ffi::{c_char, c_void, CStr};
use log::warn;
use logstream::{LogStream, SMALL_BUFFER};

pub type LogStreamHandle = *mut c_void;

type CLogStream = LogStream<SMALL_BUFFER>;

unsafe fn stream_mut<'a>(handle: LogStreamHandle) -> Option<&'a mut CLogStream> {
    (handle as *mut CLogStream).as_mut()
}

unsafe fn stream_ref<'a>(handle: LogStreamHandle) -> Option<&'a CLogStream> {
    (handle as *const CLogStream).as_ref()
}

// Formats `value` into the stream behind `handle`, or reports a null handle
unsafe fn push<T: logstream::Append>(handle: LogStreamHandle, caller: &str, value: T) -> LogStreamStatus {
    match stream_mut(handle) {
        Some(stream) => {
            stream.push(value);
            LogStreamStatus::Success
        }
        None => {
            warn!("{}() called with a NULL handle", caller);
            LogStreamStatus::InvalidArguments
        }
    }
}

/// Allocates an empty stream. Free it with logstream_free().
#[no_mangle]
pub extern "C" fn logstream_new() -> LogStreamHandle {
    Box::into_raw(Box::new(CLogStream::new())) as LogStreamHandle
}

/// Frees a stream.
/// # Safety
/// The handle must be NULL or a handle returned by logstream_new(), and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn logstream_free(handle: LogStreamHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut CLogStream));
    }
}

/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_append_bool(handle: LogStreamHandle, value: bool) -> LogStreamStatus {
    push(handle, "logstream_append_bool", value)
}

/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_append_int64(handle: LogStreamHandle, value: i64) -> LogStreamStatus {
    push(handle, "logstream_append_int64", value)
}

/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_append_uint64(handle: LogStreamHandle, value: u64) -> LogStreamStatus {
    push(handle, "logstream_append_uint64", value)
}

/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_append_double(handle: LogStreamHandle, value: f64) -> LogStreamStatus {
    push(handle, "logstream_append_double", value)
}

/// Appends a single byte, typically an ASCII character.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_append_char(handle: LogStreamHandle, value: c_char) -> LogStreamStatus {
    push(handle, "logstream_append_char", &[value as u8])
}

/// Appends "0x" followed by the address in uppercase hexadecimal. The pointer
/// is never dereferenced.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_append_ptr(handle: LogStreamHandle, value: *const c_void) -> LogStreamStatus {
    push(handle, "logstream_append_ptr", value)
}

/// Appends a NUL-terminated string, truncated to the space left.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new(), and
/// the string must be NULL or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn logstream_append_str(handle: LogStreamHandle, value: *const c_char) -> LogStreamStatus {
    if value.is_null() {
        warn!("logstream_append_str() called with a NULL string");
        return LogStreamStatus::InvalidArguments;
    }
    push(handle, "logstream_append_str", CStr::from_ptr(value))
}

/// Appends `len` bytes, truncated to the space left.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new(), and
/// `data` must point to at least `len` readable bytes (it can be NULL if `len` is 0).
#[no_mangle]
pub unsafe extern "C" fn logstream_append_bytes(
    handle: LogStreamHandle,
    data: *const u8,
    len: usize,
) -> LogStreamStatus {
    if len == 0 {
        return push(handle, "logstream_append_bytes", &b""[..]);
    }
    if data.is_null() {
        warn!("logstream_append_bytes() called with NULL data");
        return LogStreamStatus::InvalidArguments;
    }
    push(handle, "logstream_append_bytes", core::slice::from_raw_parts(data, len))
}

/// Appends `len` bytes if they all fit, otherwise leaves the stream untouched
/// and returns LogStreamStatus::BufferInsufficientSpace.
/// # Safety
/// Same requirements as logstream_append_bytes().
#[no_mangle]
pub unsafe extern "C" fn logstream_try_append_bytes(
    handle: LogStreamHandle,
    data: *const u8,
    len: usize,
) -> LogStreamStatus {
    let stream = match stream_mut(handle) {
        Some(s) => s,
        None => {
            warn!("logstream_try_append_bytes() called with a NULL handle");
            return LogStreamStatus::InvalidArguments;
        }
    };
    let data = if len == 0 {
        &[][..]
    } else if data.is_null() {
        warn!("logstream_try_append_bytes() called with NULL data");
        return LogStreamStatus::InvalidArguments;
    } else {
        core::slice::from_raw_parts(data, len)
    };
    match stream.buffer_mut().try_append(data) {
        Ok(()) => LogStreamStatus::Success,
        Err(e) => LogStreamStatus::from(e),
    }
}

/// Returns a pointer to the formatted bytes, and stores their count in `len`.
/// The data is not NUL-terminated, and the pointer is invalidated by any
/// other call on the same handle. Returns NULL on invalid arguments.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new(), and
/// `len` must be NULL or point to writable memory.
#[no_mangle]
pub unsafe extern "C" fn logstream_data(handle: LogStreamHandle, len: *mut usize) -> *const u8 {
    let stream = match stream_ref(handle) {
        Some(s) => s,
        None => {
            warn!("logstream_data() called with a NULL handle");
            return core::ptr::null();
        }
    };
    if len.is_null() {
        warn!("logstream_data() called without a length output pointer");
        return core::ptr::null();
    }
    let data = stream.buffer().as_bytes();
    *len = data.len();
    data.as_ptr()
}

/// Returns the number of formatted bytes, 0 for a NULL handle.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_length(handle: LogStreamHandle) -> usize {
    stream_ref(handle).map_or(0, |s| s.buffer().len())
}

/// Returns the number of bytes that can still be appended, 0 for a NULL handle.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_available(handle: LogStreamHandle) -> usize {
    stream_ref(handle).map_or(0, |s| s.buffer().available())
}

/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_reset(handle: LogStreamHandle) -> LogStreamStatus {
    match stream_mut(handle) {
        Some(stream) => {
            stream.reset_buffer();
            LogStreamStatus::Success
        }
        None => {
            warn!("logstream_reset() called with a NULL handle");
            LogStreamStatus::InvalidArguments
        }
    }
}

/// Returns the formatted bytes as a NUL-terminated string, for debugging. The
/// string stops at the first NUL byte in the data, and is invalidated by any
/// other call on the same handle. Returns NULL for a NULL handle.
/// # Safety
/// The handle must be NULL or a live handle returned by logstream_new().
#[no_mangle]
pub unsafe extern "C" fn logstream_debug_string(handle: LogStreamHandle) -> *const c_char {
    match stream_mut(handle) {
        Some(stream) => stream.buffer_mut().debug_view().as_ptr(),
        None => {
            warn!("logstream_debug_string() called with a NULL handle");
            core::ptr::null()
        }
    }
}
