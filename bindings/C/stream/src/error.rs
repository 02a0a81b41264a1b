use logstream::BufferError;

#[repr(u64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStreamStatus {
    // 0x0 : Binding error
    Success = 0,
    InvalidArguments = 1,
    // 0x1000 : BufferError
    BufferInsufficientSpace = 0x1001,
}

impl From<BufferError> for LogStreamStatus {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::InsufficientSpace { .. } => LogStreamStatus::BufferInsufficientSpace,
        }
    }
}
