#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    InsufficientSpace { requested: usize, available: usize },
}
