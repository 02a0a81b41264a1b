mod error;
mod stream;

pub use error::*;
pub use stream::*;
