use thiserror::Error;

/// Errors reported by [`ScrollView`](crate::ScrollView) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("cell index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
