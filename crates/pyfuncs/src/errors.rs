use thiserror::Error;

/// Bounds that would describe a range running backwards.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
#[error("range start {start} is past its end {end}")]
pub struct InvertedRangeError {
    pub start: usize,
    pub end: usize,
}

impl InvertedRangeError {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
