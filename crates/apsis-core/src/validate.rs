//! Input shape validation.
//!
//! Pure checks run before the stateful or batch paths touch any shared
//! resource. Content validation is deliberately absent: a line that fits
//! the record length passes through byte-for-byte, and malformed content
//! is reported by the decoder with its own error.

use crate::error::ValidationError;

/// Fixed-width two-line element record length, in bytes.
pub const MAX_LINE_LEN: usize = 69;

/// Reject element lines longer than the fixed-width record.
pub fn validate_lines(line1: &str, line2: &str) -> Result<(), ValidationError> {
    for (index, line) in [line1, line2].into_iter().enumerate() {
        if line.len() > MAX_LINE_LEN {
            return Err(ValidationError::LineTooLong {
                line: index as u8 + 1,
                length: line.len(),
            });
        }
    }
    Ok(())
}

/// Reject empty batch requests and non-finite time entries.
pub fn validate_batch_times(times: &[f64]) -> Result<(), ValidationError> {
    if times.is_empty() {
        return Err(ValidationError::EmptyTimeList);
    }
    for (index, &value) in times.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteTime { index, value });
        }
    }
    Ok(())
}
