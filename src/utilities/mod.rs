pub mod array;
pub mod csv;
pub mod format;

pub use array::{array_search, to_char};
pub use csv::{csvstr_to_array, csvstr_to_f64_array};
pub use format::format;

use crate::models::common::{LinalgError, Result};

/// `Ok(())` when `condition` holds, otherwise `InvalidInput(message)`.
pub fn assert(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        log::debug!("assertion failed: {}", message);
        Err(LinalgError::InvalidInput(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert() {
        assert_eq!(assert(true, "unused"), Ok(()));
        assert_eq!(
            assert(1 > 2, "k must exceed 2"),
            Err(LinalgError::InvalidInput("k must exceed 2".to_string()))
        );
    }
}
