use crate::models::common::{LinalgError, Result};

/// Splits a comma-separated list, trimming whitespace around each
/// element. An empty or all-whitespace input yields no elements; inner
/// empty elements (`"a,,b"`) are kept.
pub fn csvstr_to_array(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Like [`csvstr_to_array`] but parses every element as `f64`.
pub fn csvstr_to_f64_array(input: &str) -> Result<Vec<f64>> {
    csvstr_to_array(input)
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                LinalgError::InvalidInput(format!("'{}' is not a valid number", token))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csvstr_to_array() {
        assert_eq!(csvstr_to_array("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(csvstr_to_array(" single "), vec!["single"]);
        assert_eq!(csvstr_to_array("a,,b"), vec!["a", "", "b"]);
        assert!(csvstr_to_array("").is_empty());
        assert!(csvstr_to_array("   ").is_empty());
    }

    #[test]
    fn test_csvstr_to_f64_array() {
        assert_eq!(csvstr_to_f64_array("1, -2.5,3e2"), Ok(vec![1.0, -2.5, 300.0]));
        assert_eq!(csvstr_to_f64_array(""), Ok(vec![]));
        assert_eq!(
            csvstr_to_f64_array("1, x"),
            Err(LinalgError::InvalidInput("'x' is not a valid number".to_string()))
        );
    }
}
