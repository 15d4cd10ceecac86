use std::fmt::Display;

/// Whether `needle` occurs in `haystack`.
pub fn array_search<T: PartialEq>(needle: &T, haystack: &[T]) -> bool {
    haystack.iter().any(|item| item == needle)
}

pub fn to_char<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}
