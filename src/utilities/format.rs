use std::fmt::Display;

use crate::models::common::{LinalgError, Result};

/// Substitutes each `%` in `template` with the next argument, in order.
/// `%%` produces a literal `%`. The number of placeholders must equal the
/// number of arguments.
pub fn format<T: Display>(template: &str, args: &[T]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut args_iter = args.iter();
    let mut used = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        let arg = args_iter.next().ok_or_else(|| {
            LinalgError::InvalidInput(format!(
                "format template has more placeholders than the {} argument(s) given",
                args.len()
            ))
        })?;
        out.push_str(&arg.to_string());
        used += 1;
    }

    if used != args.len() {
        return Err(LinalgError::InvalidInput(format!(
            "format template has {} placeholder(s) but {} argument(s) were given",
            used,
            args.len()
        )));
    }
    Ok(out)
}
