//! Text form of the vector and quaternion types.
//!
//! Components are written separated by single spaces in x, y, z, w order.
//! Parsing accepts whitespace and/or commas as separators, optionally with
//! the whole list wrapped in parentheses or square brackets.

use crate::error::MathError;
use std::fmt;

pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            f.write_str(" ")?;
        }
        fmt::Display::fmt(component, f)?;
    }
    Ok(())
}

pub(crate) fn parse_components<const N: usize>(text: &str) -> Result<[f32; N], MathError> {
    let text = text.trim();
    let text = strip_delimiters(text, '(', ')')
        .or_else(|| strip_delimiters(text, '[', ']'))
        .unwrap_or(text);

    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != N {
        return Err(MathError::ComponentCount {
            expected: N,
            found: tokens.len(),
        });
    }

    let mut components = [0.0; N];
    for (index, (component, token)) in components.iter_mut().zip(tokens).enumerate() {
        *component = token
            .parse()
            .map_err(|source| MathError::InvalidComponent { index, source })?;
    }
    Ok(components)
}

fn strip_delimiters(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_accepts_whitespace_and_commas() {
        assert_eq!(parse_components::<3>("1 2.5 -3").unwrap(), [1.0, 2.5, -3.0]);
        assert_eq!(parse_components::<3>("1, 2.5,-3").unwrap(), [1.0, 2.5, -3.0]);
        assert_eq!(parse_components::<2>("  (4,\t5) ").unwrap(), [4.0, 5.0]);
        assert_eq!(parse_components::<2>("[4 5]").unwrap(), [4.0, 5.0]);
    }

    #[test]
    fn parsing_wrong_number_of_components_fails() {
        assert_eq!(
            parse_components::<3>("1 2"),
            Err(MathError::ComponentCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn parsing_garbage_component_reports_its_index() {
        let err = parse_components::<2>("1 x").unwrap_err();
        assert!(matches!(err, MathError::InvalidComponent { index: 1, .. }));
    }
}
