// ============================================================================
// Normalizer
// Aligns two literals to a common integer and fractional width
// ============================================================================
//
// After alignment both operands carry an explicit sign, the same number of
// integer digits (left-padded with zeros) and the same number of fractional
// digits (right-padded with zeros). Comparing the unsigned digit sequences
// position by position is then the same as comparing magnitudes.

use super::errors::NumericResult;
use super::literal::{DecimalLiteral, Digits};
use std::iter;

/// Two literals padded to identical digit-group widths.
///
/// Only [`align`] builds one, so the equal-width invariant always holds.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    lhs: DecimalLiteral,
    rhs: DecimalLiteral,
}

impl AlignedPair {
    #[inline]
    pub fn lhs(&self) -> &DecimalLiteral {
        &self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &DecimalLiteral {
        &self.rhs
    }

    /// Shared number of integer digits.
    #[inline]
    pub fn integer_width(&self) -> usize {
        self.lhs.integer_width()
    }

    /// Shared number of fractional digits.
    #[inline]
    pub fn fraction_width(&self) -> usize {
        self.lhs.fraction_width()
    }

    pub fn into_parts(self) -> (DecimalLiteral, DecimalLiteral) {
        (self.lhs, self.rhs)
    }
}

/// Zero-pad `literal` out to the given widths.
fn pad(literal: &DecimalLiteral, integer_width: usize, fraction_width: usize) -> DecimalLiteral {
    let mut integer = Digits::with_capacity(integer_width);
    integer.extend(iter::repeat(0).take(integer_width - literal.integer_width()));
    integer.extend_from_slice(literal.integer_digits());

    let mut fraction = Digits::with_capacity(fraction_width);
    fraction.extend_from_slice(literal.fraction_digits());
    fraction.resize(fraction_width, 0);

    DecimalLiteral::from_parts(literal.sign(), integer, fraction)
}

/// Pad `a` and `b` to the wider of their integer parts and the wider of their
/// fractional parts.
pub fn align(a: &DecimalLiteral, b: &DecimalLiteral) -> AlignedPair {
    let integer_width = a.integer_width().max(b.integer_width());
    let fraction_width = a.fraction_width().max(b.fraction_width());

    AlignedPair {
        lhs: pad(a, integer_width, fraction_width),
        rhs: pad(b, integer_width, fraction_width),
    }
}

/// Text form of [`align`]: validate both literals and return their aligned,
/// explicitly signed renderings.
///
/// # Errors
/// `InvalidLiteral` if either input fails the recognizer.
///
/// # Example
/// ```
/// use text_decimal::numeric::align_text;
///
/// let (a, b) = align_text("1.5", "-12").unwrap();
/// assert_eq!(a, "+01.5");
/// assert_eq!(b, "-12.0");
/// ```
pub fn align_text(a: &str, b: &str) -> NumericResult<(String, String)> {
    let lhs: DecimalLiteral = a.parse()?;
    let rhs: DecimalLiteral = b.parse()?;

    let pair = align(&lhs, &rhs);
    tracing::trace!(
        integer_width = pair.integer_width(),
        fraction_width = pair.fraction_width(),
        "aligned literals"
    );

    Ok((pair.lhs.to_string(), pair.rhs.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{NumericError, Rejection};

    fn lit(s: &str) -> DecimalLiteral {
        s.parse().unwrap()
    }

    #[test]
    fn test_align_fraction_widths() {
        let (a, b) = align_text("1.5", "2.25").unwrap();
        assert_eq!(a, "+1.50");
        assert_eq!(b, "+2.25");
    }

    #[test]
    fn test_align_integer_widths() {
        let (a, b) = align_text("-0001.005", "12").unwrap();
        assert_eq!(a, "-0001.005");
        assert_eq!(b, "+0012.000");
    }

    #[test]
    fn test_no_separator_without_fraction() {
        let (a, b) = align_text("9", "1").unwrap();
        assert_eq!(a, "+9");
        assert_eq!(b, "+1");
    }

    #[test]
    fn test_widths_match() {
        let pair = align(&lit("123.4"), &lit("-5.6789"));
        assert_eq!(pair.integer_width(), 3);
        assert_eq!(pair.fraction_width(), 4);
        assert_eq!(pair.lhs().integer_width(), pair.rhs().integer_width());
        assert_eq!(pair.lhs().fraction_width(), pair.rhs().fraction_width());
        assert_eq!(pair.lhs().to_string().len(), pair.rhs().to_string().len());
    }

    #[test]
    fn test_padding_preserves_value() {
        let a = lit("1.5");
        let b = lit("-300.25");
        let (pa, pb) = align(&a, &b).into_parts();
        assert_eq!(pa, a);
        assert_eq!(pb, b);
        assert_eq!(pa.sign(), a.sign());
        assert_eq!(pb.sign(), b.sign());
    }

    #[test]
    fn test_align_rejects_invalid() {
        assert_eq!(
            align_text("1", ".5"),
            Err(NumericError::InvalidLiteral(Rejection::MissingDigit {
                position: 0
            }))
        );
        assert!(align_text("", "1").is_err());
    }
}
