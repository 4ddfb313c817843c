// ============================================================================
// Summation Engine
// Digit-wise addition and subtraction over aligned decimal literals
// ============================================================================
//
// Same signs: schoolbook addition right-to-left with a 0/1 carry; a final
// carry becomes a new most significant digit and the shared sign is kept.
//
// Different signs: subtract the smaller magnitude from the larger with
// borrow propagation; the result takes the larger operand's sign. Equal
// magnitudes give positive zero.
//
// Results keep the zero-padded width of the operands (plus at most one
// carry digit). Use `DecimalLiteral::trimmed` for a compact form.

use super::errors::NumericResult;
use super::literal::{DecimalLiteral, Digits, Sign};
use super::normalizer::{align, AlignedPair};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// All digits of an aligned literal, integer part first, separator skipped.
#[inline]
fn all_digits(literal: &DecimalLiteral) -> impl DoubleEndedIterator<Item = &u8> {
    literal
        .integer_digits()
        .iter()
        .chain(literal.fraction_digits().iter())
}

/// `lhs + rhs` over magnitudes. Output may be one digit longer than the inputs.
fn add_magnitudes(lhs: &DecimalLiteral, rhs: &DecimalLiteral) -> Digits {
    let width = lhs.integer_width() + lhs.fraction_width();
    let mut out = Digits::with_capacity(width + 1);
    let mut carry = 0u8;

    for (&a, &b) in all_digits(lhs).rev().zip(all_digits(rhs).rev()) {
        let sum = a + b + carry;
        carry = sum / 10;
        out.push(sum % 10);
    }
    if carry != 0 {
        out.push(carry);
    }

    out.reverse();
    out
}

/// `larger - smaller` over magnitudes. Requires `|larger| >= |smaller|`.
fn subtract_magnitudes(larger: &DecimalLiteral, smaller: &DecimalLiteral) -> Digits {
    let width = larger.integer_width() + larger.fraction_width();
    let mut out = Digits::with_capacity(width);
    let mut borrow = 0i8;

    for (&a, &b) in all_digits(larger).rev().zip(all_digits(smaller).rev()) {
        let mut diff = a as i8 - b as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    debug_assert_eq!(borrow, 0, "borrow past the most significant digit");

    out.reverse();
    out
}

/// Magnitude order of two aligned literals.
///
/// Plain lexicographic digit comparison, valid because widths are equal.
fn cmp_aligned(lhs: &DecimalLiteral, rhs: &DecimalLiteral) -> Ordering {
    lhs.integer_digits()
        .cmp(rhs.integer_digits())
        .then_with(|| lhs.fraction_digits().cmp(rhs.fraction_digits()))
}

/// Exact sum of an aligned pair, in the same zero-padded form.
pub fn combine(pair: &AlignedPair) -> DecimalLiteral {
    let (lhs, rhs) = (pair.lhs(), pair.rhs());
    debug_assert_eq!(lhs.integer_width(), rhs.integer_width());
    debug_assert_eq!(lhs.fraction_width(), rhs.fraction_width());

    let (sign, mut digits) = if lhs.sign() == rhs.sign() {
        (lhs.sign(), add_magnitudes(lhs, rhs))
    } else {
        match cmp_aligned(lhs, rhs) {
            Ordering::Greater => (lhs.sign(), subtract_magnitudes(lhs, rhs)),
            Ordering::Less => (rhs.sign(), subtract_magnitudes(rhs, lhs)),
            Ordering::Equal => (Sign::Positive, subtract_magnitudes(lhs, rhs)),
        }
    };

    let split = digits.len() - pair.fraction_width();
    let fraction: Digits = digits.drain(split..).collect();
    DecimalLiteral::from_parts(sign, digits, fraction)
}

fn parse_operand(text: &str, operand: &'static str) -> NumericResult<DecimalLiteral> {
    text.parse().map_err(|error| {
        tracing::warn!(operand, text, %error, "rejected operand");
        error
    })
}

/// Exact signed sum of two decimal literals, as canonical text.
///
/// Both inputs are re-validated; the result is explicitly signed and
/// zero-padded to the wider operand's widths.
///
/// # Errors
/// `InvalidLiteral` if either input fails the recognizer.
///
/// # Example
/// ```
/// use text_decimal::numeric::add;
///
/// assert_eq!(add("1.5", "2.25").unwrap(), "+3.75");
/// assert_eq!(add("3", "-5").unwrap(), "-2");
/// assert!(add("5.", "1").is_err());
/// ```
pub fn add(lhs: &str, rhs: &str) -> NumericResult<String> {
    let a = parse_operand(lhs, "lhs")?;
    let b = parse_operand(rhs, "rhs")?;

    let sum = combine(&align(&a, &b));
    tracing::debug!(lhs, rhs, result = %sum, "added literals");

    Ok(sum.to_string())
}

/// Exact signed difference `lhs - rhs`, computed as `lhs + (-rhs)`.
///
/// # Errors
/// `InvalidLiteral` if either input fails the recognizer.
pub fn subtract(lhs: &str, rhs: &str) -> NumericResult<String> {
    let a = parse_operand(lhs, "lhs")?;
    let b = parse_operand(rhs, "rhs")?;

    let difference = combine(&align(&a, &-b));
    tracing::debug!(lhs, rhs, result = %difference, "subtracted literals");

    Ok(difference.to_string())
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for DecimalLiteral {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        combine(&align(&self, &rhs))
    }
}

impl<'a> Add<&'a DecimalLiteral> for &'a DecimalLiteral {
    type Output = DecimalLiteral;

    #[inline]
    fn add(self, rhs: &'a DecimalLiteral) -> Self::Output {
        combine(&align(self, rhs))
    }
}

impl AddAssign<&DecimalLiteral> for DecimalLiteral {
    fn add_assign(&mut self, rhs: &DecimalLiteral) {
        *self = combine(&align(self, rhs));
    }
}

impl Sub for DecimalLiteral {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Sum for DecimalLiteral {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DecimalLiteral::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a DecimalLiteral> for DecimalLiteral {
    fn sum<I: Iterator<Item = &'a DecimalLiteral>>(iter: I) -> Self {
        iter.fold(DecimalLiteral::zero(), |mut acc, x| {
            acc += x;
            acc
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
