// ============================================================================
// Decimal Literal
// Tagged sign/digits representation of an arbitrary-precision decimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::recognizer::{self, Rejection, SEPARATOR};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::Neg;
use std::str::FromStr;

/// Digit buffer. Each element is a digit value in `0..=9`, most significant first.
///
/// Literals up to 24 digits per part stay inline.
pub(crate) type Digits = SmallVec<[u8; 24]>;

/// Largest scale `rust_decimal::Decimal` can carry.
const MAX_DECIMAL_SCALE: usize = 28;

// ============================================================================
// Sign
// ============================================================================

/// Sign of a decimal literal. Unsigned input text is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// The explicit sign character used in canonical output.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }

    /// The opposite sign.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

// ============================================================================
// Decimal Literal
// ============================================================================

/// A signed decimal number held as text digits, never as a binary float.
///
/// Precision is bounded only by memory. Equality and ordering are numeric:
/// `"1.5"`, `"+001.500"` compare equal, as do `"+0"` and `"-0"`.
///
/// # Example
/// ```
/// use text_decimal::numeric::DecimalLiteral;
///
/// let a: DecimalLiteral = "1.5".parse().unwrap();
/// let b: DecimalLiteral = "2.25".parse().unwrap();
/// assert_eq!((a + b).to_string(), "+3.75");
/// ```
#[derive(Clone)]
pub struct DecimalLiteral {
    sign: Sign,
    integer: Digits,
    fraction: Digits,
}

impl DecimalLiteral {
    /// Assemble a literal from already-checked parts.
    pub(crate) fn from_parts(sign: Sign, integer: Digits, fraction: Digits) -> Self {
        debug_assert!(!integer.is_empty(), "integer part needs at least one digit");
        debug_assert!(
            integer.iter().chain(fraction.iter()).all(|&d| d <= 9),
            "digit out of range"
        );
        Self {
            sign,
            integer,
            fraction,
        }
    }

    /// Positive zero, `+0`.
    pub fn zero() -> Self {
        Self::from_parts(Sign::Positive, SmallVec::from_slice(&[0]), Digits::new())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The sign as written (or `Positive` if none was written).
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer digit values, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    /// Fractional digit values, most significant first. Empty if no separator.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction
    }

    #[inline]
    pub fn integer_width(&self) -> usize {
        self.integer.len()
    }

    #[inline]
    pub fn fraction_width(&self) -> usize {
        self.fraction.len()
    }

    /// True if every digit is zero, regardless of sign.
    pub fn is_zero(&self) -> bool {
        self.integer.iter().chain(self.fraction.iter()).all(|&d| d == 0)
    }

    /// True for values strictly below zero. `-0` is not negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// Same digits, positive sign.
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            ..self.clone()
        }
    }

    /// Copy with leading integer zeros and trailing fractional zeros removed.
    ///
    /// One integer digit is always kept. Zero trims to `+0`.
    pub fn trimmed(&self) -> Self {
        let leading = self
            .integer
            .iter()
            .take_while(|&&d| d == 0)
            .count()
            .min(self.integer.len() - 1);
        let trailing = self.fraction.iter().rev().take_while(|&&d| d == 0).count();
        let sign = if self.is_zero() {
            Sign::Positive
        } else {
            self.sign
        };

        Self::from_parts(
            sign,
            SmallVec::from_slice(&self.integer[leading..]),
            SmallVec::from_slice(&self.fraction[..self.fraction.len() - trailing]),
        )
    }

    /// Compare absolute values, ignoring sign and zero padding.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let significant = |digits: &[u8]| -> usize {
            digits.iter().position(|&d| d != 0).unwrap_or(digits.len())
        };
        let a_int = &self.integer[significant(&self.integer)..];
        let b_int = &other.integer[significant(&other.integer)..];

        let meaningful = |digits: &[u8]| -> usize {
            digits.len() - digits.iter().rev().take_while(|&&d| d == 0).count()
        };
        let a_frac = &self.fraction[..meaningful(&self.fraction)];
        let b_frac = &other.fraction[..meaningful(&other.fraction)];

        a_int
            .len()
            .cmp(&b_int.len())
            .then_with(|| a_int.cmp(b_int))
            .then_with(|| a_frac.cmp(b_frac))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalLiteral {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalLiteral {}

impl PartialOrd for DecimalLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalLiteral {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl Neg for DecimalLiteral {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.sign = self.sign.flip();
        self
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for &d in digits {
        f.write_char(char::from(b'0' + d))?;
    }
    Ok(())
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.sign.as_char())?;
        write_digits(f, &self.integer)?;
        if !self.fraction.is_empty() {
            f.write_char(SEPARATOR)?;
            write_digits(f, &self.fraction)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalLiteral({})", self)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn to_digits(text: &str) -> Digits {
    text.bytes().map(|b| b - b'0').collect()
}

impl DecimalLiteral {
    /// Parse `text`, reporting the recognizer's rejection on failure.
    pub(crate) fn parse_literal(text: &str) -> Result<Self, Rejection> {
        recognizer::scan(text)?;

        let (sign, unsigned) = if let Some(rest) = text.strip_prefix('-') {
            (Sign::Negative, rest)
        } else {
            (Sign::Positive, text.strip_prefix('+').unwrap_or(text))
        };

        let (int_str, frac_str) = unsigned.split_once(SEPARATOR).unwrap_or((unsigned, ""));

        Ok(Self::from_parts(sign, to_digits(int_str), to_digits(frac_str)))
    }
}

impl FromStr for DecimalLiteral {
    type Err = NumericError;

    /// Parse a literal accepted by [`recognizer::validate`].
    ///
    /// # Examples
    /// - "1" -> +1
    /// - "+0001.0" -> +0001.0 (padding is kept)
    /// - "-5." -> Err(InvalidLiteral(TrailingSeparator))
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_literal(s)?)
    }
}

impl TryFrom<&str> for DecimalLiteral {
    type Error = NumericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalLiteral {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if more than 28 significant fractional digits remain
    /// - `Overflow` if the significant digits exceed the 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let trimmed = self.trimmed();
        if trimmed.fraction.len() > MAX_DECIMAL_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mut mantissa: i128 = 0;
        for &d in trimmed.integer.iter().chain(trimmed.fraction.iter()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(d)))
                .ok_or(NumericError::Overflow)?;
        }
        if trimmed.sign == Sign::Negative {
            mantissa = -mantissa;
        }

        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, trimmed.fraction.len() as u32)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal`. Always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let scale = d.scale() as usize;
        let magnitude = to_digits(&d.mantissa().unsigned_abs().to_string());

        // At least one integer digit
        let mut digits = Digits::new();
        digits.extend(std::iter::repeat(0).take((scale + 1).saturating_sub(magnitude.len())));
        digits.extend_from_slice(&magnitude);

        let split = digits.len() - scale;
        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };

        Self::from_parts(
            sign,
            SmallVec::from_slice(&digits[..split]),
            SmallVec::from_slice(&digits[split..]),
        )
    }
}

// ============================================================================
// Serialization (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalLiteral {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalLiteral {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn lit(s: &str) -> DecimalLiteral {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_parts() {
        let x = lit("-0001.005");
        assert_eq!(x.sign(), Sign::Negative);
        assert_eq!(x.integer_digits(), &[0, 0, 0, 1]);
        assert_eq!(x.fraction_digits(), &[0, 0, 5]);

        let y = lit("42");
        assert_eq!(y.sign(), Sign::Positive);
        assert_eq!(y.integer_width(), 2);
        assert_eq!(y.fraction_width(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        let result: Result<DecimalLiteral, _> = "-5.".parse();
        assert_eq!(
            result.unwrap_err(),
            NumericError::InvalidLiteral(Rejection::TrailingSeparator)
        );

        assert!(DecimalLiteral::try_from("").is_err());
        assert!(DecimalLiteral::try_from("not_a_number").is_err());
    }

    #[test]
    fn test_display_is_signed() {
        assert_eq!(lit("1").to_string(), "+1");
        assert_eq!(lit("+0001.0").to_string(), "+0001.0");
        assert_eq!(lit("-0001.005").to_string(), "-0001.005");
        assert_eq!(DecimalLiteral::zero().to_string(), "+0");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(lit("+0001.500").trimmed().to_string(), "+1.5");
        assert_eq!(lit("000.000").trimmed().to_string(), "+0");
        assert_eq!(lit("-0.000").trimmed().to_string(), "+0");
        assert_eq!(lit("-0.050").trimmed().to_string(), "-0.05");
        assert_eq!(lit("100").trimmed().to_string(), "+100");
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(lit("1.5"), lit("001.500"));
        assert_eq!(lit("+0"), lit("-0.00"));
        assert_ne!(lit("1.5"), lit("-1.5"));
        assert_ne!(lit("0.5"), lit("0.05"));
    }

    #[test]
    fn test_ordering() {
        assert!(lit("-2") < lit("-1.5"));
        assert!(lit("-1.5") < lit("0"));
        assert!(lit("0") < lit("0.001"));
        assert!(lit("9.99") < lit("10"));
        assert!(lit("0010") > lit("9.999999"));
        assert_eq!(lit("0.5").cmp_magnitude(&lit("-0.50")), Ordering::Equal);
        assert_eq!(lit("0.05").cmp_magnitude(&lit("0.5")), Ordering::Less);
    }

    #[test]
    fn test_negation_and_abs() {
        let x = lit("12.5");
        assert_eq!((-x.clone()).to_string(), "-12.5");
        assert_eq!((-(-x.clone())).to_string(), "+12.5");
        assert_eq!(lit("-3").abs().to_string(), "+3");
        assert!(!lit("-0").is_negative());
        assert!(lit("-0.1").is_negative());
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(lit("123.45").to_decimal().unwrap(), Decimal::new(12345, 2));
        assert_eq!(lit("-0001.0050").to_decimal().unwrap(), Decimal::new(-1005, 3));

        let too_fine = format!("0.{}1", "0".repeat(MAX_DECIMAL_SCALE));
        assert_eq!(
            lit(&too_fine).to_decimal(),
            Err(NumericError::PrecisionLoss)
        );

        let too_large = "9".repeat(40);
        assert_eq!(lit(&too_large).to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_decimal() {
        let x = DecimalLiteral::from_decimal(Decimal::new(12345, 2));
        assert_eq!(x.to_string(), "+123.45");

        let y = DecimalLiteral::from_decimal(Decimal::new(-5, 3));
        assert_eq!(y.to_string(), "-0.005");

        let z = DecimalLiteral::from_decimal(Decimal::ZERO);
        assert_eq!(z.to_string(), "+0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let x = lit("-0001.005");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-0001.005\"");

        let back: DecimalLiteral = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "-0001.005");

        assert!(serde_json::from_str::<DecimalLiteral>("\"5.\"").is_err());
    }
}
