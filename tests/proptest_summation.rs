use proptest::prelude::*;
use rust_decimal::Decimal;
use text_decimal::numeric::{add, align_text, subtract, validate, DecimalLiteral};

/// Fractional digits the i128 oracle is scaled to
const ORACLE_SCALE: u32 = 9;

prop_compose! {
    /// Signed literal with up to 12 integer and 9 fractional digits
    fn literal()(
        sign in prop_oneof![Just(""), Just("+"), Just("-")],
        integer in "[0-9]{1,12}",
        fraction in proptest::option::of("[0-9]{1,9}"),
    ) -> String {
        match fraction {
            Some(fraction) => format!("{}{}.{}", sign, integer, fraction),
            None => format!("{}{}", sign, integer),
        }
    }
}

/// Exact value of `text` scaled by 10^ORACLE_SCALE
fn scaled(text: &str) -> i128 {
    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let padded = format!("{:0<width$}", fraction, width = ORACLE_SCALE as usize);

    let magnitude = integer.parse::<i128>().unwrap() * 10i128.pow(ORACLE_SCALE)
        + padded.parse::<i128>().unwrap();
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn negate(text: &str) -> String {
    match text.as_bytes()[0] {
        b'-' => format!("+{}", &text[1..]),
        b'+' => format!("-{}", &text[1..]),
        _ => format!("-{}", text),
    }
}

fn lit(text: &str) -> DecimalLiteral {
    text.parse().unwrap()
}

// Property 1: The sum matches exact integer arithmetic
proptest! {
    #[test]
    fn prop_add_matches_oracle(a in literal(), b in literal()) {
        let sum = add(&a, &b).unwrap();
        prop_assert!(validate(&sum), "result {} is not a literal", sum);
        prop_assert_eq!(scaled(&sum), scaled(&a) + scaled(&b));
    }
}

// Property 2: Addition is commutative, down to the rendered text
proptest! {
    #[test]
    fn prop_add_commutative(a in literal(), b in literal()) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }
}

// Property 3: Zero is the identity
proptest! {
    #[test]
    fn prop_add_zero_identity(a in literal()) {
        prop_assert_eq!(lit(&add(&a, "0").unwrap()), lit(&a));
        prop_assert_eq!(lit(&add("-0.0", &a).unwrap()), lit(&a));
    }
}

// Property 4: A literal plus its negation is positive zero
proptest! {
    #[test]
    fn prop_sign_cancellation(a in literal()) {
        let sum = add(&a, &negate(&a)).unwrap();
        prop_assert!(lit(&sum).is_zero());
        prop_assert!(sum.starts_with('+'), "cancellation gave {}", sum);
    }
}

// Property 5: Zero padding never changes the value of a sum
proptest! {
    #[test]
    fn prop_padding_preserves_value(
        a in literal(),
        b in literal(),
        lead in 0usize..5,
        trail in 0usize..5,
    ) {
        let (sign, unsigned) = match a.as_bytes()[0] {
            b'+' | b'-' => a.split_at(1),
            _ => ("", a.as_str()),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let padded = format!(
            "{}{}{}.{}{}",
            sign,
            "0".repeat(lead),
            integer,
            if fraction.is_empty() { "0" } else { fraction },
            "0".repeat(trail)
        );

        prop_assert_eq!(lit(&padded), lit(&a));
        prop_assert_eq!(lit(&add(&padded, &b).unwrap()), lit(&add(&a, &b).unwrap()));
        prop_assert_eq!(lit(&add(&b, &padded).unwrap()), lit(&add(&b, &a).unwrap()));
    }
}

// Property 6: Subtraction is addition of the negation
proptest! {
    #[test]
    fn prop_subtract_is_negated_add(a in literal(), b in literal()) {
        let difference = subtract(&a, &b).unwrap();
        prop_assert_eq!(scaled(&difference), scaled(&a) - scaled(&b));
        prop_assert_eq!(difference, add(&a, &negate(&b)).unwrap());
    }
}

// Property 7: Alignment yields equal-length renderings with unchanged values
proptest! {
    #[test]
    fn prop_alignment_widths(a in literal(), b in literal()) {
        let (x, y) = align_text(&a, &b).unwrap();
        prop_assert_eq!(x.len(), y.len());
        prop_assert_eq!(x.find('.'), y.find('.'));
        prop_assert_eq!(scaled(&x), scaled(&a));
        prop_assert_eq!(scaled(&y), scaled(&b));
    }
}

// Property 8: Ordering, trimming and rust_decimal conversion agree with the oracle
proptest! {
    #[test]
    fn prop_value_semantics(a in literal(), b in literal()) {
        let (x, y) = (lit(&a), lit(&b));
        prop_assert_eq!(x.cmp(&y), scaled(&a).cmp(&scaled(&b)));
        prop_assert_eq!(scaled(&x.trimmed().to_string()), scaled(&a));

        let expected = Decimal::from_i128_with_scale(scaled(&a), ORACLE_SCALE);
        prop_assert_eq!(x.to_decimal().unwrap(), expected);
        prop_assert_eq!(DecimalLiteral::from_decimal(expected), x);
    }
}

// Property 9: Sums of many literals match the oracle regardless of order
proptest! {
    #[test]
    fn prop_sum_many(values in prop::collection::vec(literal(), 0..20)) {
        let forward: DecimalLiteral = values.iter().map(|s| lit(s)).sum();
        let backward: DecimalLiteral = values.iter().rev().map(|s| lit(s)).sum();
        let expected: i128 = values.iter().map(|s| scaled(s)).sum();

        prop_assert_eq!(scaled(&forward.to_string()), expected);
        prop_assert_eq!(forward, backward);
    }
}
