// ============================================================================
// Basic Usage Example
// ============================================================================

use std::io::Cursor;
use std::sync::Arc;
use text_decimal::prelude::*;

fn main() {
    println!("=== Text Decimal Example ===\n");

    // Validate some literals
    println!("Validating literals...");
    for text in ["1", "+0001.0", "-0001.005", "A", "+-1", "-5.", ".1"] {
        match scan(text) {
            Ok(()) => println!("  {:>10}  valid", text),
            Err(reason) => println!("  {:>10}  invalid ({})", text, reason),
        }
    }

    // Exact sums, far beyond f64 precision
    println!("\nAdding literals...");
    let pairs = [
        ("1.5", "2.25"),
        ("9", "1"),
        ("5", "-3"),
        ("0.1", "0.2"),
        ("123456789012345678901234567890.5", "0.000000000000000000000000000001"),
    ];
    for (lhs, rhs) in pairs {
        match add(lhs, rhs) {
            Ok(sum) => println!("  {} + {} = {}", lhs, rhs, sum),
            Err(e) => println!("  {} + {} failed: {}", lhs, rhs, e),
        }
    }

    // Aggregate a column of numbers
    let column = ["19.99", "-5.00", "0.01", "100"];
    let total: DecimalLiteral = column
        .iter()
        .filter_map(|s| s.parse::<DecimalLiteral>().ok())
        .sum();
    println!("\nColumn total: {}", total.trimmed());

    // Check a small "file" line by line
    println!("\n=== Line Checker ===");
    let handler = Arc::new(CollectingReportHandler::new());
    let checker = create_from_config(CheckerConfig::with_default_addend(), handler.clone())
        .expect("default configuration is valid");

    let summary = checker
        .check_reader(Cursor::new("1\n1.0\nA\n-0001.005\n"))
        .expect("in-memory input cannot fail");

    for report in handler.reports() {
        println!("  {}", report);
        if let Some(sum) = report.sum() {
            println!("    {} + {} = {}", report.line, DEFAULT_ADDEND, sum);
        }
    }

    println!(
        "\n{} valid, {} invalid, total of valid lines {}",
        summary.valid,
        summary.invalid,
        summary.total.trimmed()
    );
}
