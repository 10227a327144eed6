// ============================================================================
// Overflow Example
// Float reciprocal round trip versus exact ratio round trip
// ============================================================================

use ratio::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Ratio Overflow Example ===\n");

    // very large number
    let a: i64 = 1_100_000_000_000_000_000;

    // use float
    let b = 1.0 / a as f64;
    println!("float: int(1 / a * a) = {}", (b * a as f64) as i64);

    // use Ratio
    let b = Ratio::ONE.checked_div(a)?;
    println!("ratio: 1 / a          = {}", b);
    println!("ratio: int(1 / a * a) = {}", b.checked_mul(a)?.to_integer());

    // past i64 the ratio reports the failure instead of wrapping
    println!("\n=== Limits ===");
    match b.checked_mul(Ratio::new(1, 10)?) {
        Ok(x) => println!("1 / (10 a) = {}", x),
        Err(err) => println!("1 / (10 a) failed: {}", err),
    }
    match Ratio::new(1, 2)?.checked_div(0) {
        Ok(x) => println!("1/2 / 0 = {}", x),
        Err(err) => println!("1/2 / 0 failed: {}", err),
    }

    Ok(())
}
