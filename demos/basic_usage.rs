// ============================================================================
// Basic Usage Example
// ============================================================================

use progress_bignum::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    progress_bignum::utils::logging::init();

    println!("=== Progress BigNum Example ===\n");

    let config = BigNumConfig::default();
    let mut gold = config.zero().unwrap();
    let mut income = config.from_u64(10).unwrap();

    // Each generator level multiplies income by 1.5
    println!("Simulating 2000 ticks...");
    for tick in 1..=2000u32 {
        gold.add_in_place(&income);
        if tick % 10 == 0 {
            income = income.mul_decimal("1.5", 2).unwrap();
        }
        if tick % 400 == 0 {
            println!("  tick {:>4}: gold = {:.3}, income = {:.3}", tick, gold, income);
        }
    }

    // Upgrade costs follow 1.15^level, computed in log space
    let level = 5000.0;
    let growth = BigNum::from_log10(level * 1.15f64.log10()).unwrap();
    let cost = BigNum::from_u64(100).mul_big_num_integer(&growth);
    println!("\nUpgrade at level {} costs {:.3}", level, cost);
    println!("Affordable: {}", gold >= cost);

    let remaining = gold.sub(&cost);
    println!("Gold after purchase: {:.3}", remaining);

    // Ratios stay total: dividing by zero saturates instead of failing
    let ratio = gold.div(&BigNum::zero());
    println!("gold / 0 = {}", ratio);

    // Persist and restore
    let saved = gold.to_storage();
    println!("\nSaved as: {}", saved);
    let restored = BigNum::from_storage(&saved).unwrap();
    println!("Restored matches: {}", restored == gold);

    let small = config.parse("1.5e3").unwrap();
    println!("\nSmall values render plainly: {}", small.to_plain_integer_string());
}
