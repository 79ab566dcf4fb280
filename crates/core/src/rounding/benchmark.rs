//! Benchmark test for correction performance.

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use rust_decimal::Decimal;

    use crate::rounding::{CorrectionMode, CorrectionUtil, RoundingUtil};

    /// Generate amounts with cycling sub-unit remainders so every pass has
    /// real error to redistribute.
    fn generate_values(count: usize) -> Vec<Decimal> {
        (0..count)
            .map(|i| Decimal::new(10_000 + (i as i64 % 10), 3))
            .collect()
    }

    #[test]
    fn benchmark_minimal_parts_10_000_values() {
        let mut values = generate_values(10_000);

        let start = Instant::now();
        let report = CorrectionUtil::sum_round_and_correct_report(
            &mut values,
            2,
            CorrectionMode::MinimalParts,
        )
        .unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 10 000 values, minimal parts ===");
        println!("Duration: {:?}", duration);
        println!("Total: {}", report.total);
        println!("Residual: {}", report.residual);

        assert!(report.is_exact());
        assert_eq!(values.iter().copied().sum::<Decimal>(), report.total);
        assert!(
            duration.as_millis() < 2000,
            "Minimal parts took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_differential_100_000_values() {
        let mut values = generate_values(100_000);
        let expected = RoundingUtil::sum_and_round(&values, 2);

        let start = Instant::now();
        let report = CorrectionUtil::sum_round_and_correct_report(
            &mut values,
            2,
            CorrectionMode::Differential,
        )
        .unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 100 000 values, differential ===");
        println!("Duration: {:?}", duration);
        println!("Total: {}", report.total);
        println!("Residual: {}", report.residual);

        assert_eq!(report.total, expected);
        // Leftover carry never reaches a full unit
        assert!(report.residual.abs() <= Decimal::new(1, 2));
        assert!(
            duration.as_millis() < 2000,
            "Differential took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_first_value_100_000_values() {
        let mut values = generate_values(100_000);

        let start = Instant::now();
        let total =
            CorrectionUtil::sum_round_and_correct(&mut values, 2, CorrectionMode::FirstValue)
                .unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 100 000 values, first value ===");
        println!("Duration: {:?}", duration);
        println!("Total: {}", total);

        assert_eq!(values.iter().copied().sum::<Decimal>(), total);
        assert!(
            duration.as_millis() < 2000,
            "First value took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }
}
