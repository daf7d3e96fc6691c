//! Financial formula library.
//!
//! Pure, stateless functions. Out-of-domain input never produces an error:
//! every formula yields `None` ("no result") instead, and callers treat
//! that as "inputs incomplete". Free-text numeric input is handled by the
//! defensive parse helpers at the bottom of this module.

use serde::{Deserialize, Serialize};

/// Contribution margin of a single unit sold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    /// Money left per unit after variable cost.
    pub value: f64,
    /// Share of the sale price that the margin represents, 0..100.
    pub percentage: f64,
}

/// One plotted point of the break-even chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSample {
    pub units: u64,
    pub revenue: f64,
    pub total_cost: f64,
}

/// Units that must be sold for revenue to cover all costs.
///
/// Defined only for `fixed > 0`, `price > 0`, `variable >= 0` and
/// `price > variable`. Callers display the ceiling as the actionable
/// whole-unit quantity.
pub fn break_even_units(fixed: f64, price: f64, variable: f64) -> Option<f64> {
    if fixed > 0.0 && price > 0.0 && variable >= 0.0 && price > variable {
        Some(fixed / (price - variable))
    } else {
        None
    }
}

/// Contribution margin per unit, as value and as percentage of price.
///
/// Defined only for `price > 0`, `variable >= 0` and `price > variable`.
pub fn contribution_margin(price: f64, variable: f64) -> Option<Margin> {
    if price > 0.0 && variable >= 0.0 && price > variable {
        let value = price - variable;
        Some(Margin {
            value,
            percentage: value / price * 100.0,
        })
    } else {
        None
    }
}

/// Variable cost of a single produced unit.
///
/// Defined only for `total_variable > 0` and `units > 0`.
pub fn variable_cost_per_unit(total_variable: f64, units: f64) -> Option<f64> {
    if total_variable > 0.0 && units > 0.0 {
        Some(total_variable / units)
    } else {
        None
    }
}

/// Sum of line-item amounts. Amounts that are not valid non-negative
/// numbers count as zero rather than poisoning the total.
pub fn total_amount<I: IntoIterator<Item = f64>>(amounts: I) -> f64 {
    amounts
        .into_iter()
        .map(|a| if a.is_finite() && a >= 0.0 { a } else { 0.0 })
        .sum()
}

/// Sample points for the break-even chart.
///
/// Samples units from 0 to `2 * ceil(break_even)` in roughly ten steps
/// (`step = ceil(max_units / 10)`, minimum 1). If the rounded-up
/// break-even unit is not already a sample, it is inserted and the
/// sequence re-sorted, so the crossing point is always plotted exactly.
///
/// Returns an empty vector when `break_even` is not a usable point.
pub fn break_even_chart(break_even: f64, fixed: f64, price: f64, variable: f64) -> Vec<ChartSample> {
    if !break_even.is_finite() || break_even <= 0.0 {
        return Vec::new();
    }

    let max_units = (break_even * 2.0).ceil() as u64;
    let step = (max_units.div_ceil(10)).max(1);

    let sample = |units: u64| ChartSample {
        units,
        revenue: units as f64 * price,
        total_cost: fixed + units as f64 * variable,
    };

    let mut samples: Vec<ChartSample> = (0..=max_units).step_by(step as usize).map(sample).collect();

    let crossing = break_even.ceil() as u64;
    if !samples.iter().any(|s| s.units == crossing) {
        samples.push(sample(crossing));
        samples.sort_by_key(|s| s.units);
    }
    samples
}

// ── Defensive numeric parsing ────────────────────────────────────────

/// Parse free-text numeric input; whitespace is tolerated, anything that
/// is not a finite number yields "no result".
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a money amount from free text. Invalid or negative input
/// degrades to zero -- user typos never surface as errors.
pub fn parse_amount(raw: &str) -> f64 {
    parse_number(raw).filter(|n| *n >= 0.0).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn break_even_basic() {
        // 500000 fixed, sold at 2000, made for 1000 -> 500 units.
        assert_eq!(break_even_units(500_000.0, 2000.0, 1000.0), Some(500.0));
    }

    #[test]
    fn break_even_undefined_out_of_domain() {
        assert_eq!(break_even_units(0.0, 2000.0, 1000.0), None);
        assert_eq!(break_even_units(500.0, 0.0, 0.0), None);
        assert_eq!(break_even_units(500.0, 1000.0, -1.0), None);
        // Price not above variable cost: no crossing exists.
        assert_eq!(break_even_units(500.0, 1000.0, 1000.0), None);
        assert_eq!(break_even_units(500.0, 1000.0, 1500.0), None);
    }

    #[test]
    fn margin_value_and_percentage() {
        let m = contribution_margin(10_000.0, 4_000.0).unwrap();
        assert_eq!(m.value, 6_000.0);
        assert!((m.percentage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn margin_undefined_when_price_not_above_variable() {
        assert!(contribution_margin(4_000.0, 4_000.0).is_none());
        assert!(contribution_margin(0.0, 0.0).is_none());
    }

    #[test]
    fn variable_cost_per_unit_basic() {
        assert_eq!(variable_cost_per_unit(50_000.0, 100.0), Some(500.0));
        assert_eq!(variable_cost_per_unit(0.0, 100.0), None);
        assert_eq!(variable_cost_per_unit(50_000.0, 0.0), None);
    }

    #[test]
    fn totals_ignore_invalid_amounts() {
        // "abc" has already degraded to 0.0 at the parse boundary.
        assert_eq!(total_amount([parse_amount("abc"), 500.0]), 500.0);
        assert_eq!(total_amount([f64::NAN, 500.0, -3.0]), 500.0);
        assert_eq!(total_amount([]), 0.0);
    }

    #[test]
    fn chart_inserts_exact_crossing_point() {
        // break_even = 12.5 -> max 25, step 3, crossing at 13.
        let samples = break_even_chart(12.5, 12_500.0, 2000.0, 1000.0);
        let units: Vec<u64> = samples.iter().map(|s| s.units).collect();
        assert_eq!(units, vec![0, 3, 6, 9, 12, 13, 15, 18, 21, 24]);

        let crossing = samples.iter().find(|s| s.units == 13).unwrap();
        assert_eq!(crossing.revenue, 26_000.0);
        assert_eq!(crossing.total_cost, 12_500.0 + 13_000.0);
    }

    #[test]
    fn chart_step_never_zero_for_tiny_break_even() {
        let samples = break_even_chart(0.4, 100.0, 300.0, 50.0);
        assert!(!samples.is_empty());
        // 0, 1 (=2*ceil(0.4)) with crossing 1 already present.
        assert_eq!(samples[0].units, 0);
        assert_eq!(samples.last().unwrap().units, 1);
    }

    #[test]
    fn chart_empty_without_break_even() {
        assert!(break_even_chart(0.0, 100.0, 300.0, 50.0).is_empty());
        assert!(break_even_chart(f64::NAN, 100.0, 300.0, 50.0).is_empty());
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
    }

    proptest! {
        #[test]
        fn break_even_matches_definition(
            fixed in 0.01f64..1e9,
            price in 0.01f64..1e6,
            below in 0.0f64..1.0,
        ) {
            // Construct variable strictly below price.
            let variable = price * below * 0.999;
            let b = break_even_units(fixed, price, variable).unwrap();
            prop_assert!((b - fixed / (price - variable)).abs() <= b.abs() * 1e-12);
        }

        #[test]
        fn margin_identity(price in 0.01f64..1e6, below in 0.0f64..1.0) {
            let variable = price * below * 0.999;
            let m = contribution_margin(price, variable).unwrap();
            prop_assert!((m.value - (price - variable)).abs() < 1e-6);
            prop_assert!((m.percentage - (price - variable) / price * 100.0).abs() < 1e-9);
            prop_assert!(m.percentage > 0.0 && m.percentage <= 100.0);
        }

        #[test]
        fn chart_is_strictly_increasing_and_spans_double(break_even in 0.1f64..10_000.0) {
            let samples = break_even_chart(break_even, 1000.0, 20.0, 10.0);
            prop_assert!(!samples.is_empty());
            prop_assert_eq!(samples[0].units, 0);
            for pair in samples.windows(2) {
                prop_assert!(pair[0].units < pair[1].units);
            }
            let crossing = break_even.ceil() as u64;
            prop_assert!(samples.iter().any(|s| s.units == crossing));
        }
    }
}
