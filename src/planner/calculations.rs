use serde::Serialize;

use crate::models::{ActivityLevel, PlanState, SnackOption, SnackSelection};
use crate::planner::constants::TARGET_DECIMALS;

/// Round to `decimals` places, halves away from zero.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Read the decimal number at the start of `text`, ignoring leading whitespace
/// and anything after the number (`"70kg"` reads as 70).
pub fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let skip_digits = |mut i: usize| -> usize {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = skip_digits(sign);
    let mut mantissa_digits = end - sign;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = skip_digits(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when it has digits: "5e" reads as 5.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = skip_digits(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    s[..end].parse().ok()
}

/// Parse a weight entry in kg.
///
/// Returns `None` when there is no leading number, or it is zero, negative or
/// non-finite.
pub fn parse_weight(input: &str) -> Option<f64> {
    leading_number(input).filter(|w| w.is_finite() && *w > 0.0)
}

/// Daily protein target in grams: weight × activity multiplier, one decimal.
///
/// `None` means there was no usable weight and nothing was computed.
pub fn compute_target(weight_kg: f64, activity: ActivityLevel) -> Option<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return None;
    }
    let target = round_to_decimals(weight_kg * activity.multiplier(), TARGET_DECIMALS);
    target.is_finite().then_some(target)
}

/// Parse a user-entered protein override; text without a leading number counts as zero.
pub fn parse_override(text: &str) -> f64 {
    leading_number(text)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Protein in one pack: the catalog value, else the user's override, else zero.
pub fn snack_protein_per_pack(snack: &SnackOption, selection: &SnackSelection) -> f64 {
    match snack.protein_per_pack {
        Some(known) => known,
        None => selection
            .override_for(&snack.name)
            .map(parse_override)
            .unwrap_or(0.0),
    }
}

/// Protein from the picked packs of one snack.
pub fn snack_line_protein(snack: &SnackOption, selection: &SnackSelection) -> f64 {
    selection.quantity(&snack.name) as f64 * snack_protein_per_pack(snack, selection)
}

/// Sum of protein across the planned meals; absent slots add nothing.
pub fn sum_plan_protein(plan: &PlanState) -> f64 {
    plan.meals().map(|(_, meal)| meal.protein_grams).sum()
}

/// Sum of protein from picked snacks.
///
/// Only snacks in `catalog` count, so picks made under another diet
/// preference drop out once the catalog is filtered.
pub fn sum_snack_protein<'a, I>(catalog: I, selection: &SnackSelection) -> f64
where
    I: IntoIterator<Item = &'a SnackOption>,
{
    catalog
        .into_iter()
        .map(|snack| snack_line_protein(snack, selection))
        .sum()
}

/// Grams still needed to reach the target, never negative.
#[inline]
pub fn remaining(target: f64, combined_total: f64) -> f64 {
    (target - combined_total).max(0.0)
}

/// Grams over the target, never negative.
#[inline]
pub fn surplus(target: f64, combined_total: f64) -> f64 {
    (combined_total - target).max(0.0)
}

/// Progress of plan plus snacks against the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProteinTotals {
    pub target: f64,
    pub plan: f64,
    pub snacks: f64,
    pub combined: f64,
    pub remaining: f64,
    pub surplus: f64,
}

impl ProteinTotals {
    pub fn compute<'a, I>(
        target: f64,
        plan: &PlanState,
        snacks: I,
        selection: &SnackSelection,
    ) -> Self
    where
        I: IntoIterator<Item = &'a SnackOption>,
    {
        let plan_protein = sum_plan_protein(plan);
        let snack_protein = sum_snack_protein(snacks, selection);
        let combined = plan_protein + snack_protein;

        Self {
            target,
            plan: plan_protein,
            snacks: snack_protein,
            combined,
            remaining: remaining(target, combined),
            surplus: surplus(target, combined),
        }
    }

    /// True once plan plus snacks reach the target.
    pub fn is_met(&self) -> bool {
        self.remaining == 0.0
    }
}
