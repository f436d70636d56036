use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MealSlot;

// ─────────────────────────────────────────────────────────────────────────────
// Target formula: grams of protein per kg of body weight
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
pub const MODERATE_MULTIPLIER: f64 = 1.55;
pub const ACTIVE_MULTIPLIER: f64 = 1.75;

/// Decimal places kept on the daily target.
pub const TARGET_DECIMALS: i32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Meal split: share of the daily target each slot aims for (sums to 1.0)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.30;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.35;

/// Map from slot to its share of the daily target.
pub static SLOT_SHARES: LazyLock<HashMap<MealSlot, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(MealSlot::Breakfast, BREAKFAST_SHARE);
    m.insert(MealSlot::Lunch, LUNCH_SHARE);
    m.insert(MealSlot::Dinner, DINNER_SHARE);
    m
});

/// Get the share of the daily target for a slot.
pub fn slot_share(slot: MealSlot) -> f64 {
    *SLOT_SHARES.get(&slot).unwrap_or(&0.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Snack name matching
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a fuzzy snack-name match.
pub const SNACK_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered in the interactive picker.
pub const SNACK_MATCH_LIMIT: usize = 5;
