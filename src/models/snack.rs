use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A packaged snack with a purchase link.
///
/// `protein_per_pack` is `None` when the pack's protein is unknown; the user
/// can then supply their own value as an override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnackOption {
    pub name: String,

    #[serde(rename = "protein", default)]
    pub protein_per_pack: Option<f64>,

    #[serde(rename = "url")]
    pub purchase_ref: String,
}

impl SnackOption {
    pub fn has_known_protein(&self) -> bool {
        self.protein_per_pack.is_some()
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self
                .protein_per_pack
                .map(|p| p.is_finite() && p >= 0.0)
                .unwrap_or(true)
    }
}

/// How many packs of a snack the user picked, plus their protein override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct SnackPick {
    quantity: u32,

    /// Raw user text; parsed only when totals are computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    override_protein: Option<String>,
}

/// Snack picks keyed by snack name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnackSelection {
    picks: HashMap<String, SnackPick>,
}

impl SnackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity for a snack; unpicked snacks count as zero.
    pub fn quantity(&self, name: &str) -> u32 {
        self.picks.get(name).map(|p| p.quantity).unwrap_or(0)
    }

    pub fn override_for(&self, name: &str) -> Option<&str> {
        self.picks
            .get(name)
            .and_then(|p| p.override_protein.as_deref())
    }

    pub fn set_quantity(&mut self, name: &str, quantity: u32) {
        self.picks.entry(name.to_string()).or_default().quantity = quantity;
    }

    pub fn increment(&mut self, name: &str) -> u32 {
        let pick = self.picks.entry(name.to_string()).or_default();
        pick.quantity = pick.quantity.saturating_add(1);
        pick.quantity
    }

    /// Remove one pack, never going below zero.
    pub fn decrement(&mut self, name: &str) -> u32 {
        let pick = self.picks.entry(name.to_string()).or_default();
        pick.quantity = pick.quantity.saturating_sub(1);
        pick.quantity
    }

    /// Store the user's protein text for a snack; empty text clears it.
    pub fn set_override(&mut self, name: &str, text: &str) {
        let pick = self.picks.entry(name.to_string()).or_default();
        let trimmed = text.trim();
        pick.override_protein = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }
}
