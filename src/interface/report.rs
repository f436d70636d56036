use serde::Serialize;

use crate::models::{ActivityLevel, Diet, MealOption, MealSlot};
use crate::planner::{slot_subgoal, snack_line_protein, snack_protein_per_pack, ProteinTotals};
use crate::state::PlannerSession;

#[derive(Debug, Clone, Serialize)]
pub struct MealEntry {
    pub slot: MealSlot,
    pub subgoal: f64,
    pub cursor: usize,
    pub meal: Option<MealOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnackEntry {
    pub name: String,
    pub packs: u32,
    pub protein_per_pack: f64,
    pub protein: f64,
    pub url: String,
}

/// Machine-readable snapshot of a calculated session.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub activity: ActivityLevel,
    pub diet: Diet,
    pub meals: Vec<MealEntry>,
    /// Only snacks with at least one pack picked.
    pub snacks: Vec<SnackEntry>,
    pub totals: ProteinTotals,
}

impl PlanReport {
    /// `None` until the session has a target.
    pub fn from_session(session: &PlannerSession) -> Option<Self> {
        let totals = session.totals()?;
        let selection = session.snack_selection();

        let meals = MealSlot::ALL
            .into_iter()
            .map(|slot| MealEntry {
                slot,
                subgoal: slot_subgoal(totals.target, slot),
                cursor: session.cursors().get(slot),
                meal: session.plan().get(slot).cloned(),
            })
            .collect();

        let snacks = session
            .visible_snacks()
            .into_iter()
            .filter(|s| selection.quantity(&s.name) > 0)
            .map(|s| SnackEntry {
                name: s.name.clone(),
                packs: selection.quantity(&s.name),
                protein_per_pack: snack_protein_per_pack(s, selection),
                protein: snack_line_protein(s, selection),
                url: s.purchase_ref.clone(),
            })
            .collect();

        Some(Self {
            activity: session.activity(),
            diet: session.diet(),
            meals,
            snacks,
            totals,
        })
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
