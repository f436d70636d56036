use crate::catalog::{find_snack, Catalog};
use crate::error::{PlannerError, Result};
use crate::models::{
    ActivityLevel, Diet, MealOption, MealSlot, PlanState, SelectionCursor, SnackOption,
    SnackSelection,
};
use crate::planner::{
    advance_all, advance_one, compute_target, generate_full_plan, parse_weight, ProteinTotals,
};

/// One user's planning session: preferences, target, plan, cursors and snacks.
///
/// Nothing is planned until `calculate` succeeds. Recalculating replaces the
/// plan and resets every cursor; snack picks are kept.
pub struct PlannerSession {
    catalog: Catalog,
    diet: Diet,
    activity: ActivityLevel,
    target: Option<f64>,
    plan: PlanState,
    cursors: SelectionCursor,
    snacks: SnackSelection,
}

impl PlannerSession {
    /// Create an uncalculated session over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            diet: Diet::default(),
            activity: ActivityLevel::default(),
            target: None,
            plan: PlanState::default(),
            cursors: SelectionCursor::default(),
            snacks: SnackSelection::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn activity(&self) -> ActivityLevel {
        self.activity
    }

    /// Daily target in grams, once calculated.
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    pub fn plan(&self) -> &PlanState {
        &self.plan
    }

    pub fn cursors(&self) -> &SelectionCursor {
        &self.cursors
    }

    pub fn snack_selection(&self) -> &SnackSelection {
        &self.snacks
    }

    pub fn set_activity(&mut self, activity: ActivityLevel) {
        self.activity = activity;
    }

    /// Change the diet preference.
    ///
    /// A calculated plan is rebuilt so every meal still fits the diet.
    pub fn set_diet(&mut self, diet: Diet) {
        if self.diet == diet {
            return;
        }
        self.diet = diet;
        if let Some(target) = self.target {
            self.replan(target);
        }
    }

    /// Compute the target from a weight in kg and build a fresh plan.
    ///
    /// Returns `None` and leaves the session untouched when the weight is unusable.
    pub fn calculate(&mut self, weight_kg: f64) -> Option<f64> {
        let Some(target) = compute_target(weight_kg, self.activity) else {
            tracing::debug!(weight_kg, "ignoring calculation without a usable weight");
            return None;
        };

        self.target = Some(target);
        self.replan(target);
        tracing::info!(weight_kg, activity = %self.activity, target, "calculated protein target");
        Some(target)
    }

    /// `calculate` for raw text as typed by the user.
    pub fn calculate_input(&mut self, weight_input: &str) -> Option<f64> {
        match parse_weight(weight_input) {
            Some(weight) => self.calculate(weight),
            None => {
                tracing::debug!(input = weight_input, "weight input is not a positive number");
                None
            }
        }
    }

    fn replan(&mut self, target: f64) {
        let (plan, cursors) = generate_full_plan(&self.catalog.meals, target, self.diet);
        self.plan = plan;
        self.cursors = cursors;
    }

    /// Swap one slot for its next-closest meal.
    ///
    /// Does nothing before the first calculation. Returns the slot's new meal.
    pub fn refresh_slot(&mut self, slot: MealSlot) -> Option<&MealOption> {
        let target = self.target?;
        let (cursor, meal) = advance_one(
            &self.catalog.meals,
            slot,
            target,
            self.diet,
            self.cursors.get(slot),
        );
        tracing::debug!(%slot, cursor, "refreshed slot");

        self.cursors.set(slot, cursor);
        self.plan.set(slot, meal);
        self.plan.get(slot)
    }

    /// Advance all three slots at once. Returns `false` before the first calculation.
    pub fn refresh_all(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let (plan, cursors) = advance_all(&self.catalog.meals, target, self.diet, &self.cursors);
        self.plan = plan;
        self.cursors = cursors;
        tracing::debug!(cursors = ?self.cursors, "refreshed all slots");
        true
    }

    /// Snacks shown for the current diet preference.
    pub fn visible_snacks(&self) -> Vec<&SnackOption> {
        self.catalog.snacks.for_diet(self.diet)
    }

    /// Resolve typed text to the name of a visible snack.
    pub fn resolve_snack(&self, query: &str) -> Result<String> {
        find_snack(&self.visible_snacks(), query)
            .map(|s| s.name.clone())
            .ok_or_else(|| PlannerError::SnackNotFound(query.trim().to_string()))
    }

    pub fn set_snack_quantity(&mut self, name: &str, quantity: u32) {
        self.snacks.set_quantity(name, quantity);
    }

    pub fn add_snack(&mut self, name: &str) -> u32 {
        self.snacks.increment(name)
    }

    pub fn remove_snack(&mut self, name: &str) -> u32 {
        self.snacks.decrement(name)
    }

    /// Record the user's per-pack protein for a snack whose protein is unknown.
    pub fn set_snack_override(&mut self, name: &str, text: &str) -> Result<()> {
        let snack = self
            .catalog
            .snacks
            .for_diet(self.diet)
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| PlannerError::SnackNotFound(name.to_string()))?;

        if snack.has_known_protein() {
            return Err(PlannerError::InvalidInput(format!(
                "{} already lists its protein per pack",
                name
            )));
        }

        self.snacks.set_override(name, text);
        Ok(())
    }

    /// Plan and snack progress against the target, once calculated.
    pub fn totals(&self) -> Option<ProteinTotals> {
        let target = self.target?;
        Some(ProteinTotals::compute(
            target,
            &self.plan,
            self.visible_snacks(),
            &self.snacks,
        ))
    }
}
