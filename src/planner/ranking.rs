use crate::catalog::MealCatalog;
use crate::models::{Diet, MealOption, MealSlot, PlanState, SelectionCursor};
use crate::planner::constants::slot_share;

/// Protein a slot should aim for, given the daily target.
#[inline]
pub fn slot_subgoal(target: f64, slot: MealSlot) -> f64 {
    target * slot_share(slot)
}

/// Order candidates by how close their protein is to `target_grams`.
///
/// The sort is stable, so equally close meals keep their catalog order.
pub fn select_closest<'a, I>(candidates: I, target_grams: f64) -> Vec<&'a MealOption>
where
    I: IntoIterator<Item = &'a MealOption>,
{
    let mut sorted: Vec<&MealOption> = candidates.into_iter().collect();
    sorted.sort_by(|a, b| {
        a.protein_gap(target_grams)
            .total_cmp(&b.protein_gap(target_grams))
    });
    sorted
}

/// A slot's diet-filtered meals, closest to the slot's sub-goal first.
pub fn ranked_candidates<'a>(
    catalog: &'a MealCatalog,
    slot: MealSlot,
    target: f64,
    diet: Diet,
) -> Vec<&'a MealOption> {
    select_closest(catalog.candidates(slot, diet), slot_subgoal(target, slot))
}

/// Build a fresh plan: the closest meal for every slot, all cursors at 0.
///
/// A slot with no meal for the diet is left empty.
pub fn generate_full_plan(
    catalog: &MealCatalog,
    target: f64,
    diet: Diet,
) -> (PlanState, SelectionCursor) {
    let mut plan = PlanState::default();

    for slot in MealSlot::ALL {
        let ranked = ranked_candidates(catalog, slot, target, diet);
        let pick = ranked.first().map(|m| (*m).clone());
        if pick.is_none() {
            tracing::debug!(%slot, %diet, "no meal available for slot");
        }
        plan.set(slot, pick);
    }

    (plan, SelectionCursor::default())
}

/// Move one slot to its next-closest meal, wrapping around.
///
/// Returns the new cursor and the meal under it (`None` if the slot has no
/// candidates, in which case the cursor stays at 0).
pub fn advance_one(
    catalog: &MealCatalog,
    slot: MealSlot,
    target: f64,
    diet: Diet,
    cursor: usize,
) -> (usize, Option<MealOption>) {
    let ranked = ranked_candidates(catalog, slot, target, diet);
    let next = (cursor + 1) % ranked.len().max(1);
    let item = ranked.get(next).map(|m| (*m).clone());
    (next, item)
}

/// Advance every slot by one, each from its own cursor.
///
/// The new plan and cursors are built aside and returned together.
pub fn advance_all(
    catalog: &MealCatalog,
    target: f64,
    diet: Diet,
    cursors: &SelectionCursor,
) -> (PlanState, SelectionCursor) {
    let mut plan = PlanState::default();
    let mut next_cursors = SelectionCursor::default();

    for slot in MealSlot::ALL {
        let (index, item) = advance_one(catalog, slot, target, diet, cursors.get(slot));
        plan.set(slot, item);
        next_cursors.set(slot, index);
    }

    (plan, next_cursors)
}
