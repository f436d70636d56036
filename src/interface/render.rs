use crate::catalog::Catalog;
use crate::models::{
    ActivityLevel, Diet, MealOption, MealSlot, PlanState, SnackOption, SnackSelection,
};
use crate::planner::{ranked_candidates, slot_subgoal, snack_line_protein, ProteinTotals};

/// Display the daily target and how it was derived.
pub fn display_target(weight_kg: f64, activity: ActivityLevel, target: f64) {
    println!();
    println!(
        "Target: {} g protein/day  ({} kg x {} for {})",
        target,
        weight_kg,
        activity.multiplier(),
        activity
    );
}

fn display_meal(slot: MealSlot, target: f64, meal: Option<&MealOption>, show_recipe: bool) {
    let subgoal = slot_subgoal(target, slot);
    println!("{} (aim ~{:.1} g)", slot.title(), subgoal);

    let Some(meal) = meal else {
        println!("  No suggestion available.");
        return;
    };

    println!(
        "  {} - {} g protein - ~{} kcal [{}]",
        meal.name, meal.protein_grams, meal.calories, meal.diet_tag
    );

    if show_recipe {
        for step in &meal.recipe_steps {
            println!("    - {}", step);
        }
        if let Some(video) = &meal.video_ref {
            println!("    Video: {}", video);
        }
    }
}

/// Display the day's plan, one block per slot.
pub fn display_plan(plan: &PlanState, target: f64, show_recipes: bool) {
    println!();
    println!("=== Your Day Plan - Target {} g ===", target);
    println!();

    for slot in MealSlot::ALL {
        display_meal(slot, target, plan.get(slot), show_recipes);
    }
}

/// Display snacks for the current diet with picked quantities.
pub fn display_snacks(snacks: &[&SnackOption], selection: &SnackSelection) {
    if snacks.is_empty() {
        println!("Snacks: (none)");
        return;
    }

    println!();
    println!("=== Packaged snack ideas ({} items) ===", snacks.len());
    println!();

    let max_name_len = snacks.iter().map(|s| s.name.len()).max().unwrap_or(10);

    for (i, snack) in snacks.iter().enumerate() {
        let per_pack = match (snack.protein_per_pack, selection.override_for(&snack.name)) {
            (Some(known), _) => format!("{} g/pack", known),
            (None, Some(text)) => format!("{} g/pack (yours)", text),
            (None, None) => "protein unknown - set your own".to_string(),
        };

        println!(
            "{:>3}. {:<width$}  x{:<3} = {:>5.1} g  | {}",
            i + 1,
            snack.name,
            selection.quantity(&snack.name),
            snack_line_protein(snack, selection),
            per_pack,
            width = max_name_len
        );
        println!("     {}", snack.purchase_ref);
    }
}

/// Display plan and snack totals against the target.
pub fn display_totals(totals: &ProteinTotals) {
    println!();
    println!("--- Totals ---");
    println!("Total from plan: {} g protein", totals.plan);
    println!("From snacks: {:.1} g", totals.snacks);
    println!("Plan + snacks = {:.1} g / {} g", totals.combined, totals.target);
    if totals.is_met() {
        println!("Target met! (+{:.1} g)", totals.surplus);
    } else {
        println!("{:.1} g to reach your target.", totals.remaining);
    }
    println!();
}

/// Display the meal and snack banks, optionally ranked for a target.
pub fn display_catalog(catalog: &Catalog, diet: Diet, target: Option<f64>) {
    println!();
    println!("=== Meals ({}) ===", diet.label());

    for slot in MealSlot::ALL {
        let meals = match target {
            Some(t) => ranked_candidates(&catalog.meals, slot, t, diet),
            None => catalog.meals.candidates(slot, diet),
        };

        println!();
        println!("{}:", slot.title());
        if meals.is_empty() {
            println!("  (none)");
        }
        for meal in meals {
            println!(
                "  {} - {} g protein, ~{} kcal [{}]",
                meal.name, meal.protein_grams, meal.calories, meal.diet_tag
            );
        }
    }

    display_snacks(&catalog.snacks.for_diet(diet), &SnackSelection::new());
    println!();
}
