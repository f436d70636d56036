use protein_planner_rs::catalog::{builtin_meals, MealCatalog};
use protein_planner_rs::models::{Diet, MealOption, MealSlot, SelectionCursor};
use protein_planner_rs::planner::{
    advance_all, advance_one, generate_full_plan, ranked_candidates, select_closest, slot_subgoal,
};

fn make_meal(name: &str, protein: f64, diet: Diet) -> MealOption {
    MealOption {
        name: name.to_string(),
        protein_grams: protein,
        calories: 400.0,
        diet_tag: diet,
        recipe_steps: vec![format!("Cook {}", name)],
        video_ref: None,
    }
}

fn sample_catalog() -> MealCatalog {
    MealCatalog {
        breakfast: vec![
            make_meal("Tofu Scramble", 24.0, Diet::Veg),
            make_meal("Egg Bhurji", 20.0, Diet::NonVeg),
            make_meal("Besan Chilla", 14.0, Diet::Veg),
            make_meal("Smoked Salmon Toast", 28.0, Diet::NonVeg),
        ],
        lunch: vec![
            make_meal("Paneer Tikka Wrap", 30.0, Diet::Veg),
            make_meal("Tuna Salad", 34.0, Diet::NonVeg),
        ],
        dinner: vec![make_meal("Butter Chicken", 38.0, Diet::NonVeg)],
    }
}

#[test]
fn test_select_closest_spec_example() {
    let meals = vec![
        make_meal("Ten", 10.0, Diet::Veg),
        make_meal("Thirty", 30.0, Diet::Veg),
        make_meal("Twenty", 20.0, Diet::Veg),
    ];
    let sorted = select_closest(&meals, 22.0);
    assert_eq!(sorted[0].protein_grams, 20.0);
}

#[test]
fn test_select_closest_is_idempotent() {
    let catalog = sample_catalog();
    let first = select_closest(&catalog.breakfast, 21.0);
    let second = select_closest(&catalog.breakfast, 21.0);
    assert_eq!(first, second);
}

#[test]
fn test_select_closest_orders_by_gap() {
    let catalog = sample_catalog();
    let sorted = select_closest(&catalog.breakfast, 21.0);

    for window in sorted.windows(2) {
        assert!(
            window[0].protein_gap(21.0) <= window[1].protein_gap(21.0),
            "{} should not come before {}",
            window[0].name,
            window[1].name
        );
    }
}

#[test]
fn test_generate_full_plan_respects_diet() {
    let catalog = sample_catalog();
    let (plan, cursors) = generate_full_plan(&catalog, 80.0, Diet::Veg);

    assert!(plan.meals().all(|(_, m)| m.diet_tag == Diet::Veg));
    assert!(plan.dinner.is_none(), "no veg dinner in catalog");
    assert_eq!(cursors, SelectionCursor::default());
}

#[test]
fn test_generate_full_plan_uses_slot_subgoals() {
    let catalog = sample_catalog();
    // Breakfast aims for 24 g, lunch and dinner for 28 g each.
    let (plan, _) = generate_full_plan(&catalog, 80.0, Diet::NonVeg);

    assert_eq!(plan.breakfast.unwrap().name, "Tofu Scramble");
    assert_eq!(plan.lunch.unwrap().name, "Paneer Tikka Wrap");
    assert_eq!(plan.dinner.unwrap().name, "Butter Chicken");
}

#[test]
fn test_advance_one_full_cycle_returns_to_start() {
    let catalog = sample_catalog();
    let target = 80.0;
    let ranked = ranked_candidates(&catalog, MealSlot::Breakfast, target, Diet::NonVeg);
    let n = ranked.len();
    assert_eq!(n, 4);

    let mut cursor = 0;
    let mut seen = Vec::new();
    for _ in 0..n {
        let (next, meal) =
            advance_one(&catalog, MealSlot::Breakfast, target, Diet::NonVeg, cursor);
        cursor = next;
        seen.push(meal.unwrap().name);
    }

    assert_eq!(cursor, 0);
    assert_eq!(seen.last().unwrap(), &ranked[0].name);

    // Every candidate is visited exactly once per cycle.
    let mut names: Vec<&str> = seen.iter().map(|s| s.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), n);
}

#[test]
fn test_advance_all_matches_advance_one_per_slot() {
    let catalog = builtin_meals();
    let target = 100.0;
    let cursors = SelectionCursor {
        breakfast: 1,
        lunch: 0,
        dinner: 1,
    };

    let (plan, next) = advance_all(&catalog, target, Diet::NonVeg, &cursors);

    for slot in MealSlot::ALL {
        let (cursor, meal) = advance_one(&catalog, slot, target, Diet::NonVeg, cursors.get(slot));
        assert_eq!(next.get(slot), cursor);
        assert_eq!(plan.get(slot), meal.as_ref());
    }
}

#[test]
fn test_builtin_plan_for_70kg_moderate() {
    let catalog = builtin_meals();
    // 108.5 g: breakfast ~32.6, lunch and dinner ~38.0
    let (plan, _) = generate_full_plan(&catalog, 108.5, Diet::NonVeg);

    assert_eq!(plan.breakfast.unwrap().name, "Greek Yogurt Protein Bowl");
    assert_eq!(plan.lunch.unwrap().name, "Grilled Chicken + Rice");
    assert_eq!(plan.dinner.unwrap().name, "Chicken & Veg Stir-fry");
}

#[test]
fn test_subgoals_add_up_to_target() {
    let total: f64 = MealSlot::ALL.iter().map(|s| slot_subgoal(90.0, *s)).sum();
    assert!((total - 90.0).abs() < 1e-9);
}
