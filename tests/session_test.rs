use std::io::Write;

use assert_float_eq::*;
use tempfile::Builder;

use protein_planner_rs::catalog::{builtin_meals, load_snack_catalog, Catalog, SnackCatalog};
use protein_planner_rs::interface::PlanReport;
use protein_planner_rs::models::{ActivityLevel, Diet, MealSlot, SelectionCursor, SnackOption};
use protein_planner_rs::{PlannerError, PlannerSession};

fn session() -> PlannerSession {
    PlannerSession::new(Catalog::builtin())
}

fn session_with_unknown_snack() -> PlannerSession {
    let snacks = SnackCatalog {
        veg: vec![
            SnackOption {
                name: "Roasted Makhana".to_string(),
                protein_per_pack: None,
                purchase_ref: "https://shop.example/makhana".to_string(),
            },
            SnackOption {
                name: "Protein Bar".to_string(),
                protein_per_pack: Some(20.0),
                purchase_ref: "https://shop.example/bar".to_string(),
            },
        ],
        non_veg: Vec::new(),
    };
    PlannerSession::new(Catalog::new(builtin_meals(), snacks))
}

#[test]
fn test_calculate_builds_plan_and_totals() {
    let mut session = session();
    session.set_activity(ActivityLevel::Moderate);

    assert_eq!(session.calculate_input("70"), Some(108.5));

    let plan = session.plan();
    assert!(plan.breakfast.is_some() && plan.lunch.is_some() && plan.dinner.is_some());

    let totals = session.totals().unwrap();
    // 30 + 35 + 35 from the built-in bank
    assert_float_absolute_eq!(totals.plan, 100.0);
    assert_float_absolute_eq!(totals.remaining, 8.5);
    assert!(!totals.is_met());
}

#[test]
fn test_snacks_close_the_gap() {
    let mut session = session();
    session.set_activity(ActivityLevel::Moderate);
    session.calculate(70.0);

    let bar = session.resolve_snack("protein bar").unwrap();
    session.add_snack(&bar);

    let totals = session.totals().unwrap();
    assert_float_absolute_eq!(totals.snacks, 20.0);
    assert_float_absolute_eq!(totals.combined, 120.0);
    assert!(totals.is_met());
    assert_float_absolute_eq!(totals.surplus, 11.5);
}

#[test]
fn test_refresh_slot_cycles_and_wraps() {
    let mut session = session();
    session.calculate(70.0);
    let first = session.plan().breakfast.clone().unwrap();

    let second = session.refresh_slot(MealSlot::Breakfast).cloned().unwrap();
    assert_ne!(first.name, second.name);
    assert_eq!(session.cursors().breakfast, 1);

    let third = session.refresh_slot(MealSlot::Breakfast).cloned().unwrap();
    assert_eq!(first.name, third.name);
    assert_eq!(session.cursors().breakfast, 0);
}

#[test]
fn test_refresh_all_moves_every_slot_together() {
    let mut session = session();
    session.calculate(70.0);

    assert!(session.refresh_all());
    assert_eq!(
        session.cursors(),
        &SelectionCursor {
            breakfast: 1,
            lunch: 1,
            dinner: 1,
        }
    );
}

#[test]
fn test_veg_session_has_single_candidate_per_slot() {
    let mut session = session();
    session.set_diet(Diet::Veg);
    session.calculate(60.0);
    let before = session.plan().clone();

    session.refresh_all();

    assert_eq!(session.plan(), &before);
    assert_eq!(session.cursors(), &SelectionCursor::default());
}

#[test]
fn test_override_counts_for_unknown_snack() {
    let mut session = session_with_unknown_snack();
    session.set_diet(Diet::Veg);
    session.calculate(50.0);

    let makhana = session.resolve_snack("makhana").unwrap();
    session.set_snack_quantity(&makhana, 3);
    assert_float_absolute_eq!(session.totals().unwrap().snacks, 0.0);

    session.set_snack_override(&makhana, "4.5").unwrap();
    assert_float_absolute_eq!(session.totals().unwrap().snacks, 13.5);

    session.set_snack_override(&makhana, "a handful").unwrap();
    assert_float_absolute_eq!(session.totals().unwrap().snacks, 0.0);
}

#[test]
fn test_snack_picks_survive_recalculation() {
    let mut session = session();
    session.calculate(70.0);
    let bar = session.resolve_snack("protein bar").unwrap();
    session.set_snack_quantity(&bar, 2);

    session.calculate(80.0);
    assert_eq!(session.snack_selection().quantity(&bar), 2);
    assert_float_absolute_eq!(session.totals().unwrap().snacks, 40.0);
}

#[test]
fn test_non_veg_snack_drops_out_for_veg_diet() {
    let mut session = session();
    session.calculate(70.0);
    let jerky = session.resolve_snack("jerky").unwrap();
    session.set_snack_quantity(&jerky, 1);
    assert!(session.totals().unwrap().snacks > 0.0);

    session.set_diet(Diet::Veg);
    assert_float_absolute_eq!(session.totals().unwrap().snacks, 0.0);

    let err = session.resolve_snack("jerky").unwrap_err();
    assert!(matches!(err, PlannerError::SnackNotFound(_)));
}

#[test]
fn test_session_with_csv_snack_catalog() {
    let csv_text = "name,diet,protein,url\n\
                    Sattu Drink,veg,,https://shop.example/sattu\n\
                    Chicken Sausage,non-veg,14,https://shop.example/sausage\n";
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(csv_text.as_bytes()).unwrap();

    let snacks = load_snack_catalog(file.path()).unwrap();
    let mut session = PlannerSession::new(Catalog::new(builtin_meals(), snacks));
    session.calculate(70.0);

    let sattu = session.resolve_snack("sattu").unwrap();
    session.set_snack_quantity(&sattu, 2);
    session.set_snack_override(&sattu, "10").unwrap();

    let sausage = session.resolve_snack("sausage").unwrap();
    session.set_snack_quantity(&sausage, 1);

    assert_float_absolute_eq!(session.totals().unwrap().snacks, 34.0);
}

#[test]
fn test_report_round_trips_to_json() {
    let mut session = session();
    session.calculate(70.0);
    session.refresh_slot(MealSlot::Lunch);

    let report = PlanReport::from_session(&session).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["meals"][1]["slot"], "lunch");
    assert_eq!(value["meals"][1]["cursor"], 1);
    assert_eq!(value["meals"][1]["meal"]["name"], "Rajma Protein Bowl");
}
