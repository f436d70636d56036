use clap::Parser;
use std::path::Path;

use protein_planner_rs::catalog::{
    builtin_meals, builtin_snacks, load_meal_catalog, load_snack_catalog, Catalog,
};
use protein_planner_rs::cli::{split_assignment, Cli, Command};
use protein_planner_rs::error::{PlannerError, Result};
use protein_planner_rs::interface::{
    display_catalog, display_plan, display_snacks, display_target, display_totals, prompt_action,
    prompt_activity, prompt_diet, prompt_override, prompt_quantity, prompt_snack, prompt_weight,
    prompt_yes_no, PlanReport, SessionAction,
};
use protein_planner_rs::logging::init_logging;
use protein_planner_rs::models::{ActivityLevel, Diet};
use protein_planner_rs::planner::{compute_target, parse_weight};
use protein_planner_rs::state::PlannerSession;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.meals.as_deref(), cli.snacks.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Target { weight, activity } => cmd_target(&weight, &activity),
        Command::Plan {
            weight,
            activity,
            diet,
            rotate,
            snack_picks,
            overrides,
            recipes,
            json,
        } => cmd_plan(
            catalog,
            PlanArgs {
                weight: &weight,
                activity: &activity,
                diet,
                rotate,
                snack_picks: &snack_picks,
                overrides: &overrides,
                recipes,
                json,
            },
        ),
        Command::Catalog { diet, target } => {
            display_catalog(&catalog, diet, target);
            Ok(())
        }
        Command::Session => cmd_session(catalog),
    }
}

/// Built-in banks, replaced by whichever catalog files were given.
fn load_catalog(meals: Option<&Path>, snacks: Option<&Path>) -> Result<Catalog> {
    let meals = match meals {
        Some(path) => load_meal_catalog(path)?,
        None => builtin_meals(),
    };
    let snacks = match snacks {
        Some(path) => load_snack_catalog(path)?,
        None => builtin_snacks(),
    };
    Ok(Catalog::new(meals, snacks))
}

/// Print the daily protein target.
fn cmd_target(weight_input: &str, activity_tag: &str) -> Result<()> {
    let activity = ActivityLevel::from_tag(activity_tag);

    let Some(weight) = parse_weight(weight_input) else {
        eprintln!("Please enter a positive weight in kg (got '{}').", weight_input);
        return Ok(());
    };

    if let Some(target) = compute_target(weight, activity) {
        display_target(weight, activity, target);
    }

    Ok(())
}

struct PlanArgs<'a> {
    weight: &'a str,
    activity: &'a str,
    diet: Diet,
    rotate: usize,
    snack_picks: &'a [String],
    overrides: &'a [String],
    recipes: bool,
    json: bool,
}

/// Build a plan in one shot and print it.
fn cmd_plan(catalog: Catalog, args: PlanArgs<'_>) -> Result<()> {
    let mut session = PlannerSession::new(catalog);
    session.set_activity(ActivityLevel::from_tag(args.activity));
    session.set_diet(args.diet);

    if session.calculate_input(args.weight).is_none() {
        eprintln!("Please enter a positive weight in kg (got '{}').", args.weight);
        return Ok(());
    }

    for _ in 0..args.rotate {
        session.refresh_all();
    }

    for pick in args.snack_picks {
        let (query, packs) = split_assignment(pick)?;
        let packs: u32 = packs.parse().map_err(|_| {
            PlannerError::InvalidInput(format!("pack count for '{}' must be a whole number", query))
        })?;
        let name = session.resolve_snack(query)?;
        session.set_snack_quantity(&name, packs);
    }

    for entry in args.overrides {
        let (query, grams) = split_assignment(entry)?;
        let name = session.resolve_snack(query)?;
        session.set_snack_override(&name, grams)?;
    }

    if args.json {
        if let Some(report) = PlanReport::from_session(&session) {
            println!("{}", report.to_json()?);
        }
        return Ok(());
    }

    show_session(&session, args.recipes);
    Ok(())
}

fn show_session(session: &PlannerSession, recipes: bool) {
    let Some(target) = session.target() else {
        return;
    };

    display_plan(session.plan(), target, recipes);
    display_snacks(&session.visible_snacks(), session.snack_selection());
    if let Some(totals) = session.totals() {
        display_totals(&totals);
    }
}

/// Ask for activity, diet and weight until a target is calculated.
///
/// Returns `false` if the user gives up.
fn calculate_interactively(session: &mut PlannerSession) -> Result<bool> {
    let activity = prompt_activity(session.activity())?;
    session.set_activity(activity);

    let diet = prompt_diet(session.diet())?;
    session.set_diet(diet);

    loop {
        let input = prompt_weight()?;
        if session.calculate_input(&input).is_some() {
            return Ok(true);
        }

        println!("Please enter a positive weight in kg.");
        if !prompt_yes_no("Try again?", true)? {
            return Ok(false);
        }
    }
}

/// Interactive planning session.
fn cmd_session(catalog: Catalog) -> Result<()> {
    let mut session = PlannerSession::new(catalog);

    println!("Protein Calculator");
    println!("Find your daily protein target and get a refreshable day plan with recipes.");
    println!();

    if !calculate_interactively(&mut session)? {
        return Ok(());
    }

    let mut show_recipes = false;

    loop {
        show_session(&session, show_recipes);
        show_recipes = false;

        match prompt_action()? {
            SessionAction::RefreshSlot(slot) => {
                if session.refresh_slot(slot).is_none() {
                    println!("No other {} suggestion available.", slot.title().to_lowercase());
                }
            }
            SessionAction::RefreshAll => {
                session.refresh_all();
            }
            SessionAction::ShowRecipes => show_recipes = true,
            SessionAction::AddSnack => {
                if let Some(name) = prompt_snack(&session.visible_snacks())? {
                    let packs = session.add_snack(&name);
                    println!("{}: {} pack(s)", name, packs);
                }
            }
            SessionAction::RemoveSnack => {
                if let Some(name) = prompt_snack(&session.visible_snacks())? {
                    let packs = session.remove_snack(&name);
                    println!("{}: {} pack(s)", name, packs);
                }
            }
            SessionAction::SetSnackQuantity => {
                if let Some(name) = prompt_snack(&session.visible_snacks())? {
                    let current = session.snack_selection().quantity(&name);
                    match prompt_quantity(&name, current) {
                        Ok(packs) => session.set_snack_quantity(&name, packs),
                        Err(PlannerError::InvalidInput(msg)) => println!("{}", msg),
                        Err(e) => return Err(e),
                    }
                }
            }
            SessionAction::SetSnackProtein => {
                if let Some(name) = prompt_snack(&session.visible_snacks())? {
                    let text = prompt_override(&name)?;
                    if let Err(e) = session.set_snack_override(&name, &text) {
                        println!("{}", e);
                    }
                }
            }
            SessionAction::ChangeDiet => {
                let diet = prompt_diet(session.diet())?;
                session.set_diet(diet);
            }
            SessionAction::Recalculate => {
                calculate_interactively(&mut session)?;
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}
