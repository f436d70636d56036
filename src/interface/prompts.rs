use dialoguer::{Confirm, Input, Select};

use crate::catalog::rank_snack_matches;
use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Diet, MealSlot, SnackOption};

/// Actions offered once a plan exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    RefreshSlot(MealSlot),
    RefreshAll,
    ShowRecipes,
    AddSnack,
    RemoveSnack,
    SetSnackQuantity,
    SetSnackProtein,
    ChangeDiet,
    Recalculate,
    Quit,
}

impl SessionAction {
    const MENU: [SessionAction; 12] = [
        SessionAction::RefreshSlot(MealSlot::Breakfast),
        SessionAction::RefreshSlot(MealSlot::Lunch),
        SessionAction::RefreshSlot(MealSlot::Dinner),
        SessionAction::RefreshAll,
        SessionAction::ShowRecipes,
        SessionAction::AddSnack,
        SessionAction::RemoveSnack,
        SessionAction::SetSnackQuantity,
        SessionAction::SetSnackProtein,
        SessionAction::ChangeDiet,
        SessionAction::Recalculate,
        SessionAction::Quit,
    ];

    fn label(self) -> String {
        match self {
            SessionAction::RefreshSlot(slot) => format!("Refresh {}", slot.title().to_lowercase()),
            SessionAction::RefreshAll => "Regenerate all".to_string(),
            SessionAction::ShowRecipes => "View recipes".to_string(),
            SessionAction::AddSnack => "Add a snack pack".to_string(),
            SessionAction::RemoveSnack => "Remove a snack pack".to_string(),
            SessionAction::SetSnackQuantity => "Set snack pack count".to_string(),
            SessionAction::SetSnackProtein => "Enter protein for a snack".to_string(),
            SessionAction::ChangeDiet => "Change diet preference".to_string(),
            SessionAction::Recalculate => "Recalculate target".to_string(),
            SessionAction::Quit => "Quit".to_string(),
        }
    }
}

/// Prompt for body weight; the raw text is validated by the caller.
pub fn prompt_weight() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for activity level.
pub fn prompt_activity(current: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|a| *a == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for diet preference.
pub fn prompt_diet(current: Diet) -> Result<Diet> {
    let options = [Diet::NonVeg, Diet::Veg];
    let labels: Vec<&str> = options.iter().map(|d| d.label()).collect();
    let default = if current == Diet::Veg { 1 } else { 0 };

    let selection = Select::new()
        .with_prompt("Diet preference")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for the next session action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<String> = SessionAction::MENU.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(SessionAction::MENU[selection])
}

/// Prompt for a snack by name, with fuzzy matching.
///
/// Returns `None` if the user leaves the prompt empty or rejects the matches.
pub fn prompt_snack(snacks: &[&SnackOption]) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Snack name (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        if let Some(snack) = snacks
            .iter()
            .find(|s| s.name.to_lowercase() == input.to_lowercase())
        {
            return Ok(Some(snack.name.clone()));
        }

        let candidates = rank_snack_matches(snacks, input);

        if candidates.is_empty() {
            println!("No matching snack found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let snack = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", snack.name))
                .default(true)
                .interact()?;

            return Ok(confirm.then(|| snack.name.clone()));
        }

        // Multiple matches - let user select
        let mut options: Vec<String> = candidates.iter().map(|(s, _)| s.name.clone()).collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        return Ok((selection < candidates.len()).then(|| options[selection].clone()));
    }
}

/// Prompt for a pack count.
pub fn prompt_quantity(snack_name: &str, current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("Packs of '{}'", snack_name))
        .default(current.to_string())
        .interact_text()?;

    parse_pack_count(&input)
}

fn parse_pack_count(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Pack count must be a whole number".to_string()))
}

/// Prompt for per-pack protein of a snack without a listed value.
pub fn prompt_override(snack_name: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("Protein per pack of '{}' (g)", snack_name))
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
