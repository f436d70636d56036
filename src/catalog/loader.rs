use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{MealCatalog, SnackCatalog};
use crate::error::{PlannerError, Result};
use crate::models::{Diet, MealSlot, SnackOption};

/// One row of a snack CSV file: `name,diet,protein,url`.
///
/// An empty `protein` cell means the pack's protein is unknown.
#[derive(Debug, Deserialize)]
struct SnackRow {
    name: String,
    diet: Diet,
    protein: Option<f64>,
    url: String,
}

/// Load a meal catalog from a JSON file.
pub fn load_meal_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let catalog: MealCatalog = serde_json::from_str(&content)?;
    validate_meals(&catalog)?;

    tracing::debug!(
        path = %path.as_ref().display(),
        meals = catalog.meal_count(),
        "loaded meal catalog"
    );
    Ok(catalog)
}

/// Load a snack catalog from a `.csv` file, or from JSON for any other extension.
pub fn load_snack_catalog<P: AsRef<Path>>(path: P) -> Result<SnackCatalog> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let catalog = if is_csv {
        read_snack_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };
    validate_snacks(&catalog)?;

    tracing::debug!(
        path = %path.display(),
        snacks = catalog.snack_count(),
        "loaded snack catalog"
    );
    Ok(catalog)
}

fn read_snack_csv(path: &Path) -> Result<SnackCatalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut catalog = SnackCatalog::default();

    for row in reader.deserialize() {
        let row: SnackRow = row?;
        let snack = SnackOption {
            name: row.name.trim().to_string(),
            protein_per_pack: row.protein,
            purchase_ref: row.url,
        };
        match row.diet {
            Diet::Veg => catalog.veg.push(snack),
            Diet::NonVeg => catalog.non_veg.push(snack),
        }
    }

    Ok(catalog)
}

/// Reject meals with blank names or unusable nutrition values.
pub fn validate_meals(catalog: &MealCatalog) -> Result<()> {
    for slot in MealSlot::ALL {
        if let Some(bad) = catalog.slot(slot).iter().find(|m| !m.is_valid()) {
            return Err(PlannerError::InvalidCatalog(format!(
                "{} entry '{}' has a blank name or invalid protein/calories",
                slot, bad.name
            )));
        }
    }
    Ok(())
}

/// Reject invalid snacks and duplicate names (case-insensitive).
///
/// Snack picks are keyed by name, so two entries sharing one would share a quantity.
pub fn validate_snacks(catalog: &SnackCatalog) -> Result<()> {
    let mut seen = HashSet::new();
    for snack in catalog.non_veg.iter().chain(catalog.veg.iter()) {
        if !snack.is_valid() {
            return Err(PlannerError::InvalidCatalog(format!(
                "snack '{}' has a blank name or invalid protein",
                snack.name
            )));
        }
        if !seen.insert(snack.name.to_lowercase()) {
            return Err(PlannerError::InvalidCatalog(format!(
                "duplicate snack name '{}'",
                snack.name
            )));
        }
    }
    Ok(())
}
