mod builtin;
mod loader;
mod search;

pub use builtin::{builtin_meals, builtin_snacks};
pub use loader::{load_meal_catalog, load_snack_catalog, validate_meals, validate_snacks};
pub use search::{find_snack, rank_snack_matches};

use serde::{Deserialize, Serialize};

use crate::models::{Diet, MealOption, MealSlot, SnackOption};

/// Candidate meals for each slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealCatalog {
    #[serde(default)]
    pub breakfast: Vec<MealOption>,
    #[serde(default)]
    pub lunch: Vec<MealOption>,
    #[serde(default)]
    pub dinner: Vec<MealOption>,
}

impl MealCatalog {
    pub fn slot(&self, slot: MealSlot) -> &[MealOption] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// A slot's meals that the diet preference allows, in catalog order.
    pub fn candidates(&self, slot: MealSlot, diet: Diet) -> Vec<&MealOption> {
        self.slot(slot)
            .iter()
            .filter(|m| diet.admits(m.diet_tag))
            .collect()
    }

    /// Meals across all three slots.
    pub fn meal_count(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }
}

/// Packaged snacks, split into the veg list and the non-veg extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnackCatalog {
    #[serde(default)]
    pub veg: Vec<SnackOption>,
    #[serde(rename = "non-veg", default)]
    pub non_veg: Vec<SnackOption>,
}

impl SnackCatalog {
    /// Snacks shown for a diet preference.
    ///
    /// Non-vegetarians get the non-veg list followed by the veg list.
    pub fn for_diet(&self, diet: Diet) -> Vec<&SnackOption> {
        match diet {
            Diet::Veg => self.veg.iter().collect(),
            Diet::NonVeg => self.non_veg.iter().chain(self.veg.iter()).collect(),
        }
    }

    pub fn snack_count(&self) -> usize {
        self.veg.len() + self.non_veg.len()
    }
}

/// Meal bank and snack bank handed to a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub meals: MealCatalog,
    pub snacks: SnackCatalog,
}

impl Catalog {
    pub fn new(meals: MealCatalog, snacks: SnackCatalog) -> Self {
        Self { meals, snacks }
    }

    /// The catalog that ships with the tool.
    pub fn builtin() -> Self {
        Self::new(builtin_meals(), builtin_snacks())
    }
}
