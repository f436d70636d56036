use serde::{Deserialize, Serialize};

use crate::models::{MealOption, MealSlot};

/// The day's suggested meals; a slot is `None` when nothing fits the diet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanState {
    pub breakfast: Option<MealOption>,
    pub lunch: Option<MealOption>,
    pub dinner: Option<MealOption>,
}

impl PlanState {
    pub fn get(&self, slot: MealSlot) -> Option<&MealOption> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    pub fn set(&mut self, slot: MealSlot, meal: Option<MealOption>) {
        match slot {
            MealSlot::Breakfast => self.breakfast = meal,
            MealSlot::Lunch => self.lunch = meal,
            MealSlot::Dinner => self.dinner = meal,
        }
    }

    /// Present meals in slot order.
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &MealOption)> {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|m| (slot, m)))
    }
}

/// Per-slot rotation index into the closeness-sorted candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCursor {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
}

impl SelectionCursor {
    pub fn get(&self, slot: MealSlot) -> usize {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn set(&mut self, slot: MealSlot, index: usize) {
        match slot {
            MealSlot::Breakfast => self.breakfast = index,
            MealSlot::Lunch => self.lunch = index,
            MealSlot::Dinner => self.dinner = index,
        }
    }
}
