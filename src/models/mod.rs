mod activity;
mod meal;
mod plan;
mod snack;

pub use activity::ActivityLevel;
pub use meal::{Diet, MealOption, MealSlot};
pub use plan::{PlanState, SelectionCursor};
pub use snack::{SnackOption, SnackSelection};
