pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::Catalog;
pub use error::{PlannerError, Result};
pub use models::{ActivityLevel, Diet, MealOption, MealSlot, PlanState, SnackOption};
pub use state::PlannerSession;
