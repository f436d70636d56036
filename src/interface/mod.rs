pub mod prompts;
pub mod render;
pub mod report;

pub use prompts::{
    prompt_action, prompt_activity, prompt_diet, prompt_override, prompt_quantity, prompt_snack,
    prompt_weight, prompt_yes_no, SessionAction,
};
pub use render::{display_catalog, display_plan, display_snacks, display_target, display_totals};
pub use report::PlanReport;
