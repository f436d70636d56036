pub mod calculations;
pub mod constants;
pub mod ranking;

pub use calculations::{
    compute_target, leading_number, parse_override, parse_weight, remaining, round_to_decimals,
    snack_line_protein, snack_protein_per_pack, sum_plan_protein, sum_snack_protein, surplus,
    ProteinTotals,
};
pub use constants::*;
pub use ranking::{
    advance_all, advance_one, generate_full_plan, ranked_candidates, select_closest,
    slot_subgoal,
};
