use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{PlannerError, Result};
use crate::models::Diet;

/// Protein Planner: find your daily protein target and a day of meals to hit it.
#[derive(Parser, Debug)]
#[command(name = "protein_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Meal catalog JSON file (defaults to the built-in meal bank).
    #[arg(long, global = true, env = "PROTEIN_PLANNER_MEALS")]
    pub meals: Option<PathBuf>,

    /// Snack catalog CSV or JSON file (defaults to the built-in snack bank).
    #[arg(long, global = true, env = "PROTEIN_PLANNER_SNACKS")]
    pub snacks: Option<PathBuf>,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the daily protein target.
    Target {
        /// Body weight in kg.
        #[arg(short, long)]
        weight: String,

        /// Activity level: sedentary, moderate or active.
        #[arg(short, long, default_value = "sedentary")]
        activity: String,
    },

    /// Print a day plan with snacks and totals.
    Plan {
        /// Body weight in kg.
        #[arg(short, long)]
        weight: String,

        /// Activity level: sedentary, moderate or active.
        #[arg(short, long, default_value = "sedentary")]
        activity: String,

        /// Diet preference: veg or non-veg.
        #[arg(short, long, default_value = "non-veg", value_parser = parse_diet)]
        diet: Diet,

        /// Regenerate all meals this many times before printing.
        #[arg(long, default_value_t = 0)]
        rotate: usize,

        /// Snack packs to add, as NAME=PACKS (repeatable).
        #[arg(long = "snack", value_name = "NAME=PACKS")]
        snack_picks: Vec<String>,

        /// Protein per pack for snacks without a listed value, as NAME=GRAMS.
        #[arg(long = "override", value_name = "NAME=GRAMS")]
        overrides: Vec<String>,

        /// Include recipe steps and video links.
        #[arg(long)]
        recipes: bool,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the meal and snack banks.
    Catalog {
        /// Only show entries for this diet.
        #[arg(short, long, default_value = "non-veg", value_parser = parse_diet)]
        diet: Diet,

        /// Rank meals by closeness to this daily target (grams).
        #[arg(short, long)]
        target: Option<f64>,
    },

    /// Interactive session: calculate, refresh meals and pick snacks.
    Session,
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}

fn parse_diet(s: &str) -> std::result::Result<Diet, String> {
    Diet::from_tag(s).ok_or_else(|| format!("unknown diet '{}', expected veg or non-veg", s))
}

/// Split a `NAME=VALUE` argument at its last `=`.
pub fn split_assignment(arg: &str) -> Result<(&str, &str)> {
    match arg.rsplit_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(PlannerError::InvalidInput(format!("expected NAME=VALUE, got '{}'", arg))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_session() {
        let cli = Cli::try_parse_from(["protein_planner"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Session));
    }

    #[test]
    fn test_plan_arguments() {
        let cli = Cli::try_parse_from([
            "protein_planner",
            "plan",
            "-w",
            "70",
            "-d",
            "veg",
            "--snack",
            "jerky=2",
            "--snack",
            "bar=1",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Plan {
                weight,
                diet,
                snack_picks,
                rotate,
                ..
            }) => {
                assert_eq!(weight, "70");
                assert_eq!(diet, Diet::Veg);
                assert_eq!(snack_picks.len(), 2);
                assert_eq!(rotate, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_diet_is_rejected() {
        let result = Cli::try_parse_from(["protein_planner", "plan", "-w", "70", "-d", "vegan"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_split_assignment() {
        assert_eq!(split_assignment("Bar = 2").unwrap(), ("Bar", "2"));
        assert_eq!(split_assignment("a=b=3").unwrap(), ("a=b", "3"));
        assert!(split_assignment("Bar").is_err());
        assert!(split_assignment("=2").is_err());
    }
}
