//! Estimate how often each ability score generation method produces a
//! character that qualifies for each class.
//!
//! ```rust
//! # use class_odds::{run_trials, GenerationMethod, Randomizer, RuleSet};
//! #
//! # fn main() -> Result<(), class_odds::RulesError> {
//! let table = RuleSet::Phb.table()?;
//!
//! // Use a seeded randomizer for repeatable runs, or `Randomizer::from_entropy()`
//! let mut roller = Randomizer::seeded(1);
//! let tally = run_trials(GenerationMethod::FourDropLowest, &table, 10_000, &mut roller);
//!
//! for (name, percent) in table.names().zip(tally.class_percentages()) {
//!     println!("{name}: {percent:.2} %");
//! }
//! println!("no class: {:.2} %", tally.no_class_percent());
//! # Ok(())
//! # }
//! ```

mod abilities;
mod dice;
mod method;
mod parse;
mod report;
mod rules;
mod trial;

pub use abilities::{Ability, AbilityScores, NUM_ABILITIES};
pub use dice::{
    roll_3d6, roll_3d6_best_of_6, roll_4d6_drop_lowest, Randomizer, Roller, DIE_SIDES,
};
pub use method::{GenerationMethod, CHARACTERS_PER_BATCH};
pub use report::{
    full_report, master_table, method_report, methods_heading, requirements_report, NO_CLASS,
};
pub use rules::{class_allowed, ClassRequirement, RequirementTable, RuleSet, RulesError};
pub use trial::{
    run_all_methods, run_batch_trials, run_single_set_trials, run_trials, PassTally,
    DEFAULT_TRIALS,
};

/// Runs every method against a built-in rule set with a fresh randomizer.
pub fn simulate_rule_set(rule_set: RuleSet, trials: u64) -> Result<Vec<PassTally>, RulesError> {
    let table = rule_set.table()?;
    Ok(run_all_methods(&table, trials, &mut Randomizer::from_entropy()))
}
