use crate::dice::Roller;
use crate::method::GenerationMethod;
use crate::rules::{class_allowed, RequirementTable};

/// Reference trial count.
pub const DEFAULT_TRIALS: u64 = 10_000;

/// How many trials each class qualified in for one generation method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassTally {
    method: GenerationMethod,
    trials: u64,
    passes: Vec<u64>,
    no_class: u64,
}

impl PassTally {
    pub fn new(method: GenerationMethod, classes: usize) -> Self {
        Self {
            method,
            trials: 0,
            passes: vec![0; classes],
            no_class: 0,
        }
    }

    pub fn method(&self) -> GenerationMethod {
        self.method
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Pass counts in the order of the requirement table's classes.
    pub fn passes(&self) -> &[u64] {
        &self.passes
    }

    /// Trials in which not a single class qualified.
    pub fn no_class(&self) -> u64 {
        self.no_class
    }

    /// Trials in which at least one class qualified.
    pub fn any_class(&self) -> u64 {
        self.trials - self.no_class
    }

    /// `count` as a percentage of the trials run.
    pub fn percent(&self, count: u64) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        count as f64 / self.trials as f64 * 100.0
    }

    pub fn class_percentages(&self) -> impl Iterator<Item = f64> + '_ {
        self.passes.iter().map(|count| self.percent(*count))
    }

    pub fn no_class_percent(&self) -> f64 {
        self.percent(self.no_class)
    }

    fn record(&mut self, qualified: &[bool]) {
        self.trials += 1;
        let mut any = false;
        for (count, passed) in self.passes.iter_mut().zip(qualified) {
            if *passed {
                *count += 1;
                any = true;
            }
        }
        if !any {
            self.no_class += 1;
        }
    }
}

/// Runs `trials` trials of `method` against `table`.
pub fn run_trials(
    method: GenerationMethod,
    table: &RequirementTable,
    trials: u64,
    roller: &mut impl Roller,
) -> PassTally {
    log::info!("running {trials} trials of {method}: {}", method.description());

    let tally = if method.is_batch() {
        run_batch_trials(table, trials, roller)
    } else {
        run_single_set_trials(method, table, trials, roller)
    };

    log::debug!(
        "{method} finished, no class in {} of {} trials",
        tally.no_class(),
        tally.trials()
    );
    tally
}

/// Runs every generation method against `table`, in method order.
pub fn run_all_methods(
    table: &RequirementTable,
    trials: u64,
    roller: &mut impl Roller,
) -> Vec<PassTally> {
    GenerationMethod::ALL
        .iter()
        .map(|method| run_trials(*method, table, trials, roller))
        .collect()
}

/// Trials for the methods that roll one set of scores per trial.
///
/// Panics if given `GenerationMethod::BestOfTwelveCharacters`, which needs
/// `run_batch_trials` instead.
pub fn run_single_set_trials(
    method: GenerationMethod,
    table: &RequirementTable,
    trials: u64,
    roller: &mut impl Roller,
) -> PassTally {
    assert!(
        !method.is_batch(),
        "{method} rolls several characters per trial, use run_batch_trials"
    );

    let reorder = method.allows_reorder();
    let catalog = table.catalog(reorder);
    let mut tally = PassTally::new(method, table.len());
    let mut qualified = vec![false; table.len()];

    for _ in 0..trials {
        let mut scores = method.generate(roller);
        if reorder {
            scores = scores.sorted_descending();
        }
        for (passed, class) in qualified.iter_mut().zip(catalog) {
            *passed = class_allowed(class, &scores);
        }
        tally.record(&qualified);
    }

    tally
}

/// Trials for `GenerationMethod::BestOfTwelveCharacters`.
///
/// A class passes a trial when any of the twelve characters qualifies for it.
pub fn run_batch_trials(
    table: &RequirementTable,
    trials: u64,
    roller: &mut impl Roller,
) -> PassTally {
    let mut tally = PassTally::new(GenerationMethod::BestOfTwelveCharacters, table.len());
    let mut qualified = vec![false; table.len()];

    for _ in 0..trials {
        let characters = GenerationMethod::generate_batch(roller);
        for (passed, class) in qualified.iter_mut().zip(table.classes()) {
            *passed = characters
                .iter()
                .any(|scores| class_allowed(class, scores));
        }
        tally.record(&qualified);
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::{run_all_methods, run_batch_trials, run_single_set_trials, run_trials, PassTally};
    use crate::dice::tests::{FixedDie, SequenceDie};
    use crate::dice::Randomizer;
    use crate::method::GenerationMethod::{self, *};
    use crate::rules::{ClassRequirement, RequirementTable, RuleSet};

    fn table(rows: &[(&str, [u32; 6])]) -> RequirementTable {
        RequirementTable::new(
            rows.iter()
                .map(|(name, minimums)| ClassRequirement::new(*name, *minimums))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_percent() {
        let mut tally = PassTally::new(InOrder, 2);
        tally.record(&[true, false]);
        tally.record(&[true, true]);
        tally.record(&[false, false]);
        tally.record(&[true, false]);

        assert_eq!(tally.trials(), 4);
        assert_eq!(tally.passes(), &[3, 1]);
        assert_eq!(tally.no_class(), 1);
        assert_eq!(tally.any_class(), 3);
        assert_eq!(tally.class_percentages().collect::<Vec<_>>(), [75.0, 25.0]);
        assert_eq!(tally.no_class_percent(), 25.0);
    }

    #[test]
    fn test_percent_without_trials() {
        let tally = PassTally::new(InOrder, 1);
        assert_eq!(tally.percent(0), 0.0);
    }

    #[test]
    fn test_zero_minimums_always_pass() {
        let table = table(&[("Anyone", [0; 6]), ("Hero", [18; 6])]);
        let mut roller = Randomizer::seeded(1);
        let tally = run_trials(InOrder, &table, 1000, &mut roller);

        assert_eq!(tally.passes()[0], 1000);
        assert_eq!(tally.no_class(), 0);
    }

    #[test]
    fn test_fixed_threes_fail_classes_above_nine() {
        let table = table(&[("Plain", [9; 6]), ("Strong", [10, 3, 3, 3, 3, 3])]);
        let tally = run_trials(InOrder, &table, 50, &mut FixedDie(3));

        assert_eq!(tally.passes(), &[50, 0]);
        assert_eq!(tally.no_class(), 0);
    }

    #[test]
    fn test_no_class_when_nothing_qualifies() {
        let table = table(&[("Strong", [10, 3, 3, 3, 3, 3])]);
        for method in GenerationMethod::ALL {
            let tally = run_trials(method, &table, 20, &mut FixedDie(1));
            assert_eq!(tally.passes(), &[0], "{method}");
            assert_eq!(tally.no_class(), 20, "{method}");
        }
    }

    #[test]
    fn test_reordered_methods_use_sorted_catalog() {
        // rolls an 18 for Strength and 3 everywhere else
        let mut faces = vec![6; 4];
        faces.extend([1; 20]);
        let table = table(&[("Charmer", [3, 3, 3, 3, 3, 18])]);

        let arranged = run_trials(FourDropLowest, &table, 10, &mut SequenceDie::new(&faces));
        assert_eq!(arranged.passes(), &[10]);

        let in_order = run_trials(InOrder, &table, 10, &mut SequenceDie::new(&faces));
        assert_eq!(in_order.passes(), &[0]);
    }

    #[test]
    fn test_single_set_counts_add_up() {
        let table = RuleSet::Phb.table().unwrap();
        let mut roller = Randomizer::seeded(9);

        for method in [InOrder, FourDropLowest, BestSixOfTwelve, BestOfSixPerAbility] {
            let tally = run_trials(method, &table, 2000, &mut roller);
            assert_eq!(tally.trials(), 2000);
            assert!(tally.passes().iter().all(|p| *p <= 2000), "{method}");
            assert_eq!(tally.no_class() + tally.any_class(), 2000);
        }
    }

    #[test]
    #[should_panic(expected = "run_batch_trials")]
    fn test_single_set_rejects_batch_method() {
        let table = RuleSet::Phb.table().unwrap();
        run_single_set_trials(BestOfTwelveCharacters, &table, 1, &mut FixedDie(6));
    }

    #[test]
    fn test_batch_counts_each_class_once_per_trial() {
        let table = table(&[("Anyone", [3; 6])]);
        let tally = run_batch_trials(&table, 100, &mut FixedDie(6));

        assert_eq!(tally.method(), BestOfTwelveCharacters);
        assert_eq!(tally.passes(), &[100]);
        assert_eq!(tally.no_class(), 0);
    }

    #[test]
    fn test_batch_improves_on_in_order() {
        let table = RuleSet::Phb.table().unwrap();
        let mut roller = Randomizer::seeded(21);
        let in_order = run_trials(InOrder, &table, 5000, &mut roller);
        let batch = run_trials(BestOfTwelveCharacters, &table, 5000, &mut roller);

        assert!(batch.no_class_percent() <= in_order.no_class_percent());
        for (single, twelve) in in_order.passes().iter().zip(batch.passes()) {
            assert!(twelve >= single);
        }
    }

    #[test]
    fn test_run_all_methods_in_order() {
        let table = RuleSet::Phb.table().unwrap();
        let tallies = run_all_methods(&table, 10, &mut Randomizer::seeded(2));
        let methods: Vec<_> = tallies.iter().map(|t| t.method()).collect();
        assert_eq!(methods, GenerationMethod::ALL);
    }
}
