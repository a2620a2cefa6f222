use std::collections::HashSet;

use crate::abilities::{AbilityScores, NUM_ABILITIES};
use crate::parse::parse_catalog;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("could not parse class requirements: {0}")]
    Parse(String),
    #[error("class requirements table has no classes")]
    Empty,
    #[error("class `{0}` is listed more than once")]
    DuplicateClass(String),
}

/// The minimum score a class needs in each ability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRequirement {
    name: String,
    minimums: AbilityScores,
}

impl ClassRequirement {
    pub fn new(name: impl Into<String>, minimums: impl Into<AbilityScores>) -> Self {
        Self {
            name: name.into(),
            minimums: minimums.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minimums(&self) -> &AbilityScores {
        &self.minimums
    }

    /// Same class with its minimums sorted highest first.
    pub fn sorted_descending(&self) -> Self {
        Self {
            name: self.name.clone(),
            minimums: self.minimums.sorted_descending(),
        }
    }
}

/// Do we qualify for this class with these scores?
pub fn class_allowed(requirement: &ClassRequirement, scores: &AbilityScores) -> bool {
    scores.dominates(requirement.minimums())
}

/// A class catalog together with its sorted counterpart.
///
/// The sorted catalog is built once here. Checking descending-sorted scores
/// against it tells whether the scores could be arranged to meet the class
/// minimums, which is what the methods that allow reordering need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementTable {
    classes: Vec<ClassRequirement>,
    sorted: Vec<ClassRequirement>,
}

impl RequirementTable {
    pub fn new(classes: Vec<ClassRequirement>) -> Result<Self, RulesError> {
        if classes.is_empty() {
            return Err(RulesError::Empty);
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = classes.iter().find(|c| !seen.insert(c.name())) {
            return Err(RulesError::DuplicateClass(duplicate.name().to_string()));
        }

        let sorted = classes.iter().map(|c| c.sorted_descending()).collect();
        Ok(Self { classes, sorted })
    }

    /// Parses a catalog written as one `name str int wis dex con cha` row per class.
    pub fn parse(text: &str) -> Result<Self, RulesError> {
        let classes = parse_catalog(text).map_err(RulesError::Parse)?;
        Self::new(classes)
    }

    /// Classes with minimums tied to their abilities.
    pub fn classes(&self) -> &[ClassRequirement] {
        &self.classes
    }

    /// Classes with minimums sorted highest first, in the same class order.
    pub fn sorted(&self) -> &[ClassRequirement] {
        &self.sorted
    }

    /// The catalog a method should be tested against.
    pub fn catalog(&self, reordered: bool) -> &[ClassRequirement] {
        if reordered {
            &self.sorted
        } else {
            &self.classes
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name())
    }
}

/// Built-in class catalogs.
///
/// Subclass rows assume the parent class minimums carry over (a Ranger also
/// needs a Fighter's minimums) unless the book says otherwise, so Illusionist
/// and Assassin keep their lower floors. The code neither derives nor checks this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum RuleSet {
    /// First edition Players Handbook.
    #[default]
    Phb,
    /// Players Handbook classes revised and extended by Unearthed Arcana.
    UnearthedArcana,
    /// Original edition with its supplements.
    Original,
}

impl RuleSet {
    pub const ALL: [RuleSet; 3] = [RuleSet::Phb, RuleSet::UnearthedArcana, RuleSet::Original];

    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Phb => "1E Players Handbook",
            RuleSet::UnearthedArcana => "1E Unearthed Arcana",
            RuleSet::Original => "Original Edition",
        }
    }

    pub fn catalog_text(self) -> &'static str {
        match self {
            RuleSet::Phb => PHB_CLASSES,
            RuleSet::UnearthedArcana => UNEARTHED_ARCANA_CLASSES,
            RuleSet::Original => ORIGINAL_CLASSES,
        }
    }

    pub fn table(self) -> Result<RequirementTable, RulesError> {
        RequirementTable::parse(self.catalog_text())
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const PHB_CLASSES: &str = "
# name          Str Int Wis Dex Con Cha
Cleric            6   6   9   3   6   6
Druid             6   6  12   3   6  15
Fighter           9   3   6   6   7   6
Paladin          12   9  13   6   9  17
Ranger           13  13  14   6  14   6
Magic-User        3   9   6   6   6   6
Illusionist       3  15   6  16   3   6
Thief             6   6   3   9   6   6
Assassin         12  11   3  12   6   3
Monk             15   6  15  15  11   6
";

const UNEARTHED_ARCANA_CLASSES: &str = "
# name          Str Int Wis Dex Con Cha
Cleric            6   6   9   3   6   6
Druid             6   6  12   3   6  15
Fighter           9   3   6   6   7   6
Barbarian        15   3   6  14  15   6   # fighter subclass
Ranger           13  13  14   6  14   6
Cavalier         15  10  10  15  15   6   # fighter subclass
Paladin          15  10  13  15  15  17   # cavalier subclass
Magic-User        3   9   6   6   6   6
Illusionist       3  15   6  16   3   6
Thief             6   6   3   9   6   6
Thief-Acrobat    15   6   3  16   6   6
Assassin         12  11   3  12   6   3
Monk             15   6  15  15  11   6
";

const ORIGINAL_CLASSES: &str = "
# name          Str Int Wis Dex Con Cha
Fighting-Man      3   3   3   3   3   3
Magic-User        3   3   3   3   3   3
Cleric            3   3   3   3   3   3
Thief             3   3   3   3   3   3
Paladin           3   3   3   3   3  17
Ranger            3  12  12   3  15   3
Monk             12   3  15  15   3   3
Assassin         12  12   3  12   3   3
Druid             3   3  12   3   3  14
Illusionist       3  15   3  16   3   3
Bard             15  12  15  15  10  15
";
