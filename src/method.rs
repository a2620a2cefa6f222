use crate::abilities::{AbilityScores, NUM_ABILITIES};
use crate::dice::{roll_3d6, roll_3d6_best_of_6, roll_4d6_drop_lowest, Roller};

/// Number of characters rolled per trial by `GenerationMethod::BestOfTwelveCharacters`.
pub const CHARACTERS_PER_BATCH: usize = 12;

/// Number of 3d6 rolls `GenerationMethod::BestSixOfTwelve` chooses from.
const ROLLS_PER_DOZEN: usize = 12;

/// Ways of generating ability scores, numbered from 0 like their book
/// counterparts I to V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMethod {
    /// 3d6 per ability, in order.
    InOrder,
    /// 4d6 drop lowest per ability, arranged to taste.
    FourDropLowest,
    /// Best six of twelve 3d6 rolls, arranged to taste.
    BestSixOfTwelve,
    /// Best of six 3d6 rolls per ability, in order.
    BestOfSixPerAbility,
    /// Twelve characters rolled 3d6 in order, keep whichever qualifies.
    BestOfTwelveCharacters,
}

impl GenerationMethod {
    pub const ALL: [GenerationMethod; 5] = [
        GenerationMethod::InOrder,
        GenerationMethod::FourDropLowest,
        GenerationMethod::BestSixOfTwelve,
        GenerationMethod::BestOfSixPerAbility,
        GenerationMethod::BestOfTwelveCharacters,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn roman(self) -> &'static str {
        match self {
            GenerationMethod::InOrder => "I",
            GenerationMethod::FourDropLowest => "II",
            GenerationMethod::BestSixOfTwelve => "III",
            GenerationMethod::BestOfSixPerAbility => "IV",
            GenerationMethod::BestOfTwelveCharacters => "V",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GenerationMethod::InOrder => "3d6 in order",
            GenerationMethod::FourDropLowest => "4d6 drop lowest",
            GenerationMethod::BestSixOfTwelve => "best 6 of 12",
            GenerationMethod::BestOfSixPerAbility => "best of 6 per ability",
            GenerationMethod::BestOfTwelveCharacters => "best of 12 characters",
        }
    }

    /// Can the rolled scores be assigned to abilities freely?
    pub fn allows_reorder(self) -> bool {
        matches!(
            self,
            GenerationMethod::FourDropLowest | GenerationMethod::BestSixOfTwelve
        )
    }

    /// Does a single trial roll several whole characters?
    pub fn is_batch(self) -> bool {
        self == GenerationMethod::BestOfTwelveCharacters
    }

    /// Rolls one set of scores.
    ///
    /// For `BestOfTwelveCharacters` this is one of the twelve characters,
    /// use `generate_batch` to roll a full trial.
    pub fn generate(self, roller: &mut impl Roller) -> AbilityScores {
        match self {
            GenerationMethod::InOrder | GenerationMethod::BestOfTwelveCharacters => {
                each_ability(|| roll_3d6(roller))
            }
            GenerationMethod::FourDropLowest => each_ability(|| roll_4d6_drop_lowest(roller)),
            GenerationMethod::BestSixOfTwelve => best_six_of_twelve(roller),
            GenerationMethod::BestOfSixPerAbility => each_ability(|| roll_3d6_best_of_6(roller)),
        }
    }

    /// Rolls the twelve characters of one `BestOfTwelveCharacters` trial.
    pub fn generate_batch(roller: &mut impl Roller) -> [AbilityScores; CHARACTERS_PER_BATCH] {
        std::array::from_fn(|_| GenerationMethod::BestOfTwelveCharacters.generate(roller))
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Method {} ({})", self.index(), self.roman())
    }
}

fn each_ability(mut roll: impl FnMut() -> u32) -> AbilityScores {
    AbilityScores::new(std::array::from_fn(|_| roll()))
}

fn best_six_of_twelve(roller: &mut impl Roller) -> AbilityScores {
    let mut dozen: [u32; ROLLS_PER_DOZEN] = std::array::from_fn(|_| roll_3d6(roller));
    dozen.sort_unstable_by(|a, b| b.cmp(a));

    let mut scores = [0; NUM_ABILITIES];
    scores.copy_from_slice(&dozen[..NUM_ABILITIES]);
    AbilityScores::new(scores)
}
