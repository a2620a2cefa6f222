pub const NUM_ABILITIES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Strength,
    Intelligence,
    Wisdom,
    Dexterity,
    Constitution,
    Charisma,
}

impl Ability {
    /// Abilities in the order every score set and requirement row uses.
    pub const ALL: [Ability; NUM_ABILITIES] = [
        Ability::Strength,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Charisma,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One value per ability, in `Ability::ALL` order.
///
/// Used both for rolled scores and for class minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbilityScores([u32; NUM_ABILITIES]);

impl AbilityScores {
    pub fn new(scores: [u32; NUM_ABILITIES]) -> Self {
        Self(scores)
    }

    pub fn get(&self, ability: Ability) -> u32 {
        self.0[ability.index()]
    }

    pub fn values(&self) -> &[u32; NUM_ABILITIES] {
        &self.0
    }

    /// Returns a copy with the values sorted highest first.
    /// The result is no longer tied to ability identity.
    pub fn sorted_descending(&self) -> Self {
        let mut values = self.0;
        values.sort_unstable_by(|a, b| b.cmp(a));
        Self(values)
    }

    /// True when every value is at least the matching value of `other`.
    pub fn dominates(&self, other: &AbilityScores) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }
}

impl From<[u32; NUM_ABILITIES]> for AbilityScores {
    fn from(scores: [u32; NUM_ABILITIES]) -> Self {
        Self(scores)
    }
}

impl std::fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self
            .0
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{values}]")
    }
}

#[cfg(test)]
mod tests {
    use super::{Ability, AbilityScores};

    #[test]
    fn test_get_follows_ability_order() {
        let scores = AbilityScores::new([3, 4, 5, 6, 7, 8]);
        for (i, ability) in Ability::ALL.iter().enumerate() {
            assert_eq!(scores.get(*ability), 3 + i as u32);
        }
    }

    #[test]
    fn test_sorted_descending() {
        let scores = AbilityScores::new([9, 3, 15, 6, 15, 12]);
        assert_eq!(scores.sorted_descending().values(), &[15, 15, 12, 9, 6, 3]);
        // the original is left alone
        assert_eq!(scores.values(), &[9, 3, 15, 6, 15, 12]);
    }

    #[test]
    fn test_dominates() {
        let high = AbilityScores::new([10, 10, 10, 10, 10, 10]);
        let low = AbilityScores::new([10, 9, 3, 10, 4, 10]);
        assert!(high.dominates(&low));
        assert!(!low.dominates(&high));
        assert!(low.dominates(&low));
    }

    #[test]
    fn test_display() {
        let scores = AbilityScores::new([18, 17, 16, 15, 14, 13]);
        assert_eq!(scores.to_string(), "[18, 17, 16, 15, 14, 13]");
    }
}
