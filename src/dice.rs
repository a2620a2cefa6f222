use rand::{rngs::StdRng, Rng, SeedableRng};

pub const DIE_SIDES: u32 = 6;

/// Source of six-sided die results.
pub trait Roller {
    /// Returns a value between 1 and `DIE_SIDES` inclusive.
    fn roll_die(&mut self) -> u32;

    /// Sum of `count` dice.
    fn roll_sum(&mut self, count: usize) -> u32 {
        (0..count).map(|_| self.roll_die()).sum()
    }
}

/// A `Roller` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct Randomizer<R> {
    rng: R,
}

impl<R: Rng> Randomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Randomizer<StdRng> {
    /// Seeded once from the operating system, results differ on every run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Roller for Randomizer<R> {
    fn roll_die(&mut self) -> u32 {
        self.rng.gen_range(1..=DIE_SIDES)
    }
}

/// Roll 3d6.
pub fn roll_3d6(roller: &mut impl Roller) -> u32 {
    roller.roll_sum(3)
}

/// Roll 4d6 and drop the lowest die.
pub fn roll_4d6_drop_lowest(roller: &mut impl Roller) -> u32 {
    let mut sum = 0;
    let mut lowest = DIE_SIDES;
    for _ in 0..4 {
        let die = roller.roll_die();
        sum += die;
        lowest = lowest.min(die);
    }
    sum - lowest
}

/// Roll 3d6 six times and keep the best.
pub fn roll_3d6_best_of_6(roller: &mut impl Roller) -> u32 {
    (0..6).map(|_| roll_3d6(roller)).max().unwrap_or(0)
}
