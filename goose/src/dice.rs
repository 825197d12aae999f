use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::InvalidDieValue;

/// The face of a single six-sided die, always in `1..=6`.
///
/// ```
/// use goose::DieValue;
/// assert_eq!(DieValue::new(4).map(DieValue::get), Some(4));
/// assert_eq!(DieValue::new(7), None);
/// assert_eq!("3".parse::<DieValue>().unwrap().get(), 3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// All six faces, in increasing order.
    pub const ALL: [DieValue; 6] = [
        DieValue(1),
        DieValue(2),
        DieValue(3),
        DieValue(4),
        DieValue(5),
        DieValue(6),
    ];

    /// Returns `None` if `value` is not a valid face.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(DieValue(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> u8 {
        value.0
    }
}

impl From<DieValue> for usize {
    fn from(value: DieValue) -> usize {
        value.0 as usize
    }
}

impl TryFrom<u8> for DieValue {
    type Error = InvalidDieValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieValue::new(value).ok_or_else(|| InvalidDieValue {
            input: value.to_string(),
        })
    }
}

impl FromStr for DieValue {
    type Err = InvalidDieValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDieValue {
            input: String::from(s),
        };
        let value = s.trim().parse::<u8>().map_err(|_| invalid())?;
        DieValue::new(value).ok_or_else(invalid)
    }
}

/// A six-sided die with its own random number generator.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    /// A die whose rolls are fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A die seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A die seeded from `parent`, so that a single seeded RNG can drive several dice.
    pub fn forked_from(parent: &mut StdRng) -> Self {
        Self::from_seed(parent.gen())
    }

    pub fn roll(&mut self) -> DieValue {
        DieValue(self.rng.gen_range(DieValue::MIN..=DieValue::MAX))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn parse_accepts_exactly_the_faces(value: u8) -> bool {
            let parsed = value.to_string().parse::<DieValue>();
            match parsed {
                Ok(die) => (1..=6).contains(&value) && die.get() == value,
                Err(err) => !(1..=6).contains(&value) && err.input == value.to_string(),
            }
        }

        fn seeded_dice_repeat(seed: u64) -> bool {
            let mut a = Dice::from_seed(seed);
            let mut b = Dice::from_seed(seed);
            (0..20).all(|_| a.roll() == b.roll())
        }
    }

    #[test]
    fn rolls_stay_on_the_die() {
        let mut dice = Dice::from_seed(7);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let value = dice.roll().get();
            assert!((1..=6).contains(&value));
            seen[value as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face shows up eventually");

        let mut dice = Dice::from_entropy();
        assert!((0..100).all(|_| DieValue::ALL.contains(&dice.roll())));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(" 5 ".parse::<DieValue>().is_ok());
        assert!("0".parse::<DieValue>().is_err());
        assert!("seven".parse::<DieValue>().is_err());
        assert!("".parse::<DieValue>().is_err());
    }

    #[test]
    fn serde_checks_range() {
        assert_eq!(serde_json::to_string(&DieValue::ALL[2]).unwrap(), "3");
        assert_eq!(
            serde_json::from_str::<DieValue>("6").unwrap(),
            DieValue::ALL[5]
        );
        assert!(serde_json::from_str::<DieValue>("9").is_err());
    }
}
