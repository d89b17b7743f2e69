//! Instance identifier generation
//!
//! The generator is injected at board construction instead of reaching for
//! ambient global randomness, so tests get deterministic ids.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Source of board instance ids
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Default generator: six random lowercase alphanumeric characters
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> String {
        let id: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        id.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_have_expected_shape() {
        let mut ids = RandomIdGenerator;
        let id = ids.generate();
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_custom_generator_is_deterministic() {
        struct Sequential(u32);
        impl IdGenerator for Sequential {
            fn generate(&mut self) -> String {
                self.0 += 1;
                format!("board-{}", self.0)
            }
        }

        let mut ids = Sequential(0);
        assert_eq!(ids.generate(), "board-1");
        assert_eq!(ids.generate(), "board-2");
    }
}
