use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

/// Abstraction for randomness, in order to swap out different sources of randomness.
///
/// Any seeded [`rand`] generator can be used; tests use a generator which returns predefined
/// values.
pub trait Random: Debug {
    /// Generates a random usize in the provided range with equal probability.
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use cxplain_kb::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let index = rng.generate_usize_in_range(0..10);
    /// assert!(index < 10);
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use cxplain_core::cxplain_assert_simple;

    use super::Random;

    /// A test "random" generator which returns the provided `usizes` in order. Generating more
    /// values than were provided panics.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
    }

    impl Random for TestRandom {
        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let selected = self.usizes.remove(0);
            cxplain_assert_simple!(
                range.contains(&selected),
                "The selected element by `TestRandom` ({selected}) is not in the provided range ({range:?}), please ensure that your test cases are correctly defined"
            );
            selected
        }
    }
}
