mod random;

pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
