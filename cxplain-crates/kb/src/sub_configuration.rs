use itertools::Itertools;
use log::debug;

use crate::Assignment;
use crate::Random;

/// Selects sub-configurations of a configuration, for which explanations can then be requested.
///
/// A sub-configuration of size `k` is a set of `k` assignments of the configuration. Since the
/// number of such sets grows quickly, at most a given number of them is selected uniformly at
/// random.
#[derive(Clone, Copy, Debug)]
pub struct SubConfigurationGenerator<'a> {
    configuration: &'a [Assignment],
}

impl<'a> SubConfigurationGenerator<'a> {
    pub fn new(configuration: &'a [Assignment]) -> Self {
        SubConfigurationGenerator { configuration }
    }

    /// Returns at most `max_sub_configurations` distinct sub-configurations with `size`
    /// assignments each.
    ///
    /// If there are at most `max_sub_configurations` candidates then all of them are returned
    /// and `random` is not used. The sub-configurations are returned in lexicographic order of
    /// the positions of their assignments in the configuration, and the assignments of a
    /// sub-configuration keep the order of the configuration.
    pub fn generate(
        &self,
        size: usize,
        max_sub_configurations: usize,
        random: &mut impl Random,
    ) -> Vec<Vec<Assignment>> {
        if size == 0 || size > self.configuration.len() || max_sub_configurations == 0 {
            return vec![];
        }

        // Reservoir sampling over all combinations, remembering the rank of each selection.
        let mut selected: Vec<(usize, Vec<usize>)> = Vec::with_capacity(max_sub_configurations);
        for (rank, combination) in (0..self.configuration.len())
            .combinations(size)
            .enumerate()
        {
            if rank < max_sub_configurations {
                selected.push((rank, combination));
            } else {
                let position = random.generate_usize_in_range(0..rank + 1);
                if position < max_sub_configurations {
                    selected[position] = (rank, combination);
                }
            }
        }

        selected.sort_by_key(|(rank, _)| *rank);
        debug!(
            "selected {} sub-configurations of size {size}",
            selected.len()
        );

        selected
            .into_iter()
            .map(|(_, combination)| {
                combination
                    .into_iter()
                    .map(|index| self.configuration[index].clone())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::parse_assignments;

    fn configuration() -> Vec<Assignment> {
        parse_assignments("a=1,b=2,c=3,d=4").expect("valid assignments")
    }

    fn render(sub_configurations: &[Vec<Assignment>]) -> Vec<String> {
        sub_configurations
            .iter()
            .map(|assignments| assignments.iter().join(","))
            .collect()
    }

    #[test]
    fn all_combinations_are_returned_when_below_the_maximum() {
        let configuration = configuration();
        let mut random = TestRandom::default();

        let sub_configurations =
            SubConfigurationGenerator::new(&configuration).generate(2, 10, &mut random);

        assert_eq!(
            render(&sub_configurations),
            vec!["a=1,b=2", "a=1,c=3", "a=1,d=4", "b=2,c=3", "b=2,d=4", "c=3,d=4"]
        );
    }

    #[test]
    fn random_selection_is_limited_to_the_maximum() {
        let configuration = configuration();
        // One draw per combination beyond the first two: positions 2, 0, 4 and 1.
        let mut random = TestRandom {
            usizes: vec![2, 0, 4, 1],
        };

        let sub_configurations =
            SubConfigurationGenerator::new(&configuration).generate(2, 2, &mut random);

        assert_eq!(render(&sub_configurations), vec!["b=2,c=3", "c=3,d=4"]);
        assert!(random.usizes.is_empty());
    }

    #[test]
    fn too_large_sub_configurations_are_not_generated() {
        let configuration = configuration();
        let mut random = TestRandom::default();

        let generator = SubConfigurationGenerator::new(&configuration);

        assert!(generator.generate(5, 10, &mut random).is_empty());
        assert!(generator.generate(0, 10, &mut random).is_empty());
        assert_eq!(generator.generate(4, 10, &mut random).len(), 1);
    }
}
