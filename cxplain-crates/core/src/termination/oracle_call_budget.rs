use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a given number of oracle calls has been made.
#[derive(Debug, Copy, Clone)]
pub struct OracleCallBudget {
    budget: u64,
    num_oracle_calls: u64,
}

impl OracleCallBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_oracle_calls: 0,
        }
    }
}

impl TerminationCondition for OracleCallBudget {
    fn should_stop(&mut self) -> bool {
        self.num_oracle_calls >= self.budget
    }

    fn oracle_call_has_been_made(&mut self) {
        self.num_oracle_calls += 1;
    }
}
