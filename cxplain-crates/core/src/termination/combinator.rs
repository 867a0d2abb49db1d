use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combine two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn oracle_call_has_been_made(&mut self) {
        self.t1.oracle_call_has_been_made();
        self.t2.oracle_call_has_been_made();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::Indefinite;
    use crate::termination::OracleCallBudget;

    #[test]
    fn triggers_when_either_condition_triggers() {
        let mut combined = Combinator::new(Indefinite, OracleCallBudget::new(1));

        assert!(!combined.should_stop());
        combined.oracle_call_has_been_made();
        assert!(combined.should_stop());
    }

    #[test]
    fn absent_condition_never_triggers() {
        let mut absent: Option<OracleCallBudget> = None;
        absent.oracle_call_has_been_made();

        assert!(!absent.should_stop());
    }
}
