use cxplain_core::termination::TerminationCondition;

/// Hands a [`TerminationCondition`] to the Pumpkin solver and records whether it triggered, so
/// that an interrupted search can be told apart from a completed one.
#[derive(Debug)]
pub(crate) struct SolverTermination<'a, Termination> {
    termination: &'a mut Termination,
    has_triggered: bool,
}

impl<'a, Termination: TerminationCondition> SolverTermination<'a, Termination> {
    pub(crate) fn new(termination: &'a mut Termination) -> Self {
        SolverTermination {
            termination,
            has_triggered: false,
        }
    }

    pub(crate) fn has_triggered(&self) -> bool {
        self.has_triggered
    }
}

impl<Termination: TerminationCondition> pumpkin_solver::termination::TerminationCondition
    for SolverTermination<'_, Termination>
{
    fn should_stop(&mut self) -> bool {
        if !self.has_triggered {
            self.has_triggered = self.termination.should_stop();
        }

        self.has_triggered
    }
}
