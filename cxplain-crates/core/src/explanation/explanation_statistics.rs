use crate::basic_types::AccumulatedTime;
use crate::create_statistics_struct;
use crate::statistics::CumulativeMovingAverage;

create_statistics_struct!(
    /// The statistics gathered by [`crate::CXPlain`]. They are a side-channel; the explanation
    /// which is returned never depends on them.
    pub ExplanationStatistics {
        /// The number of calls to the consistency oracle (including the initial check of the
        /// configuration)
        num_consistency_checks: u64,
        /// The number of unions of statement sets
        num_union_operations: u64,
        /// The number of invocations of the minimal conflict search, including the initial one
        num_cxp_calls: u64,
        /// The number of recursive calls searching the first half of the candidates
        num_left_branch_calls: u64,
        /// The number of recursive calls searching the second half of the candidates
        num_right_branch_calls: u64,
        /// The number of calls which returned early since their background was already
        /// inconsistent
        num_pruned_calls: u64,
        /// The average number of statements handed to the consistency oracle
        average_consistency_check_size: CumulativeMovingAverage<u64>,
        /// The wall-clock time spent in the minimal conflict search
        time_spent_in_cxp: AccumulatedTime,
});
