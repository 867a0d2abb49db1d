mod statement_set;
pub(crate) mod time;

pub use statement_set::Statement;
pub use statement_set::StatementSet;
pub use time::AccumulatedTime;
