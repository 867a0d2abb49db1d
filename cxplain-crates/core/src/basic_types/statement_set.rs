use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Deref;
use std::ops::Index;

use itertools::Itertools;

use crate::containers::HashSet;
use crate::cxplain_assert_advanced;
use crate::cxplain_assert_simple;

/// The requirements on a value which can be placed in a [`StatementSet`].
///
/// A statement is opaque to the explanation algorithms; they only compare, hash and copy it.
/// Statements are expected to be cheap handles (e.g. an id into a constraint store, or an
/// [`std::rc::Rc`]), since every union and split of a [`StatementSet`] copies them.
pub trait Statement: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Statement for T {}

/// An ordered collection of unique [`Statement`]s.
///
/// The iteration order is the order in which the statements were added, and when a statement
/// is added a second time the first occurrence is kept. This order determines how a set is
/// split by [`StatementSet::split`], and hence which explanation is found when there are several
/// minimal ones.
///
/// Equality is sensitive to the order of the statements.
#[derive(Clone)]
pub struct StatementSet<S> {
    statements: Vec<S>,
    members: HashSet<S>,
}

impl<S> Default for StatementSet<S> {
    fn default() -> Self {
        StatementSet {
            statements: Vec::default(),
            members: HashSet::default(),
        }
    }
}

impl<S> Deref for StatementSet<S> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.statements
    }
}

impl<S: Statement> StatementSet<S> {
    pub fn new() -> Self {
        StatementSet::default()
    }

    /// Adds `statement` at the end of the set, returns `false` if it was already present (in
    /// which case the set is unchanged).
    pub fn insert(&mut self, statement: S) -> bool {
        if self.members.insert(statement.clone()) {
            self.statements.push(statement);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, statement: &S) -> bool {
        self.members.contains(statement)
    }

    pub fn as_slice(&self) -> &[S] {
        self.statements.as_slice()
    }

    pub fn is_singleton(&self) -> bool {
        self.statements.len() == 1
    }

    /// Returns a new set containing every statement of `self` followed by every statement of
    /// `other` which is not in `self`.
    pub fn union(&self, other: &StatementSet<S>) -> StatementSet<S> {
        let mut result = self.clone();
        result.extend(other.iter().cloned());

        cxplain_assert_simple!(result.statements.len() == result.members.len());
        cxplain_assert_advanced!(result.statements.starts_with(&self.statements));

        result
    }

    /// Splits the set into two halves, where the first half contains the first `⌊q/2⌋`
    /// statements and the second half the remaining `q - ⌊q/2⌋` (with `q` the size of the set).
    ///
    /// The split only depends on the order of the set, so the same set is always decomposed
    /// in the same way.
    pub fn split(&self) -> (StatementSet<S>, StatementSet<S>) {
        let k = self.statements.len() / 2;
        let (first, second) = self.statements.split_at(k);

        let first_half: StatementSet<S> = first.iter().cloned().collect();
        let second_half: StatementSet<S> = second.iter().cloned().collect();

        cxplain_assert_simple!(first_half.len() + second_half.len() == self.len());

        (first_half, second_half)
    }
}

impl<S: Statement> Extend<S> for StatementSet<S> {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for statement in iter {
            let _ = self.insert(statement);
        }
    }
}

impl<S: Statement> FromIterator<S> for StatementSet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = StatementSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Statement> From<Vec<S>> for StatementSet<S> {
    fn from(statements: Vec<S>) -> Self {
        statements.into_iter().collect()
    }
}

impl<S: Statement, const N: usize> From<[S; N]> for StatementSet<S> {
    fn from(statements: [S; N]) -> Self {
        statements.into_iter().collect()
    }
}

impl<S> From<StatementSet<S>> for Vec<S> {
    fn from(set: StatementSet<S>) -> Vec<S> {
        set.statements
    }
}

impl<S> IntoIterator for StatementSet<S> {
    type Item = S;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a StatementSet<S> {
    type Item = &'a S;

    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl<S> Index<usize> for StatementSet<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.statements[index]
    }
}

impl<S: PartialEq> PartialEq for StatementSet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.statements == other.statements
    }
}

impl<S: Eq> Eq for StatementSet<S> {}

impl<S: Debug> Debug for StatementSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.statements.iter()).finish()
    }
}

impl<S: std::fmt::Display> std::fmt::Display for StatementSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.statements.iter().join(", "))
    }
}

/// A macro which allows for the creation of a [`StatementSet`]; duplicates are dropped and the
/// first occurrence is kept.
///
/// # Example
/// ```rust
/// # use cxplain_core::statements;
/// # use cxplain_core::StatementSet;
/// let set = statements!["a", "b", "a"];
/// assert_eq!(set, StatementSet::from(vec!["a", "b"]));
/// let empty: StatementSet<&str> = statements![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! statements {
    () => {
        $crate::StatementSet::new()
    };

    ($($statement:expr),+ $(,)?) => {
        $crate::StatementSet::from_iter([$($statement),+])
    };
}
