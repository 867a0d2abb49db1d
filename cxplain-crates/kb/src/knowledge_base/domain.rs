use std::fmt::Display;

/// A two-valued domain; the first value is interpreted as `false`, the second as `true`.
///
/// Feature models use `false`/`true`, the car configuration knowledge base uses `n`/`y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryDomain {
    negative: String,
    positive: String,
}

impl BinaryDomain {
    pub fn new(negative: impl Into<String>, positive: impl Into<String>) -> Self {
        BinaryDomain {
            negative: negative.into(),
            positive: positive.into(),
        }
    }

    /// The domain `{false, true}`.
    pub fn boolean() -> Self {
        BinaryDomain::new("false", "true")
    }

    /// The domain `{n, y}`.
    pub fn yes_no() -> Self {
        BinaryDomain::new("n", "y")
    }

    /// Returns the truth value corresponding to `value`, or `None` if `value` is not in the
    /// domain.
    pub fn truth_value_of(&self, value: &str) -> Option<bool> {
        if value == self.positive {
            Some(true)
        } else if value == self.negative {
            Some(false)
        } else {
            None
        }
    }

    pub fn value_of(&self, truth_value: bool) -> &str {
        if truth_value {
            &self.positive
        } else {
            &self.negative
        }
    }
}

impl Display for BinaryDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.negative, self.positive)
    }
}

/// A variable of a [`crate::KnowledgeBase`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    domain: BinaryDomain,
}

impl Variable {
    pub(crate) fn new(name: String, domain: BinaryDomain) -> Self {
        Variable { name, domain }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &BinaryDomain {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_map_to_truth_values() {
        let domain = BinaryDomain::yes_no();

        assert_eq!(domain.truth_value_of("y"), Some(true));
        assert_eq!(domain.truth_value_of("n"), Some(false));
        assert_eq!(domain.truth_value_of("true"), None);
        assert_eq!(domain.value_of(false), "n");
    }
}
