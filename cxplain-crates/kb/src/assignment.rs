use std::fmt::Display;
use std::str::FromStr;

/// An assignment `variable=value` as it appears in requirements, configurations and
/// sub-configurations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    variable: String,
    value: String,
}

impl Assignment {
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Assignment {
            variable: variable.into(),
            value: value.into(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.variable, self.value)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseAssignmentError {
    #[error("'{0}' is not of the form 'variable=value'")]
    MissingSeparator(String),

    #[error("'{0}' does not name a variable")]
    EmptyVariable(String),

    #[error("'{0}' does not provide a value")]
    EmptyValue(String),
}

impl FromStr for Assignment {
    type Err = ParseAssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (variable, value) = s
            .split_once('=')
            .ok_or_else(|| ParseAssignmentError::MissingSeparator(s.to_owned()))?;

        let variable = variable.trim();
        let value = value.trim();

        if variable.is_empty() {
            return Err(ParseAssignmentError::EmptyVariable(s.to_owned()));
        }
        if value.is_empty() {
            return Err(ParseAssignmentError::EmptyValue(s.to_owned()));
        }

        Ok(Assignment::new(variable, value))
    }
}

/// Parses a list of assignments separated by commas and/or line breaks, e.g.
/// `"pay=true, qa=true"`. Blank entries are skipped.
pub fn parse_assignments(input: &str) -> Result<Vec<Assignment>, ParseAssignmentError> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(Assignment::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_line_separated_assignments() {
        let assignments = parse_assignments("pay=true, qa = false\nlicense=true,\n\n")
            .expect("valid assignments");

        assert_eq!(
            assignments,
            vec![
                Assignment::new("pay", "true"),
                Assignment::new("qa", "false"),
                Assignment::new("license", "true"),
            ]
        );
    }

    #[test]
    fn empty_input_has_no_assignments() {
        assert_eq!(parse_assignments("  "), Ok(vec![]));
    }

    #[test]
    fn malformed_assignments_are_rejected() {
        assert_eq!(
            parse_assignments("pay"),
            Err(ParseAssignmentError::MissingSeparator("pay".to_owned()))
        );
        assert_eq!(
            "=true".parse::<Assignment>(),
            Err(ParseAssignmentError::EmptyVariable("=true".to_owned()))
        );
        assert_eq!(
            "pay= ".parse::<Assignment>(),
            Err(ParseAssignmentError::EmptyValue("pay= ".to_owned()))
        );
    }

    #[test]
    fn displays_without_spaces() {
        assert_eq!(Assignment::new("rec-park", "y").to_string(), "rec-park=y");
    }
}
