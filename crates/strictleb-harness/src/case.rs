use std::fmt;

/// A named test predicate.
///
/// The predicate returns `Ok(())` when the case passes and a
/// [`CaseFailure`] describing the first mismatch otherwise. Cases are plain
/// values: a suite is just an ordered `Vec<TestCase>` handed to a
/// [`Runner`](crate::runner::Runner).
pub struct TestCase {
    name: String,
    predicate: Box<dyn Fn() -> Result<(), CaseFailure> + Send + Sync>,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn() -> Result<(), CaseFailure> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the predicate once.
    ///
    /// # Errors
    ///
    /// Returns the predicate's [`CaseFailure`] when the case does not pass.
    pub fn run(&self) -> Result<(), CaseFailure> {
        (self.predicate)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Why a test case did not pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CaseFailure {
    pub message: String,
}

impl CaseFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefix the message with where the failure happened.
    #[must_use]
    pub fn context(self, context: impl fmt::Display) -> Self {
        Self {
            message: format!("{context}: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_predicate() {
        let pass = TestCase::new("pass", || Ok(()));
        let fail = TestCase::new("fail", || Err(CaseFailure::new("nope")));

        assert_eq!(pass.name(), "pass");
        assert!(pass.run().is_ok());
        assert_eq!(fail.run().unwrap_err().message, "nope");
    }

    #[test]
    fn context_prefixes_message() {
        let failure = CaseFailure::new("bad byte").context("vector #3");
        assert_eq!(failure.to_string(), "vector #3: bad byte");
    }
}
