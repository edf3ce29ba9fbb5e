//! Error types.
//!
//! Every failure in this crate is detected synchronously, before or during
//! a single evaluation. Nothing is retried.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SchedError>;

/// Errors raised by the scheduler core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedError {
    /// Invalid run parameters, surfaced at run start.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A computation was asked for a value that does not exist, e.g. the
    /// fitness of an assignment whose makespan is zero.
    #[error("domain error: {0}")]
    Domain(String),
}

impl SchedError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SchedError::Configuration(msg.into())
    }

    pub fn domain<S: Into<String>>(msg: S) -> Self {
        SchedError::Domain(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = SchedError::config("population_size must be at least 2");
        assert_eq!(
            e.to_string(),
            "configuration error: population_size must be at least 2"
        );

        let e = SchedError::domain("zero makespan");
        assert_eq!(e.to_string(), "domain error: zero makespan");
    }
}
