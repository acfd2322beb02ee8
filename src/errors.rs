use thiserror::Error;

/// validation failures reject the whole request before any simulation runs;
/// hitting the horizon cap is a reported outcome, not an error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("debts list must not be empty")]
    NoDebts,

    #[error("debt at index {index}: name must be a non-empty string")]
    MissingDebtName {
        index: usize,
    },

    #[error("debt {name}: balance must be a non-negative number")]
    InvalidBalance {
        name: String,
    },

    #[error("debt {name}: rate must be a number between 0 and 1")]
    InvalidRate {
        name: String,
    },

    #[error("strategy must be snowball or avalanche")]
    UnknownStrategy {
        provided: String,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
