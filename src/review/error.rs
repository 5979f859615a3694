use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewStoreError {
    LockPoisoned(&'static str),
    Serde(String),
}

impl fmt::Display for ReviewStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStoreError::LockPoisoned(operation) => {
                write!(f, "review store lock poisoned during {}", operation)
            }
            ReviewStoreError::Serde(message) => {
                write!(f, "review serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ReviewStoreError {}

impl From<serde_json::Error> for ReviewStoreError {
    fn from(err: serde_json::Error) -> Self {
        ReviewStoreError::Serde(err.to_string())
    }
}
