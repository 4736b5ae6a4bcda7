use thiserror::Error;

use crate::domain::TicketId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(TicketId),

    #[error("Ticket already exists: {0}")]
    TicketAlreadyExists(TicketId),

    #[error("Ticket already closed: {0}")]
    TicketAlreadyClosed(TicketId),

    #[error("Invalid vehicle category: {0:?} (expected standard, motorcycle or pickup)")]
    InvalidCategory(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
