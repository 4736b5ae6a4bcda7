pub mod fee;
pub mod ticket;
pub mod vehicle;

/// Money in whole currency units
pub type Amount = u64;

// Re-export commonly used types
pub use fee::{calculate_fee, calculate_fee_breakdown, FeeBreakdown, DAILY_CAP};
pub use ticket::{Ticket, TicketId, TicketRepository, TicketStatus};
pub use vehicle::VehicleCategory;

pub use crate::shared::errors::{DomainError, DomainResult};
