//! Ticket aggregate
//!
//! Contains the Ticket entity, its status, and the repository interface.

pub mod model;
pub mod repository;

pub use model::{Ticket, TicketId, TicketStatus};
pub use repository::TicketRepository;
