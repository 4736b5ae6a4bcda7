//! # Parking Service
//!
//! Ticketing and fee calculation for a parking lot.
//!
//! ## Architecture
//!
//! - **domain**: vehicle categories, tickets, the fee calculator and the
//!   repository trait
//! - **application**: [`ParkingService`], the ticket lifecycle use cases
//! - **infrastructure**: in-memory ticket storage
//! - **shared**: errors and the wall-clock abstraction
//! - **config** / **telemetry**: TOML configuration and tracing setup
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use parking_service::{InMemoryTicketRepository, ParkingService, VehicleCategory};
//!
//! let service = ParkingService::new(Arc::new(InMemoryTicketRepository::new()));
//! let entry = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//!
//! let ticket = service.register_entry("AB123CD", VehicleCategory::Standard, entry).unwrap();
//! let amount = service
//!     .register_exit(ticket.id, entry + chrono::Duration::minutes(31))
//!     .unwrap();
//! assert_eq!(amount, 1600);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod telemetry;

pub use application::ParkingService;
pub use config::{default_config_path, AppConfig, DisplayConfig, LoggingConfig, OutputFormat};
pub use domain::{
    calculate_fee, Amount, DomainError, DomainResult, FeeBreakdown, Ticket, TicketId,
    TicketStatus, VehicleCategory,
};
pub use infrastructure::InMemoryTicketRepository;
pub use shared::{Clock, ConfigError, FixedClock, SystemClock};
