pub mod services;

pub use services::ParkingService;
