mod parking;

pub use parking::ParkingService;
