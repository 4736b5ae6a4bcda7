pub mod storage;

pub use storage::InMemoryTicketRepository;
