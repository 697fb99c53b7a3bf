//! Repository implementations
//!
//! One repository per entity; each method issues a single parameterized
//! statement and maps rows back to models

pub mod fee;
pub mod register_request;
pub mod resident;
pub mod room;

pub use fee::FeeRepository;
pub use register_request::RegisterRequestRepository;
pub use resident::ResidentRepository;
pub use room::RoomRepository;
