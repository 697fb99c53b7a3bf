//! Data models
//!
//! Plain data holders mirroring database rows, plus the request payloads
//! used to create them

pub mod auth;
pub mod fee;
pub mod register_request;
pub mod resident;
pub mod room;

pub use auth::Credentials;
pub use fee::{CreateFeeRequest, Fee};
pub use register_request::{CreateRegisterRequest, NewRegisterRequest, RegisterRequest};
pub use resident::Resident;
pub use room::Room;
