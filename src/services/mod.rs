//! Service layer
//!
//! Authorization checks and payment-gateway URL construction

pub mod auth;
pub mod payment;

pub use auth::AuthService;
pub use payment::PaymentService;
