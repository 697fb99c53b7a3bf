//! Shared application state
//!
//! Handed to every route handler through axum's `State` extractor.

use crate::config::Settings;
use crate::database::{DatabasePool, DatabaseService};
use crate::services::{AuthService, PaymentService};

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseService,
    pub auth: AuthService,
    pub payment: PaymentService,
    pub pool: DatabasePool,
}

impl AppState {
    pub fn new(pool: DatabasePool, settings: &Settings) -> Self {
        let db = DatabaseService::new(pool.clone(), settings.database.page_size);
        let auth = AuthService::new(settings.admin.clone(), db.residents.clone());
        let payment = PaymentService::new(settings.payment.clone());

        Self {
            db,
            auth,
            payment,
            pool,
        }
    }
}
