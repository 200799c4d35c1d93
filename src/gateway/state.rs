use std::sync::Arc;

use crate::db::Database;
use crate::orders::OrderService;
use crate::user_auth::UserAuthService;

/// Shared gateway state, injected into every handler
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL handle (health checks and pool access)
    pub db: Arc<Database>,
    /// Registration, login, token verification
    pub user_auth: Arc<UserAuthService>,
    /// Order placement and queries
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        user_auth: Arc<UserAuthService>,
        orders: Arc<OrderService>,
    ) -> Self {
        Self {
            db,
            user_auth,
            orders,
        }
    }
}
