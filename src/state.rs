use crate::users::repo::{PgUserStore, UserStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn from_pool(db: PgPool) -> Self {
        Self::from_store(Arc::new(PgUserStore::new(db)))
    }

    pub fn from_store(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
