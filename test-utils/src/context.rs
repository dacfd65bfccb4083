use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Days of inactivity after which the dashboard drops a session.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// One test's in-memory SQLite database, plus a dashboard session stored in it.
///
/// Created by `TestBuilder::build()`; the database is dropped with the context.
pub struct TestContext {
    /// Connection to the test database. Always `Some` for a built context.
    pub db: Option<DatabaseConnection>,
    session: Option<Session>,
}

impl TestContext {
    /// Connects a fresh in-memory database and creates `tables` in order.
    pub(crate) async fn with_schema(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in tables {
            db.execute(&stmt).await?;
        }

        Ok(Self {
            db: Some(db),
            session: None,
        })
    }

    /// Dashboard session backed by the test database.
    ///
    /// The first call migrates the session table, later calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The session, with the dashboard's inactivity expiry
    /// - `Err(TestError::Session)` - Failed to migrate the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let Some(db) = self.db.as_ref() else {
                return Err(TestError::Session("test database is closed".to_string()));
            };

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::Session(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Session("session not created".to_string()))
    }
}
