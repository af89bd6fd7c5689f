//! Test utilities
//!
//! The PostgreSQL container is started lazily on first use and shared
//! across tests.

use std::sync::Arc;

use crate::{
    config::{Config, CorsConfig, DatabaseConfig, ServerConfig, SessionConfig},
    db::{DocumentStore, MemoryStore},
    state::AppState,
};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

/// Development configuration with the gate detached
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            environment: "test".to_string(),
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 1,
        },
        session: SessionConfig {
            secret: TEST_SECRET.to_string(),
            expiry_days: 7,
            require_session: false,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

/// State over a fresh in-memory store
pub fn memory_state(config: Config) -> AppState {
    test_state(Arc::new(MemoryStore::new()), config)
}

pub fn test_state(store: Arc<dyn DocumentStore>, config: Config) -> AppState {
    AppState::new(store, config)
}

pub mod containers {
    use std::sync::OnceLock;

    use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
    use testcontainers_modules::postgres::Postgres;

    static POSTGRES: OnceLock<ContainerAsync<Postgres>> = OnceLock::new();

    /// Get or start a PostgreSQL container (lazy initialization)
    pub async fn get_postgres() -> &'static ContainerAsync<Postgres> {
        if POSTGRES.get().is_none() {
            let container = Postgres::default()
                .with_user("studybuddy")
                .with_password("studybuddy_test")
                .with_db_name("studybuddy_test")
                .with_tag("16-alpine")
                .start()
                .await
                .expect("Failed to start PostgreSQL container");

            let _ = POSTGRES.set(container);
        }
        POSTGRES.get().unwrap()
    }

    /// Get PostgreSQL connection URL from the container
    pub async fn postgres_url() -> String {
        let container = get_postgres().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        format!(
            "postgres://studybuddy:studybuddy_test@{}:{}/studybuddy_test",
            host, port
        )
    }
}
