lazy_static::lazy_static! {
    pub static ref API_URL: String = std::env::var("API_URL").unwrap_or_else(|_| String::from("localhost:5900"));

    pub static ref DATABASE_URL: Option<String> = std::env::var("DATABASE_URL").ok();

    pub static ref DB_POOL_SIZE: u32 = std::env::var("DB_POOL_SIZE")
        .ok()
        .and_then(|size| size.parse().ok())
        .unwrap_or(10);

    /// Number of actix workers, `None` keeps the actix default (one per core)
    pub static ref SERVER_WORKERS: Option<usize> = std::env::var("SERVER_WORKERS")
        .ok()
        .and_then(|workers| workers.parse().ok());
}

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "todo_service=debug,actix_web=info,actix_server=info";
