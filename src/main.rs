use anyhow::Context;
use api::api::{start_server, ServerSettings};

#[macro_use]
extern crate diesel;

use clap::Parser;
use config::{API_URL, DATABASE_URL, DB_POOL_SIZE, DEFAULT_LOG_FILTER, SERVER_WORKERS};

mod api;
mod config;
mod models;
mod schema;
mod service;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = "Serve todos over HTTP")]
struct TodoArgs {
    /// Address to listen on, defaults to `API_URL`
    #[clap(short = 'b', long = "bind")]
    bind: Option<String>,

    /// PostgreSQL connection string, defaults to `DATABASE_URL`
    #[clap(long = "database-url")]
    database_url: Option<String>,

    #[clap(long = "pool-size")]
    pool_size: Option<u32>,

    #[clap(short = 'w', long = "workers")]
    workers: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let args = TodoArgs::parse();

    let database_url = args
        .database_url
        .or_else(|| DATABASE_URL.clone())
        .context("DATABASE_URL must be set")?;

    let settings = ServerSettings {
        api_url: args.bind.unwrap_or_else(|| API_URL.clone()),
        database_url,
        pool_size: args.pool_size.unwrap_or(*DB_POOL_SIZE),
        workers: args.workers.or(*SERVER_WORKERS),
    };

    actix_web::rt::System::new()
        .block_on(start_server(settings))
        .context("Server stopped with an error")?;

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::TodoArgs;

    #[test]
    fn test_args_override_environment() {
        let args = TodoArgs::parse_from([
            "todo-service",
            "-b",
            "0.0.0.0:8080",
            "--database-url",
            "postgres://localhost/todos",
            "-w",
            "2",
        ]);

        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(args.database_url.as_deref(), Some("postgres://localhost/todos"));
        assert_eq!(args.pool_size, None);
        assert_eq!(args.workers, Some(2));
    }
}
