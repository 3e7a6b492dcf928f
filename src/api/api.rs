use std::sync::Arc;

use actix_web::{self, middleware, web, App, HttpRequest, HttpServer};
use diesel::r2d2::ConnectionManager;
use log::{debug, info};
use r2d2::Pool;

use crate::models;
use crate::service::{TodoService, TodoStore};

use super::{errors::TodoApiError, healthz_handler, todos_handler};

/// What the server needs from the command line and environment
#[derive(Debug)]
pub struct ServerSettings {
    pub api_url: String,
    pub database_url: String,
    pub pool_size: u32,
    pub workers: Option<usize>,
}

/// Undecodable JSON reads the same as a request with its required fields missing
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _: &HttpRequest,
) -> actix_web::Error {
    debug!("Rejecting request body: {}", err);

    TodoApiError::BadRequest(err.to_string()).into()
}

/// Route table. The `TodoStore` is registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/healthz", web::get().to(healthz_handler::healthz))
        .route("/healthz/", web::get().to(healthz_handler::healthz))
        .service(
            web::resource("/todos")
                .route(web::post().to(todos_handler::create_todo))
                .route(web::get().to(todos_handler::read_todos))
                .route(web::put().to(todos_handler::update_todo))
                .route(web::delete().to(todos_handler::delete_todo)),
        );
}

pub async fn start_server(settings: ServerSettings) -> std::io::Result<()> {
    let manager = ConnectionManager::<diesel::PgConnection>::new(settings.database_url);

    let pool: models::Pool = Pool::builder()
        .max_size(settings.pool_size)
        .build(manager)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let store: Arc<dyn TodoStore> = Arc::new(TodoService::new(pool));

    info!("Starting server on {}", settings.api_url);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(store.clone()))
            .configure(configure)
    });

    if let Some(workers) = settings.workers {
        server = server.workers(workers); // Num of threads
    }

    server.bind(settings.api_url.as_str())?.run().await
}
