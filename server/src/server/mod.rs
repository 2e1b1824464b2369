//! Server construction and wiring.
//!
//! Binary-side only: connects both persistence backends, assembles the
//! handler state, and runs the actix server. A backend that cannot be
//! reached at startup is fatal; there is no retry loop here.

mod config;

pub use config::AppConfig;
use config::{BOOKS_COLLECTION, USERS_COLLECTION};

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use folio::ApiDoc;
use folio::inbound::http::health::{HealthState, live, ready};
use folio::inbound::http::state::HttpState;
use folio::inbound::http::{authors, books, users};
use folio::outbound::document::{MongoBookRepository, MongoUserRepository};
use folio::outbound::persistence::{DbPool, DieselAuthorRepository, PoolConfig};

/// Connect the backends described by the configuration.
async fn build_state(config: &AppConfig) -> std::io::Result<HttpState> {
    info!(database = %config.mongodb_database, "connect document backend");
    let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .map_err(|err| std::io::Error::other(format!("cannot reach document backend: {err}")))?;
    let database = client.database(&config.mongodb_database);

    info!("connect relational backend");
    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("cannot reach relational backend: {err}")))?;

    Ok(HttpState {
        users: Arc::new(MongoUserRepository::new(&database, USERS_COLLECTION)),
        authors: Arc::new(DieselAuthorRepository::new(pool)),
        books: Arc::new(MongoBookRepository::new(&database, BOOKS_COLLECTION)),
    })
}

/// Run the HTTP server until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let state = web::Data::new(build_state(&config).await?);
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays shared.
    let server_health = health_state.clone();

    info!(addr = %config.bind_addr, "start http server");
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health.clone())
            .service(users::list_users)
            .service(users::get_user)
            .service(users::create_user)
            .service(users::replace_user)
            .service(users::patch_user)
            .service(users::delete_user)
            .service(authors::list_authors)
            .service(authors::get_author)
            .service(authors::create_author)
            .service(authors::replace_author)
            .service(authors::patch_author)
            .service(authors::delete_author)
            .service(books::list_books)
            .service(books::get_book)
            .service(books::create_book)
            .service(books::replace_book)
            .service(books::patch_book)
            .service(books::delete_book)
            .service(live)
            .service(ready);
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
