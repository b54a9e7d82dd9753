use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use oficios_backend::create_pool;
use oficios_backend::db::users::ensure_default_admin;
use oficios_backend::handlers;
use oficios_backend::handlers::upload::UPLOAD_DIR;
use oficios_backend::payments::PaymentClient;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    ensure_default_admin(&db)
        .await
        .expect("Failed to seed default admin");
    let db_data = web::Data::new(db);

    let payments = web::Data::new(PaymentClient::from_env());

    std::fs::create_dir_all(UPLOAD_DIR)?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(payments.clone())
            .configure(handlers::init_routes)
            .service(Files::new("/uploads", UPLOAD_DIR))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
