pub mod admin;
pub mod auth;
pub mod categories;
pub mod payments;
pub mod profiles;
pub mod proposals;
pub mod services;
pub mod upload;

use actix_web::{HttpResponse, web};

/// GET / — liveness check.
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Marketplace API running",
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.route("/upload", web::post().to(upload::upload));
    cfg.route("/categorias", web::get().to(categories::list_categories));

    // ── Auth ──
    cfg.route("/registro-cliente", web::post().to(auth::register_client));
    cfg.route(
        "/registro-trabajador",
        web::post().to(auth::register_worker),
    );
    cfg.route("/verificar-cuenta", web::post().to(auth::verify_account));
    cfg.route("/login", web::post().to(auth::login));

    // ── Profiles ──
    cfg.service(
        web::resource("/mi-perfil/{id}")
            .route(web::get().to(profiles::get_worker_profile))
            .route(web::put().to(profiles::update_worker_profile)),
    );
    cfg.service(
        web::resource("/mi-perfil-cliente/{id}")
            .route(web::get().to(profiles::get_client_profile))
            .route(web::put().to(profiles::update_client_profile)),
    );

    // ── Marketplace workflow ──
    // Literal /servicios/... paths are registered before the parameterized
    // one so they match first.
    cfg.route("/servicios", web::post().to(services::create_service));
    cfg.route("/servicios/contratar", web::post().to(services::hire));
    cfg.route("/servicios/finalizar", web::post().to(services::complete));
    cfg.route("/feed-servicios", web::get().to(services::feed));
    cfg.route(
        "/servicios/{id}/propuestas",
        web::get().to(proposals::list_proposals),
    );
    cfg.route(
        "/servicios/{cliente_id}",
        web::get().to(services::list_client_services),
    );
    cfg.route("/propuestas", web::post().to(proposals::create_proposal));
    cfg.route(
        "/trabajador/mis-trabajos/{id}",
        web::get().to(services::worker_jobs),
    );

    // ── Payments ──
    cfg.route(
        "/pagos/crear-preferencia",
        web::post().to(payments::create_preference),
    );

    // ── Admin ──
    cfg.route("/admin/usuarios", web::get().to(admin::list_users));
    cfg.route("/admin/accion", web::post().to(admin::apply_action));
}
