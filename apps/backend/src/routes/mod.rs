use actix_web::web;

pub mod games;
pub mod health;

/// Register every application route.
///
/// `main.rs` wraps the result with middleware; tests call this through
/// `TestAppBuilder::with_prod_routes`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
