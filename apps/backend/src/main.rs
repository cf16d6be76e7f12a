use actix_web::{web, App, HttpServer};
use rps_backend::config::ServerConfig;
use rps_backend::middleware::cors::cors_middleware;
use rps_backend::middleware::request_trace::RequestTrace;
use rps_backend::middleware::structured_logger::StructuredLogger;
use rps_backend::middleware::trace_span::TraceSpan;
use rps_backend::routes;
use rps_backend::state::build_state;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting rock/paper/scissors backend");

    // One store for the whole process, shared by every worker
    let data = web::Data::new(build_state().build());

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
