use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use rusty_golf_guide::args;
use rusty_golf_guide::controller::http_handlers::{AppState, configure};
use std::io;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let args = args::args_checks()?;
    init_logging(&args.log_level);

    let state = match AppState::from_args(&args).await {
        Ok(state) => Data::new(state),
        Err(e) => {
            error!(error = %e, "cannot start without the course dataset");
            return Err(e.into());
        }
    };

    let static_dir = args.static_dir.clone();
    info!(bind = %args.bind, "starting golf guide");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
