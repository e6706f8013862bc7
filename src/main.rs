use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use word_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate_for_production() {
        log::error!("{}", err);
        return Err(std::io::Error::other(err.to_string()));
    }

    let state = AppState::new(config.clone());
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    log::info!(
        "starting HTTP server on {}:{} (model {})",
        bind_address.0,
        bind_address.1,
        config.openai_model
    );

    HttpServer::new(move || {
        let cors = match &config.cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .expose_headers([REQUEST_ID_HEADER]),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(config.max_upload_bytes))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
