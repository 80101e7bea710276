use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use hustings::config::Config;
use hustings::db;
use hustings::routes::{self, AppState};
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    // No listener until the database is confirmed open.
    let conn = match db::connect(&config.database_url).await {
        Ok(conn) => conn,
        Err(reason) => {
            error!(
                "failed to open database {}: {}",
                config.database_url, reason
            );
            std::process::exit(1);
        }
    };
    info!("database open at {}", config.database_url);

    let state = AppState { conn };

    info!("listening on 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_header()
                    .allow_any_method()
                    .allow_any_origin(),
            )
            .app_data(Data::new(state.clone()))
            .configure(routes::config)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
