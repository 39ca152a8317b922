use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront_api::config::ServerConfig;
use storefront_api::db::establish_connection_pool;
use storefront_api::repository::DieselRepository;
use storefront_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!(
        "Serving {} on {}:{}",
        config.database_url,
        config.address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address, config.port))?
    .run()
    .await
}
