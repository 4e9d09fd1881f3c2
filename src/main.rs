use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use webhook_speaker::config::Config;
use webhook_speaker::handlers;
use webhook_speaker::services::classifier::Classifier;
use webhook_speaker::services::store::{MemoryStore, NotificationStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    let classifier = Data::new(Classifier::new(config.speaker_mode));
    let store: Arc<dyn NotificationStore> = Arc::new(MemoryStore::new());
    let store = Data::from(store);

    println!("Starting webhook speaker at http://{} ({:?} mode)", bind_address, config.speaker_mode);
    println!("Endpoints:");
    println!("  POST    /webhook           - Queue a notification from any webhook");
    println!("  GET     /webhook?key={{key}} - Speaker poll, drains the queue");
    println!("  OPTIONS /webhook           - CORS preflight");
    println!("  GET     /health            - Liveness and queue depth");

    HttpServer::new(move || {
        App::new()
            .app_data(classifier.clone())
            .app_data(store.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
