use holonet::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState {
            db,
            acting_user_id: config.acting_user_id,
        })
        .layer(startup::cors_layer())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!(
        "Starting server on {} serving favorites for user ID {}",
        config.bind_address(),
        config.acting_user_id
    );

    axum::serve(listener, app).await?;

    Ok(())
}
