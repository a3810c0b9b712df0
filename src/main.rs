use std::sync::Arc;

use log::{error, info};

#[tokio::main]
async fn main()
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("debug")
    ).init();
    dotenvy::dotenv().ok();

    let config
      = turing_arcade::config::ProviderConfig::from_env();
    let generator
      = turing_arcade::generator::ResponseGenerator::new(
          &config
        );
    let state = Arc::new(turing_arcade::routes::AppState
    {   config
      , generator
    });

    let app = turing_arcade::routes::router(state);
    let addr = format!(
      "0.0.0.0:{}",
      turing_arcade::config::server_port()
    );

    let listener
      = match tokio::net::TcpListener::bind(&addr).await
        {   Ok(listener) => listener
          , Err(e) => {
              error!("Failed to bind {}: {}", addr, e);
              std::process::exit(1);
            }
        };

    info!("Listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await
    {   error!("Server error: {}", e);
    }
}
