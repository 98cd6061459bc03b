use book_service::config::{BackendType, Config};
use book_service::models::storage::BookStore;
use book_service::{app, build_backend};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    match config.backend {
        BackendType::File => info!("Using JSON file backend at {}", config.books_file.display()),
        BackendType::Memory => info!("Using in-memory backend"),
    }
    let backend = build_backend(&config);

    if let Err(e) = backend.test_connection().await {
        error!("Failed to open storage backend: {}", e);
        std::process::exit(1);
    }
    info!("Storage backend ready");

    let addr = config.bind_addr();
    info!("Book service starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app(backend)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
