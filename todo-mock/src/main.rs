use todo_mock::{AppState, DEFAULT_PORT};
use tokio::net::TcpListener;
use tracing::info;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_mock=info,tower_http=debug".into()),
        )
        .init();

    let port = match std::env::var("TODO_MOCK_PORT") {
        Ok(v) => v.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Todo mock backend listening on {}", listener.local_addr()?);

    todo_mock::serve(listener, AppState::with_fixtures()).await?;
    Ok(())
}
