use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onething_core::Theme;
use onething_web::config::Config;
use onething_web::state::AppState;
use onething_web::{app, pages};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onething_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // The site is static; render the whole document up front.
    let index_html = pages::render_index(&Theme::default())?;
    tracing::info!("Rendered index document ({} bytes)", index_html.len());

    let app = app(AppState::new(index_html));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
