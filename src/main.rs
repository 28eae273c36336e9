use anyhow::Context;
use bookstore_kernel::{settings::Settings, InitCtx};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;

    bookstore_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        port = settings.server.port,
        "bookstore bootstrap starting"
    );

    let registry = bookstore_app::build_registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = bookstore_http::start_server(&registry, &settings).await;

    registry.stop_all().await?;
    served
}
