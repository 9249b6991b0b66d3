use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufRead, BufReader},
    signal::unix::{SignalKind, signal},
};

use pcbuild::{
    cli::{ConfigSource, config_source_from_args},
    config::Config,
    logging::init_tracing,
    selection::{SelectionEngine, SurfacePort},
    session::Session,
    surface::{JsonSurface, SurfaceFormat, TextSurface},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config_source_from_args()? {
        ConfigSource::Explicit(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        ConfigSource::Default(path) => Config::load_or_default(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
    };

    let logging_guard = init_tracing(&config.logging).context("failed to initialize logging")?;
    let catalog = config.build_catalog()?;
    tracing::info!(
        target: "main",
        run_id = %logging_guard.run_id(),
        categories = catalog.categories().len(),
        components = catalog.components().len(),
        surface = ?config.surface.format,
        "catalog_loaded"
    );

    let engine = SelectionEngine::new(catalog);
    let input = BufReader::new(tokio::io::stdin());
    match config.surface.format {
        SurfaceFormat::Text => {
            run_until_shutdown(Session::new(engine, TextSurface::new(std::io::stdout())), input)
                .await
        }
        SurfaceFormat::Json => {
            run_until_shutdown(Session::new(engine, JsonSurface::new(std::io::stdout())), input)
                .await
        }
    }
}

async fn run_until_shutdown<S, R>(mut session: Session<S>, input: R) -> Result<()>
where
    S: SurfacePort,
    R: AsyncBufRead + Unpin,
{
    let mut sigint =
        signal(SignalKind::interrupt()).context("unable to listen for SIGINT (Ctrl+C)")?;
    let mut sigterm = signal(SignalKind::terminate()).context("unable to listen for SIGTERM")?;

    let stop_reason = tokio::select! {
        result = session.run(input) => {
            result?;
            "input closed"
        }
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };

    tracing::info!(
        target: "main",
        reason = stop_reason,
        selected = session.engine().selection().len(),
        complete = session.engine().is_complete(),
        "session_stopped"
    );
    Ok(())
}
