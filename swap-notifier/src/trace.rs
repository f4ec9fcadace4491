use tracing::{info, level_filters::LevelFilter, subscriber};
use tracing_subscriber::FmtSubscriber;

/// Logs go to stderr, stdout is reserved for the service's response.
pub fn init_tracing(level: LevelFilter) -> anyhow::Result<()> {
    if level == LevelFilter::OFF {
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    subscriber::set_global_default(subscriber)?;
    info!("Initialized tracing with level: {}", level);

    Ok(())
}
