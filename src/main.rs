use clap::Parser;
use notify_patterns::utils::logger;
use notify_patterns::{CliConfig, NotificationDemo, StdoutSink};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let demo = NotificationDemo::new(Arc::new(StdoutSink::new()));

    if let Err(e) = demo.run() {
        tracing::error!("❌ Notification demo failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
