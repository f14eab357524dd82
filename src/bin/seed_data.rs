use clap::Parser;
use dev_scripts::utils::logger;
use dev_scripts::{ScriptEngine, SeedConfig, SeedDataArgs, SeedPipeline, StdoutSink};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config: SeedConfig = SeedDataArgs::parse().into();
    logger::init_cli_logger(config.verbose);

    tracing::debug!("Seeding in dry-run mode, no database connection is made");

    let engine = ScriptEngine::new(SeedPipeline::new(StdoutSink, config.format));
    if let Err(e) = engine.run().await {
        // stdout 寫入失敗 (例如 broken pipe) 才會走到這裡
        tracing::error!("seed-data failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
