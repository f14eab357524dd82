use clap::Parser;
use dev_scripts::app::pipelines::dependency_pipeline::ReportOptions;
use dev_scripts::core::TreeSource;
use dev_scripts::utils::{logger, validation::Validate};
use dev_scripts::{
    AnalyzeDepsArgs, DependencyPipeline, FileSource, MavenRunner, Result, ScriptEngine, StdoutSink,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = AnalyzeDepsArgs::parse();
    let verbose = args.verbose;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(verbose);
            fail(&e);
        }
    };

    logger::init_logger(config.verbose, config.json_logs);
    tracing::debug!("analyze-deps config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(&e);
    }

    let result = match &config.input {
        Some(path) => run(FileSource::new(path.clone()), config.report).await,
        None => run(MavenRunner::new(config.maven.clone()), config.report).await,
    };

    if let Err(e) = result {
        tracing::error!("analyze-deps failed: {} (Category: {:?})", e, e.category());
        fail(&e);
    }
}

async fn run<T: TreeSource>(source: T, options: ReportOptions) -> Result<usize> {
    let pipeline = DependencyPipeline::new(source, StdoutSink, options);
    ScriptEngine::new(pipeline).run().await
}

fn fail(e: &dev_scripts::ScriptError) -> ! {
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
