use stream_samples::utils::logger;
use stream_samples::{SortPipeline, StdoutSink, StreamEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    tracing::info!("Starting sort example");

    let mut engine = StreamEngine::new(SortPipeline, StdoutSink::new());
    engine.run()?;

    Ok(())
}
