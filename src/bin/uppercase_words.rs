use stream_samples::utils::logger;
use stream_samples::{StdoutSink, StreamEngine, UpperCasePipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    tracing::info!("Starting upper-case example");

    let mut engine = StreamEngine::new(UpperCasePipeline, StdoutSink::new());
    engine.run()?;

    Ok(())
}
