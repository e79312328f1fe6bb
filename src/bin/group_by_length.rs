use stream_samples::utils::logger;
use stream_samples::{LengthGroupPipeline, StdoutSink, StreamEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    tracing::info!("Starting length-group example");

    let mut engine = StreamEngine::new(LengthGroupPipeline, StdoutSink::new());
    engine.run()?;

    Ok(())
}
