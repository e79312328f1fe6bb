use stream_samples::utils::logger;
use stream_samples::{EvenFilterPipeline, StdoutSink, StreamEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger();

    tracing::info!("Starting even-filter example");

    let mut engine = StreamEngine::new(EvenFilterPipeline, StdoutSink::new());
    engine.run()?;

    Ok(())
}
