use crate::domain::ports::{Pipeline, Sink};
use crate::utils::error::Result;
use std::time::Instant;

/// Drives one example pipeline from source to sink.
pub struct StreamEngine<P: Pipeline, S: Sink> {
    pipeline: P,
    sink: S,
}

impl<P: Pipeline, S: Sink> StreamEngine<P, S> {
    pub fn new(pipeline: P, sink: S) -> Self {
        Self { pipeline, sink }
    }

    pub fn run(&mut self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Running {} example", self.pipeline.name());

        let input = self.pipeline.extract();
        tracing::debug!("Extracted {} source values", input.len());

        let output = self.pipeline.transform(input);

        let line = self.pipeline.render(&output)?;
        self.sink.write_line(&line)?;

        tracing::debug!(
            "{} example completed in {:?}",
            self.pipeline.name(),
            started.elapsed()
        );
        Ok(line)
    }
}
