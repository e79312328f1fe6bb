use crate::utils::error::Result;

/// One stream example: a fixed literal source, one pure transform, and a
/// rendering of the result as a single line of text.
pub trait Pipeline: Send + Sync {
    type Item;
    type Output;

    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Produce the literal source sequence.
    fn extract(&self) -> Vec<Self::Item>;

    /// Apply the pure transformation to the source.
    fn transform(&self, input: Vec<Self::Item>) -> Self::Output;

    /// Render the transformed result as one line of text.
    fn render(&self, output: &Self::Output) -> Result<String>;
}

/// Destination for the rendered result line.
pub trait Sink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}
