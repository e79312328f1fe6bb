use crate::domain::model::Sequence;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::render;

const SOURCE: [&str; 3] = ["apple", "banana", "kiwi"];

/// Maps each word to its ASCII uppercase form, one-to-one and in order.
/// Locale-invariant: only `a-z` are remapped.
pub fn to_upper_case(values: &[String]) -> Sequence<String> {
    values.iter().map(|value| value.to_ascii_uppercase()).collect()
}

pub struct UpperCasePipeline;

impl Pipeline for UpperCasePipeline {
    type Item = String;
    type Output = Sequence<String>;

    fn name(&self) -> &'static str {
        "upper-case"
    }

    fn extract(&self) -> Vec<String> {
        SOURCE.iter().map(|word| word.to_string()).collect()
    }

    fn transform(&self, input: Vec<String>) -> Sequence<String> {
        to_upper_case(&input)
    }

    fn render(&self, output: &Sequence<String>) -> Result<String> {
        render::to_line(output)
    }
}
