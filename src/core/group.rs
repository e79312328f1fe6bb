use crate::domain::model::Grouping;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::render;

const SOURCE: [&str; 5] = ["apple", "kiwi", "pear", "grape", "plum"];

/// Partitions the words by length. Each word lands in exactly one group,
/// keyed by its own length; words keep input order within a group.
pub fn group_by_length(words: &[String]) -> Grouping {
    let mut groups = Grouping::new();
    for word in words {
        groups.entry(word.len()).or_default().push(word.clone());
    }
    groups
}

pub struct LengthGroupPipeline;

impl Pipeline for LengthGroupPipeline {
    type Item = String;
    type Output = Grouping;

    fn name(&self) -> &'static str {
        "length-group"
    }

    fn extract(&self) -> Vec<String> {
        SOURCE.iter().map(|word| word.to_string()).collect()
    }

    fn transform(&self, input: Vec<String>) -> Grouping {
        group_by_length(&input)
    }

    fn render(&self, output: &Grouping) -> Result<String> {
        render::to_line(output)
    }
}
