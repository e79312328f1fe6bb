use crate::domain::model::Sequence;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::render;

const SOURCE: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Keeps the values divisible by two, preserving input order.
pub fn even_numbers(values: &[i64]) -> Sequence<i64> {
    values
        .iter()
        .copied()
        .filter(|value| value % 2 == 0)
        .collect()
}

pub struct EvenFilterPipeline;

impl Pipeline for EvenFilterPipeline {
    type Item = i64;
    type Output = Sequence<i64>;

    fn name(&self) -> &'static str {
        "even-filter"
    }

    fn extract(&self) -> Vec<i64> {
        SOURCE.to_vec()
    }

    fn transform(&self, input: Vec<i64>) -> Sequence<i64> {
        even_numbers(&input)
    }

    fn render(&self, output: &Sequence<i64>) -> Result<String> {
        render::to_line(output)
    }
}
