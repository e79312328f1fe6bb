use crate::domain::model::Sequence;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::render;

const SOURCE: [i64; 5] = [4, 1, 7, 3, 2];

/// Returns the same multiset in non-decreasing order. `Vec::sort` is
/// stable, so equal values keep their relative input order.
pub fn sorted(values: &[i64]) -> Sequence<i64> {
    let mut output = values.to_vec();
    output.sort();
    output
}

pub struct SortPipeline;

impl Pipeline for SortPipeline {
    type Item = i64;
    type Output = Sequence<i64>;

    fn name(&self) -> &'static str {
        "sort"
    }

    fn extract(&self) -> Vec<i64> {
        SOURCE.to_vec()
    }

    fn transform(&self, input: Vec<i64>) -> Sequence<i64> {
        sorted(&input)
    }

    fn render(&self, output: &Sequence<i64>) -> Result<String> {
        render::to_line(output)
    }
}
