use crate::utils::error::Result;
use serde::Serialize;

/// Renders a result as a single JSON line, the crate's standard textual
/// representation of a sequence or grouping.
pub fn to_line<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}
