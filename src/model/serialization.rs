use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a boolean that may arrive as `true`/`false`, `0`/`1` or a string
///
/// MySQL `TINYINT(1)` columns reach the client as numbers, and some form
/// handlers post `"true"` / `"1"`. Anything unrecognised becomes `false`.
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    })
}
