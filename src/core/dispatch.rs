use crate::domain::model::Value;

/// Two kinds, two formulas: text maps to its character count, numbers are
/// doubled. The enum is closed, so the match covers every input.
pub fn process_value(value: Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(number) => number * 2.0,
    }
}
