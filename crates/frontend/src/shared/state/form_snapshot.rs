//! Dirty tracking for edit forms.
//!
//! A form records the values it was loaded (or last saved) with and compares
//! the live values against that baseline. Comparison is structural over JSON
//! values with string leaves trimmed, so `"A "` and `"A"` count as equal.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareRules {
    pub trim_strings: bool,
}

impl CompareRules {
    pub fn trimmed() -> Self {
        Self { trim_strings: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    baseline: Value,
    rules: CompareRules,
}

impl FormSnapshot {
    pub fn new(values: Value, rules: CompareRules) -> Self {
        let baseline = normalize(&values, rules);
        Self { baseline, rules }
    }

    /// Take `values` as the new clean state (after load or successful save).
    pub fn commit(&mut self, values: &Value) {
        self.baseline = normalize(values, self.rules);
    }

    pub fn is_dirty(&self, current: &Value) -> bool {
        normalize(current, self.rules) != self.baseline
    }
}

fn normalize(value: &Value, rules: CompareRules) -> Value {
    match value {
        Value::String(s) if rules.trim_strings => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(items.iter().map(|item| normalize(item, rules)).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, v)| (name.clone(), normalize(v, rules)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_whitespace_is_not_a_change() {
        let snapshot = FormSnapshot::new(json!({ "firstName": "A " }), CompareRules::trimmed());
        assert!(!snapshot.is_dirty(&json!({ "firstName": "A" })));
        assert!(snapshot.is_dirty(&json!({ "firstName": "B" })));
    }

    #[test]
    fn commit_moves_the_baseline() {
        let mut snapshot = FormSnapshot::new(json!({ "name": "Old" }), CompareRules::trimmed());
        let edited = json!({ "name": "New" });
        assert!(snapshot.is_dirty(&edited));

        snapshot.commit(&edited);
        assert!(!snapshot.is_dirty(&edited));
        assert!(snapshot.is_dirty(&json!({ "name": "Old" })));
    }

    #[test]
    fn nested_values_are_trimmed_too() {
        let snapshot = FormSnapshot::new(
            json!({ "tags": [" a", "b "], "meta": { "note": "x" } }),
            CompareRules::trimmed(),
        );
        assert!(!snapshot.is_dirty(&json!({ "tags": ["a", "b"], "meta": { "note": "x " } })));
        assert!(snapshot.is_dirty(&json!({ "tags": ["a"], "meta": { "note": "x" } })));
    }

    #[test]
    fn added_or_removed_fields_are_changes() {
        let snapshot = FormSnapshot::new(json!({ "name": "Tower" }), CompareRules::trimmed());
        assert!(snapshot.is_dirty(&json!({ "name": "Tower", "wing": "" })));
        assert!(snapshot.is_dirty(&json!({})));
    }

    #[test]
    fn whitespace_is_significant_without_trimming() {
        let rules = CompareRules { trim_strings: false };
        let snapshot = FormSnapshot::new(json!({ "name": "A " }), rules);
        assert!(snapshot.is_dirty(&json!({ "name": "A" })));
    }
}
