//! Zephyr test step types.

use serde::Deserialize;

/// A test step as stored by Zephyr.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStep {
    /// Position of the step within the test.
    #[serde(default)]
    pub order_id: Option<u64>,

    /// Action text.
    #[serde(default)]
    pub step: Option<String>,

    /// Input data.
    #[serde(default)]
    pub data: Option<String>,

    /// Expected result.
    #[serde(default)]
    pub result: Option<String>,
}

/// Sorts steps by their order id. Steps without one keep their position
/// relative to each other and go last.
pub fn sort_steps(steps: &mut [SourceStep]) {
    steps.sort_by_key(|step| step.order_id.unwrap_or(u64::MAX));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_order_id() {
        let mut steps: Vec<SourceStep> = serde_json::from_str(
            r#"[
                {"id": 3, "orderId": 2, "step": "second"},
                {"id": 9, "step": "unordered"},
                {"id": 1, "orderId": 1, "step": "first", "data": "x", "result": "y"}
            ]"#,
        )
        .unwrap();

        sort_steps(&mut steps);

        let actions: Vec<_> = steps.iter().map(|s| s.step.as_deref()).collect();
        assert_eq!(
            actions,
            vec![Some("first"), Some("second"), Some("unordered")]
        );
    }
}
