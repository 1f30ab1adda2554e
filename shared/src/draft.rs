//! Add-row form validation

use serde_json::Value;

use crate::sku::{coerce_number, parse_js_number, NewSku};

/// Raw contents of the add-row inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuDraft {
    pub sku: String,
    pub plan_margin: String,
    pub plan_orders: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("SKU is required")]
    MissingSku,

    #[error("plan margin is required")]
    MissingMargin,

    #[error("plan orders is required")]
    MissingOrders,
}

impl SkuDraft {
    pub fn new(
        sku: impl Into<String>,
        plan_margin: impl Into<String>,
        plan_orders: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            plan_margin: plan_margin.into(),
            plan_orders: plan_orders.into(),
        }
    }

    /// Presence check only. A value counts as missing when it is falsy after
    /// coercion (`0` or NaN), so a margin or order count of `0` is rejected as
    /// well. Overflowing input is truthy and is sent as `null`.
    pub fn validate(&self) -> Result<NewSku, DraftError> {
        if self.sku.is_empty() {
            return Err(DraftError::MissingSku);
        }
        let plan_margin = truthy_number(&self.plan_margin).ok_or(DraftError::MissingMargin)?;
        let plan_orders = truthy_number(&self.plan_orders).ok_or(DraftError::MissingOrders)?;

        Ok(NewSku {
            sku: self.sku.clone(),
            plan_margin,
            plan_orders,
        })
    }
}

fn truthy_number(raw: &str) -> Option<Value> {
    let value = parse_js_number(raw);
    if value == 0.0 || value.is_nan() {
        return None;
    }
    Some(coerce_number(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_draft() {
        let new_sku = SkuDraft::new("A-1", "12.5", "40").validate().unwrap();
        assert_eq!(
            serde_json::to_value(&new_sku).unwrap(),
            json!({"sku": "A-1", "plan_margin": 12.5, "plan_orders": 40})
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(SkuDraft::new("", "1", "1").validate(), Err(DraftError::MissingSku));
        assert_eq!(SkuDraft::new("A", "", "1").validate(), Err(DraftError::MissingMargin));
        assert_eq!(SkuDraft::new("A", "1", "  ").validate(), Err(DraftError::MissingOrders));
        assert_eq!(SkuDraft::new("A", "abc", "1").validate(), Err(DraftError::MissingMargin));
    }

    #[test]
    fn test_zero_is_treated_as_missing() {
        assert_eq!(SkuDraft::new("A", "0", "5").validate(), Err(DraftError::MissingMargin));
        assert_eq!(SkuDraft::new("A", "5", "0.0").validate(), Err(DraftError::MissingOrders));
    }

    #[test]
    fn test_negative_values_pass() {
        let new_sku = SkuDraft::new("A", "-3", "1").validate().unwrap();
        assert_eq!(new_sku.plan_margin, json!(-3));
    }

    #[test]
    fn test_overflow_is_truthy_and_sent_as_null() {
        let new_sku = SkuDraft::new("A", "1e400", "-1e400").validate().unwrap();
        assert_eq!(
            serde_json::to_value(&new_sku).unwrap(),
            json!({"sku": "A", "plan_margin": null, "plan_orders": null})
        );
    }
}
