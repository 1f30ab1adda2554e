//! SKU record types
//!
//! These types mirror the `/sku` collection resource. Values typed into the
//! table inputs are coerced to numbers with browser unary-plus semantics
//! before they are sent, see [`coerce_number`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Server-assigned record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkuId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SkuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkuId::Number(id) => write!(f, "{id}"),
            SkuId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for SkuId {
    fn from(id: i64) -> Self {
        SkuId::Number(id)
    }
}

impl From<&str> for SkuId {
    fn from(id: &str) -> Self {
        SkuId::Text(id.to_string())
    }
}

/// One row of the `GET /sku` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub id: SkuId,

    #[serde(default, deserialize_with = "lenient_text")]
    pub sku: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub plan_margin: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub plan_orders: Option<f64>,

    /// Columns the panel does not edit (stock, prices, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkuRecord {
    /// Text shown in the input for `field`
    pub fn field_text(&self, field: SkuField) -> String {
        match field {
            SkuField::Sku => self.sku.clone(),
            SkuField::PlanMargin => self.plan_margin.map(format_number).unwrap_or_default(),
            SkuField::PlanOrders => self.plan_orders.map(format_number).unwrap_or_default(),
        }
    }
}

/// Editable columns of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkuField {
    Sku,
    PlanMargin,
    PlanOrders,
}

impl SkuField {
    pub const ALL: [SkuField; 3] = [SkuField::Sku, SkuField::PlanMargin, SkuField::PlanOrders];

    /// Wire name of the field
    pub fn name(self) -> &'static str {
        match self {
            SkuField::Sku => "sku",
            SkuField::PlanMargin => "plan_margin",
            SkuField::PlanOrders => "plan_orders",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkuField::Sku => "SKU",
            SkuField::PlanMargin => "Plan margin",
            SkuField::PlanOrders => "Plan orders",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, SkuField::Sku)
    }

    /// Coerce raw input text into the value sent for this field
    pub fn coerce(self, raw: &str) -> Value {
        if self.is_numeric() {
            coerce_number(raw)
        } else {
            Value::String(raw.to_string())
        }
    }
}

/// Body of `PUT /sku/{id}`: field names mapped to their new values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkuPatch(Map<String, Value>);

impl SkuPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: SkuField, value: Value) {
        self.0.insert(field.name().to_string(), value);
    }

    pub fn with(mut self, field: SkuField, value: impl Into<Value>) -> Self {
        self.set(field, value.into());
        self
    }

    pub fn get(&self, field: SkuField) -> Option<&Value> {
        self.0.get(field.name())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body of `POST /sku`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSku {
    pub sku: String,
    /// `null` when the input overflowed to infinity
    pub plan_margin: Value,
    pub plan_orders: Value,
}

/// Parse input text the way a browser's unary `+` does: surrounding
/// whitespace is ignored, empty text is `0`, anything unparseable is NaN.
pub fn parse_js_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// JSON encoding of a coerced number. NaN and infinities have no JSON form
/// and become `null`, matching `JSON.stringify`.
pub fn coerce_number(raw: &str) -> Value {
    finite_number(parse_js_number(raw))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Integral values are encoded as JSON integers so `15` is sent as `15`,
/// not `15.0`.
pub fn finite_number(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

fn format_number(value: f64) -> String {
    match finite_number(value) {
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    // Decimal columns are sometimes serialized as strings
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}
