//! Per-row edit buffer
//!
//! Each rendered table row owns one editor. It holds the live input text of
//! every column, and the `PUT` body always carries the whole row as currently
//! typed. Touched fields are tracked only to highlight unsaved rows. Editors
//! are dropped together with their rows on every reload, so unsaved edits do
//! not survive a refresh.

use std::collections::{BTreeMap, BTreeSet};

use sku_admin_shared::{SkuField, SkuId, SkuPatch, SkuRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct RowEditor {
    id: SkuId,
    values: BTreeMap<SkuField, String>,
    touched: BTreeSet<SkuField>,
}

impl RowEditor {
    pub fn new(record: &SkuRecord) -> Self {
        let values = SkuField::ALL
            .into_iter()
            .map(|field| (field, record.field_text(field)))
            .collect();

        Self {
            id: record.id.clone(),
            values,
            touched: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &SkuId {
        &self.id
    }

    /// Current input text for `field`
    pub fn value(&self, field: SkuField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn edit(&mut self, field: SkuField, text: String) {
        self.values.insert(field, text);
        self.touched.insert(field);
    }

    pub fn is_dirty(&self) -> bool {
        !self.touched.is_empty()
    }

    /// Body for `PUT /sku/{id}`: every field, numbers coerced
    pub fn patch(&self) -> SkuPatch {
        let mut patch = SkuPatch::new();
        for field in SkuField::ALL {
            patch.set(field, field.coerce(self.value(field)));
        }
        patch
    }
}
