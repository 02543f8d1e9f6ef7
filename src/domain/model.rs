use crate::utils::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pass-through scalar copied verbatim from the upstream entity.
pub type Field = Option<serde_json::Value>;

/// Vendor key as the ERP expects it: left-padded with `'0'` to ten characters.
/// Longer identifiers are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VendorId(String);

impl VendorId {
    pub const WIDTH: usize = 10;

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(AdapterError::bad_request("Vendor ID is required"));
        }
        Ok(Self(format!("{:0>width$}", raw, width = Self::WIDTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Upstream envelope
// ---------------------------------------------------------------------------

/// OData V2 JSON wrapper: `{ "d": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub d: Option<T>,
}

/// Collection payload inside `d`: `{ "results": [...] }`.
/// A missing or `null` `results` reads as an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default)]
    results: Option<Vec<T>>,
}

impl<T> Collection<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Upstream entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginEntity {
    pub lifnr: Field,
    pub password: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileEntity {
    pub vendor_id: Field,
    pub name: Field,
    pub city: Field,
    pub country: Field,
    pub postcode: Field,
    pub street: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GoodsReceiptEntity {
    pub material_doc: Field,
    pub doc_year: Field,
    pub post_date: Field,
    pub entry_date: Field,
    pub po_number: Field,
    pub po_item: Field,
    pub material: Field,
    pub quantity: Field,
    pub unit: Field,
    pub vendor_id: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceEntity {
    pub invoice_no: Field,
    pub invoice_date: Field,
    pub total_amount: Field,
    pub currency: Field,
    pub payment_terms: Field,
    pub po_no: Field,
    pub po_item: Field,
    pub material_no: Field,
    pub description: Field,
    pub quantity: Field,
    pub unit_price: Field,
    pub unit: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoEntity {
    pub memo_doc: Field,
    pub doc_year: Field,
    pub posting_date: Field,
    pub entry_date: Field,
    pub vendor_id: Field,
    pub memo_type: Field,
    pub amount: Field,
    pub currency: Field,
    pub reference_doc_no: Field,
    pub doc_type: Field,
    pub company_code: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseOrderEntity {
    pub vendor_id: Field,
    pub delivery_date: Field,
    pub doc_date: Field,
    pub material: Field,
    pub unit: Field,
    pub po_number: Field,
    pub item_number: Field,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgingEntity {
    pub payment_doc: Field,
    pub doc_year: Field,
    pub payment_date: Field,
    pub entry_date: Field,
    pub vendor_id: Field,
    pub amount_paid: Field,
    pub currency: Field,
    pub due_date: Field,
    pub aging: Field,
}

// ---------------------------------------------------------------------------
// Records returned to the portal
// ---------------------------------------------------------------------------

/// Login body. Values are kept as raw JSON: the portal may send the vendor
/// number as a string or as a number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub lifnr: Field,
    #[serde(default)]
    pub password: Field,
}

impl LoginRequest {
    /// The vendor number as it goes into the login key, plus the password
    /// to compare. `None` when either one is missing, `null`, `false`, `0`
    /// or an empty string.
    pub fn credentials(&self) -> Option<(String, &serde_json::Value)> {
        let lifnr = self.lifnr.as_ref().filter(|v| is_present(v))?;
        let password = self.password.as_ref().filter(|v| is_present(v))?;
        let key = match lifnr {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Some((key, password))
    }
}

fn is_present(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Field,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_doc: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_year: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_item: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Field,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_no: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_no: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_item: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_no: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Field,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_doc: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_year: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_type: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_doc_no: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_code: Field,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_number: Field,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_doc: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_year: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aging: Field,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub rfq_number: String,
    pub material: String,
    pub description: String,
    pub created_date: String,
    pub target_date: String,
}

/// Binary invoice as downloaded from the ERP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
