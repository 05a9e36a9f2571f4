//! Transaction DTOs: create requests, history/pending rows and the
//! create-transaction success body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level donation classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Zakat,
    Infak,
    Dskl,
    #[default]
    Campaign,
}

impl CategoryType {
    pub fn all() -> &'static [CategoryType] {
        &[
            CategoryType::Zakat,
            CategoryType::Infak,
            CategoryType::Dskl,
            CategoryType::Campaign,
        ]
    }

    /// Wire value, also the path segment of the sub-category endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Zakat => "zakat",
            CategoryType::Infak => "infak",
            CategoryType::Dskl => "dskl",
            CategoryType::Campaign => "campaign",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryType::Zakat => "Zakat",
            CategoryType::Infak => "Infak",
            CategoryType::Dskl => "DSKL",
            CategoryType::Campaign => "Campaign",
        }
    }

    /// Display label for a raw category string from the backend
    pub fn label_for(raw: &str) -> String {
        Self::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the donor paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Tunai,
    Transfer,
    Qris,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[PaymentMethod::Tunai, PaymentMethod::Transfer, PaymentMethod::Qris]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Tunai => "tunai",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Qris => "qris",
        }
    }

    /// Upper-cased value sent in the create-transaction form
    pub fn wire_value(&self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Tunai => "Tunai",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Qris => "QRIS",
        }
    }

    /// Display label for a raw payment method string from the backend
    pub fn label_for(raw: &str) -> String {
        Self::all()
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
            .map(|m| m.label().to_string())
            .unwrap_or_else(|| raw.to_string())
    }

    /// Transfer and QRIS land in the pending list until staff validate them
    pub fn requires_validation(&self) -> bool {
        matches!(self, PaymentMethod::Transfer | PaymentMethod::Qris)
    }
}

/// Fields of `POST /api/pos/create-transaction` (multipart form).
///
/// The optional payment-proof image is attached separately by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionRequest {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub date: String,
    pub description: String,
    pub category_type: CategoryType,
    pub category_id: Option<String>,
    pub amount: String,
    pub payment_method: PaymentMethod,
    pub event_id: String,
}

impl CreateTransactionRequest {
    /// Text parts of the multipart form, in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let amount = self.amount.trim();
        vec![
            ("name", self.name.trim().to_string()),
            ("phoneNumber", self.phone_number.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("address", self.address.trim().to_string()),
            ("date", self.date.clone()),
            ("description", self.description.trim().to_string()),
            ("categoryType", self.category_type.as_str().to_string()),
            ("categoryId", self.category_id.clone().unwrap_or_default()),
            ("amount", if amount.is_empty() { "0".to_string() } else { amount.to_string() }),
            ("paymentMethod", self.payment_method.wire_value()),
            ("eventId", self.event_id.clone()),
        ]
    }
}

/// Validated transaction as listed by `/api/pos/history`, and pending rows
/// from `/api/transaction/temp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryRecord {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub id: Option<String>,
    #[serde(rename = "nomorBukti", default, deserialize_with = "crate::de::string")]
    pub receipt_number: String,
    #[serde(rename = "tanggal", default, deserialize_with = "crate::de::string")]
    pub date: String,
    #[serde(rename = "nama", default, deserialize_with = "crate::de::string")]
    pub donor_name: String,
    #[serde(rename = "noHp", default, deserialize_with = "crate::de::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub email: String,
    #[serde(rename = "alamat", default, deserialize_with = "crate::de::string")]
    pub address: String,
    #[serde(rename = "kategori", default, deserialize_with = "crate::de::string")]
    pub category: String,
    #[serde(rename = "subKategori", default, deserialize_with = "crate::de::string")]
    pub sub_category: String,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub nominal: i64,
    #[serde(rename = "terbilang", default, deserialize_with = "crate::de::string")]
    pub amount_in_words: String,
    #[serde(rename = "metodePembayaran", default, deserialize_with = "crate::de::string")]
    pub payment_method: String,
    #[serde(rename = "namaEvent", default, deserialize_with = "crate::de::string")]
    pub event_name: String,
    #[serde(rename = "lokasiEvent", default, deserialize_with = "crate::de::string")]
    pub event_location: String,
}

impl HistoryRecord {
    /// `kategori - subKategori`, or just the category
    pub fn category_label(&self) -> String {
        if self.sub_category.is_empty() {
            self.category.clone()
        } else {
            format!("{} - {}", self.category, self.sub_category)
        }
    }

    /// Stable row key: backend id, else receipt number
    pub fn row_key(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.receipt_number.clone())
    }
}

/// One page of history rows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    #[serde(default)]
    pub content: Vec<HistoryRecord>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
}

/// Query string of `GET /api/pos/history`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<CategoryType>,
    pub event_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub search: String,
    pub page: u32,
}

impl HistoryQuery {
    /// Only set filters are sent; `page` is always present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(event_id) = self.event_id.as_ref().filter(|e| !e.is_empty()) {
            pairs.push(("eventId", event_id.clone()));
        }
        if let Some(method) = self.payment_method {
            pairs.push(("paymentMethod", method.as_str().to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}

/// Per-category line of a freshly created transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonationLine {
    #[serde(rename = "kategori", default, deserialize_with = "crate::de::string")]
    pub category: String,
    #[serde(rename = "subKategori", default, deserialize_with = "crate::de::string")]
    pub sub_category: String,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub nominal: i64,
}

impl DonationLine {
    pub fn label(&self) -> String {
        if self.sub_category.is_empty() {
            self.category.clone()
        } else {
            format!("{} - {}", self.category, self.sub_category)
        }
    }
}

/// Body returned by a successful create-transaction call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmittedTransaction {
    #[serde(rename = "nomorBukti", default, deserialize_with = "crate::de::opt_id")]
    pub receipt_number: Option<String>,
    #[serde(rename = "tanggal", default, deserialize_with = "crate::de::string")]
    pub date: String,
    #[serde(rename = "nama", default, deserialize_with = "crate::de::string")]
    pub donor_name: String,
    #[serde(rename = "noHp", default, deserialize_with = "crate::de::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub email: String,
    #[serde(rename = "alamat", default, deserialize_with = "crate::de::string")]
    pub address: String,
    #[serde(rename = "donasi", default)]
    pub lines: Vec<DonationLine>,
    #[serde(rename = "totalNominal", default, deserialize_with = "crate::de::opt_amount")]
    pub total_nominal: Option<i64>,
    #[serde(default, deserialize_with = "crate::de::opt_amount")]
    pub nominal: Option<i64>,
    #[serde(rename = "terbilang", default, deserialize_with = "crate::de::string")]
    pub amount_in_words: String,
    #[serde(rename = "metodePembayaran", default)]
    pub payment_method: Option<String>,
    #[serde(rename = "namaEvent", default, deserialize_with = "crate::de::string")]
    pub event_name: String,
    #[serde(rename = "lokasiEvent", default, deserialize_with = "crate::de::string")]
    pub event_location: String,
}
