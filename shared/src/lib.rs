//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the POS terminal and the donation
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Agent sign-in and profile DTOs
//!   - **[`dto::catalog`]**: Events, category lookups and donor search results
//!   - **[`dto::transaction`]**: History rows, pending rows and create-transaction responses
//!   - **[`dto::dashboard`]**: Aggregated dashboard summaries
//! - **[`de`]**: Lenient deserializers for fields the backend sends as either
//!   numbers or numeric strings
//! - **[`utils`]**: Shared formatting helpers
//!   - **[`utils::format_rupiah`]**: Indonesian thousands grouping
//!   - **[`utils::digits_only`]**: Strip everything but ASCII digits
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON with Indonesian field names for
//! transaction records (`nomorBukti`, `noHp`, `metodePembayaran`, ...). Rust
//! fields use English names and map onto the wire names with `#[serde(rename)]`.
//!
//! ```text
//! GET /api/pos/history?page=0
//!
//! {
//!   "content": [
//!     { "nomorBukti": "BKT-0001", "tanggal": "2026-03-01", "nama": "Ahmad",
//!       "kategori": "zakat", "nominal": 50000, "metodePembayaran": "tunai" }
//!   ],
//!   "totalPages": 1,
//!   "totalElements": 1,
//!   "number": 0
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::transaction::HistoryRecord;
//!
//! let row: HistoryRecord = serde_json::from_str(
//!     r#"{"nomorBukti":"BKT-1","tanggal":"2026-03-01","nama":"Ahmad","kategori":"zakat","nominal":"50000","metodePembayaran":"tunai"}"#,
//! ).unwrap();
//! assert_eq!(row.nominal, 50_000);
//! ```

pub mod de;
pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
