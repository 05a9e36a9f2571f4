//! # Receipt Formatter
//!
//! Pure rendering of a transaction into printable HTML. Two call sites feed
//! it: history/pending rows and the body returned right after a transaction
//! is created. Each produces a [`ReceiptSource`] explicitly, and
//! [`normalize`] flattens either one into [`ReceiptData`].
//!
//! Nothing in here touches the network or the filesystem; see
//! [`crate::services::print`] for the print surface.

pub mod format;
pub mod formal;
pub mod terbilang;
pub mod thermal;

use shared::{DonationLine, HistoryRecord, SubmittedTransaction, UserProfile};

/// Record a receipt is printed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptSource {
    History(HistoryRecord),
    Submitted(SubmittedTransaction),
}

/// Printable layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiptLayout {
    /// 58mm roll, 32 columns
    Thermal,
    /// A4 page with breakdown and signatures
    Formal,
}

impl ReceiptLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiptLayout::Thermal => "thermal",
            ReceiptLayout::Formal => "formal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReceiptLayout::Thermal => "Cetak Struk",
            ReceiptLayout::Formal => "Cetak Bukti A4",
        }
    }
}

/// Flattened receipt fields shared by both layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptData {
    pub receipt_number: String,
    pub date: String,
    pub donor_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub category: String,
    pub sub_category: String,
    pub nominal: i64,
    /// Amount in words as carried by the record; empty when absent
    pub amount_in_words: String,
    pub payment_method: String,
    pub event_name: String,
    pub event_location: String,
    pub cashier: String,
    pub lines: Vec<DonationLine>,
}

impl ReceiptData {
    /// `kategori - subKategori`, or just the category
    pub fn category_label(&self) -> String {
        if self.sub_category.is_empty() {
            self.category.clone()
        } else {
            format!("{} - {}", self.category, self.sub_category)
        }
    }

    /// The record's own amount in words, else `amount` spelled out locally
    pub fn words_for(&self, amount: i64) -> String {
        if self.amount_in_words.is_empty() {
            terbilang::rupiah(amount)
        } else {
            self.amount_in_words.clone()
        }
    }
}

/// Display nominal: the first positive of the explicit total, the first line,
/// the sum of the lines and the raw nominal field. Zero when none is positive.
pub fn resolve_nominal(total: Option<i64>, lines: &[DonationLine], raw: Option<i64>) -> i64 {
    let first_line = lines.first().map(|l| l.nominal);
    let sum: i64 = lines.iter().map(|l| l.nominal).sum();

    [total, first_line, Some(sum), raw]
        .into_iter()
        .flatten()
        .find(|n| *n > 0)
        .unwrap_or(0)
}

/// Flatten a source into receipt fields. The cashier is the logged-in
/// user's name, else email, else `SYSTEM`.
pub fn normalize(source: &ReceiptSource, user: Option<&UserProfile>) -> ReceiptData {
    let cashier = user
        .map(UserProfile::cashier_name)
        .unwrap_or_else(|| "SYSTEM".to_string());

    match source {
        ReceiptSource::History(row) => {
            let lines = vec![DonationLine {
                category: row.category.clone(),
                sub_category: row.sub_category.clone(),
                nominal: row.nominal,
            }];
            let nominal = resolve_nominal(None, &lines, Some(row.nominal));
            ReceiptData {
                receipt_number: row.receipt_number.clone(),
                date: row.date.clone(),
                donor_name: row.donor_name.clone(),
                phone: row.phone.clone(),
                email: row.email.clone(),
                address: row.address.clone(),
                category: row.category.clone(),
                sub_category: row.sub_category.clone(),
                amount_in_words: row.amount_in_words.trim().to_string(),
                nominal,
                payment_method: row.payment_method.clone(),
                event_name: row.event_name.clone(),
                event_location: row.event_location.clone(),
                cashier,
                lines,
            }
        }
        ReceiptSource::Submitted(tx) => {
            let first = tx.lines.first();
            let nominal = resolve_nominal(tx.total_nominal, &tx.lines, tx.nominal);
            ReceiptData {
                receipt_number: tx
                    .receipt_number
                    .clone()
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| "-".to_string()),
                date: tx.date.clone(),
                donor_name: tx.donor_name.clone(),
                phone: tx.phone.clone(),
                email: tx.email.clone(),
                address: tx.address.clone(),
                category: first.map(|l| l.category.clone()).unwrap_or_default(),
                sub_category: first.map(|l| l.sub_category.clone()).unwrap_or_default(),
                amount_in_words: tx.amount_in_words.trim().to_string(),
                nominal,
                payment_method: tx
                    .payment_method
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "tunai".to_string()),
                event_name: tx.event_name.clone(),
                event_location: tx.event_location.clone(),
                cashier,
                lines: tx.lines.clone(),
            }
        }
    }
}

/// HTML document for `layout`.
pub fn render(data: &ReceiptData, layout: ReceiptLayout) -> String {
    match layout {
        ReceiptLayout::Thermal => thermal::render(data),
        ReceiptLayout::Formal => formal::render(data),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn history_row() -> HistoryRecord {
        HistoryRecord {
            id: Some("7".to_string()),
            receipt_number: "BKT-0007".to_string(),
            date: "2026-03-01".to_string(),
            donor_name: "Ahmad".to_string(),
            phone: "081234567890".to_string(),
            email: "ahmad@example.com".to_string(),
            address: String::new(),
            category: "Infak".to_string(),
            sub_category: String::new(),
            nominal: 50_000,
            amount_in_words: String::new(),
            payment_method: "tunai".to_string(),
            event_name: "Jumat Berkah".to_string(),
            event_location: "Masjid Agung".to_string(),
        }
    }

    fn line(category: &str, nominal: i64) -> DonationLine {
        DonationLine {
            category: category.to_string(),
            sub_category: String::new(),
            nominal,
        }
    }

    #[test]
    fn test_resolve_nominal_order() {
        let lines = vec![line("Zakat", 30_000), line("Infak", 20_000)];
        assert_eq!(resolve_nominal(Some(70_000), &lines, Some(1)), 70_000);
        assert_eq!(resolve_nominal(None, &lines, Some(1)), 30_000);
        assert_eq!(resolve_nominal(Some(0), &lines, None), 30_000);

        let zero_first = vec![line("Zakat", 0), line("Infak", 20_000)];
        assert_eq!(resolve_nominal(None, &zero_first, Some(5)), 20_000);

        assert_eq!(resolve_nominal(None, &[], Some(40_000)), 40_000);
        assert_eq!(resolve_nominal(None, &[], None), 0);
        assert_eq!(resolve_nominal(Some(0), &[line("Zakat", 0)], Some(0)), 0);
    }

    #[test]
    fn test_normalize_history_row() {
        let user = UserProfile {
            name: Some("Siti".to_string()),
            ..Default::default()
        };
        let data = normalize(&ReceiptSource::History(history_row()), Some(&user));

        assert_eq!(data.receipt_number, "BKT-0007");
        assert_eq!(data.nominal, 50_000);
        assert_eq!(data.cashier, "Siti");
        assert_eq!(data.category_label(), "Infak");
        assert!(data.amount_in_words.is_empty());
        assert_eq!(data.words_for(data.nominal), "lima puluh ribu rupiah");
    }

    #[test]
    fn test_normalize_submitted_defaults() {
        let tx = SubmittedTransaction {
            donor_name: "Budi".to_string(),
            lines: vec![DonationLine {
                category: "Zakat".to_string(),
                sub_category: "Maal".to_string(),
                nominal: 100_000,
            }],
            amount_in_words: "seratus ribu rupiah".to_string(),
            ..Default::default()
        };
        let data = normalize(&ReceiptSource::Submitted(tx), None);

        assert_eq!(data.receipt_number, "-");
        assert_eq!(data.payment_method, "tunai");
        assert_eq!(data.cashier, "SYSTEM");
        assert_eq!(data.category, "Zakat");
        assert_eq!(data.sub_category, "Maal");
        assert_eq!(data.nominal, 100_000);
        assert_eq!(data.words_for(250_000), "seratus ribu rupiah");
    }

    #[test]
    fn test_render_picks_layout() {
        let data = normalize(&ReceiptSource::History(history_row()), None);
        assert!(render(&data, ReceiptLayout::Thermal).contains("NETTO"));
        assert!(render(&data, ReceiptLayout::Formal).contains("BUKTI PENERIMAAN DONASI"));
    }
}
