//! 58mm thermal layout, 32 monospace columns.

use shared::format_rupiah;

use super::format::{cut_text, escape_html, hr, line_lr, word_wrap};
use super::ReceiptData;

pub const WIDTH: usize = 32;

const STORE_NAME: &str = "LAZIS SULTAN AGUNG";
const STORE_FOUNDATION: &str = "YAYASAN LAZIS SULTAN AGUNG";
const STORE_ADDRESS: &str = "JL. SOEKARNO HATTA NO 97A, TLOGOSARI KULON, PEDURUNGAN SEMARANG";
const DEFAULT_LOCATION: &str = "Semarang";

/// Label column width of the metadata block ("CUSTOMER: " plus one)
const LABEL_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Bold,
    Center,
    CenterBold,
    /// Centered, small print
    Fine,
}

impl LineStyle {
    fn attrs(&self) -> &'static str {
        match self {
            LineStyle::Plain => "",
            LineStyle::Bold => r#" class="bold""#,
            LineStyle::Center => r#" class="center""#,
            LineStyle::CenterBold => r#" class="center bold""#,
            LineStyle::Fine => r#" class="center fine""#,
        }
    }
}

/// One printed row, before HTML escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThermalLine {
    pub text: String,
    pub style: LineStyle,
}

impl ThermalLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Plain)
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

fn meta(label: &str, value: &str) -> ThermalLine {
    let left = format!("{}{}", label, cut_text(value, WIDTH - LABEL_WIDTH));
    ThermalLine::plain(line_lr(&left, "", WIDTH))
}

/// Receipt rows in print order.
pub fn lines(data: &ReceiptData) -> Vec<ThermalLine> {
    let location = if data.event_location.trim().is_empty() {
        DEFAULT_LOCATION
    } else {
        data.event_location.as_str()
    };
    let cashier = if data.cashier.is_empty() { "SYSTEM" } else { &data.cashier };
    let method = if data.payment_method.is_empty() {
        "TUNAI".to_string()
    } else {
        data.payment_method.to_uppercase()
    };
    let amount = format_rupiah(data.nominal);

    let mut out = vec![
        ThermalLine::new(cut_text(STORE_NAME, WIDTH), LineStyle::CenterBold),
        ThermalLine::new(cut_text(STORE_FOUNDATION, WIDTH), LineStyle::Center),
        ThermalLine::new(cut_text(STORE_ADDRESS, WIDTH), LineStyle::Fine),
        ThermalLine::blank(),
        ThermalLine::plain(hr(WIDTH, '-')),
        meta("NOMOR   : ", &data.receipt_number),
        meta("TANGGAL : ", &data.date),
        meta("LOKASI  : ", location),
        meta("KASIR   : ", cashier),
        meta("CUSTOMER: ", &data.donor_name),
        ThermalLine::plain(hr(WIDTH, '-')),
        ThermalLine::blank(),
    ];

    for row in word_wrap(&data.category_label(), WIDTH) {
        out.push(ThermalLine::plain(row));
    }
    out.push(ThermalLine::plain(line_lr(
        &format!("1 PCS @ {}", amount),
        &amount,
        WIDTH,
    )));

    out.extend([
        ThermalLine::blank(),
        ThermalLine::plain(hr(WIDTH, '-')),
        ThermalLine::blank(),
        ThermalLine::new(line_lr("NETTO  :", &amount, WIDTH), LineStyle::Bold),
        ThermalLine::blank(),
        ThermalLine::plain(line_lr("BAYAR  :", &amount, WIDTH)),
        ThermalLine::plain(line_lr("METODE :", &cut_text(&method, 15), WIDTH)),
        ThermalLine::blank(),
        ThermalLine::plain(hr(WIDTH, '-')),
        ThermalLine::blank(),
        ThermalLine::new("Terima kasih atas donasi anda.", LineStyle::Fine),
        ThermalLine::new("Semoga menjadi amal jariyah", LineStyle::Fine),
        ThermalLine::new("yang berkah dan bermanfaat.", LineStyle::Fine),
        ThermalLine::blank(),
        ThermalLine::blank(),
    ]);

    out
}

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    @page { size: 58mm auto; margin: 0; }
    body { width: 58mm; max-width: 58mm; margin: 0 auto; padding: 4mm 3mm;
           font-family: 'Courier New', monospace; font-size: 11px; line-height: 1.2; color: #000; }
    pre { font-family: inherit; font-size: inherit; line-height: inherit; white-space: pre; margin: 0; }
    .center { text-align: center; }
    .bold { font-weight: bold; }
    .fine { font-size: 9px; }
    @media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }
"#;

/// Full HTML document, one `<pre>` per row.
pub fn render(data: &ReceiptData) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Struk Donasi</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    for line in lines(data) {
        html.push_str(&format!(
            "<pre{}>{}</pre>\n",
            line.style.attrs(),
            escape_html(&line.text)
        ));
    }

    html.push_str("<script>window.onload = function () { window.print(); };</script>\n");
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::tests::history_row;
    use crate::receipt::{normalize, ReceiptSource};

    fn data() -> ReceiptData {
        normalize(&ReceiptSource::History(history_row()), None)
    }

    #[test]
    fn test_every_line_fits_the_roll() {
        let mut data = data();
        data.donor_name = "Muhammad Abdurrahman bin Abdullah Al-Fatih".to_string();
        data.receipt_number = "BKT/2026/03/000000000000000001".to_string();
        data.category = "Campaign".to_string();
        data.sub_category = "Pembangunan Sumur Wakaf di Nusa Tenggara Barat".to_string();
        data.payment_method = "transfer bank syariah indonesia".to_string();
        data.nominal = 1_250_000_000;

        for line in lines(&data) {
            assert!(
                line.text.chars().count() <= WIDTH,
                "line too wide: {:?}",
                line.text
            );
        }
    }

    #[test]
    fn test_single_category_line_and_totals() {
        let rows = lines(&data());
        let texts: Vec<&str> = rows.iter().map(|l| l.text.as_str()).collect();

        let category_rows: Vec<_> = texts.iter().filter(|t| **t == "Infak").collect();
        assert_eq!(category_rows.len(), 1);

        let netto = texts.iter().find(|t| t.starts_with("NETTO")).unwrap();
        let bayar = texts.iter().find(|t| t.starts_with("BAYAR")).unwrap();
        assert!(netto.ends_with(" 50.000"));
        assert!(bayar.ends_with(" 50.000"));
        assert!(texts.iter().any(|t| t.starts_with("METODE :") && t.ends_with("TUNAI")));
        assert!(texts.iter().any(|t| t.starts_with("LOKASI  : Masjid Agung")));
    }

    #[test]
    fn test_location_defaults_to_semarang() {
        let mut data = data();
        data.event_location.clear();
        assert!(lines(&data)
            .iter()
            .any(|l| l.text.starts_with("LOKASI  : Semarang")));
    }

    #[test]
    fn test_render_escapes_fields() {
        let mut data = data();
        data.donor_name = "<Ahmad & Co>".to_string();
        let html = render(&data);
        assert!(html.contains("CUSTOMER: &lt;Ahmad &amp; Co&gt;"));
        assert!(!html.contains("<Ahmad"));
    }
}
