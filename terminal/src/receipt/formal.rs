//! A4 donation receipt with per-fund breakdown and signature blocks.

use shared::format_rupiah;

use super::format::escape_html;
use super::ReceiptData;

const ORGANIZATION: &str = "LAZIS Sultan Agung";
const DEFAULT_LOCATION: &str = "Semarang";

/// Fund a donation line is booked under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fund {
    Zakat,
    InfakTerikat,
    InfakBebas,
    Dskl,
    Wakaf,
    Other,
}

impl Fund {
    pub const ALL: [Fund; 6] = [
        Fund::Zakat,
        Fund::InfakTerikat,
        Fund::InfakBebas,
        Fund::Dskl,
        Fund::Wakaf,
        Fund::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Fund::Zakat => "Zakat",
            Fund::InfakTerikat => "Infak Terikat",
            Fund::InfakBebas => "Infak Bebas",
            Fund::Dskl => "DSKL",
            Fund::Wakaf => "Wakaf",
            Fund::Other => "Lainnya",
        }
    }

    /// Classify a category / sub-category pair.
    pub fn classify(category: &str, sub_category: &str) -> Fund {
        let category = category.to_lowercase();
        let sub = sub_category.to_lowercase();

        if category.contains("wakaf") || sub.contains("wakaf") {
            Fund::Wakaf
        } else if category.contains("zakat") {
            Fund::Zakat
        } else if category.contains("infak") || category.contains("infaq") {
            if sub.contains("terikat") {
                Fund::InfakTerikat
            } else {
                Fund::InfakBebas
            }
        } else if category.contains("dskl") {
            Fund::Dskl
        } else {
            Fund::Other
        }
    }
}

/// Amount per fund
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub zakat: i64,
    pub infak_terikat: i64,
    pub infak_bebas: i64,
    pub dskl: i64,
    pub wakaf: i64,
    pub other: i64,
}

impl Breakdown {
    /// Sum the receipt's lines per fund. When no line carries an amount the
    /// resolved nominal is booked under the record's own category.
    pub fn from_receipt(data: &ReceiptData) -> Self {
        let mut breakdown = Breakdown::default();
        for line in &data.lines {
            breakdown.add(Fund::classify(&line.category, &line.sub_category), line.nominal.max(0));
        }

        if breakdown.total() == 0 && data.nominal > 0 {
            breakdown.add(Fund::classify(&data.category, &data.sub_category), data.nominal);
        }
        breakdown
    }

    fn slot(&mut self, fund: Fund) -> &mut i64 {
        match fund {
            Fund::Zakat => &mut self.zakat,
            Fund::InfakTerikat => &mut self.infak_terikat,
            Fund::InfakBebas => &mut self.infak_bebas,
            Fund::Dskl => &mut self.dskl,
            Fund::Wakaf => &mut self.wakaf,
            Fund::Other => &mut self.other,
        }
    }

    pub fn add(&mut self, fund: Fund, amount: i64) {
        *self.slot(fund) += amount;
    }

    pub fn get(&self, fund: Fund) -> i64 {
        match fund {
            Fund::Zakat => self.zakat,
            Fund::InfakTerikat => self.infak_terikat,
            Fund::InfakBebas => self.infak_bebas,
            Fund::Dskl => self.dskl,
            Fund::Wakaf => self.wakaf,
            Fund::Other => self.other,
        }
    }

    pub fn total(&self) -> i64 {
        Fund::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "&#9745;"
    } else {
        "&#9744;"
    }
}

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    @page { size: A4; margin: 16mm; }
    body { font-family: system-ui, sans-serif; font-size: 13px; line-height: 1.5; color: #222;
           max-width: 210mm; margin: 0 auto; padding: 20px; }
    header { text-align: center; border-bottom: 2px solid #059669; padding-bottom: 8px; margin-bottom: 16px; }
    header h1 { font-size: 18px; color: #059669; letter-spacing: 1px; }
    header p { font-size: 11px; color: #555; }
    table { width: 100%; border-collapse: collapse; margin: 10px 0; }
    th, td { text-align: left; padding: 6px 10px; border: 1px solid #d1d5db; vertical-align: top; }
    th { background: #ecfdf5; width: 150px; font-weight: 600; }
    td.amount, th.amount { text-align: right; width: 160px; }
    tr.total td { font-weight: bold; background: #f0fdf4; }
    .funds span { display: inline-block; margin-right: 18px; }
    .declaration { margin: 12px 0; }
    .words { font-style: italic; margin: 8px 0 0; }
    .signatures { display: flex; justify-content: space-between; margin-top: 36px; }
    .signature { width: 45%; text-align: center; }
    .signature .space { height: 64px; }
    .signature .name { border-top: 1px solid #222; padding-top: 4px; font-weight: 600; }
    .footer { margin-top: 24px; font-size: 11px; color: #6b7280; text-align: center; }
"#;

/// Full HTML document.
pub fn render(data: &ReceiptData) -> String {
    let breakdown = Breakdown::from_receipt(data);
    let total = breakdown.total();
    let location = if data.event_location.trim().is_empty() {
        DEFAULT_LOCATION
    } else {
        data.event_location.as_str()
    };
    let event = if data.event_location.trim().is_empty() {
        escape_html(&data.event_name)
    } else {
        format!("{} - {}", escape_html(&data.event_name), escape_html(&data.event_location))
    };

    let funds: String = Fund::ALL
        .iter()
        .map(|f| format!("<span>{} {}</span>", checkbox(breakdown.get(*f) > 0), f.label()))
        .collect();

    let rows: String = Fund::ALL
        .iter()
        .map(|f| {
            let amount = breakdown.get(*f);
            format!(
                "<tr><td>{}</td><td class=\"amount\">{}</td></tr>\n",
                f.label(),
                if amount > 0 {
                    format!("Rp {}", format_rupiah(amount))
                } else {
                    "-".to_string()
                }
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Bukti Donasi - {receipt}</title>
<style>{style}</style>
</head>
<body>
<header>
  <h1>BUKTI PENERIMAAN DONASI</h1>
  <p>Yayasan {org} &middot; Jl. Soekarno Hatta No 97A, Tlogosari Kulon, Pedurungan, Semarang</p>
</header>
<table>
  <tr><th>No. Bukti</th><td>{receipt}</td></tr>
  <tr><th>Tanggal</th><td>{date}</td></tr>
  <tr><th>Nama Donatur</th><td>{name}</td></tr>
  <tr><th>No. HP</th><td>{phone}</td></tr>
  <tr><th>Email</th><td>{email}</td></tr>
  <tr><th>Alamat</th><td>{address}</td></tr>
  <tr><th>Pembayaran</th><td>{method}</td></tr>
  <tr><th>Event</th><td>{event}</td></tr>
</table>
<p class="funds"><strong>Jenis dana:</strong> {funds}</p>
<p class="declaration">{declared} Saya menyerahkan dana di atas kepada {org} untuk disalurkan sesuai peruntukannya.</p>
<table>
  <tr><th>Rincian</th><th class="amount">Jumlah</th></tr>
{rows}  <tr class="total"><td>Total</td><td class="amount">Rp {total}</td></tr>
</table>
<p class="words">Terbilang: {words}</p>
<div class="signatures">
  <div class="signature">
    <p>{location}, {date}</p>
    <p>Donatur</p>
    <div class="space"></div>
    <p class="name">{name}</p>
  </div>
  <div class="signature">
    <p>{location}, {date}</p>
    <p>Penerima {org}</p>
    <div class="space"></div>
    <p class="name">{cashier}</p>
  </div>
</div>
<p class="footer">Jazakumullahu khairan. Semoga Allah memberkahi harta yang tersisa dan menjadikannya pembersih.</p>
<script>window.onload = function () {{ window.print(); }};</script>
</body>
</html>
"#,
        receipt = escape_html(&data.receipt_number),
        style = STYLE,
        org = ORGANIZATION,
        date = escape_html(&data.date),
        name = escape_html(&data.donor_name),
        phone = escape_html(&data.phone),
        email = escape_html(&data.email),
        address = escape_html(&data.address),
        method = escape_html(&shared::PaymentMethod::label_for(&data.payment_method)),
        event = event,
        funds = funds,
        declared = checkbox(true),
        rows = rows,
        total = format_rupiah(total),
        words = escape_html(&data.words_for(total)),
        location = escape_html(location),
        cashier = escape_html(&data.cashier),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::tests::history_row;
    use crate::receipt::{normalize, ReceiptSource};
    use shared::{DonationLine, SubmittedTransaction};

    fn line(category: &str, sub: &str, nominal: i64) -> DonationLine {
        DonationLine {
            category: category.to_string(),
            sub_category: sub.to_string(),
            nominal,
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Fund::classify("Zakat", "Fitrah"), Fund::Zakat);
        assert_eq!(Fund::classify("infak", "Terikat"), Fund::InfakTerikat);
        assert_eq!(Fund::classify("Infak", ""), Fund::InfakBebas);
        assert_eq!(Fund::classify("DSKL", ""), Fund::Dskl);
        assert_eq!(Fund::classify("Campaign", "Wakaf Sumur"), Fund::Wakaf);
        assert_eq!(Fund::classify("Campaign", "Beasiswa"), Fund::Other);
    }

    #[test]
    fn test_breakdown_sums_lines() {
        let tx = SubmittedTransaction {
            lines: vec![
                line("Zakat", "Maal", 100_000),
                line("Infak", "Terikat", 25_000),
                line("Infak", "", 10_000),
            ],
            total_nominal: Some(135_000),
            ..Default::default()
        };
        let data = normalize(&ReceiptSource::Submitted(tx), None);
        let breakdown = Breakdown::from_receipt(&data);

        assert_eq!(breakdown.zakat, 100_000);
        assert_eq!(breakdown.infak_terikat, 25_000);
        assert_eq!(breakdown.infak_bebas, 10_000);
        assert_eq!(breakdown.total(), 135_000);
    }

    #[test]
    fn test_breakdown_falls_back_to_record_nominal() {
        let tx = SubmittedTransaction {
            lines: vec![line("DSKL", "", 0)],
            total_nominal: Some(80_000),
            ..Default::default()
        };
        let data = normalize(&ReceiptSource::Submitted(tx), None);
        let breakdown = Breakdown::from_receipt(&data);

        assert_eq!(breakdown.dskl, 80_000);
        assert_eq!(breakdown.total(), 80_000);
    }

    #[test]
    fn test_words_follow_printed_total_for_several_lines() {
        let tx = SubmittedTransaction {
            lines: vec![line("Zakat", "Maal", 30_000), line("Infak", "", 20_000)],
            ..Default::default()
        };
        let data = normalize(&ReceiptSource::Submitted(tx), None);
        let html = render(&data);

        assert!(html.contains("<td class=\"amount\">Rp 50.000</td>"));
        assert!(html.contains("Terbilang: lima puluh ribu rupiah"));
        assert!(!html.contains("tiga puluh ribu"));
    }

    #[test]
    fn test_render_contains_total_words_and_signatures() {
        let data = normalize(&ReceiptSource::History(history_row()), None);
        let html = render(&data);

        assert!(html.contains("Rp 50.000"));
        assert!(html.contains("Terbilang: lima puluh ribu rupiah"));
        assert!(html.contains("Masjid Agung, 2026-03-01"));
        assert!(html.contains("Penerima LAZIS Sultan Agung"));
        assert!(html.contains("&#9745; Infak Bebas"));
        assert!(html.contains("&#9744; Zakat"));
    }
}
