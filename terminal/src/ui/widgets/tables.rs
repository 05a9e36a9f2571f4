//! # Table Components
//!
//! Transaction tables shared by the pending and history screens, built on
//! `egui_extras::TableBuilder`.

use egui_extras::{Column, TableBuilder};
use shared::{format_rupiah, HistoryRecord, PaymentMethod};

use crate::ui::theme::Theme;

const ROW_HEIGHT: f32 = 30.0;

/// Render a transaction table. `actions` draws the last column of each row.
pub fn render_transaction_table(
    ui: &mut egui::Ui,
    id: &str,
    rows: &[HistoryRecord],
    theme: &Theme,
    mut actions: impl FnMut(&mut egui::Ui, &HistoryRecord),
) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::initial(160.0).clip(true))
            .column(Column::initial(160.0).clip(true))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder().at_least(200.0))
            .header(24.0, |mut header| {
                for title in ["No. Bukti", "Tanggal", "Donatur", "Kategori", "Nominal", "Metode", "Aksi"] {
                    header.col(|ui| {
                        ui.colored_label(theme.colors.emerald_dark, egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let record = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&record.receipt_number);
                    });
                    row.col(|ui| {
                        ui.label(&record.date);
                    });
                    row.col(|ui| {
                        ui.label(&record.donor_name).on_hover_text(&record.phone);
                    });
                    row.col(|ui| {
                        ui.label(record.category_label());
                    });
                    row.col(|ui| {
                        ui.label(format_rupiah(record.nominal));
                    });
                    row.col(|ui| {
                        ui.label(PaymentMethod::label_for(&record.payment_method));
                    });
                    row.col(|ui| actions(ui, record));
                });
            });
    });
}

/// Render an empty state message
pub fn render_empty_state(ui: &mut egui::Ui, primary_text: &str, secondary_text: Option<&str>, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(6.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// "N transaksi · Halaman x dari y"
pub fn pagination_label(total_elements: u64, page: u32, total_pages: u32) -> String {
    format!(
        "{} transaksi · Halaman {} dari {}",
        total_elements,
        page + 1,
        total_pages.max(1)
    )
}

/// Previous/next controls. Returns the page to move to, if any.
pub fn render_pagination(
    ui: &mut egui::Ui,
    total_elements: u64,
    page: u32,
    total_pages: u32,
    theme: &Theme,
) -> Option<u32> {
    let mut target = None;
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, pagination_label(total_elements, page, total_pages));
        ui.add_space(12.0);
        if ui.add_enabled(page > 0, egui::Button::new("‹ Sebelumnya")).clicked() {
            target = Some(page - 1);
        }
        if ui
            .add_enabled(page + 1 < total_pages, egui::Button::new("Berikutnya ›"))
            .clicked()
        {
            target = Some(page + 1);
        }
    });
    target
}
