//! # Pending Screen
//!
//! Transfer and QRIS transactions waiting for staff validation.

use crate::app::{App, AppState};
use crate::receipt::ReceiptLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let pos = &state.store.pos;

    ui.horizontal(|ui| {
        forms::render_form_heading(ui, "Transaksi Pending", &theme);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!pos.pending.loading, egui::Button::new("Muat ulang")).clicked() {
                app.refresh_current_screen();
            }
        });
    });

    if pos.pending.loading {
        forms::render_loading(ui, "Memuat transaksi pending...", &theme);
    }
    if let Some(error) = &pos.pending.error {
        forms::render_error(ui, error, &theme);
    }

    if pos.pending.data.is_empty() {
        if !pos.pending.loading && pos.pending.error.is_none() {
            tables::render_empty_state(ui, "Tidak ada transaksi pending", None, &theme);
        }
        return;
    }

    tables::render_transaction_table(ui, "pending_table", &pos.pending.data, &theme, |ui, record| {
        let validating = pos.validating.as_deref() == Some(record.receipt_number.as_str());
        let label = if validating { "Memvalidasi..." } else { "Validasi" };
        if ui.add_enabled(!validating, egui::Button::new(label)).clicked() {
            app.handle_validate_click(record.receipt_number.clone());
        }
        if ui.small_button(ReceiptLayout::Thermal.label()).clicked() {
            app.handle_print_record(record.clone(), ReceiptLayout::Thermal);
        }

        if let Some(error) = pos
            .validate_error
            .as_ref()
            .filter(|e| e.receipt_number == record.receipt_number)
        {
            ui.colored_label(theme.error, &error.error);
        }
    });
}
