//! # History Screen
//!
//! Validated transactions with filters, pagination and reprinting.

use shared::{CategoryType, PaymentMethod};

use crate::app::{App, AppState, HistoryFilters};
use crate::receipt::ReceiptLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let history = &state.store.pos.history;

    forms::render_form_heading(ui, "History Transaksi", &theme);

    if let Some(filters) = render_filters(ui, state, &theme) {
        app.handle_history_filters_change(filters);
    }
    ui.add_space(8.0);

    if history.loading {
        forms::render_loading(ui, "Memuat history...", &theme);
    }
    if let Some(error) = &history.error {
        forms::render_error(ui, error, &theme);
    }

    let page = &history.data;
    if page.content.is_empty() {
        if !history.loading && history.error.is_none() {
            tables::render_empty_state(ui, "Tidak ada transaksi", Some("Ubah filter untuk melihat data lain."), &theme);
        }
    } else {
        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 40.0)
            .show(ui, |ui| {
                tables::render_transaction_table(ui, "history_table", &page.content, &theme, |ui, record| {
                    for layout in [ReceiptLayout::Thermal, ReceiptLayout::Formal] {
                        if ui.small_button(layout.label()).clicked() {
                            app.handle_print_record(record.clone(), layout);
                        }
                    }
                });
            });
    }

    ui.separator();
    if let Some(target) = tables::render_pagination(
        ui,
        page.total_elements,
        state.history_filters.page,
        page.total_pages,
        &theme,
    ) {
        app.handle_history_page_change(target);
    }
}

/// Filter bar. Returns the edited filters when anything changed.
fn render_filters(ui: &mut egui::Ui, state: &AppState, theme: &Theme) -> Option<HistoryFilters> {
    let current = &state.history_filters;
    let mut filters = current.clone();

    // Typed search text lives in egui memory until it is applied
    let search_id = ui.id().with("history_search");
    let mut search = ui
        .data_mut(|d| d.get_temp::<String>(search_id))
        .unwrap_or_else(|| current.search.clone());

    ui.horizontal_wrapped(|ui| {
        ui.label("Dari");
        ui.add(egui_extras::DatePickerButton::new(&mut filters.start_date).id_salt("history_start"));
        ui.label("Sampai");
        ui.add(egui_extras::DatePickerButton::new(&mut filters.end_date).id_salt("history_end"));

        egui::ComboBox::from_id_salt("history_category")
            .selected_text(filters.category.map_or("Semua kategori", |c| c.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.category, None, "Semua kategori");
                for category in CategoryType::all() {
                    ui.selectable_value(&mut filters.category, Some(*category), category.label());
                }
            });

        let event_label = filters
            .event_id
            .as_deref()
            .and_then(|id| state.store.pos.events.data.iter().find(|e| e.id == id))
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "Semua event".to_string());
        egui::ComboBox::from_id_salt("history_event")
            .selected_text(event_label)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.event_id, None, "Semua event");
                for event in &state.store.pos.events.data {
                    ui.selectable_value(&mut filters.event_id, Some(event.id.clone()), &event.name);
                }
            });

        egui::ComboBox::from_id_salt("history_method")
            .selected_text(filters.payment_method.map_or("Semua metode", |m| m.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.payment_method, None, "Semua metode");
                for method in PaymentMethod::all() {
                    ui.selectable_value(&mut filters.payment_method, Some(*method), method.label());
                }
            });

        let response = ui.add_sized(
            [180.0, 26.0],
            egui::TextEdit::singleline(&mut search).hint_text("Nama / No. HP / No. Bukti"),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Cari").clicked() || submitted {
            filters.search = search.trim().to_string();
        }
    });

    ui.data_mut(|d| d.insert_temp(search_id, search));

    if filters.end_date < filters.start_date {
        forms::render_error(ui, "Tanggal akhir sebelum tanggal awal", theme);
        return None;
    }

    (filters != *current).then_some(filters)
}
