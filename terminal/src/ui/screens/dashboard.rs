//! # Dashboard Screen ("Grafik")
//!
//! Server-computed aggregates: totals, category shares, payment methods,
//! events and progress toward the fundraising target.

use shared::{CategoryType, DashboardSummary, PaymentMethod};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::charts::{self, Slice};
use crate::ui::widgets::{forms, tables};

const PIE_DIAMETER: f32 = 180.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let slot = &state.store.pos.dashboard;

    ui.horizontal(|ui| {
        forms::render_form_heading(ui, "Grafik Donasi", &theme);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!slot.loading, egui::Button::new("Muat ulang")).clicked() {
                app.refresh_current_screen();
            }
        });
    });

    if slot.loading {
        forms::render_loading(ui, "Memuat ringkasan...", &theme);
    }
    if let Some(error) = &slot.error {
        forms::render_error(ui, error, &theme);
    }

    let Some(summary) = &slot.data else {
        if !slot.loading && slot.error.is_none() {
            tables::render_empty_state(ui, "Belum ada data", None, &theme);
        }
        return;
    };

    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        render_totals(ui, summary, &theme);
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            card(&mut columns[0], "Nominal per Kategori", &theme, |ui| {
                charts::render_pie_chart(ui, &nominal_slices(summary), PIE_DIAMETER, &theme);
                ui.add_space(6.0);
                for row in &summary.category_nominal_summary {
                    ui.label(format!(
                        "{}: {} ({:.1}%)",
                        CategoryType::label_for(&row.category),
                        forms::rupiah_label(row.total_nominal),
                        summary.nominal_share(row.total_nominal)
                    ));
                }
            });
            card(&mut columns[1], "Metode Pembayaran", &theme, |ui| {
                charts::render_pie_chart(ui, &payment_slices(summary), PIE_DIAMETER, &theme);
            });
        });

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            card(&mut columns[0], "Jumlah Transaksi per Kategori", &theme, |ui| {
                charts::render_bar_chart(ui, "dashboard_category_count", &count_slices(summary), 200.0);
            });
            card(&mut columns[1], "Donasi per Event", &theme, |ui| {
                if summary.event_summary.is_empty() {
                    ui.colored_label(theme.dim, "Belum ada data");
                }
                egui::Grid::new("dashboard_events")
                    .num_columns(2)
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        for event in &summary.event_summary {
                            ui.label(&event.event_name);
                            ui.label(forms::rupiah_label(event.total_nominal));
                            ui.end_row();
                        }
                    });
            });
        });
    });
}

fn render_totals(ui: &mut egui::Ui, summary: &DashboardSummary, theme: &Theme) {
    ui.columns(3, |columns| {
        card(&mut columns[0], "Total Donasi", theme, |ui| {
            ui.label(egui::RichText::new(forms::rupiah_label(summary.total_nominal())).size(20.0).strong());
        });
        card(&mut columns[1], "Total Transaksi", theme, |ui| {
            ui.label(egui::RichText::new(summary.total_count().to_string()).size(20.0).strong());
        });
        card(&mut columns[2], "Target", theme, |ui| match &summary.target_summary {
            Some(target) => {
                ui.label(format!(
                    "{} / {}",
                    forms::rupiah_label(target.current_total),
                    forms::rupiah_label(target.target)
                ));
                charts::render_target_progress(ui, target.bar_fraction(), target.progress_percentage(), theme);
            }
            None => {
                ui.colored_label(theme.dim, "Target belum ditetapkan");
            }
        });
    });
}

fn card(ui: &mut egui::Ui, title: &str, theme: &Theme, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .fill(theme.colors.panel)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().color(theme.colors.emerald_dark));
            ui.add_space(6.0);
            body(ui);
        });
}

pub fn nominal_slices(summary: &DashboardSummary) -> Vec<Slice> {
    summary
        .category_nominal_summary
        .iter()
        .map(|row| Slice::new(CategoryType::label_for(&row.category), row.total_nominal as f64))
        .collect()
}

pub fn payment_slices(summary: &DashboardSummary) -> Vec<Slice> {
    summary
        .payment_method_summary
        .iter()
        .map(|row| Slice::new(PaymentMethod::label_for(&row.method), row.total_count as f64))
        .collect()
}

pub fn count_slices(summary: &DashboardSummary) -> Vec<Slice> {
    summary
        .category_count_summary
        .iter()
        .map(|row| Slice::new(CategoryType::label_for(&row.category), row.total_count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CategoryCount, CategoryNominal, PaymentMethodCount};

    fn summary() -> DashboardSummary {
        DashboardSummary {
            category_nominal_summary: vec![
                CategoryNominal {
                    category: "zakat".to_string(),
                    total_nominal: 750_000,
                },
                CategoryNominal {
                    category: "infak".to_string(),
                    total_nominal: 250_000,
                },
            ],
            category_count_summary: vec![CategoryCount {
                category: "dskl".to_string(),
                total_count: 4,
            }],
            payment_method_summary: vec![PaymentMethodCount {
                method: "qris".to_string(),
                total_count: 3,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_slices_use_display_labels() {
        let summary = summary();
        let nominal = nominal_slices(&summary);
        assert_eq!(nominal[0], Slice::new("Zakat", 750_000.0));
        assert_eq!(nominal[1].label, "Infak");

        assert_eq!(payment_slices(&summary)[0], Slice::new("QRIS", 3.0));
        assert_eq!(count_slices(&summary)[0], Slice::new("DSKL", 4.0));
    }

    #[test]
    fn test_category_share() {
        let summary = summary();
        assert_eq!(format!("{:.1}", summary.nominal_share(750_000)), "75.0");
    }
}
