//! # Dashboard Charts
//!
//! Pie charts are painted directly; bar charts use `egui_plot`.

use std::f32::consts::TAU;

use egui_plot::{Bar, BarChart, Plot};

use crate::ui::theme::{chart_color, Theme};

/// One labelled value
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Start and sweep angle (radians) of every slice. Non-positive values get
/// no sweep; an all-zero input yields no visible slices.
pub fn pie_angles(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -TAU / 4.0;
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 && *v > 0.0 {
                (*v / total) as f32 * TAU
            } else {
                0.0
            };
            let angles = (start, sweep);
            start += sweep;
            angles
        })
        .collect()
}

/// Share of `value` in `total` as "12.5%"
pub fn share_label(value: f64, total: f64) -> String {
    let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
    format!("{:.1}%", share)
}

/// Pie chart with a legend to its right
pub fn render_pie_chart(ui: &mut egui::Ui, slices: &[Slice], diameter: f32, theme: &Theme) {
    if slices.iter().all(|s| s.value <= 0.0) {
        ui.colored_label(theme.dim, "Belum ada data");
        return;
    }

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let angles = pie_angles(&values);

    ui.horizontal(|ui| {
        let (response, painter) = ui.allocate_painter(egui::vec2(diameter, diameter), egui::Sense::hover());
        let center = response.rect.center();
        let radius = diameter / 2.0 - 2.0;

        for (index, (start, sweep)) in angles.iter().enumerate() {
            if *sweep <= 0.0 {
                continue;
            }
            let steps = ((sweep / TAU) * 64.0).ceil().max(1.0) as usize;
            let color = chart_color(index);
            for step in 0..steps {
                let a0 = start + sweep * step as f32 / steps as f32;
                let a1 = start + sweep * (step + 1) as f32 / steps as f32;
                let p0 = center + radius * egui::vec2(a0.cos(), a0.sin());
                let p1 = center + radius * egui::vec2(a1.cos(), a1.sin());
                painter.add(egui::Shape::convex_polygon(
                    vec![center, p0, p1],
                    color,
                    egui::Stroke::NONE,
                ));
            }
        }

        ui.add_space(12.0);
        ui.vertical(|ui| {
            for (index, slice) in slices.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, chart_color(index));
                    ui.label(format!("{} ({})", slice.label, share_label(slice.value, total)));
                });
            }
        });
    });
}

/// Vertical bar chart, one bar per slice
pub fn render_bar_chart(ui: &mut egui::Ui, id: &str, slices: &[Slice], height: f32) {
    let bars: Vec<Bar> = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            Bar::new(index as f64, slice.value)
                .name(&slice.label)
                .fill(chart_color(index))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = slices.iter().map(|s| s.label.clone()).collect();

    Plot::new(id)
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(id, bars));
        });
}

/// Progress bar toward a target, clamped to 100%
pub fn render_target_progress(ui: &mut egui::Ui, fraction: f32, percentage: f64, theme: &Theme) {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(theme.selected)
            .text(format!("{:.1}%", percentage)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_angles_cover_full_circle() {
        let angles = pie_angles(&[1.0, 3.0]);
        assert!((angles[0].1 - TAU / 4.0).abs() < 1e-5);
        assert!((angles[1].1 - TAU * 0.75).abs() < 1e-5);
        assert!((angles[1].0 - (angles[0].0 + angles[0].1)).abs() < 1e-5);
    }

    #[test]
    fn test_pie_angles_skip_empty_values() {
        let angles = pie_angles(&[0.0, 5.0, -1.0]);
        assert_eq!(angles[0].1, 0.0);
        assert!((angles[1].1 - TAU).abs() < 1e-5);
        assert_eq!(angles[2].1, 0.0);

        assert!(pie_angles(&[0.0, 0.0]).iter().all(|(_, sweep)| *sweep == 0.0));
    }

    #[test]
    fn test_share_label() {
        assert_eq!(share_label(7_500_000.0, 15_000_000.0), "50.0%");
        assert_eq!(share_label(1.0, 3.0), "33.3%");
        assert_eq!(share_label(5.0, 0.0), "0.0%");
    }
}
