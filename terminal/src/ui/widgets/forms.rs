//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

/// Labelled single-line text input. Returns the input's response.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    width: f32,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [width, 30.0],
        egui::TextEdit::singleline(value).password(password).hint_text(hint),
    )
}

/// Text input bound to one field of a snapshot. Calls `on_change` with the
/// new value only when the user edited it.
pub fn bound_text_input(
    ui: &mut egui::Ui,
    label: &str,
    current: &str,
    hint: &str,
    width: f32,
    on_change: impl FnOnce(String),
) -> egui::Response {
    let mut value = current.to_string();
    let response = render_text_input(ui, label, &mut value, hint, false, width);
    if response.changed() {
        on_change(value);
    }
    response
}

/// Filled primary button
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool, theme: &Theme) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).size(15.0).strong().color(egui::Color32::WHITE))
        .fill(theme.selected)
        .min_size(egui::vec2(120.0, 34.0));
    ui.add_enabled(enabled, button)
}

/// Outlined secondary button
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Button::new(egui::RichText::new(text).size(15.0)).min_size(egui::vec2(100.0, 34.0)))
}

pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).size(22.0).strong().color(theme.colors.emerald_dark));
    ui.add_space(12.0);
}

pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(6.0);
}

pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// Spinner with a caption
pub fn render_loading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(theme.dim, text);
    });
}

/// "Rp 1.500.000"
pub fn rupiah_label(amount: i64) -> String {
    format!("Rp {}", shared::format_rupiah(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_label() {
        assert_eq!(rupiah_label(1_500_000), "Rp 1.500.000");
        assert_eq!(rupiah_label(0), "Rp 0");
    }
}
