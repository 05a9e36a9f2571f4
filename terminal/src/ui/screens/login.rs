//! # Login Screen
//!
//! Agent sign-in with email or phone number.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FIELD_WIDTH: f32 = 300.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let loading = state.store.auth.loading;

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        egui::Frame::group(ui.style())
            .fill(theme.colors.panel)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(FIELD_WIDTH + 20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("LAZIS Sultan Agung")
                            .size(24.0)
                            .strong()
                            .color(theme.colors.emerald_dark),
                    );
                    forms::render_hint(ui, "Point of Sale Donasi", &theme);
                    ui.add_space(16.0);
                });

                let mut identifier = state.login.identifier.clone();
                let identifier_response = forms::render_text_input(
                    ui,
                    "Email / No. HP",
                    &mut identifier,
                    "agen@lazis.id",
                    false,
                    FIELD_WIDTH,
                );
                if identifier_response.changed() {
                    app.state.write().login.identifier = identifier;
                }
                ui.add_space(8.0);

                let mut password = state.login.password.clone();
                let password_response =
                    forms::render_text_input(ui, "Password", &mut password, "••••••", true, FIELD_WIDTH);
                if password_response.changed() {
                    app.state.write().login.password = password;
                }
                let submit = password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(12.0);

                if let Some(error) = state.login.error.as_deref().or(state.store.auth.error.as_deref()) {
                    forms::render_error(ui, error, &theme);
                }

                ui.horizontal(|ui| {
                    let label = if loading { "Memproses..." } else { "Masuk" };
                    if forms::primary_button(ui, label, !loading, &theme).clicked() || (submit && !loading) {
                        app.handle_login_click();
                    }
                    if loading {
                        ui.spinner();
                    }
                });
            });
    });
}
