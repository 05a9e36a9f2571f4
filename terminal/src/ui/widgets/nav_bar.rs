//! # Navigation Bar
//!
//! Screen tabs with their Alt shortcuts, the signed-in agent and logout.
//! Only visible when the user is authenticated.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    if !state.is_authenticated() {
        return;
    }

    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(40.0);
        ui.label(
            egui::RichText::new("LAZIS Sultan Agung")
                .size(18.0)
                .strong()
                .color(theme.colors.emerald_dark),
        );
        ui.add_space(16.0);

        for screen in Screen::all() {
            let selected = state.current_screen == *screen;
            let text = egui::RichText::new(screen.title()).size(15.0);
            let text = if selected { text.strong().color(theme.selected) } else { text };
            let mut response = ui.selectable_label(selected, text);
            if let Some(shortcut) = screen.shortcut() {
                response = response.on_hover_text(shortcut);
            }
            if response.clicked() && !selected {
                app.handle_screen_change(*screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Keluar").clicked() {
                app.handle_logout();
            }
            ui.add_space(8.0);

            match &state.store.auth.user {
                Some(user) => {
                    ui.colored_label(theme.normal, user.cashier_name());
                }
                None if state.store.auth.loading => {
                    ui.spinner();
                }
                None => {}
            }
        });
    });
}
