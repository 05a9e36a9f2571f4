//! # GUI Rendering
//!
//! Draws one frame from a snapshot of [`AppState`]: navigation bar on top,
//! status bar at the bottom and the current screen in the middle.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppState, Screen};
use theme::Theme;

const SHORTCUT_KEYS: [egui::Key; 4] = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4];

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Snapshot the state; rendering happens without holding the lock
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    if state.is_authenticated() {
        handle_shortcuts(ctx, app);
    }

    egui::TopBottomPanel::top("nav_bar")
        .show_animated(ctx, state.is_authenticated(), |ui| {
            widgets::nav_bar::render_nav_bar(ui, &state, app);
        });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        render_status_bar(ui, &state, app);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let screen = state.current_screen;
        if screen.requires_auth() && !state.is_authenticated() {
            app.handle_screen_change(Screen::Login);
            screens::login::render(ui, &state, app);
            return;
        }

        match screen {
            Screen::Login => screens::login::render(ui, &state, app),
            Screen::Transaction => screens::entry::render(ui, &state, app),
            Screen::Pending => screens::pending::render(ui, &state, app),
            Screen::History => screens::history::render(ui, &state, app),
            Screen::Dashboard => screens::dashboard::render(ui, &state, app),
        }
    });
}

/// Alt+1..Alt+4 switch screens
fn handle_shortcuts(ctx: &egui::Context, app: &mut App) {
    let pressed = ctx.input(|i| {
        if !i.modifiers.alt {
            return None;
        }
        SHORTCUT_KEYS.iter().position(|key| i.key_pressed(*key))
    });
    if let Some(index) = pressed {
        app.handle_shortcut(index + 1);
    }
}

fn render_status_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        match &state.notice {
            Some(notice) => {
                ui.colored_label(theme.error, notice);
                if ui.small_button("✕").clicked() {
                    app.dismiss_notice();
                }
            }
            None if state.is_authenticated() => {
                ui.colored_label(theme.success, "Terhubung");
            }
            None => {
                ui.colored_label(theme.dim, "Belum masuk");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.is_authenticated() {
                ui.colored_label(theme.dim, "Alt+1..4: Pindah menu");
            }
        });
    });
}
