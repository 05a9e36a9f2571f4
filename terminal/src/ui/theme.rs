//! # GUI Theme
//!
//! Light cashier theme: white panels, emerald accents, large touch targets.

use egui::{Color32, Context, Stroke, Visuals};

/// Color palette
#[derive(Debug, Clone)]
pub struct PosColors {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    /// Emerald (primary accent)
    pub emerald: Color32,
    pub emerald_dark: Color32,
    pub emerald_light: Color32,
    pub border: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    pub amber_warning: Color32,
    pub blue_info: Color32,
    pub gray_secondary: Color32,
}

impl Default for PosColors {
    fn default() -> Self {
        PosColors {
            background: Color32::from_rgb(243, 246, 244), // #F3F6F4
            panel: Color32::WHITE,
            text: Color32::from_rgb(31, 41, 55),          // #1F2937
            emerald: Color32::from_rgb(5, 150, 105),      // #059669
            emerald_dark: Color32::from_rgb(4, 120, 87),  // #047857
            emerald_light: Color32::from_rgb(209, 250, 229), // #D1FAE5
            border: Color32::from_rgb(209, 213, 219),     // #D1D5DB
            green_success: Color32::from_rgb(22, 163, 74),
            red_error: Color32::from_rgb(220, 38, 38),
            amber_warning: Color32::from_rgb(217, 119, 6),
            blue_info: Color32::from_rgb(37, 99, 235),
            gray_secondary: Color32::from_rgb(107, 114, 128),
        }
    }
}

/// Semantic colors used by screens and widgets
pub struct Theme {
    pub colors: PosColors,
    pub normal: Color32,
    /// Primary buttons, active tab
    pub selected: Color32,
    pub border: Color32,
    /// Secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = PosColors::default();
        Theme {
            normal: colors.text,
            selected: colors.emerald,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.amber_warning,
            info: colors.blue_info,
            colors,
        }
    }
}

/// Slice colors for charts, cycled by index
pub const CHART_COLORS: [Color32; 8] = [
    Color32::from_rgb(5, 150, 105),
    Color32::from_rgb(37, 99, 235),
    Color32::from_rgb(217, 119, 6),
    Color32::from_rgb(220, 38, 38),
    Color32::from_rgb(124, 58, 237),
    Color32::from_rgb(8, 145, 178),
    Color32::from_rgb(219, 39, 119),
    Color32::from_rgb(101, 163, 13),
];

pub fn chart_color(index: usize) -> Color32 {
    CHART_COLORS[index % CHART_COLORS.len()]
}

impl Theme {
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = Color32::from_rgb(248, 250, 249);
        visuals.extreme_bg_color = colors.panel;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.inactive.weak_bg_fill = colors.panel;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.weak_bg_fill = colors.emerald_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.emerald);

        visuals.widgets.active.weak_bg_fill = colors.emerald_light;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.emerald_dark);

        visuals.selection.bg_fill = colors.emerald_light;
        visuals.selection.stroke = Stroke::new(1.5, colors.emerald_dark);

        visuals.hyperlink_color = colors.blue_info;
        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(ctx: &Context) {
        let visuals = Theme::default().visuals();

        ctx.set_theme(egui::Theme::Light);
        ctx.style_mut_of(egui::Theme::Light, |style| {
            style.visuals = visuals;
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(12.0, 6.0);
            style.spacing.interact_size = egui::vec2(40.0, 28.0);
        });

        tracing::debug!("Applied light theme");
    }
}
