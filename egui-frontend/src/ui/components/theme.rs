//! # Theme Configuration
//!
//! Colors and global style for the pet shop app. Screens use these
//! constants instead of hard-coding colors.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::colors;
//!
//! let color = colors::ACCENT;
//! ```

use eframe::egui::{self, Color32};

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    pub interactive: InteractiveColors,
    pub layout: LayoutColors,
    pub typography: TypographyColors,
    pub status: StatusColors,
}

/// Colors for buttons and selectable elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub accent: Color32,
    pub accent_hover: Color32,
    pub inactive_background: Color32,
    pub danger: Color32,
}

/// Backgrounds and cards
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    pub sidebar: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub white: Color32,
}

/// Animal status chips and feedback messages
#[derive(Debug, Clone)]
pub struct StatusColors {
    pub available: Color32,
    pub bought: Color32,
    pub success: Color32,
    pub error: Color32,
}

/// The warm "pet shop" theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(230, 126, 34),
        accent_hover: Color32::from_rgb(243, 156, 18),
        inactive_background: Color32::from_rgb(250, 246, 240),
        danger: Color32::from_rgb(192, 57, 43),
    },
    layout: LayoutColors {
        background: Color32::from_rgb(253, 242, 227),
        sidebar: Color32::from_rgb(110, 76, 52),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(225, 210, 190),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(110, 110, 110),
        heading: Color32::from_rgb(110, 76, 52),
        white: Color32::WHITE,
    },
    status: StatusColors {
        available: Color32::from_rgb(39, 174, 96),
        bought: Color32::from_rgb(127, 140, 141),
        success: Color32::from_rgb(34, 139, 34),
        error: Color32::from_rgb(220, 50, 50),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACCENT: Color32 = CURRENT_THEME.interactive.accent;
    pub const DANGER: Color32 = CURRENT_THEME.interactive.danger;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const SIDEBAR: Color32 = CURRENT_THEME.layout.sidebar;

    pub const AVAILABLE: Color32 = CURRENT_THEME.status.available;
    pub const BOUGHT: Color32 = CURRENT_THEME.status.bought;
    pub const SUCCESS: Color32 = CURRENT_THEME.status.success;
    pub const ERROR: Color32 = CURRENT_THEME.status.error;
}

/// Set up the global egui style: larger text, rounded widgets, warm panels
pub fn setup_pet_shop_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.background;
        style.visuals.window_fill = CURRENT_THEME.layout.card_background;
        // egui 0.28 draws text edits on extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.inactive_background;
        style.visuals.selection.bg_fill = CURRENT_THEME.interactive.accent_hover;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// White card frame used by lists and dialogs
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0))
}

/// Accent-colored button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_WHITE).strong())
        .fill(CURRENT_THEME.interactive.accent)
}

/// Heading in the theme's heading color
pub fn heading(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(26.0).strong().color(colors::TEXT_HEADING)
}
