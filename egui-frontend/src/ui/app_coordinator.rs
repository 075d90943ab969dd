//! # App Coordinator Module
//!
//! Implements `eframe::App` for `PetShopApp`: picks the renderer for the
//! current screen each frame and draws the feedback banner.
//!
//! ## Application Flow:
//! 1. Customer screens get a sidebar plus a central panel
//! 2. Every other screen is a single central panel
//! 3. Open dialogs are drawn on top by the screen that owns them

use eframe::egui;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::colors;
use crate::ui::state::Screen;

impl eframe::App for PetShopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = self.nav.screen;
        if screen == Screen::CustomerPanel {
            self.render_customer_panel(ctx);
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            match screen {
                Screen::Landing => self.render_landing(ui),
                Screen::MainMenu => self.render_main_menu(ui),
                Screen::Login => self.render_login(ui),
                Screen::Register => self.render_register(ui),
                Screen::AdminPanel => self.render_admin_panel(ctx, ui),
                Screen::CustomerPanel => {}
            }
        });
    }
}

impl PetShopApp {
    /// Banner with the current success or error message and a dismiss button
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let (text, color) = match (&self.ui.error_message, &self.ui.success_message) {
            (Some(error), _) => (format!("⚠ {}", error), colors::ERROR),
            (None, Some(success)) => (format!("✔ {}", success), colors::SUCCESS),
            (None, None) => return,
        };

        let mut dismiss = false;
        egui::Frame::none()
            .fill(color.linear_multiply(0.12))
            .stroke(egui::Stroke::new(1.0, color))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(text).color(color).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            dismiss = true;
                        }
                    });
                });
            });
        ui.add_space(6.0);

        if dismiss {
            self.ui.clear_messages();
        }
    }
}
