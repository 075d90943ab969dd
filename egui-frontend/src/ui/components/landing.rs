//! # Landing and Main Menu
//!
//! The welcome screen shown at startup and the menu offering login or
//! registration.

use eframe::egui;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{colors, heading, primary_button};

impl PetShopApp {
    pub fn render_landing(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.label(egui::RichText::new("🐾").size(72.0));
            ui.label(heading("Welcome to the Pet Shop"));
            ui.label(
                egui::RichText::new("Find your new best friend")
                    .size(18.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(30.0);
            if ui.add_sized([180.0, 44.0], primary_button("Enter")).clicked() {
                self.nav.enter();
            }
        });
    }

    pub fn render_main_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.label(heading("🐶 Pet Shop"));
            ui.add_space(30.0);

            if ui.add_sized([220.0, 44.0], primary_button("Login")).clicked() {
                self.auth.clear();
                self.nav.open_login();
            }
            ui.add_space(10.0);
            if ui.add_sized([220.0, 44.0], egui::Button::new("Register")).clicked() {
                self.auth.clear();
                self.nav.open_register();
            }
        });
    }
}
