//! # Cart Page
//!
//! Cart lines with a checkbox each, the running total of selected lines,
//! "Remove Unchecked" and "Buy Selected".

use eframe::egui;
use shared::format_price;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{card_frame, colors, heading, primary_button};

impl PetShopApp {
    pub fn render_cart_page(&mut self, ui: &mut egui::Ui) {
        ui.label(heading("💳 Cart"));
        ui.add_space(6.0);

        if self.customer.cart.is_empty() {
            ui.label(egui::RichText::new("Your cart is empty.").color(colors::TEXT_SECONDARY));
            return;
        }

        let mut toggled = Vec::new();
        card_frame().show(ui, |ui| {
            egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                for line in self.customer.cart.lines() {
                    ui.horizontal(|ui| {
                        let mut selected = line.selected;
                        if ui.checkbox(&mut selected, "").changed() {
                            toggled.push(line.animal.id);
                        }
                        ui.label(format!("{} {}", line.animal.species_icon(), line.animal.name));
                        ui.label(egui::RichText::new(&line.animal.species).color(colors::TEXT_SECONDARY));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format_price(line.animal.price));
                        });
                    });
                }
            });
        });
        for id in toggled {
            self.customer.cart.toggle(id);
        }

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Total: {}", self.customer.cart.formatted_total()))
                .size(20.0)
                .strong(),
        );

        ui.horizontal(|ui| {
            if ui.button("🗑 Remove Unchecked").clicked() {
                self.remove_unchecked_from_cart();
            }
            let can_buy = self.customer.cart.has_selection();
            if ui.add_enabled(can_buy, primary_button("Buy Selected")).clicked() {
                self.checkout_cart();
            }
        });
    }
}
