//! # Purchases Page
//!
//! Animals the customer owns, read from the database, followed by the
//! receipts of purchases made during this session.

use eframe::egui;
use shared::format_price;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{card_frame, colors, heading};

impl PetShopApp {
    pub fn render_purchases_page(&mut self, ui: &mut egui::Ui) {
        ui.label(heading("💰 My Purchases"));
        ui.add_space(6.0);

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                if self.customer.owned.is_empty() {
                    ui.label(egui::RichText::new("You haven't bought any animals yet.").color(colors::TEXT_SECONDARY));
                    return;
                }
                egui::Grid::new("owned_animals_grid")
                    .num_columns(4)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for animal in &self.customer.owned {
                            ui.label(format!("{} {}", animal.species_icon(), animal.name));
                            ui.label(&animal.species);
                            ui.label(format!("{} yrs", animal.age));
                            ui.label(format_price(animal.price));
                            ui.end_row();
                        }
                    });
            });

            if self.customer.session_receipts.is_empty() {
                return;
            }

            ui.add_space(12.0);
            ui.label(egui::RichText::new("This session").strong().color(colors::TEXT_HEADING));
            card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                for receipt in self.customer.session_receipts.iter().rev() {
                    ui.label(format!(
                        "{}  {} for {}",
                        receipt.timestamp.format("%Y-%m-%d %H:%M"),
                        receipt.animal.name,
                        format_price(receipt.total())
                    ));
                }
            });
        });
    }

    /// Confirmation window shown after a successful purchase
    pub fn render_purchase_confirmation(&mut self, ctx: &egui::Context) {
        let Some(confirmation) = self.customer.confirmation.as_ref() else {
            return;
        };

        let mut close = false;
        egui::Window::new("🎉 Purchase Successful")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&confirmation.success_message).strong());
                ui.add_space(6.0);
                for receipt in &confirmation.receipts {
                    ui.label(format!("{} {}: {}", receipt.animal.species_icon(), receipt.animal.name, format_price(receipt.total())));
                }
                ui.separator();
                ui.label(egui::RichText::new(format!("Total: {}", format_price(confirmation.total()))).strong());
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        if close {
            self.customer.confirmation = None;
        }
    }
}
