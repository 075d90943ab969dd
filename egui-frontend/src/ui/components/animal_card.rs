//! # Animal Card
//!
//! Card shown for each animal on the browse page.

use eframe::egui;
use shared::{format_price, Animal};

use crate::ui::components::theme::{card_frame, colors};

const CARD_WIDTH: f32 = 200.0;

/// What the user clicked on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClick {
    Details,
    AddToCart,
}

pub fn render_animal_card(ui: &mut egui::Ui, animal: &Animal, in_cart: bool) -> Option<CardClick> {
    let mut click = None;

    card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(animal.species_icon()).size(48.0));
            ui.label(egui::RichText::new(&animal.name).size(18.0).strong().color(colors::TEXT_PRIMARY));
            ui.label(
                egui::RichText::new(format!("{} · {} yrs", animal.species, animal.age))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.label(egui::RichText::new(format_price(animal.price)).strong().color(colors::ACCENT));

            ui.horizontal(|ui| {
                if ui.button("Details").clicked() {
                    click = Some(CardClick::Details);
                }
                let label = if in_cart { "In Cart" } else { "🛒 Add" };
                if ui.add_enabled(!in_cart, egui::Button::new(label)).clicked() {
                    click = Some(CardClick::AddToCart);
                }
            });
        });
    });

    click
}
