//! # Browse Page
//!
//! Search box, species filter and the grid of available animals. The grid
//! shows `customer.browse.filtered()`, which is recomputed whenever the
//! query, the category or the snapshot changes.

use eframe::egui;
use shared::{format_price, Animal};

use crate::ui::app_state::PetShopApp;
use crate::ui::components::animal_card::{render_animal_card, CardClick};
use crate::ui::components::theme::{colors, heading, primary_button};

impl PetShopApp {
    pub fn render_browse_page(&mut self, ui: &mut egui::Ui) {
        if !self.customer.browse_loaded {
            self.refresh_browse();
        }

        ui.label(heading("🐱 Browse Animals"));
        ui.add_space(6.0);

        let mut query = self.customer.browse.filter().query.clone();
        let mut category = self.customer.browse.filter().category.clone();
        let mut refresh = false;

        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search by name or species")
                    .desired_width(260.0),
            );
            egui::ComboBox::from_id_source("browse_category")
                .selected_text(category.clone())
                .show_ui(ui, |ui| {
                    for option in self.customer.browse.categories() {
                        let label = option.clone();
                        ui.selectable_value(&mut category, option, label);
                    }
                });
            if ui.button("🔄 Refresh").clicked() {
                refresh = true;
            }
        });

        self.customer.browse.set_query(query);
        self.customer.browse.set_category(category);
        if refresh {
            self.refresh_browse();
        }

        ui.add_space(8.0);

        let mut clicked: Option<(Animal, CardClick)> = None;
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let animals = self.customer.browse.filtered();
            if animals.is_empty() {
                ui.label(egui::RichText::new("No animals match your search.").color(colors::TEXT_SECONDARY));
                return;
            }
            ui.horizontal_wrapped(|ui| {
                for animal in animals {
                    let in_cart = self.customer.cart.contains(animal.id);
                    if let Some(click) = render_animal_card(ui, animal, in_cart) {
                        clicked = Some((animal.clone(), click));
                    }
                }
            });
        });

        match clicked {
            Some((animal, CardClick::Details)) => self.show_details(&animal),
            Some((animal, CardClick::AddToCart)) => self.add_to_cart(&animal),
            None => {}
        }
    }

    /// Details window with "Buy Now" and "Add to Cart"
    pub fn render_animal_details(&mut self, ctx: &egui::Context) {
        let Some(animal) = self.customer.detail.clone() else {
            return;
        };

        let in_cart = self.customer.cart.contains(animal.id);
        let mut open = true;
        let mut buy = false;
        let mut add = false;

        egui::Window::new(format!("{} {}", animal.species_icon(), animal.name))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("animal_details_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Species:");
                    ui.label(&animal.species);
                    ui.end_row();
                    ui.label("Age:");
                    ui.label(format!("{} years", animal.age));
                    ui.end_row();
                    ui.label("Price:");
                    ui.label(egui::RichText::new(format_price(animal.price)).strong());
                    ui.end_row();
                });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.add(primary_button("💳 Buy Now")).clicked() {
                        buy = true;
                    }
                    let label = if in_cart { "In Cart" } else { "🛒 Add to Cart" };
                    if ui.add_enabled(!in_cart, egui::Button::new(label)).clicked() {
                        add = true;
                    }
                });
            });

        if buy {
            self.buy_now(&animal);
        } else if add {
            self.add_to_cart(&animal);
        } else if !open {
            self.customer.detail = None;
        }
    }
}
