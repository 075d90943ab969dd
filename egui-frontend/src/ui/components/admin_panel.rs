//! # Admin Panel
//!
//! Inventory table with add, edit, delete, mark-bought and relist actions.
//!
//! Rows are drawn from the `admin.animals` snapshot. Clicks are collected
//! while drawing and applied afterwards, since every action re-fetches the
//! snapshot being iterated.

use eframe::egui;
use shared::{format_price, Animal, AnimalStatus};

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{card_frame, colors, heading, primary_button};

enum AdminAction {
    Add,
    Edit(Animal),
    Delete(i64),
    MarkBought(i64),
    Relist(i64),
}

impl PetShopApp {
    pub fn render_admin_panel(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if !self.admin.loaded {
            self.refresh_admin_animals();
        }

        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(heading("🛠 Admin Panel"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🚪 Logout").clicked() {
                    self.logout();
                }
                if ui.add(primary_button("➕ Add Animal")).clicked() {
                    action = Some(AdminAction::Add);
                }
            });
        });
        ui.add_space(8.0);

        card_frame().show(ui, |ui| {
            if self.admin.animals.is_empty() {
                ui.label(egui::RichText::new("No animals in stock yet.").color(colors::TEXT_SECONDARY));
                return;
            }

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                egui::Grid::new("admin_animals_grid")
                    .num_columns(8)
                    .striped(true)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for title in ["ID", "Name", "Species", "Age", "Price", "Status", "Owner", ""] {
                            ui.label(egui::RichText::new(title).strong());
                        }
                        ui.end_row();

                        for animal in &self.admin.animals {
                            if let Some(clicked) = render_animal_row(ui, animal) {
                                action = Some(clicked);
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        match action {
            Some(AdminAction::Add) => self.open_add_dialog(),
            Some(AdminAction::Edit(animal)) => self.open_edit_dialog(&animal),
            Some(AdminAction::Delete(id)) => self.delete_animal(id),
            Some(AdminAction::MarkBought(id)) => self.mark_bought(id),
            Some(AdminAction::Relist(id)) => self.relist_animal(id),
            None => {}
        }

        self.render_animal_dialog(ctx);
    }
}

fn render_animal_row(ui: &mut egui::Ui, animal: &Animal) -> Option<AdminAction> {
    let mut action = None;

    ui.label(animal.id.to_string());
    ui.label(format!("{} {}", animal.species_icon(), animal.name));
    ui.label(&animal.species);
    ui.label(animal.age.to_string());
    ui.label(format_price(animal.price));
    let status_color = match animal.status {
        AnimalStatus::Available => colors::AVAILABLE,
        AnimalStatus::Bought => colors::BOUGHT,
    };
    ui.label(egui::RichText::new(animal.status.display()).color(status_color).strong());
    ui.label(animal.owner.as_deref().unwrap_or("-"));

    ui.horizontal(|ui| {
        if ui.small_button("✏ Edit").clicked() {
            action = Some(AdminAction::Edit(animal.clone()));
        }
        match animal.status {
            AnimalStatus::Available => {
                if ui.small_button("✔ Mark Bought").clicked() {
                    action = Some(AdminAction::MarkBought(animal.id));
                }
            }
            AnimalStatus::Bought => {
                if ui.small_button("↩ Relist").clicked() {
                    action = Some(AdminAction::Relist(animal.id));
                }
            }
        }
        if ui
            .small_button(egui::RichText::new("🗑 Delete").color(colors::DANGER))
            .clicked()
        {
            action = Some(AdminAction::Delete(animal.id));
        }
    });

    action
}
