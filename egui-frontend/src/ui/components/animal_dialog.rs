//! # Animal Dialog
//!
//! Add/edit window for the admin panel. Fields are kept as raw text and
//! only parsed on save.

use eframe::egui;
use shared::AnimalStatus;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{colors, primary_button};

impl PetShopApp {
    pub fn render_animal_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.admin.dialog.as_mut() else {
            return;
        };

        let mut open = true;
        let mut save = false;
        let mut cancel = false;

        egui::Window::new(dialog.title())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("animal_dialog_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name:");
                        ui.text_edit_singleline(&mut dialog.name);
                        ui.end_row();

                        ui.label("Species:");
                        ui.text_edit_singleline(&mut dialog.species);
                        ui.end_row();

                        ui.label("Age:");
                        ui.text_edit_singleline(&mut dialog.age);
                        ui.end_row();

                        ui.label("Price:");
                        ui.text_edit_singleline(&mut dialog.price);
                        ui.end_row();

                        ui.label("Status:");
                        egui::ComboBox::from_id_source("animal_dialog_status")
                            .selected_text(dialog.status.display())
                            .show_ui(ui, |ui| {
                                for status in AnimalStatus::ALL {
                                    ui.selectable_value(&mut dialog.status, status, status.display());
                                }
                            });
                        ui.end_row();
                    });

                if let Some(error) = &dialog.error {
                    ui.label(egui::RichText::new(error).color(colors::ERROR));
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.add(primary_button("💾 Save")).clicked() {
                        save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if save {
            self.save_animal_dialog();
        } else if cancel || !open {
            self.admin.dialog = None;
        }
    }
}
