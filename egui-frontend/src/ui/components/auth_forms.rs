//! # Auth Forms
//!
//! Login and registration screens.
//!
//! ## Responsibilities:
//! - Username, password and role inputs
//! - Inline success/error feedback under the form
//! - Submitting on button click or Enter

use eframe::egui;
use shared::UserRole;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{card_frame, colors, heading, primary_button};
use crate::ui::state::FormMessage;

const FIELD_WIDTH: f32 = 260.0;

impl PetShopApp {
    pub fn render_login(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let mut back = false;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            card_frame().show(ui, |ui| {
                ui.set_width(360.0);
                ui.vertical_centered(|ui| {
                    ui.label(heading("🔑 Login"));
                    ui.add_space(12.0);

                    let form = &mut self.auth.login;
                    ui.add(
                        egui::TextEdit::singleline(&mut form.username)
                            .hint_text("Username")
                            .desired_width(FIELD_WIDTH),
                    );
                    let password = ui.add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(true)
                            .hint_text("Password")
                            .desired_width(FIELD_WIDTH),
                    );
                    role_selector(ui, "login_role", &mut form.role);

                    if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }

                    ui.add_space(8.0);
                    if ui.add_sized([FIELD_WIDTH, 36.0], primary_button("Login")).clicked() {
                        submit = true;
                    }
                    if ui.button("⬅ Back").clicked() {
                        back = true;
                    }

                    render_form_message(ui, form.message.as_ref());
                });
            });
        });

        if submit {
            self.handle_login();
        } else if back {
            self.auth.clear();
            self.nav.back_to_menu();
        }
    }

    pub fn render_register(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let mut back = false;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            card_frame().show(ui, |ui| {
                ui.set_width(360.0);
                ui.vertical_centered(|ui| {
                    ui.label(heading("📝 Register"));
                    ui.add_space(12.0);

                    let form = &mut self.auth.register;
                    ui.add(
                        egui::TextEdit::singleline(&mut form.username)
                            .hint_text("Username")
                            .desired_width(FIELD_WIDTH),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(true)
                            .hint_text("Password")
                            .desired_width(FIELD_WIDTH),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.confirm_password)
                            .password(true)
                            .hint_text("Confirm password")
                            .desired_width(FIELD_WIDTH),
                    );
                    role_selector(ui, "register_role", &mut form.role);

                    ui.add_space(8.0);
                    if ui.add_sized([FIELD_WIDTH, 36.0], primary_button("Register")).clicked() {
                        submit = true;
                    }
                    if ui.button("⬅ Back").clicked() {
                        back = true;
                    }

                    render_form_message(ui, form.message.as_ref());
                });
            });
        });

        if submit {
            self.handle_register();
        } else if back {
            self.auth.clear();
            self.nav.back_to_menu();
        }
    }
}

fn role_selector(ui: &mut egui::Ui, id: &str, role: &mut UserRole) {
    ui.horizontal(|ui| {
        ui.label("Role:");
        egui::ComboBox::from_id_source(id)
            .selected_text(role.display())
            .show_ui(ui, |ui| {
                for option in UserRole::ALL {
                    ui.selectable_value(role, option, option.display());
                }
            });
    });
}

fn render_form_message(ui: &mut egui::Ui, message: Option<&FormMessage>) {
    match message {
        Some(FormMessage::Success(text)) => {
            ui.label(egui::RichText::new(text).color(colors::SUCCESS));
        }
        Some(FormMessage::Error(text)) => {
            ui.label(egui::RichText::new(text).color(colors::ERROR));
        }
        None => {}
    }
}
