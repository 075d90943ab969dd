//! # Customer Panel
//!
//! Sidebar navigation plus the current customer page.
//!
//! ## Layout:
//! ```text
//! ┌──────────┬──────────────────────────────┐
//! │ sidebar  │ Home / Browse / Cart /       │
//! │ pages    │ My Purchases                 │
//! │ logout   │                              │
//! └──────────┴──────────────────────────────┘
//! ```

use eframe::egui;

use crate::ui::app_state::PetShopApp;
use crate::ui::components::theme::{colors, heading, primary_button};
use crate::ui::state::CustomerPage;

impl PetShopApp {
    pub fn render_customer_panel(&mut self, ctx: &egui::Context) {
        self.render_customer_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            let page = self.nav.customer_page;
            match page {
                CustomerPage::Home => self.render_customer_home(ui),
                CustomerPage::Browse => self.render_browse_page(ui),
                CustomerPage::Cart => self.render_cart_page(ui),
                CustomerPage::Purchases => self.render_purchases_page(ui),
            }
        });

        self.render_animal_details(ctx);
        self.render_purchase_confirmation(ctx);
    }

    fn render_customer_sidebar(&mut self, ctx: &egui::Context) {
        let mut open_page = None;
        let mut logout = false;

        egui::SidePanel::left("customer_sidebar")
            .resizable(false)
            .exact_width(190.0)
            .frame(egui::Frame::none().fill(colors::SIDEBAR).inner_margin(egui::Margin::same(14.0)))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("🐾 Pet Shop").size(22.0).strong().color(colors::TEXT_WHITE));
                if let Some(username) = self.nav.username() {
                    ui.label(egui::RichText::new(format!("👤 {}", username)).color(colors::TEXT_WHITE));
                }
                ui.add_space(16.0);

                for page in CustomerPage::ALL {
                    let mut label = page.title().to_string();
                    if page == CustomerPage::Cart && !self.customer.cart.is_empty() {
                        label = format!("{} ({})", label, self.customer.cart.len());
                    }
                    let selected = self.nav.customer_page == page;
                    let text = egui::RichText::new(label).color(colors::TEXT_WHITE);
                    if ui
                        .add_sized([160.0, 34.0], egui::SelectableLabel::new(selected, text))
                        .clicked()
                    {
                        open_page = Some(page);
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    if ui.button("🚪 Logout").clicked() {
                        logout = true;
                    }
                });
            });

        if logout {
            self.logout();
        } else if let Some(page) = open_page {
            self.open_customer_page(page);
        }
    }

    fn render_customer_home(&mut self, ui: &mut egui::Ui) {
        let username = self.nav.username().unwrap_or_default().to_string();
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(heading(&format!("Welcome, {}!", username)));
            ui.label(
                egui::RichText::new("Browse our animals, fill your cart and take a friend home.")
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);
            if ui.add_sized([200.0, 40.0], primary_button("🐱 Start Browsing")).clicked() {
                self.open_customer_page(CustomerPage::Browse);
            }
        });
    }
}
