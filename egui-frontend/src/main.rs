use eframe::egui;
use log::{error, info};
use petshop_backend::{AppConfig, Backend};

mod ui;

use ui::{setup_pet_shop_style, PetShopApp};

fn main() -> Result<(), eframe::Error> {
    let (config, config_source) = AppConfig::load();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();
    info!("Starting Pet Shop egui application");
    config_source.log();
    info!("Using database {:?}", config.database_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pet Shop")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Pet Shop",
        options,
        Box::new(move |cc| {
            setup_pet_shop_style(&cc.egui_ctx);

            match Backend::open(&config.database_path) {
                Ok(backend) => {
                    info!("Successfully initialized Pet Shop app");
                    Ok(Box::new(PetShopApp::new(backend)))
                }
                Err(e) => {
                    error!("Failed to open database: {}", e);
                    Err(format!("Failed to open database: {}", e).into())
                }
            }
        }),
    )
}
