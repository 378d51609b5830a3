use std::io;

use eframe::egui;
use log::info;

use crate::Config;

use super::CropApp;

pub fn run_native() -> Result<(), eframe::Error> {
    env_logger::init();

    let mut config: Config = match std::fs::File::open("config.json") {
        Ok(f) => serde_json::from_reader(f).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(e) => Err(eframe::Error::AppCreation(Box::new(e)))?,
    };

    if let Some(path) = std::env::args().nth(1) {
        config.image = Some(path.into());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.viewport),
        ..Default::default()
    };

    info!("Run with config: {config:?}");
    eframe::run_native(
        "Croppable",
        options,
        Box::new(move |_cc| Ok(Box::new(CropApp::new(&config)))),
    )
}
