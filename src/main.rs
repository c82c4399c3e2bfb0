#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = digicanvas::CanvasConfig::default();
    let native_options = config.native_options();

    eframe::run_native(
        config.title,
        native_options,
        Box::new(move |cc| Ok(Box::new(digicanvas::PaintApp::new(cc, config)))),
    )
}
