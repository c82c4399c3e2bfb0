use egui::{Color32, Vec2};

/// Fixed settings the application starts from. There is no config file.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    pub title: &'static str,
    /// Inner size of the non-resizable window. The canvas takes whatever the chrome leaves.
    pub window_size: Vec2,
    pub grid_color: Color32,
    /// Background of the toolbars and home screen
    pub chrome_color: Color32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "DigiCanvas",
            window_size: Vec2::new(800.0, 600.0),
            grid_color: Color32::from_rgb(192, 192, 192),
            chrome_color: Color32::from_rgb(230, 230, 250),
        }
    }
}

impl CanvasConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title)
                .with_inner_size(self.window_size)
                .with_resizable(false),
            ..Default::default()
        }
    }
}
