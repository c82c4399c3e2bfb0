use eframe::egui;

/// Palette offered by the color chooser
pub const SWATCHES: [egui::Color32; 24] = [
    egui::Color32::from_rgb(0, 0, 0),
    egui::Color32::from_rgb(64, 64, 64),
    egui::Color32::from_rgb(128, 128, 128),
    egui::Color32::from_rgb(192, 192, 192),
    egui::Color32::from_rgb(255, 255, 255),
    egui::Color32::from_rgb(128, 0, 0),
    egui::Color32::from_rgb(255, 0, 0),
    egui::Color32::from_rgb(255, 128, 128),
    egui::Color32::from_rgb(255, 128, 0),
    egui::Color32::from_rgb(255, 200, 0),
    egui::Color32::from_rgb(255, 255, 0),
    egui::Color32::from_rgb(128, 128, 0),
    egui::Color32::from_rgb(0, 128, 0),
    egui::Color32::from_rgb(0, 255, 0),
    egui::Color32::from_rgb(128, 255, 128),
    egui::Color32::from_rgb(0, 128, 128),
    egui::Color32::from_rgb(0, 255, 255),
    egui::Color32::from_rgb(0, 0, 128),
    egui::Color32::from_rgb(0, 0, 255),
    egui::Color32::from_rgb(128, 128, 255),
    egui::Color32::from_rgb(128, 0, 128),
    egui::Color32::from_rgb(255, 0, 255),
    egui::Color32::from_rgb(255, 175, 175),
    egui::Color32::from_rgb(139, 69, 19),
];

/// A filled color square, used both as a palette entry and as the current-color indicator.
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub size: egui::Vec2,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, size: egui::Vec2, selected: bool) -> Self {
        Self {
            color,
            size,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 2.0, self.color);

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::from_gray(90))
            } else {
                egui::Stroke::new(1.0, egui::Color32::BLACK)
            };
            ui.painter().rect_stroke(rect, 2.0, border);
        }

        response
    }
}
