use crate::PaintApp;
use crate::app::{Dialog, Screen};

pub fn home_screen(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::central_panel(&ctx.style()).fill(app.config().chrome_color);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.add_enabled_ui(app.dialog().is_none(), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.label(
                    egui::RichText::new(app.config().title)
                        .size(96.0)
                        .italics()
                        .strong()
                        .color(egui::Color32::BLACK),
                );
                ui.add_space(20.0);

                let button_size = egui::vec2(180.0, 36.0);
                let start = egui::Button::new(egui::RichText::new("Start Drawing").size(20.0))
                    .min_size(button_size);
                if ui.add(start).clicked() {
                    app.set_screen(Screen::Drawing);
                }
                ui.add_space(10.0);

                let exit = egui::Button::new(egui::RichText::new("Exit Program").size(20.0))
                    .min_size(button_size);
                if ui.add(exit).clicked() {
                    app.open_dialog(Dialog::ExitConfirmation);
                }
            });
        });
    });
}
