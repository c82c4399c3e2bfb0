use crate::PaintApp;
use crate::command::Command;
use crate::stroke::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

pub fn brush_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::side_top_panel(&ctx.style()).fill(app.config().chrome_color);

    egui::TopBottomPanel::bottom("brush_panel")
        .frame(frame)
        .show(ctx, |ui| {
            ui.add_enabled_ui(app.dialog().is_none(), |ui| {
                ui.horizontal(|ui| {
                    ui.label("Brush Size:");

                    let mut width = app.editor().brush().width();
                    let slider = egui::Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH);
                    if ui.add(slider).changed() {
                        app.execute_command(Command::SetWidth(width));
                    }
                });
            });
        });
}
