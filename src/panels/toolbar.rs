use crate::PaintApp;
use crate::app::Dialog;
use crate::command::Command;
use crate::components::ColorSwatch;
use crate::stroke::BrushMode;

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::side_top_panel(&ctx.style()).fill(app.config().chrome_color);

    egui::TopBottomPanel::top("toolbar")
        .frame(frame)
        .show(ctx, |ui| {
            ui.add_enabled_ui(app.dialog().is_none(), |ui| {
                ui.horizontal(|ui| {
                    ui.label("Current Color:");
                    ColorSwatch::new(app.editor().brush().color(), egui::vec2(50.0, 25.0), false)
                        .show(ui);

                    // Right to left, so the buttons are added in reverse
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Clear").clicked() {
                            app.execute_command(Command::Clear);
                        }
                        if ui.button("Undo").clicked() {
                            app.execute_command(Command::Undo);
                        }
                        if ui.button("Save").clicked() {
                            let outcome = app.save_drawing();
                            app.report_save(outcome);
                        }
                        if ui.button("Toggle Grid").clicked() {
                            app.open_dialog(Dialog::GridOptions);
                        }

                        let mode = app.editor().brush().mode();
                        if ui.selectable_label(mode == BrushMode::Draw, "Draw").clicked() {
                            app.execute_command(Command::SetMode(BrushMode::Draw));
                        }
                        if ui.selectable_label(mode == BrushMode::Erase, "Erase").clicked() {
                            app.execute_command(Command::SetMode(BrushMode::Erase));
                        }

                        if ui.button("Choose Color").clicked() {
                            app.open_dialog(Dialog::ColorChooser);
                        }
                    });
                });
            });
        });
}
