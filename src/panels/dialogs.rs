use crate::PaintApp;
use crate::app::{Dialog, SaveOutcome};
use crate::command::Command;
use crate::components::{ColorSwatch, SWATCHES};
use crate::grid::GRID_SPACINGS;

const SWATCHES_PER_ROW: usize = 8;

/// Shows the open dialog, if any.
pub fn dialogs(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(mut dialog) = app.take_dialog() else {
        return;
    };

    let keep_open = match &mut dialog {
        Dialog::ExitConfirmation => exit_confirmation(app, ctx),
        Dialog::GridOptions => grid_options(app, ctx),
        Dialog::GridSize { selected } => grid_size(app, ctx, selected),
        Dialog::ColorChooser => color_chooser(app, ctx),
        Dialog::Message(message) => message_box(ctx, message),
    };

    // An action may have replaced the dialog with a follow-up one
    if keep_open && app.dialog().is_none() {
        app.open_dialog(dialog);
    }
}

fn modal(ctx: &egui::Context, title: &str, add_contents: impl FnOnce(&mut egui::Ui) -> bool) -> bool {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, add_contents)
        .and_then(|response| response.inner)
        .unwrap_or(true)
}

fn exit_confirmation(app: &mut PaintApp, ctx: &egui::Context) -> bool {
    modal(ctx, "Exit Confirmation", |ui| {
        ui.label("Do you want to exit the program?");
        ui.add_space(8.0);

        let mut keep_open = true;
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                app.exit(ctx);
                keep_open = false;
            }
            if ui.button("Save First").clicked() {
                match app.save_drawing() {
                    SaveOutcome::Saved(_) | SaveOutcome::Skipped => app.exit(ctx),
                    SaveOutcome::Failed(message) => app.open_dialog(Dialog::Message(message)),
                    SaveOutcome::Cancelled => {}
                }
                keep_open = false;
            }
            if ui.button("No").clicked() {
                keep_open = false;
            }
        });
        keep_open
    })
}

fn grid_options(app: &mut PaintApp, ctx: &egui::Context) -> bool {
    modal(ctx, "Grid Options", |ui| {
        ui.label("Choose an option:");
        ui.add_space(8.0);

        let mut keep_open = true;
        ui.horizontal(|ui| {
            if ui.button("Grid Sizes").clicked() {
                app.open_dialog(Dialog::GridSize {
                    selected: GRID_SPACINGS[0],
                });
                keep_open = false;
            }
            if ui.button("No Grid").clicked() {
                app.execute_command(Command::HideGrid);
                keep_open = false;
            }
            if ui.button("Cancel").clicked() {
                keep_open = false;
            }
        });
        keep_open
    })
}

fn grid_size(app: &mut PaintApp, ctx: &egui::Context, selected: &mut u32) -> bool {
    modal(ctx, "Grid Size", |ui| {
        ui.label("Select Grid Size:");
        egui::ComboBox::from_id_salt("grid_size")
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for spacing in GRID_SPACINGS {
                    ui.selectable_value(selected, spacing, spacing.to_string());
                }
            });
        ui.add_space(8.0);

        let mut keep_open = true;
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                app.execute_command(Command::ShowGrid { spacing: *selected });
                keep_open = false;
            }
            if ui.button("Cancel").clicked() {
                keep_open = false;
            }
        });
        keep_open
    })
}

fn color_chooser(app: &mut PaintApp, ctx: &egui::Context) -> bool {
    let current = app.editor().brush().color();

    modal(ctx, "Choose a color", |ui| {
        let mut keep_open = true;

        egui::Grid::new("swatches")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for (i, color) in SWATCHES.iter().enumerate() {
                    let swatch = ColorSwatch::new(*color, egui::vec2(24.0, 24.0), *color == current);
                    if swatch.show(ui).clicked() {
                        app.execute_command(Command::SetColor(*color));
                        keep_open = false;
                    }
                    if (i + 1) % SWATCHES_PER_ROW == 0 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(8.0);
        if ui.button("Cancel").clicked() {
            keep_open = false;
        }
        keep_open
    })
}

fn message_box(ctx: &egui::Context, message: &str) -> bool {
    modal(ctx, "Message", |ui| {
        ui.label(message);
        ui.add_space(8.0);
        !ui.button("OK").clicked()
    })
}
