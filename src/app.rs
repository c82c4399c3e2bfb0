use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::config::CanvasConfig;
use crate::export;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// Which full-window screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Drawing,
}

/// Modal dialogs. At most one is open at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ExitConfirmation,
    GridOptions,
    GridSize { selected: u32 },
    ColorChooser,
    Message(String),
}

/// Result of the save flow
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user dismissed the file dialog
    Cancelled,
    /// There is no canvas yet, so nothing to save
    Skipped,
    Failed(String),
}

pub struct PaintApp {
    config: CanvasConfig,
    screen: Screen,
    dialog: Option<Dialog>,
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    /// Set once the user confirmed exit, so the next close request goes through
    allow_close: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    /// Builds the app without a window, starting on the home screen.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            renderer: Renderer::new(config.grid_color),
            input: InputHandler::new(egui::Rect::NOTHING),
            config,
            screen: Screen::Home,
            dialog: None,
            editor: EditorContext::new(),
            allow_close: false,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        log::debug!("Switching to {:?} screen", screen);
        self.screen = screen;
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn execute_command(&mut self, command: Command) {
        self.editor.execute(command);
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn take_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }

    /// Feeds this frame's pointer events for the canvas at `rect` into the editor.
    ///
    /// While a dialog is open only releases get through, so an in-progress stroke still ends.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        self.input.set_canvas_rect(rect);

        for event in self.input.process_input(ctx) {
            if self.dialog.is_some() && !matches!(event, InputEvent::PointerUp { .. }) {
                continue;
            }
            if let Err(err) = self.editor.handle_event(event) {
                log::warn!("Ignoring {:?}: {}", event, err);
            }
        }

        if self.input.is_dragging() {
            ctx.request_repaint();
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer
            .render(ctx, painter, rect, self.editor.document(), self.editor.grid());
    }

    /// Asks for a target file and exports the canvas there.
    pub fn save_drawing(&mut self) -> SaveOutcome {
        if !self.editor.document().is_initialized() {
            return SaveOutcome::Skipped;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Drawing")
            .add_filter("PNG image", &[export::DEFAULT_EXTENSION])
            .save_file()
        else {
            return SaveOutcome::Cancelled;
        };

        self.export_to(&path)
    }

    /// Exports the live canvas to `path`. Failures leave the editor untouched.
    pub fn export_to(&self, path: &Path) -> SaveOutcome {
        match export::save_png(self.editor.document(), path) {
            Ok(path) => SaveOutcome::Saved(path),
            Err(err) => {
                log::error!("Failed to save drawing to {}: {}", path.display(), err);
                SaveOutcome::Failed(format!("Error saving drawing: {err}"))
            }
        }
    }

    /// Shows the result of a save started from the toolbar.
    pub fn report_save(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Saved(_) => {
                self.open_dialog(Dialog::Message("Drawing saved successfully.".to_owned()));
            }
            SaveOutcome::Failed(message) => self.open_dialog(Dialog::Message(message)),
            SaveOutcome::Cancelled | SaveOutcome::Skipped => {}
        }
    }

    /// Closes the window for real.
    pub fn exit(&mut self, ctx: &egui::Context) {
        log::info!("Exiting");
        self.allow_close = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.open_dialog(Dialog::ExitConfirmation);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);

        match self.screen {
            Screen::Home => panels::home_screen(self, ctx),
            Screen::Drawing => {
                panels::toolbar(self, ctx);
                panels::brush_panel(self, ctx);
                panels::central_panel(self, ctx);
            }
        }

        panels::dialogs(self, ctx);
    }
}
