use egui::Color32;

use crate::state::EditorContext;
use crate::stroke::BrushMode;

/// User actions issued from the toolbar and dialogs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Snapshot, then reset the canvas to white
    Clear,
    /// Restore the most recent snapshot, or clear if there is none
    Undo,
    /// Pick a new brush color. Also leaves eraser mode.
    SetColor(Color32),
    SetWidth(u32),
    SetMode(BrushMode),
    ShowGrid { spacing: u32 },
    HideGrid,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::Undo => "Undo",
            Command::SetColor(_) => "SetColor",
            Command::SetWidth(_) => "SetWidth",
            Command::SetMode(_) => "SetMode",
            Command::ShowGrid { .. } => "ShowGrid",
            Command::HideGrid => "HideGrid",
        }
    }

    pub fn execute(self, ctx: &mut EditorContext) {
        match self {
            Command::Clear => ctx.clear(),
            Command::Undo => ctx.undo(),
            Command::SetColor(color) => {
                ctx.brush_mut().set_color(color);
                ctx.brush_mut().set_mode(BrushMode::Draw);
                log::debug!("Brush color set to {:?}", color);
            }
            Command::SetWidth(width) => {
                ctx.brush_mut().set_width(width);
                log::debug!("Brush width set to {}", ctx.brush().width());
            }
            Command::SetMode(mode) => {
                ctx.brush_mut().set_mode(mode);
                log::debug!("Brush mode set to {:?}", mode);
            }
            Command::ShowGrid { spacing } => {
                ctx.grid_mut().show(spacing);
                log::debug!("Grid shown at spacing {}", spacing);
            }
            Command::HideGrid => {
                ctx.grid_mut().hide();
                log::debug!("Grid hidden");
            }
        }
    }
}
