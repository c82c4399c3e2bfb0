#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod grid;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use command::{Command, UndoStack};
pub use config::CanvasConfig;
pub use document::{Document, Snapshot};
pub use error::{ExportError, StateTransitionError};
pub use grid::{GridLine, GridState, grid_lines};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use stroke::{ActiveStroke, BrushMode, BrushState};
