//! The editor context owns the live document and everything that acts on it.
//!
//! All canvas mutation goes through here, driven by two inputs:
//! - a stream of [`InputEvent`]s from the canvas, which runs the stroke state machine
//! - [`Command`]s from the toolbar and dialogs
//!
//! Snapshots are pushed onto the undo stack before the pixels change, never after, so
//! popping always yields the state from before the most recent stroke or clear.

use egui::Pos2;

use super::EditorState;
use crate::command::{Command, UndoStack};
use crate::document::Document;
use crate::error::StateTransitionError;
use crate::grid::GridState;
use crate::input::InputEvent;
use crate::stroke::{ActiveStroke, BrushState};

#[derive(Debug, Default)]
pub struct EditorContext {
    state: EditorState,
    document: Document,
    brush: BrushState,
    grid: GridState,
    history: UndoStack,
}

impl EditorContext {
    /// Creates a context with an uninitialized document and the default brush and grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Allocates the canvas on first layout. Later calls are ignored.
    pub fn ensure_canvas(&mut self, width: u32, height: u32) {
        self.document.initialize(width, height);
    }

    pub fn execute(&mut self, command: Command) {
        log::debug!("Executing command: {}", command.name());
        command.execute(self);
    }

    /// Feeds one canvas input event through the state machine.
    ///
    /// Moves and releases while idle are ignored. A press while a stroke is already in
    /// progress is rejected.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), StateTransitionError> {
        match event {
            InputEvent::PointerDown { pos } => self.begin_stroke(pos),
            InputEvent::PointerMove { pos } => {
                if let Some(stroke) = self.state.active_stroke_mut() {
                    stroke.add_point(pos, &self.brush, &mut self.document);
                }
                Ok(())
            }
            InputEvent::PointerUp { .. } => {
                if self.state.is_stroking() {
                    self.finish_stroke()?;
                }
                Ok(())
            }
        }
    }

    /// Ends the stroke in progress, if any.
    pub fn finish_stroke(&mut self) -> Result<(), StateTransitionError> {
        if let EditorState::Stroking { stroke } = &self.state {
            log::debug!("Stroke finished with {} segments", stroke.segment_count());
        }
        self.transition_to(EditorState::Idle)
    }

    pub fn clear(&mut self) {
        self.abandon_stroke();
        if let Some(snapshot) = self.document.snapshot() {
            self.history.push(snapshot);
            self.document.fill_white();
            log::info!("Canvas cleared");
        }
    }

    pub fn undo(&mut self) {
        self.abandon_stroke();
        match self.history.pop() {
            Some(snapshot) => {
                self.document.restore(snapshot);
                log::info!("Undo, {} snapshots left", self.history.len());
            }
            None => {
                log::info!("Nothing to undo, clearing canvas");
                self.clear();
            }
        }
    }

    fn begin_stroke(&mut self, pos: Pos2) -> Result<(), StateTransitionError> {
        let new_state = EditorState::Stroking {
            stroke: ActiveStroke::new(pos),
        };
        if !self.state.can_transition_to(&new_state) {
            return Err(self.transition_error(&new_state));
        }

        match self.document.snapshot() {
            Some(snapshot) => self.history.push(snapshot),
            None => log::debug!("Stroke started before the canvas exists"),
        }
        log::debug!("Stroke started at {:?}", pos);
        self.transition_to(new_state)
    }

    fn abandon_stroke(&mut self) {
        if self.state.is_stroking() {
            self.state = EditorState::Idle;
        }
    }

    fn transition_to(&mut self, new_state: EditorState) -> Result<(), StateTransitionError> {
        if !self.state.can_transition_to(&new_state) {
            return Err(self.transition_error(&new_state));
        }

        log::trace!("Editor state {} -> {}", self.state.name(), new_state.name());
        self.state = new_state;
        Ok(())
    }

    fn transition_error(&self, new_state: &EditorState) -> StateTransitionError {
        StateTransitionError::InvalidTransition {
            from: self.state.name(),
            to: new_state.name(),
        }
    }
}
