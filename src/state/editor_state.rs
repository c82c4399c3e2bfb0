//! The editing state machine.
//!
//! ```text
//!            pointer down (snapshot)
//!   ┌──────┐ ─────────────────────► ┌──────────┐
//!   │ Idle │                        │ Stroking │ ◄─┐ pointer move
//!   └──────┘ ◄───────────────────── └──────────┘ ──┘ (draw segment)
//!     │  ▲         pointer up
//!     └──┘
//!   undo / clear
//! ```
//!
//! Only one stroke can be in progress. Undo and clear happen from `Idle`.

use crate::stroke::ActiveStroke;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// No stroke in progress
    #[default]
    Idle,
    /// Pointer is held down and each move draws a segment
    Stroking { stroke: ActiveStroke },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        matches!(
            (self, new_state),
            (EditorState::Idle, EditorState::Stroking { .. })
                | (EditorState::Stroking { .. }, EditorState::Idle)
        )
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self, EditorState::Stroking { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Stroking { .. } => "Stroking",
        }
    }

    pub fn active_stroke_mut(&mut self) -> Option<&mut ActiveStroke> {
        match self {
            EditorState::Stroking { stroke } => Some(stroke),
            EditorState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_transitions() {
        let idle = EditorState::Idle;
        let stroking = EditorState::Stroking {
            stroke: ActiveStroke::new(Pos2::ZERO),
        };

        assert!(idle.can_transition_to(&stroking));
        assert!(stroking.can_transition_to(&idle));
        assert!(!stroking.can_transition_to(&stroking));
        assert!(!idle.can_transition_to(&idle));
    }
}
