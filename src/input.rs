use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas-local coordinates, as consumed by the editor state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while the primary button is held
    PointerMove { pos: Pos2 },
    /// Primary button released, anywhere
    PointerUp { pos: Pos2 },
}

/// Handles converting raw egui input into canvas-local [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Set between a press inside the canvas and the matching release
    dragging: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            dragging: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle after layout
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Process this frame's raw pointer events in order.
    ///
    /// Every intermediate move of a fast drag is kept so the stroke follows the real path.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let raw: Vec<egui::Event> = ctx.input(|input| input.events.clone());
        self.process_events(&raw)
    }

    /// Converts a sequence of egui events. Split out from [`Self::process_input`] for testing.
    pub fn process_events(&mut self, raw: &[egui::Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if *pressed {
                        if !self.dragging && self.canvas_rect.contains(*pos) {
                            self.dragging = true;
                            events.push(InputEvent::PointerDown {
                                pos: self.to_local(*pos),
                            });
                        }
                    } else if self.dragging {
                        self.dragging = false;
                        events.push(InputEvent::PointerUp {
                            pos: self.to_local(*pos),
                        });
                    }
                    self.last_pointer_pos = Some(*pos);
                }
                egui::Event::PointerMoved(pos) => {
                    if self.dragging && self.last_pointer_pos != Some(*pos) {
                        events.push(InputEvent::PointerMove {
                            pos: self.to_local(*pos),
                        });
                    }
                    self.last_pointer_pos = Some(*pos);
                }
                egui::Event::PointerGone => {
                    // Release outside the window never arrives, so end the stroke here
                    if self.dragging {
                        self.dragging = false;
                        let pos = self.last_pointer_pos.unwrap_or(self.canvas_rect.min);
                        events.push(InputEvent::PointerUp {
                            pos: self.to_local(pos),
                        });
                    }
                    self.last_pointer_pos = None;
                }
                _ => {}
            }
        }

        events
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Modifiers;

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: Pos2::new(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(200.0, 100.0)))
    }

    #[test]
    fn test_drag_sequence_is_canvas_local() {
        let mut input = handler();
        let events = input.process_events(&[
            egui::Event::PointerMoved(Pos2::new(110.0, 60.0)),
            button(110.0, 60.0, true),
            egui::Event::PointerMoved(Pos2::new(120.0, 70.0)),
            egui::Event::PointerMoved(Pos2::new(130.0, 80.0)),
            button(130.0, 80.0, false),
        ]);

        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: Pos2::new(10.0, 10.0) },
                InputEvent::PointerMove { pos: Pos2::new(20.0, 20.0) },
                InputEvent::PointerMove { pos: Pos2::new(30.0, 30.0) },
                InputEvent::PointerUp { pos: Pos2::new(30.0, 30.0) },
            ]
        );
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.process_events(&[
            button(10.0, 10.0, true),
            egui::Event::PointerMoved(Pos2::new(150.0, 100.0)),
            button(150.0, 100.0, false),
        ]);

        assert!(events.is_empty());
    }

    #[test]
    fn test_drag_may_leave_canvas() {
        let mut input = handler();
        let events = input.process_events(&[
            button(150.0, 100.0, true),
            egui::Event::PointerMoved(Pos2::new(400.0, 100.0)),
            button(400.0, 100.0, false),
        ]);

        assert_eq!(events.len(), 3);
        assert_eq!(events[1], InputEvent::PointerMove { pos: Pos2::new(300.0, 50.0) });
    }

    #[test]
    fn test_pointer_gone_ends_stroke() {
        let mut input = handler();
        let events = input.process_events(&[
            button(150.0, 100.0, true),
            egui::Event::PointerMoved(Pos2::new(160.0, 100.0)),
            egui::Event::PointerGone,
        ]);

        assert_eq!(events.last(), Some(&InputEvent::PointerUp { pos: Pos2::new(60.0, 50.0) }));
        assert!(!input.is_dragging());
    }
}
