use digicanvas::{BrushMode, Command, EditorContext, InputEvent};
use egui::{Color32, Pos2};

fn create_test_context() -> EditorContext {
    let mut ctx = EditorContext::new();
    ctx.ensure_canvas(200, 150);
    ctx
}

fn drag(ctx: &mut EditorContext, points: &[Pos2]) {
    ctx.handle_event(InputEvent::PointerDown { pos: points[0] }).unwrap();
    for &pos in &points[1..] {
        ctx.handle_event(InputEvent::PointerMove { pos }).unwrap();
    }
    ctx.handle_event(InputEvent::PointerUp {
        pos: *points.last().unwrap(),
    })
    .unwrap();
}

#[test]
fn test_undo_restores_state_before_each_stroke() {
    let mut ctx = create_test_context();
    let mut states = Vec::new();

    let strokes = [
        [Pos2::new(10.0, 10.0), Pos2::new(190.0, 10.0)],
        [Pos2::new(10.0, 40.0), Pos2::new(190.0, 140.0)],
        [Pos2::new(100.0, 0.0), Pos2::new(100.0, 150.0)],
    ];
    for (i, points) in strokes.iter().enumerate() {
        states.push(ctx.document().snapshot().unwrap());
        if i == 1 {
            ctx.execute(Command::SetColor(Color32::RED));
            ctx.execute(Command::SetWidth(20));
        }
        drag(&mut ctx, points);
    }

    while let Some(expected) = states.pop() {
        ctx.execute(Command::Undo);
        assert_eq!(ctx.document().snapshot(), Some(expected));
    }
    assert!(ctx.history().is_empty());
}

#[test]
fn test_undo_on_fresh_session_is_all_white() {
    let mut ctx = create_test_context();
    ctx.execute(Command::Undo);

    for y in (0..150).step_by(7) {
        for x in (0..200).step_by(7) {
            assert_eq!(ctx.document().pixel(x, y), Some(Color32::WHITE));
        }
    }
}

#[test]
fn test_clear_then_undo_restores_drawing_exactly() {
    let mut ctx = create_test_context();
    drag(
        &mut ctx,
        &[Pos2::new(20.0, 20.0), Pos2::new(80.0, 90.0), Pos2::new(150.0, 30.0)],
    );
    let drawing = ctx.document().snapshot().unwrap();

    ctx.execute(Command::Clear);
    assert_eq!(ctx.document().pixel(80, 90), Some(Color32::WHITE));

    ctx.execute(Command::Undo);
    assert_eq!(ctx.document().snapshot(), Some(drawing));
}

#[test]
fn test_snapshot_survives_later_strokes() {
    let mut ctx = create_test_context();
    let snapshot = ctx.document().snapshot().unwrap();

    drag(&mut ctx, &[Pos2::new(0.0, 75.0), Pos2::new(200.0, 75.0)]);
    ctx.execute(Command::Clear);
    ctx.execute(Command::SetMode(BrushMode::Erase));
    drag(&mut ctx, &[Pos2::new(0.0, 0.0), Pos2::new(200.0, 150.0)]);

    assert_eq!(snapshot.pixel(100, 75), Some(Color32::WHITE));
    assert_eq!(snapshot.canvas(), &digicanvas::Canvas::new(200, 150));
}

#[test]
fn test_stroke_and_clear_each_push_one_snapshot() {
    let mut ctx = create_test_context();
    drag(&mut ctx, &[Pos2::new(5.0, 5.0), Pos2::new(50.0, 50.0)]);
    drag(&mut ctx, &[Pos2::new(5.0, 50.0), Pos2::new(50.0, 5.0)]);
    ctx.execute(Command::Clear);

    assert_eq!(ctx.history().len(), 3);
}
