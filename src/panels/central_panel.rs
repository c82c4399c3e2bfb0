use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::central_panel(&ctx.style()).fill(app.config().chrome_color);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        // The canvas size is fixed by whatever space the first layout leaves
        let available = ui.available_size();
        app.editor_mut()
            .ensure_canvas(available.x.floor() as u32, available.y.floor() as u32);

        let size = app
            .editor()
            .document()
            .size()
            .map(|[width, height]| egui::vec2(width as f32, height as f32))
            .unwrap_or(available);
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::drag());

        app.handle_canvas_input(ctx, rect);

        let painter = ui.painter_at(rect.expand(1.0));
        app.render_canvas(ctx, &painter, rect);
    });
}
