use crate::ui::helpers::{DEEP_PINK, PINK};
use egui::{
    Align, Button, CentralPanel, Color32, Context, CornerRadius, Frame, Layout, Margin, RichText,
    Ui, Visuals,
};

/// Barra inferior con un único interruptor de tema.
pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_bar")
        .frame(Frame::NONE.fill(Color32::TRANSPARENT).inner_margin(Margin::symmetric(12, 6)))
        .show(ctx, |ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let text = if dark { "☀ Light" } else { "🌙 Dark" };
                let toggle = Button::new(RichText::new(text).color(Color32::WHITE))
                    .fill(PINK)
                    .corner_radius(CornerRadius::same(12));
                if ui.add(toggle).clicked() {
                    ctx.set_visuals(themed_visuals(!dark));
                }
            });
        });
}

/// En ambos temas el acento de selección es rosa.
fn themed_visuals(dark: bool) -> Visuals {
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };
    visuals.selection.bg_fill = if dark { DEEP_PINK } else { PINK };
    visuals.hyperlink_color = PINK;
    visuals
}

/// Panel central transparente (deja ver el fondo de corazones) con una
/// tarjeta centrada de ancho máximo `max_width`.
pub fn card_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default()
        .frame(Frame::NONE.fill(Color32::TRANSPARENT))
        .show(ctx, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(Margin::symmetric(24, 20))
                    .corner_radius(CornerRadius::same(24))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
}
