// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const PINK: Color32 = Color32::from_rgb(236, 72, 153);
pub const DEEP_PINK: Color32 = Color32::from_rgb(219, 39, 119);
pub const FAIL_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

/// Tarjeta grande de opción (imagen/fecha/pieza). Devuelve true si se pulsó.
pub fn card_button(
    ui: &mut Ui,
    text: String,
    size: Vec2,
    selected: bool,
    enabled: bool,
    hover: Option<&str>,
) -> bool {
    let button = Button::new(RichText::new(text).size(17.0))
        .min_size(size)
        .selected(selected);
    let response = ui.add_enabled(enabled, button);
    match hover {
        Some(text) => response.on_hover_text(text).clicked(),
        None => response.clicked(),
    }
}

/// Botón principal de acción, centrado y de ancho fijo.
pub fn action_button(ui: &mut Ui, label: &str, fill: Color32, enabled: bool) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        let button = Button::new(RichText::new(label).size(18.0).color(Color32::WHITE))
            .fill(fill)
            .min_size(Vec2::new(260.0, 44.0));
        clicked = ui.add_enabled(enabled, button).clicked();
    });
    clicked
}

/// Línea de estado bajo el tablero ("Correct!" / "Failed!").
pub fn status_line(ui: &mut Ui, text: &str, color: Color32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).size(24.0).strong().color(color));
    });
}
