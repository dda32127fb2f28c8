use crate::app::JourneyApp;
use crate::ui::helpers::{DEEP_PINK, FAIL_RED, PINK};
use egui::{
    Align2, Color32, Context, CornerRadius, Frame, Id, LayerId, Margin, Order, RichText, Vec2,
    vec2,
};

/// Aviso de fallo abajo al centro; desaparece solo cuando vence su temporizador.
pub fn ui_failure_toast(app: &JourneyApp, ctx: &Context) {
    let Some(message) = &app.progress.transient_message else {
        return;
    };
    egui::Area::new(Id::new("failure_toast"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -48.0))
        .interactable(false)
        .show(ctx, |ui| {
            Frame::default()
                .fill(FAIL_RED)
                .corner_radius(CornerRadius::same(24))
                .inner_margin(Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.label(RichText::new(message).size(18.0).strong().color(Color32::WHITE));
                });
        });
}

/// Overlay final tras superar el último nivel.
pub fn ui_finale(app: &JourneyApp, ctx: &Context, now: f64) {
    let veil = ctx.layer_painter(LayerId::new(Order::Middle, Id::new("finale_veil")));
    veil.rect_filled(
        ctx.screen_rect(),
        CornerRadius::ZERO,
        Color32::from_rgba_unmultiplied(252, 231, 243, 210),
    );

    let pulse = 1.0 + 0.1 * (now * 4.0).sin() as f32;
    egui::Area::new(Id::new("finale_card"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            Frame::default()
                .fill(Color32::WHITE)
                .stroke(egui::Stroke::new(4.0, PINK))
                .corner_radius(CornerRadius::same(32))
                .inner_margin(Margin::symmetric(40, 36))
                .show(ui, |ui| {
                    ui.set_max_width(560.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(&app.bank.messages.finale)
                                .size(34.0)
                                .color(DEEP_PINK),
                        );
                        ui.add_space(16.0);
                        ui.label(RichText::new("❤").size(96.0 * pulse).color(PINK));
                    });
                });
        });
}

/// Confeti por encima de todo lo demás.
pub fn paint_confetti(app: &JourneyApp, ctx: &Context, now: f64) {
    if app.celebrations.is_empty() {
        return;
    }
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("confetti")));
    let screen = ctx.screen_rect();
    for confetti in &app.celebrations {
        confetti.paint(&painter, screen, now);
    }
}
