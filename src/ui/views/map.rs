use crate::app::JourneyApp;
use crate::model::MapPoint;
use crate::ui::helpers::{DEEP_PINK, PINK};
use crate::ui::layout::card_panel;
use crate::view_models::NodeState;
use egui::{
    Align, Align2, Button, Color32, Context, FontId, Id, Layout, Pos2, Rect, RichText, Sense,
    Shape, Stroke, pos2, vec2,
};

const MAP_HEIGHT: f32 = 520.0;
const NODE_SIZE: f32 = 64.0;

pub fn ui_map(app: &mut JourneyApp, ctx: &Context) {
    let nodes = app.level_nodes();
    let marker = app.marker();
    let complete = app.is_journey_complete();
    let destination = app.bank.destination;
    let title = app.bank.messages.map_title.clone();
    let destination_label = app.bank.messages.destination.clone();

    let mut selected = None;
    let mut restart = false;

    card_panel(ctx, 760.0, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(RichText::new("Restart Game").color(PINK)).clicked() {
                restart = true;
            }
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.heading(RichText::new(&title).size(32.0).color(DEEP_PINK));
            });
        });
        ui.add_space(12.0);

        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(vec2(width, MAP_HEIGHT), Sense::hover());
        // margen para que los nodos de los bordes no se corten
        let inner = rect.shrink2(vec2(48.0, 48.0));
        let to_screen = |p: MapPoint| -> Pos2 {
            pos2(
                inner.left() + p.x / 100.0 * inner.width(),
                inner.top() + p.y / 100.0 * inner.height(),
            )
        };
        let painter = ui.painter_at(rect);

        // Camino punteado nodo a nodo hasta el destino
        let mut path: Vec<Pos2> = nodes.iter().map(|n| to_screen(n.pos)).collect();
        path.push(to_screen(destination));
        painter.extend(Shape::dashed_line(
            &path,
            Stroke::new(2.0, PINK.gamma_multiply(0.35)),
            6.0,
            6.0,
        ));

        for node in &nodes {
            let center = to_screen(node.pos);
            let (fill, text) = match node.state {
                NodeState::Completed => (PINK, Color32::WHITE),
                NodeState::Unlocked => (Color32::WHITE, PINK),
                NodeState::Locked => (Color32::LIGHT_GRAY, Color32::GRAY),
            };
            let button = Button::new(RichText::new(node.icon()).size(26.0).color(text))
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(32));
            let response = ui
                .put(Rect::from_center_size(center, vec2(NODE_SIZE, NODE_SIZE)), button)
                .on_hover_text(node.label());
            if response.clicked() && node.is_selectable() {
                selected = Some(node.number);
            }
            painter.text(
                center + vec2(0.0, NODE_SIZE / 2.0 + 8.0),
                Align2::CENTER_TOP,
                &node.title,
                FontId::proportional(14.0),
                DEEP_PINK,
            );
        }

        if complete {
            let center = to_screen(destination);
            painter.circle_filled(center, 40.0, Color32::from_rgb(239, 68, 68));
            painter.text(center, Align2::CENTER_CENTER, "❤", FontId::proportional(40.0), Color32::WHITE);
            painter.text(
                center + vec2(0.0, 48.0),
                Align2::CENTER_TOP,
                &destination_label,
                FontId::proportional(18.0),
                DEEP_PINK,
            );
        }

        // La bici se desliza hacia la posición derivada de `unlocked_level`
        let target = to_screen(marker);
        let x = ctx.animate_value_with_time(Id::new("bike_x"), target.x, 0.8);
        let y = ctx.animate_value_with_time(Id::new("bike_y"), target.y, 0.8);
        let bike = pos2(x, y);
        painter.circle_filled(bike, 24.0, Color32::WHITE);
        painter.text(bike, Align2::CENTER_CENTER, "🚲", FontId::proportional(28.0), DEEP_PINK);
    });

    if restart {
        app.restart();
    } else if let Some(number) = selected {
        app.select_level(number);
    }
}
