mod background;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::JourneyApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;
use std::time::Duration;

/// Ritmo de repintado mientras hay animación de fondo.
const FRAME_SECS: f64 = 1.0 / 30.0;

impl App for JourneyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.tick(now);

        background::paint_background(ctx, now);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views
        match self.state {
            AppState::Home => views::map::ui_map(self, ctx),
            AppState::Game(_) => views::game::ui_game(self, ctx, now),
        }

        views::overlays::ui_failure_toast(self, ctx);
        if self.progress.show_finale {
            views::overlays::ui_finale(self, ctx, now);
        }
        views::overlays::paint_confetti(self, ctx, now);

        // el fondo siempre se mueve; si vence algo antes, repintar antes
        let wait = self
            .next_deadline()
            .map(|due| (due - now).max(0.0))
            .unwrap_or(FRAME_SECS)
            .min(FRAME_SECS);
        ctx.request_repaint_after(Duration::from_secs_f64(wait));
    }
}
