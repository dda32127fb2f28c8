use crate::app::JourneyApp;
use crate::games::MiniGame;
use crate::ui::helpers::DEEP_PINK;
use crate::ui::layout::card_panel;
use egui::{Context, RichText};

/// Lo que el jugador hizo este frame; se aplica al terminar de pintar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Pick(usize),
    Click(usize),
    Toggle(usize),
    Submit,
    Continue,
}

pub fn ui_game(app: &mut JourneyApp, ctx: &Context, now: f64) {
    // copia del estado para pintar sin tener `app` prestado
    let (Some(active), Some(level)) = (app.active.clone(), app.active_level().cloned()) else {
        app.go_home();
        return;
    };

    let mut action = None;
    card_panel(ctx, 900.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new(format!("Level {}: {}", level.number, level.title))
                    .size(30.0)
                    .color(DEEP_PINK),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(&level.prompt).size(17.0));
        });
        ui.add_space(18.0);

        action = match &active.game {
            MiniGame::Choice(game) => super::choice::ui_choice(ui, game, active.status()),
            MiniGame::Sequence(game) => super::sequence::ui_sequence(ui, game, &active),
            MiniGame::Subset(game) => super::subset::ui_subset(ui, game, &active),
        };
    });

    match action {
        Some(GameAction::Pick(id)) => app.pick(id, now),
        Some(GameAction::Click(index)) => app.click_tile(index),
        Some(GameAction::Toggle(id)) => app.toggle(id),
        Some(GameAction::Submit) => app.submit(now),
        Some(GameAction::Continue) => app.continue_after_success(now),
        None => {}
    }
}
