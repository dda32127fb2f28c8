use super::game::GameAction;
use crate::games::ChoiceGame;
use crate::judge::{Verdict, format_verdict_message};
use crate::model::RoundStatus;
use crate::ui::helpers::{FAIL_RED, PINK, card_button, status_line};
use egui::{Grid, Ui, vec2};

pub fn ui_choice(ui: &mut Ui, game: &ChoiceGame, status: RoundStatus) -> Option<GameAction> {
    let mut action = None;
    let cols = game.items.len().clamp(1, 4);
    let gap = 12.0;
    let card_w = (ui.available_width() - gap * (cols as f32 - 1.0)) / cols as f32;

    Grid::new("choice_grid")
        .num_columns(cols)
        .spacing([gap, gap])
        .show(ui, |ui| {
            for (i, item) in game.items.iter().enumerate() {
                let is_selected = game.selected == Some(item.id);
                let mark = match (is_selected, item.real) {
                    (true, true) => "\n💖",
                    (true, false) => "\n💔",
                    _ => "",
                };
                let text = format!("{}{}", item.caption, mark);
                let enabled = game.selected.is_none();
                if card_button(ui, text, vec2(card_w, 180.0), is_selected, enabled, Some(item.asset.as_str())) {
                    action = Some(GameAction::Pick(item.id));
                }
                if (i + 1) % cols == 0 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(20.0);
    match status {
        RoundStatus::Failed => status_line(ui, format_verdict_message(Verdict::Fail), FAIL_RED),
        RoundStatus::Success => status_line(ui, format_verdict_message(Verdict::Pass), PINK),
        _ => {}
    }
    action
}
