use super::game::GameAction;
use crate::games::{ActiveGame, SubsetGame};
use crate::judge::{Verdict, format_verdict_message};
use crate::model::RoundStatus;
use crate::ui::helpers::{FAIL_RED, PINK, SUCCESS_GREEN, action_button, card_button};
use egui::{Color32, Grid, Ui, vec2};

const COLS: usize = 2;

pub fn ui_subset(ui: &mut Ui, game: &SubsetGame, active: &ActiveGame) -> Option<GameAction> {
    let mut action = None;
    let reveal = active.reveal_labels();
    let idle = active.round.is_idle();

    let gap = 12.0;
    let card_w = (ui.available_width() - gap) / COLS as f32;

    Grid::new("subset_grid")
        .num_columns(COLS)
        .spacing([gap, gap])
        .show(ui, |ui| {
            for (i, item) in game.items.iter().enumerate() {
                let selected = game.selected.contains(&item.id);
                let heart = if selected { "💗" } else { "🤍" };
                let mut text = format!("{heart}  {}", item.label);
                if reveal {
                    text.push_str(&format!("\n{}", item.reveal));
                }
                let height = if reveal { 84.0 } else { 56.0 };
                if card_button(ui, text, vec2(card_w, height), selected, idle, None) {
                    action = Some(GameAction::Toggle(item.id));
                }
                if (i + 1) % COLS == 0 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(20.0);
    if active.round.awaiting_continue() {
        if action_button(ui, "Go back to Home Screen", PINK, true) {
            action = Some(GameAction::Continue);
        }
        return action;
    }

    let (label, fill) = submit_label(active.status());
    if action_button(ui, label, fill, active.can_submit()) {
        action = Some(GameAction::Submit);
    }
    action
}

/// Texto y color del botón de envío según el estado de la ronda.
fn submit_label(status: RoundStatus) -> (&'static str, Color32) {
    match status {
        RoundStatus::Evaluating => ("Checking...", PINK),
        RoundStatus::Failed => (format_verdict_message(Verdict::Fail), FAIL_RED),
        // ya confirmado: el overlay final tapa el nivel hasta volver al mapa
        RoundStatus::Success => (format_verdict_message(Verdict::Pass), SUCCESS_GREEN),
        RoundStatus::Idle => ("✔ Submit Answers", PINK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_levels_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn confirmed_success_keeps_showing_correct() {
        let bank = read_levels_embedded().expect("banco válido");
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = ActiveGame::mount(&bank.levels[3], &mut rng);
        for id in [1, 3, 4, 5, 7] {
            game.toggle(id);
        }
        assert!(game.submit(0.0));
        game.poll(1.0);
        assert!(game.confirm().is_some());

        assert!(!game.round.awaiting_continue());
        let (label, fill) = submit_label(game.status());
        assert_eq!(label, format_verdict_message(Verdict::Pass));
        assert_eq!(fill, SUCCESS_GREEN);
        assert!(!game.can_submit());
    }

    #[test]
    fn idle_round_offers_submit() {
        assert_eq!(submit_label(RoundStatus::Idle).0, "✔ Submit Answers");
        assert_eq!(submit_label(RoundStatus::Failed).1, FAIL_RED);
    }
}
