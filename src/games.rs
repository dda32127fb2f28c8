// src/games.rs
//
// Estado local de cada minijuego montado. Se crea al entrar en un nivel y se
// descarta al volver al mapa; nada se arrastra entre intentos.

use crate::judge::{Verdict, judge_choice, judge_sequence, judge_subset};
use crate::model::{ChoiceItem, GameSpec, Level, RoundStatus, SequenceItem, SubsetItem};
use crate::round::{Round, RoundSignal};
use crate::shuffle_utils::shuffled;
use rand::Rng;
use std::collections::BTreeSet;

/// Nivel 1 y 2: elegir la única opción real.
#[derive(Debug, Clone)]
pub struct ChoiceGame {
    pub items: Vec<ChoiceItem>,
    pub selected: Option<usize>,
}

/// Nivel 3: ordenar piezas intercambiándolas de dos en dos.
#[derive(Debug, Clone)]
pub struct SequenceGame {
    pub tiles: Vec<SequenceItem>,
    /// Índice de la pieza "armada" para el intercambio.
    pub armed: Option<usize>,
}

/// Nivel 4: marcar exactamente los elementos significativos.
#[derive(Debug, Clone)]
pub struct SubsetGame {
    pub items: Vec<SubsetItem>,
    pub selected: BTreeSet<usize>,
}

#[derive(Debug, Clone)]
pub enum MiniGame {
    Choice(ChoiceGame),
    Sequence(SequenceGame),
    Subset(SubsetGame),
}

impl ChoiceGame {
    pub fn evaluate(&self, selected_id: usize) -> Verdict {
        judge_choice(&self.items, selected_id)
    }
}

impl SequenceGame {
    pub fn orders(&self) -> Vec<usize> {
        self.tiles.iter().map(|t| t.order).collect()
    }

    pub fn evaluate(&self) -> Verdict {
        judge_sequence(&self.orders())
    }

    /// Primer clic arma la pieza, el segundo intercambia y desarma.
    /// Pulsar dos veces la misma pieza solo la desarma.
    pub fn click(&mut self, index: usize) {
        if index >= self.tiles.len() {
            return;
        }
        match self.armed.take() {
            None => self.armed = Some(index),
            Some(first) => self.tiles.swap(first, index),
        }
    }
}

impl SubsetGame {
    pub fn evaluate(&self) -> Verdict {
        judge_subset(&self.items, &self.selected)
    }

    pub fn toggle(&mut self, id: usize) {
        if !self.items.iter().any(|i| i.id == id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }
}

impl MiniGame {
    /// Monta el minijuego de un nivel. Baraja donde toca en cada montaje.
    pub fn mount<R: Rng + ?Sized>(spec: &GameSpec, rng: &mut R) -> Self {
        match spec {
            GameSpec::SingleChoice { shuffle, items } => MiniGame::Choice(ChoiceGame {
                items: if *shuffle {
                    shuffled(items.clone(), rng)
                } else {
                    items.clone()
                },
                selected: None,
            }),
            GameSpec::SequenceMatch { items } => MiniGame::Sequence(SequenceGame {
                tiles: shuffled(items.clone(), rng),
                armed: None,
            }),
            GameSpec::SubsetMatch { items } => MiniGame::Subset(SubsetGame {
                items: items.clone(),
                selected: BTreeSet::new(),
            }),
        }
    }
}

/// Instancia montada: nivel + estado del minijuego + ronda de feedback.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    pub level: usize,
    pub game: MiniGame,
    pub round: Round,
}

impl ActiveGame {
    pub fn mount<R: Rng + ?Sized>(level: &Level, rng: &mut R) -> Self {
        Self {
            level: level.number,
            game: MiniGame::mount(&level.game, rng),
            round: Round::new(level.feedback),
        }
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    /// Elección única: la primera es definitiva.
    pub fn pick(&mut self, id: usize, now: f64) -> bool {
        let MiniGame::Choice(game) = &mut self.game else {
            return false;
        };
        if game.selected.is_some() {
            return false;
        }
        let verdict = game.evaluate(id);
        if !self.round.submit(verdict, now) {
            return false;
        }
        game.selected = Some(id);
        true
    }

    pub fn click_tile(&mut self, index: usize) {
        if !self.round.is_idle() {
            return;
        }
        if let MiniGame::Sequence(game) = &mut self.game {
            game.click(index);
        }
    }

    pub fn toggle(&mut self, id: usize) {
        if !self.round.is_idle() {
            return;
        }
        if let MiniGame::Subset(game) = &mut self.game {
            game.toggle(id);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.round.is_idle()
            && match &self.game {
                MiniGame::Choice(_) => false,
                MiniGame::Sequence(game) => !game.tiles.is_empty(),
                MiniGame::Subset(game) => !game.selected.is_empty(),
            }
    }

    /// Envío explícito (niveles 3 y 4).
    pub fn submit(&mut self, now: f64) -> bool {
        if !self.can_submit() {
            return false;
        }
        let verdict = match &mut self.game {
            MiniGame::Choice(_) => return false,
            MiniGame::Sequence(game) => {
                game.armed = None;
                game.evaluate()
            }
            MiniGame::Subset(game) => game.evaluate(),
        };
        self.round.submit(verdict, now)
    }

    /// Nivel 4: las etiquetas ocultas se muestran tras acertar.
    pub fn reveal_labels(&self) -> bool {
        matches!(self.game, MiniGame::Subset(_)) && self.round.status() == RoundStatus::Success
    }

    pub fn confirm(&mut self) -> Option<RoundSignal> {
        self.round.confirm()
    }

    pub fn poll(&mut self, now: f64) -> Option<RoundSignal> {
        self.round.poll(now)
    }
}
