use super::*;

impl JourneyApp {
    /// Entra en un nivel desbloqueado. Un nivel bloqueado no hace nada.
    pub fn select_level(&mut self, number: usize) -> bool {
        if !self.is_level_unlocked(number) {
            log::warn!(
                "nivel {number} bloqueado (desbloqueado hasta {})",
                self.progress.unlocked_level
            );
            return false;
        }
        let Some(level) = self.bank.levels.iter().find(|l| l.number == number) else {
            log::warn!("nivel {number} no existe en el banco");
            return false;
        };
        // cada montaje es una instancia nueva, barajada de nuevo si toca
        let game = ActiveGame::mount(level, &mut self.rng);
        self.active = Some(game);
        self.state = AppState::Game(number);
        log::info!("entrando en el nivel {number}");
        true
    }

    /// Vuelve al mapa y descarta el minijuego montado (y sus temporizadores).
    pub fn go_home(&mut self) {
        self.active = None;
        self.state = AppState::Home;
    }
}
