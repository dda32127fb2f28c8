use super::*;

// Acciones del jugador dentro del minijuego montado.
impl JourneyApp {
    pub fn pick(&mut self, id: usize, now: f64) {
        if let Some(game) = self.active.as_mut() {
            game.pick(id, now);
        }
    }

    pub fn click_tile(&mut self, index: usize) {
        if let Some(game) = self.active.as_mut() {
            game.click_tile(index);
        }
    }

    pub fn toggle(&mut self, id: usize) {
        if let Some(game) = self.active.as_mut() {
            game.toggle(id);
        }
    }

    pub fn submit(&mut self, now: f64) {
        if let Some(game) = self.active.as_mut() {
            game.submit(now);
        }
    }

    /// Botón "Go back to Home Screen" tras acertar el nivel 4.
    pub fn continue_after_success(&mut self, now: f64) {
        let signal = self.active.as_mut().and_then(|g| g.confirm());
        self.route_signal(signal, now);
    }
}
