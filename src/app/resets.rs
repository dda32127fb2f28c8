use super::*;

impl JourneyApp {
    /// Vuelve al principio: nivel 1, mapa, sin aviso ni final pendientes.
    pub fn restart(&mut self) {
        self.timers.clear();
        self.progress = JourneyProgress::default();
        self.go_home();
        log::info!("viaje reiniciado");
    }
}
