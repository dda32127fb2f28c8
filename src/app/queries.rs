use super::*;
use crate::model::Level;

impl JourneyApp {
    /// Devuelve referencia a un nivel por su número "humano"
    pub fn level(&self, number: usize) -> Option<&Level> {
        self.bank.levels.iter().find(|l| l.number == number)
    }

    /// Nivel del minijuego montado, si lo hay
    pub fn active_level(&self) -> Option<&Level> {
        self.active.as_ref().and_then(|g| self.level(g.level))
    }
}
