use super::*;
use crate::round::RoundSignal;

impl JourneyApp {
    /// Un paso del bucle de UI: dispara los temporizadores vencidos, escucha
    /// al minijuego montado y limpia el confeti terminado.
    pub fn tick(&mut self, now: f64) {
        for event in self.timers.drain_due(now) {
            log::debug!("temporizador: {event:?}");
            match event {
                ControllerEvent::ClearMessage { generation } => self.clear_message(generation),
                ControllerEvent::FinishFinale => self.finish_finale(),
            }
        }

        let signal = self.active.as_mut().and_then(|g| g.poll(now));
        self.route_signal(signal, now);

        for c in &mut self.celebrations {
            c.tick(now);
        }
        self.celebrations.retain(|c| !c.is_finished(now));
    }

    /// Entrega la señal del minijuego al controlador.
    pub(crate) fn route_signal(&mut self, signal: Option<RoundSignal>, now: f64) {
        let Some(number) = self.active.as_ref().map(|g| g.level) else {
            return;
        };
        match signal {
            Some(RoundSignal::Success) => self.report_success(number, now),
            Some(RoundSignal::Fail) => self.report_failure(now),
            None => {}
        }
    }

    /// Próximo instante en el que algo cambia sin intervención del jugador.
    pub fn next_deadline(&self) -> Option<f64> {
        let round = self.active.as_ref().and_then(|g| g.round.next_due());
        match (self.timers.next_due(), round) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
