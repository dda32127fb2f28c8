use super::*;
use crate::model::{ALL_COMPLETE, LAST_LEVEL};
use rand::Rng;

impl JourneyApp {
    /// Éxito en un nivel. Solo avanza si es el nivel frontera; repetir uno
    /// ya completado no retrocede ni duplica el avance.
    pub fn report_success(&mut self, number: usize, now: f64) {
        let finale = number == LAST_LEVEL;
        let duration = if finale {
            self.bank.timings.finale_celebration_secs
        } else {
            self.bank.timings.celebration_secs
        };
        self.celebrate(now, duration);

        if finale {
            // el minijuego sigue montado bajo el overlay hasta que acabe
            self.progress.show_finale = true;
            self.timers
                .schedule(now, self.bank.timings.finale_secs, ControllerEvent::FinishFinale);
            log::info!("nivel {number} superado: ¡final!");
            return;
        }

        if self.progress.unlocked_level == number {
            self.progress.unlocked_level = number + 1;
            log::info!("nivel {} desbloqueado", number + 1);
        } else {
            log::debug!("nivel {number} repetido, sin cambios de progreso");
        }
        self.go_home();
    }

    /// Fallo: vuelta inmediata al mapa; el aviso se borra solo más tarde.
    pub fn report_failure(&mut self, now: f64) {
        self.message_generation += 1;
        self.progress.transient_message = Some(self.bank.messages.failure.clone());
        self.timers.schedule(
            now,
            self.bank.timings.failure_toast_secs,
            ControllerEvent::ClearMessage {
                generation: self.message_generation,
            },
        );
        log::info!("intento fallido en {:?}", self.state);
        self.go_home();
    }

    pub(crate) fn finish_finale(&mut self) {
        if !self.progress.show_finale {
            return;
        }
        self.progress.show_finale = false;
        self.progress.unlocked_level = ALL_COMPLETE;
        self.go_home();
        log::info!("viaje completado");
    }

    pub(crate) fn clear_message(&mut self, generation: u64) {
        if generation == self.message_generation {
            self.progress.transient_message = None;
        }
    }

    /// Lanza el confeti y se olvida de él.
    fn celebrate(&mut self, now: f64, duration: f64) {
        let seed = self.rng.gen_range(0..u64::MAX);
        self.celebrations.push(Confetti::new(now, duration, seed));
    }
}
