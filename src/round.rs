// src/round.rs
//
// Esqueleto común de envío/feedback de los cuatro minijuegos: estado de la
// ronda y, como mucho, un paso diferido pendiente. Los temporizadores viven
// dentro de la ronda, así que mueren con la instancia del minijuego.

use crate::judge::Verdict;
use crate::model::{FeedbackTimings, RoundStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSignal {
    Success,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    /// Fin de la pausa "Checking...": se muestra el veredicto.
    Reveal { at: f64, verdict: Verdict },
    /// Aviso al controlador de progreso.
    Report { at: f64, verdict: Verdict },
}

#[derive(Debug, Clone)]
pub struct Round {
    status: RoundStatus,
    timings: FeedbackTimings,
    pending: Option<Pending>,
    reported: bool,
}

impl Round {
    pub fn new(timings: FeedbackTimings) -> Self {
        Self {
            status: RoundStatus::Idle,
            timings,
            pending: None,
            reported: false,
        }
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_idle(&self) -> bool {
        self.status == RoundStatus::Idle && !self.reported
    }

    /// Hay éxito en pantalla esperando el botón de continuar.
    pub fn awaiting_continue(&self) -> bool {
        self.status == RoundStatus::Success && self.pending.is_none() && !self.reported
    }

    pub fn next_due(&self) -> Option<f64> {
        match self.pending {
            Some(Pending::Reveal { at, .. } | Pending::Report { at, .. }) => Some(at),
            None => None,
        }
    }

    /// Registra un intento. Devuelve false si la ronda no admite envíos ahora.
    pub fn submit(&mut self, verdict: Verdict, now: f64) -> bool {
        if !self.is_idle() || self.pending.is_some() {
            log::warn!("envío ignorado: ronda en {:?}", self.status);
            return false;
        }
        log::debug!("veredicto {verdict:?}");
        if self.timings.check_secs > 0.0 {
            self.status = RoundStatus::Evaluating;
            self.pending = Some(Pending::Reveal {
                at: now + self.timings.check_secs,
                verdict,
            });
        } else {
            self.reveal(verdict, now);
        }
        true
    }

    fn reveal(&mut self, verdict: Verdict, at: f64) {
        match verdict {
            Verdict::Pass => {
                self.status = RoundStatus::Success;
                self.pending = if self.timings.manual_continue {
                    None
                } else {
                    Some(Pending::Report {
                        at: at + self.timings.success_secs,
                        verdict,
                    })
                };
            }
            Verdict::Fail => {
                self.status = RoundStatus::Failed;
                self.pending = Some(Pending::Report {
                    at: at + self.timings.fail_secs,
                    verdict,
                });
            }
        }
    }

    /// Avanza los pasos vencidos. Emite la señal una sola vez por ronda.
    pub fn poll(&mut self, now: f64) -> Option<RoundSignal> {
        while let Some(pending) = self.pending {
            match pending {
                Pending::Reveal { at, verdict } if at <= now => self.reveal(verdict, at),
                Pending::Report { at, verdict } if at <= now => {
                    self.pending = None;
                    if verdict == Verdict::Fail {
                        // la misma instancia puede reintentarse
                        self.status = RoundStatus::Idle;
                    }
                    return self.emit(verdict);
                }
                _ => return None,
            }
        }
        None
    }

    /// "Continuar" tras un éxito con avance manual.
    pub fn confirm(&mut self) -> Option<RoundSignal> {
        if !self.awaiting_continue() {
            return None;
        }
        self.emit(Verdict::Pass)
    }

    fn emit(&mut self, verdict: Verdict) -> Option<RoundSignal> {
        if self.reported {
            return None;
        }
        self.reported = true;
        Some(match verdict {
            Verdict::Pass => RoundSignal::Success,
            Verdict::Fail => RoundSignal::Fail,
        })
    }
}
