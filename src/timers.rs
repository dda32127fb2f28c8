// src/timers.rs
//
// Planificador de callbacks diferidos en el único hilo de la UI.
// El tiempo es el reloj de egui (`InputState::time`, segundos en f64).

#[derive(Debug)]
struct Entry<E> {
    /// Orden de alta; desempata vencimientos iguales.
    seq: u64,
    due: f64,
    event: E,
}

#[derive(Debug)]
pub struct Timers<E> {
    next_seq: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programa `event` para dentro de `delay` segundos.
    pub fn schedule(&mut self, now: f64, delay: f64, event: E) {
        self.entries.push(Entry {
            seq: self.next_seq,
            due: now + delay.max(0.0),
            event,
        });
        self.next_seq += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Próximo vencimiento (para pedir repintado a tiempo).
    pub fn next_due(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.due).reduce(f64::min)
    }

    /// Saca los eventos vencidos, ordenados por vencimiento (y por orden de alta si empatan).
    pub fn drain_due(&mut self, now: f64) -> Vec<E> {
        let (mut due, pending): (Vec<Entry<E>>, Vec<Entry<E>>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = pending;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|e| e.event).collect()
    }
}
