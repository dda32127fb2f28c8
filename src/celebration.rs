// src/celebration.rs
//
// Efecto de confeti: ráfagas cada 0.25 s durante `duration` segundos, cada
// una con 50 × (tiempo restante / duración) partículas desde un origen
// aleatorio. El controlador lo lanza y se olvida.

use egui::{Color32, Painter, Pos2, Rect, pos2, vec2};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const BURST_EVERY: f64 = 0.25;
const MAX_BURST: f64 = 50.0;
const START_VELOCITY: f32 = 0.9; // fracción de pantalla por segundo
const GRAVITY: f32 = 1.2;
const PARTICLE_LIFE: f64 = 1.0;

const PALETTE: [Color32; 5] = [
    Color32::from_rgb(236, 72, 153),
    Color32::from_rgb(244, 114, 182),
    Color32::from_rgb(239, 68, 68),
    Color32::from_rgb(253, 224, 71),
    Color32::from_rgb(167, 139, 250),
];

#[derive(Debug, Clone)]
struct Particle {
    pos: Pos2, // coordenadas normalizadas 0..1
    vel: egui::Vec2,
    born: f64,
    color: Color32,
    size: f32,
}

#[derive(Debug, Clone)]
pub struct Confetti {
    started: f64,
    duration: f64,
    next_burst: f64,
    last_tick: f64,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Confetti {
    pub fn new(now: f64, duration: f64, seed: u64) -> Self {
        Self {
            started: now,
            duration: duration.max(0.0),
            next_burst: now,
            last_tick: now,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn ends_at(&self) -> f64 {
        self.started + self.duration
    }

    /// Terminado cuando ya no quedan ráfagas ni partículas vivas.
    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.ends_at() && self.particles.is_empty()
    }

    pub fn tick(&mut self, now: f64) {
        let dt = (now - self.last_tick).max(0.0) as f32;
        self.last_tick = now;

        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.vel *= 1.0 - (0.6 * dt).min(1.0);
            p.pos += p.vel * dt;
        }
        self.particles.retain(|p| now - p.born < PARTICLE_LIFE);

        while self.next_burst <= now {
            let at = self.next_burst;
            let time_left = self.ends_at() - at;
            if time_left <= 0.0 {
                break;
            }
            if now - at < PARTICLE_LIFE {
                self.burst(at, time_left);
            }
            self.next_burst += BURST_EVERY;
        }
    }

    fn burst(&mut self, at: f64, time_left: f64) {
        let count = (MAX_BURST * (time_left / self.duration)) as usize;
        let origin = pos2(self.rng.gen_range(0.0..1.0), self.rng.gen_range(-0.2..0.8));
        for _ in 0..count {
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = START_VELOCITY * self.rng.gen_range(0.5..1.0);
            let color = PALETTE[self.rng.gen_range(0..PALETTE.len())];
            self.particles.push(Particle {
                pos: origin,
                vel: vec2(angle.cos(), angle.sin()) * speed,
                born: at,
                color,
                size: self.rng.gen_range(3.0..6.0),
            });
        }
    }

    pub fn paint(&self, painter: &Painter, screen: Rect, now: f64) {
        for p in &self.particles {
            let fade = (1.0 - ((now - p.born) / PARTICLE_LIFE) as f32).clamp(0.0, 1.0);
            let center = pos2(
                screen.left() + p.pos.x * screen.width(),
                screen.top() + p.pos.y * screen.height(),
            );
            painter.rect_filled(
                Rect::from_center_size(center, vec2(p.size, p.size * 0.6)),
                egui::CornerRadius::ZERO,
                p.color.gamma_multiply(fade),
            );
        }
    }
}
