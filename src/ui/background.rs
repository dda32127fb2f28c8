// Fondo decorativo: corazones que suben despacio. Solo presentación.

use egui::{Align2, Color32, Context, FontId, LayerId, pos2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEARTS: u64 = 50;
const BACKDROP: Color32 = Color32::from_rgb(252, 231, 243);
const HEART: Color32 = Color32::from_rgba_premultiplied(120, 60, 90, 90);

struct Heart {
    size: f32,
    left: f32,     // fracción del ancho
    drift: f32,    // desplazamiento lateral total
    duration: f64, // segundos en cruzar la pantalla
    delay: f64,
}

/// Parámetros fijos por índice, iguales en cada frame.
fn heart(i: u64) -> Heart {
    let mut rng = StdRng::seed_from_u64(i);
    Heart {
        size: rng.gen_range(10.0..30.0),
        left: rng.gen_range(0.0..1.0),
        drift: rng.gen_range(-0.05..0.05),
        duration: rng.gen_range(10.0..20.0),
        delay: rng.gen_range(0.0..10.0),
    }
}

pub fn paint_background(ctx: &Context, now: f64) {
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(LayerId::background());
    let fill = if ctx.style().visuals.dark_mode {
        ctx.style().visuals.panel_fill
    } else {
        BACKDROP
    };
    painter.rect_filled(screen, egui::CornerRadius::ZERO, fill);

    for i in 0..HEARTS {
        let h = heart(i);
        let elapsed = now - h.delay;
        if elapsed < 0.0 {
            continue;
        }
        let t = ((elapsed % h.duration) / h.duration) as f32;
        // escala 0 -> 1 -> 1 -> 0 a lo largo del recorrido
        let scale = (t * 3.0).min(1.0).min((1.0 - t) * 3.0);
        let x = screen.left() + (h.left + h.drift * t) * screen.width();
        let y = screen.bottom() + 0.1 * screen.height() - t * 1.2 * screen.height();
        painter.text(
            pos2(x, y),
            Align2::CENTER_CENTER,
            "❤",
            FontId::proportional((h.size * scale).max(1.0)),
            HEART,
        );
    }
}
