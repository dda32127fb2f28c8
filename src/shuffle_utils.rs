use rand::Rng;
use rand::seq::SliceRandom;

/// Baraja uniformemente (Fisher-Yates). La fuente aleatoria es inyectable
/// para poder fijar la semilla en tests.
pub fn shuffle_items<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Versión que consume y devuelve el vector barajado.
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle_items(&mut items, rng);
    items
}
