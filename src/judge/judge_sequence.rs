use super::Verdict;

/// Acierta si los órdenes canónicos, leídos en orden de pantalla
/// (izquierda a derecha, arriba a abajo), son exactamente 1, 2, ..., N.
pub fn judge_sequence(orders: &[usize]) -> Verdict {
    Verdict::from_bool(orders.iter().copied().eq(1..=orders.len()))
}
