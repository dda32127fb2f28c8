use super::Verdict;
use crate::model::SubsetItem;
use std::collections::BTreeSet;

/// Acierta solo si la selección coincide exactamente con el conjunto de
/// elementos significativos: sin extras y sin omisiones.
pub fn judge_subset(items: &[SubsetItem], selected: &BTreeSet<usize>) -> Verdict {
    let correct: BTreeSet<usize> = items
        .iter()
        .filter(|item| item.significant)
        .map(|item| item.id)
        .collect();
    Verdict::from_bool(*selected == correct)
}
