use super::Verdict;
use crate::model::ChoiceItem;

/// Acierta si la opción elegida es la marcada como "real".
/// Un id que no existe cuenta como fallo.
pub fn judge_choice(items: &[ChoiceItem], selected_id: usize) -> Verdict {
    Verdict::from_bool(
        items
            .iter()
            .find(|item| item.id == selected_id)
            .is_some_and(|item| item.real),
    )
}
