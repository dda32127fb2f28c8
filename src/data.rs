// src/data.rs

use crate::model::{FeedbackTimings, GameSpec, LAST_LEVEL, Level, LevelBank, Timings};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelDataError {
    #[error("no se pudo parsear el banco de niveles YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("nivel {level} mal definido: {reason}")]
    Invalid { level: usize, reason: String },
}

fn invalid(level: usize, reason: impl Into<String>) -> LevelDataError {
    LevelDataError::Invalid {
        level,
        reason: reason.into(),
    }
}

/// Carga el banco de niveles desde el YAML embebido
pub fn read_levels_embedded() -> Result<LevelBank, LevelDataError> {
    read_levels_from_str(include_str!("data/levels.yaml"))
}

/// Parsea y valida un banco de niveles.
pub fn read_levels_from_str(src: &str) -> Result<LevelBank, LevelDataError> {
    let bank: LevelBank = serde_yaml::from_str(src)?;
    validate_bank(&bank)?;
    log::debug!("banco de niveles cargado: {} niveles", bank.levels.len());
    Ok(bank)
}

/// Cada nivel debe tener una única respuesta correcta bien definida.
pub fn validate_bank(bank: &LevelBank) -> Result<(), LevelDataError> {
    validate_timings(&bank.timings)?;

    let numbers: Vec<usize> = bank.levels.iter().map(|l| l.number).collect();
    let expected: Vec<usize> = (1..=LAST_LEVEL).collect();
    if numbers != expected {
        return Err(invalid(0, format!("se esperaban los niveles {expected:?}, hay {numbers:?}")));
    }

    for level in &bank.levels {
        validate_level(level)?;
    }
    Ok(())
}

fn validate_timings(t: &Timings) -> Result<(), LevelDataError> {
    let all = [
        t.finale_secs,
        t.failure_toast_secs,
        t.celebration_secs,
        t.finale_celebration_secs,
    ];
    if all.iter().any(|s| !s.is_finite() || *s < 0.0) {
        return Err(invalid(0, "tiempos globales negativos o no finitos"));
    }
    Ok(())
}

fn validate_feedback(level: usize, f: &FeedbackTimings) -> Result<(), LevelDataError> {
    let all = [f.check_secs, f.success_secs, f.fail_secs];
    if all.iter().any(|s| !s.is_finite() || *s < 0.0) {
        return Err(invalid(level, "tiempos de feedback negativos o no finitos"));
    }
    Ok(())
}

fn unique_ids(level: usize, ids: impl Iterator<Item = usize>) -> Result<(), LevelDataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(level, format!("id {id} repetido")));
        }
    }
    Ok(())
}

fn validate_level(level: &Level) -> Result<(), LevelDataError> {
    let n = level.number;
    validate_feedback(n, &level.feedback)?;

    match &level.game {
        GameSpec::SingleChoice { items, .. } => {
            unique_ids(n, items.iter().map(|i| i.id))?;
            if items.len() < 2 {
                return Err(invalid(n, "hacen falta al menos dos opciones"));
            }
            let reals = items.iter().filter(|i| i.real).count();
            if reals != 1 {
                return Err(invalid(n, format!("debe haber exactamente una opción real, hay {reals}")));
            }
        }
        GameSpec::SequenceMatch { items } => {
            unique_ids(n, items.iter().map(|i| i.id))?;
            if items.len() < 2 {
                return Err(invalid(n, "hacen falta al menos dos piezas"));
            }
            let mut orders: Vec<usize> = items.iter().map(|i| i.order).collect();
            orders.sort_unstable();
            if !orders.iter().copied().eq(1..=items.len()) {
                return Err(invalid(n, "el orden canónico debe ser una permutación de 1..=N"));
            }
        }
        GameSpec::SubsetMatch { items } => {
            unique_ids(n, items.iter().map(|i| i.id))?;
            let significant = items.iter().filter(|i| i.significant).count();
            if significant == 0 || significant == items.len() {
                return Err(invalid(n, "el subconjunto correcto no puede ser vacío ni total"));
            }
        }
    }
    Ok(())
}
