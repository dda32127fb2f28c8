use crate::celebration::Confetti;
use crate::games::ActiveGame;
use crate::model::{AppState, FIRST_LEVEL, LevelBank};
use crate::timers::Timers;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{LevelNode, NodeState};

/// Estado de progreso de la sesión. Solo vive en memoria.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyProgress {
    /// 1..=5; 5 significa "todo completado".
    pub unlocked_level: usize,
    pub transient_message: Option<String>,
    pub show_finale: bool,
}

impl Default for JourneyProgress {
    fn default() -> Self {
        Self {
            unlocked_level: FIRST_LEVEL,
            transient_message: None,
            show_finale: false,
        }
    }
}

/// Callbacks diferidos propios del controlador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Borra el aviso de fallo, solo si sigue siendo el mismo (generación).
    ClearMessage { generation: u64 },
    /// Fin del overlay final.
    FinishFinale,
}

pub struct JourneyApp {
    pub bank: LevelBank,
    pub progress: JourneyProgress,
    pub state: AppState,
    pub active: Option<ActiveGame>,
    pub celebrations: Vec<Confetti>,
    timers: Timers<ControllerEvent>,
    message_generation: u64,
    rng: StdRng,
}

impl JourneyApp {
    pub fn new(bank: LevelBank) -> Self {
        Self::with_rng(bank, StdRng::from_entropy())
    }

    /// Igual que `new` pero con la fuente aleatoria inyectada (tests).
    pub fn with_rng(bank: LevelBank, rng: StdRng) -> Self {
        Self {
            bank,
            progress: JourneyProgress::default(),
            state: AppState::Home,
            active: None,
            celebrations: Vec::new(),
            timers: Timers::new(),
            message_generation: 0,
            rng,
        }
    }
}
