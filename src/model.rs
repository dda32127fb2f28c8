use serde::Deserialize;

/// Primer nivel jugable.
pub const FIRST_LEVEL: usize = 1;
/// Último nivel del viaje.
pub const LAST_LEVEL: usize = 4;
/// Valor de `unlocked_level` cuando ya se completó todo.
pub const ALL_COMPLETE: usize = LAST_LEVEL + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Game(usize), // número de nivel 1..=4
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Idle,
    Evaluating,
    Success,
    Failed,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f32, // porcentaje del ancho
    pub y: f32, // porcentaje del alto
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FeedbackTimings {
    /// Pausa en `Evaluating` antes de mostrar el veredicto (0 = inmediato).
    #[serde(default)]
    pub check_secs: f64,
    pub success_secs: f64,
    pub fail_secs: f64,
    /// Si es true, el éxito espera a que el jugador pulse "continuar".
    #[serde(default)]
    pub manual_continue: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChoiceItem {
    pub id: usize,
    pub caption: String,
    pub asset: String,
    #[serde(default)]
    pub real: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SequenceItem {
    pub id: usize,
    pub caption: String,
    pub asset: String,
    pub order: usize, // posición canónica 1..=N
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SubsetItem {
    pub id: usize,
    pub label: String,
    /// Texto que se descubre al acertar.
    pub reveal: String,
    #[serde(default)]
    pub significant: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameSpec {
    SingleChoice {
        #[serde(default)]
        shuffle: bool,
        items: Vec<ChoiceItem>,
    },
    SequenceMatch {
        items: Vec<SequenceItem>,
    },
    SubsetMatch {
        items: Vec<SubsetItem>,
    },
}

#[derive(Deserialize, Debug, Clone)]
pub struct Level {
    pub number: usize,
    pub title: String,
    pub prompt: String,
    pub map: MapPoint,
    pub feedback: FeedbackTimings,
    pub game: GameSpec,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    #[serde(default = "default_finale_secs")]
    pub finale_secs: f64,
    #[serde(default = "default_failure_toast_secs")]
    pub failure_toast_secs: f64,
    #[serde(default = "default_celebration_secs")]
    pub celebration_secs: f64,
    #[serde(default = "default_finale_celebration_secs")]
    pub finale_celebration_secs: f64,
}

fn default_finale_secs() -> f64 {
    6.0
}
fn default_failure_toast_secs() -> f64 {
    3.0
}
fn default_celebration_secs() -> f64 {
    3.0
}
fn default_finale_celebration_secs() -> f64 {
    8.0
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            finale_secs: default_finale_secs(),
            failure_toast_secs: default_failure_toast_secs(),
            celebration_secs: default_celebration_secs(),
            finale_celebration_secs: default_finale_celebration_secs(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Messages {
    pub map_title: String,
    pub failure: String,
    pub finale: String,
    pub destination: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LevelBank {
    #[serde(default)]
    pub timings: Timings,
    pub messages: Messages,
    pub destination: MapPoint,
    pub levels: Vec<Level>,
}
