pub mod app;
pub mod celebration;
pub mod data;
pub mod games;
pub mod judge;
pub mod model;
pub mod round;
pub mod shuffle_utils;
pub mod timers;
pub mod ui;
pub mod view_models;

pub use app::JourneyApp;
