pub mod choice;
pub mod game;
pub mod map;
pub mod overlays;
pub mod sequence;
pub mod subset;
