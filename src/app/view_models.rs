use super::*;
use crate::model::MapPoint;
use crate::view_models::{marker_position, node_state};

impl JourneyApp {
    pub fn level_nodes(&self) -> Vec<LevelNode> {
        let unlocked = self.progress.unlocked_level;
        self.bank
            .levels
            .iter()
            .map(|lvl| LevelNode {
                number: lvl.number,
                title: lvl.title.clone(),
                pos: lvl.map,
                state: node_state(unlocked, lvl.number),
            })
            .collect()
    }

    pub fn marker(&self) -> MapPoint {
        let points: Vec<MapPoint> = self.bank.levels.iter().map(|l| l.map).collect();
        marker_position(self.progress.unlocked_level, &points, self.bank.destination)
    }
}
