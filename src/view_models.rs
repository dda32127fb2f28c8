// src/view_models.rs

use crate::model::{LAST_LEVEL, MapPoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    Locked,
    Unlocked,
    Completed,
}

#[derive(Clone, Debug)]
pub struct LevelNode {
    pub number: usize,    // número "humano" (1,2,3,4)
    pub title: String,
    pub pos: MapPoint,
    pub state: NodeState,
}

/// Clasifica un nodo del mapa solo a partir de `unlocked_level`.
pub fn node_state(unlocked_level: usize, number: usize) -> NodeState {
    if unlocked_level > number {
        NodeState::Completed
    } else if unlocked_level >= number {
        NodeState::Unlocked
    } else {
        NodeState::Locked
    }
}

/// Posición del marcador (la bici): sobre el nodo `min(unlocked, 4)` mientras
/// quede algo por jugar, y en el destino final cuando todo está completo.
pub fn marker_position(unlocked_level: usize, nodes: &[MapPoint], destination: MapPoint) -> MapPoint {
    if unlocked_level > LAST_LEVEL {
        return destination;
    }
    let idx = unlocked_level.clamp(1, LAST_LEVEL) - 1;
    nodes.get(idx).copied().unwrap_or(destination)
}

impl LevelNode {
    pub fn is_selectable(&self) -> bool {
        self.state != NodeState::Locked
    }

    pub fn icon(&self) -> &'static str {
        match self.state {
            NodeState::Completed => "✔",
            NodeState::Unlocked => "❤",
            NodeState::Locked => "🔒",
        }
    }

    pub fn label(&self) -> String {
        match self.state {
            NodeState::Completed => format!("{} ✅", self.title),
            NodeState::Unlocked => self.title.clone(),
            NodeState::Locked => format!("{} 🔒", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<MapPoint> {
        [(10.0, 85.0), (30.0, 60.0), (50.0, 35.0), (70.0, 10.0)]
            .into_iter()
            .map(|(x, y)| MapPoint { x, y })
            .collect()
    }

    const DEST: MapPoint = MapPoint { x: 95.0, y: 10.0 };

    #[test]
    fn node_states_follow_unlocked_level() {
        assert_eq!(node_state(1, 1), NodeState::Unlocked);
        assert_eq!(node_state(1, 2), NodeState::Locked);
        assert_eq!(node_state(3, 1), NodeState::Completed);
        assert_eq!(node_state(3, 3), NodeState::Unlocked);
        assert_eq!(node_state(3, 4), NodeState::Locked);
        for n in 1..=4 {
            assert_eq!(node_state(5, n), NodeState::Completed);
        }
    }

    #[test]
    fn marker_sits_on_current_node() {
        let nodes = nodes();
        for unlocked in 1..=4 {
            assert_eq!(marker_position(unlocked, &nodes, DEST), nodes[unlocked - 1]);
        }
    }

    #[test]
    fn marker_moves_to_destination_when_all_complete() {
        assert_eq!(marker_position(5, &nodes(), DEST), DEST);
    }

    #[test]
    fn labels_reflect_state() {
        let node = LevelNode {
            number: 2,
            title: "My Masterpiece".into(),
            pos: MapPoint { x: 0.0, y: 0.0 },
            state: NodeState::Locked,
        };
        assert!(!node.is_selectable());
        assert_eq!(node.label(), "My Masterpiece 🔒");
    }
}
