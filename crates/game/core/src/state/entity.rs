use super::{EntityId, Position};

/// One controllable actor tracked by a session.
///
/// # Invariants
///
/// - `health <= max_health`
/// - `last_path` is never empty and ends at `position`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EntitySlot {
    pub id: EntityId,
    pub position: Position,
    /// Most recently accepted movement path, kept for client replay.
    pub last_path: Vec<Position>,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
}

impl EntitySlot {
    /// Spawns an entity at full health with a single-cell path.
    pub fn spawn(id: EntityId, position: Position, max_health: u32, strength: u32) -> Self {
        Self {
            id,
            position,
            last_path: vec![position],
            health: max_health,
            max_health,
            strength,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Places the entity without animation history.
    pub fn teleport(&mut self, position: Position) {
        self.position = position;
        self.last_path.clear();
        self.last_path.push(position);
    }

    /// Subtracts `amount`, clamping at zero. Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }

    pub(crate) fn holds_invariants(&self) -> bool {
        self.health <= self.max_health && self.last_path.last() == Some(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut slot = EntitySlot::spawn(EntityId(1), Position::ORIGIN, 10, 5);

        assert_eq!(slot.take_damage(7), 7);
        assert_eq!(slot.health, 3);
        assert_eq!(slot.take_damage(7), 3);
        assert_eq!(slot.health, 0);
        assert!(!slot.is_alive());
    }

    #[test]
    fn teleport_resets_path() {
        let mut slot = EntitySlot::spawn(EntityId(0), Position::ORIGIN, 10, 5);
        slot.last_path = vec![Position::ORIGIN, Position::new(1, 0)];
        slot.position = Position::new(1, 0);

        slot.teleport(Position::new(-3, 8));

        assert_eq!(slot.last_path, vec![Position::new(-3, 8)]);
        assert!(slot.holds_invariants());
    }
}
