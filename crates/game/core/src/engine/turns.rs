use crate::state::{EntityId, Session};

/// Finds the next living entity after `current` in slot order.
///
/// Probes `(current + k) mod N` for `k = 1..=N`, so the current owner is the
/// last candidate considered. Returns `None` when every slot is defeated.
pub fn next_alive_owner(session: &Session, current: EntityId) -> Option<EntityId> {
    let count = session.entity_count();
    if count == 0 {
        return None;
    }

    (1..=count)
        .map(|offset| (current.index() + offset) % count)
        .find(|&index| session.entities[index].is_alive())
        .map(EntityId::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn session_with_health(health: [u32; 4]) -> Session {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        for (slot, hp) in session.entities.iter_mut().zip(health) {
            slot.health = hp;
        }
        session
    }

    #[test]
    fn picks_the_following_slot_when_alive() {
        let session = session_with_health([10, 10, 10, 10]);
        assert_eq!(next_alive_owner(&session, EntityId(0)), Some(EntityId(1)));
        assert_eq!(next_alive_owner(&session, EntityId(3)), Some(EntityId(0)));
    }

    #[test]
    fn skips_defeated_slots() {
        let session = session_with_health([10, 0, 0, 10]);
        assert_eq!(next_alive_owner(&session, EntityId(0)), Some(EntityId(3)));
        assert_eq!(next_alive_owner(&session, EntityId(3)), Some(EntityId(0)));
    }

    #[test]
    fn wraps_back_to_a_lone_survivor() {
        let session = session_with_health([0, 0, 7, 0]);
        assert_eq!(next_alive_owner(&session, EntityId(2)), Some(EntityId(2)));
        assert_eq!(next_alive_owner(&session, EntityId(0)), Some(EntityId(2)));
    }

    #[test]
    fn none_when_everyone_is_down() {
        let session = session_with_health([0, 0, 0, 0]);
        assert_eq!(next_alive_owner(&session, EntityId(1)), None);
    }
}
