use game_core::{
    EntityId, GameConfig, GameError, Phase, Position, Session, SessionEngine, SessionError,
};

fn p(q: i32, r: i32) -> Position {
    Position::new(q, r)
}

fn new_session() -> Session {
    Session::new(&GameConfig::default()).expect("default config is valid")
}

/// Move, attack, hand off: the reference turn from a fresh session.
#[test]
fn reference_turn_plays_out() {
    let mut session = new_session();
    let mut engine = SessionEngine::new(&mut session);

    let moved = engine
        .submit_move(EntityId(0), vec![p(4, 4), p(5, 4)])
        .expect("move should be accepted");
    assert_eq!(moved.to, p(5, 4));
    assert_eq!(engine.session().phase, Phase::Moving);
    assert_eq!(engine.session().entities[0].position, p(5, 4));

    let hit = engine
        .submit_attack(EntityId(0), EntityId(1))
        .expect("attack should be accepted");
    assert_eq!(hit.remaining_health, 5);
    assert_eq!(engine.session().entities[1].health, 5);

    let change = engine.end_turn(EntityId(0)).expect("end turn should be accepted");
    assert_eq!(change.next, EntityId(1));

    assert_eq!(session.turn_owner, EntityId(1));
    assert_eq!(session.phase, Phase::Planning);
}

#[test]
fn multiple_attacks_in_one_turn() {
    let mut session = new_session();
    let mut engine = SessionEngine::new(&mut session);

    engine.submit_move(EntityId(0), vec![p(4, 4), p(5, 4)]).unwrap();
    engine.submit_attack(EntityId(0), EntityId(1)).unwrap();
    let second = engine.submit_attack(EntityId(0), EntityId(1)).unwrap();
    assert!(second.defeated);

    assert_eq!(
        engine.submit_attack(EntityId(0), EntityId(1)),
        Err(SessionError::TargetAlreadyDefeated {
            target: EntityId(1)
        })
    );

    // Slot 1 is down, so the turn goes straight to slot 2.
    let change = engine.end_turn(EntityId(0)).unwrap();
    assert_eq!(change.next, EntityId(2));
    assert_eq!(change.skipped, 1);
}

#[test]
fn ending_the_turn_without_attacking_is_allowed() {
    let mut session = new_session();
    let mut engine = SessionEngine::new(&mut session);

    engine.submit_move(EntityId(0), vec![p(4, 4)]).unwrap();
    engine.end_turn(EntityId(0)).unwrap();

    assert_eq!(session.turn_owner, EntityId(1));
}

#[test]
fn moves_in_moving_phase_are_rejected_whatever_the_path() {
    let mut session = new_session();
    let mut engine = SessionEngine::new(&mut session);
    engine.submit_move(EntityId(0), vec![p(4, 4), p(5, 4)]).unwrap();

    for path in [vec![], vec![p(5, 4), p(6, 4)], vec![p(0, 0), p(9, 9)]] {
        assert_eq!(
            engine.submit_move(EntityId(0), path),
            Err(SessionError::WrongPhase {
                expected: Phase::Planning,
                actual: Phase::Moving
            })
        );
    }
}

#[test]
fn non_owners_are_always_rejected() {
    let mut session = new_session();
    let mut engine = SessionEngine::new(&mut session);

    let err = engine
        .submit_move(EntityId(2), vec![p(3, 6), p(4, 5)])
        .unwrap_err();
    assert!(matches!(err, SessionError::NotYourTurn { .. }));
    assert_eq!(err.error_code(), "NOT_YOUR_TURN");

    engine.submit_move(EntityId(0), vec![p(4, 4), p(5, 4)]).unwrap();
    assert!(matches!(
        engine.submit_attack(EntityId(1), EntityId(0)),
        Err(SessionError::NotYourTurn { .. })
    ));
    assert!(matches!(
        engine.end_turn(EntityId(3)),
        Err(SessionError::NotYourTurn { .. })
    ));
}

#[test]
fn rejections_leave_the_session_untouched() {
    let mut session = new_session();
    let before = session.clone();
    let mut engine = SessionEngine::new(&mut session);

    assert!(engine.submit_move(EntityId(0), vec![p(4, 4), p(6, 4)]).is_err());
    assert!(engine.submit_attack(EntityId(0), EntityId(1)).is_err());
    assert!(engine.end_turn(EntityId(0)).is_err());
    assert!(engine.submit_move(EntityId(7), vec![p(4, 4)]).is_err());

    assert_eq!(session, before);
}

#[test]
fn end_turn_skips_the_fallen() {
    let mut session = new_session();
    session.entities[1].health = 0;
    session.entities[2].health = 0;
    let mut engine = SessionEngine::new(&mut session);

    engine.submit_move(EntityId(0), vec![p(4, 4)]).unwrap();
    engine.end_turn(EntityId(0)).unwrap();

    assert_eq!(session.turn_owner, EntityId(3));
    assert_eq!(session.phase, Phase::Planning);
}

#[test]
fn last_one_standing_freezes_the_turn() {
    let mut session = new_session();
    for slot in session.entities.iter_mut().skip(1) {
        slot.health = 0;
    }
    let mut engine = SessionEngine::new(&mut session);
    engine.submit_move(EntityId(0), vec![p(4, 4)]).unwrap();

    assert_eq!(engine.end_turn(EntityId(0)), Err(SessionError::NoAliveEntities));
    assert_eq!(session.turn_owner, EntityId(0));
    assert_eq!(session.phase, Phase::Moving);
}

#[test]
fn scenario_applies_in_any_phase() {
    let mut session = new_session();
    let mut engine = SessionEngine::new(&mut session);
    engine.submit_move(EntityId(0), vec![p(4, 4), p(5, 4)]).unwrap();

    let layout = vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)];
    let outcome = engine.apply_scenario(Some("marsh".into()), Some(layout.clone()));
    assert!(outcome.positions_applied);

    assert_eq!(session.phase, Phase::Moving);
    assert_eq!(session.turn_owner, EntityId(0));
    assert_eq!(session.map_label, "marsh");
    for (slot, position) in session.entities.iter().zip(layout) {
        assert_eq!(slot.position, position);
        assert_eq!(slot.last_path, vec![position]);
    }
}

#[test]
fn larger_rosters_rotate_through_every_slot() {
    let config = GameConfig::default().with_entity_count(6);
    let mut session = Session::new(&config).unwrap();

    for expected_next in [1, 2, 3, 4, 5, 0] {
        let owner = session.turn_owner;
        let start = session.entities[owner.index()].position;
        let mut engine = SessionEngine::new(&mut session);
        engine.submit_move(owner, vec![start]).unwrap();
        let change = engine.end_turn(owner).unwrap();
        assert_eq!(change.next, EntityId(expected_next));
    }
}

#[test]
fn wire_ids_reject_negative_indices() {
    assert_eq!(
        EntityId::from_wire(-1),
        Err(SessionError::InvalidActor { actor: -1 })
    );
    assert_eq!(EntityId::from_wire(3), Ok(EntityId(3)));
}
