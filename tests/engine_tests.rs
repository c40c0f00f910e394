use riverquest::{GameEngine, GameStatus, Location, Shore};

/// Standard seven-crossing solution, each step expected to succeed.
fn solve(engine: &mut GameEngine) {
    let steps: &[(&str, Option<&str>)] = &[
        ("board", Some("farmer")),
        ("board", Some("chicken")),
        ("cross", None),
        ("land", Some("chicken")),
        ("cross", None),
        ("board", Some("wolf")),
        ("cross", None),
        ("land", Some("wolf")),
        ("board", Some("chicken")),
        ("cross", None),
        ("land", Some("chicken")),
        ("board", Some("grain")),
        ("cross", None),
        ("land", Some("grain")),
        ("cross", None),
        ("board", Some("chicken")),
        ("cross", None),
        ("land", Some("chicken")),
        ("land", Some("farmer")),
    ];
    for (verb, id) in steps {
        let ok = match (*verb, id) {
            ("board", Some(id)) => engine.board(id),
            ("land", Some(id)) => engine.disembark(id),
            ("cross", None) => engine.cross_river(),
            _ => unreachable!(),
        };
        assert!(ok, "step {} {:?} failed", verb, id);
    }
}

#[test]
fn test_initial_state() {
    let engine = GameEngine::default();
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.boat().location(), Shore::Left);
    assert!(engine.boat().is_empty());
    assert_eq!(engine.boat().capacity(), 2);
    assert!(engine
        .entities()
        .iter()
        .all(|e| e.location() == Location::LeftShore));
}

#[test]
fn test_cross_without_operator_fails() {
    let mut engine = GameEngine::default();
    assert!(engine.board("chicken"));
    let before = engine.state();
    assert!(!engine.cross_river());
    assert_eq!(engine.state(), before);
}

#[test]
fn test_empty_boat_cannot_cross() {
    let mut engine = GameEngine::default();
    assert!(!engine.cross_river());
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_safe_first_crossing() {
    let mut engine = GameEngine::default();
    assert!(engine.board("farmer"));
    assert!(engine.board("chicken"));
    assert!(engine.cross_river());
    assert_eq!(engine.move_count(), 1);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.boat().location(), Shore::Right);
}

#[test]
fn test_passengers_stay_aboard_after_crossing() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    engine.board("chicken");
    engine.cross_river();
    assert_eq!(engine.entity("farmer").unwrap().location(), Location::Boat);
    assert_eq!(engine.entity("chicken").unwrap().location(), Location::Boat);
    assert_eq!(engine.boat().passengers(), ["farmer", "chicken"]);
    assert_eq!(engine.on_shore(Shore::Right).count(), 0);

    assert!(engine.disembark("chicken"));
    assert_eq!(
        engine.entity("chicken").unwrap().location(),
        Location::RightShore
    );
    assert_eq!(engine.boat().passengers(), ["farmer"]);
}

#[test]
fn test_full_boat_rejects_boarding() {
    let mut engine = GameEngine::default();
    assert!(engine.board("wolf"));
    assert!(engine.board("chicken"));
    let before = engine.state();
    assert!(!engine.board("farmer"));
    assert_eq!(engine.state(), before);
    assert!(!engine.cross_river());
}

#[test]
fn test_board_from_wrong_shore_fails() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    engine.board("chicken");
    engine.cross_river();
    engine.disembark("chicken");
    // Boat is at the right shore, wolf is on the left.
    assert!(!engine.board("wolf"));
    assert!(engine.board("chicken"));
}

#[test]
fn test_unknown_and_repeated_ids_fail() {
    let mut engine = GameEngine::default();
    assert!(!engine.board("dragon"));
    assert!(!engine.disembark("dragon"));
    assert!(engine.board("farmer"));
    assert!(!engine.board("farmer"));
    assert!(!engine.disembark("wolf"));
}

#[test]
fn test_disembark_returns_to_current_shore() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    assert!(engine.disembark("farmer"));
    assert_eq!(
        engine.entity("farmer").unwrap().location(),
        Location::LeftShore
    );
    assert!(engine.boat().is_empty());
}

#[test]
fn test_full_solution_wins_in_seven_moves() {
    let mut engine = GameEngine::default();
    solve(&mut engine);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.move_count(), 7);
    assert!(engine.is_won());
    assert!(engine.boat().is_empty());
    assert_eq!(engine.boat().location(), Shore::Right);
}

#[test]
fn test_not_won_while_someone_is_aboard() {
    let mut engine = GameEngine::default();
    solve(&mut engine);
    engine.reset();
    // Replay up to the final crossing only.
    for cmd in [
        "farmer", "chicken", "+", "-chicken", "+", "wolf", "+", "-wolf", "chicken", "+",
        "-chicken", "grain", "+", "-grain", "+", "chicken", "+",
    ] {
        let ok = if cmd == "+" {
            engine.cross_river()
        } else if let Some(id) = cmd.strip_prefix('-') {
            engine.disembark(id)
        } else {
            engine.board(cmd)
        };
        assert!(ok);
    }
    assert_eq!(engine.move_count(), 7);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(engine.disembark("chicken"));
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(engine.disembark("farmer"));
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn test_leaving_chicken_with_grain_loses() {
    let mut engine = GameEngine::default();
    assert!(engine.board("farmer"));
    assert!(engine.board("wolf"));
    assert!(engine.cross_river());
    assert_eq!(engine.status(), GameStatus::Lost);
    let violation = engine.violation().unwrap();
    assert_eq!(violation.shore, Shore::Left);
    assert_eq!(violation.entity, "chicken");
    assert_eq!(violation.constrained, "grain");
}

#[test]
fn test_leaving_wolf_with_chicken_loses() {
    let mut engine = GameEngine::default();
    assert!(engine.board("farmer"));
    assert!(engine.board("grain"));
    assert!(engine.cross_river());
    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.violation().unwrap().entity, "wolf");
}

#[test]
fn test_farmer_alone_does_not_flag_safe_pair() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    engine.board("chicken");
    engine.cross_river();
    engine.disembark("chicken");
    assert!(engine.cross_river());
    // Left: wolf + grain (+ farmer aboard), right: chicken alone.
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(!engine.has_violation());
}

#[test]
fn test_loss_is_only_detected_on_crossing() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    engine.board("chicken");
    engine.cross_river();
    engine.disembark("chicken");
    engine.cross_river();
    engine.disembark("farmer");
    engine.board("wolf");
    engine.board("farmer");
    engine.cross_river();
    engine.disembark("wolf");
    // Farmer still aboard: wolf and chicken share the right shore unsupervised.
    assert!(engine.has_violation());
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(engine.cross_river());
    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.violation().unwrap().shore, Shore::Right);
}

#[test]
fn test_terminal_status_blocks_mutation() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    engine.board("wolf");
    engine.cross_river();
    assert_eq!(engine.status(), GameStatus::Lost);
    let before = engine.state();
    assert!(!engine.disembark("wolf"));
    assert!(!engine.board("grain"));
    assert!(!engine.cross_river());
    assert!(!engine.select("farmer"));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = GameEngine::default();
    engine.board("farmer");
    engine.board("wolf");
    engine.cross_river();
    engine.reset();
    assert_eq!(engine.state(), GameEngine::default().state());
    assert!(engine.violation().is_none());

    solve(&mut engine);
    engine.reset();
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(engine
        .entities()
        .iter()
        .all(|e| e.location() == Location::LeftShore));
}

#[test]
fn test_select_routes_to_board_or_disembark() {
    let mut engine = GameEngine::default();
    assert!(engine.select("farmer"));
    assert_eq!(engine.entity("farmer").unwrap().location(), Location::Boat);
    assert!(engine.select("chicken"));
    assert!(engine.cross_river());
    assert!(engine.select("chicken"));
    assert_eq!(
        engine.entity("chicken").unwrap().location(),
        Location::RightShore
    );
    // Wolf is across the river from the boat.
    assert!(!engine.select("wolf"));
    assert!(!engine.select("dragon"));
}

#[test]
fn test_capacity_one_boat() {
    let config = riverquest::PuzzleConfig::default().with_capacity(1);
    let mut engine = GameEngine::new(config).unwrap();
    assert!(engine.board("farmer"));
    assert!(!engine.board("chicken"));
    assert!(engine.cross_river());
    // Farmer left the chicken with both the wolf and the grain.
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn test_aboard_follows_boarding_order() {
    let mut engine = GameEngine::default();
    assert!(engine.board("chicken"));
    assert!(engine.board("farmer"));
    let ids: Vec<&str> = engine.aboard().map(|e| e.id()).collect();
    assert_eq!(ids, ["chicken", "farmer"]);
    let state = engine.state();
    let snapshot_ids: Vec<&str> = state.aboard().map(|e| e.id()).collect();
    assert_eq!(ids, snapshot_ids);
    assert!(engine.boat().carries("chicken"));
    assert!(!engine.boat().carries("wolf"));

    assert!(engine.disembark("chicken"));
    assert!(!engine.boat().carries("chicken"));
    assert_eq!(engine.boat().passengers(), ["farmer"]);
}

#[test]
fn test_location_shore_mapping() {
    assert_eq!(Location::LeftShore.shore(), Some(Shore::Left));
    assert_eq!(Location::RightShore.shore(), Some(Shore::Right));
    assert_eq!(Location::Boat.shore(), None);
    assert_eq!(Location::from(Shore::Right), Location::RightShore);
}
