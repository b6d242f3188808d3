use westward_game::{
    ActionId, ConfigError, GameStatus, JourneySummary, Notice, SceneId, ScriptedRng, TrailConfig,
    TrailSession,
};

#[test]
fn json_overrides_fill_missing_fields_with_defaults() {
    let config = TrailConfig::from_json(r#"{ "start_food": 80, "destination_distance": 100 }"#)
        .expect("valid config");
    assert_eq!(config.start_food, 80);
    assert_eq!(config.destination_distance, 100);
    assert_eq!(config.start_oxen, 2);
    assert_eq!(config.party_names.len(), 4);
    assert_eq!(config.starting_health, 100);
}

#[test]
fn invalid_configs_are_rejected_with_typed_errors() {
    assert!(matches!(
        TrailConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        TrailConfig::from_json(r#"{ "destination_distance": 0 }"#),
        Err(ConfigError::ZeroDestination)
    ));
    assert!(matches!(
        TrailConfig::from_json(r#"{ "party_names": [] }"#),
        Err(ConfigError::EmptyParty)
    ));
    assert!(matches!(
        TrailConfig::from_json(r#"{ "party_names": ["Ada", "  "] }"#),
        Err(ConfigError::BlankName { index: 1 })
    ));
    let err = TrailConfig::from_json(r#"{ "starting_health": 0 }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "starting health must be between 1 and 100 (got 0)"
    );
}

#[test]
fn short_trail_can_be_won_in_a_few_days() {
    let config = TrailConfig::from_json(r#"{ "destination_distance": 100, "start_oxen": 3 }"#)
        .expect("valid config");
    let mut session = TrailSession::with_rng(&config, ScriptedRng::new([]));
    session.dispatch(ActionId::InitialStart);
    let mut last = None;
    while !session.is_over() {
        last = Some(session.dispatch(ActionId::Travel).status);
    }
    assert_eq!(last, Some(GameStatus::Won { days: 2 }));

    let summary = JourneySummary::from_state(session.state());
    assert!(summary.is_win());
    assert_eq!(summary.distance, 120);
    assert_eq!(summary.stats.travel_days, 2);
    assert_eq!(summary.food, 500 - 2 * 16);
}

#[test]
fn custom_party_rations_scale_with_roster() {
    let config = TrailConfig::default().with_party(["Ada", "Bea"]);
    let mut session = TrailSession::with_rng(&config, ScriptedRng::new([0.9]));
    session.dispatch(ActionId::InitialStart);
    session.dispatch(ActionId::Travel);
    assert_eq!(session.state().ledger.food, 492);
    assert_eq!(session.snapshot().party[1].name, "Bea");
}

#[test]
fn wagon_without_spare_parts_stays_broken() {
    let config = TrailConfig::default().with_wagon_parts(0);
    let mut rng = ScriptedRng::new([0.1]);
    // Wagon break is the final 0.05 of the table.
    rng.push(0.99);
    let mut session = TrailSession::with_rng(&config, rng);
    session.dispatch(ActionId::Travel);
    assert_eq!(session.state().scene, SceneId::BrokenWagon);
    assert_eq!(session.rng_mut().remaining(), 0);

    let report = session.dispatch(ActionId::Repair).clone();
    assert_eq!(report.notices.as_slice(), &[Notice::NoSpareParts]);
    assert_eq!(session.state().scene, SceneId::BrokenWagon);
    assert_eq!(session.state().ledger.wagon_parts, 0);
    assert_eq!(session.state().ledger.day, 1);
}
