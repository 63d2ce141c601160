use counterdex::analysis::{
    analyze_team, baseline_candidate, estimate_meta_pressure, prepare_team, rank_counters,
    rank_counters_with_progress, score_candidate, suggest_mitigation, AnalysisScenario, FocusStat,
    TeamConfig, TeamSlotConfig,
};
use counterdex::data::{
    sum_relic_bonuses, CreatureRecord, DataRegistry, MetaPoolEntry, RelicCatalog, RelicRecord,
    RelicSlots,
};
use counterdex::engine::{
    compute_derived_stats, BaseStats15, BonusAllocation, ColorSet, ColorTier, Element, Move,
    StatBundle,
};
use counterdex::parallel::{run_ranked_scan, WorkerPool};

fn creature(name: &str, elements: &[Element], base: BaseStats15, moves: Vec<Move>) -> CreatureRecord {
    CreatureRecord {
        name: name.to_string(),
        elements: elements.to_vec(),
        base,
        moves,
        enhanced_moves: Vec::new(),
        rarity: None,
    }
}

fn mv(name: &str, power: f64, element: Option<Element>) -> Move {
    Move {
        name: name.to_string(),
        power,
        element,
        hits: 1,
    }
}

fn base(hp: f64, pa: f64, ea: f64, pd: f64, ed: f64, speed: f64) -> BaseStats15 {
    BaseStats15 {
        hp,
        speed,
        elemental_attack: ea,
        physical_attack: pa,
        elemental_defense: ed,
        physical_defense: pd,
    }
}

fn fixture_registry() -> DataRegistry {
    let creatures = vec![
        creature(
            "Torchli",
            &[Element::Fire],
            base(50.0, 40.0, 30.0, 30.0, 30.0, 30.0),
            vec![
                mv("Ember", 45.0, Some(Element::Fire)),
                mv("Tackle", 50.0, None),
            ],
        ),
        creature(
            "Aquarel",
            &[Element::Water],
            base(55.0, 28.0, 42.0, 30.0, 38.0, 28.0),
            vec![
                mv("Water Jet", 48.0, Some(Element::Water)),
                mv("Splash Kick", 40.0, None),
            ],
        ),
        creature(
            "Brámble",
            &[Element::Nature],
            base(58.0, 34.0, 38.0, 34.0, 36.0, 24.0),
            vec![mv("Leaf Razor", 46.0, Some(Element::Nature))],
        ),
        creature(
            "Terrafang",
            &[Element::Earth],
            base(62.0, 46.0, 26.0, 42.0, 34.0, 20.0),
            vec![
                mv("Boulder Maul", 55.0, Some(Element::Earth)),
                mv("Crushing Bite", 52.0, None),
            ],
        ),
    ];
    let relics = RelicCatalog::from_records(vec![
        RelicRecord {
            name: "Wyrm's Heart".to_string(),
            tier: 35,
            bundle: StatBundle {
                hp: 120.0,
                speed: 6.0,
                ..StatBundle::ZERO
            },
        },
        RelicRecord {
            name: "Bulwark Scale".to_string(),
            tier: 35,
            bundle: StatBundle {
                physical_defense: 48.0,
                hp: 60.0,
                ..StatBundle::ZERO
            },
        },
        RelicRecord {
            name: "Prism Veil".to_string(),
            tier: 35,
            bundle: StatBundle {
                elemental_defense: 48.0,
                hp: 60.0,
                ..StatBundle::ZERO
            },
        },
        RelicRecord {
            name: "Warding Bead".to_string(),
            tier: 20,
            bundle: StatBundle {
                elemental_defense: 16.0,
                hp: 20.0,
                ..StatBundle::ZERO
            },
        },
    ]);
    let meta = vec![
        MetaPoolEntry {
            name: "Torchli".to_string(),
            tier_label: Some("B".to_string()),
        },
        MetaPoolEntry {
            name: "Aquarel".to_string(),
            tier_label: Some("A".to_string()),
        },
        MetaPoolEntry {
            name: "Terrafang".to_string(),
            tier_label: Some("S".to_string()),
        },
        MetaPoolEntry {
            name: "Missingno".to_string(),
            tier_label: None,
        },
    ];
    DataRegistry::from_parts(creatures, relics, meta)
}

fn team_of(names: &[&str]) -> TeamConfig {
    let mut slots: Vec<TeamSlotConfig> = names
        .iter()
        .map(|name| TeamSlotConfig {
            creature: Some((*name).to_string()),
            ..TeamSlotConfig::default()
        })
        .collect();
    slots.resize_with(4, TeamSlotConfig::default);
    TeamConfig { slots }
}

#[test]
fn baseline_build_matches_growth_goldens() {
    let registry = fixture_registry();
    let torchli = baseline_candidate(&registry, "torchli", false).expect("known creature");
    // All-Green at level 35: HP floor(((12+2*50+4.5)/5)*35+10), PA floor(((3+2*40+4.5)/6)*35+5).
    assert_eq!(torchli.stats.hp, 825.0);
    assert_eq!(torchli.stats.physical_attack, 515.0);
}

#[test]
fn missing_base_data_is_distinguishable_from_zero_stats() {
    assert!(compute_derived_stats(
        None,
        &ColorSet::default(),
        &BonusAllocation::default(),
        &StatBundle::ZERO
    )
    .is_none());
    let zeroed = compute_derived_stats(
        Some(&BaseStats15::default()),
        &ColorSet::default(),
        &BonusAllocation::default(),
        &StatBundle::ZERO,
    )
    .expect("zero-stat creature still computes");
    assert!(zeroed.hp > 0.0);
}

#[test]
fn relic_sum_is_tier_strict_and_order_independent() {
    let registry = fixture_registry();
    let catalog = registry.relics();

    let empty = sum_relic_bonuses(&RelicSlots::default(), catalog);
    assert_eq!(empty, StatBundle::ZERO);

    // "Wyrm's Heart" only exists at tier 35; slotting it at tier 20
    // contributes zero even though the key is known elsewhere.
    let wrong_tier = RelicSlots {
        tier20: Some("Wyrm's Heart".to_string()),
        ..RelicSlots::default()
    };
    assert_eq!(sum_relic_bonuses(&wrong_tier, catalog), StatBundle::ZERO);
    assert!(catalog.lookup(35, "Wyrm's Heart").is_some());
    assert!(catalog.lookup(20, "Wyrm's Heart").is_none());
    assert!(catalog.lookup(35, "No Such Relic").is_none());

    let both = RelicSlots {
        tier20: Some("Warding Bead".to_string()),
        tier35: Some("wyrms heart".to_string()),
        ..RelicSlots::default()
    };
    let total = sum_relic_bonuses(&both, catalog);
    assert_eq!(total.hp, 140.0);
    assert_eq!(total.elemental_defense, 16.0);
    assert_eq!(total.speed, 6.0);
}

#[test]
fn team_config_coerces_loosely_cased_colors() {
    let slot: TeamSlotConfig = serde_json::from_str(
        r#"{ "creature": "Torchli", "colors": { "hp": "RED", "speed": "purple" } }"#,
    )
    .expect("unrecognized colors coerce, not fail");
    assert_eq!(slot.colors.hp, ColorTier::Red);
    assert_eq!(slot.colors.speed, ColorTier::Green);
    assert_eq!(slot.colors.physical_attack, ColorTier::Green);

    // The coerced slot still resolves to a playable build.
    let registry = fixture_registry();
    let config = TeamConfig { slots: vec![slot] };
    let team = prepare_team(&registry, &config, false);
    assert_eq!(team.len(), 1);
}

#[test]
fn prepared_team_skips_empty_and_unknown_slots() {
    let registry = fixture_registry();
    let mut config = team_of(&["Torchli", "Nobody"]);
    config.slots[2].creature = Some("   ".to_string());
    let team = prepare_team(&registry, &config, false);
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].name, "Torchli");
    assert_eq!(team[0].slot_index, 0);
}

#[test]
fn mirror_match_offense_and_defense_are_complementary() {
    let registry = fixture_registry();
    let config = team_of(&["Torchli"]);
    let team = prepare_team(&registry, &config, false);
    let candidate = baseline_candidate(&registry, "Torchli", false).unwrap();

    let score = score_candidate(&candidate, &team).expect("filled team");
    // Both terms come from the same damage formula applied symmetrically.
    assert!((score.avg_offense + score.avg_defense - 1.0).abs() < 1e-9);
    assert!(score.avg_offense > 0.0 && score.avg_offense < 1.0);
}

#[test]
fn empty_team_yields_no_score_and_no_rankings() {
    let registry = fixture_registry();
    let candidate = baseline_candidate(&registry, "Torchli", false).unwrap();
    assert!(score_candidate(&candidate, &[]).is_none());
    assert!(rank_counters(&registry, &[], &["Torchli".to_string()], false).is_empty());
}

#[test]
fn ranking_excludes_team_members_and_unknown_names() {
    let registry = fixture_registry();
    let config = team_of(&["Torchli"]);
    let team = prepare_team(&registry, &config, false);
    let pool: Vec<String> = registry
        .meta_pool()
        .iter()
        .map(|entry| entry.name.clone())
        .collect();

    let ranked = rank_counters(&registry, &team, &pool, false);
    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|entry| entry.name != "Torchli"));
    assert!(ranked.iter().all(|entry| entry.name != "Missingno"));
    // Deterministic order: descending score.
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn progress_variant_matches_plain_ranking() {
    let registry = fixture_registry();
    let config = team_of(&["Torchli", "Aquarel"]);
    let team = prepare_team(&registry, &config, false);
    let pool: Vec<String> = registry
        .meta_pool()
        .iter()
        .map(|entry| entry.name.clone())
        .collect();

    let plain = rank_counters(&registry, &team, &pool, false);
    let mut updates = Vec::new();
    let progressed =
        rank_counters_with_progress(&registry, &team, &pool, false, |done, total| {
            updates.push((done, total));
        });

    assert_eq!(plain.len(), progressed.len());
    for (a, b) in plain.iter().zip(progressed.iter()) {
        assert_eq!(a.name, b.name);
        assert!((a.score - b.score).abs() < 1e-12);
    }
    assert_eq!(updates.first(), Some(&(0, pool.len() as u32)));
    assert_eq!(
        updates.last(),
        Some(&(pool.len() as u32, pool.len() as u32))
    );
}

#[test]
fn custom_worker_count_does_not_change_the_ranking() {
    let registry = fixture_registry();
    let config = team_of(&["Torchli", "Aquarel"]);
    let team = prepare_team(&registry, &config, false);
    let pool: Vec<String> = registry
        .meta_pool()
        .iter()
        .map(|entry| entry.name.clone())
        .collect();

    let plain = rank_counters(&registry, &team, &pool, false);
    let pooled = run_ranked_scan(&registry, &team, &pool, false, &WorkerPool::with_workers(2));
    assert_eq!(plain.len(), pooled.len());
    for (a, b) in plain.iter().zip(pooled.iter()) {
        assert_eq!(a.name, b.name);
        assert!((a.score - b.score).abs() < 1e-12);
    }
}

#[test]
fn meta_pressure_empty_pool_is_not_applicable() {
    let registry = DataRegistry::from_parts(
        fixture_registry().creatures().to_vec(),
        RelicCatalog::default(),
        Vec::new(),
    );
    let config = team_of(&["Torchli"]);
    let team = prepare_team(&registry, &config, false);
    let pressure = estimate_meta_pressure(&registry, &team, false);
    assert_eq!(pressure.label, "N/A");
    assert_eq!(pressure.lose_percent, None);
}

#[test]
fn meta_pressure_percent_stays_in_band() {
    let registry = fixture_registry();
    let config = team_of(&["Torchli", "Aquarel"]);
    let team = prepare_team(&registry, &config, false);
    let pressure = estimate_meta_pressure(&registry, &team, false);
    let percent = pressure.lose_percent.expect("non-empty pool");
    assert!((5..=95).contains(&percent), "percent {percent} out of band");
    assert!(["Low", "Medium", "High"].contains(&pressure.label));
}

#[test]
fn mitigation_targets_the_weakest_slot_with_a_defensive_relic() {
    let registry = fixture_registry();
    // Brámble is weak to fire; Torchli's fire pressure should make it the
    // weakest link and call for elemental defense.
    let config = team_of(&["Brámble", "Terrafang"]);
    let team = prepare_team(&registry, &config, false);

    let advice =
        suggest_mitigation(&registry, &config, &team, "Torchli", false).expect("advice available");
    assert_eq!(advice.target_name, "Brámble");
    assert_eq!(advice.focus_stat, FocusStat::ElementalDefense);
    assert_eq!(advice.recommended_relic_key, "PRISM_VEIL");
    assert!(advice.note.contains("Torchli"));
}

#[test]
fn mitigation_does_not_resuggest_the_equipped_relic() {
    let registry = fixture_registry();
    let mut config = team_of(&["Brámble"]);
    config.slots[0].relics.tier35 = Some("Prism Veil".to_string());
    let team = prepare_team(&registry, &config, false);

    let advice =
        suggest_mitigation(&registry, &config, &team, "Torchli", false).expect("advice available");
    // Prism Veil is strictly best for elemental defense, so the advice is to
    // keep it rather than swap to a worse alternative.
    assert_eq!(advice.recommended_relic_key, "PRISM_VEIL");
    assert!(advice.note.contains("already maximizes"));
}

#[test]
fn mitigation_without_tier_35_rows_is_none() {
    let registry = DataRegistry::from_parts(
        fixture_registry().creatures().to_vec(),
        RelicCatalog::default(),
        Vec::new(),
    );
    let config = team_of(&["Brámble"]);
    let team = prepare_team(&registry, &config, false);
    assert!(suggest_mitigation(&registry, &config, &team, "Torchli", false).is_none());
}

#[test]
fn analyze_team_produces_a_complete_replaceable_result() {
    let registry = fixture_registry();
    let config = team_of(&["Brámble", "Aquarel"]);
    let analysis = analyze_team(&registry, &config, &AnalysisScenario::default());

    assert_eq!(analysis.filled_slots, 2);
    assert!(!analysis.counters.is_empty());
    assert!(analysis.counters.len() <= 10);
    assert!(analysis.pressure.lose_percent.is_some());
    assert!(analysis.mitigation.is_some());
    assert!(!analysis.analysis_id.is_empty());

    let again = analyze_team(&registry, &config, &AnalysisScenario::default());
    assert_ne!(analysis.analysis_id, again.analysis_id);
}
