use counterdex::cli::{parse_command, run_with_args, Command};

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

#[test]
fn subcommands_map_to_commands() {
    assert_eq!(parse_command(&args(&["counterdex", "serve"])), Some(Command::Serve));
    assert_eq!(parse_command(&args(&["counterdex", "damage"])), Some(Command::Damage));
    assert_eq!(
        parse_command(&args(&["counterdex", "analyze"])),
        Some(Command::Analyze)
    );
    assert_eq!(
        parse_command(&args(&["counterdex", "validate"])),
        Some(Command::Validate)
    );
}

#[test]
fn unknown_or_missing_subcommand_is_none() {
    assert_eq!(parse_command(&args(&["counterdex"])), None);
    assert_eq!(parse_command(&args(&["counterdex", "frobnicate"])), None);
    assert_eq!(parse_command(&args(&[])), None);
}

#[test]
fn missing_subcommand_exits_with_usage() {
    assert_eq!(run_with_args(&args(&["counterdex"])), 2);
    assert_eq!(run_with_args(&args(&["counterdex", "bogus"])), 2);
}

#[test]
fn damage_without_both_names_exits_with_usage() {
    assert_eq!(run_with_args(&args(&["counterdex", "damage"])), 2);
    assert_eq!(run_with_args(&args(&["counterdex", "damage", "Torchli"])), 2);
}

#[test]
fn analyze_without_a_team_file_exits_with_usage() {
    assert_eq!(run_with_args(&args(&["counterdex", "analyze"])), 2);
}

#[test]
fn analyze_with_an_unreadable_team_file_fails() {
    assert_eq!(
        run_with_args(&args(&["counterdex", "analyze", "no/such/team.json"])),
        1
    );
}

// The remaining cases exercise the bundled reference data in data/.

#[test]
fn damage_between_roster_creatures_succeeds() {
    assert_eq!(
        run_with_args(&args(&["counterdex", "damage", "Torchli", "Aquarel"])),
        0
    );
    assert_eq!(
        run_with_args(&args(&[
            "counterdex", "damage", "Torchli", "Aquarel", "Ember", "--mode", "elemental"
        ])),
        0
    );
}

#[test]
fn damage_against_an_unknown_creature_fails() {
    assert_eq!(
        run_with_args(&args(&["counterdex", "damage", "Torchli", "Nobody"])),
        1
    );
}

#[test]
fn bundled_reference_data_validates_cleanly() {
    assert_eq!(run_with_args(&args(&["counterdex", "validate"])), 0);
}

#[test]
fn analyze_runs_end_to_end_from_a_team_file() {
    let team_path = std::env::temp_dir().join(format!("counterdex-team-{}.json", uuid::Uuid::new_v4()));
    let team_json = r#"{
        "slots": [
            { "creature": "Torchli" },
            { "creature": "Brámble", "relics": { "tier35": "Prism Veil" } }
        ]
    }"#;
    std::fs::write(&team_path, team_json).unwrap();

    let path_arg = team_path.to_string_lossy().into_owned();
    assert_eq!(run_with_args(&args(&["counterdex", "analyze", &path_arg])), 0);

    let _ = std::fs::remove_file(&team_path);
}
