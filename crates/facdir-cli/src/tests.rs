use super::*;
use facdir_core::RelatedQuery;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["facdir-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["facdir-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn parses_db_seed_command_without_file() {
    let cli = Cli::try_parse_from(["facdir-cli", "db", "seed"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed { file: None }
        })
    ));
}

#[test]
fn parses_db_seed_command_with_file() {
    let cli = Cli::try_parse_from(["facdir-cli", "db", "seed", "--file", "data/tx.yaml"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed { file: Some(ref f) }
        }) if f == &PathBuf::from("data/tx.yaml")
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["facdir-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn related_defaults() {
    let cli = Cli::try_parse_from(["facdir-cli", "related"]).expect("expected valid cli args");
    let Some(Commands::Related(args)) = cli.command else {
        panic!("expected related command");
    };
    let query = RelatedQuery::from(args);
    assert_eq!(query, RelatedQuery::default());
}

#[test]
fn related_parses_all_filters_and_negative_longitude() {
    let cli = Cli::try_parse_from([
        "facdir-cli",
        "related",
        "--exclude",
        "austin-detox",
        "--city",
        "Austin",
        "--type",
        "detox-center",
        "--state",
        "TX",
        "--county",
        "Travis",
        "--lat",
        "30.2672",
        "--lng",
        "-97.7431",
        "--limit",
        "500",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Related(args)) = cli.command else {
        panic!("expected related command");
    };

    let query = RelatedQuery::from(args);
    assert_eq!(query.exclude.as_deref(), Some("austin-detox"));
    assert_eq!(query.facility_type.as_deref(), Some("detox-center"));
    assert_eq!(query.county.as_deref(), Some("Travis"));
    assert_eq!(query.origin, Some((30.2672, -97.7431)));
    assert_eq!(query.limit, 100);
}

#[test]
fn related_rejects_lat_without_lng() {
    let result = Cli::try_parse_from(["facdir-cli", "related", "--lat", "30.1"]);
    assert!(result.is_err());
}

#[test]
fn related_treats_blank_filters_as_absent() {
    let cli = Cli::try_parse_from(["facdir-cli", "related", "--city", " "])
        .expect("expected valid cli args");
    let Some(Commands::Related(args)) = cli.command else {
        panic!("expected related command");
    };
    assert!(RelatedQuery::from(args).city.is_none());
}
