use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_normalize() {
    match parse(&["urlcanon", "normalize", "HTTP://Example.com/"]).command {
        CliCommand::Normalize { url, scope } => {
            assert_eq!(url, "HTTP://Example.com/");
            assert!(scope.is_none());
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_normalize_scope() {
    match parse(&["urlcanon", "normalize", "x:y", "--scope", "fetcher"]).command {
        CliCommand::Normalize { scope, .. } => assert_eq!(scope.as_deref(), Some("fetcher")),
        _ => panic!("expected Normalize with --scope"),
    }
}

#[test]
fn cli_parse_batch_defaults() {
    let cli = parse(&["urlcanon", "batch"]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Batch {
            scope,
            input,
            format,
        } => {
            assert!(scope.is_none());
            assert!(input.is_none());
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_all_flags() {
    match parse(&[
        "urlcanon",
        "batch",
        "--scope",
        "crawldb",
        "--input",
        "/tmp/urls.txt",
        "--format",
        "json",
    ])
    .command
    {
        CliCommand::Batch {
            scope,
            input,
            format,
        } => {
            assert_eq!(scope.as_deref(), Some("crawldb"));
            assert_eq!(input.as_deref(), Some(std::path::Path::new("/tmp/urls.txt")));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected Batch with flags"),
    }
}

#[test]
fn cli_parse_query() {
    match parse(&["urlcanon", "query", "B=2&a=1"]).command {
        CliCommand::Query { raw } => assert_eq!(raw, "B=2&a=1"),
        _ => panic!("expected Query"),
    }
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = parse(&["urlcanon", "batch", "--config", "/etc/urlcanon.toml"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/urlcanon.toml"))
    );
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["urlcanon", "batch", "--format", "xml"]).is_err());
}

#[test]
fn load_config_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_scope = \"outlink\"\n").unwrap();
    let cfg = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.default_scope, "outlink");
}
