use super::CheckCommand;
use crate::{Command, Invoke, Outcome};
use data_units::ByteUnits;
use diagnostics::{DiagnosticFlags, Diagnostics};
use indoc::indoc;
use source_files::SourceFiles;
use std::path::{Path, PathBuf};
use target::TargetArch;

const SHAPES: &str = indoc! {r#"
    {
        "package": "example.com/shapes",
        "records": [
            {
                "name": "Padded",
                "file": "shapes.go",
                "line": 12,
                "column": 6,
                "fields": [
                    { "name": "a", "type": "bool" },
                    { "name": "b", "type": "i64" },
                    { "name": "c", "type": "bool" }
                ]
            },
            {
                "name": "Packed",
                "file": "shapes.go",
                "line": 3,
                "column": 6,
                "fields": [
                    { "name": "x", "type": "f64" },
                    { "name": "y", "type": "f64" }
                ]
            },
            {
                "name": "Header",
                "file": "header.go",
                "line": 8,
                "column": 6,
                "fields": [
                    { "name": "flags", "type": "u8" },
                    { "name": "name", "type": "str" },
                    { "name": "kind", "type": "u16" }
                ]
            }
        ]
    }
"#};

fn args(args: &[&str]) -> impl Iterator<Item = String> {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

fn parse_check(arguments: &[&str]) -> CheckCommand {
    match Command::parse_args(args(arguments)).unwrap() {
        Command::Check(check) => check,
        other => panic!("expected check command, got {:?}", other),
    }
}

struct TempManifest(PathBuf);

impl TempManifest {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "aligncheck-cli-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempManifest {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn check(command: &CheckCommand) -> Result<Vec<String>, ()> {
    let source_files = SourceFiles::new();
    let diagnostics = Diagnostics::new(
        &source_files,
        DiagnosticFlags {
            print_without_collecting: false,
            project_root: None,
        },
    );

    command.check(&diagnostics)
}

#[test]
fn test_parse_defaults() {
    let check = parse_check(&[]);

    assert_eq!(check.manifests, vec![PathBuf::from("layout.json")]);
    assert!(!check.options.verbose);
    assert_eq!(check.options.max_alignment, None);
}

#[test]
fn test_parse_options() {
    let check = parse_check(&["-v", "--arm", "--max-align", "2", "a.json", "b.json"]);

    assert!(check.options.verbose);
    assert_eq!(check.options.target.arch(), Some(TargetArch::Arm));
    assert_eq!(check.options.max_alignment, Some(ByteUnits::of(2)));
    assert_eq!(check.options.sizes().word_size, ByteUnits::of(4));
    assert_eq!(check.options.sizes().max_alignment, ByteUnits::of(2));
    assert_eq!(
        check.manifests,
        vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
    );
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(Command::parse_args(args(&["--bogus"])).is_err());
    assert!(Command::parse_args(args(&["--max-align"])).is_err());
    assert!(Command::parse_args(args(&["--max-align", "3"])).is_err());
    assert!(Command::parse_args(args(&["--max-align", "0"])).is_err());
    assert!(Command::parse_args(args(&["--linux"])).is_err());
}

#[test]
fn test_parse_help() {
    let command = Command::parse_args(args(&["--help"])).unwrap();

    assert!(matches!(command, Command::Help(_)));
    assert_eq!(command.invoke(), Ok(Outcome::Clean));
}

#[test]
fn test_parse_help_after_other_options() {
    let cases: [&[&str]; 3] = [&["-v", "--help"], &["a.json", "-h"], &["--bogus", "--help"]];

    for arguments in cases {
        assert!(matches!(
            Command::parse_args(args(arguments)),
            Ok(Command::Help(_))
        ));
    }

    let check = parse_check(&["--", "--help"]);
    assert_eq!(check.manifests, vec![PathBuf::from("--help")]);
}

#[test]
fn test_check_reports_sorted_findings() {
    let manifest = TempManifest::new("sorted", SHAPES);
    let mut command = parse_check(&["--x86_64"]);
    command.manifests = vec![manifest.path().into()];

    assert_eq!(
        check(&command),
        Ok(vec![
            "example.com/shapes: header.go:8:6: struct Header could have size 24 (currently 32)"
                .to_string(),
            "example.com/shapes: shapes.go:12:6: struct Padded could have size 16 (currently 24)"
                .to_string(),
        ])
    );
}

#[test]
fn test_check_verbose_lists_recommended_order() {
    let manifest = TempManifest::new("verbose", SHAPES);
    let mut command = parse_check(&["--x86_64", "-v"]);
    command.manifests = vec![manifest.path().into()];

    let lines = check(&command).unwrap();
    assert_eq!(
        lines[1],
        indoc! {"
            example.com/shapes: shapes.go:12:6: struct Padded could have size 16 (currently 24):
            \tRecommended alignment:
            \t\tb (size 8)
            \t\ta (size 1)
            \t\tc (size 1)"}
    );
}

#[test]
fn test_check_32_bit_target() {
    let manifest = TempManifest::new("x86", SHAPES);
    let mut command = parse_check(&["--x86"]);
    command.manifests = vec![manifest.path().into()];

    // With 4-byte alignment `Padded` becomes 16 bytes and can only shrink to 12,
    // while `Header` packs into 1 + pad + 8 + 2 + pad = 16 against a minimum of 12.
    assert_eq!(
        check(&command),
        Ok(vec![
            "example.com/shapes: header.go:8:6: struct Header could have size 12 (currently 16)"
                .to_string(),
            "example.com/shapes: shapes.go:12:6: struct Padded could have size 12 (currently 16)"
                .to_string(),
        ])
    );
}

#[test]
fn test_check_clean_manifest() {
    let manifest = TempManifest::new(
        "clean",
        r#"{ "package": "clean", "records": [ { "name": "Pair", "fields": [
            { "name": "x", "type": "u64" }, { "name": "y", "type": "u32" }
        ] }, { "name": "Empty" } ] }"#,
    );
    let mut command = parse_check(&["--aarch64"]);
    command.manifests = vec![manifest.path().into()];

    assert_eq!(check(&command), Ok(vec![]));
}

#[test]
fn test_check_fails_before_reporting() {
    let good = TempManifest::new("good", SHAPES);
    let broken = TempManifest::new(
        "broken",
        r#"{ "records": [ { "name": "Bad", "fields": [ { "name": "x", "type": "Nope" } ] } ] }"#,
    );

    let mut command = parse_check(&["--x86_64"]);
    command.manifests = vec![good.path().into(), broken.path().into()];

    assert_eq!(check(&command), Err(()));
}

#[test]
fn test_check_rejects_deeply_nested_types() {
    let manifest = TempManifest::new(
        "deep",
        &format!(
            r#"{{ "records": [ {{ "name": "Deep", "fields": [ {{ "name": "p", "type": "{}u8" }} ] }} ] }}"#,
            "*".repeat(1_000_000)
        ),
    );
    let mut command = parse_check(&["--x86_64"]);
    command.manifests = vec![manifest.path().into()];

    assert_eq!(check(&command), Err(()));
}
