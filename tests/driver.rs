use assert_cmd::Command;

const ALWAYS: [&str; 21] = [
    "Arrays",
    "Auto, Decltype, Typedef (type inference)",
    "Casting",
    "Chrono",
    "Classes",
    "Containers",
    "Conversion",
    "Enums",
    "Exceptions",
    "Files & Streams",
    "Formatting",
    "Initialization",
    "Lambda",
    "Move semantics",
    "Operator overloading",
    "Numbers",
    "Pointers & References",
    "Smart pointers",
    "Strings",
    "Templates",
    "Recursion",
];

fn run_tour() -> String {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::cargo_bin("feature-tour")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success(), "The driver should always exit with zero!");
    assert!(dir.path().join("test.dat").exists(), "The file topic writes into the working directory.");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_every_header_is_printed_in_order() {
    let stdout = run_tour();
    let mut expected: Vec<&str> = ALWAYS.to_vec();
    if cfg!(feature = "random") {
        expected.insert(17, "Rand");
    }
    if cfg!(feature = "regex") {
        let at = expected.iter().position(|title| *title == "Smart pointers").unwrap();
        expected.insert(at, "Regular expressions");
    }
    if cfg!(feature = "graphics") {
        expected.push("Graphics math");
    }

    let headers: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("*** ")?.strip_suffix(" ***"))
        .collect();
    assert_eq!(headers, expected);
}

#[test]
fn test_topics_are_separated_by_blank_lines() {
    let stdout = run_tour();
    assert!(stdout.starts_with("*** Arrays ***\n"));
    assert!(stdout.ends_with("\n\n"));
    for block in stdout.split("\n\n*** ").skip(1) {
        assert!(block.contains(" ***\n"), "Every block should start with a header line, got {block:?}");
    }
    assert!(!stdout.contains("ERROR"), "No topic should fail!");
}
