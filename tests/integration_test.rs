use question_pool::orchestrator::output_path_for;
use question_pool::{App, Config};
use std::fs;
use std::path::PathBuf;

const SAMPLE: &str = "\
# Geography quiz

[t][g]Capitals
The capital of France is [gap]Paris[/gap].

[t][s]Pick one
Stem line
- wrong
_ right

[t][x]Broken type
this block is skipped

[t][m]Pick many
Stem
_ a
_ b
- c

[t][g]Unterminated
[gap]never[/gap]
";

fn write_sample(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_convert_sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, "quiz.txt", SAMPLE);

    let app = App::initialize(Config::default()).unwrap();
    let stats = app.run(&[input.clone()]).unwrap();

    assert_eq!(stats.files, 1);
    assert_eq!(stats.written, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.warnings, 0);
    assert_eq!(stats.dropped, 1);

    let output = output_path_for(&input, ".ilias.xml");
    assert!(output.ends_with("quiz.txt.ilias.xml"));
    let xml = fs::read_to_string(&output).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert_eq!(xml.matches("<item ").count(), 3);
    assert!(xml.contains(r#"<item ident="il_0_qst_3" title="Capitals" maxattempts="1">"#));
    assert!(xml.contains(r#"<item ident="il_0_qst_6" title="Pick one" maxattempts="1">"#));
    assert!(xml.contains(r#"<item ident="il_0_qst_14" title="Pick many" maxattempts="1">"#));
    assert!(!xml.contains("Broken type"));
    assert!(!xml.contains("Unterminated"));

    // 正文中的标记被转义
    assert!(xml.contains("&lt;p&gt;The capital of France is "));
    assert!(xml.contains("&lt;p&gt;Stem line&lt;/p&gt;"));
    assert!(xml.contains("<fieldentry>MULTIPLE CHOICE QUESTION</fieldentry>"));
    assert!(xml.contains(r#"<response_lid ident="MCMR" rcardinality="Multiple">"#));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, "quiz.txt", SAMPLE);
    let output = output_path_for(&input, ".ilias.xml");

    let app = App::initialize(Config::default()).unwrap();
    app.run(&[input.clone()]).unwrap();
    let first = fs::read(&output).unwrap();
    app.run(&[input]).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_custom_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, "quiz.txt", SAMPLE);

    let config = Config {
        output_suffix: ".pool.xml".to_string(),
        ..Config::default()
    };
    App::initialize(config).unwrap().run(&[input.clone()]).unwrap();

    assert!(output_path_for(&input, ".pool.xml").exists());
}

#[test]
fn test_missing_file_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let present = write_sample(&dir, "present.txt", SAMPLE);

    let app = App::initialize(Config::default()).unwrap();
    let result = app.run(&[missing, present.clone()]);

    assert!(result.is_err());
    assert!(!output_path_for(&present, ".ilias.xml").exists());
}

#[test]
fn test_multiple_files_each_get_output() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_sample(&dir, "a.txt", "[t][g]A\n[gap]x[/gap]\n\n");
    let second = write_sample(&dir, "b.txt", "[t][s]B\nStem\n_ yes\n- no\n\n");

    let app = App::initialize(Config::default()).unwrap();
    let stats = app.run(&[first.clone(), second.clone()]).unwrap();

    assert_eq!(stats.files, 2);
    assert_eq!(stats.written, 2);
    let a = fs::read_to_string(output_path_for(&first, ".ilias.xml")).unwrap();
    let b = fs::read_to_string(output_path_for(&second, ".ilias.xml")).unwrap();
    assert!(a.contains("CLOZE QUESTION"));
    assert!(b.contains("SINGLE CHOICE QUESTION"));
}
