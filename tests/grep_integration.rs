//! End-to-end tests for the cppgrep CLI.
//!
//! Each test writes C++ fixtures into a temp directory and runs the built
//! binary against them, asserting on output and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const PEOPLE_CPP: &str = "\
struct person_info {
    int age;
};

class person {
public:
    explicit person(int age)
        : _info { age }
    {
    }

private:
    person_info _info;
};

template <typename T>
struct collection {
};

class people : public collection<person> {
};

int add(const int a, const int b)
{
    return a + b;
}

template <typename T>
T multiply(T a, T b)
{
    return a * b;
}
";

fn write_people_cpp(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("people.cpp");
    fs::write(&path, PEOPLE_CPP).unwrap();
    path
}

fn run_cppgrep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cppgrep"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_exits_successfully_without_files() {
    for flag in ["-h", "--help"] {
        let output = run_cppgrep(&[flag]);
        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("Usage"));
        assert!(stdout.contains("--ignore-case"));
        // Help produces no grep output.
        assert!(!stdout.contains("[struct]"));
        assert!(!stdout.contains("[class]"));
    }
}

#[test]
fn missing_file_argument_is_a_usage_error() {
    let output = run_cppgrep(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = run_cppgrep(&["--frobnicate", "whatever.cpp"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn nonexistent_file_fails_fast_with_distinct_status() {
    let dir = TempDir::new().unwrap();
    let good = write_people_cpp(&dir);

    let output = run_cppgrep(&[
        good.to_str().unwrap(),
        "/path/that/does/not/exist.cpp",
    ]);
    assert_eq!(output.status.code(), Some(2));
    // Fail-fast: validation precedes parsing, so not even the good file
    // produced output.
    assert!(stdout_of(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not open source file"));
}

#[test]
fn default_buckets_with_query() {
    let dir = TempDir::new().unwrap();
    let path = write_people_cpp(&dir);

    let output = run_cppgrep(&["-q", "person", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    assert!(stdout.contains("[struct] person_info"));
    assert!(stdout.contains("[class] person"));
    // "people" does not contain "person", so the class people is excluded
    // just like collection.
    assert!(!stdout.contains("[class] people"));
    assert!(!stdout.contains("collection"));
    assert!(!stdout.contains("[function]"));

    // Source order is preserved.
    let info = stdout.find("[struct] person_info").unwrap();
    let person = stdout.find("[class] person").unwrap();
    assert!(info < person);
}

#[test]
fn struct_bucket_includes_struct_templates() {
    let dir = TempDir::new().unwrap();
    let path = write_people_cpp(&dir);

    let output = run_cppgrep(&["--struct", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    assert!(stdout.contains("[struct] person_info"));
    assert!(stdout.contains("[struct] collection"));
    assert!(!stdout.contains("[class]"));
    assert!(!stdout.contains("[function]"));
}

#[test]
fn function_bucket_includes_function_templates() {
    let dir = TempDir::new().unwrap();
    let path = write_people_cpp(&dir);

    let output = run_cppgrep(&["--function", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    assert!(stdout.contains("[function] add"));
    assert!(stdout.contains("[function template] multiply"));
    assert!(!stdout.contains("[struct]"));
}

#[test]
fn template_bucket_alone_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let path = write_people_cpp(&dir);

    let output = run_cppgrep(&["--template", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn ignore_case_query_matches() {
    let dir = TempDir::new().unwrap();
    let path = write_people_cpp(&dir);

    let sensitive = run_cppgrep(&["-q", "PERSON", path.to_str().unwrap()]);
    assert!(stdout_of(&sensitive).is_empty());

    let insensitive = run_cppgrep(&["-q", "PERSON", "-i", path.to_str().unwrap()]);
    let stdout = stdout_of(&insensitive);
    assert!(stdout.contains("[struct] person_info"));
    assert!(stdout.contains("[class] person"));
    assert!(!stdout.contains("[class] people"));
}

#[test]
fn files_report_in_request_order_and_empty_files_are_dropped() {
    let dir = TempDir::new().unwrap();
    let widgets = dir.path().join("widgets.cpp");
    fs::write(&widgets, "class widget {};\n").unwrap();
    let comments = dir.path().join("comments.cpp");
    fs::write(&comments, "// nothing declared here\n").unwrap();
    let gadgets = dir.path().join("gadgets.cpp");
    fs::write(&gadgets, "struct gadget {};\n").unwrap();

    let output = run_cppgrep(&[
        widgets.to_str().unwrap(),
        comments.to_str().unwrap(),
        gadgets.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    assert!(stdout.contains("widget"));
    assert!(stdout.contains("gadget"));
    assert!(!stdout.contains("comments.cpp"));

    let widgets_at = stdout.find("widgets.cpp").unwrap();
    let gadgets_at = stdout.find("gadgets.cpp").unwrap();
    assert!(widgets_at < gadgets_at);
}

#[test]
fn zero_match_run_exits_successfully() {
    let dir = TempDir::new().unwrap();
    let path = write_people_cpp(&dir);

    let output = run_cppgrep(&["-q", "no_such_identifier", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn malformed_source_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.cpp");
    fs::write(&path, "struct ok {}; class broken { void f( ;\n").unwrap();

    let output = run_cppgrep(&["--struct", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("[struct] ok"));
}

#[test]
fn line_and_column_are_one_based() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("point.cpp");
    fs::write(&path, "struct point {\n    int x;\n};\n").unwrap();

    let output = run_cppgrep(&[path.to_str().unwrap()]);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("1:1 [struct] point"));
    assert!(stdout.contains("2:5 [field] x"));
}
