/*!
 * Integration tests driving the lstree binary
 */

use std::fs::{self, File};
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

fn lstree() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lstree"))
}

#[test]
fn fails_with_usage_when_no_path_is_given() {
    let output = lstree().output().expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}

#[test]
fn fails_with_usage_on_extra_arguments() {
    let output = lstree().args(["one", "two"]).output().expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}

#[test]
fn reports_open_error_for_missing_path() {
    let output = lstree()
        .arg("/no/such/path/anywhere")
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open"), "stderr was: {}", stderr);
}

#[test]
fn prints_one_tagged_line_for_a_regular_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("notes.txt");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "hello").unwrap();

    let output = lstree().arg(&path).output().expect("binary runs");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}(r)\n", path.display())
    );
}

#[test]
fn lists_a_directory_tree_depth_first() {
    // a.txt beside b/, with c.txt nested one level down
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(temp_dir.path().join("b")).unwrap();
    fs::write(temp_dir.path().join("b").join("c.txt"), "c").unwrap();

    let output = lstree().arg(temp_dir.path()).output().expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&"a.txt(r)"));
    assert!(lines.contains(&"b(d)"));
    assert!(lines.contains(&"\tc.txt(r)"));

    // Sibling order is up to the OS; the parent must still precede its child
    let b_pos = lines.iter().position(|l| *l == "b(d)").unwrap();
    let c_pos = lines.iter().position(|l| *l == "\tc.txt(r)").unwrap();
    assert!(b_pos < c_pos);
}

#[test]
fn hidden_entries_never_reach_the_output() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("shown.txt"), "x").unwrap();
    fs::write(temp_dir.path().join(".hidden"), "x").unwrap();
    fs::create_dir(temp_dir.path().join(".secrets")).unwrap();
    fs::write(temp_dir.path().join(".secrets").join("inner.txt"), "x").unwrap();

    let output = lstree().arg(temp_dir.path()).output().expect("binary runs");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "shown.txt(r)\n");
}
