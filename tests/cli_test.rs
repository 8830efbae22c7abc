use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn audit_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("complexity-audit").unwrap();
    cmd.current_dir(dir)
        .env_remove("COMPLEXITY_AUDIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_runs_with_no_arguments_using_defaults() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("src/App.tsx"),
        "export function App() { return null; }\n",
    );

    let output = audit_cmd(temp.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout:\n{stdout}");
    assert!(stdout.contains("Evaluating cyclomatic complexity (CCN)..."));
    assert!(stdout.contains("Report file created/updated: complejidad_reporte.txt"));
    let report = fs::read_to_string(temp.path().join("complejidad_reporte.txt")).unwrap();
    assert_eq!(report.matches("Excellent!").count(), 2);
}

#[test]
fn test_skipped_files_reported_on_stdout_and_logged() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("src/broken.rs"), "fn (");
    write(&temp.path().join("src/ok.js"), "function ok() {}\n");

    let output = audit_cmd(temp.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stdout:\n{stdout}");
    assert!(
        stdout.contains("Could not analyze src/broken.rs:"),
        "stdout:\n{stdout}"
    );
    assert!(stderr.contains("broken.rs"), "stderr:\n{stderr}");
}

#[test]
fn test_config_file_changes_thresholds() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("web/util.js"),
        "function pick(a, b) { return a && b ? a : b; }\n",
    );
    write(
        &temp.path().join(".complexity-audit.toml"),
        "roots = [\"web\"]\nfrontend_root = \"web\"\nccn_threshold = 2\noutput = \"out/report.txt\"\n",
    );

    let output = audit_cmd(temp.path()).output().unwrap();
    assert!(output.status.success());

    let report = fs::read_to_string(temp.path().join("out/report.txt")).unwrap();
    assert!(report.contains("Filter: only functions with CCN > 2"));
    assert!(report.contains("| pick "));
}

#[test]
fn test_missing_lizard_exits_with_hint_and_no_report() {
    let temp = TempDir::new().unwrap();
    let empty_path = temp.path().join("bin");
    fs::create_dir_all(&empty_path).unwrap();
    write(&temp.path().join("src/a.js"), "function a() {}\n");

    let output = audit_cmd(temp.path())
        .args(["--engine", "lizard"])
        .env("PATH", &empty_path)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stdout.contains("pip install lizard"), "stdout:\n{stdout}");
    assert!(!stdout.contains("Evaluating"));
    assert!(!temp.path().join("complejidad_reporte.txt").exists());
}

#[test]
fn test_missing_frontend_root_is_an_error() {
    let temp = TempDir::new().unwrap();

    let output = audit_cmd(temp.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stdout.contains("directory not found"), "stdout:\n{stdout}");
}

#[test]
fn test_init_then_refuse_overwrite() {
    let temp = TempDir::new().unwrap();

    audit_cmd(temp.path()).arg("init").assert().success();
    assert!(temp.path().join(".complexity-audit.toml").exists());

    audit_cmd(temp.path()).arg("init").assert().failure();
    audit_cmd(temp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_inspect_lists_functions_with_spans() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("Editor.tsx"),
        "function a(x) {\n  if (x) { return 1; }\n  return 2;\n}\n",
    );

    audit_cmd(temp.path())
        .args(["inspect", "Editor.tsx"])
        .assert()
        .success()
        .stdout("Name: a, CCN: 2, Lines: 1-4\n");
}
