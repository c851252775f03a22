//! Integration tests for the aiobuild binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn aiobuild(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("aiobuild"));
    cmd.current_dir(project.path());
    cmd.env_remove("AIOBUILD_SKIP_BOOTSTRAP");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-bootstrap"))
        .stdout(predicate::str::contains("Python projects"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_list_shows_registered_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("typecheck"))
        .stdout(predicate::str::contains("(default)"));
    Ok(())
}

#[test]
fn cli_metadata_prints_json_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("aiobuild.yml"),
        "meta:\n  name: widget\n  description: A widget\nmodule_info:\n  requirements: [requests]\n",
    )?;

    aiobuild(&temp)
        .arg("metadata")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"widget\""))
        .stdout(predicate::str::contains("requests"));
    assert!(!temp.path().join("setup.cfg").exists());
    Ok(())
}

#[test]
fn cli_quiet_metadata_still_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .args(["-q", "metadata"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"AIOBuild\""));
    Ok(())
}

#[test]
fn cli_quiet_list_still_prints_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .args(["-q", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typecheck"));
    Ok(())
}

#[test]
fn cli_unknown_command_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("deploy"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    aiobuild(&temp)
        .args(["--config", "nope.yml", "metadata"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.yml"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("aiobuild.yml"), "lint:\n  steps: [1, 2\n")?;
    aiobuild(&temp).arg("metadata").assert().code(1);
    Ok(())
}

#[cfg(unix)]
mod with_fake_interpreter {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Write an interpreter stand-in that logs its arguments, fails the
    /// import probe for `unloadable` and exits 1 when running `-m failing`.
    fn fake_interpreter(dir: &Path, unloadable: &str, failing: &str) -> std::path::PathBuf {
        let path = dir.join("fakepy");
        let log = dir.join("calls.log");
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"-c\" ]; then\n\
               echo \"probe $3\" >> '{log}'\n\
               if [ \"$3\" = \"{unloadable}\" ]; then exit 3; fi\n\
               exit 0\n\
             fi\n\
             echo \"$*\" >> '{log}'\n\
             if [ \"$1\" = \"-m\" ] && [ \"$2\" = \"{failing}\" ]; then exit 1; fi\n\
             exit 0\n",
            log = log.display(),
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn write_config(project: &TempDir, interpreter: &Path) {
        fs::write(
            project.path().join("aiobuild.yml"),
            format!("interpreter: {}\n", interpreter.display()),
        )
        .unwrap();
    }

    fn calls(project: &TempDir) -> String {
        fs::read_to_string(project.path().join("calls.log")).unwrap_or_default()
    }

    #[test]
    fn lint_runs_pipeline_and_injects_sections() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let py = fake_interpreter(temp.path(), "none-such", "none-such");
        write_config(&temp, &py);

        aiobuild(&temp)
            .arg("lint")
            .assert()
            .success()
            .stdout(predicate::str::contains("lint passed"));

        let log = calls(&temp);
        let steps = [
            "-m black",
            "-m isort",
            "-m bandit",
            "-m mypy",
            "-m pylint",
            "-m pip wheel",
        ];
        let order: Vec<_> = steps
            .iter()
            .map(|m| log.find(m).unwrap_or_else(|| panic!("{m} never ran")))
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(!log.contains("pip install"));

        let cfg = fs::read_to_string(temp.path().join("setup.cfg"))?;
        assert!(cfg.contains("[isort]"));
        Ok(())
    }

    #[test]
    fn unresolvable_tool_is_reported_and_nothing_runs() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let py = fake_interpreter(temp.path(), "mypy", "none-such");
        write_config(&temp, &py);

        aiobuild(&temp)
            .arg("lint")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("mypy"));

        let log = calls(&temp);
        assert!(log.contains("-m pip install mypy"));
        assert!(!log.contains("-m black"));
        assert!(!temp.path().join("setup.cfg").exists());
        Ok(())
    }

    #[test]
    fn skip_bootstrap_never_probes() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let py = fake_interpreter(temp.path(), "mypy", "none-such");
        write_config(&temp, &py);

        aiobuild(&temp)
            .args(["--skip-bootstrap", "typecheck"])
            .assert()
            .success();

        let log = calls(&temp);
        assert!(!log.contains("probe"));
        assert!(log.contains("-m mypy ."));
        Ok(())
    }

    #[test]
    fn section_injection_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let py = fake_interpreter(temp.path(), "none-such", "none-such");
        write_config(&temp, &py);

        aiobuild(&temp).arg("format").assert().success();
        let first = fs::read_to_string(temp.path().join("setup.cfg"))?;
        aiobuild(&temp).arg("format").assert().success();
        let second = fs::read_to_string(temp.path().join("setup.cfg"))?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn failing_isort_aborts_lint() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let py = fake_interpreter(temp.path(), "none-such", "isort");
        write_config(&temp, &py);

        let assert = aiobuild(&temp).arg("lint").assert().code(1);
        let stderr = String::from_utf8(assert.get_output().stderr.clone())?;

        assert!(stderr.contains("Command 'isort' failed with exit code 1"));
        assert!(!stderr.contains("Some("));
        assert_eq!(stderr.matches('✗').count(), 1);

        let log = calls(&temp);
        assert!(log.contains("-m black"));
        assert!(log.contains("-m isort"));
        assert!(!log.contains("-m mypy"));
        assert!(!log.contains("-m pylint"));
        assert!(!log.contains("-m pip wheel"));
        Ok(())
    }
}
