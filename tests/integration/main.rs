//! Integration tests for ringcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn ringcache(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("ringcache");
        // Isolate each test from the user's real config and cache.
        cmd.arg("--cache-dir").arg(temp.path());
        cmd.arg("--config").arg(temp.path().join("config.toml"));
        cmd.env_remove("RINGCACHE_DIR").env_remove("RINGCACHE_CONFIG");
        cmd
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("ringcache")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("disk-memoized SVG progress rings"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("ringcache")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("ringcache"));
    }

    #[test]
    fn render_prints_path_and_writes_asset() {
        let temp = TempDir::new().unwrap();
        let output = ringcache(&temp)
            .args(["render", "--progress", "42", "--color", "3584e4"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3584e4.42.00.svg"))
            .get_output()
            .clone();

        let path = String::from_utf8(output.stdout).unwrap().trim().to_string();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("stroke-dashoffset"));
        assert!(content.contains("stroke=\"#3584e4\""));
    }

    #[test]
    fn render_twice_returns_same_path() {
        let temp = TempDir::new().unwrap();
        let args = ["render", "--progress", "42", "--color", "3584e4"];

        let first = ringcache(&temp).args(args).assert().success().get_output().clone();
        let second = ringcache(&temp).args(args).assert().success().get_output().clone();

        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn render_clamps_out_of_range_progress() {
        let temp = TempDir::new().unwrap();

        let high = ringcache(&temp)
            .args(["render", "--progress", "150", "--color", "abc123"])
            .assert()
            .success()
            .get_output()
            .clone();
        let full = ringcache(&temp)
            .args(["render", "--progress", "100", "--color", "abc123"])
            .assert()
            .success()
            .get_output()
            .clone();

        assert_eq!(high.stdout, full.stdout);
        assert!(String::from_utf8(full.stdout)
            .unwrap()
            .contains("abc123.100.00.svg"));
    }

    #[test]
    fn render_requires_progress() {
        let temp = TempDir::new().unwrap();
        ringcache(&temp).arg("render").assert().failure();
    }

    #[test]
    fn purge_removes_cached_assets() {
        let temp = TempDir::new().unwrap();

        ringcache(&temp)
            .args(["render", "--progress", "42", "--color", "3584e4"])
            .assert()
            .success();

        ringcache(&temp)
            .arg("purge")
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed 1 cached asset(s)"));

        ringcache(&temp)
            .arg("purge")
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed 0 cached asset(s)"));
    }

    #[test]
    fn config_path_displays() {
        let temp = TempDir::new().unwrap();
        ringcache(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_displays_defaults() {
        let temp = TempDir::new().unwrap();
        ringcache(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[visual]"))
            .stdout(predicate::str::contains("3584e4"));
    }
}
