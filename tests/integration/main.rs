//! Integration tests for Jibflags

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[plugins."com.google.cloud.tools:jib-maven-plugin".container]
appRoot = "/app"
jvmFlags = ["-Xmx512m", "-Djava.security.egd=file:/dev/./urandom"]
"#;

    fn jibflags() -> Command {
        cargo_bin_cmd!("jibflags")
    }

    fn write_manifest(dir: &Path, content: &str) -> String {
        let path = dir.join("project.toml");
        std::fs::write(&path, content).unwrap();
        path.display().to_string()
    }

    #[test]
    fn help_displays() {
        jibflags()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("JVM flags file layer extension"));
    }

    #[test]
    fn version_displays() {
        jibflags()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("jibflags"));
    }

    #[test]
    fn missing_manifest_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        jibflags()
            .args(["--project", &temp.path().join("project.toml").display().to_string()])
            .arg("flags")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Project manifest not found"))
            .stderr(predicate::str::contains("--project"));
    }

    #[test]
    fn flags_lists_configured() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);

        jibflags()
            .args(["--project", &manifest, "flags"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-Xmx512m"))
            .stdout(predicate::str::contains(
                "-Djava.security.egd=file:/dev/./urandom",
            ));
    }

    #[test]
    fn flags_reports_empty_project() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), "");

        jibflags()
            .args(["--project", &manifest, "flags"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No JVM flags configured"));
    }

    #[test]
    fn render_writes_flags_file() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);

        jibflags()
            .args(["--project", &manifest, "render"])
            .assert()
            .success()
            .stdout(predicate::str::contains("jib-jvm-flags-file"));

        let file = temp
            .path()
            .join("target")
            .join("jib-cache")
            .join("jib-jvm-flags-file");
        assert_eq!(
            std::fs::read_to_string(file).unwrap(),
            "-Xmx512m -Djava.security.egd=file:/dev/./urandom"
        );
    }

    #[test]
    fn render_honors_separator_and_filename() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);

        jibflags()
            .args([
                "--project",
                &manifest,
                "render",
                "--separator",
                ", ",
                "--filename",
                "jvm.options",
            ])
            .assert()
            .success();

        let file = temp.path().join("target").join("jib-cache").join("jvm.options");
        assert_eq!(
            std::fs::read_to_string(file).unwrap(),
            "-Xmx512m, -Djava.security.egd=file:/dev/./urandom"
        );
    }

    #[test]
    fn render_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);

        jibflags().args(["--project", &manifest, "render"]).assert().success();

        let file = temp
            .path()
            .join("target")
            .join("jib-cache")
            .join("jib-jvm-flags-file");
        let before = std::fs::metadata(&file).unwrap().modified().unwrap();

        jibflags().args(["--project", &manifest, "render"]).assert().success();

        let after = std::fs::metadata(&file).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn render_skip_if_empty_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), "");

        jibflags()
            .args(["--project", &manifest, "render", "--skip-if-empty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("nothing to render"));

        assert!(!temp.path().join("target").exists());
    }

    #[test]
    fn apply_appends_layer_to_default_plan() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);

        jibflags()
            .args([
                "--project",
                &manifest,
                "apply",
                "--base-image",
                "eclipse-temurin:21-jre",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"jvm flags\""))
            .stdout(predicate::str::contains("eclipse-temurin:21-jre"))
            .stdout(predicate::str::contains("/app/jib-jvm-flags-file"));
    }

    #[test]
    fn apply_extends_existing_plan_file() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);
        let plan = temp.path().join("plan.json");
        std::fs::write(&plan, r#"{"base_image": "scratch", "layers": []}"#).unwrap();
        let output = temp.path().join("extended.json");

        jibflags()
            .args([
                "--project",
                &manifest,
                "apply",
                "--plan",
                &plan.display().to_string(),
                "--output",
                &output.display().to_string(),
            ])
            .assert()
            .success();

        let extended = std::fs::read_to_string(output).unwrap();
        assert!(extended.contains("\"scratch\""));
        assert!(extended.contains("\"jvm flags\""));
    }

    #[test]
    fn apply_skip_if_empty_leaves_plan_unchanged() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), "");

        jibflags()
            .args(["--project", &manifest, "apply", "--skip-if-empty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"layers\": []"));
    }

    #[test]
    fn apply_invalid_mode_fails() {
        let temp = TempDir::new().unwrap();
        let manifest = write_manifest(temp.path(), MANIFEST);

        jibflags()
            .args(["--project", &manifest, "apply", "--mode", "banana"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid permission mode"));
    }
}
