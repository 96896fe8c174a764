//! End-to-end CLI tests for site-render

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get a command pointing to the site-render binary
fn site_render() -> Command {
    cargo_bin_cmd!("site-render")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        site_render()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("hackathon"))
            .stdout(predicate::str::contains("section"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        site_render()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Rendering
// ============================================

mod rendering {
    use super::*;

    #[test]
    fn renders_hackathon_page_in_section_order() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public/hackathon.html");

        site_render()
            .current_dir(temp.path())
            .arg("hackathon")
            .arg("--content")
            .arg(fixtures_path().join("hackathon.md"))
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("page written");
        assert!(html.starts_with("<!DOCTYPE html>"));

        let landing = html.find("Alephium Hackathon").expect("landing");
        let intro = html.find("Build with us").expect("intro");
        let info = html.find("Who can join").expect("info");
        assert!(landing < intro);
        assert!(intro < info);
        assert!(html.contains("theme-scope theme-dark"));
        assert!(html.contains("<li>Ralph</li>"));
    }

    #[test]
    fn renders_section_preview_with_theme() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("roadmap.html");

        site_render()
            .current_dir(temp.path())
            .args(["section", "todo-list", "--theme", "dark"])
            .arg("--content")
            .arg(fixtures_path().join("roadmap.yaml"))
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("preview written");
        assert!(html.contains("theme-scope theme-dark"));
        assert_eq!(html.matches("class=\"todo-check\"").count(), 2);
        assert!(html.contains("Mobile wallet"));
    }

    #[test]
    fn config_overrides_title_and_assets() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("site.toml");
        std::fs::write(
            &config,
            "[site]\ntitle = \"Alephium Roadmap\"\n\n[assets]\nstars_background = \"/static/night.svg\"\n",
        )
        .expect("write config");
        let out = temp.path().join("roadmap.html");

        site_render()
            .current_dir(temp.path())
            .args(["section", "todo-list"])
            .arg("--content")
            .arg(fixtures_path().join("roadmap.yaml"))
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("preview written");
        assert!(html.contains("<title>Alephium Roadmap</title>"));
        assert!(html.contains("url('/static/night.svg')"));
        assert!(html.contains("theme-scope theme-light"));
    }
}

// ============================================
// Validation
// ============================================

mod validation {
    use super::*;

    #[test]
    fn check_reports_valid_content() {
        site_render()
            .arg("check")
            .arg("--content")
            .arg(fixtures_path().join("numbers.json"))
            .args(["--kind", "numbers"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ok (2 figures)"));
    }

    #[test]
    fn check_rejects_image_without_sources() {
        site_render()
            .arg("check")
            .arg("--content")
            .arg(fixtures_path().join("broken_usability.json"))
            .args(["--kind", "usability"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[site-render] Error:"))
            .stderr(predicate::str::contains("content.images[0]"));
    }

    #[test]
    fn missing_content_file_fails() {
        let temp = TempDir::new().expect("temp dir");

        site_render()
            .current_dir(temp.path())
            .args(["hackathon", "--content", "nope.md", "--out", "out.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read nope.md"));

        assert!(!temp.path().join("out.html").exists());
    }

    #[test]
    fn unsupported_extension_fails() {
        site_render()
            .args(["check", "--content", "content.toml", "--kind", "hackathon"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported content file"));
    }
}
