//! Workspace maintenance and developer workflow commands (`cargo xtask`).
//!
//! The `xtask` binary wraps the web build/check workflow and the theme
//! contrast-ratio report so the repository exposes stable entrypoints through
//! Cargo aliases.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};

use serde::Serialize;

const SITE_CARGO_FEATURE: &str = "csr";
const SITE_STYLESHEET: &str = "crates/site/assets/site.css";
const AA_MIN_CONTRAST: f64 = 4.5;

/// Foreground/background custom-property pairs audited per theme block.
const CONTRAST_PAIRS: [(&str, &str); 4] = [
    ("color-text", "color-surface"),
    ("color-text-secondary", "color-surface"),
    ("color-accent-text", "color-accent"),
    ("color-danger-text", "color-danger"),
];

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "contrast" => contrast(&root, rest),
        "setup-web" => setup_web(&root),
        "build-web" => build_web(&root, rest),
        "check-web" => check_web(&root),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives under workspace root")
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           contrast [--json] [--check]  Report WCAG contrast ratios for the theme palette\n\
           setup-web                    Install wasm target and trunk (if missing)\n\
           build-web [args]             Build static web bundle with trunk\n\
           check-web                    Run site compile checks (CSR native + wasm)\n"
    );
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ContrastEntry {
    theme: String,
    foreground: String,
    background: String,
    foreground_value: String,
    background_value: String,
    ratio: f64,
    aa_pass: bool,
}

fn contrast(root: &Path, args: Vec<String>) -> Result<(), String> {
    let mut as_json = false;
    let mut check = false;
    for arg in &args {
        match arg.as_str() {
            "--json" => as_json = true,
            "--check" => check = true,
            other => return Err(format!("unknown contrast option `{other}`")),
        }
    }

    let path = root.join(SITE_STYLESHEET);
    let css = fs::read_to_string(&path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let palettes = extract_theme_palettes(&css);
    if palettes.is_empty() {
        return Err(format!(
            "no theme palette blocks found in {}",
            path.display()
        ));
    }

    let report = build_report(&palettes)?;

    if as_json {
        let serialized = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("failed to serialize report: {err}"))?;
        println!("{serialized}");
    } else {
        println!(
            "{:<8} {:<24} {:<24} {:>8}  AA",
            "theme", "foreground", "background", "ratio"
        );
        for entry in &report {
            println!(
                "{:<8} {:<24} {:<24} {:>6.2}:1  {}",
                entry.theme,
                entry.foreground,
                entry.background,
                entry.ratio,
                if entry.aa_pass { "pass" } else { "FAIL" }
            );
        }
    }

    if check {
        let failures = report.iter().filter(|entry| !entry.aa_pass).count();
        if failures > 0 {
            return Err(format!(
                "{failures} contrast pair(s) below {AA_MIN_CONTRAST}:1"
            ));
        }
    }

    Ok(())
}

fn build_report(
    palettes: &BTreeMap<String, BTreeMap<String, String>>,
) -> Result<Vec<ContrastEntry>, String> {
    let mut report = Vec::new();

    for (theme, palette) in palettes {
        for (foreground, background) in CONTRAST_PAIRS {
            let foreground_value = palette.get(foreground).ok_or_else(|| {
                format!("theme `{theme}` does not declare --{foreground}")
            })?;
            let background_value = palette.get(background).ok_or_else(|| {
                format!("theme `{theme}` does not declare --{background}")
            })?;

            let ratio = contrast_ratio(
                parse_hex_color(foreground_value)?,
                parse_hex_color(background_value)?,
            );

            report.push(ContrastEntry {
                theme: theme.clone(),
                foreground: foreground.to_string(),
                background: background.to_string(),
                foreground_value: foreground_value.clone(),
                background_value: background_value.clone(),
                ratio,
                aa_pass: ratio >= AA_MIN_CONTRAST,
            });
        }
    }

    Ok(report)
}

/// Collects `--*: #hex` custom properties from every `data-ui-theme` rule
/// block. Non-hex values (such as translucent backdrops) are outside the
/// report's scope and skipped.
fn extract_theme_palettes(css: &str) -> BTreeMap<String, BTreeMap<String, String>> {
    const MARKER: &str = "data-ui-theme=\"";

    let mut palettes: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    let mut rest = css;

    while let Some(start) = rest.find(MARKER) {
        let after = &rest[start + MARKER.len()..];
        let Some(quote) = after.find('"') else {
            break;
        };
        let theme = after[..quote].to_string();
        let Some(open) = after.find('{') else {
            break;
        };
        let block = &after[open + 1..];
        let Some(close) = block.find('}') else {
            break;
        };

        let palette = palettes.entry(theme).or_default();
        for line in block[..close].lines() {
            let line = line.trim();
            let Some(declaration) = line.strip_prefix("--") else {
                continue;
            };
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim().trim_end_matches(';').trim();
            if value.starts_with('#') {
                palette.insert(name.trim().to_string(), value.to_string());
            }
        }

        rest = &block[close..];
    }

    palettes
}

fn parse_hex_color(raw: &str) -> Result<[u8; 3], String> {
    let digits = raw
        .strip_prefix('#')
        .ok_or_else(|| format!("`{raw}` is not a hex color"))?;
    if digits.len() != 6 {
        return Err(format!("`{raw}` is not a 6-digit hex color"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| format!("`{raw}` is not a hex color"))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// WCAG 2.x relative luminance of an sRGB color.
fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let linear = |value: u8| {
        let scaled = f64::from(value) / 255.0;
        if scaled <= 0.03928 {
            scaled / 12.92
        } else {
            ((scaled + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(rgb[0]) + 0.7152 * linear(rgb[1]) + 0.0722 * linear(rgb[2])
}

/// WCAG 2.x contrast ratio between two colors, in the range 1..=21.
fn contrast_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let first = relative_luminance(a);
    let second = relative_luminance(b);
    let lighter = first.max(second);
    let darker = first.min(second);
    (lighter + 0.05) / (darker + 0.05)
}

fn setup_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "rustup",
        vec!["target", "add", "wasm32-unknown-unknown"],
    )?;

    if command_available("trunk") {
        println!("trunk already installed");
        return Ok(());
    }

    run(root, "cargo", vec!["install", "trunk"])
}

fn build_web(root: &Path, args: Vec<String>) -> Result<(), String> {
    ensure_command(
        "trunk",
        "Install it with `cargo xtask setup-web` (or `cargo install trunk`)",
    )?;

    let mut trunk_args = vec![
        "build".to_string(),
        "index.html".to_string(),
        "--release".to_string(),
    ];
    trunk_args.extend(args);

    run_trunk(site_dir(root), trunk_args)
}

fn check_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "cargo",
        vec!["check", "-p", "site", "--features", SITE_CARGO_FEATURE],
    )?;

    if wasm_target_installed() {
        run(
            root,
            "cargo",
            vec![
                "check",
                "-p",
                "site",
                "--target",
                "wasm32-unknown-unknown",
                "--features",
                SITE_CARGO_FEATURE,
            ],
        )?;
    } else {
        eprintln!(
            "warn: wasm32-unknown-unknown target not installed; skipping wasm check (run `cargo xtask setup-web`)"
        );
    }

    Ok(())
}

fn wasm_target_installed() -> bool {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
    else {
        return false;
    };

    if !output.status.success() {
        return false;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .any(|line| line.trim() == "wasm32-unknown-unknown")
}

fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn ensure_command(program: &str, hint: &str) -> Result<(), String> {
    if command_available(program) {
        Ok(())
    } else {
        Err(format!("required command `{program}` not found. {hint}"))
    }
}

fn run(root: &Path, program: &str, args: Vec<&str>) -> Result<(), String> {
    let owned = args.into_iter().map(ToString::to_string).collect();
    run_owned(root, program, owned)
}

fn run_owned(root: &Path, program: &str, args: Vec<String>) -> Result<(), String> {
    print_command(program, &args);
    let status = Command::new(program)
        .current_dir(root)
        .args(&args)
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

fn run_trunk(cwd: PathBuf, args: Vec<String>) -> Result<(), String> {
    print_command("trunk", &args);
    let mut cmd = Command::new("trunk");
    cmd.current_dir(cwd).args(&args);

    // Some environments export NO_COLOR=1, but trunk expects "true"/"false".
    if env::var("NO_COLOR").as_deref() == Ok("1") {
        cmd.env("NO_COLOR", "true");
    }

    let status = cmd
        .status()
        .map_err(|err| format!("failed to start `trunk`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`trunk` exited with status {status}"))
    }
}

fn site_dir(root: &Path) -> PathBuf {
    root.join("crates/site")
}

fn print_command(program: &str, args: &[String]) {
    if args.is_empty() {
        println!("+ {program}");
        return;
    }

    println!("+ {program} {}", args.join(" "));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE_CSS: &str = r#"
.ui-theme-root[data-ui-theme="light"] {
  --color-surface: #ffffff;
  --color-text: #000000;
  --color-text-secondary: #5d564a;
  --color-accent: #8a5a2f;
  --color-accent-text: #ffffff;
  --color-danger: #a4343a;
  --color-danger-text: #ffffff;
  --color-backdrop: rgb(0 0 0 / 0.5);
}

.ui-theme-root[data-ui-theme="dark"] {
  --color-surface: #000000;
  --color-text: #ffffff;
  --color-text-secondary: #b3a994;
  --color-accent: #d9a05b;
  --color-accent-text: #26211a;
  --color-danger: #e5737a;
  --color-danger-text: #26211a;
}
"#;

    #[test]
    fn black_on_white_is_maximum_contrast() {
        let ratio = contrast_ratio([0, 0, 0], [255, 255, 255]);
        assert!((ratio - 21.0).abs() < 0.01, "ratio was {ratio}");
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = [138, 90, 47];
        let b = [246, 244, 239];
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn hex_parsing_accepts_six_digit_colors_only() {
        assert_eq!(parse_hex_color("#8a5a2f"), Ok([0x8a, 0x5a, 0x2f]));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("8a5a2f").is_err());
        assert!(parse_hex_color("#8a5a2g").is_err());
    }

    #[test]
    fn theme_blocks_yield_hex_palettes_without_non_hex_values() {
        let palettes = extract_theme_palettes(SAMPLE_CSS);
        assert_eq!(palettes.len(), 2);

        let light = palettes.get("light").expect("light palette");
        assert_eq!(light.get("color-surface"), Some(&"#ffffff".to_string()));
        assert_eq!(light.get("color-backdrop"), None);
    }

    #[test]
    fn sample_palettes_report_every_audited_pair() {
        let palettes = extract_theme_palettes(SAMPLE_CSS);
        let report = build_report(&palettes).expect("report");
        assert_eq!(report.len(), CONTRAST_PAIRS.len() * 2);
        assert!(report.iter().all(|entry| entry.aa_pass));
    }

    #[test]
    fn missing_audited_token_is_an_error() {
        let palettes = extract_theme_palettes(
            r#".ui-theme-root[data-ui-theme="light"] { --color-surface: #ffffff; }"#,
        );
        let err = build_report(&palettes).expect_err("missing tokens");
        assert!(err.contains("--color-text"), "unexpected error: {err}");
    }

    #[test]
    fn shipped_palette_passes_aa() {
        let css = include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../crates/site/assets/site.css"
        ));
        let report = build_report(&extract_theme_palettes(css)).expect("report");
        assert_eq!(report.len(), CONTRAST_PAIRS.len() * 2);
        for entry in report {
            assert!(
                entry.aa_pass,
                "{} {} on {} was {:.2}:1",
                entry.theme, entry.foreground, entry.background, entry.ratio
            );
        }
    }
}
