use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use asterism_cli::{Args, run};

/// Returns the `demos` directory at the workspace root
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: PathBuf, config: Option<String>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.txt",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(demo_path, output_path.clone(), None)) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let grid = fs::read_to_string(&output_path).expect("Output should be written");
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 20, "{} height", demo_path.display());
        assert!(
            lines.iter().all(|line| line.chars().count() == 60),
            "{} width",
            demo_path.display()
        );
        assert!(grid.contains('*'), "{} should draw something", demo_path.display());
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_dir().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpected_successes = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join("out.txt");
        if run(&args_for(demo_path, output_path, None)).is_ok() {
            unexpected_successes.push(demo_path.clone());
        }
    }

    assert!(
        unexpected_successes.is_empty(),
        "Error demos rendered without failing: {unexpected_successes:?}"
    );
}

#[test]
fn e2e_config_fill_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[render]\nfill = \"o\"\n").unwrap();

    let output_path = temp_dir.path().join("circle.txt");
    let args = args_for(
        &demos_dir().join("circle.toml"),
        output_path.clone(),
        Some(config_path.to_string_lossy().to_string()),
    );
    run(&args).expect("Circle demo should render");

    let grid = fs::read_to_string(&output_path).unwrap();
    assert!(grid.contains('o'));
    assert!(!grid.contains('*'));
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("absent.toml"),
        temp_dir.path().join("out.txt"),
        None,
    );
    assert!(run(&args).is_err());
}
