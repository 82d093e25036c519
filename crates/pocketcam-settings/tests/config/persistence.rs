use pocketcam_settings::{Config, MeasurementSystem, SettingsError};
use pocketcam_toolpath::PocketStrategy;
use tempfile::TempDir;

fn customized() -> Config {
    let mut config = Config::new();
    config.tool.diameter = 6.0;
    config.tool.feed_rate = 600.0;
    config.material.thickness = 12.0;
    config.pocket.depth = Some(4.0);
    config.pocket.offset = 0.5;
    config.pocket.strategy = PocketStrategy::ScanLine;
    config.pocket.fill.angle_step = 0.5;
    config.output.units = MeasurementSystem::Imperial;
    config.output.line_numbers = true;
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pocket.toml");

    let config = customized();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("strategy = \"scan_line\""));
    assert!(text.contains("units = \"imperial\""));
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pocket.json");

    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[tool]\ndiameter = 2.0\n\n[material]\nthickness = 5.0\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.tool.diameter, 2.0);
    assert_eq!(config.tool.safe_height, 5.0);
    assert_eq!(config.pocket.depth, None);
    assert_eq!(config.pocket_parameters().depth, 5.0);
    assert_eq!(config.pocket.strategy, PocketStrategy::RadialSweep);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[tool]\ndiameter = -3.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { ref key, .. } if key == "tool.diameter"));
}

#[test]
fn test_save_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");

    let mut config = Config::new();
    config.material.thickness = 0.0;
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_malformed_and_unsupported_files() {
    let dir = TempDir::new().unwrap();

    let toml_path = dir.path().join("broken.toml");
    std::fs::write(&toml_path, "[tool\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml_path),
        Err(SettingsError::TomlError(_))
    ));

    let json_path = dir.path().join("broken.json");
    std::fs::write(&json_path, "{ \"tool\": ").unwrap();
    assert!(matches!(
        Config::load_from_file(&json_path),
        Err(SettingsError::JsonError(_))
    ));

    let yaml_path = dir.path().join("config.yaml");
    assert!(matches!(
        Config::new().save_to_file(&yaml_path),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_load_or_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

    customized().save_to_file(&path).unwrap();
    assert_eq!(Config::load_or_default(&path).unwrap(), customized());
}

#[test]
fn test_generator_follows_output_settings() {
    let config = customized();
    let generator = config.gcode_generator();
    assert_eq!(generator.units(), MeasurementSystem::Imperial);
    assert_eq!(generator.feed_rate, 600.0);

    let program = generator.generate(&[]);
    assert!(program.lines().any(|l| l.starts_with("N10")));
    assert!(program.contains("G20"));
}
