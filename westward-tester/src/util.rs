use anyhow::{Context, Result};
use std::path::Path;
use westward_game::TrailConfig;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Load a trail configuration from a JSON file, or the defaults when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> Result<TrailConfig> {
    let Some(path) = path else {
        return Ok(TrailConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    TrailConfig::from_json(&raw)
        .with_context(|| format!("invalid trail config in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn load_config_defaults_without_a_path() {
        assert_eq!(load_config(None).unwrap(), TrailConfig::default());
    }

    #[test]
    fn load_config_reads_and_validates_json() {
        let dir = std::env::temp_dir();
        let good = dir.join("westward-config-good.json");
        std::fs::write(&good, r#"{ "destination_distance": 750 }"#).unwrap();
        assert_eq!(load_config(Some(&good)).unwrap().destination_distance, 750);

        let bad = dir.join("westward-config-bad.json");
        std::fs::write(&bad, r#"{ "party_names": [] }"#).unwrap();
        let err = load_config(Some(&bad)).unwrap_err();
        assert!(format!("{err:#}").contains("party must have at least one member"));

        let missing = dir.join("westward-config-missing.json");
        let _ = std::fs::remove_file(&missing);
        assert!(load_config(Some(&missing)).is_err());
    }
}
