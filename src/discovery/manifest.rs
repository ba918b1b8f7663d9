//! Project manifest (iconfx.yaml) parsing.
//!
//! The manifest names the icon source directories, where processed icons
//! go and which effects every icon in the batch receives.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::{Brightness, EffectRequest, OpacityThreshold, OutlineSpec};

/// Project manifest loaded from iconfx.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for PNG icons.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Output directory for processed icons.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Effects applied to every icon.
    pub effects: EffectsConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("processed")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            excludes: vec![],
            effects: EffectsConfig::default(),
        }
    }
}

/// Effect settings as written in the manifest.
///
/// Numeric values are clamped the same way the command line clamps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub padding: Option<u32>,
    pub remove_partial_transparency: bool,
    pub opacity_threshold: Option<i64>,
    pub brightness: Option<i64>,
    /// Outline in `"14px #bdbabd"` form.
    pub outline: Option<String>,
}

impl EffectsConfig {
    /// Convert to a pipeline request, parsing the outline string.
    pub fn to_request(&self) -> Result<EffectRequest> {
        Ok(EffectRequest {
            padding: self.padding,
            remove_transparency: self.remove_partial_transparency,
            opacity_threshold: OpacityThreshold::new(self.opacity_threshold.unwrap_or(0)),
            brightness: self.brightness.map(Brightness::new),
            outline: self.outline.as_deref().map(OutlineSpec::parse).transpose()?,
        })
    }
}

impl Manifest {
    /// Load manifest from an iconfx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check iconfx.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Minimal glob matching for exclude patterns.
///
/// - `*_512.png` matches by suffix
/// - `**/dir/*` matches anything inside `dir` at any depth
/// - `dir/*` matches anything inside a `dir` path segment
/// - anything else matches as a substring
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir)),
            None => path.ends_with(rest) || path.contains(&format!("/{}", rest)),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.sources.is_empty());
        assert_eq!(manifest.effects, EffectsConfig::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
sources:
  - raw/
  - extra/
output: dist/icons
excludes:
  - "*_512.png"
  - "**/wip/*"
effects:
  padding: 14
  remove_partial_transparency: true
  opacity_threshold: 128
  brightness: -20
  outline: "14px #bdbabd"
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["raw/", "extra/"]);
        assert_eq!(manifest.output, PathBuf::from("dist/icons"));
        assert_eq!(manifest.excludes, vec!["*_512.png", "**/wip/*"]);

        let request = manifest.effects.to_request().unwrap();
        assert_eq!(
            request,
            EffectRequest::new()
                .with_padding(14)
                .with_remove_transparency(OpacityThreshold::new(128))
                .with_brightness(Brightness::new(-20))
                .with_outline(OutlineSpec::new(14, Colour::rgb(0xbd, 0xba, 0xbd)))
        );
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert!(manifest.sources.is_empty());
        assert_eq!(manifest.output, PathBuf::from("processed"));
        assert!(manifest.excludes.is_empty());
        assert!(manifest.effects.to_request().unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("processed"));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Manifest::parse("sources: [unclosed").unwrap_err();
        assert!(matches!(err, IconError::Parse { .. }));
    }

    #[test]
    fn test_bad_outline_in_effects() {
        let manifest = Manifest::parse("effects:\n  outline: \"thick #000\"\n").unwrap();
        let err = manifest.effects.to_request().unwrap_err();
        assert!(matches!(err, IconError::InvalidOutlineSpec { .. }));
    }

    #[test]
    fn test_effect_values_are_clamped() {
        let effects = EffectsConfig {
            opacity_threshold: Some(1000),
            brightness: Some(-1000),
            ..Default::default()
        };
        let request = effects.to_request().unwrap();

        assert_eq!(request.opacity_threshold.value(), 255);
        assert_eq!(request.brightness, Some(Brightness::new(-100)));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["raw/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["raw/"]);
    }

    #[test]
    fn test_is_excluded_suffix() {
        let manifest = Manifest {
            excludes: vec!["*_512.png".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("sword_512.png")));
        assert!(manifest.is_excluded(Path::new("icons/sword_512.png")));
        assert!(!manifest.is_excluded(Path::new("icons/sword.png")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/wip/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("wip/a.png")));
        assert!(manifest.is_excluded(Path::new("icons/wip/b.png")));
        assert!(!manifest.is_excluded(Path::new("icons/a.png")));
    }

    #[test]
    fn test_is_excluded_substring() {
        let manifest = Manifest {
            excludes: vec!["backup".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("backup")));
        assert!(manifest.is_excluded(Path::new("icons/backup/a.png")));
    }
}
