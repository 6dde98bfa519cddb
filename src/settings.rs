//! Engine configuration
//!
//! Defaults reproduce the greeting page exactly. The web host may override any
//! field with a JSON blob in the canvas `data-config` attribute.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum simultaneous particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => MAX_PARTICLES,
            QualityPreset::High => 600,
        }
    }
}

/// One continuous effect: burst on start, then a batch every period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Spawns queued immediately when the effect starts
    pub initial_burst: usize,
    /// Spawns queued on every timer firing
    pub batch: usize,
    /// Timer period in milliseconds
    pub period_ms: u32,
}

impl CadenceConfig {
    pub const CONFETTI: Self = Self {
        initial_burst: CONFETTI_INITIAL_BURST,
        batch: CONFETTI_PER_SPAWN,
        period_ms: CONFETTI_SPAWN_RATE_MS,
    };

    pub const BALLOONS: Self = Self {
        initial_burst: BALLOON_INITIAL_BURST,
        batch: BALLOONS_PER_SPAWN,
        period_ms: BALLOON_SPAWN_RATE_MS,
    };
}

/// Greeting burst queued once after the page loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeBurst {
    pub delay_ms: u32,
    pub confetti: usize,
    pub balloons: usize,
}

impl Default for WelcomeBurst {
    fn default() -> Self {
        Self {
            delay_ms: WELCOME_DELAY_MS,
            confetti: WELCOME_CONFETTI,
            balloons: WELCOME_BALLOONS,
        }
    }
}

/// Particle engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quality preset (sets the population ceiling)
    pub quality: QualityPreset,
    /// Queued spawns materialized per frame
    pub spawn_per_tick: usize,
    /// Continuous confetti
    pub confetti: CadenceConfig,
    /// Continuous balloons
    pub balloons: CadenceConfig,
    /// Page-load greeting
    pub welcome: WelcomeBurst,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            spawn_per_tick: SPAWN_PER_TICK,
            confetti: CadenceConfig::CONFETTI,
            balloons: CadenceConfig::BALLOONS,
            welcome: WelcomeBurst::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall spawning or spin timers
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_per_tick == 0 {
            return Err(ConfigError::Zero("spawn_per_tick"));
        }
        if self.confetti.period_ms == 0 {
            return Err(ConfigError::Zero("confetti.period_ms"));
        }
        if self.balloons.period_ms == 0 {
            return Err(ConfigError::Zero("balloons.period_ms"));
        }
        let timers = [
            ("confetti.period_ms", self.confetti.period_ms),
            ("balloons.period_ms", self.balloons.period_ms),
            ("welcome.delay_ms", self.welcome.delay_ms),
        ];
        for (name, ms) in timers {
            if ms > MAX_TIMER_MS {
                return Err(ConfigError::TooLong(name));
            }
        }
        Ok(())
    }

    /// Population ceiling
    pub fn max_particles(&self) -> usize {
        self.quality.max_particles()
    }

    /// Load from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Self {
        if let Some(json) = canvas.get_attribute("data-config") {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded engine config from data-config");
                    return config;
                }
                Err(e) => log::warn!("Ignoring data-config: {}", e),
            }
        }

        log::info!("Using default engine config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = EngineConfig::default();
        assert_eq!(config.max_particles(), 300);
        assert_eq!(config.spawn_per_tick, 3);
        assert_eq!(config.confetti.initial_burst, 40);
        assert_eq!(config.confetti.batch, 6);
        assert_eq!(config.confetti.period_ms, 120);
        assert_eq!(config.balloons.initial_burst, 15);
        assert_eq!(config.balloons.batch, 4);
        assert_eq!(config.balloons.period_ms, 500);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "quality": "low", "spawn_per_tick": 5 }"#)
            .expect("valid config");
        assert_eq!(config.quality, QualityPreset::Low);
        assert_eq!(config.max_particles(), 100);
        assert_eq!(config.spawn_per_tick, 5);
        assert_eq!(config.balloons, CadenceConfig::BALLOONS);
    }

    #[test]
    fn test_zero_quota_rejected() {
        let err = EngineConfig::from_json(r#"{ "spawn_per_tick": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Zero("spawn_per_tick")));
    }

    #[test]
    fn test_zero_period_rejected() {
        let json = r#"{ "balloons": { "initial_burst": 1, "batch": 1, "period_ms": 0 } }"#;
        let err = EngineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Zero("balloons.period_ms")));
    }

    #[test]
    fn test_oversized_timers_rejected() {
        let json = r#"{ "confetti": { "initial_burst": 1, "batch": 1, "period_ms": 3000000000 } }"#;
        let err = EngineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::TooLong("confetti.period_ms")));

        let json = r#"{ "welcome": { "delay_ms": 4294967295, "confetti": 1, "balloons": 1 } }"#;
        let err = EngineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::TooLong("welcome.delay_ms")));

        let mut config = EngineConfig::default();
        config.balloons.period_ms = MAX_TIMER_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_preset() {
        let config = EngineConfig::from_preset(QualityPreset::High);
        assert_eq!(config.max_particles(), 600);
        assert_eq!(config.quality.as_str(), "High");
    }
}
