use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::animation::skills::SkillAnimatorConfig;
use crate::animation::typing::{TypingConfig, WordList};
use crate::error::{InvalidConfiguration, require_nonzero};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub content_path: Option<String>,
    #[serde(default = "default_typing_speed_ms")]
    pub typing_speed_ms: u64,
    #[serde(default = "default_deleting_speed_ms")]
    pub deleting_speed_ms: u64,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    #[serde(default = "default_skill_step")]
    pub skill_step: u32,
    #[serde(default = "default_skill_tick_ms")]
    pub skill_tick_ms: u64,
    #[serde(default = "default_skill_stagger_ms")]
    pub skill_stagger_ms: u64,
    #[serde(default = "default_skill_reveal_delay_ms")]
    pub skill_reveal_delay_ms: u64,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_theme() -> String {
    "dark".to_string()
}
fn default_typing_speed_ms() -> u64 {
    100
}
fn default_deleting_speed_ms() -> u64 {
    50
}
fn default_pause_ms() -> u64 {
    2000
}
fn default_skill_step() -> u32 {
    2
}
fn default_skill_tick_ms() -> u64 {
    30
}
fn default_skill_stagger_ms() -> u64 {
    200
}
fn default_skill_reveal_delay_ms() -> u64 {
    500
}
fn default_frame_ms() -> u64 {
    16
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("folio.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            content_path: None,
            typing_speed_ms: default_typing_speed_ms(),
            deleting_speed_ms: default_deleting_speed_ms(),
            pause_ms: default_pause_ms(),
            skill_step: default_skill_step(),
            skill_tick_ms: default_skill_tick_ms(),
            skill_stagger_ms: default_skill_stagger_ms(),
            skill_reveal_delay_ms: default_skill_reveal_delay_ms(),
            frame_ms: default_frame_ms(),
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }

    pub fn typing_config(&self, words: WordList) -> Result<TypingConfig, InvalidConfiguration> {
        TypingConfig::new(
            words,
            Duration::from_millis(self.typing_speed_ms),
            Duration::from_millis(self.deleting_speed_ms),
            Duration::from_millis(self.pause_ms),
        )
    }

    pub fn skill_animator_config(&self) -> Result<SkillAnimatorConfig, InvalidConfiguration> {
        SkillAnimatorConfig::new(
            self.skill_step,
            Duration::from_millis(self.skill_tick_ms),
            Duration::from_millis(self.skill_stagger_ms),
        )
    }

    pub fn skill_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.skill_reveal_delay_ms)
    }

    pub fn frame_interval(&self) -> Result<Duration, InvalidConfiguration> {
        require_nonzero("frame interval", Duration::from_millis(self.frame_ms))
    }
}
