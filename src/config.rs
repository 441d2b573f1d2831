//! 应用配置持久化
//!
//! 只保存 UI 偏好（主题）。任务列表本身不落盘，每次会话从种子列表开始。

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 获取 ~/.tuido 目录
fn tuido_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tuido")
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    tuido_dir().join("config.toml")
}

/// 加载配置（文件不存在时返回默认值）
///
/// 读取或解析失败返回错误；调用方用 `unwrap_or_default` 降级，
/// 损坏的配置文件不会阻止启动。
pub fn load_config() -> Result<Config> {
    let path = config_path();
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    // 确保 ~/.tuido 目录存在
    let dir = tuido_dir();
    fs::create_dir_all(&dir)?;

    let path = config_path();
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
