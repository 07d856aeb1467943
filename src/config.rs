use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 输出文件后缀（追加在输入文件名之后）
    pub output_suffix: String,
    /// 题目 ID 前缀，后接行号
    pub id_prefix: String,
    /// 写入元数据的 ILIAS 版本
    pub ilias_version: String,
    /// 写入元数据的作者
    pub author: String,
    /// 每道题的作答时长
    pub duration: String,
    /// 选择题选项是否乱序
    pub shuffle_answers: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_suffix: ".ilias.xml".to_string(),
            id_prefix: "il_0_qst_".to_string(),
            ilias_version: "4.3.5 2013-10-08".to_string(),
            author: "TIQI - The ILIAS Question Importer".to_string(),
            duration: "P0Y0M0DT0H1M0S".to_string(),
            shuffle_answers: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值，然后应用环境变量覆盖
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AppError::file_read_failed(path.display().to_string(), e))?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        config.with_env_overrides()
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            output_suffix: std::env::var("QPOOL_OUTPUT_SUFFIX").unwrap_or(self.output_suffix),
            id_prefix: std::env::var("QPOOL_ID_PREFIX").unwrap_or(self.id_prefix),
            ilias_version: std::env::var("QPOOL_ILIAS_VERSION").unwrap_or(self.ilias_version),
            author: std::env::var("QPOOL_AUTHOR").unwrap_or(self.author),
            duration: std::env::var("QPOOL_DURATION").unwrap_or(self.duration),
            shuffle_answers: env_bool("QPOOL_SHUFFLE_ANSWERS")?.unwrap_or(self.shuffle_answers),
            verbose_logging: env_bool("QPOOL_VERBOSE_LOGGING")?.unwrap_or(self.verbose_logging),
        })
    }
}

fn env_bool(var_name: &str) -> AppResult<Option<bool>> {
    match std::env::var(var_name) {
        Ok(value) => value.parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: "bool".to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_ilias_conventions() {
        let config = Config::default();
        assert_eq!(config.output_suffix, ".ilias.xml");
        assert_eq!(config.id_prefix, "il_0_qst_");
        assert!(config.shuffle_answers);
    }

    #[test]
    fn test_from_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "author = \"Test Author\"").unwrap();
        writeln!(file, "shuffle_answers = false").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.author, "Test Author");
        assert!(!config.shuffle_answers);
        assert_eq!(config.duration, "P0Y0M0DT0H1M0S");
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "shuffle_answers = \"maybe\"").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(
            result,
            Err(crate::error::AppError::Config(ConfigError::TomlParseFailed { ref path, .. }))
                if !path.is_empty()
        ));
    }
}
