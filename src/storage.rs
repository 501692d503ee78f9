//! 目录管理模块
//!
//! # 设计思路
//!
//! 工具运行时会确保顶层 `assets/` 目录存在。这是历史行为：
//! 实际输出写在 `app/assets/` 下，该目录不会收到任何文件，但仍保持创建以兼容既有构建脚本。
//!
//! 输出目录本身不会被创建，由调用方保证其存在。

use std::fs;
use std::path::PathBuf;

use crate::asset_generator::{GeneratorConfig, ImageError};

/// 确保遗留的 `assets/` 目录存在，返回其路径。
pub fn ensure_legacy_assets_dir(config: &GeneratorConfig) -> Result<PathBuf, ImageError> {
    let dir = config.legacy_assets();
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| {
            ImageError::FileSystem(format!("创建目录 '{}' 失败: {}", dir.display(), e))
        })?;
        log::debug!("📁 已创建目录 {}", dir.display());
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_directory_once_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::with_root(tmp.path());

        let first = ensure_legacy_assets_dir(&config).unwrap();
        let second = ensure_legacy_assets_dir(&config).unwrap();

        assert_eq!(first, tmp.path().join("assets"));
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn file_in_the_way_is_a_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("blocker"), b"x").unwrap();
        let mut config = GeneratorConfig::with_root(tmp.path());
        config.legacy_assets_dir = PathBuf::from("blocker/assets");

        let result = ensure_legacy_assets_dir(&config);

        assert!(matches!(result, Err(ImageError::FileSystem(_))));
    }
}
