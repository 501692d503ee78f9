//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有路径与策略集中到 `GeneratorConfig`，`Default` 即生产环境使用的固定约定：
//! 从 `app/assets/logo.png` 读取，写回 `app/assets/`，米色背景，Lanczos3 滤镜。
//!
//! 工具本身不读取任何命令行参数或环境变量，`with_root` 仅用于在其它目录下运行（如测试）。

use std::path::{Path, PathBuf};

use image::Rgb;
use image::imageops::FilterType;

/// 画布背景色（#D4A574）。
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([212, 165, 116]);

/// 资源生成配置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 项目根目录，其余相对路径都基于它解析。
    pub project_root: PathBuf,
    /// 源 logo 路径（相对 `project_root`）。
    pub source_path: PathBuf,
    /// 输出目录（相对 `project_root`），必须已存在。
    pub output_dir: PathBuf,
    /// 历史遗留的顶层 `assets/` 目录，运行时会确保其存在，但不向其中写入任何文件。
    pub legacy_assets_dir: PathBuf,
    /// 画布背景色。
    pub background: Rgb<u8>,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_path: PathBuf::from("app/assets/logo.png"),
            output_dir: PathBuf::from("app/assets"),
            legacy_assets_dir: PathBuf::from("assets"),
            background: BACKGROUND_COLOR,
            resize_filter: FilterType::Lanczos3,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}

impl GeneratorConfig {
    /// 以指定目录为项目根目录创建默认配置。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use asset_generator::asset_generator::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::with_root("/tmp/project");
    /// assert!(config.source().ends_with("app/assets/logo.png"));
    /// ```
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// 将相对路径拼接到项目根目录下。
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(relative)
    }

    pub fn source(&self) -> PathBuf {
        self.resolve(&self.source_path)
    }

    /// 某个输出文件的完整路径。
    pub fn output_file(&self, file_name: &str) -> PathBuf {
        self.resolve(&self.output_dir).join(file_name)
    }

    pub fn legacy_assets(&self) -> PathBuf {
        self.resolve(&self.legacy_assets_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_project_layout() {
        let config = GeneratorConfig::default();

        assert_eq!(config.source(), PathBuf::from("./app/assets/logo.png"));
        assert_eq!(config.output_file("icon.png"), PathBuf::from("./app/assets/icon.png"));
        assert_eq!(config.legacy_assets(), PathBuf::from("./assets"));
        assert_eq!(config.background, Rgb([212, 165, 116]));
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
    }

    #[test]
    fn with_root_rebases_every_path() {
        let config = GeneratorConfig::with_root("/srv/app");

        assert_eq!(config.source(), PathBuf::from("/srv/app/app/assets/logo.png"));
        assert_eq!(
            config.output_file("splash.png"),
            PathBuf::from("/srv/app/app/assets/splash.png")
        );
        assert_eq!(config.legacy_assets(), PathBuf::from("/srv/app/assets"));
    }
}
