//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `AssetGenerator` 只负责流程编排，不直接做控制台输出。
//! 处理链路固定为：
//! 1. 检查源 logo 是否存在（缺失时在任何写操作之前返回）
//! 2. 确保历史遗留的 `assets/` 目录存在
//! 3. 加载并统一为 RGBA
//! 4. 按固定顺序生成 icon → adaptive-icon → favicon → splash 并逐个写盘
//!
//! 任一阶段失败立即终止，已写出的文件保留，不做回滚。
//! 进度通过回调上报，由二进制入口决定如何展示。

use std::path::PathBuf;
use std::time::{Duration, Instant};

use image::{ColorType, DynamicImage};

use crate::error::AppError;
use crate::storage;

use super::source::{AssetRecipe, GeneratedAsset, OUTPUT_ASSETS, OutputAsset, SourceImage};
use super::{GeneratorConfig, ImageError};

/// 单次运行的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Done,
    Failed,
}

/// 运行过程中上报的进度事件。
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// 源图已加载。
    SourceLoaded { width: u32, height: u32 },
    /// 开始生成第 `index`（从 1 开始）个输出。
    AssetStarted { index: usize, asset: &'a OutputAsset },
    /// 第 `index` 个输出已写入 `path`。
    AssetWritten {
        index: usize,
        asset: &'a OutputAsset,
        path: &'a PathBuf,
    },
}

/// 成功运行的汇总。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source_width: u32,
    pub source_height: u32,
    pub source_color: ColorType,
    /// 按生成顺序排列。
    pub assets: Vec<GeneratedAsset>,
    pub elapsed: Duration,
}

/// 资源生成器。
pub struct AssetGenerator {
    config: GeneratorConfig,
    state: RunState,
}

impl AssetGenerator {
    /// # 示例
    /// ```rust,ignore
    /// use asset_generator::asset_generator::{AssetGenerator, GeneratorConfig};
    ///
    /// let mut generator = AssetGenerator::new(GeneratorConfig::default());
    /// let report = generator.run()?;
    /// assert_eq!(report.assets.len(), 4);
    /// # Ok::<(), asset_generator::error::AppError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            state: RunState::Pending,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// 不关心进度时的入口。
    pub fn run(&mut self) -> Result<GenerationReport, AppError> {
        self.run_with_progress(|_| {})
    }

    /// 处理主入口：生成全部固定输出，并通过 `on_progress` 上报进度。
    pub fn run_with_progress<P>(&mut self, on_progress: P) -> Result<GenerationReport, AppError>
    where
        P: Fn(&ProgressEvent<'_>),
    {
        self.state = RunState::Pending;
        let result = self.generate_all(&on_progress);
        self.state = match &result {
            Ok(_) => RunState::Done,
            Err(_) => RunState::Failed,
        };
        result
    }

    fn generate_all<P>(&self, on_progress: &P) -> Result<GenerationReport, AppError>
    where
        P: Fn(&ProgressEvent<'_>),
    {
        let total_start = Instant::now();
        let source_path = self.config.source();

        Self::ensure_source_exists(&source_path)?;
        storage::ensure_legacy_assets_dir(&self.config)?;

        let source = Self::load_and_normalize(&source_path, &self.config)?;
        on_progress(&ProgressEvent::SourceLoaded {
            width: source.width(),
            height: source.height(),
        });

        let mut generated = Vec::with_capacity(OUTPUT_ASSETS.len());
        for (offset, asset) in OUTPUT_ASSETS.iter().enumerate() {
            let index = offset + 1;
            on_progress(&ProgressEvent::AssetStarted { index, asset });

            let written = self.generate_asset(&source, asset)?;
            on_progress(&ProgressEvent::AssetWritten {
                index,
                asset,
                path: &written.path,
            });
            generated.push(written);
        }

        let elapsed = total_start.elapsed();
        log::info!(
            "✅ 全部资源生成完成 - 数量={} total={}ms",
            generated.len(),
            elapsed.as_millis()
        );

        Ok(GenerationReport {
            source_width: source.width(),
            source_height: source.height(),
            source_color: source.original_color(),
            assets: generated,
            elapsed,
        })
    }

    /// 生成单个输出并写盘。只读取源图，不依赖先前的输出。
    fn generate_asset(
        &self,
        source: &SourceImage,
        asset: &OutputAsset,
    ) -> Result<GeneratedAsset, ImageError> {
        let start = Instant::now();

        let render_start = Instant::now();
        let image = self.render(source, asset)?;
        let render_elapsed = render_start.elapsed();

        let path = self.config.output_file(asset.file_name);
        let encode_start = Instant::now();
        Self::save_asset(&image, asset, &path)?;
        let encode_elapsed = encode_start.elapsed();

        let elapsed = start.elapsed();
        log::info!(
            "🖼️ {} ({}x{}) render={}ms encode={}ms total={}ms",
            asset.name,
            asset.width,
            asset.height,
            render_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            elapsed.as_millis()
        );

        Ok(GeneratedAsset {
            asset: *asset,
            path,
            elapsed,
        })
    }

    fn render(&self, source: &SourceImage, asset: &OutputAsset) -> Result<DynamicImage, ImageError> {
        match asset.recipe {
            AssetRecipe::Direct => Self::resize_direct(
                source.pixels(),
                asset.width,
                asset.height,
                self.config.resize_filter,
            )
            .map(DynamicImage::ImageRgba8),
            AssetRecipe::Canvas {
                inset_width,
                inset_height,
            } => Self::composite_on_canvas(
                source.pixels(),
                asset.width,
                asset.height,
                inset_width,
                inset_height,
                self.config.background,
                self.config.resize_filter,
            )
            .map(DynamicImage::ImageRgb8),
        }
    }
}
