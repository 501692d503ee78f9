//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 负责“存在性检查 → 读取字节 → 头部尺寸校验 → 完整解码 → 统一为 RGBA”。
//! 存在性检查单独暴露，以便在任何写操作之前返回 `MissingSourceAsset`。
//! 优先做尺寸检查，再进行完整解码，降低超大输入触发高内存开销的风险。

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageReader};

use crate::error::AppError;

use super::source::SourceImage;
use super::{AssetGenerator, GeneratorConfig, ImageError};

impl AssetGenerator {
    /// 检查源 logo 是否存在，不做任何格式校验。
    pub fn ensure_source_exists(path: &Path) -> Result<(), AppError> {
        if path.is_file() {
            return Ok(());
        }

        log::error!("❌ 源文件不存在：{}", path.display());
        Err(AppError::MissingSourceAsset {
            path: path.to_path_buf(),
        })
    }

    /// 解码源图并统一为 RGBA8。
    ///
    /// 缺少 alpha 通道的颜色类型会补上完全不透明的 alpha。
    pub fn load_and_normalize(
        path: &Path,
        config: &GeneratorConfig,
    ) -> Result<SourceImage, ImageError> {
        let bytes = fs::read(path)
            .map_err(|e| ImageError::FileSystem(format!("读取 {} 失败：{}", path.display(), e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&bytes)?;
        Self::validate_decode_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| ImageError::Decode(format!("图片解码失败：{}", e)))?;

        let original_color = decoded.color();
        let (width, height) = decoded.dimensions();
        Self::validate_decode_limits(config, width, height)?;

        let rgba = Self::normalize_to_rgba(decoded);

        log::info!(
            "📸 源图解码成功 - 路径: {} 尺寸: {}x{} 原始颜色: {:?}",
            path.display(),
            width,
            height,
            original_color
        );

        Ok(SourceImage {
            rgba,
            original_color,
        })
    }

    fn normalize_to_rgba(decoded: DynamicImage) -> image::RgbaImage {
        match decoded.color() {
            ColorType::Rgba8 => decoded.into_rgba8(),
            other => {
                log::debug!("🎨 颜色类型 {:?} 转换为 RGBA8", other);
                decoded.to_rgba8()
            }
        }
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ImageError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ImageError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ImageError::Decode(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_decode_limits(
        config: &GeneratorConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ImageError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ImageError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ImageError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        let estimated = pixels
            .checked_mul(4)
            .ok_or_else(|| ImageError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > config.max_decoded_bytes {
            return Err(ImageError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }
}
