//! # 输出写入模块
//!
//! 将生成结果编码为 PNG 并覆盖写入目标路径。
//! 不创建任何中间目录：输出目录不存在时直接报 `FileSystem` 错误。

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use super::source::OutputAsset;
use super::{AssetGenerator, ImageError};

impl AssetGenerator {
    /// 以 PNG 编码写入 `output_path`，已有文件会被覆盖。
    ///
    /// 写入前校验图像尺寸与 `asset` 声明一致。
    pub fn save_asset(
        image: &DynamicImage,
        asset: &OutputAsset,
        output_path: &Path,
    ) -> Result<(), ImageError> {
        let actual = (image.width(), image.height());
        if actual != asset.dimensions() {
            return Err(ImageError::InvalidFormat(format!(
                "{} 尺寸异常：{}x{}（期望 {}x{}）",
                asset.name, actual.0, actual.1, asset.width, asset.height
            )));
        }

        image
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => ImageError::FileSystem(format!(
                    "写入 {} 失败：{}",
                    output_path.display(),
                    io
                )),
                other => ImageError::Encode(format!("PNG 编码失败：{}", other)),
            })?;

        log::debug!("💾 已写入 {}", output_path.display());
        Ok(())
    }
}
