//! # 缩放与合成流水线模块
//!
//! ## 设计思路
//!
//! - `resize_direct`：直接缩放到目标尺寸（icon / favicon）
//! - `composite_on_canvas`：缩放为内嵌图后居中贴到背景色画布（adaptive-icon / splash）
//!
//! 缩放优先走 `fast_image_resize`（Lanczos3 卷积，自动预乘 alpha），
//! 失败时回退 `image::imageops::resize`，保证输出尺寸始终精确。
//! 合成使用直通 alpha 整数混合，透明像素保留背景色，不透明像素完全覆盖。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use super::{AssetGenerator, ImageError};

impl AssetGenerator {
    /// 将图片缩放到精确的 `target_width x target_height`。
    pub fn resize_direct(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, ImageError> {
        if target_width == 0 || target_height == 0 {
            return Err(ImageError::InvalidFormat(format!(
                "目标尺寸无效：{}x{}",
                target_width, target_height
            )));
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(ImageError::InvalidFormat("源图尺寸为空".to_string()));
        }

        match Self::resize_with_fast_image_resize(image, target_width, target_height, filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
                Ok(image::imageops::resize(image, target_width, target_height, filter))
            }
        }
    }

    /// 将图片缩放为内嵌图，并居中合成到纯色画布上。
    ///
    /// 返回不带 alpha 的 RGB 画布。
    pub fn composite_on_canvas(
        image: &RgbaImage,
        canvas_width: u32,
        canvas_height: u32,
        inset_width: u32,
        inset_height: u32,
        background: Rgb<u8>,
        filter: FilterType,
    ) -> Result<RgbImage, ImageError> {
        let (x, y) = centering_offset(canvas_width, canvas_height, inset_width, inset_height)?;
        let inset = Self::resize_direct(image, inset_width, inset_height, filter)?;

        let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, background);
        paste_with_alpha(&mut canvas, &inset, x, y);

        Ok(canvas)
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, ImageError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| ImageError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| ImageError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| ImageError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

/// 内嵌图在画布上的居中偏移（向下取整）。
pub fn centering_offset(
    canvas_width: u32,
    canvas_height: u32,
    inset_width: u32,
    inset_height: u32,
) -> Result<(u32, u32), ImageError> {
    if inset_width > canvas_width || inset_height > canvas_height {
        return Err(ImageError::InvalidFormat(format!(
            "内嵌尺寸 {}x{} 超出画布 {}x{}",
            inset_width, inset_height, canvas_width, canvas_height
        )));
    }

    Ok(((canvas_width - inset_width) / 2, (canvas_height - inset_height) / 2))
}

/// 按直通 alpha 将 `top` 贴到 `canvas` 的 `(x, y)` 处。
///
/// 调用方保证 `top` 完整落在画布内。
fn paste_with_alpha(canvas: &mut RgbImage, top: &RgbaImage, x: u32, y: u32) {
    for (tx, ty, pixel) in top.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let dst = canvas.get_pixel_mut(x + tx, y + ty);
        match a {
            0 => {}
            255 => dst.0 = [r, g, b],
            _ => dst.0 = [
                blend_channel(r, dst.0[0], a),
                blend_channel(g, dst.0[1], a),
                blend_channel(b, dst.0[2], a),
            ],
        }
    }
}

fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BG: Rgb<u8> = Rgb([212, 165, 116]);

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn resize_direct_hits_exact_dimensions() {
        let src = solid(300, 200, [10, 20, 200, 255]);

        let up = AssetGenerator::resize_direct(&src, 1024, 1024, FilterType::Lanczos3).unwrap();
        let down = AssetGenerator::resize_direct(&src, 48, 48, FilterType::Lanczos3).unwrap();

        assert_eq!(up.dimensions(), (1024, 1024));
        assert_eq!(down.dimensions(), (48, 48));
    }

    #[test]
    fn resize_direct_rejects_zero_target() {
        let src = solid(10, 10, [0, 0, 0, 255]);

        let result = AssetGenerator::resize_direct(&src, 0, 10, FilterType::Lanczos3);

        assert!(matches!(result, Err(ImageError::InvalidFormat(_))));
    }

    #[test]
    fn centering_offset_floors_odd_margins() {
        assert_eq!(centering_offset(1024, 1024, 800, 800).unwrap(), (112, 112));
        assert_eq!(centering_offset(1242, 2436, 800, 800).unwrap(), (221, 818));
        assert_eq!(centering_offset(11, 10, 4, 4).unwrap(), (3, 3));
    }

    #[test]
    fn centering_offset_rejects_inset_larger_than_canvas() {
        assert!(matches!(
            centering_offset(100, 100, 101, 50),
            Err(ImageError::InvalidFormat(_))
        ));
    }

    #[test]
    fn paste_keeps_background_for_transparent_pixels() {
        let mut canvas = RgbImage::from_pixel(4, 4, BG);
        let mut top = solid(2, 2, [0, 0, 0, 0]);
        top.put_pixel(1, 1, Rgba([255, 0, 0, 255]));

        paste_with_alpha(&mut canvas, &top, 1, 1);

        assert_eq!(canvas.get_pixel(1, 1), &BG);
        assert_eq!(canvas.get_pixel(2, 2), &Rgb([255, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 0), &BG);
    }

    #[test]
    fn paste_blends_partial_alpha() {
        let mut canvas = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let top = solid(1, 1, [255, 255, 255, 128]);

        paste_with_alpha(&mut canvas, &top, 0, 0);

        assert_eq!(canvas.get_pixel(0, 0), &Rgb([128, 128, 128]));
    }

    #[test]
    fn composite_fills_margin_with_background() {
        let src = solid(64, 64, [10, 20, 200, 255]);

        let canvas =
            AssetGenerator::composite_on_canvas(&src, 100, 120, 60, 60, BG, FilterType::Lanczos3)
                .unwrap();

        assert_eq!(canvas.dimensions(), (100, 120));
        assert_eq!(canvas.get_pixel(0, 0), &BG);
        assert_eq!(canvas.get_pixel(19, 30), &BG);
        assert_eq!(canvas.get_pixel(80, 89), &BG);
        assert_ne!(canvas.get_pixel(50, 60), &BG);
    }

    proptest! {
        #[test]
        fn composite_never_touches_pixels_outside_inset(
            (canvas_w, canvas_h, inset_w, inset_h) in (1u32..48, 1u32..48)
                .prop_flat_map(|(w, h)| (Just(w), Just(h), 1..=w, 1..=h)),
        ) {
            let src = solid(8, 8, [0, 0, 255, 255]);

            let canvas = AssetGenerator::composite_on_canvas(
                &src, canvas_w, canvas_h, inset_w, inset_h, BG, FilterType::Lanczos3,
            ).unwrap();
            let (x0, y0) = centering_offset(canvas_w, canvas_h, inset_w, inset_h).unwrap();

            prop_assert!(x0 + inset_w <= canvas_w && y0 + inset_h <= canvas_h);
            prop_assert!(canvas_w - inset_w - 2 * x0 <= 1);
            for (x, y, pixel) in canvas.enumerate_pixels() {
                let inside = x >= x0 && x < x0 + inset_w && y >= y0 && y < y0 + inset_h;
                if !inside {
                    prop_assert_eq!(pixel, &BG);
                }
            }
        }
    }
}
