use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::element::ElementType;
use crate::error::{Result, SketchError};
use crate::geometry::BoundingBox;
use crate::scene::Scene;
use crate::state::write_atomic;

/// What a rasterizer gets to see of the scene: the shapes in paint order and
/// the box they cover on the canvas.
#[derive(Debug, Clone)]
pub struct ExportView<'a> {
    pub shapes: Vec<&'a ElementType>,
    /// `None` for an empty scene.
    pub bounds: Option<BoundingBox>,
}

impl ExportView<'_> {
    /// Pixel size of the exported area, at least 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        match self.bounds {
            Some(bounds) => (
                bounds.width().ceil().max(1.0) as u32,
                bounds.height().ceil().max(1.0) as u32,
            ),
            None => (1, 1),
        }
    }
}

/// Turns an [`ExportView`] into pixels. Implemented by the rendering layer.
pub trait Rasterizer {
    fn rasterize(&self, view: &ExportView<'_>) -> Result<RgbaImage>;
}

/// Image format for an export path, from its extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "gif" => Ok(ImageFormat::Gif),
        _ => Err(SketchError::UnsupportedFormat(extension)),
    }
}

/// Rasterize the scene and write it to `path`.
///
/// The file appears only once it is completely encoded; a failing rasterizer
/// or encoder leaves whatever was at `path` before.
pub fn export_image(scene: &Scene, rasterizer: &dyn Rasterizer, path: &Path) -> Result<()> {
    let format = format_for_path(path)?;
    let view = scene.export_view();
    let pixels = rasterizer.rasterize(&view)?;

    let image = match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(pixels).to_rgb8()),
        _ => DynamicImage::ImageRgba8(pixels),
    };

    write_atomic(path, |writer| {
        image.write_to(writer, format)?;
        Ok(())
    })?;

    log::info!(
        "Exported {} shapes as {}x{} {:?} to {}",
        view.shapes.len(),
        image.width(),
        image.height(),
        format,
        path.display()
    );
    Ok(())
}
