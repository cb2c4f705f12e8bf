use anyhow::{Context, Result};
use eframe::egui;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use crate::model::ThumbData;
use fundbuero::config::Config;

pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from(path).with_context(|| format!("read {}", path.display()))?,
        None => Config::load().context("read default config")?,
    };
    Ok(config)
}

/// First `--config <path>` argument, if any.
pub fn config_arg() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

pub fn pick_upload() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Bild", &["jpg", "jpeg", "png"])
        .pick_file()
}

/// Downscaled RGBA copy for display; the stored photo is never touched.
pub fn color_image(image: &DynamicImage, max_edge: u32) -> egui::ColorImage {
    let preview = if image.width() > max_edge || image.height() > max_edge {
        image.thumbnail(max_edge, max_edge)
    } else {
        image.clone()
    };
    let size = [preview.width() as usize, preview.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, &preview.to_rgba8().into_raw())
}

fn decode_thumbnail(path: &str) -> Result<ThumbData> {
    let image = image::open(path).with_context(|| format!("decode {}", path))?;
    let thumb = image.thumbnail(250, 250);
    Ok(ThumbData {
        path: path.to_string(),
        size: [thumb.width() as usize, thumb.height() as usize],
        pixels: thumb.to_rgba8().into_raw(),
    })
}

/// Decode on a worker thread; a failed decode is reported with an empty size.
pub fn spawn_thumbnail(path: String, sender: Sender<ThumbData>) {
    std::thread::spawn(move || {
        let data = decode_thumbnail(&path).unwrap_or_else(|err| {
            tracing::warn!("thumbnail failed: {err:#}");
            ThumbData {
                path,
                size: [0, 0],
                pixels: Vec::new(),
            }
        });
        let _ = sender.send(data);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_downscales_large_images() {
        let image = DynamicImage::new_rgb8(1200, 600);
        let color = color_image(&image, 400);
        assert_eq!(color.size, [400, 200]);
    }

    #[test]
    fn test_color_image_keeps_small_images() {
        let image = DynamicImage::new_rgb8(120, 80);
        let color = color_image(&image, 400);
        assert_eq!(color.size, [120, 80]);
        assert_eq!(color.pixels.len(), 120 * 80);
    }

    #[test]
    fn test_decode_thumbnail_missing_file() {
        assert!(decode_thumbnail("/nonexistent/fund_0.jpg").is_err());
    }
}
