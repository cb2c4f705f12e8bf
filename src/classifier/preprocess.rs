use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// RGB, resized to `size`×`size`, scaled to [0,1], batch of one.
///
/// Layout is NHWC `[1, size, size, 3]`, which is what Keras image models take.
pub fn prepare_input(image: &DynamicImage, size: u32) -> Tensor {
    let resized = image.resize_exact(size, size, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();
    let edge = size as usize;

    tract_ndarray::Array4::from_shape_fn((1, edge, edge, 3), |(_, y, x, c)| {
        let pixel = rgb.get_pixel(x as u32, y as u32);
        pixel[c] as f32 / 255.0
    })
    .into_tensor()
}
