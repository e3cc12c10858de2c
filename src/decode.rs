use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::error::Result;

/// Longest side, in pixels, of the image handed to color extraction.
pub const THUMB_SIZE: u32 = 200;

/// Decode `input` and shrink it to fit in a `THUMB_SIZE` square.
///
/// Animated GIFs are sampled at their second frame.
pub fn load_thumbnail(input: &[u8]) -> Result<DynamicImage> {
    let img = match image::guess_format(input)? {
        ImageFormat::Gif => decode_gif(input)?,
        _ => image::load_from_memory(input)?,
    };
    Ok(thumbnail(img))
}

fn decode_gif(input: &[u8]) -> Result<DynamicImage> {
    let decoder = GifDecoder::new(Cursor::new(input))?;
    let mut frames = decoder.into_frames().collect_frames()?;
    debug!(frames = frames.len(), "decoded gif");
    match frames.len() {
        0 => Ok(image::load_from_memory(input)?),
        1 => Ok(DynamicImage::ImageRgba8(frames.swap_remove(0).into_buffer())),
        _ => Ok(DynamicImage::ImageRgba8(frames.swap_remove(1).into_buffer())),
    }
}

/// Down-scale keeping the aspect ratio. Images that already fit are returned as is.
fn thumbnail(img: DynamicImage) -> DynamicImage {
    let (orig_w, orig_h) = img.dimensions();
    if orig_w <= THUMB_SIZE && orig_h <= THUMB_SIZE {
        return img;
    }
    let max_side = orig_w.max(orig_h) as f32;
    let ratio = THUMB_SIZE as f32 / max_side;
    let w = ((orig_w as f32) * ratio).round().max(1.0) as u32;
    let h = ((orig_h as f32) * ratio).round().max(1.0) as u32;
    debug!(orig_w, orig_h, w, h, "thumbnailing image");
    DynamicImage::ImageRgba8(image::imageops::resize(&img, w, h, FilterType::Triangle))
}
