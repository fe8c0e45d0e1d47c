use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::AnimationDecoder as _;

use crate::foundation::error::ArscanResult;
use crate::raster::buffer::RasterFrame;

/// Decode a still image from memory into an 8-bit RGB frame.
pub fn decode_image(bytes: &[u8]) -> ArscanResult<RasterFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(RasterFrame::from_dynamic(&dyn_img))
}

/// Read and decode the base image the animation is drawn over.
pub fn load_base_image(path: &Path) -> ArscanResult<RasterFrame> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read base image '{}'", path.display()))?;
    let frame = decode_image(&bytes)
        .with_context(|| format!("decode base image '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        width = frame.width,
        height = frame.height,
        "loaded base image"
    );
    Ok(frame)
}

/// Decode every frame of an image in memory.
///
/// GIFs yield all their (fully composed) frames with alpha dropped; any other format yields a
/// single frame.
pub fn decode_frames(bytes: &[u8]) -> ArscanResult<Vec<RasterFrame>> {
    let format = image::guess_format(bytes).context("detect overlay image format")?;
    if format != image::ImageFormat::Gif {
        return Ok(vec![decode_image(bytes)?]);
    }

    let decoder =
        image::codecs::gif::GifDecoder::new(Cursor::new(bytes)).context("open gif decoder")?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .context("decode gif frames")?;
    Ok(frames
        .into_iter()
        .map(|f| RasterFrame::from_dynamic(&image::DynamicImage::ImageRgba8(f.into_buffer())))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
