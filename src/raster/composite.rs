use crate::foundation::core::Placement;
use crate::foundation::error::{ArscanError, ArscanResult};
use crate::raster::buffer::RasterFrame;

/// Copy `overlay` into `dst` with its top-left corner at `pos`.
///
/// The overlay is fully opaque: pixels are replaced, not blended. Only `dst` is written.
///
/// Fails with [`ArscanError::InvalidFormat`] when either buffer is not 3-channel RGB and with
/// [`ArscanError::OutOfBounds`] when `pos.x + overlay.width > dst.width` or
/// `pos.y + overlay.height > dst.height`. On error `dst` is untouched.
pub fn composite_in_place(
    dst: &mut RasterFrame,
    overlay: &RasterFrame,
    pos: Placement,
) -> ArscanResult<()> {
    dst.expect_rgb("composite background")?;
    overlay.expect_rgb("composite overlay")?;

    let right = u64::from(pos.x) + u64::from(overlay.width);
    let bottom = u64::from(pos.y) + u64::from(overlay.height);
    if right > u64::from(dst.width) || bottom > u64::from(dst.height) {
        return Err(ArscanError::out_of_bounds(format!(
            "overlay {}x{} at ({}, {}) exceeds background {}x{}",
            overlay.width, overlay.height, pos.x, pos.y, dst.width, dst.height
        )));
    }

    if overlay.width == 0 || overlay.height == 0 {
        return Ok(());
    }

    let row_bytes = (overlay.width as usize) * 3;
    let dst_stride = (dst.width as usize) * 3;
    let x_off = (pos.x as usize) * 3;
    for (row, src_row) in overlay.data.chunks_exact(row_bytes).enumerate() {
        let start = (pos.y as usize + row) * dst_stride + x_off;
        dst.data[start..start + row_bytes].copy_from_slice(src_row);
    }
    Ok(())
}

/// Value-semantics variant of [`composite_in_place`]: returns a new buffer and never observes or
/// affects the caller's `background`.
pub fn composite(
    background: &RasterFrame,
    overlay: &RasterFrame,
    pos: Placement,
) -> ArscanResult<RasterFrame> {
    let mut out = background.clone();
    composite_in_place(&mut out, overlay, pos)?;
    Ok(out)
}

/// Resample an RGB frame to `width x height` with a bilinear (triangle) filter.
pub fn resize(src: &RasterFrame, width: u32, height: u32) -> ArscanResult<RasterFrame> {
    if width == 0 || height == 0 {
        return Err(ArscanError::validation("resize target must be non-empty"));
    }
    if src.width == width && src.height == height {
        src.expect_rgb("resize")?;
        return Ok(src.clone());
    }
    let img = src.to_rgb_image()?;
    let out = image::imageops::resize(&img, width, height, image::imageops::FilterType::Triangle);
    Ok(RasterFrame::from_rgb_image(out))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
