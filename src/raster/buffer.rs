use crate::foundation::error::{ArscanError, ArscanResult};

/// Channel count every pipeline buffer is expected to carry.
pub const RGB_CHANNELS: u8 = 3;

/// A raster image as tightly packed, row-major 8-bit samples.
///
/// Pipeline buffers are RGB (`channels == 3`). Other channel counts can be represented so that
/// foreign buffers reach the compositor and are rejected there with
/// [`ArscanError::InvalidFormat`] instead of being silently reinterpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Samples per pixel.
    pub channels: u8,
    /// Samples, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterFrame {
    /// Allocate an RGB frame filled with `fill`.
    pub fn new_rgb(width: u32, height: u32, fill: [u8; 3]) -> Self {
        let px = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(px * 3);
        for _ in 0..px {
            data.extend_from_slice(&fill);
        }
        Self {
            width,
            height,
            channels: RGB_CHANNELS,
            data,
        }
    }

    /// Wrap raw samples, checking that the byte length matches the declared shape.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> ArscanResult<Self> {
        let frame = Self {
            width,
            height,
            channels,
            data,
        };
        frame.check_shape()?;
        Ok(frame)
    }

    /// Take ownership of an `image` RGB buffer.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: RGB_CHANNELS,
            data: img.into_raw(),
        }
    }

    /// Convert any decoded image to an 8-bit RGB frame (alpha is dropped).
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        Self::from_rgb_image(img.to_rgb8())
    }

    /// Copy into an `image` RGB buffer.
    pub fn to_rgb_image(&self) -> ArscanResult<image::RgbImage> {
        self.expect_rgb("to_rgb_image")?;
        image::RgbImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            ArscanError::invalid_format("frame data does not match width*height*3")
        })
    }

    /// Expected byte length for the declared shape.
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(self.channels as usize))
    }

    /// Fail with [`ArscanError::InvalidFormat`] when `data` does not match the declared shape.
    pub fn check_shape(&self) -> ArscanResult<()> {
        match self.expected_len() {
            Some(n) if n == self.data.len() => Ok(()),
            Some(n) => Err(ArscanError::invalid_format(format!(
                "buffer holds {} bytes, expected {n} for {}x{}x{}",
                self.data.len(),
                self.width,
                self.height,
                self.channels
            ))),
            None => Err(ArscanError::invalid_format("buffer size overflow")),
        }
    }

    /// Fail with [`ArscanError::InvalidFormat`] unless this is a well-formed RGB frame.
    pub fn expect_rgb(&self, op: &str) -> ArscanResult<()> {
        if self.channels != RGB_CHANNELS {
            return Err(ArscanError::invalid_format(format!(
                "{op} expects {RGB_CHANNELS}-channel buffers, got {}",
                self.channels
            )));
        }
        self.check_shape()
    }

    /// Read one pixel; `None` outside the frame or for non-RGB frames.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if self.channels != RGB_CHANNELS || x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let px = self.data.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }

    /// Write one pixel given signed coordinates; anything off-frame is dropped.
    pub fn put_pixel_clipped(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        if let Some(px) = self.data.get_mut(idx..idx + 3) {
            px.copy_from_slice(&color);
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
