/// RGB raster buffer type.
pub mod buffer;
/// Opaque overlay compositing and resampling.
pub mod composite;
/// Clipped rectangle primitives.
pub mod draw;
/// Bitmap label glyphs.
pub mod glyphs;
