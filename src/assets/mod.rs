/// Image decoding (base image, overlay frames).
pub mod decode;
/// Scanning overlay frame sequence.
pub mod overlay;
