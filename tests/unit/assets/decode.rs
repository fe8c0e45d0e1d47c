use super::*;

fn png_bytes(rgb: [u8; 3], w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(w, h, image::Rgb(rgb));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn gif_bytes(colors: &[[u8; 3]]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut enc = image::codecs::gif::GifEncoder::new(&mut buf);
        let frames = colors.iter().map(|c| {
            image::Frame::new(image::RgbaImage::from_pixel(
                4,
                3,
                image::Rgba([c[0], c[1], c[2], 255]),
            ))
        });
        enc.encode_frames(frames).unwrap();
    }
    buf
}

#[test]
fn decode_image_png_to_rgb() {
    let frame = decode_image(&png_bytes([10, 20, 30], 3, 2)).unwrap();
    assert_eq!((frame.width, frame.height, frame.channels), (3, 2, 3));
    assert_eq!(frame.pixel(2, 1), Some([10, 20, 30]));
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn gif_yields_every_frame_in_order() {
    let frames = decode_frames(&gif_bytes(&[[255, 0, 0], [0, 0, 255], [0, 255, 0]])).unwrap();
    assert_eq!(frames.len(), 3);
    for f in &frames {
        assert_eq!((f.width, f.height, f.channels), (4, 3, 3));
    }
    let first = frames[0].pixel(0, 0).unwrap();
    let second = frames[1].pixel(0, 0).unwrap();
    assert!(first[0] > 200 && first[2] < 50);
    assert!(second[2] > 200 && second[0] < 50);
}

#[test]
fn still_image_is_a_single_frame_sequence() {
    let frames = decode_frames(&png_bytes([1, 2, 3], 5, 5)).unwrap();
    assert_eq!(frames.len(), 1);
}
