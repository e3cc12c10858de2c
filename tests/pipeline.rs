use std::io::Cursor;

use colorz::color::{hue_of, value_of};
use colorz::quantize::QuantizeOptions;
use colorz::{ColorzError, SchemeOptions, Srgb, colorz, generate_palette};
use image::codecs::gif::GifEncoder;
use image::{DynamicImage, Frame, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

fn png(img: RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn seeded() -> SchemeOptions {
    SchemeOptions {
        quantize: QuantizeOptions { runs: 4, ..QuantizeOptions::default() },
        ..SchemeOptions::default()
    }
    .with_seed(2024)
}

#[test]
fn single_white_pixel() {
    let bytes = png(RgbImage::from_pixel(1, 1, Rgb([255, 255, 255])));
    let options = SchemeOptions { n: 1, min_v: 0, max_v: 255, bold_add: 0, ..seeded() };
    let pairs = colorz(&bytes, &options).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].base, Srgb::new(255, 255, 255));
    assert_eq!(pairs[0].bold, Srgb::new(255, 255, 255));
}

#[test]
fn red_and_blue_image_orders_red_first() {
    let img = RgbImage::from_fn(40, 40, |x, y| {
        if (x + y) % 2 == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
    });
    let pairs = colorz(&png(img), &SchemeOptions { n: 2, ..seeded() }).unwrap();
    assert_eq!(pairs.len(), 2);

    let (red, blue) = (pairs[0], pairs[1]);
    assert!(red.base.red >= 199 && red.base.green == 0 && red.base.blue == 0, "{red:?}");
    assert!(blue.base.blue >= 199 && blue.base.red == 0 && blue.base.green == 0, "{blue:?}");
    assert!(red.bold.red >= 249, "{red:?}");
    assert!(blue.bold.blue >= 249, "{blue:?}");
    assert!(hue_of(red.base) < hue_of(blue.base));
}

#[test]
fn unordered_output_keeps_cluster_colors() {
    let pixels = [Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)];
    let options = SchemeOptions { n: 2, order_colors: false, ..seeded() };
    let pairs = generate_palette(&pixels, &options).unwrap();
    let mut reds: Vec<u8> = pairs.iter().map(|p| p.base.red).collect();
    reds.sort();
    assert_eq!(reds[0], 0);
    assert!(reds[1] >= 199);
}

#[test]
fn gradient_image_gives_n_pairs_in_band() {
    let img = RgbImage::from_fn(300, 120, |x, y| {
        Rgb([(x * 255 / 299) as u8, (y * 255 / 119) as u8, ((x + y) % 256) as u8])
    });
    let pairs = colorz(&png(img), &seeded()).unwrap();
    assert_eq!(pairs.len(), 6);
    for p in &pairs {
        // Cluster means of in-band colors can only sit at or below the band.
        assert!(value_of(p.base) <= 200, "{p:?}");
        assert!(value_of(p.bold) >= value_of(p.base), "{p:?}");
    }
}

#[test]
fn same_seed_is_reproducible() {
    let img = RgbImage::from_fn(64, 64, |x, y| Rgb([(x * 4) as u8, (y * 4) as u8, 90]));
    let bytes = png(img);
    assert_eq!(colorz(&bytes, &seeded()).unwrap(), colorz(&bytes, &seeded()).unwrap());
}

#[test]
fn animated_gif_uses_second_frame() {
    let red = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
    let blue = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]));
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buf);
        encoder.encode_frames(vec![Frame::new(red), Frame::new(blue)]).unwrap();
    }

    let options = SchemeOptions { n: 1, min_v: 0, max_v: 255, bold_add: 0, ..seeded() };
    let pairs = colorz(&buf, &options).unwrap();
    let base = pairs[0].base;
    assert!(base.blue > 200 && base.red < 50, "{base:?}");
}

#[test]
fn undecodable_bytes_propagate_decode_error() {
    let err = colorz(b"GIF89a but not really", &seeded()).unwrap_err();
    assert!(matches!(err, ColorzError::Decode(_)));
}

#[test]
fn flat_image_cannot_fill_six_clusters() {
    let bytes = png(RgbImage::from_pixel(16, 16, Rgb([30, 60, 90])));
    let err = colorz(&bytes, &seeded()).unwrap_err();
    assert!(matches!(
        err,
        ColorzError::ConvergenceFailure { requested: 6, distinct: 1 }
    ));
}
