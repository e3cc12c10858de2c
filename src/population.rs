use std::collections::HashSet;

use image::DynamicImage;
use palette::Srgb;

/// The distinct colors of an image, in the order they were first seen.
/// Pixel counts are not kept.
#[derive(Clone, Debug, Default)]
pub struct ColorPopulation {
    colors: Vec<Srgb<u8>>,
}

impl ColorPopulation {
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = Srgb<u8>>,
    {
        let mut seen = HashSet::new();
        let colors = pixels
            .into_iter()
            .filter(|c| seen.insert(c.into_components()))
            .collect();
        Self { colors }
    }

    /// Alpha is discarded, so fully transparent pixels still contribute their RGB.
    pub fn from_image(img: &DynamicImage) -> Self {
        Self::from_pixels(
            img.to_rgb8()
                .pixels()
                .map(|p| Srgb::new(p[0], p[1], p[2])),
        )
    }

    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn keeps_first_occurrence_order() {
        let red = Srgb::new(255, 0, 0);
        let blue = Srgb::new(0, 0, 255);
        let population = ColorPopulation::from_pixels([red, blue, red, red, blue]);
        assert_eq!(population.colors(), &[red, blue]);
        assert_eq!(population.len(), 2);
    }

    #[test]
    fn empty_input() {
        let population = ColorPopulation::from_pixels(std::iter::empty());
        assert!(population.is_empty());
    }

    #[test]
    fn from_image_counts_distinct_pixels() {
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 { Rgb([10, 20, 30]) } else { Rgb([200, 100, 0]) }
        });
        let population = ColorPopulation::from_image(&DynamicImage::ImageRgb8(img));
        assert_eq!(
            population.colors(),
            &[Srgb::new(10, 20, 30), Srgb::new(200, 100, 0)]
        );
    }
}
