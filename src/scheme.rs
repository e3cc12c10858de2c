use std::fmt;

use palette::Srgb;
use tracing::{debug, trace};

use crate::color::{brighten, check_value_band, clamp_value, hexify, order_by_hue};
use crate::decode::load_thumbnail;
use crate::error::Result;
use crate::population::ColorPopulation;
use crate::quantize::{QuantizeOptions, check_cluster_count, quantize};

pub const DEFAULT_NUM_COLORS: usize = 6;
pub const DEFAULT_MINV: i32 = 170;
pub const DEFAULT_MAXV: i32 = 200;
pub const DEFAULT_BOLD_ADD: i32 = 50;

/// Parameters of a scheme run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemeOptions {
    /// Number of (base, bold) pairs to produce.
    pub n: usize,
    /// Lower bound of the base colors' HSV value, 8-bit scale.
    pub min_v: i32,
    /// Upper bound of the base colors' HSV value, 8-bit scale.
    pub max_v: i32,
    /// Value added to each base color to get its bold variant. May be negative.
    pub bold_add: i32,
    /// Sort the pairs by hue. Otherwise they come in cluster order.
    pub order_colors: bool,
    pub quantize: QuantizeOptions,
}

impl Default for SchemeOptions {
    fn default() -> Self {
        Self {
            n: DEFAULT_NUM_COLORS,
            min_v: DEFAULT_MINV,
            max_v: DEFAULT_MAXV,
            bold_add: DEFAULT_BOLD_ADD,
            order_colors: true,
            quantize: QuantizeOptions::default(),
        }
    }
}

impl SchemeOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.quantize.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_cluster_count(self.n)?;
        check_value_band(self.min_v, self.max_v)
    }
}

/// A base color and its brighter variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    pub base: Srgb<u8>,
    pub bold: Srgb<u8>,
}

impl fmt::Display for ColorPair {
    /// `#rrggbb #rrggbb`, base first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", hexify(self.base), hexify(self.bold))
    }
}

/// One pair per line, as written to stdout by the CLI.
pub fn pairs_to_text(pairs: &[ColorPair]) -> String {
    pairs.iter().map(|p| format!("{p}\n")).collect()
}

/// Build `options.n` color pairs from a grid of pixels.
pub fn generate_palette(pixels: &[Srgb<u8>], options: &SchemeOptions) -> Result<Vec<ColorPair>> {
    options.validate()?;
    palette_from_population(&ColorPopulation::from_pixels(pixels.iter().copied()), options)
}

/// Decode `input` and build `options.n` color pairs from its dominant colors.
pub fn colorz(input: &[u8], options: &SchemeOptions) -> Result<Vec<ColorPair>> {
    options.validate()?;
    let img = load_thumbnail(input)?;
    palette_from_population(&ColorPopulation::from_image(&img), options)
}

fn palette_from_population(
    population: &ColorPopulation,
    options: &SchemeOptions,
) -> Result<Vec<ColorPair>> {
    debug!(distinct = population.len(), n = options.n, "extracted color population");
    trace!(min_v = options.min_v, max_v = options.max_v, "clamping population");

    let clamped = population
        .colors()
        .iter()
        .map(|&c| clamp_value(c, options.min_v, options.max_v))
        .collect::<Result<Vec<_>>>()?;

    let centroids = quantize(&clamped, options.n, &options.quantize)?;
    let colors = if options.order_colors {
        order_by_hue(&centroids)
    } else {
        centroids
    };

    Ok(colors
        .into_iter()
        .map(|base| ColorPair { base, bold: brighten(base, options.bold_add) })
        .collect())
}
