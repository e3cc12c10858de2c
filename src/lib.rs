//! Terminal color schemes from images.
//!
//! The dominant colors of an image are found with k-means after their
//! brightness is pinned into a band. Each one gets a brighter "bold" twin:
//!
//! 1. decode and thumbnail the image ([`decode`])
//! 2. collect its distinct colors ([`population`])
//! 3. clamp each color's HSV value into `[min_v, max_v]` ([`color::clamp_value`])
//! 4. cluster them into `n` centroids ([`quantize`])
//! 5. sort the centroids by hue ([`color::order_by_hue`])
//! 6. brighten each one by `bold_add` ([`color::brighten`])
//!
//! ```no_run
//! use colorz::{SchemeOptions, colorz};
//!
//! let bytes = std::fs::read("wallpaper.png").unwrap();
//! for pair in colorz(&bytes, &SchemeOptions::default()).unwrap() {
//!     println!("{pair}");
//! }
//! ```

pub mod color;
pub mod decode;
pub mod error;
pub mod population;
pub mod preview;
pub mod quantize;
pub mod scheme;
mod wasm;

pub use color::{brighten, clamp_value, hexify, order_by_hue, parse_hex};
pub use error::{ColorzError, Result};
pub use palette::Srgb;
pub use population::ColorPopulation;
pub use preview::{PreviewOptions, html_preview};
pub use quantize::{QuantizeOptions, quantize};
pub use scheme::{ColorPair, SchemeOptions, colorz, generate_palette, pairs_to_text};
pub use wasm::colorz_wasm;
