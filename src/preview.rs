//! Standalone HTML page showing a scheme on a chosen background.

use minijinja::{Environment, Value, context};

use crate::color::{hexify, parse_hex};
use crate::error::Result;
use crate::scheme::ColorPair;

pub const DEFAULT_FONT_SIZE: u32 = 1;
pub const DEFAULT_BG_COLOR: &str = "#272727";

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewOptions {
    /// Font size in rem.
    pub font_size: u32,
    /// Page background as `#rrggbb`.
    pub bg_color: String,
    /// URL of an image shown above the swatches and blurred behind the page.
    pub bg_img: Option<String>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            bg_color: DEFAULT_BG_COLOR.to_string(),
            bg_img: None,
        }
    }
}

const PREVIEW_TEMPLATE: &str = include_str!("templates/preview.html");

/// Render `pairs` as an HTML document.
///
/// The page is named `preview.html`, so every interpolated value is HTML-escaped.
pub fn html_preview(pairs: &[ColorPair], options: &PreviewOptions) -> Result<String> {
    let bg_color = hexify(parse_hex(&options.bg_color)?);

    let mut env = Environment::new();
    env.add_template("preview.html", PREVIEW_TEMPLATE)?;
    let template = env.get_template("preview.html")?;

    let pairs: Vec<Value> = pairs
        .iter()
        .map(|pair| context! { base => hexify(pair.base), bold => hexify(pair.bold) })
        .collect();

    Ok(template.render(context! {
        pairs,
        bg_color,
        font_size => options.font_size,
        bg_img => &options.bg_img,
    })?)
}
