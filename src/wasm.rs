use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::color::hexify;
use crate::quantize::QuantizeOptions;
use crate::scheme::{SchemeOptions, colorz};

/// Build a color scheme from encoded image bytes.
///
/// Resolves to an array of `[base, bold]` pairs of `#rrggbb` strings. Pass a
/// `seed` for reproducible output.
#[wasm_bindgen(js_name = colorz)]
pub fn colorz_wasm(
    input: Vec<u8>,
    n: usize,
    min_v: i32,
    max_v: i32,
    bold_add: i32,
    order_colors: bool,
    seed: Option<u64>,
) -> Result<Array, JsValue> {
    let options = SchemeOptions {
        n,
        min_v,
        max_v,
        bold_add,
        order_colors,
        quantize: QuantizeOptions { seed, ..QuantizeOptions::default() },
    };
    let pairs = colorz(&input, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = Array::new();
    for pair in pairs {
        let js_pair = Array::new();
        js_pair.push(&JsValue::from_str(&hexify(pair.base)));
        js_pair.push(&JsValue::from_str(&hexify(pair.bold)));
        result.push(&js_pair);
    }
    Ok(result)
}
