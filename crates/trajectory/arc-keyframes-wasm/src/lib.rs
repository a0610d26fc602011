use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use arc_keyframes_core::{generate, Keyframer, KeyframerConfig, PathKind, Point2D};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Points arrive either as `{ x, y }` objects or `[x, y]` pairs.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointInput {
    Xy(Point2D),
    Pair([f64; 2]),
}

impl From<PointInput> for Point2D {
    fn from(input: PointInput) -> Self {
        match input {
            PointInput::Xy(p) => p,
            PointInput::Pair(pair) => Point2D::from(pair),
        }
    }
}

fn parse_point(label: &str, v: JsValue) -> Result<Point2D, JsError> {
    if jsvalue_is_undefined_or_null(&v) {
        return Err(JsError::new(&format!("{label} is null/undefined")));
    }
    swb::from_value::<PointInput>(v)
        .map(Point2D::from)
        .map_err(|e| JsError::new(&format!("{label} parse error: {e}")))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("serialize error: {e}")))
}

#[derive(Serialize)]
struct KeyframesOut<'a> {
    kind: PathKind,
    points: &'a [Point2D],
    stamps: Vec<f64>,
}

/// Generate the canonical ten keyframes. `source` and `target` are `{ x, y }`
/// objects or `[x, y]` arrays.
/// Returns an array of `{ x, y }`.
#[wasm_bindgen(js_name = generate_keyframes)]
pub fn generate_keyframes(
    source: JsValue,
    target: JsValue,
    elevation: f64,
) -> Result<JsValue, JsError> {
    let source = parse_point("source", source)?;
    let target = parse_point("target", target)?;
    to_js(&generate(source, target, elevation)[..])
}

#[wasm_bindgen]
pub struct ArcKeyframer {
    core: Keyframer,
}

#[wasm_bindgen]
impl ArcKeyframer {
    /// Create a keyframer. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new ArcKeyframer({ sample_count: 24 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ArcKeyframer, JsError> {
        console_error_panic_hook::set_once();

        let cfg: KeyframerConfig = if jsvalue_is_undefined_or_null(&config) {
            KeyframerConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = Keyframer::new(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(ArcKeyframer { core })
    }

    /// Returns `{ kind, points, stamps }`.
    #[wasm_bindgen]
    pub fn keyframes(
        &self,
        source: JsValue,
        target: JsValue,
        elevation: f64,
    ) -> Result<JsValue, JsError> {
        let source = parse_point("source", source)?;
        let target = parse_point("target", target)?;
        let seq = self.core.keyframes(source, target, elevation);
        to_js(&KeyframesOut {
            kind: seq.kind(),
            points: seq.points(),
            stamps: seq.stamps(),
        })
    }

    /// Position at normalized time `u` along the keyframes for this trajectory.
    #[wasm_bindgen]
    pub fn sample(
        &self,
        source: JsValue,
        target: JsValue,
        elevation: f64,
        u: f64,
    ) -> Result<JsValue, JsError> {
        let source = parse_point("source", source)?;
        let target = parse_point("target", target)?;
        let seq = self.core.keyframes(source, target, elevation);
        to_js(&seq.sample(u))
    }

    /// Current configuration as a JSON string.
    #[wasm_bindgen(js_name = config_json)]
    pub fn config_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.core.config())
            .map_err(|e| JsError::new(&format!("serialize error: {e}")))
    }
}

#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
