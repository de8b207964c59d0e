//! Persisted renderer documents.
//!
//! A fitted renderer is saved as JSON and reloaded for later runs, so one
//! color scale can be reused across a whole time series:
//!
//! ```json
//! {
//!   "kind": "stretched",
//!   "colorspace": "hsv",
//!   "fill": null,
//!   "stops": [
//!     { "value": -1.0, "color": "#FF0000" },
//!     { "value": 1.0, "color": "#0000FF" }
//!   ]
//! }
//! ```
//!
//! `colorspace` applies to stretched renderers only (absent means `hsv`);
//! `labels` applies to unique renderers only. Deserialization enforces the
//! same invariants as direct construction and names the offending field.

use serde::{Deserialize, Serialize};

use raster_common::{CodecError, Color, ConfigError};

use crate::classified::ClassifiedRenderer;
use crate::colormap::{ColorMap, ColorStop};
use crate::raster::Renderer;
use crate::stretched::{ColorSpace, StretchedRenderer};
use crate::unique::UniqueValuesRenderer;

#[derive(Debug, Serialize, Deserialize)]
struct RendererDoc {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colorspace: Option<String>,
    #[serde(default)]
    fill: Option<f64>,
    stops: Vec<StopDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StopDoc {
    value: f64,
    color: String,
}

/// Serialize a renderer's configuration to a JSON document.
pub fn to_json(renderer: &Renderer) -> Result<String, CodecError> {
    let colorspace = match renderer {
        Renderer::Stretched(r) => Some(r.colorspace().as_str().to_string()),
        _ => None,
    };
    let labels = match renderer {
        Renderer::Unique(r) => r.labels().map(<[String]>::to_vec),
        _ => None,
    };

    let doc = RendererDoc {
        kind: renderer.kind().to_string(),
        colorspace,
        fill: renderer.fill(),
        stops: renderer
            .colormap()
            .stops()
            .iter()
            .map(|stop| StopDoc {
                value: stop.value,
                color: stop.color.to_hex(),
            })
            .collect(),
        labels,
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Load a renderer from a persisted JSON document.
///
/// Validation matches direct construction; violations are reported as
/// [`CodecError::InvalidDocument`] naming the offending field.
pub fn from_json(json: &str) -> Result<Renderer, CodecError> {
    let doc: RendererDoc = serde_json::from_str(json)?;

    let mut stops = Vec::with_capacity(doc.stops.len());
    for stop in &doc.stops {
        let color =
            Color::from_hex(&stop.color).map_err(|err| CodecError::invalid("stops", err))?;
        stops.push(ColorStop::new(stop.value, color));
    }
    let colormap = ColorMap::new(stops).map_err(|err| CodecError::invalid("stops", err))?;

    match doc.kind.as_str() {
        "stretched" => {
            let colorspace = match doc.colorspace.as_deref() {
                Some(s) => {
                    ColorSpace::parse(s).map_err(|err| CodecError::invalid("colorspace", err))?
                }
                None => ColorSpace::Hsv,
            };
            StretchedRenderer::new(colormap, colorspace, doc.fill)
                .map(Renderer::Stretched)
                .map_err(|err| CodecError::invalid("stops", err))
        }
        "classified" => Ok(Renderer::Classified(ClassifiedRenderer::new(
            colormap, doc.fill,
        ))),
        "unique" => UniqueValuesRenderer::new(colormap, doc.labels, doc.fill)
            .map(Renderer::Unique)
            .map_err(|err| CodecError::invalid("labels", err)),
        other => Err(CodecError::invalid(
            "kind",
            ConfigError::UnknownRendererKind(other.to_string()),
        )),
    }
}
