//! Progress ring rendering
//!
//! Renders a circular progress indicator as an SVG document: a full
//! background ring plus a foreground arc whose dash offset encodes the
//! progress fraction. The foreground arc is rotated so progress starts
//! at the 12 o'clock position. Rendering is a pure function of
//! [`RenderParams`]; identical parameters produce byte-identical output.

use crate::cache::key::clamp_progress;
use crate::error::{RingError, RingResult};
use std::fmt::Write;

/// Default canvas width in pixels
pub const CANVAS_WIDTH: u32 = 256;
/// Default canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 256;
/// Default padding between the ring and the canvas edge
pub const PADDING: u32 = 16;
/// Default stroke width of the foreground arc
pub const STROKE_WIDTH: u32 = 32;
/// Stroke color of the background ring
pub const BG_STROKE_COLOR: &str = "#535353";

const SHADOW_STYLE: &str =
    "#progress{ filter: drop-shadow(-5px 8px 6px rgb(16 16 16 / 0.35)); }";

/// Parameters for one progress ring render
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub stroke_width: u32,
    pub fg_color: String,
    pub bg_color: String,
    /// Progress percentage, clamped to `[0, 100]` before use
    pub progress: f64,
    /// Draw a drop shadow under the foreground arc
    pub shadow: bool,
    /// Use rounded line caps on both arcs
    pub rounded: bool,
}

/// Geometry derived from [`RenderParams`]
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub center_x: u32,
    pub center_y: u32,
    pub radius: f64,
    /// Stroke width of the background ring (a quarter of the foreground's)
    pub base_width: u32,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RenderParams {
    /// Create params for the default canvas with the given color and switches
    pub fn new(color: &str, progress: f64, shadow: bool, rounded: bool) -> Self {
        let fg_color = if color.starts_with('#') {
            color.to_string()
        } else {
            format!("#{color}")
        };

        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            padding: PADDING,
            stroke_width: STROKE_WIDTH,
            fg_color,
            bg_color: BG_STROKE_COLOR.to_string(),
            progress,
            shadow,
            rounded,
        }
    }

    /// Derive the ring geometry: center, radius, circumference, dash offset
    pub fn geometry(&self) -> Geometry {
        let progress = clamp_progress(self.progress);
        let radius =
            f64::from(self.width) / 2.0 - f64::from(self.stroke_width) - f64::from(self.padding);
        let circumference = 2.0 * std::f64::consts::PI * radius;

        Geometry {
            center_x: self.width / 2,
            center_y: self.height / 2,
            radius,
            base_width: (f64::from(self.stroke_width) * 0.25).round() as u32,
            circumference,
            dash_offset: circumference * (1.0 - progress / 100.0),
        }
    }
}

/// One `<circle>` element of the document
#[derive(Debug, Clone, Default)]
struct SvgCircle {
    cx: u32,
    cy: u32,
    r: f64,
    stroke: String,
    stroke_width: u32,
    dash_array: Option<f64>,
    dash_offset: Option<f64>,
    rotate: Option<(i32, u32, u32)>,
    id: Option<&'static str>,
    rounded_cap: bool,
}

impl SvgCircle {
    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        write!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            self.cx, self.cy, self.r, self.stroke, self.stroke_width
        )?;
        if let Some(array) = self.dash_array {
            write!(out, " stroke-dasharray=\"{array}\"")?;
        }
        if let Some(offset) = self.dash_offset {
            write!(out, " stroke-dashoffset=\"{offset}\"")?;
        }
        if let Some((angle, x, y)) = self.rotate {
            write!(out, " transform=\"rotate({angle} {x} {y})\"")?;
        }
        if let Some(id) = self.id {
            write!(out, " id=\"{id}\"")?;
        }
        if self.rounded_cap {
            write!(out, " stroke-linecap=\"round\"")?;
        }
        writeln!(out, " />")
    }
}

/// Structured SVG document: optional style block plus circle elements
#[derive(Debug, Clone, Default)]
struct SvgDocument {
    width: u32,
    height: u32,
    style: Option<&'static str>,
    circles: Vec<SvgCircle>,
}

impl SvgDocument {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn serialize(&self) -> RingResult<Vec<u8>> {
        let mut out = String::new();
        self.write_to(&mut out)
            .map_err(|e| RingError::SvgBuild(e.to_string()))?;
        Ok(out.into_bytes())
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "<svg width=\"{}\" height=\"{}\">", self.width, self.height)?;
        if let Some(style) = self.style {
            writeln!(out, "  <style>{style}</style>")?;
        }
        for circle in &self.circles {
            circle.write_to(out)?;
        }
        writeln!(out, "</svg>")
    }
}

/// Render a progress ring to SVG bytes
///
/// Pure: no IO, no side effects. Errors surface only from document
/// serialization.
pub fn render(params: &RenderParams) -> RingResult<Vec<u8>> {
    let geo = params.geometry();

    let mut doc = SvgDocument::new(params.width, params.height);
    if params.shadow {
        doc.style = Some(SHADOW_STYLE);
    }

    doc.circles.push(SvgCircle {
        cx: geo.center_x,
        cy: geo.center_y,
        r: geo.radius,
        stroke: params.bg_color.clone(),
        stroke_width: geo.base_width,
        rounded_cap: params.rounded,
        ..SvgCircle::default()
    });

    doc.circles.push(SvgCircle {
        cx: geo.center_x,
        cy: geo.center_y,
        r: geo.radius,
        stroke: params.fg_color.clone(),
        stroke_width: params.stroke_width,
        dash_array: Some(geo.circumference),
        dash_offset: Some(geo.dash_offset),
        rotate: Some((-90, geo.center_x, geo.center_y)),
        id: Some("progress"),
        rounded_cap: params.rounded,
        ..SvgCircle::default()
    });

    doc.serialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(progress: f64) -> RenderParams {
        RenderParams::new("3584e4", progress, false, false)
    }

    #[test]
    fn geometry_default_canvas() {
        let geo = params(42.0).geometry();
        assert_eq!(geo.center_x, 128);
        assert_eq!(geo.center_y, 128);
        assert_eq!(geo.radius, 80.0);
        assert_eq!(geo.base_width, 8);
        assert_eq!(geo.circumference, 2.0 * std::f64::consts::PI * 80.0);
    }

    #[test]
    fn dash_offset_encodes_progress() {
        let zero = params(0.0).geometry();
        assert_eq!(zero.dash_offset, zero.circumference);

        let half = params(50.0).geometry();
        assert!((half.dash_offset - half.circumference / 2.0).abs() < 1e-9);

        let full = params(100.0).geometry();
        assert_eq!(full.dash_offset, 0.0);
    }

    #[test]
    fn geometry_clamps_progress() {
        assert_eq!(params(-5.0).geometry(), params(0.0).geometry());
        assert_eq!(params(150.0).geometry(), params(100.0).geometry());
    }

    #[test]
    fn render_is_deterministic() {
        let a = render(&params(42.0)).unwrap();
        let b = render(&params(42.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_contains_both_arcs() {
        let svg = String::from_utf8(render(&params(42.0)).unwrap()).unwrap();
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("stroke=\"#535353\""));
        assert!(svg.contains("stroke=\"#3584e4\""));
        assert!(svg.contains("transform=\"rotate(-90 128 128)\""));
        assert!(svg.contains("id=\"progress\""));
    }

    #[test]
    fn render_end_to_end_example() {
        let svg = String::from_utf8(render(&params(42.0)).unwrap()).unwrap();
        let offset: f64 = svg
            .split("stroke-dashoffset=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap()
            .parse()
            .unwrap();
        let circumference = 2.0 * std::f64::consts::PI * 80.0;
        assert!((offset - circumference * 0.58).abs() < 1e-9);
    }

    #[test]
    fn shadow_switch_controls_style_block() {
        let plain = String::from_utf8(render(&params(42.0)).unwrap()).unwrap();
        assert!(!plain.contains("drop-shadow"));

        let shadowed = RenderParams::new("3584e4", 42.0, true, false);
        let svg = String::from_utf8(render(&shadowed).unwrap()).unwrap();
        assert!(svg.contains("drop-shadow(-5px 8px 6px rgb(16 16 16 / 0.35))"));
    }

    #[test]
    fn rounded_switch_applies_to_both_arcs() {
        let rounded = RenderParams::new("3584e4", 42.0, false, true);
        let svg = String::from_utf8(render(&rounded).unwrap()).unwrap();
        assert_eq!(svg.matches("stroke-linecap=\"round\"").count(), 2);
    }

    #[test]
    fn hash_marker_normalized_into_stroke() {
        let with_marker = RenderParams::new("#ff7800", 10.0, false, false);
        let without = RenderParams::new("ff7800", 10.0, false, false);
        assert_eq!(render(&with_marker).unwrap(), render(&without).unwrap());
    }
}
