//! Procedural weather glyphs.
//!
//! Each glyph is a deterministic SVG fragment built from circles, lines,
//! polygons and arcs, scaled proportionally to the requested size. No
//! external assets; emoji are deliberately avoided because many installed
//! fonts render them as boxes.

use std::fmt::Write;

use morgen_core::IconKind;

use crate::error::{RenderError, RenderResult};
use crate::theme::{svg_rgb, Rgb};

/// Primary glyph stroke color, palette independent.
const ICON: Rgb = (230, 236, 245);
/// Secondary stroke color for rain streaks, fog bars and snowflakes.
const ICON_MUTED: Rgb = (160, 170, 190);

/// Build the SVG fragment for one glyph at origin, `size` units square.
#[must_use]
pub fn icon_fragment(kind: IconKind, size: f32) -> String {
    let mut svg = String::with_capacity(512);
    let sw = stroke_width(size);
    match kind {
        IconKind::Sun => sun(&mut svg, size, sw),
        IconKind::Cloud => cloud(&mut svg, size, sw, false, false),
        IconKind::RainCloud => cloud(&mut svg, size, sw, true, false),
        IconKind::SnowCloud => cloud(&mut svg, size, sw, false, true),
        IconKind::Fog => fog(&mut svg, size),
        IconKind::Thermometer => thermometer(&mut svg, size, sw),
        IconKind::Drop => drop(&mut svg, size, sw),
        IconKind::Wind => wind(&mut svg, size, sw),
    }
    svg
}

/// Append a glyph translated to `(x, y)`.
pub fn place_icon(svg: &mut String, kind: IconKind, x: f32, y: f32, size: f32) {
    let _ = write!(svg, "<g transform=\"translate({x},{y})\">");
    svg.push_str(&icon_fragment(kind, size));
    svg.push_str("</g>");
}

/// Rasterize a single glyph to an RGBA pixmap, for golden testing.
///
/// # Errors
///
/// Returns an error if the fragment fails to parse or the pixmap cannot
/// be allocated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rasterize_icon(kind: IconKind, size: f32) -> RenderResult<tiny_skia::Pixmap> {
    let px = size.ceil() as u32;
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{px}\" height=\"{px}\" viewBox=\"0 0 {size} {size}\">{}</svg>",
        icon_fragment(kind, size)
    );

    let opt = usvg::Options::default();
    let tree =
        usvg::Tree::from_str(&svg, &opt).map_err(|e| RenderError::Svg(e.to_string()))?;
    let mut pixmap = tiny_skia::Pixmap::new(px.max(1), px.max(1))
        .ok_or_else(|| RenderError::Pixmap(format!("{px}x{px}")))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Stroke width, 6px at the reference 140px glyph size, minimum 2px.
fn stroke_width(size: f32) -> f32 {
    (size * 6.0 / 140.0).max(2.0)
}

fn stroke_attrs(color: Rgb, width: f32) -> String {
    format!(
        "fill=\"none\" stroke=\"{}\" stroke-width=\"{width}\"",
        svg_rgb(color)
    )
}

fn sun(svg: &mut String, s: f32, sw: f32) {
    let c = s / 2.0;
    let r = s * 0.22;
    let _ = write!(
        svg,
        "<circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" {}/>",
        stroke_attrs(ICON, sw)
    );
    // 8 rays at 45 degree steps
    for step in 0u8..8 {
        let angle = f32::from(step) * 45.0_f32.to_radians();
        let (r1, r2) = (s * 0.34, s * 0.46);
        let (x1, y1) = (c + r1 * angle.cos(), c + r1 * angle.sin());
        let (x2, y2) = (c + r2 * angle.cos(), c + r2 * angle.sin());
        let _ = write!(
            svg,
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" {}/>",
            stroke_attrs(ICON, sw)
        );
    }
}

fn cloud(svg: &mut String, s: f32, sw: f32, rain: bool, snow: bool) {
    let y = s * 0.46;
    let attrs = stroke_attrs(ICON, sw);
    // three overlapping puffs
    for (x0, x1, top) in [
        (s * 0.18, s * 0.44, y - s * 0.18),
        (s * 0.36, s * 0.66, y - s * 0.26),
        (s * 0.56, s * 0.82, y - s * 0.18),
    ] {
        let (cx, cy) = ((x0 + x1) / 2.0, (top + y + s * 0.08) / 2.0);
        let (rx, ry) = ((x1 - x0) / 2.0, (y + s * 0.08 - top) / 2.0);
        let _ = write!(
            svg,
            "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\" {attrs}/>",
        );
    }
    // body
    let _ = write!(
        svg,
        "<rect x=\"{}\" y=\"{y}\" width=\"{}\" height=\"{}\" rx=\"{}\" {attrs}/>",
        s * 0.18,
        s * 0.64,
        s * 0.24,
        s * 0.13,
    );

    let muted = stroke_attrs(ICON_MUTED, sw);
    if rain {
        for i in 0u8..3 {
            let x = s * (0.30 + f32::from(i) * 0.18);
            let _ = write!(
                svg,
                "<line x1=\"{x}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {muted}/>",
                s * 0.74,
                x - s * 0.07,
                s * 0.90,
            );
        }
    }
    if snow {
        // small three-armed flakes instead of an asterisk text glyph
        for i in 0u8..3 {
            let cx = s * (0.30 + f32::from(i) * 0.18);
            let cy = s * 0.82;
            let arm = s * 0.055;
            for step in 0u8..3 {
                let angle = f32::from(step) * 60.0_f32.to_radians();
                let (dx, dy) = (arm * angle.cos(), arm * angle.sin());
                let _ = write!(
                    svg,
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {muted}/>",
                    cx - dx,
                    cy - dy,
                    cx + dx,
                    cy + dy,
                );
            }
        }
    }
}

fn fog(svg: &mut String, s: f32) {
    let attrs = stroke_attrs(ICON_MUTED, (s * 4.0 / 140.0).max(1.5));
    for j in 0u8..4 {
        let y = s * (0.30 + f32::from(j) * 0.14);
        let _ = write!(
            svg,
            "<rect x=\"{}\" y=\"{y}\" width=\"{}\" height=\"{}\" rx=\"{}\" {attrs}/>",
            s * 0.14,
            s * 0.72,
            s * 0.07,
            s * 0.035,
        );
    }
}

fn thermometer(svg: &mut String, s: f32, sw: f32) {
    let attrs = stroke_attrs(ICON, sw);
    // bulb
    let _ = write!(
        svg,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {attrs}/>",
        s * 0.50,
        s * 0.74,
        s * 0.14,
    );
    // stem
    let _ = write!(
        svg,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" {attrs}/>",
        s * 0.46,
        s * 0.18,
        s * 0.08,
        s * 0.52,
        s * 0.04,
    );
}

fn drop(svg: &mut String, s: f32, sw: f32) {
    let _ = write!(
        svg,
        "<polygon points=\"{},{} {},{} {},{} {},{}\" {}/>",
        s * 0.50,
        s * 0.18,
        s * 0.70,
        s * 0.52,
        s * 0.50,
        s * 0.86,
        s * 0.30,
        s * 0.52,
        stroke_attrs(ICON, sw),
    );
}

fn wind(svg: &mut String, s: f32, sw: f32) {
    let attrs = stroke_attrs(ICON, sw);
    for j in 0u8..3 {
        let y = s * (0.32 + f32::from(j) * 0.18) + s * 0.15;
        let (rx, ry) = (s * 0.40, s * 0.15);
        // lower half-ellipse arc from right to left
        let _ = write!(
            svg,
            "<path d=\"M{},{y} A{rx},{ry} 0 0 1 {},{y}\" {attrs}/>",
            s * 0.90,
            s * 0.10,
        );
    }
}
