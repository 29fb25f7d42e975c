//! Small SVG emission helpers shared by the card engine and the composer.

use std::fmt::Write;

use crate::theme::{svg_rgb, Rgb};

/// Fraction of the font size between the top of a text box and its
/// baseline. Layout positions are top-anchored; SVG wants baselines.
pub(crate) const ASCENT: f32 = 0.8;

/// Escape special XML characters.
pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Emit a text element anchored at its top-left corner.
pub(crate) fn text_at(
    svg: &mut String,
    x: f32,
    top_y: f32,
    px: f32,
    fill: Rgb,
    family: &str,
    content: &str,
) {
    let baseline = px.mul_add(ASCENT, top_y);
    let _ = write!(
        svg,
        "<text x=\"{x}\" y=\"{baseline}\" font-size=\"{px}\" fill=\"{}\" font-family=\"{}\">{}</text>",
        svg_rgb(fill),
        escape_xml(family),
        escape_xml(content),
    );
}

/// Emit a straight line.
pub(crate) fn line_at(svg: &mut String, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb, width: f32) {
    let _ = write!(
        svg,
        "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{}\" stroke-width=\"{width}\"/>",
        svg_rgb(color),
    );
}

/// Emit a filled rounded rectangle.
pub(crate) fn rounded_rect(svg: &mut String, x: f32, y: f32, w: f32, h: f32, r: f32, fill: Rgb) {
    let _ = write!(
        svg,
        "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" rx=\"{r}\" fill=\"{}\"/>",
        svg_rgb(fill),
    );
}

/// Emit the shadow layer beneath a card: a black rounded rect, nudged
/// down and softened by the blur filter declared in the document defs.
pub(crate) fn shadow_rect(svg: &mut String, x: f32, y: f32, w: f32, h: f32, r: f32, alpha: f32) {
    let _ = write!(
        svg,
        "<rect x=\"{x}\" y=\"{}\" width=\"{w}\" height=\"{h}\" rx=\"{r}\" fill=\"black\" fill-opacity=\"{alpha}\" filter=\"url(#{SHADOW_FILTER_ID})\"/>",
        y + 10.0,
    );
}

/// Id of the gaussian blur filter used for card shadows.
pub(crate) const SHADOW_FILTER_ID: &str = "card-shadow";

/// Emit the defs block declaring the shadow blur filter.
pub(crate) fn shadow_defs(svg: &mut String) {
    let _ = write!(
        svg,
        "<defs><filter id=\"{SHADOW_FILTER_ID}\" x=\"-15%\" y=\"-15%\" width=\"130%\" height=\"130%\"><feGaussianBlur stdDeviation=\"18\"/></filter></defs>",
    );
}
