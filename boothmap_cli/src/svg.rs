// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering of a [`MapScene`].
//!
//! Geometry is emitted in content coordinates inside a single group carrying
//! the content → container matrix, so the document mirrors what an
//! interactive renderer would draw for the same state.

use core::fmt::Write as _;

use boothmap_app::{BoothTile, LOADING_MESSAGE, MapScene, ReadyScene, TentOutline};
use kurbo::{Affine, Rect, Size};
use peniko::Color;

const TILE_STROKE_WIDTH: f64 = 1.5;
const SELECTED_STROKE_WIDTH: f64 = 3.0;
const LABEL_FONT_SIZE: f64 = 14.0;
const CAPTION_FONT_SIZE: f64 = 18.0;

/// Renders `scene` as a standalone SVG document of the container's size.
///
/// A loading scene has no measured container; `fallback` is used instead.
pub(crate) fn render_scene(scene: &MapScene, fallback: Size) -> String {
    match scene {
        MapScene::Loading => render_loading(fallback),
        MapScene::Ready(ready) => render_ready(ready),
    }
}

fn render_loading(size: Size) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
        fmt_f64(size.width / 2.0),
        fmt_f64(size.height / 2.0),
        escape(LOADING_MESSAGE),
    );
    svg_document(size, &body)
}

fn render_ready(scene: &ReadyScene) -> String {
    let mut body = String::new();
    write_rect(
        &mut body,
        scene.container.to_rect(),
        &fill_attrs(scene.background),
    );

    let _ = write!(
        body,
        "<g transform=\"{}\" font-family=\"sans-serif\">",
        affine_to_svg_matrix(scene.transform)
    );
    for outline in &scene.outlines {
        write_outline(&mut body, outline, scene.outline);
    }
    for tile in &scene.tiles {
        write_tile(&mut body, tile, scene.text);
    }
    body.push_str("</g>");

    svg_document(scene.container, &body)
}

fn svg_document(size: Size, body: &str) -> String {
    let width = fmt_f64(size.width);
    let height = fmt_f64(size.height);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    svg.push_str(body);
    svg.push_str("</svg>");
    svg
}

fn write_outline(out: &mut String, outline: &TentOutline, color: Color) {
    let (stroke, opacity) = color_to_svg(color);
    let mut attrs = String::new();
    let _ = write!(
        attrs,
        " fill=\"none\" stroke=\"{stroke}\" stroke-width=\"2\" stroke-dasharray=\"8 4\""
    );
    if opacity < 1.0 {
        let _ = write!(attrs, " stroke-opacity=\"{}\"", fmt_f64(opacity));
    }
    write_rect(out, outline.rect, &attrs);
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{stroke}\">{}</text>",
        fmt_f64(outline.rect.x0 + 8.0),
        fmt_f64(outline.rect.y0 + CAPTION_FONT_SIZE + 4.0),
        fmt_f64(CAPTION_FONT_SIZE),
        escape(outline.label),
    );
}

fn write_tile(out: &mut String, tile: &BoothTile, text: Color) {
    let (stroke, _) = color_to_svg(tile.stroke);
    let width = if tile.selected {
        SELECTED_STROKE_WIDTH
    } else {
        TILE_STROKE_WIDTH
    };
    let mut attrs = fill_attrs(tile.fill);
    let _ = write!(
        attrs,
        " stroke=\"{stroke}\" stroke-width=\"{}\" data-booth=\"{}\"",
        fmt_f64(width),
        tile.id,
    );

    out.push_str("<g>");
    let _ = write!(out, "<title>{}</title>", escape(&tile.title));
    write_rect(out, tile.rect, &attrs);
    let center = tile.rect.center();
    let (fill, _) = color_to_svg(text);
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{fill}\">{}</text>",
        fmt_f64(center.x),
        fmt_f64(center.y),
        fmt_f64(LABEL_FONT_SIZE),
        escape(&tile.label),
    );
    out.push_str("</g>");
}

fn write_rect(out: &mut String, rect: Rect, attrs: &str) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{attrs}/>",
        fmt_f64(rect.x0),
        fmt_f64(rect.y0),
        fmt_f64(rect.width()),
        fmt_f64(rect.height()),
    );
}

fn fill_attrs(color: Color) -> String {
    let (fill, opacity) = color_to_svg(color);
    let mut attrs = format!(" fill=\"{fill}\"");
    if opacity < 1.0 {
        let _ = write!(attrs, " fill-opacity=\"{}\"", fmt_f64(opacity));
    }
    attrs
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // [a, b, c, d, e, f] in kurbo order.
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

fn fmt_f64(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
