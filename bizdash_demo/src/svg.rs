// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for chart scenes.

use std::collections::HashMap;
use std::fmt::Write as _;

use bizdash_charts::Size;
use bizdash_core::{
    MarkDiff, MarkId, MarkPayload, StrokeStyle, TextAnchor, TextBaseline, VerticalGradient,
};
use peniko::{Brush, Color};

/// A retained copy of one chart's marks, kept current by applying diffs.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
    size: Size,
}

impl SvgScene {
    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => {
                    self.marks.insert(*id, (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => {
                    self.marks.insert(*id, (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let Size { width, height } = self.size;
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="system-ui, sans-serif">"#
        );

        let mut ordered: Vec<(&MarkId, &(i32, MarkPayload))> = self.marks.iter().collect();
        ordered.sort_by_key(|(id, (z, _))| (*z, id.0));

        let gradients: Vec<(MarkId, VerticalGradient)> = ordered
            .iter()
            .filter_map(|(id, (_, payload))| match payload {
                MarkPayload::Path(p) => p.gradient.map(|g| (**id, g)),
                _ => None,
            })
            .collect();
        if !gradients.is_empty() {
            out.push_str("<defs>\n");
            for (id, g) in &gradients {
                let _ = write!(
                    out,
                    r#"<linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#,
                    gradient_id(*id)
                );
                write_stop(&mut out, "0%", g.top);
                write_stop(&mut out, "100%", g.bottom);
                out.push_str("</linearGradient>\n");
            }
            out.push_str("</defs>\n");
        }

        for (id, (_z, payload)) in ordered {
            match payload {
                MarkPayload::Rect(r) => {
                    let _ = write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    );
                    if r.corner_radius > 0.0 {
                        let _ = write!(out, r#" rx="{}""#, r.corner_radius);
                    }
                    write_paint_attr(&mut out, "fill", &r.fill);
                    write_stroke(&mut out, r.stroke.as_ref());
                    out.push_str("/>\n");
                }
                MarkPayload::Circle(c) => {
                    let _ = write!(
                        out,
                        r#"<circle cx="{}" cy="{}" r="{}""#,
                        c.center.x, c.center.y, c.radius
                    );
                    write_paint_attr(&mut out, "fill", &c.fill);
                    write_stroke(&mut out, c.stroke.as_ref());
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    let _ = write!(
                        out,
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    );
                    if t.font_weight != 400 {
                        let _ = write!(out, r#" font-weight="{}""#, t.font_weight);
                    }
                    if t.angle != 0.0 {
                        let _ = write!(
                            out,
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        );
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    let _ = write!(out, r#"<path d="{d}""#);
                    if p.gradient.is_some() {
                        let _ = write!(out, r#" fill="url(#{})""#, gradient_id(*id));
                    } else {
                        write_paint_attr(&mut out, "fill", &p.fill);
                    }
                    write_stroke(&mut out, p.stroke.as_ref());
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn gradient_id(id: MarkId) -> String {
    format!("grad-{:x}", id.0)
}

fn write_stop(out: &mut String, offset: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##"<stop offset="{offset}" stop-color="#{:02x}{:02x}{:02x}" stop-opacity="{}"/>"##,
        rgba.r,
        rgba.g,
        rgba.b,
        f64::from(rgba.a) / 255.0
    );
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.3}""#);
    }
}

fn write_stroke(out: &mut String, stroke: Option<&StrokeStyle>) {
    if let Some(stroke) = stroke.filter(|s| s.stroke_width > 0.0) {
        write_paint_attr(out, "stroke", &stroke.brush);
        let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
