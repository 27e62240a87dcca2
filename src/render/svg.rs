//! Low-level SVG emission helpers used by the diagram renderer.

use super::config::Palette;

pub(crate) const MARKER_NORMAL: &str = "arr";
pub(crate) const MARKER_ACTIVE: &str = "arr_active";
pub(crate) const MARKER_DIM: &str = "arr_dim";

/// Escapes text for use inside SVG element content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a coordinate without a trailing `.0` and with at most two decimals.
pub fn fmt_num(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Greedy word wrap using an average glyph width of `font_size * char_width_factor`.
///
/// A single word longer than the line is kept whole on its own line. Empty or
/// all-whitespace input yields the input unchanged as the only line.
pub fn wrap_text(text: &str, max_px: f32, font_size: f32, char_width_factor: f32) -> Vec<String> {
    let char_w = font_size * char_width_factor;
    let max_chars = if char_w > 0.0 {
        ((max_px / char_w) as usize).max(1)
    } else {
        usize::MAX
    };

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(text.to_string());
    }
    lines
}

/// Resolved paint for one rectangle.
pub(crate) struct BoxPaint<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub stroke_width: f32,
    pub dashed: bool,
}

/// Resolved paint for one text run.
pub(crate) struct TextPaint<'a> {
    pub color: &'a str,
    pub font_family: &'a str,
    pub font_size: f32,
    pub bold: bool,
}

/// Appends SVG elements to an in-memory buffer.
pub(crate) struct SvgWriter {
    out: String,
}

impl SvgWriter {
    pub fn new(width: f32, height: f32, background: &str) -> Self {
        let (w, h) = (fmt_num(width), fmt_num(height));
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        ));
        out.push_str("<title>Neutropaenic sepsis 72-hour review pathway</title>\n");
        out.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
            escape_xml(background)
        ));
        Self { out }
    }

    /// Arrowhead markers shared by every connector.
    pub fn markers(&mut self, palette: &Palette) {
        self.out.push_str("<defs>\n");
        for (id, color) in [
            (MARKER_NORMAL, &palette.outline),
            (MARKER_ACTIVE, &palette.active_stroke),
            (MARKER_DIM, &palette.dim_stroke),
        ] {
            self.out.push_str(&format!(
                "  <marker id=\"{id}\" markerWidth=\"8\" markerHeight=\"8\" refX=\"6\" refY=\"3\" orient=\"auto\">\n    <path d=\"M0,0 L0,6 L8,3 z\" fill=\"{}\"/>\n  </marker>\n",
                escape_xml(color)
            ));
        }
        self.out.push_str("</defs>\n");
    }

    pub fn group_open(&mut self, class: &str) {
        self.out.push_str(&format!("<g class=\"{}\">\n", escape_xml(class)));
    }

    pub fn group_close(&mut self) {
        self.out.push_str("</g>\n");
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, rx: f32, paint: &BoxPaint<'_>) {
        let dash = if paint.dashed {
            " stroke-dasharray=\"5,3\""
        } else {
            ""
        };
        self.out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            fmt_num(rx),
            escape_xml(paint.fill),
            escape_xml(paint.stroke),
            fmt_num(paint.stroke_width),
            dash
        ));
    }

    /// Writes one text line. `anchor` is an SVG `text-anchor` value.
    pub fn text(&mut self, x: f32, y: f32, content: &str, anchor: &str, paint: &TextPaint<'_>) {
        let weight = if paint.bold { "bold" } else { "normal" };
        self.out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\" font-family=\"{}\" text-anchor=\"{}\">{}</text>\n",
            fmt_num(x),
            fmt_num(y),
            fmt_num(paint.font_size),
            weight,
            escape_xml(paint.color),
            escape_xml(paint.font_family),
            anchor,
            escape_xml(content)
        ));
    }

    /// An open polyline; `marker` names an arrowhead drawn at its end.
    pub fn polyline(&mut self, points: &[(f32, f32)], color: &str, width: f32, marker: Option<&str>) {
        let pts = points
            .iter()
            .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        let marker_attr = marker
            .map(|m| format!(" marker-end=\"url(#{})\"", m))
            .unwrap_or_default();
        self.out.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
            pts,
            escape_xml(color),
            fmt_num(width),
            marker_attr
        ));
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}
