//! HTML rendering for the swatch sheet.

use std::fmt::Write as _;

use crate::plate::{Section, Swatch};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; color: #222; }
h2 { font-size: 1.1em; margin: 1.5em 0 0.5em; }
.row { display: flex; gap: 0.5em; flex-wrap: wrap; }
.swatch { width: 8em; text-align: center; font-size: 0.8em; }
.chip { height: 4em; border: 1px solid #ccc; border-radius: 4px; margin-bottom: 0.3em; }
";

/// Render the sections as a standalone HTML page.
pub fn render_html(sections: &[Section]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Tinct color plate</title>\n<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    for section in sections {
        render_section(&mut html, section);
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn render_section(html: &mut String, section: &Section) {
    // Writing into a String cannot fail.
    let _ = writeln!(html, "<h2>{}</h2>\n<div class=\"row\">", escape(section.title));
    for swatch in &section.swatches {
        render_swatch(html, swatch);
    }
    html.push_str("</div>\n");
}

fn render_swatch(html: &mut String, swatch: &Swatch) {
    let _ = writeln!(
        html,
        "<div class=\"swatch\"><div class=\"chip\" style=\"background: {}\"></div>{}<br>{}</div>",
        escape(&swatch.css),
        escape(&swatch.label),
        escape(&swatch.css),
    );
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
