// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static HTML page assembling the header, cards, charts and summary.

use std::fmt::Write as _;

use bizdash_charts::BarMetric;

use crate::cards::MetricCard;
use crate::filter::Filter;
use crate::insights::{Insight, RECOMMENDATIONS};
use crate::svg::escape_xml;

/// One chart panel.
#[derive(Clone, Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    /// "Key Insight" paragraph, if any.
    pub(crate) description: Option<String>,
    pub(crate) svg: String,
}

#[derive(Clone, Debug)]
pub(crate) struct Page<'a> {
    pub(crate) name: &'a str,
    pub(crate) subtitle: &'a str,
    pub(crate) filter: Filter,
    pub(crate) metric: BarMetric,
    pub(crate) cards: &'a [MetricCard],
    pub(crate) sections: &'a [HtmlSection],
    pub(crate) summary: &'a [Insight],
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 24px 32px; display: flex; justify-content: space-between; align-items: center; }
header h1 { margin: 0; font-size: 24px; }
header p { margin: 4px 0 0; font-size: 14px; color: #4b5563; }
.controls { display: flex; gap: 16px; align-items: center; font-size: 14px; }
.controls .selected { font-weight: 600; }
main { max-width: 1280px; margin: 0 auto; padding: 32px; }
.cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 32px; }
.card, .panel, .summary { background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 24px; }
.card h3 { margin: 0; font-size: 14px; color: #4b5563; display: flex; justify-content: space-between; }
.card .value { font-size: 24px; font-weight: 700; margin: 16px 0 8px; }
.up { color: #16a34a; } .down { color: #dc2626; } .stable { color: #4b5563; }
.muted { color: #6b7280; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; margin-bottom: 32px; }
.panel h2 { margin: 0 0 24px; font-size: 20px; }
.panel svg { width: 100%; height: auto; }
.insight { font-size: 14px; color: #4b5563; }
.summary .items { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.summary .blue { background: #eff6ff; } .summary .teal { background: #f0fdfa; } .summary .amber { background: #fffbeb; }
.summary .item { border-radius: 8px; padding: 24px; font-size: 14px; }
.recommendations { margin-top: 32px; padding: 24px; border-radius: 8px; color: #fff; background: linear-gradient(to right, #2563eb, #0d9488); display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
footer { text-align: center; font-size: 14px; color: #4b5563; border-top: 1px solid #e5e7eb; background: #fff; padding: 24px; margin-top: 64px; }
"#;

pub(crate) fn render_page(page: &Page<'_>) -> String {
    let mut out = String::new();
    let name = escape_xml(page.name);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{name}</title>");
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>");

    let _ = writeln!(
        out,
        "<header><div><h1>{name}</h1><p>{}</p></div>",
        escape_xml(page.subtitle)
    );
    out.push_str("<div class=\"controls\"><span>Filter:</span>");
    for filter in Filter::ALL {
        let class = if filter == page.filter { " class=\"selected\"" } else { "" };
        let _ = write!(out, "<span{class}>{}</span>", filter.label());
    }
    out.push_str("<span>|</span><span>Metric:</span>");
    for metric in BarMetric::ALL {
        let class = if metric == page.metric { " class=\"selected\"" } else { "" };
        let _ = write!(out, "<span{class}>{}</span>", metric.label());
    }
    out.push_str("</div></header>\n<main>\n<div class=\"cards\">\n");

    for card in page.cards {
        let _ = writeln!(
            out,
            "<div class=\"card\"><h3>{}<span class=\"{tone}\">{}</span></h3>\
             <div class=\"value\">{}</div>\
             <div><span class=\"{tone}\">{}</span> <span class=\"muted\">vs last period</span></div></div>",
            escape_xml(card.label),
            card.icon(),
            escape_xml(&card.value),
            escape_xml(&card.change),
            tone = card.tone(),
        );
    }
    out.push_str("</div>\n");

    for pair in page.sections.chunks(2) {
        out.push_str("<div class=\"grid\">\n");
        for section in pair {
            let _ = writeln!(
                out,
                "<section class=\"panel\"><h2>{}</h2>\n{}",
                escape_xml(section.title),
                section.svg
            );
            if let Some(description) = &section.description {
                let _ = writeln!(
                    out,
                    "<p class=\"insight\"><strong>Key Insight:</strong> {}</p>",
                    escape_xml(description)
                );
            }
            out.push_str("</section>\n");
        }
        out.push_str("</div>\n");
    }

    out.push_str(
        "<div class=\"summary\"><h2>Executive Summary &amp; Key Insights</h2>\n<div class=\"items\">\n",
    );
    for insight in page.summary {
        let _ = writeln!(
            out,
            "<div class=\"item {}\"><h3>{}</h3><p>{}</p></div>",
            insight.tone,
            escape_xml(insight.title),
            escape_xml(&insight.body)
        );
    }
    out.push_str("</div>\n<div class=\"recommendations\">\n");
    for group in &RECOMMENDATIONS {
        let _ = write!(out, "<div><h4>{}</h4><ul>", escape_xml(group.title));
        for item in group.items {
            let _ = write!(out, "<li>{}</li>", escape_xml(item));
        }
        out.push_str("</ul></div>\n");
    }
    out.push_str("</div>\n</div>\n</main>\n");

    let _ = writeln!(
        out,
        "<footer><p>&copy; 2024 {name}.</p><p>Interactive data visualization for comprehensive business insights.</p></footer>"
    );
    out.push_str("</body>\n</html>\n");
    out
}
