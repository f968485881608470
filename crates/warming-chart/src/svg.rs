//! SVG serialisation of a laid-out `Chart`.

use std::fmt::{self, Write};

use tracing::error;

use crate::chart::{Chart, Point, SUBJECT_RADIUS};

const LINE_COLOUR: &str = "tomato";
const MARKER_COLOUR: &str = "steelblue";
const MARKER_RADIUS: f64 = 3.0;
const TICK_SIZE: f64 = 6.0;

/// Renders `chart` as a standalone SVG document.
///
/// Hover tooltips are carried by a `<title>` child on each marker so the
/// document needs no script.
#[must_use]
pub fn render_svg(chart: &Chart) -> String {
    let mut out = String::with_capacity(8 * 1024);
    if let Err(e) = write_svg(&mut out, chart) {
        error!(error = %e, "failed to serialise chart");
    }
    out
}

/// Writes the SVG document for `chart` into `out`.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_svg(out: &mut impl Write, chart: &Chart) -> fmt::Result {
    let layout = chart.layout;
    let width = layout.inner_width();
    let height = layout.inner_height();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(layout.width),
        h = num(layout.height),
    )?;
    writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        num(layout.margin.left),
        num(layout.margin.top)
    )?;

    if let Some(d) = path_data(&chart.line) {
        writeln!(
            out,
            r#"<path class="series" fill="none" stroke="{LINE_COLOUR}" stroke-width="2" d="{d}"/>"#
        )?;
    }

    write_x_axis(out, chart, width, height)?;
    write_y_axis(out, chart, height)?;

    writeln!(
        out,
        r#"<text class="title" x="{}" y="-20" text-anchor="middle">{}</text>"#,
        num(width / 2.0),
        escape(&chart.title)
    )?;
    writeln!(
        out,
        r#"<text class="subtitle" x="{}" y="-5" text-anchor="middle">{}</text>"#,
        num(width / 2.0),
        escape(&chart.subtitle)
    )?;

    for marker in &chart.markers {
        writeln!(
            out,
            r#"<circle class="marker" cx="{}" cy="{}" r="{}" fill="{MARKER_COLOUR}"><title>{}</title></circle>"#,
            num(marker.point.x),
            num(marker.point.y),
            num(MARKER_RADIUS),
            marker
                .tooltip
                .iter()
                .map(|line| escape(line))
                .collect::<Vec<_>>()
                .join("&#10;")
        )?;
    }

    write_annotations(out, chart)?;

    if let Some(notice) = &chart.notice {
        writeln!(
            out,
            r#"<text class="notice" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            num(width / 2.0),
            num(height / 2.0),
            escape(notice)
        )?;
    }

    out.write_str("</g>\n</svg>\n")
}

fn write_annotations(out: &mut impl Write, chart: &Chart) -> fmt::Result {
    if chart.annotations.is_empty() {
        return Ok(());
    }

    out.write_str("<g class=\"annotation-group\">\n")?;
    for callout in &chart.annotations {
        out.write_str("<g class=\"annotation\">")?;
        write!(
            out,
            r#"<circle class="subject" cx="{}" cy="{}" r="{}" fill="none" stroke="currentColor"/>"#,
            num(callout.anchor.x),
            num(callout.anchor.y),
            num(SUBJECT_RADIUS)
        )?;
        if let Some(start) = callout.connector_start {
            write!(
                out,
                r#"<line class="connector" x1="{}" y1="{}" x2="{}" y2="{}" stroke="currentColor"/>"#,
                num(start.x),
                num(start.y),
                num(callout.note.x),
                num(callout.note.y)
            )?;
        }
        write!(
            out,
            r#"<text class="note" x="{x}" y="{y}"><tspan class="note-title" x="{x}" font-weight="bold">{}</tspan><tspan class="note-label" x="{x}" dy="1.2em">{}</tspan></text>"#,
            escape(&callout.title),
            escape(&callout.label),
            x = num(callout.note.x),
            y = num(callout.note.y),
        )?;
        out.write_str("</g>\n")?;
    }
    out.write_str("</g>\n")
}

fn write_x_axis(out: &mut impl Write, chart: &Chart, width: f64, height: f64) -> fmt::Result {
    writeln!(
        out,
        r#"<g class="axis axis-x" transform="translate(0,{})" fill="none" font-size="10" text-anchor="middle">"#,
        num(height)
    )?;
    writeln!(
        out,
        r#"<path class="domain" stroke="currentColor" d="M0,{t}V0H{w}V{t}"/>"#,
        t = num(TICK_SIZE),
        w = num(width)
    )?;
    for tick in &chart.x_ticks {
        writeln!(
            out,
            r#"<g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="9" dy="0.71em">{}</text></g>"#,
            num(tick.position),
            num(TICK_SIZE),
            escape(&tick.label)
        )?;
    }
    out.write_str("</g>\n")
}

fn write_y_axis(out: &mut impl Write, chart: &Chart, height: f64) -> fmt::Result {
    out.write_str(
        "<g class=\"axis axis-y\" fill=\"none\" font-size=\"10\" text-anchor=\"end\">\n",
    )?;
    writeln!(
        out,
        r#"<path class="domain" stroke="currentColor" d="M-{t},{h}H0V0H-{t}"/>"#,
        t = num(TICK_SIZE),
        h = num(height)
    )?;
    for tick in &chart.y_ticks {
        writeln!(
            out,
            r#"<g class="tick" transform="translate(0,{})"><line stroke="currentColor" x2="-{}"/><text fill="currentColor" x="-9" dy="0.32em">{}</text></g>"#,
            num(tick.position),
            num(TICK_SIZE),
            escape(&tick.label)
        )?;
    }
    out.write_str("</g>\n")
}

/// `M x,y L x,y ...`; a lone point closes on itself so it stays visible.
fn path_data(points: &[Point]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!("M{},{}", num(first.x), num(first.y));
    for point in rest {
        d.push_str(&format!("L{},{}", num(point.x), num(point.y)));
    }
    if rest.is_empty() {
        d.push('Z');
    }
    Some(d)
}

/// Pixel coordinates to at most two decimals, without trailing zeros.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
