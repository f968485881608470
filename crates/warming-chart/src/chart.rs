//! The shared draw contract: turns a data window plus scene options into a
//! fully positioned `Chart`.

use serde::Serialize;
use tracing::debug;
use warming_core::record::TemperatureRecord;

use crate::extent::{DEFAULT_ANOMALY_EXTENT, DEFAULT_YEAR_EXTENT, Extent};
use crate::layout::ChartLayout;
use crate::scale::LinearScale;

/// Ticks requested on each axis.
pub const TICK_COUNT: usize = 10;

/// Radius of the circle drawn around an annotation's anchor.
pub const SUBJECT_RADIUS: f64 = 4.0;

/// Gap between the subject circle and the start of the connector.
pub const SUBJECT_PADDING: f64 = 2.0;

const EMPTY_WINDOW_NOTICE: &str = "No records in this view";

/// A callout anchored to one data coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// First line of the note (e.g. the year).
    pub title: String,
    /// Second line of the note.
    pub label: String,
    /// Year the callout points at.
    pub target_year: i32,
    /// Anomaly the callout points at.
    pub target_anomaly: f64,
    /// Horizontal label offset from the anchor, in pixels.
    pub dx: f64,
    /// Vertical label offset from the anchor, in pixels.
    pub dy: f64,
}

impl Annotation {
    /// Creates an annotation.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        label: impl Into<String>,
        target: (i32, f64),
        offset: (f64, f64),
    ) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            target_year: target.0,
            target_anomaly: target.1,
            dx: offset.0,
            dy: offset.1,
        }
    }

    /// Pixel position of the anchor under the given scales.
    #[must_use]
    pub fn anchor(&self, x: &LinearScale, y: &LinearScale) -> Point {
        Point {
            x: x.apply(f64::from(self.target_year)),
            y: y.apply(self.target_anomaly),
        }
    }
}

/// Everything the draw routine needs for one scene.
#[derive(Debug, Clone)]
pub struct ChartRequest<'a> {
    records: &'a [TemperatureRecord],
    fallback: &'a [TemperatureRecord],
    title: &'a str,
    subtitle: &'a str,
    annotations: &'a [Annotation],
    tooltip: bool,
    notice: Option<&'a str>,
    layout: ChartLayout,
}

impl<'a> ChartRequest<'a> {
    /// Creates a request for the windowed `records`.
    #[must_use]
    pub fn new(records: &'a [TemperatureRecord], title: &'a str, subtitle: &'a str) -> Self {
        Self {
            records,
            fallback: &[],
            title,
            subtitle,
            annotations: &[],
            tooltip: false,
            notice: None,
            layout: ChartLayout::default(),
        }
    }

    /// Records whose extent is used when the window is empty.
    #[must_use]
    pub fn fallback(mut self, fallback: &'a [TemperatureRecord]) -> Self {
        self.fallback = fallback;
        self
    }

    /// Callouts to position.
    #[must_use]
    pub fn annotations(mut self, annotations: &'a [Annotation]) -> Self {
        self.annotations = annotations;
        self
    }

    /// Enables per-point hover markers.
    #[must_use]
    pub fn tooltip(mut self, enabled: bool) -> Self {
        self.tooltip = enabled;
        self
    }

    /// Message shown across the plot area (e.g. a load failure).
    #[must_use]
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    /// Overrides the default 800×500 layout.
    #[must_use]
    pub fn layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Where the scale domains came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainSource {
    /// The windowed records.
    Window,
    /// The full dataset, because the window was empty.
    Dataset,
    /// The fixed defaults, because there were no records at all.
    Default,
}

/// A position in plot-area pixels (origin at the top-left of the plot).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal pixel.
    pub x: f64,
    /// Vertical pixel.
    pub y: f64,
}

/// One axis tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Domain value.
    pub value: f64,
    /// Pixel offset along the axis.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// A hoverable data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Position of the point.
    pub point: Point,
    /// Tooltip lines shown on hover.
    pub tooltip: Vec<String>,
}

/// A positioned annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    /// Note title.
    pub title: String,
    /// Note label.
    pub label: String,
    /// The data coordinate in pixels.
    pub anchor: Point,
    /// Where the note text sits.
    pub note: Point,
    /// Start of the leader line on the subject circle, if the note is offset.
    pub connector_start: Option<Point>,
}

/// A fully laid-out chart, ready for a display surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Canvas and margins.
    pub layout: ChartLayout,
    /// Year scale.
    pub x_scale: LinearScale,
    /// Anomaly scale (niced, inverted range).
    pub y_scale: LinearScale,
    /// Which records the domains were computed from.
    pub domain_source: DomainSource,
    /// Line vertices, in input order.
    pub line: Vec<Point>,
    /// Bottom axis ticks.
    pub x_ticks: Vec<Tick>,
    /// Left axis ticks.
    pub y_ticks: Vec<Tick>,
    /// Centred title.
    pub title: String,
    /// Centred subtitle.
    pub subtitle: String,
    /// Hover markers; empty unless tooltips are enabled.
    pub markers: Vec<Marker>,
    /// Positioned annotations.
    pub annotations: Vec<Callout>,
    /// Message drawn across the plot area.
    pub notice: Option<String>,
}

/// Resolves the x and y domains: window extent, else fallback extent, else
/// the fixed defaults. Single-point extents are kept as-is.
#[must_use]
pub fn resolve_domains(
    records: &[TemperatureRecord],
    fallback: &[TemperatureRecord],
) -> (Extent, Extent, DomainSource) {
    let extents = |rows: &[TemperatureRecord]| {
        Extent::of(rows.iter().map(|r| f64::from(r.year)))
            .zip(Extent::of(rows.iter().map(|r| r.mean_anomaly)))
    };

    if let Some((x, y)) = extents(records) {
        (x, y, DomainSource::Window)
    } else if let Some((x, y)) = extents(fallback) {
        (x, y, DomainSource::Dataset)
    } else {
        (DEFAULT_YEAR_EXTENT, DEFAULT_ANOMALY_EXTENT, DomainSource::Default)
    }
}

/// Lays out the chart for `request`.
#[must_use]
pub fn build_chart(request: &ChartRequest<'_>) -> Chart {
    let layout = request.layout;
    let (x_domain, y_domain, domain_source) = resolve_domains(request.records, request.fallback);
    debug!(?domain_source, records = request.records.len(), "resolved chart domains");

    let x_scale = LinearScale::new(x_domain, (0.0, layout.inner_width()));
    let y_scale = LinearScale::new(y_domain, (layout.inner_height(), 0.0)).nice(TICK_COUNT);

    let line: Vec<Point> = request
        .records
        .iter()
        .map(|r| Point {
            x: x_scale.apply(f64::from(r.year)),
            y: y_scale.apply(r.mean_anomaly),
        })
        .collect();

    let markers = if request.tooltip {
        request
            .records
            .iter()
            .zip(&line)
            .map(|(record, point)| Marker {
                point: *point,
                tooltip: tooltip_lines(record),
            })
            .collect()
    } else {
        Vec::new()
    };

    let annotations = request
        .annotations
        .iter()
        .map(|annotation| callout(annotation, &x_scale, &y_scale))
        .collect();

    let notice = request
        .notice
        .map(str::to_owned)
        .or_else(|| request.records.is_empty().then(|| EMPTY_WINDOW_NOTICE.to_owned()));

    Chart {
        layout,
        x_ticks: year_ticks(&x_scale),
        y_ticks: anomaly_ticks(&y_scale),
        x_scale,
        y_scale,
        domain_source,
        line,
        title: request.title.to_owned(),
        subtitle: request.subtitle.to_owned(),
        markers,
        annotations,
        notice,
    }
}

/// Tooltip text for one record: the year, then the anomaly to two decimals.
#[must_use]
pub fn tooltip_lines(record: &TemperatureRecord) -> Vec<String> {
    vec![
        format!("Year: {}", record.year),
        format!("Temp Anomaly: {:.2}°C", record.mean_anomaly),
    ]
}

fn callout(annotation: &Annotation, x: &LinearScale, y: &LinearScale) -> Callout {
    let anchor = annotation.anchor(x, y);
    let note = Point {
        x: anchor.x + annotation.dx,
        y: anchor.y + annotation.dy,
    };

    let distance = annotation.dx.hypot(annotation.dy);
    let reach = SUBJECT_RADIUS + SUBJECT_PADDING;
    let connector_start = (distance > reach).then(|| Point {
        x: anchor.x + annotation.dx / distance * reach,
        y: anchor.y + annotation.dy / distance * reach,
    });

    Callout {
        title: annotation.title.clone(),
        label: annotation.label.clone(),
        anchor,
        note,
        connector_start,
    }
}

fn year_ticks(scale: &LinearScale) -> Vec<Tick> {
    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            value,
            position: scale.apply(value),
            label: format!("{value:.0}"),
        })
        .collect()
}

fn anomaly_ticks(scale: &LinearScale) -> Vec<Tick> {
    let precision = scale.tick_step(TICK_COUNT).map_or(2, decimal_places);
    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            value,
            position: scale.apply(value),
            label: format_signed(value, precision),
        })
        .collect()
}

/// Decimal places needed to distinguish ticks `step` apart.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn decimal_places(step: f64) -> usize {
    let exponent = step.abs().log10().floor();
    if exponent.is_finite() && exponent < 0.0 {
        (-exponent) as usize
    } else {
        0
    }
}

/// Formats with a typographic minus sign, never printing `-0`.
fn format_signed(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
        Some(rest) => format!("\u{2212}{rest}"),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gistemp(year: i32, mean: f64) -> TemperatureRecord {
        TemperatureRecord::new(year, mean, "GISTEMP")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_point_window_keeps_degenerate_domain() {
        // Arrange
        let records = vec![gistemp(1980, 0.3)];
        let request = ChartRequest::new(&records, "Scene 2", "");

        // Act
        let chart = build_chart(&request);

        // Assert
        assert_eq!(chart.domain_source, DomainSource::Window);
        assert_eq!(chart.x_scale.domain(), Extent::new(1980.0, 1980.0));
        assert_eq!(chart.y_scale.domain(), Extent::new(0.3, 0.3));
        assert!(approx(chart.line[0].x, 350.0));
        assert!(approx(chart.line[0].y, 200.0));
        assert_eq!(chart.x_ticks.len(), 1);
        assert_eq!(chart.x_ticks[0].label, "1980");
    }

    #[test]
    fn test_empty_window_falls_back_to_dataset_extent() {
        // Arrange
        let dataset = vec![gistemp(1900, -0.08), gistemp(2016, 0.99)];
        let request = ChartRequest::new(&[], "Scene 2", "").fallback(&dataset);

        // Act
        let chart = build_chart(&request);

        // Assert
        assert_eq!(chart.domain_source, DomainSource::Dataset);
        assert_eq!(chart.x_scale.domain(), Extent::new(1900.0, 2016.0));
        assert!(chart.line.is_empty());
        assert_eq!(chart.notice.as_deref(), Some(EMPTY_WINDOW_NOTICE));
    }

    #[test]
    fn test_no_records_anywhere_uses_default_domains() {
        let chart = build_chart(&ChartRequest::new(&[], "Scene 1", ""));

        assert_eq!(chart.domain_source, DomainSource::Default);
        assert_eq!(chart.x_scale.domain(), DEFAULT_YEAR_EXTENT);
        assert_eq!(chart.y_scale.domain(), DEFAULT_ANOMALY_EXTENT);
        assert!(chart.x_scale.apply(1950.0).is_finite());
    }

    #[test]
    fn test_y_scale_is_niced_and_inverted() {
        let records = vec![gistemp(1980, 0.26), gistemp(1990, 0.45), gistemp(2016, 0.99)];

        let chart = build_chart(&ChartRequest::new(&records, "t", "s"));

        let domain = chart.y_scale.domain();
        assert!(approx(domain.min, 0.2));
        assert!(approx(domain.max, 1.0));
        assert!(approx(chart.y_scale.apply(domain.max), 0.0));
        assert!(approx(chart.y_scale.apply(domain.min), 400.0));
    }

    #[test]
    fn test_line_follows_input_order() {
        let records = vec![gistemp(1980, 0.26), gistemp(1981, 0.32), gistemp(1982, 0.14)];

        let chart = build_chart(&ChartRequest::new(&records, "t", "s"));

        assert_eq!(chart.line.len(), 3);
        assert!(chart.line[0].x < chart.line[1].x && chart.line[1].x < chart.line[2].x);
    }

    #[test]
    fn test_markers_only_when_tooltip_enabled() {
        let records = vec![gistemp(1988, 0.4), gistemp(1989, 0.27)];

        let without = build_chart(&ChartRequest::new(&records, "t", "s"));
        let with = build_chart(&ChartRequest::new(&records, "t", "s").tooltip(true));

        assert!(without.markers.is_empty());
        assert_eq!(with.markers.len(), 2);
        assert_eq!(
            with.markers[0].tooltip,
            vec!["Year: 1988".to_owned(), "Temp Anomaly: 0.40°C".to_owned()]
        );
    }

    #[test]
    fn test_annotation_anchor_is_deterministic() {
        // Arrange
        let x = LinearScale::new(Extent::new(1980.0, 2016.0), (0.0, 700.0));
        let y = LinearScale::new(Extent::new(0.0, 1.0), (400.0, 0.0));
        let annotation = Annotation::new("1997", "Kyoto Protocol Signed", (1997, 0.6), (-60.0, -40.0));

        // Act
        let first = annotation.anchor(&x, &y);
        let second = annotation.anchor(&x, &y);

        // Assert
        assert_eq!(first, second);
        assert!(approx(first.y, 160.0));
    }

    #[test]
    fn test_callout_offsets_note_and_starts_connector_outside_subject() {
        let records = vec![gistemp(1980, 0.0), gistemp(2020, 1.0)];
        let annotations = vec![Annotation::new("2000", "midpoint", (2000, 0.5), (30.0, -40.0))];

        let chart = build_chart(&ChartRequest::new(&records, "t", "s").annotations(&annotations));

        let callout = &chart.annotations[0];
        assert!(approx(callout.anchor.x, 350.0));
        assert!(approx(callout.anchor.y, 200.0));
        assert!(approx(callout.note.x, 380.0));
        assert!(approx(callout.note.y, 160.0));
        let start = callout.connector_start.unwrap();
        assert!(approx(start.x, 350.0 + 30.0 / 50.0 * 6.0));
        assert!(approx(start.y, 200.0 - 40.0 / 50.0 * 6.0));
    }

    #[test]
    fn test_annotation_outside_domain_is_positioned_off_chart() {
        let records = vec![gistemp(1980, 0.0), gistemp(2000, 1.0)];
        let annotations = vec![Annotation::new("2015", "Paris", (2015, 1.0), (60.0, -70.0))];

        let chart = build_chart(&ChartRequest::new(&records, "t", "s").annotations(&annotations));

        assert!(chart.annotations[0].anchor.x > chart.layout.inner_width());
    }

    #[test]
    fn test_explicit_notice_wins_over_empty_window_notice() {
        let chart = build_chart(&ChartRequest::new(&[], "t", "s").notice(Some("Data unavailable")));

        assert_eq!(chart.notice.as_deref(), Some("Data unavailable"));
    }

    #[test]
    fn test_anomaly_tick_labels_use_minus_sign_and_step_precision() {
        let records = vec![gistemp(1900, -0.47), gistemp(2016, 0.99)];

        let chart = build_chart(&ChartRequest::new(&records, "t", "s"));

        let labels: Vec<&str> = chart.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"\u{2212}0.6"));
        assert!(labels.contains(&"0.0"));
        assert_eq!(labels.last(), Some(&"1.0"));
    }

    #[test]
    fn test_format_signed_never_prints_negative_zero() {
        assert_eq!(format_signed(-0.0001, 1), "0.0");
        assert_eq!(format_signed(-0.25, 2), "\u{2212}0.25");
        assert_eq!(format_signed(0.5, 1), "0.5");
    }
}
