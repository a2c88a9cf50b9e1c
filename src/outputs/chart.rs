//! SVG bar chart of entity label frequencies.

use crate::stats::ranked;
use crate::utils::create_dir_all_sync;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::collections::BTreeMap;
use std::error::Error;
use std::io::Cursor;
use std::path::Path;
use tracing::{info, instrument};

const HEIGHT: u32 = 420;
const MARGIN_LEFT: u32 = 70;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 110;
const BAR_WIDTH: u32 = 48;
const BAR_GAP: u32 = 24;
const BAR_COLOR: &str = "steelblue";

type SvgWriter = Writer<Cursor<Vec<u8>>>;

fn start(w: &mut SvgWriter, name: &str, attrs: &[(&str, &str)]) -> Result<(), Box<dyn Error>> {
    let mut el = BytesStart::new(name);
    for attr in attrs {
        el.push_attribute(*attr);
    }
    w.write_event(Event::Start(el))?;
    Ok(())
}

fn end(w: &mut SvgWriter, name: &str) -> Result<(), Box<dyn Error>> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn empty(w: &mut SvgWriter, name: &str, attrs: &[(&str, &str)]) -> Result<(), Box<dyn Error>> {
    let mut el = BytesStart::new(name);
    for attr in attrs {
        el.push_attribute(*attr);
    }
    w.write_event(Event::Empty(el))?;
    Ok(())
}

fn text(w: &mut SvgWriter, attrs: &[(&str, &str)], content: &str) -> Result<(), Box<dyn Error>> {
    start(w, "text", attrs)?;
    w.write_event(Event::Text(BytesText::new(content)))?;
    end(w, "text")
}

/// Render the label → frequency bar chart as an SVG document.
///
/// Bars are ordered by frequency, highest first.
pub fn render_svg(label_counts: &BTreeMap<String, usize>) -> Result<String, Box<dyn Error>> {
    let bars = ranked(label_counts);
    let max = bars.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let n = bars.len() as u32;
    let plot_width = n * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
    let baseline = MARGIN_TOP + plot_height;

    let mut w = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let (width_s, height_s) = (width.to_string(), HEIGHT.to_string());
    let view_box = format!("0 0 {width} {HEIGHT}");
    start(
        &mut w,
        "svg",
        &[
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", width_s.as_str()),
            ("height", height_s.as_str()),
            ("viewBox", view_box.as_str()),
            ("font-family", "sans-serif"),
        ],
    )?;

    let center = (width / 2).to_string();
    text(
        &mut w,
        &[("x", center.as_str()), ("y", "28"), ("text-anchor", "middle"), ("font-size", "18")],
        "Entity type distribution",
    )?;

    // Axes.
    let (left, right) = (MARGIN_LEFT.to_string(), (MARGIN_LEFT + plot_width).to_string());
    let (top, base) = (MARGIN_TOP.to_string(), baseline.to_string());
    empty(
        &mut w,
        "line",
        &[
            ("x1", left.as_str()),
            ("y1", base.as_str()),
            ("x2", right.as_str()),
            ("y2", base.as_str()),
            ("stroke", "black"),
        ],
    )?;
    empty(
        &mut w,
        "line",
        &[
            ("x1", left.as_str()),
            ("y1", top.as_str()),
            ("x2", left.as_str()),
            ("y2", base.as_str()),
            ("stroke", "black"),
        ],
    )?;

    let tick_x = (MARGIN_LEFT - 8).to_string();
    for (y, value) in [(baseline, 0), (MARGIN_TOP, max)] {
        let y = (y + 4).to_string();
        text(
            &mut w,
            &[
                ("x", tick_x.as_str()),
                ("y", y.as_str()),
                ("text-anchor", "end"),
                ("font-size", "12"),
            ],
            &value.to_string(),
        )?;
    }

    for (i, (label, count)) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + BAR_GAP + i as u32 * (BAR_WIDTH + BAR_GAP);
        let h = (*count as u64 * plot_height as u64 / max as u64) as u32;
        let (x_s, y_s, w_s, h_s) = (
            x.to_string(),
            (baseline - h).to_string(),
            BAR_WIDTH.to_string(),
            h.to_string(),
        );
        start(
            &mut w,
            "rect",
            &[
                ("x", x_s.as_str()),
                ("y", y_s.as_str()),
                ("width", w_s.as_str()),
                ("height", h_s.as_str()),
                ("fill", BAR_COLOR),
            ],
        )?;
        start(&mut w, "title", &[])?;
        w.write_event(Event::Text(BytesText::new(&format!("{label}: {count}"))))?;
        end(&mut w, "title")?;
        end(&mut w, "rect")?;

        let label_x = x + BAR_WIDTH / 2;
        let label_y = baseline + 16;
        let transform = format!("rotate(45 {label_x} {label_y})");
        let (lx, ly) = (label_x.to_string(), label_y.to_string());
        text(
            &mut w,
            &[
                ("x", lx.as_str()),
                ("y", ly.as_str()),
                ("transform", transform.as_str()),
                ("font-size", "12"),
            ],
            label,
        )?;
    }

    let x_label_y = (HEIGHT - 12).to_string();
    let plot_center = (MARGIN_LEFT + plot_width / 2).to_string();
    text(
        &mut w,
        &[
            ("x", plot_center.as_str()),
            ("y", x_label_y.as_str()),
            ("text-anchor", "middle"),
            ("font-size", "14"),
        ],
        "Entity type",
    )?;
    let y_label_y = (MARGIN_TOP + plot_height / 2).to_string();
    let y_transform = format!("rotate(-90 18 {y_label_y})");
    text(
        &mut w,
        &[
            ("x", "18"),
            ("y", y_label_y.as_str()),
            ("transform", y_transform.as_str()),
            ("text-anchor", "middle"),
            ("font-size", "14"),
        ],
        "Frequency",
    )?;

    end(&mut w, "svg")?;
    Ok(String::from_utf8(w.into_inner().into_inner())?)
}

/// Write the chart to `path`, or print a notice and skip when there is
/// nothing to plot.
///
/// Returns whether a file was written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn plot_entity_distribution(
    label_counts: &BTreeMap<String, usize>,
    path: &Path,
) -> Result<bool, Box<dyn Error>> {
    if label_counts.is_empty() {
        println!("No entities to plot.");
        return Ok(false);
    }

    let svg = render_svg(label_counts)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all_sync(parent)?;
    }
    std::fs::write(path, svg)?;
    info!(labels = label_counts.len(), "Wrote entity chart");
    Ok(true)
}
