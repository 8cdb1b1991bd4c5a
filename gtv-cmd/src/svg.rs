//! Standalone SVG output for a [`HeatMapScene`].
//!
//! Mirrors the structure of the web app's SVG so the same element ids and
//! data attributes can be inspected in both. Tooltips become `<title>`
//! children since a static file has no pointer handling.

use crate::load::load_dataset;
use crate::SourceArgs;
use anyhow::Context;
use gtv_data::interaction::{signed, IDLE_STROKE};
use gtv_data::scene::{
    build_scene, regions, translate, Axis, Caption, CellRect, HeatMapScene, Legend, GRADIENT_ID,
};
use gtv_data::HeatMapConfig;
use log::info;
use std::fmt::Write;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize the whole scene as an SVG document.
pub fn render_svg(scene: &HeatMapScene) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_svg(&mut out, scene)?;
    Ok(out)
}

/// Stream the SVG document for `scene` into `out`.
pub fn write_svg(out: &mut dyn Write, scene: &HeatMapScene) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}" font-family="sans-serif">"#,
        regions::HEAT_MAP,
        scene.width,
        scene.height
    )?;
    writeln!(out, r#"<title id="{}">{}</title>"#, regions::TITLE, escape(scene.title))?;
    writeln!(
        out,
        r#"<desc id="{}">{}</desc>"#,
        regions::DESCRIPTION,
        escape(&scene.description)
    )?;
    write_gradient(out, &scene.legend)?;

    writeln!(out, r#"<g transform="{}">"#, translate(scene.plot_origin))?;
    for cell in &scene.cells {
        write_cell(out, cell)?;
    }
    write_axis(out, &scene.x_axis, 12)?;
    write_axis(out, &scene.y_axis, 12)?;
    write_caption(out, &scene.x_caption, 14)?;
    write_caption(out, &scene.y_caption, 14)?;
    writeln!(out, "</g>")?;

    write_legend(out, &scene.legend)?;
    writeln!(out, "</svg>")
}

fn write_cell(out: &mut dyn Write, cell: &CellRect) -> std::fmt::Result {
    writeln!(
        out,
        r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}" data-year="{}" data-month="{}" data-temp="{}" stroke="{}" stroke-width="{}"><title>{} {}&#10;Temperature: {:.2}°C&#10;Variance: {}°C</title></rect>"#,
        cell.x,
        cell.y,
        cell.width,
        cell.height,
        cell.fill,
        cell.year,
        cell.data_month,
        cell.temperature,
        IDLE_STROKE.color,
        IDLE_STROKE.width,
        cell.month_name,
        cell.year,
        cell.temperature,
        signed(cell.variance)
    )
}

fn write_axis(out: &mut dyn Write, axis: &Axis, font_size: u32) -> std::fmt::Result {
    let orient = axis.orient;
    let (x2, y2) = orient.tick_line();
    let ((label_x, label_y), anchor, dy) = orient.label_placement();

    writeln!(
        out,
        r#"<g id="{}" transform="{}" font-size="{}">"#,
        axis.id,
        translate(axis.translate),
        font_size
    )?;
    writeln!(
        out,
        r#"<path d="{}" fill="none" stroke="currentColor"/>"#,
        orient.domain_path(axis.length)
    )?;
    for tick in &axis.ticks {
        writeln!(
            out,
            r#"<g class="tick" transform="{}"><line x2="{}" y2="{}" stroke="currentColor"/><text x="{}" y="{}" dy="{}" text-anchor="{}" fill="currentColor">{}</text></g>"#,
            orient.tick_transform(tick.offset),
            x2,
            y2,
            label_x,
            label_y,
            dy,
            anchor,
            escape(&tick.label)
        )?;
    }
    writeln!(out, "</g>")
}

fn write_caption(out: &mut dyn Write, caption: &Caption, font_size: u32) -> std::fmt::Result {
    writeln!(
        out,
        r#"<text transform="rotate({})" x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="600">{}</text>"#,
        caption.rotate,
        caption.x,
        caption.y,
        font_size,
        escape(caption.text)
    )
}

fn write_gradient(out: &mut dyn Write, legend: &Legend) -> std::fmt::Result {
    writeln!(
        out,
        r#"<defs><linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="0">"#,
        GRADIENT_ID, legend.height
    )?;
    for stop in &legend.gradient {
        writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            stop.offset * 100.0,
            stop.color
        )?;
    }
    writeln!(out, "</linearGradient></defs>")
}

fn write_legend(out: &mut dyn Write, legend: &Legend) -> std::fmt::Result {
    writeln!(
        out,
        r#"<g id="{}" transform="{}">"#,
        regions::LEGEND,
        translate(legend.translate)
    )?;
    for swatch in &legend.swatches {
        writeln!(
            out,
            r##"<rect class="legend-rect" x="0" y="{}" width="{}" height="{}" fill="{}" data-temp="{}" stroke="#333" stroke-width="0.5"/>"##,
            swatch.y, swatch.width, swatch.height, swatch.fill, swatch.temperature
        )?;
    }
    writeln!(
        out,
        r##"<rect width="{}" height="{}" fill="url(#{})" fill-opacity="0.35" stroke="#333" stroke-width="1"/>"##,
        legend.width, legend.height, GRADIENT_ID
    )?;
    write_axis(out, &legend.axis, 11)?;
    write_caption(out, &legend.caption, 12)?;
    writeln!(out, "</g>")
}

pub async fn run_render(
    source: &SourceArgs,
    output: &str,
    width: f64,
    height: f64,
) -> anyhow::Result<()> {
    let dataset = load_dataset(source).await?;
    let config = HeatMapConfig::default().with_size(width, height);
    let scene = build_scene(&dataset, &config)?;
    let svg = render_svg(&scene).context("Failed to serialize the heat map as SVG")?;
    std::fs::write(output, svg).with_context(|| format!("Failed to write {}", output))?;
    info!(
        "Rendered {} cells ({} to {} °C) to {}",
        scene.cells.len(),
        scene.range.min,
        scene.range.max,
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_data::{Dataset, Record};

    fn scene() -> HeatMapScene {
        let mut records = Vec::new();
        for year in 1753..=1760 {
            for month in 1..=12 {
                records.push(Record {
                    year,
                    month,
                    variance: (month as f64 - 6.0) * 0.4,
                });
            }
        }
        let dataset = Dataset {
            base_temperature: 8.66,
            records,
        };
        build_scene(&dataset, &HeatMapConfig::default()).unwrap()
    }

    #[test]
    fn test_one_cell_rect_per_cell_and_eight_swatches() {
        let scene = scene();
        let svg = render_svg(&scene).unwrap();
        assert_eq!(svg.matches(r#"class="cell""#).count(), 96);
        assert_eq!(svg.matches(r#"class="legend-rect""#).count(), 8);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_regions_are_addressable() {
        let svg = render_svg(&scene()).unwrap();
        for id in [
            regions::HEAT_MAP,
            regions::TITLE,
            regions::DESCRIPTION,
            regions::X_AXIS,
            regions::Y_AXIS,
            regions::LEGEND,
        ] {
            assert!(svg.contains(&format!(r#"id="{}""#, id)), "missing region {}", id);
        }
    }

    #[test]
    fn test_cell_metadata_uses_zero_indexed_month() {
        let svg = render_svg(&scene()).unwrap();
        assert!(svg.contains(r#"data-year="1753" data-month="0""#));
        assert!(svg.contains(r#"data-year="1760" data-month="11""#));
        assert!(svg.contains("February 1753&#10;Temperature: 7.06°C&#10;Variance: -1.60°C"));
    }

    struct FullBuffer {
        written: String,
        capacity: usize,
    }

    impl Write for FullBuffer {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            if self.written.len() + s.len() > self.capacity {
                return Err(std::fmt::Error);
            }
            self.written.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_writer_errors_are_propagated() {
        let scene = scene();
        let mut out = FullBuffer {
            written: String::new(),
            capacity: 2048,
        };
        assert_eq!(write_svg(&mut out, &scene), Err(std::fmt::Error));
        assert!(out.written.starts_with("<svg"));
        assert!(!out.written.contains("</svg>"));

        let whole = render_svg(&scene).unwrap();
        assert!(whole.len() > 2048);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
    }
}
