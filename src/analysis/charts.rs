//! Chart generation using plotters.
//!
//! Renders the model sample as a histogram with a line marker and a summary
//! statistics table, into an in-memory RGB buffer the GUI turns into a
//! texture. Styling is configurable via chart_config.json.

use super::config::ChartConfig;
use super::histogram::{build_histogram, Histogram};
use super::statistics::SampleStats;
use anyhow::{Context, Result};
use plotters::prelude::*;

/// A rendered chart as raw RGB888 pixels.
#[derive(Clone)]
pub struct ChartImage {
    pub rgb: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

fn rgb(c: [u8; 3]) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

/// Render the full result chart: title, statistics table, and histogram with
/// a marker at the line value.
pub fn render_over_chart(
    sample: &[f64],
    line: f64,
    probability: f64,
    stats: &SampleStats,
    bins: usize,
    config: &ChartConfig,
) -> Result<ChartImage> {
    let width = config.layout.chart_width;
    let height = config.layout.chart_height;
    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).context("Failed to fill chart background")?;

        // Split into: title area, table area, chart area
        let (title_area, rest) = root.split_vertically(config.layout.title_height);
        let (table_area, chart_area) = rest.split_vertically(config.layout.table_height);

        // Title: the headline number plus the line it refers to
        let title = format!(
            "{:.1}% chance of Over {} (n = {})",
            probability * 100.0,
            line,
            stats.count
        );
        let title_font = ("sans-serif", config.font.title_size)
            .into_font()
            .style(FontStyle::Bold);
        title_area.draw_text(&title, &title_font.color(&BLACK), (20, 8))?;

        draw_stats_table(&table_area, stats, config)?;

        let histogram = build_histogram(sample, bins);
        draw_histogram(&chart_area, &histogram, line, config)?;

        root.present().context("Failed to render chart")?;
    }

    Ok(ChartImage {
        rgb: buffer,
        width,
        height,
    })
}

/// Draw the histogram with a vertical marker at the line value.
fn draw_histogram(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    histogram: &Histogram,
    line: f64,
    config: &ChartConfig,
) -> Result<()> {
    if histogram.bucket_starts.is_empty() {
        return Ok(());
    }

    let bar_primary = rgb(config.colors.bar_primary);
    let bar_outline = rgb(config.colors.bar_outline);
    let line_marker = rgb(config.colors.line_marker);
    let grid_color = rgb(config.colors.grid_color);

    area.fill(&rgb(config.colors.light_gray_bg))?;

    let max_count = *histogram.counts.iter().max().unwrap_or(&1);
    let x_min = histogram.bucket_starts[0];
    let x_max = histogram.bucket_starts.last().copied().unwrap_or(x_min) + histogram.bucket_width;
    // Make sure the marker is visible even when the line sits outside the sample range
    let x_min = x_min.min(line - histogram.bucket_width);
    let x_max = x_max.max(line + histogram.bucket_width);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .margin_top(30) // Extra space for legend
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0u32..(max_count + max_count / 10 + 1))
        .context("Failed to build histogram")?;

    chart
        .configure_mesh()
        .x_desc("Outcome")
        .y_desc("Count")
        .x_label_formatter(&|x| format!("{:.1}", x))
        .light_line_style(grid_color)
        .bold_line_style(grid_color.mix(0.8))
        .draw()
        .context("Failed to draw mesh")?;

    for (i, &start) in histogram.bucket_starts.iter().enumerate() {
        let count = histogram.counts[i];
        if count > 0 {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(start, 0u32), (start + histogram.bucket_width, count)],
                bar_primary.filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(start, 0u32), (start + histogram.bucket_width, count)],
                bar_outline.stroke_width(1),
            )))?;
        }
    }

    // Vertical marker at the line value
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(line, 0u32), (line, max_count + max_count / 10 + 1)],
        line_marker.stroke_width(2),
    )))?;

    // Legend at top
    let legend_text = format!("line = {}", line);
    let legend_x = 70;
    let legend_y = 5;
    area.draw(&PathElement::new(
        vec![(legend_x, legend_y + 7), (legend_x + 20, legend_y + 7)],
        line_marker.stroke_width(2),
    ))?;
    area.draw_text(
        &legend_text,
        &("sans-serif", config.font.legend_size)
            .into_font()
            .color(&BLACK),
        (legend_x + 25, legend_y),
    )?;

    Ok(())
}

/// Draw the statistics table: Min, Mean, Median, Max.
fn draw_stats_table(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    stats: &SampleStats,
    config: &ChartConfig,
) -> Result<()> {
    let header_color = rgb(config.colors.bar_outline);
    let grid_color = rgb(config.colors.grid_color);

    let (width, height) = area.dim_in_pixel();
    let col_width = width as i32 / 4;
    let header_height = config.layout.table_header_height;
    let value_height = height as i32 - header_height;

    let headers = ["Min", "Mean", "Median", "Max"];
    let values = [
        format!("{:.2}", stats.min),
        format!("{:.2}", stats.mean),
        format!("{:.2}", stats.median),
        format!("{:.2}", stats.max),
    ];

    let header_font = ("sans-serif", config.font.table_header_size)
        .into_font()
        .style(FontStyle::Bold);
    let value_font = ("sans-serif", config.font.table_value_size).into_font();

    // Estimate character width based on font size
    let char_width = (config.font.table_header_size / 2) as i32;
    let value_char_width = (config.font.table_value_size / 2) as i32;

    for (i, (header, value)) in headers.iter().zip(values.iter()).enumerate() {
        let x_start = i as i32 * col_width;

        area.draw(&Rectangle::new(
            [(x_start, 0), (x_start + col_width, header_height)],
            header_color.filled(),
        ))?;

        let header_text_x = x_start + (col_width - header.len() as i32 * char_width) / 2;
        area.draw_text(header, &header_font.color(&WHITE), (header_text_x, 4))?;

        area.draw(&Rectangle::new(
            [
                (x_start, header_height),
                (x_start + col_width, header_height + value_height),
            ],
            WHITE.filled(),
        ))?;
        area.draw(&Rectangle::new(
            [
                (x_start, header_height),
                (x_start + col_width, header_height + value_height),
            ],
            grid_color.stroke_width(1),
        ))?;

        let value_text_x = x_start + (col_width - value.len() as i32 * value_char_width) / 2;
        let value_text_y =
            header_height + (value_height - config.font.table_value_size as i32) / 2;
        area.draw_text(value, &value_font.color(&BLACK), (value_text_x, value_text_y))?;
    }

    Ok(())
}
