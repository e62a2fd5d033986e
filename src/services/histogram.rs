use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::services::simulation_types::SimulationRun;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to create histogram directory: {0}")]
    CreateDir(#[from] std::io::Error),
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Counts per bucket plus the bucket width. Bucket `k` covers values that
/// round to `k * bin_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub bin_width: f64,
    pub counts: BTreeMap<i64, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramScale {
    Count,
    /// Bar areas sum to one.
    Density,
}

impl HistogramScale {
    fn axis_label(self) -> &'static str {
        match self {
            Self::Count => "Number of Occurrences",
            Self::Density => "Probability Density",
        }
    }
}

impl HistogramBins {
    /// Bar height per bucket, scaled by `n * bin_width` for density.
    pub fn heights(&self, scale: HistogramScale) -> Vec<(i64, f64)> {
        let total: usize = self.counts.values().sum();
        let divisor = match scale {
            HistogramScale::Count => 1.0,
            HistogramScale::Density => total as f64 * self.bin_width,
        };
        self.counts
            .iter()
            .map(|(bucket, count)| (*bucket, *count as f64 / divisor))
            .collect()
    }
}

/// Bins values with a width of `range / sqrt(n)`. A zero range lands every
/// value in a single bucket whose label is the value itself.
pub fn histogram_bins(values: &[f64]) -> Option<HistogramBins> {
    if values.is_empty() {
        return None;
    }

    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;

    let mut counts = BTreeMap::new();
    if range < f64::EPSILON {
        let bin_width = if min_value.abs() > f64::EPSILON {
            min_value.abs()
        } else {
            1.0
        };
        counts.insert((min_value / bin_width).round() as i64, values.len());
        return Some(HistogramBins { bin_width, counts });
    }

    let bin_width = range / (values.len() as f64).sqrt();
    for value in values {
        let bucket = (*value / bin_width).round() as i64;
        *counts.entry(bucket).or_insert(0usize) += 1;
    }
    Some(HistogramBins { bin_width, counts })
}

/// Writes `utilization.png` and one `gross_margins_<lines>.png` per tier.
pub fn write_run_histograms<P: AsRef<Path>>(
    output_dir: P,
    run: &SimulationRun,
) -> Result<Vec<String>, HistogramError> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    let utilization_path = output_dir.join("utilization.png");
    let utilization_path = utilization_path.to_string_lossy().into_owned();
    write_histogram_png(
        &utilization_path,
        &run.utilization_samples,
        "Distribution of Utilization",
        "Utilization",
        HistogramScale::Density,
    )?;
    written.push(utilization_path);

    for tier in &run.tiers {
        let path = output_dir.join(format!("gross_margins_{}.png", tier.lines));
        let path = path.to_string_lossy().into_owned();
        write_histogram_png(
            &path,
            &tier.gross_margins,
            &format!("Distribution of Gross Margins - {} Lines", tier.lines),
            "Gross Margin",
            HistogramScale::Count,
        )?;
        written.push(path);
    }

    info!(count = written.len(), dir = %output_dir.display(), "histograms written");
    Ok(written)
}

pub fn write_histogram_png(
    output_path: &str,
    values: &[f64],
    caption: &str,
    x_desc: &str,
    scale: HistogramScale,
) -> Result<(), HistogramError> {
    let Some(bins) = histogram_bins(values) else {
        return Ok(());
    };
    let bin_width = bins.bin_width;
    let heights = bins.heights(scale);
    let max_height = heights
        .iter()
        .map(|(_, height)| *height)
        .fold(0.0_f64, f64::max);
    let min_bucket = *bins.counts.keys().next().unwrap_or(&0) - 1;
    let max_bucket = *bins.counts.keys().next_back().unwrap_or(&0) + 1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_bucket..max_bucket, 0.0..(max_height * 1.1).max(1e-9))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc(scale.axis_label())
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{:.2}", *bucket as f64 * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(heights.iter().map(|(bucket, height)| {
            Rectangle::new([(*bucket, 0.0), (*bucket + 1, *height)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
