// Dweve Speedup - Parallel Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Chart models.
//!
//! Plain data describing what to draw. Undefined values are `None` and are
//! never drawn: bars are omitted and lines break at the gap.

use crate::error::{PlotError, Result};

/// Output image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
        }
    }
}

/// One bar per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend label.
    pub label: String,
    /// Values aligned with [`BarChart::categories`].
    pub values: Vec<Option<f64>>,
}

/// Grouped bar chart: one group per category, one bar per series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Caption.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Group labels along the x axis.
    pub categories: Vec<String>,
    /// Bar series, drawn left to right inside each group.
    pub series: Vec<BarSeries>,
    /// Logarithmic value axis.
    pub log_scale: bool,
    /// Decimal places for value labels above bars; `None` disables labels.
    pub label_precision: Option<usize>,
}

impl BarChart {
    /// Creates an empty chart with linear scale and two-decimal labels.
    pub fn new(title: impl Into<String>, x_desc: impl Into<String>, y_desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            categories: Vec::new(),
            series: Vec::new(),
            log_scale: false,
            label_precision: Some(2),
        }
    }

    /// Checks that every series has one value per category.
    pub fn validate(&self) -> Result<()> {
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(PlotError::InvalidChart {
                    title: self.title.clone(),
                    reason: format!(
                        "series '{}' has {} values for {} categories",
                        series.label,
                        series.values.len(),
                        self.categories.len()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns every value that can be drawn on the chart's scale.
    pub fn drawable_values(&self) -> Vec<f64> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten().copied())
            .filter(|v| v.is_finite() && (!self.log_scale || *v > 0.0))
            .collect()
    }
}

/// A line through `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineData {
    /// Legend label.
    pub label: String,
    /// Points in drawing order; `None` breaks the line.
    pub points: Vec<(f64, Option<f64>)>,
}

impl LineData {
    /// Splits the line into runs of consecutive defined points.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            match y.filter(|v| v.is_finite()) {
                Some(y) => current.push((x, y)),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Reference line drawn across the whole x range.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// `y = x`, e.g. ideal linear speedup.
    Diagonal {
        /// Legend label.
        label: String,
    },
    /// `y = value`, e.g. ideal efficiency.
    Horizontal {
        /// Legend label.
        label: String,
        /// Constant y.
        value: f64,
    },
}

impl Reference {
    /// Returns the legend label.
    pub fn label(&self) -> &str {
        match self {
            Reference::Diagonal { label } | Reference::Horizontal { label, .. } => label,
        }
    }
}

/// Text pointing at a data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Point x.
    pub x: f64,
    /// Point y.
    pub y: f64,
    /// Text shown next to the point.
    pub text: String,
}

/// Line chart with numeric x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// Caption.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Data lines.
    pub lines: Vec<LineData>,
    /// Reference lines.
    pub references: Vec<Reference>,
    /// Point annotations.
    pub annotations: Vec<Annotation>,
    /// Start the y axis at zero.
    pub y_from_zero: bool,
}

impl LineChart {
    /// Creates an empty chart.
    pub fn new(title: impl Into<String>, x_desc: impl Into<String>, y_desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            lines: Vec::new(),
            references: Vec::new(),
            annotations: Vec::new(),
            y_from_zero: false,
        }
    }

    /// Returns the x positions of every point, sorted and deduplicated.
    pub fn x_values(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self
            .lines
            .iter()
            .flat_map(|line| line.points.iter().map(|(x, _)| *x))
            .filter(|x| x.is_finite())
            .collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs
    }

    /// Returns every defined y value, including horizontal references.
    pub fn y_values(&self) -> Vec<f64> {
        let mut ys: Vec<f64> = self
            .lines
            .iter()
            .flat_map(|line| line.points.iter().filter_map(|(_, y)| *y))
            .chain(self.annotations.iter().map(|a| a.y))
            .chain(self.references.iter().filter_map(|r| match r {
                Reference::Horizontal { value, .. } => Some(*value),
                Reference::Diagonal { .. } => None,
            }))
            .filter(|y| y.is_finite())
            .collect();
        if self.references.iter().any(|r| matches!(r, Reference::Diagonal { .. })) {
            ys.extend(self.x_values());
        }
        ys
    }
}
