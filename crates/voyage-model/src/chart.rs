//! Renderer-agnostic chart specifications.
//!
//! A [`ChartSpec`] carries both the plot description (kind, axes, grouping)
//! and the derived data the renderer draws. Binning of histograms is left to
//! the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Scatter,
    Bar,
}

/// How an axis interprets its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    #[default]
    Linear,
    /// Discrete labels, even when the source values are numeric.
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Stack,
}

/// Binding of an axis to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub field: String,
    pub title: String,
    pub axis_type: AxisType,
}

impl Axis {
    /// Linear axis titled after its field.
    pub fn linear(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            title: field.clone(),
            field,
            axis_type: AxisType::Linear,
        }
    }

    /// Category axis titled after its field.
    pub fn category(field: impl Into<String>) -> Self {
        Self {
            axis_type: AxisType::Category,
            ..Self::linear(field)
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Counts of one color group across the x categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSeries {
    pub group: String,
    /// Aligned with [`ChartData::Stacked::categories`].
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ChartData {
    /// Raw values for a histogram.
    Values { values: Vec<f64> },
    /// Scatter points.
    Points { points: Vec<Point> },
    /// One bar per category.
    Bars { bars: Vec<Bar> },
    /// Stacked counts per category and group.
    Stacked {
        categories: Vec<String>,
        series: Vec<StackSeries>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub x: Axis,
    pub y: Axis,
    /// Column the marks are colored by.
    pub color_by: Option<String>,
    pub bar_mode: Option<BarMode>,
    /// Fixed marker color applied to every mark.
    pub marker_color: Option<String>,
    pub autosize: bool,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, x: Axis, y: Axis, data: ChartData) -> Self {
        Self {
            kind,
            title: None,
            x,
            y,
            color_by: None,
            bar_mode: None,
            marker_color: None,
            autosize: false,
            data,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_color_by(mut self, column: impl Into<String>) -> Self {
        self.color_by = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_bar_mode(mut self, mode: BarMode) -> Self {
        self.bar_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_marker_color(mut self, color: impl Into<String>) -> Self {
        self.marker_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_autosize(mut self, autosize: bool) -> Self {
        self.autosize = autosize;
        self
    }
}
