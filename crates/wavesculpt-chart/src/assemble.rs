//! Builds the three per-run chart specifications.

use wavesculpt_config::ColorScheme;
use wavesculpt_core::{EnvelopePair, Polarity, SampleSequence, segment};

use crate::spec::{AxisRange, ChartKind, ChartSpec, Series};

/// Engine outputs a run hands to the assembler.
#[derive(Debug, Clone, Copy)]
pub struct ChartInputs<'a> {
    /// Resolved source audio.
    pub original: &'a SampleSequence,
    /// Audio after the envelope edit.
    pub modified: &'a SampleSequence,
    /// Curves actually applied, fitted to audio length.
    pub envelope: &'a EnvelopePair,
    /// Project colors.
    pub colors: &'a ColorScheme,
}

impl ChartInputs<'_> {
    /// Specification for `kind`.
    pub fn chart(&self, kind: ChartKind) -> ChartSpec {
        match kind {
            ChartKind::Final => final_chart(self),
            ChartKind::Natural => natural_chart(self),
            ChartKind::Comparison => comparison_chart(self),
        }
    }

    /// All three specifications, in [`ChartKind::ALL`] order.
    pub fn all(&self) -> [ChartSpec; 3] {
        ChartKind::ALL.map(|kind| self.chart(kind))
    }
}

/// Faint original trace plus the positive and negative curves.
pub fn final_chart(inputs: &ChartInputs<'_>) -> ChartSpec {
    let colors = inputs.colors;
    let original = inputs.original.samples();
    let positive = inputs.envelope.positive.values();
    let negative = inputs.envelope.negative.values();

    ChartSpec {
        kind: ChartKind::Final,
        background: colors.background,
        series: vec![
            Series::indexed(original, colors.positive).with_alpha(0.15),
            Series::indexed(positive, colors.positive)
                .with_width(2.0)
                .with_label("Positive"),
            Series::indexed(negative, colors.negative)
                .with_width(2.0)
                .with_label("Negative"),
        ],
        x_range: AxisRange::samples(original.len()),
        y_range: AxisRange::amplitude(&[original, positive, negative]),
        legend: true,
    }
}

/// Edited trace split at zero-crossings, one series per polarity run.
pub fn natural_chart(inputs: &ChartInputs<'_>) -> ChartSpec {
    let colors = inputs.colors;
    let modified = inputs.modified.samples();

    let series = segment(modified)
        .into_iter()
        .map(|run| {
            let color = match run.class {
                Polarity::Negative => colors.negative,
                Polarity::NonNegative => colors.positive,
            };
            Series::new(run.points, color).with_width(2.0)
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Natural,
        background: colors.background,
        series,
        x_range: AxisRange::samples(modified.len()),
        y_range: AxisRange::amplitude(&[modified]),
        legend: false,
    }
}

/// Original and edited traces overlaid.
pub fn comparison_chart(inputs: &ChartInputs<'_>) -> ChartSpec {
    let colors = inputs.colors;
    let original = inputs.original.samples();
    let modified = inputs.modified.samples();

    ChartSpec {
        kind: ChartKind::Comparison,
        background: colors.background,
        series: vec![
            Series::indexed(original, colors.negative)
                .with_width(2.0)
                .with_alpha(0.6)
                .with_label("Original Wave"),
            Series::indexed(modified, colors.positive)
                .with_width(2.0)
                .with_alpha(0.8)
                .with_label("Modified Wave"),
        ],
        x_range: AxisRange::samples(original.len()),
        y_range: AxisRange::amplitude(&[original, modified]),
        legend: true,
    }
}
