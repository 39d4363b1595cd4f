//! Project records and artifact naming.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use wavesculpt_chart::ChartKind;
use wavesculpt_config::{ColorScheme, EnvelopeData, SourceKind, WaveParameters};

use crate::state::ProcessingState;

/// Store-assigned project identifier.
pub type ProjectId = u64;

/// One output blob of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Edited audio, 16-bit PCM WAV.
    ModifiedAudio,
    /// `final` chart raster.
    FinalPng,
    /// `final` chart vector.
    FinalSvg,
    /// `natural` chart raster.
    NaturalPng,
    /// `natural` chart vector.
    NaturalSvg,
    /// `comparison` chart raster.
    ComparisonPng,
    /// `comparison` chart vector.
    ComparisonSvg,
}

impl ArtifactKind {
    /// All artifacts, in the order a run writes them.
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::ModifiedAudio,
        ArtifactKind::FinalPng,
        ArtifactKind::FinalSvg,
        ArtifactKind::NaturalPng,
        ArtifactKind::NaturalSvg,
        ArtifactKind::ComparisonPng,
        ArtifactKind::ComparisonSvg,
    ];

    /// Raster and vector artifacts of a chart.
    pub fn for_chart(chart: ChartKind) -> (ArtifactKind, ArtifactKind) {
        match chart {
            ChartKind::Final => (ArtifactKind::FinalPng, ArtifactKind::FinalSvg),
            ChartKind::Natural => (ArtifactKind::NaturalPng, ArtifactKind::NaturalSvg),
            ChartKind::Comparison => (ArtifactKind::ComparisonPng, ArtifactKind::ComparisonSvg),
        }
    }

    /// File name prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            ArtifactKind::ModifiedAudio => "modified",
            ArtifactKind::FinalPng | ArtifactKind::FinalSvg => "final",
            ArtifactKind::NaturalPng | ArtifactKind::NaturalSvg => "natural",
            ArtifactKind::ComparisonPng | ArtifactKind::ComparisonSvg => "comparison",
        }
    }

    /// File extension.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::ModifiedAudio => "wav",
            ArtifactKind::FinalPng | ArtifactKind::NaturalPng | ArtifactKind::ComparisonPng => {
                "png"
            }
            ArtifactKind::FinalSvg | ArtifactKind::NaturalSvg | ArtifactKind::ComparisonSvg => {
                "svg"
            }
        }
    }

    /// `<prefix>_<name>_<id>.<ext>`, with path separators in `name` replaced.
    ///
    /// ```rust
    /// use wavesculpt_engine::ArtifactKind;
    ///
    /// assert_eq!(ArtifactKind::FinalSvg.file_name("demo", 7), "final_demo_7.svg");
    /// assert_eq!(ArtifactKind::ModifiedAudio.file_name("a/b", 1), "modified_a_b_1.wav");
    /// ```
    pub fn file_name(self, project_name: &str, id: ProjectId) -> String {
        format!(
            "{}_{}_{}.{}",
            self.prefix(),
            sanitize(project_name),
            id,
            self.extension()
        )
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.prefix(), self.extension())
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// A project as the engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Audio source.
    #[serde(default)]
    pub source: SourceKind,
    /// Synthesis parameters, used when `source` is synthesized.
    #[serde(default)]
    pub wave_parameters: WaveParameters,
    /// Curves applied by the last successful run.
    #[serde(default)]
    pub envelope_data: EnvelopeData,
    /// Chart colors.
    #[serde(default)]
    pub colors: ColorScheme,
    /// Processing state.
    #[serde(default)]
    pub state: ProcessingState,
    /// Artifact file names written so far.
    #[serde(default)]
    pub artifacts: BTreeMap<ArtifactKind, String>,
}

impl ProjectRecord {
    /// A new idle project with default parameters and colors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            source: SourceKind::default(),
            wave_parameters: WaveParameters::default(),
            envelope_data: EnvelopeData::default(),
            colors: ColorScheme::default(),
            state: ProcessingState::Idle,
            artifacts: BTreeMap::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the audio source.
    pub fn with_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    /// Set the synthesis parameters.
    pub fn with_wave_parameters(mut self, params: WaveParameters) -> Self {
        self.wave_parameters = params;
        self
    }

    /// Set the colors.
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// `<name>_<id>`, the per-project folder name.
    pub fn folder_name(&self) -> String {
        format!("{}_{}", sanitize(&self.name), self.id)
    }

    /// File name for `kind` under this project's naming scheme.
    pub fn artifact_file_name(&self, kind: ArtifactKind) -> String {
        kind.file_name(&self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_artifacts() {
        assert_eq!(
            ArtifactKind::for_chart(ChartKind::Comparison),
            (ArtifactKind::ComparisonPng, ArtifactKind::ComparisonSvg)
        );
        assert_eq!(ArtifactKind::NaturalPng.to_string(), "natural.png");
    }

    #[test]
    fn record_json_roundtrip() {
        let mut record = ProjectRecord::new("tone")
            .with_source(SourceKind::Square)
            .with_description("test");
        record.id = 3;
        record
            .artifacts
            .insert(ArtifactKind::ModifiedAudio, record.artifact_file_name(ArtifactKind::ModifiedAudio));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""modified_audio":"modified_tone_3.wav""#), "{json}");
        assert_eq!(serde_json::from_str::<ProjectRecord>(&json).unwrap(), record);
    }

    #[test]
    fn minimal_record_json() {
        let record: ProjectRecord = serde_json::from_str(r#"{"id": 1, "name": "x"}"#).unwrap();
        assert_eq!(record.state, ProcessingState::Idle);
        assert_eq!(record.wave_parameters, WaveParameters::default());
        assert_eq!(record.folder_name(), "x_1");
    }
}
