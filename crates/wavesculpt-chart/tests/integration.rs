//! Integration tests for wavesculpt-chart assembly and rendering.

use proptest::prelude::*;
use wavesculpt_chart::{ChartInputs, ChartKind, ChartRenderer, PlotRenderer};
use wavesculpt_config::ColorScheme;
use wavesculpt_core::{EnvelopePair, SampleSequence};

fn sine(len: usize, cycles: f32) -> SampleSequence {
    let samples = (0..len)
        .map(|i| (std::f32::consts::TAU * cycles * i as f32 / len as f32).sin())
        .collect();
    SampleSequence::normalized(samples, 8000).unwrap()
}

#[test]
fn natural_chart_boundaries_sit_on_zero() {
    let original = sine(200, 3.0);
    let envelope = EnvelopePair::new(vec![0.7f32; 200], vec![-0.3f32; 200]);
    let modified = envelope.apply(&original);
    let colors = ColorScheme::default();
    let inputs = ChartInputs {
        original: &original,
        modified: &modified,
        envelope: &envelope,
        colors: &colors,
    };

    let natural = inputs.chart(ChartKind::Natural);
    assert!(natural.series.len() > 1);
    for pair in natural.series.windows(2) {
        let end = *pair[0].points.last().unwrap();
        let start = pair[1].points[0];
        assert_eq!(end, start);
        assert_eq!(end.1, 0.0);
        assert_ne!(pair[0].color, pair[1].color);
    }
}

#[test]
fn every_chart_renders() {
    let original = sine(500, 5.0);
    let envelope = EnvelopePair::zeros(500);
    let colors = ColorScheme::default();
    let inputs = ChartInputs {
        original: &original,
        modified: &original,
        envelope: &envelope,
        colors: &colors,
    };

    let renderer = PlotRenderer::new(400, 100);
    for spec in inputs.all() {
        let out = renderer.render(&spec).unwrap();
        let img = image::load_from_memory(&out.png).unwrap();
        assert_eq!((img.width(), img.height()), (400, 100));
        let svg = String::from_utf8(out.svg).unwrap();
        assert!(svg.contains(&format!("<g id=\"{}\">", spec.kind.name())));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn y_range_covers_drawn_data(
        audio in prop::collection::vec(-1.0f32..=1.0, 1..128),
        positive in prop::collection::vec(-2.0f32..=2.0, 0..128),
    ) {
        let original = SampleSequence::new(audio.clone(), 1000).unwrap();
        let envelope = EnvelopePair::new(positive, Vec::<f32>::new()).fit(audio.len());
        let modified = envelope.apply(&original);
        let colors = ColorScheme::default();
        let inputs = ChartInputs {
            original: &original,
            modified: &modified,
            envelope: &envelope,
            colors: &colors,
        };
        for spec in inputs.all() {
            prop_assert_eq!(spec.x_range.min, 0.0);
            prop_assert_eq!(spec.x_range.max, audio.len() as f32);
            prop_assert_eq!(spec.y_range.min, -spec.y_range.max);
            for series in &spec.series {
                for &(_, y) in &series.points {
                    prop_assert!(y.abs() <= spec.y_range.max);
                }
            }
        }
    }
}
