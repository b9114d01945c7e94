//! Swatch sheet layout.
//!
//! Weighted manipulations are swept over evenly spaced weights on one base
//! color. Parameterless manipulations are shown across the swatch list.

use tinct_core::{Adjustment, Color};

use crate::config::PlateConfig;

/// One rendered color and its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// CSS color value (`PaleVioletRed`, `#DB7094` or `rgba(...)`).
    pub css: String,
    pub label: String,
}

/// A titled row of swatches.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub swatches: Vec<Swatch>,
}

/// Evenly spaced weights from 0.0 to 1.0 inclusive.
pub fn weights(steps: u32) -> Vec<f64> {
    if steps == 0 {
        return vec![0.0];
    }
    (0..=steps)
        .map(|i| f64::from(i) / f64::from(steps))
        .collect()
}

/// Hue offsets from 0 through 360 inclusive.
pub fn hue_offsets(step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 {
        return vec![0.0];
    }
    (0_u32..)
        .map(|i| f64::from(i) * step)
        .take_while(|degrees| *degrees <= 360.0)
        .collect()
}

/// Every section of the plate, in display order.
pub fn build_sections(config: &PlateConfig) -> Vec<Section> {
    let weights = weights(config.steps);
    let base = config.base;
    let mix_target = config.mix_target;

    let mut sections = vec![
        sweep(base, &weights, |amount| Adjustment::Lighten { amount }),
        sweep(base, &weights, |amount| Adjustment::Brighten { amount }),
        sweep(base, &weights, |amount| Adjustment::Tint { amount }),
        sweep(base, &weights, |amount| Adjustment::Darken { amount }),
        sweep(base, &weights, |amount| Adjustment::Shade { amount }),
        sweep(config.saturate_base, &weights, |amount| {
            Adjustment::Saturate { amount }
        }),
        sweep(base, &weights, |amount| Adjustment::Desaturate { amount }),
        sweep(base, &hue_offsets(config.hue_step), |degrees| {
            Adjustment::AdjustHue { degrees }
        }),
        sweep(base, &weights, |weight| Adjustment::Mix {
            with: mix_target,
            weight,
        }),
    ];
    for adjustment in [
        Adjustment::Invert,
        Adjustment::Complement,
        Adjustment::Grayscale,
        Adjustment::Foreground,
    ] {
        sections.push(across(&config.swatches, adjustment));
    }

    tracing::debug!(sections = sections.len(), "built plate layout");
    sections
}

fn sweep(base: Color, params: &[f64], make: impl Fn(f64) -> Adjustment) -> Section {
    let swatches = params
        .iter()
        .map(|&param| {
            let adjustment = make(param);
            Swatch {
                css: base.apply(&adjustment).to_html(),
                label: caption(&adjustment),
            }
        })
        .collect();
    Section {
        title: make(0.0).label(),
        swatches,
    }
}

/// `Lighten(0.2)` for parameterized steps, the bare label otherwise.
fn caption(adjustment: &Adjustment) -> String {
    match adjustment.parameter() {
        Some(param) => format!("{}({param:.1})", adjustment.label()),
        None => adjustment.label().to_owned(),
    }
}

fn across(colors: &[Color], adjustment: Adjustment) -> Section {
    let swatches = colors
        .iter()
        .map(|color| Swatch {
            css: color.apply(&adjustment).to_html(),
            label: format!("{}({})", adjustment.label(), color.to_html()),
        })
        .collect();
    Section {
        title: adjustment.label(),
        swatches,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(weights(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(weights(2), vec![0.0, 0.5, 1.0]);
        assert_eq!(weights(0), vec![0.0]);
    }

    #[test]
    fn test_hue_offsets() {
        assert_eq!(hue_offsets(72.0), vec![0.0, 72.0, 144.0, 216.0, 288.0, 360.0]);
        assert_eq!(hue_offsets(0.0), vec![0.0]);
        assert_eq!(hue_offsets(f64::NAN), vec![0.0]);
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption(&Adjustment::Tint { amount: 0.2 }), "Tint(0.2)");
        assert_eq!(caption(&Adjustment::AdjustHue { degrees: 144.0 }), "AdjustHue(144.0)");
        assert_eq!(
            caption(&Adjustment::Mix {
                with: Color::WHITE,
                weight: 0.6,
            }),
            "Mix(0.6)"
        );
        assert_eq!(caption(&Adjustment::Invert), "Invert");
    }

    #[test]
    fn test_default_layout() {
        let sections = build_sections(&PlateConfig::default());
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Lighten",
                "Brighten",
                "Tint",
                "Darken",
                "Shade",
                "Saturate",
                "Desaturate",
                "AdjustHue",
                "Mix",
                "Invert",
                "Complement",
                "Grayscale",
                "Foreground",
            ]
        );
        for section in &sections {
            assert_eq!(section.swatches.len(), 6, "{}", section.title);
        }
    }

    #[test]
    fn test_sweep_labels_and_endpoints() {
        let sections = build_sections(&PlateConfig::default());
        let lighten = &sections[0];
        assert_eq!(lighten.swatches[0].label, "Lighten(0.0)");
        assert_eq!(lighten.swatches[1].label, "Lighten(0.2)");
        assert_eq!(lighten.swatches[0].css, "#00ACEA");
        assert_eq!(lighten.swatches[5].css, "White");

        let mix = &sections[8];
        assert_eq!(mix.swatches[0].css, "#00ADEA");
        assert_eq!(mix.swatches[5].css, "Red");

        let hue = &sections[7];
        assert_eq!(hue.swatches[1].label, "AdjustHue(72.0)");
        assert_eq!(hue.swatches[5].css, hue.swatches[0].css);
    }

    #[test]
    fn test_across_swatches() {
        let sections = build_sections(&PlateConfig::default());
        let invert = &sections[9];
        assert_eq!(invert.swatches[0].label, "Invert(Red)");
        assert_eq!(invert.swatches[0].css, "Aqua");
        assert_eq!(invert.swatches[5].css, "Black");

        let foreground = &sections[12];
        assert_eq!(foreground.swatches[2].label, "Foreground(Yellow)");
        assert_eq!(foreground.swatches[2].css, "Black");
        assert_eq!(foreground.swatches[4].css, "White");
    }
}
