//! Read-only catalog of named easing curves.

use crate::animation::bezier::CubicBezier;

/// Material "standard" curve shared by both strokes of the circular spinner.
pub const MATERIAL_STANDARD: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);
/// CSS `ease-in-out`, used by determinate progress transitions.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
/// Head of the first line of the linear indeterminate bar.
pub const LINE1_HEAD: CubicBezier = CubicBezier::new(0.2, 0.0, 0.8, 1.0);
/// Tail of the first line of the linear indeterminate bar.
pub const LINE1_TAIL: CubicBezier = CubicBezier::new(0.4, 0.0, 1.0, 1.0);
/// Head of the second line of the linear indeterminate bar.
pub const LINE2_HEAD: CubicBezier = CubicBezier::new(0.0, 0.0, 0.65, 1.0);
/// Tail of the second line of the linear indeterminate bar.
pub const LINE2_TAIL: CubicBezier = CubicBezier::new(0.10, 0.0, 0.45, 1.0);

/// One named entry of the curve catalog.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CurvePreset {
    /// Lookup name (kebab-case).
    pub name: &'static str,
    /// Curve control points.
    pub curve: CubicBezier,
    /// Short human description.
    pub description: &'static str,
}

static CATALOG: [CurvePreset; 10] = [
    CurvePreset {
        name: "linear",
        curve: CubicBezier::new(0.0, 0.0, 1.0, 1.0),
        description: "identity timing",
    },
    CurvePreset {
        name: "ease",
        curve: CubicBezier::new(0.25, 0.1, 0.25, 1.0),
        description: "CSS ease",
    },
    CurvePreset {
        name: "ease-in",
        curve: CubicBezier::new(0.42, 0.0, 1.0, 1.0),
        description: "CSS ease-in",
    },
    CurvePreset {
        name: "ease-out",
        curve: CubicBezier::new(0.0, 0.0, 0.58, 1.0),
        description: "CSS ease-out",
    },
    CurvePreset {
        name: "ease-in-out",
        curve: EASE_IN_OUT,
        description: "CSS ease-in-out, determinate progress transitions",
    },
    CurvePreset {
        name: "material-standard",
        curve: MATERIAL_STANDARD,
        description: "circular spinner head and tail",
    },
    CurvePreset {
        name: "line1-head",
        curve: LINE1_HEAD,
        description: "linear bar, first line head",
    },
    CurvePreset {
        name: "line1-tail",
        curve: LINE1_TAIL,
        description: "linear bar, first line tail",
    },
    CurvePreset {
        name: "line2-head",
        curve: LINE2_HEAD,
        description: "linear bar, second line head",
    },
    CurvePreset {
        name: "line2-tail",
        curve: LINE2_TAIL,
        description: "linear bar, second line tail",
    },
];

/// All catalog entries in a stable order.
pub fn presets() -> &'static [CurvePreset] {
    &CATALOG
}

/// Look up a curve by name. Matching ignores ASCII case and treats `_` like `-`.
pub fn preset(name: &str) -> Option<CubicBezier> {
    CATALOG
        .iter()
        .find(|p| {
            p.name.len() == name.len()
                && p.name
                    .bytes()
                    .zip(name.bytes())
                    .all(|(a, b)| a == normalize_byte(b))
        })
        .map(|p| p.curve)
}

fn normalize_byte(b: u8) -> u8 {
    match b {
        b'_' => b'-',
        _ => b.to_ascii_lowercase(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
