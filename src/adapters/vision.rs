//! Color-vision-deficiency simulation.
//!
//! Dichromacies (`*-opia`) project the color onto the confusion line of the
//! missing cone type in CIE u'v'-like chromaticity space, then pull the result
//! back into the RGB gamut along the neutral axis. Anomalous trichromacies
//! (`*-anomaly`) blend the dichromat result with the original color.
//! Achromatopsia takes the relative-luminance row of sRGB→XYZ over the
//! encoded channels, without linearizing first.

use crate::domain::model::{Rgb8, SimulationType};
use palette::Srgb;

const GAMMA: f64 = 2.2;
const WHITE_X: f64 = 0.312713;
const WHITE_Y: f64 = 0.329016;
const WHITE_Z: f64 = 0.358271;

/// Weight of the dichromat result when blending an anomaly.
const ANOMALY_WEIGHT: f64 = 1.75;

#[derive(Debug, Clone, Copy)]
struct ConfusionLine {
    /// Copunctal point.
    cpu: f64,
    cpv: f64,
    /// Slope and intercept of the axis the projection lands on.
    am: f64,
    ayi: f64,
}

const PROTAN: ConfusionLine = ConfusionLine {
    cpu: 0.735,
    cpv: 0.265,
    am: 1.273463,
    ayi: -0.073894,
};

const DEUTAN: ConfusionLine = ConfusionLine {
    cpu: 1.14,
    cpv: -0.14,
    am: 0.968437,
    ayi: 0.003331,
};

const TRITAN: ConfusionLine = ConfusionLine {
    cpu: 0.171,
    cpv: -0.003,
    am: 0.062921,
    ayi: 0.292119,
};

#[derive(Debug, Clone, Copy, Default)]
struct Triple {
    a: f64,
    b: f64,
    c: f64,
}

pub fn simulate(color: Rgb8, kind: SimulationType) -> Rgb8 {
    let rgb = Triple {
        a: f64::from(color.red),
        b: f64::from(color.green),
        c: f64::from(color.blue),
    };

    let simulated = match kind {
        SimulationType::Protanopia => blind(rgb, PROTAN),
        SimulationType::Protanomaly => anomalize(blind(rgb, PROTAN), rgb),
        SimulationType::Deuteranopia => blind(rgb, DEUTAN),
        SimulationType::Deuteranomaly => anomalize(blind(rgb, DEUTAN), rgb),
        SimulationType::Tritanopia => blind(rgb, TRITAN),
        SimulationType::Tritanomaly => anomalize(blind(rgb, TRITAN), rgb),
        SimulationType::Achromatopsia => achroma(rgb),
        SimulationType::Achromatomaly => anomalize(achroma(rgb), rgb),
    };

    Srgb::new(
        to_channel(simulated.a),
        to_channel(simulated.b),
        to_channel(simulated.c),
    )
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn rgb_to_xyz(rgb: Triple) -> Triple {
    Triple {
        a: 0.41242371206635076 * rgb.a + 0.3575793401363035 * rgb.b + 0.1804662232369621 * rgb.c,
        b: 0.21265606784927693 * rgb.a + 0.715157818248362 * rgb.b + 0.0721864539171564 * rgb.c,
        c: 0.019331987577444885 * rgb.a + 0.11919267420354762 * rgb.b + 0.9504491124870351 * rgb.c,
    }
}

fn xyz_to_rgb(xyz: Triple) -> Triple {
    Triple {
        a: 3.240712470389558 * xyz.a - 1.5372626602963142 * xyz.b - 0.49857440415943116 * xyz.c,
        b: -0.9692566017088232 * xyz.a + 1.875990370203691 * xyz.b + 0.04155593758120453 * xyz.c,
        c: 0.05568142997012208 * xyz.a - 0.20404838965449928 * xyz.b + 1.0571072120373945 * xyz.c,
    }
}

/// Input and output channels are `0.0..=255.0`.
fn blind(rgb: Triple, line: ConfusionLine) -> Triple {
    let linear = Triple {
        a: (rgb.a / 255.0).powf(GAMMA),
        b: (rgb.b / 255.0).powf(GAMMA),
        c: (rgb.c / 255.0).powf(GAMMA),
    };
    let xyz = rgb_to_xyz(linear);
    let sum = xyz.a + xyz.b + xyz.c;
    let (u, v) = if sum != 0.0 {
        (xyz.a / sum, xyz.b / sum)
    } else {
        (0.0, 0.0)
    };

    let neutral_x = WHITE_X * xyz.b / WHITE_Y;
    let neutral_z = WHITE_Z * xyz.b / WHITE_Y;

    let slope = if u < line.cpu {
        (line.cpv - v) / (line.cpu - u)
    } else {
        (v - line.cpv) / (u - line.cpu)
    };
    let intercept = v - u * slope;
    let du = (line.ayi - intercept) / (slope - line.am);
    let dv = slope * du + intercept;

    let projected = Triple {
        a: du * xyz.b / dv,
        b: xyz.b,
        c: (1.0 - (du + dv)) * xyz.b / dv,
    };
    let mut simulated = xyz_to_rgb(projected);

    let shift = xyz_to_rgb(Triple {
        a: neutral_x - projected.a,
        b: 0.0,
        c: neutral_z - projected.c,
    });

    let adjust = |s: f64, d: f64| {
        if d == 0.0 {
            return 0.0;
        }
        let target = if s < 0.0 { 0.0 } else { 1.0 };
        let value = (target - s) / d;
        if (0.0..=1.0).contains(&value) {
            value
        } else {
            0.0
        }
    };
    let amount = adjust(simulated.a, shift.a)
        .max(adjust(simulated.b, shift.b))
        .max(adjust(simulated.c, shift.c));

    simulated.a += amount * shift.a;
    simulated.b += amount * shift.b;
    simulated.c += amount * shift.c;

    let encode = |value: f64| {
        if value <= 0.0 {
            0.0
        } else if value >= 1.0 {
            255.0
        } else {
            255.0 * value.powf(1.0 / GAMMA)
        }
    };

    Triple {
        a: encode(simulated.a),
        b: encode(simulated.b),
        c: encode(simulated.c),
    }
}

fn anomalize(simulated: Triple, original: Triple) -> Triple {
    let divisor = ANOMALY_WEIGHT + 1.0;
    Triple {
        a: (ANOMALY_WEIGHT * simulated.a + original.a) / divisor,
        b: (ANOMALY_WEIGHT * simulated.b + original.b) / divisor,
        c: (ANOMALY_WEIGHT * simulated.c + original.c) / divisor,
    }
}

/// Gray stays unrounded until the final channel conversion.
fn achroma(rgb: Triple) -> Triple {
    let gray = rgb_to_xyz(rgb).b;
    Triple {
        a: gray,
        b: gray,
        c: gray,
    }
}
