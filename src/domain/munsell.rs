//! Munsell hue/value/chroma reference swatches served by `/api/munsell-data`.

use crate::domain::model::{HueGroup, Swatch};

macro_rules! swatch {
    ($hex:literal, $value:literal, $chroma:literal) => {
        Swatch {
            hex: $hex,
            value: $value,
            chroma: $chroma,
        }
    };
}

const HUE_5R: [Swatch; 8] = [
    swatch!("#FFE6E6", 9, 2),
    swatch!("#FFCCCC", 8, 4),
    swatch!("#FFB3B3", 7, 6),
    swatch!("#FF9999", 6, 8),
    swatch!("#FF8080", 5, 10),
    swatch!("#FF6666", 4, 12),
    swatch!("#FF4D4D", 3, 14),
    swatch!("#FF3333", 2, 16),
];

const HUE_10R: [Swatch; 8] = [
    swatch!("#FFE6E0", 9, 2),
    swatch!("#FFCCC0", 8, 4),
    swatch!("#FFB3A0", 7, 6),
    swatch!("#FF9980", 6, 8),
    swatch!("#FF8060", 5, 10),
    swatch!("#FF6640", 4, 12),
    swatch!("#FF4D20", 3, 14),
    swatch!("#FF3300", 2, 16),
];

const HUE_5YR: [Swatch; 8] = [
    swatch!("#FFE6D9", 9, 2),
    swatch!("#FFCCB3", 8, 4),
    swatch!("#FFB38D", 7, 6),
    swatch!("#FF9966", 6, 8),
    swatch!("#FF8040", 5, 10),
    swatch!("#FF661A", 4, 12),
    swatch!("#E54D00", 3, 14),
    swatch!("#CC4400", 2, 16),
];

const HUE_10YR: [Swatch; 8] = [
    swatch!("#FFF2E6", 9, 2),
    swatch!("#FFE6CC", 8, 4),
    swatch!("#FFD9B3", 7, 6),
    swatch!("#FFCC99", 6, 8),
    swatch!("#FFBF80", 5, 10),
    swatch!("#FFB366", 4, 12),
    swatch!("#FFA64D", 3, 14),
    swatch!("#FF9933", 2, 16),
];

const HUE_5Y: [Swatch; 8] = [
    swatch!("#FFFFF2", 9, 2),
    swatch!("#FFFFE6", 8, 4),
    swatch!("#FFFFD9", 7, 6),
    swatch!("#FFFFCC", 6, 8),
    swatch!("#FFFFBF", 5, 10),
    swatch!("#FFFFB3", 4, 12),
    swatch!("#FFFF80", 3, 14),
    swatch!("#FFFF4D", 2, 16),
];

const HUE_10Y: [Swatch; 8] = [
    swatch!("#F2FFE6", 9, 2),
    swatch!("#E6FFCC", 8, 4),
    swatch!("#D9FFB3", 7, 6),
    swatch!("#CCFF99", 6, 8),
    swatch!("#BFFF80", 5, 10),
    swatch!("#B3FF66", 4, 12),
    swatch!("#A6FF4D", 3, 14),
    swatch!("#99FF33", 2, 16),
];

const HUE_5GY: [Swatch; 8] = [
    swatch!("#E6FFE6", 9, 2),
    swatch!("#CCFFCC", 8, 4),
    swatch!("#B3FFB3", 7, 6),
    swatch!("#99FF99", 6, 8),
    swatch!("#80FF80", 5, 10),
    swatch!("#66FF66", 4, 12),
    swatch!("#4DFF4D", 3, 14),
    swatch!("#33FF33", 2, 16),
];

const HUE_10GY: [Swatch; 8] = [
    swatch!("#E6FFEC", 9, 2),
    swatch!("#CCFFD9", 8, 4),
    swatch!("#B3FFC6", 7, 6),
    swatch!("#99FFB3", 6, 8),
    swatch!("#80FFA0", 5, 10),
    swatch!("#66FF8D", 4, 12),
    swatch!("#4DFF7A", 3, 14),
    swatch!("#33FF66", 2, 16),
];

const HUE_5G: [Swatch; 8] = [
    swatch!("#E6FFF2", 9, 2),
    swatch!("#CCFFE6", 8, 4),
    swatch!("#B3FFD9", 7, 6),
    swatch!("#99FFCC", 6, 8),
    swatch!("#80FFBF", 5, 10),
    swatch!("#66FFB3", 4, 12),
    swatch!("#4DFFA6", 3, 14),
    swatch!("#33FF99", 2, 16),
];

const HUE_5B: [Swatch; 8] = [
    swatch!("#E6E6FF", 9, 2),
    swatch!("#CCCCFF", 8, 4),
    swatch!("#B3B3FF", 7, 6),
    swatch!("#9999FF", 6, 8),
    swatch!("#8080FF", 5, 10),
    swatch!("#6666FF", 4, 12),
    swatch!("#4D4DFF", 3, 14),
    swatch!("#3333FF", 2, 16),
];

const HUE_10B: [Swatch; 8] = [
    swatch!("#EDE6FF", 9, 2),
    swatch!("#DBCCFF", 8, 4),
    swatch!("#C9B3FF", 7, 6),
    swatch!("#B799FF", 6, 8),
    swatch!("#A580FF", 5, 10),
    swatch!("#9366FF", 4, 12),
    swatch!("#814DFF", 3, 14),
    swatch!("#6F33FF", 2, 16),
];

const HUE_5P: [Swatch; 8] = [
    swatch!("#F2E6FF", 9, 2),
    swatch!("#E6CCFF", 8, 4),
    swatch!("#D9B3FF", 7, 6),
    swatch!("#CC99FF", 6, 8),
    swatch!("#BF80FF", 5, 10),
    swatch!("#B366FF", 4, 12),
    swatch!("#A64DFF", 3, 14),
    swatch!("#9933FF", 2, 16),
];

const HUE_10P: [Swatch; 8] = [
    swatch!("#FFE6F2", 9, 2),
    swatch!("#FFCCE6", 8, 4),
    swatch!("#FFB3D9", 7, 6),
    swatch!("#FF99CC", 6, 8),
    swatch!("#FF80BF", 5, 10),
    swatch!("#FF66B3", 4, 12),
    swatch!("#FF4DA6", 3, 14),
    swatch!("#FF3399", 2, 16),
];

pub static MUNSELL_DATA: &[HueGroup] = &[
    HueGroup {
        hue: "5R",
        name: "Red",
        colors: &HUE_5R,
    },
    HueGroup {
        hue: "10R",
        name: "Red-Orange",
        colors: &HUE_10R,
    },
    HueGroup {
        hue: "5YR",
        name: "Orange",
        colors: &HUE_5YR,
    },
    HueGroup {
        hue: "10YR",
        name: "Yellow-Orange",
        colors: &HUE_10YR,
    },
    HueGroup {
        hue: "5Y",
        name: "Yellow",
        colors: &HUE_5Y,
    },
    HueGroup {
        hue: "10Y",
        name: "Green-Yellow",
        colors: &HUE_10Y,
    },
    HueGroup {
        hue: "5GY",
        name: "Yellow-Green",
        colors: &HUE_5GY,
    },
    HueGroup {
        hue: "10GY",
        name: "Green",
        colors: &HUE_10GY,
    },
    HueGroup {
        hue: "5G",
        name: "Blue-Green",
        colors: &HUE_5G,
    },
    HueGroup {
        hue: "5B",
        name: "Blue",
        colors: &HUE_5B,
    },
    HueGroup {
        hue: "10B",
        name: "Purple-Blue",
        colors: &HUE_10B,
    },
    HueGroup {
        hue: "5P",
        name: "Purple",
        colors: &HUE_5P,
    },
    HueGroup {
        hue: "10P",
        name: "Red-Purple",
        colors: &HUE_10P,
    },
];
