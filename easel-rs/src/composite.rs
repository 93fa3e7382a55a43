//! Composite operations and their descriptive aliases.

use std::fmt;

/// The canonical composite (blend) modes of a Canvas 2D context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompositeOperation {
    #[default]
    SourceOver,
    SourceIn,
    SourceOut,
    SourceAtop,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    DestinationAtop,
    Lighter,
    Copy,
    Xor,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

use CompositeOperation::*;

/// Alias table. Every canonical mode has its upper-snake name here, and some
/// also carry a more descriptive synonym.
const ALIASES: [(&str, CompositeOperation); 40] = [
    ("SOURCE_OVER", SourceOver),
    ("OVERWRITE", SourceOver),
    ("SOURCE_IN", SourceIn),
    ("INTERSECT_REPLACE", SourceIn),
    ("SOURCE_OUT", SourceOut),
    ("AVOID_REPLACE", SourceOut),
    ("SOURCE_ATOP", SourceAtop),
    ("INTERSECT_ALPHA", SourceAtop),
    ("DESTINATION_OVER", DestinationOver),
    ("BEHIND", DestinationOver),
    ("DESTINATION_IN", DestinationIn),
    ("MASK", DestinationIn),
    ("DESTINATION_OUT", DestinationOut),
    ("REMOVE", DestinationOut),
    ("DESTINATION_ATOP", DestinationAtop),
    ("MASK_BEHIND", DestinationAtop),
    ("LIGHTER", Lighter),
    ("ADD", Lighter),
    ("COPY", Copy),
    ("REPLACE", Copy),
    ("XOR", Xor),
    ("MULTIPLY", Multiply),
    ("SCREEN", Screen),
    ("DIVIDE", Screen),
    ("OVERLAY", Overlay),
    ("EXAGGERATE", Overlay),
    ("DARKEN", Darken),
    ("MIN", Darken),
    ("LIGHTEN", Lighten),
    ("MAX", Lighten),
    ("COLOR_DODGE", ColorDodge),
    ("COLOR_BURN", ColorBurn),
    ("HARD_LIGHT", HardLight),
    ("SOFT_LIGHT", SoftLight),
    ("DIFFERENCE", Difference),
    ("EXCLUSION", Exclusion),
    ("HUE", Hue),
    ("SATURATION", Saturation),
    ("COLOR", Color),
    ("LUMINOSITY", Luminosity),
];

impl CompositeOperation {
    pub const ALL: [CompositeOperation; 26] = [
        SourceOver,
        SourceIn,
        SourceOut,
        SourceAtop,
        DestinationOver,
        DestinationIn,
        DestinationOut,
        DestinationAtop,
        Lighter,
        Copy,
        Xor,
        Multiply,
        Screen,
        Overlay,
        Darken,
        Lighten,
        ColorDodge,
        ColorBurn,
        HardLight,
        SoftLight,
        Difference,
        Exclusion,
        Hue,
        Saturation,
        Color,
        Luminosity,
    ];

    /// Resolve an alias (`"MASK"`) or canonical name (`"destination-in"`).
    ///
    /// Aliases are checked first. Matching is exact.
    pub fn resolve(name: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, op)| *op)
            .or_else(|| Self::from_canonical(name))
    }

    /// Look up a canonical kebab-case name only.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceOver => "source-over",
            SourceIn => "source-in",
            SourceOut => "source-out",
            SourceAtop => "source-atop",
            DestinationOver => "destination-over",
            DestinationIn => "destination-in",
            DestinationOut => "destination-out",
            DestinationAtop => "destination-atop",
            Lighter => "lighter",
            Copy => "copy",
            Xor => "xor",
            Multiply => "multiply",
            Screen => "screen",
            Overlay => "overlay",
            Darken => "darken",
            Lighten => "lighten",
            ColorDodge => "color-dodge",
            ColorBurn => "color-burn",
            HardLight => "hard-light",
            SoftLight => "soft-light",
            Difference => "difference",
            Exclusion => "exclusion",
            Hue => "hue",
            Saturation => "saturation",
            Color => "color",
            Luminosity => "luminosity",
        }
    }
}

impl fmt::Display for CompositeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
