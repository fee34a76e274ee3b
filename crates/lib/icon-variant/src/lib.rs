//! Icon output variants: which pixel sizes to produce and what to name them.
//!
//! A [`Variant`] pairs a nominal size with a scale factor, so a
//! double-resolution asset is `128@2x` (256 pixels wide, saved as
//! `128x128@2x.png`) rather than a bare `256` that callers have to know about.

use core::num::NonZeroU32;

/// The largest edge length, in pixels, accepted from textual variants
/// (configuration files and environment variables).
pub const MAX_PIXEL_SIZE: u32 = 8192;

/// The legacy size that stands for the double-resolution variant.
pub const LEGACY_DOUBLE_RESOLUTION_SIZE: u32 = 256;

/// Nominal size of the variant [`LEGACY_DOUBLE_RESOLUTION_SIZE`] maps to.
pub const LEGACY_DOUBLE_RESOLUTION_NOMINAL: u32 = 128;

/// A single icon to produce.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    /// The size the icon is named after.
    nominal: NonZeroU32,

    /// Pixel density multiplier.
    scale: NonZeroU32,
}

/// Errors returned while constructing or parsing a variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    /// The input was empty.
    #[error("empty icon variant")]
    Empty,

    /// The size part is not a number.
    #[error("invalid icon size {value:?}: {source}")]
    Size {
        /// The offending text.
        value: String,

        /// Underlying parse error.
        #[source]
        source: core::num::ParseIntError,
    },

    /// The scale part is not of the `<n>x` form.
    #[error("invalid icon scale {0:?}, expected e.g. \"2x\"")]
    Scale(String),

    /// A size or scale of zero.
    #[error("icon size and scale must be positive")]
    Zero,

    /// The pixel size does not fit in a `u32`.
    #[error("icon {nominal}@{scale}x is too large to render")]
    Overflow {
        /// Requested nominal size.
        nominal: u32,

        /// Requested scale.
        scale: u32,
    },

    /// A textual variant's pixel size exceeds [`MAX_PIXEL_SIZE`].
    #[error("icon {nominal}@{scale}x exceeds the {max}px limit", max = MAX_PIXEL_SIZE)]
    TooLarge {
        /// Requested nominal size.
        nominal: u32,

        /// Requested scale.
        scale: u32,
    },
}

impl Variant {
    /// Create a variant, checking that its pixel size is representable.
    pub fn new(nominal: u32, scale: u32) -> Result<Self, VariantError> {
        let (Some(nominal_nz), Some(scale_nz)) = (NonZeroU32::new(nominal), NonZeroU32::new(scale))
        else {
            return Err(VariantError::Zero);
        };

        if nominal.checked_mul(scale).is_none() {
            return Err(VariantError::Overflow { nominal, scale });
        }

        Ok(Self {
            nominal: nominal_nz,
            scale: scale_nz,
        })
    }

    /// Create a scale-1 variant.
    pub fn standard(size: u32) -> Result<Self, VariantError> {
        Self::new(size, 1)
    }

    /// Interpret a size from a plain size list.
    ///
    /// [`LEGACY_DOUBLE_RESOLUTION_SIZE`] maps to the `@2x` variant of
    /// [`LEGACY_DOUBLE_RESOLUTION_NOMINAL`]; every other size maps to itself.
    pub fn from_legacy_size(size: u32) -> Result<Self, VariantError> {
        if size == LEGACY_DOUBLE_RESOLUTION_SIZE {
            return Ok(known(LEGACY_DOUBLE_RESOLUTION_NOMINAL, 2));
        }
        Self::standard(size)
    }

    /// Whether this is a plain `256` variant, which [`Variant::from_legacy_size`]
    /// would have turned into `128@2x`.
    pub fn is_bare_legacy_double_resolution(&self) -> bool {
        self.scale() == 1 && self.nominal() == LEGACY_DOUBLE_RESOLUTION_SIZE
    }

    /// The size the icon is named after.
    pub const fn nominal(&self) -> u32 {
        self.nominal.get()
    }

    /// Pixel density multiplier.
    pub const fn scale(&self) -> u32 {
        self.scale.get()
    }

    /// Edge length of the rendered image.
    pub const fn pixel_size(&self) -> u32 {
        // Checked at construction.
        self.nominal.get() * self.scale.get()
    }

    /// The output file name, e.g. `32x32.png` or `128x128@2x.png`.
    pub fn file_name(&self) -> String {
        let n = self.nominal();
        match self.scale() {
            1 => format!("{n}x{n}.png"),
            scale => format!("{n}x{n}@{scale}x.png"),
        }
    }
}

/// The default icon set: `32`, `128` and `128@2x`.
pub const DEFAULT_SET: [Variant; 3] = [known(32, 1), known(128, 1), known(128, 2)];

/// The default icon set as an owned list.
pub fn default_set() -> Vec<Variant> {
    DEFAULT_SET.to_vec()
}

/// Build a variant from compile-time constants.
const fn known(nominal: u32, scale: u32) -> Variant {
    match (NonZeroU32::new(nominal), NonZeroU32::new(scale)) {
        (Some(nominal), Some(scale)) => Variant { nominal, scale },
        _ => panic!("known variants are non-zero"),
    }
}

/// Map a plain size list to variants, see [`Variant::from_legacy_size`].
pub fn from_legacy_sizes(sizes: &[u32]) -> Result<Vec<Variant>, VariantError> {
    sizes.iter().copied().map(Variant::from_legacy_size).collect()
}

/// Parse a comma-separated variant list, e.g. `32,128,128@2x`.
pub fn parse_list(s: &str) -> Result<Vec<Variant>, VariantError> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::parse)
        .collect()
}

impl core::str::FromStr for Variant {
    type Err = VariantError;

    /// Parse `<size>` or `<size>@<scale>x`, up to [`MAX_PIXEL_SIZE`] pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VariantError::Empty);
        }

        let (size, scale) = match s.split_once('@') {
            Some((size, scale)) => (size, Some(scale)),
            None => (s, None),
        };

        let nominal = size.parse::<u32>().map_err(|source| VariantError::Size {
            value: size.to_owned(),
            source,
        })?;

        let scale = match scale {
            None => 1,
            Some(text) => text
                .strip_suffix(['x', 'X'])
                .and_then(|n| n.parse::<u32>().ok())
                .ok_or_else(|| VariantError::Scale(text.to_owned()))?,
        };

        let variant = Self::new(nominal, scale)?;
        if variant.pixel_size() > MAX_PIXEL_SIZE {
            return Err(VariantError::TooLarge { nominal, scale });
        }
        Ok(variant)
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.scale() {
            1 => write!(f, "{}", self.nominal()),
            scale => write!(f, "{}@{scale}x", self.nominal()),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = VariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Variant> for String {
    fn from(value: Variant) -> Self {
        value.to_string()
    }
}
