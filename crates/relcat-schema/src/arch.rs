//! Bit-width inference from archnames and the bit filter used by queries.

/// Substring of an archname that marks a 64-bit build (`w64`, `x86_64`).
pub const WIDE_MARKER: &str = "64";

/// Suffix of an archname that marks a build using 64-bit integers (`w64-64`).
pub const INT64_SUFFIX: &str = "-64";

/// Pointer width of a published build.
///
/// Inferred from the archname: anything carrying [`WIDE_MARKER`] is 64-bit,
/// everything else is 32-bit.
///
/// # Example
///
/// ```
/// use relcat_schema::BitWidth;
///
/// assert_eq!(BitWidth::from_archname("w64"), BitWidth::Bits64);
/// assert_eq!(BitWidth::from_archname("w32"), BitWidth::Bits32);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "u32", try_from = "u32")]
pub enum BitWidth {
    /// 32-bit build
    Bits32,
    /// 64-bit build
    Bits64,
}

impl BitWidth {
    /// The fixed bit-width domain, ascending.
    pub const ALL: [Self; 2] = [Self::Bits32, Self::Bits64];

    /// Infer the bit width from an archname.
    pub fn from_archname(archname: &str) -> Self {
        if archname.contains(WIDE_MARKER) {
            Self::Bits64
        } else {
            Self::Bits32
        }
    }

    /// Map a raw number onto the domain; anything but 32 or 64 is `None`.
    pub fn from_u32(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }

    /// Numeric value (32 or 64).
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }
}

impl From<BitWidth> for u32 {
    fn from(bits: BitWidth) -> Self {
        bits.as_u32()
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_u32(bits).ok_or_else(|| format!("Unsupported bit width: {bits}"))
    }
}

impl std::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Whether an archname marks a 64-bit-integer build.
pub fn is_int64_build(archname: &str) -> bool {
    archname.ends_with(INT64_SUFFIX)
}

/// Bit-width restriction applied by every catalog query.
///
/// Out-of-domain values are not an error: they collapse to [`BitFilter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitFilter {
    /// No restriction
    #[default]
    All,
    /// Only builds of the given width
    Only(BitWidth),
}

impl BitFilter {
    /// Build a filter from a raw number. 32 and 64 restrict, anything else is `All`.
    pub fn from_u32(bits: u32) -> Self {
        BitWidth::from_u32(bits).map_or(Self::All, Self::Only)
    }

    /// Whether a build of width `bits` passes the filter.
    pub fn matches(self, bits: BitWidth) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == bits,
        }
    }
}

impl From<u32> for BitFilter {
    fn from(bits: u32) -> Self {
        Self::from_u32(bits)
    }
}

impl From<BitWidth> for BitFilter {
    fn from(bits: BitWidth) -> Self {
        Self::Only(bits)
    }
}

impl From<Option<BitWidth>> for BitFilter {
    fn from(bits: Option<BitWidth>) -> Self {
        bits.map_or(Self::All, Self::Only)
    }
}

impl std::fmt::Display for BitFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(bits) => write!(f, "{bits}"),
        }
    }
}

impl std::str::FromStr for BitFilter {
    type Err = std::convert::Infallible;

    /// Accepts `32`, `64`, `32bit`, `64-bit`; anything else means `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .to_lowercase()
            .trim_end_matches("bit")
            .trim_end_matches('-')
            .to_string();
        Ok(digits.parse::<u32>().map_or(Self::All, Self::from_u32))
    }
}
