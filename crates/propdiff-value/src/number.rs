use std::fmt;

/// Numeric leaf value with a canonical decimal rendering.
///
/// A `Number` holds one of three representations (signed integer, unsigned
/// integer, float), mirroring how JSON numbers parse. Two numbers are equal
/// when their canonical renderings are equal, so `1.0` and `1` compare
/// equal regardless of representation.
#[derive(Clone, Copy)]
pub struct Number(Repr);

#[derive(Clone, Copy, Debug)]
enum Repr {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Canonical decimal text for this number.
    ///
    /// Integer representations format as plain integers. Floats use the
    /// shortest decimal that round-trips, which renders integral floats
    /// without a fractional part (`1.0` becomes `"1"`); negative zero
    /// normalizes to `"0"`. The same numeric value always yields the same
    /// text. Non-finite floats render as `"NaN"`, `"inf"`, and `"-inf"`;
    /// they cannot arise from JSON input.
    pub fn canonical(&self) -> String {
        match self.0 {
            Repr::Int(i) => i.to_string(),
            Repr::UInt(u) => u.to_string(),
            Repr::Float(f) if f == 0.0 => "0".to_string(),
            Repr::Float(f) => f.to_string(),
        }
    }

    /// The numeric value as an `f64`, possibly losing precision for large
    /// integers.
    pub fn as_f64(&self) -> f64 {
        match self.0 {
            Repr::Int(i) => i as f64,
            Repr::UInt(u) => u as f64,
            Repr::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Number {}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.canonical())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(Repr::Int(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(Repr::Int(value.into()))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(Repr::UInt(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self(Repr::UInt(value.into()))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(Repr::Float(value))
    }
}
