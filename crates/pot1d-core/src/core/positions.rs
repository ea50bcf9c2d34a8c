use super::error::PotentialError;
use std::ops::Deref;
use std::str::FromStr;

/// An ordered sequence of coordinates on the 1D surface.
///
/// Every accepted input shape (a single number, a numeric string, or a collection of numbers)
/// is turned into a `Positions` before a potential sees it. A scalar always becomes a
/// one-element sequence and the order of collections is preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Positions(Vec<f64>);

impl Positions {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Parses every item of a sequence of numeric strings, failing on the first item that is
    /// not a number.
    pub fn parse_all<I, S>(items: I) -> Result<Self, PotentialError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| parse_position(item.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

fn parse_position(input: &str) -> Result<f64, PotentialError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|source| PotentialError::MalformedInput {
            input: input.to_string(),
            source,
        })
}

impl Deref for Positions {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[f64]> for Positions {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Positions {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<f64> for Positions {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Positions {
                fn from(value: $ty) -> Self {
                    Self(vec![f64::from(value)])
                }
            }
        )*
    };
}

impl_from_scalar!(f64, f32, i32, u32, i16, u16, i8, u8);

impl From<Vec<f64>> for Positions {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Positions {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Positions {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromStr for Positions {
    type Err = PotentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s).map(|value| Self(vec![value]))
    }
}

impl TryFrom<&str> for Positions {
    type Error = PotentialError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Positions {
    type Error = PotentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
