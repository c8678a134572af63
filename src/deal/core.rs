use std::fmt;

use log::debug;
use rand::Rng;

use crate::deal::constants::{DEAL_SIZE, MAX_CARD, MIN_CARD};
use crate::deal::errors::DealError;

/// The four numbers presented for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal([u32; DEAL_SIZE]);

impl Deal {
    pub fn new(values: [u32; DEAL_SIZE]) -> Self {
        Self(values)
    }

    /// Draw each card independently and uniformly from `MIN_CARD..=MAX_CARD`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = [0; DEAL_SIZE];
        for value in &mut values {
            *value = rng.random_range(MIN_CARD..=MAX_CARD);
        }
        debug!("Dealt {:?}", values);
        Self(values)
    }

    pub fn values(&self) -> [u32; DEAL_SIZE] {
        self.0
    }

    pub fn as_f64(&self) -> [f64; DEAL_SIZE] {
        self.0.map(f64::from)
    }

    /// # Errors
    ///
    /// Returns an error unless exactly four values are given and each one
    /// parses as a non-negative integer.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Self, DealError> {
        let values = raw
            .iter()
            .map(|s| {
                let s = s.as_ref().trim();
                s.parse::<u32>()
                    .map_err(|_| DealError::InvalidValue(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(values.as_slice())
    }
}

impl TryFrom<&[u32]> for Deal {
    type Error = DealError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        let values: [u32; DEAL_SIZE] =
            values.try_into().map_err(|_| DealError::WrongCount {
                expected: DEAL_SIZE,
                actual: values.len(),
            })?;
        Ok(Self(values))
    }
}

impl From<[u32; DEAL_SIZE]> for Deal {
    fn from(values: [u32; DEAL_SIZE]) -> Self {
        Self(values)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{} {} {} {}", a, b, c, d)
    }
}
