use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

fn validate_range(lo: f64, hi: f64) -> DashboardResult<()> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(DashboardError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// One band of a [`BandScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f64,
    pub width: f64,
}

impl Band {
    #[must_use]
    pub fn center(self) -> f64 {
        self.start + self.width * 0.5
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.width
    }
}

/// Maps ordered categorical keys to equal sub-intervals of a numeric range.
///
/// The range is split into `domain.len()` equal steps and each band is shrunk
/// symmetrically by `padding` of its step. Band geometry depends only on the
/// number of keys, so reordering the domain moves keys without changing
/// widths.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    padding: f64,
}

impl<K: PartialEq + Clone> BandScale<K> {
    pub fn new(domain: &[K], range: (f64, f64), padding: f64) -> DashboardResult<Self> {
        validate_range(range.0, range.1)?;
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(DashboardError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(Self {
            domain: domain.to_vec(),
            range,
            padding,
        })
    }

    #[must_use]
    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between the starts of two adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    #[must_use]
    pub fn band_at(&self, index: usize) -> Option<Band> {
        if index >= self.domain.len() {
            return None;
        }
        let step = self.step();
        Some(Band {
            start: self.range.0 + index as f64 * step + step * self.padding * 0.5,
            width: self.bandwidth(),
        })
    }

    #[must_use]
    pub fn band(&self, key: &K) -> Option<Band> {
        let index = self.domain.iter().position(|candidate| candidate == key)?;
        self.band_at(index)
    }

    /// Key whose band contains `position`, padding included.
    #[must_use]
    pub fn key_at(&self, position: f64) -> Option<&K> {
        let step = self.step();
        if step == 0.0 || !position.is_finite() {
            return None;
        }
        let offset = (position - self.range.0) / step;
        if offset < 0.0 {
            return None;
        }
        self.domain.get(offset.floor() as usize)
    }
}

/// Zero-based linear mapping from `[0, domain_max]` to `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_max: f64,
    range_lo: f64,
    range_hi: f64,
}

impl LinearScale {
    pub fn from_max(domain_max: f64, range: (f64, f64)) -> DashboardResult<Self> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(DashboardError::InvalidData(
                "linear scale domain max must be finite and > 0".to_owned(),
            ));
        }
        validate_range(range.0, range.1)?;

        Ok(Self {
            domain_max,
            range_lo: range.0,
            range_hi: range.1,
        })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_lo, self.range_hi)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.range_lo + (value / self.domain_max) * (self.range_hi - self.range_lo)
    }
}
