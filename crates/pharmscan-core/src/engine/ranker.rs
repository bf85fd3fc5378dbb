use crate::core::models::pharmacophore::Pharmacophore;
use crate::engine::config::validate_top_n;
use crate::engine::error::EngineError;

/// Pharmacophores ordered by score, highest first.
///
/// The sort is stable, so pharmacophores with equal scores keep the order in which
/// they were generated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedPharmacophores {
    ranked: Vec<Pharmacophore>,
}

impl RankedPharmacophores {
    pub fn rank<I>(pharmacophores: I) -> Self
    where
        I: IntoIterator<Item = Pharmacophore>,
    {
        let mut ranked: Vec<Pharmacophore> = pharmacophores.into_iter().collect();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        Self { ranked }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn as_slice(&self) -> &[Pharmacophore] {
        &self.ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pharmacophore> + '_ {
        self.ranked.iter()
    }

    /// Returns the `n` best pharmacophores.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when `n` is zero and
    /// [`EngineError::OutOfRange`] when fewer than `n` pharmacophores were ranked.
    pub fn top(&self, n: usize) -> Result<&[Pharmacophore], EngineError> {
        let n = self.checked_count(n)?;
        Ok(&self.ranked[..n])
    }

    /// Consuming variant of [`top`](Self::top).
    pub fn into_top(mut self, n: usize) -> Result<Vec<Pharmacophore>, EngineError> {
        let n = self.checked_count(n)?;
        self.ranked.truncate(n);
        Ok(self.ranked)
    }

    fn checked_count(&self, n: usize) -> Result<usize, EngineError> {
        let n = validate_top_n(n)?;
        if n > self.ranked.len() {
            return Err(EngineError::OutOfRange {
                requested: n,
                available: self.ranked.len(),
            });
        }
        Ok(n)
    }
}

impl FromIterator<Pharmacophore> for RankedPharmacophores {
    fn from_iter<I: IntoIterator<Item = Pharmacophore>>(iter: I) -> Self {
        Self::rank(iter)
    }
}

impl IntoIterator for RankedPharmacophores {
    type Item = Pharmacophore;
    type IntoIter = std::vec::IntoIter<Pharmacophore>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.into_iter()
    }
}
