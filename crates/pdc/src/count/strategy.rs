//! p_n = Σ_w c_w with four interchangeable caching strategies.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use super::counter::{CosetCounter, CountError};
use crate::ocean::{ocean, Ocean};
use crate::perm::{Group, Permutation};

/// How `p_n` reuses c_w across permutations. All give the same total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Recompute c_w for every permutation.
    Raw,
    /// One evaluation per orbit of `{w, w⁻¹, w0·w·w0, w0·w⁻¹·w0}`.
    Symmetry,
    /// One evaluation per distinct ocean.
    Ocean,
    /// One evaluation per orbit, keyed by the least ocean in the orbit.
    Combined,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Raw,
        Strategy::Symmetry,
        Strategy::Ocean,
        Strategy::Combined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Raw => "raw",
            Strategy::Symmetry => "symmetry",
            Strategy::Ocean => "ocean",
            Strategy::Combined => "combined",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy `{}` (expected raw, symmetry, ocean or combined)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// Counting configuration.
#[derive(Clone, Copy, Debug)]
pub struct CountCfg {
    pub strategy: Strategy,
    /// Emit a `debug` progress event every this many permutations.
    pub progress_every: Option<usize>,
}

impl Default for CountCfg {
    fn default() -> Self {
        Self {
            strategy: Strategy::Combined,
            progress_every: None,
        }
    }
}

/// Outcome of one `p_n` evaluation.
#[derive(Clone, Debug)]
pub struct PnReport {
    pub n: usize,
    pub strategy: Strategy,
    pub total: u128,
    /// Distinct keys evaluated (0 for `Raw`).
    pub cache_entries: usize,
    pub elapsed: Duration,
}

/// The symmetries preserving c_w: inversion, conjugation by w0, and both.
pub fn orbit(w: &Permutation) -> [Permutation; 4] {
    let inv = w.inverse();
    let conj = w.conjugate_by_longest();
    let conj_inv = inv.conjugate_by_longest();
    [w.clone(), inv, conj, conj_inv]
}

/// Least element of the orbit of `w`.
pub fn canonical(w: &Permutation) -> Permutation {
    let [a, b, c, d] = orbit(w);
    a.min(b).min(c).min(d)
}

/// Least ocean over the orbit of `w`.
pub fn canonical_ocean(w: &Permutation) -> Ocean {
    let [a, b, c, d] = orbit(w).map(|x| ocean(&x));
    a.min(b).min(c).min(d)
}

fn memoized<K: std::hash::Hash + Eq>(
    cache: &mut HashMap<K, u128>,
    key: K,
    eval: impl FnOnce(&K) -> Result<u128, CountError>,
) -> Result<u128, CountError> {
    if let Some(&v) = cache.get(&key) {
        return Ok(v);
    }
    let v = eval(&key)?;
    cache.insert(key, v);
    Ok(v)
}

impl CosetCounter {
    /// `p_n` for S_n with the given strategy.
    pub fn p(&mut self, n: usize, strategy: Strategy) -> Result<u128, CountError> {
        let group = Group::new(n)?;
        let cfg = CountCfg {
            strategy,
            ..CountCfg::default()
        };
        Ok(self.report(&group, &cfg)?.total)
    }

    /// `p_n` with timing and cache statistics.
    pub fn report(&mut self, group: &Group, cfg: &CountCfg) -> Result<PnReport, CountError> {
        let n = group.n();
        let start = Instant::now();
        let overflow = CountError::Overflow { n };
        let mut by_perm: HashMap<Permutation, u128> = HashMap::new();
        let mut by_ocean: HashMap<Ocean, u128> = HashMap::new();
        let mut total: u128 = 0;
        tracing::debug!(n, strategy = %cfg.strategy, "counting parabolic double cosets");
        for (done, w) in group.elements().enumerate() {
            let c = match cfg.strategy {
                Strategy::Raw => self.c(&w)?,
                Strategy::Symmetry => {
                    memoized(&mut by_perm, canonical(&w), |key| self.c(key))?
                }
                Strategy::Ocean => {
                    memoized(&mut by_ocean, ocean(&w), |o| self.c_from_ocean(o))?
                }
                Strategy::Combined => memoized(&mut by_ocean, canonical_ocean(&w), |o| {
                    self.c_from_ocean(o)
                })?,
            };
            total = total.checked_add(c).ok_or_else(|| overflow.clone())?;
            if let Some(every) = cfg.progress_every.filter(|&k| k > 0) {
                if (done + 1) % every == 0 {
                    tracing::debug!(n, done = done + 1, partial = %total, "progress");
                }
            }
        }
        let report = PnReport {
            n,
            strategy: cfg.strategy,
            total,
            cache_entries: by_perm.len() + by_ocean.len(),
            elapsed: start.elapsed(),
        };
        tracing::debug!(
            n,
            strategy = %report.strategy,
            total = %report.total,
            cache_entries = report.cache_entries,
            memo_terms = self.sequences().cached(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "p_n done"
        );
        Ok(report)
    }

    /// `{w ∈ S_n | c_w = k}`, sorted.
    pub fn cw_class(&mut self, group: &Group, k: u128) -> Result<Vec<Permutation>, CountError> {
        Ok(self
            .cw_table(group)?
            .into_iter()
            .filter(|(_, c)| *c == k)
            .map(|(w, _)| w)
            .collect())
    }

    /// c_w for every `w ∈ S_n`, sorted by `w`.
    pub fn cw_table(&mut self, group: &Group) -> Result<Vec<(Permutation, u128)>, CountError> {
        let mut by_ocean: HashMap<Ocean, u128> = HashMap::new();
        let mut out: BTreeMap<Permutation, u128> = BTreeMap::new();
        for w in group.elements() {
            let c = memoized(&mut by_ocean, ocean(&w), |o| self.c_from_ocean(o))?;
            out.insert(w, c);
        }
        Ok(out.into_iter().collect())
    }
}
