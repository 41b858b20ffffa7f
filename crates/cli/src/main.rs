mod provenance;
mod table;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdc::api::*;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "pdc")]
#[command(about = "Parabolic double cosets of the symmetric group")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// A permutation given in one-line notation or drawn at random.
#[derive(Args)]
struct PermArg {
    /// One-line notation, e.g. "3,1,4,5,2"
    #[arg(required_unless_present = "random")]
    perm: Option<String>,
    /// Draw a uniform element of S_N instead
    #[arg(long, value_name = "N")]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl PermArg {
    fn resolve(&self) -> Result<Permutation> {
        match (&self.perm, self.random) {
            (Some(text), _) => parse_perm(text),
            (None, Some(n)) => Ok(random_permutation(&Group::new(n)?, self.seed)),
            (None, None) => anyhow::bail!("a permutation or --random N is required"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Raw,
    Symmetry,
    Ocean,
    Combined,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Raw => vec![Strategy::Raw],
            StrategyArg::Symmetry => vec![Strategy::Symmetry],
            StrategyArg::Ocean => vec![Strategy::Ocean],
            StrategyArg::Combined => vec![Strategy::Combined],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    A,
    B,
}

impl From<FamilyArg> for Family {
    fn from(f: FamilyArg) -> Self {
        match f {
            FamilyArg::A => Family::A,
            FamilyArg::B => Family::B,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print the w-ocean and c_w of a permutation
    Ocean(PermArg),
    /// Print c_w, the number of PDCs with minimal element w
    Count(PermArg),
    /// Compute p_n, the number of PDCs in S_n
    Total {
        #[arg(long)]
        n: usize,
        #[arg(long, value_enum, default_value_t = StrategyArg::Combined)]
        strategy: StrategyArg,
        /// Log progress every K permutations (debug level)
        #[arg(long, value_name = "K")]
        progress_every: Option<usize>,
    },
    /// Minimal and maximal elements, rank and size of W_I·w·W_J
    Coset {
        #[arg(long)]
        perm: String,
        #[arg(long, value_delimiter = ',')]
        left: Vec<usize>,
        #[arg(long, value_delimiter = ',')]
        right: Vec<usize>,
    },
    /// Decide whether the Bruhat interval [lower, upper] is a PDC
    Interval {
        #[arg(long)]
        lower: String,
        #[arg(long)]
        upper: String,
    },
    /// First terms of an a- or b-sequence
    Sequence {
        #[arg(long, value_enum)]
        family: FamilyArg,
        #[arg(long)]
        index: usize,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Distinct or duplicate oceans of S_n
    Oceans {
        #[arg(long)]
        n: usize,
        #[arg(long)]
        duplicates: bool,
    },
    /// Write the per-permutation c_w table (.csv or .parquet) with a provenance sidecar
    Table {
        #[arg(long)]
        n: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Ocean(arg) => show_ocean(&arg.resolve()?),
        Action::Count(arg) => count(&arg.resolve()?),
        Action::Total {
            n,
            strategy,
            progress_every,
        } => total(n, strategy, progress_every),
        Action::Coset { perm, left, right } => coset(&perm, left, right),
        Action::Interval { lower, upper } => interval(&lower, &upper),
        Action::Sequence {
            family,
            index,
            count,
        } => sequence(family.into(), index, count),
        Action::Oceans { n, duplicates } => survey(n, duplicates),
        Action::Table { n, out } => export(n, out),
        Action::Report => report(),
    }
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_perm(text: &str) -> Result<Permutation> {
    text.parse().with_context(|| format!("parsing permutation {text:?}"))
}

#[derive(Serialize)]
struct OceanOut {
    perm: String,
    n: usize,
    length: usize,
    rafts: Vec<(usize, usize, usize, usize)>,
    floats: Vec<Site>,
    ropes: Vec<Site>,
    tethers: Vec<Site>,
    c_w: u128,
}

fn show_ocean(w: &Permutation) -> Result<()> {
    let o = ocean(w);
    let c_w = CosetCounter::new().c_from_ocean(&o)?;
    tracing::info!(perm = %w, c_w = %c_w, "ocean");
    emit(&OceanOut {
        perm: w.to_string(),
        n: o.n,
        length: w.length(),
        rafts: o.rafts.iter().map(Raft::as_tuple).collect(),
        floats: o.floats,
        ropes: o.ropes,
        tethers: o.tethers,
        c_w,
    })
}

/// Counts are `u128` and serialize as JSON numbers throughout.
#[derive(Serialize)]
struct CountOut {
    perm: String,
    c_w: u128,
}

fn count(w: &Permutation) -> Result<()> {
    let c_w = CosetCounter::new().c(w)?;
    tracing::info!(perm = %w, c_w = %c_w, "count");
    emit(&CountOut {
        perm: w.to_string(),
        c_w,
    })
}

#[derive(Serialize)]
struct TotalOut {
    n: usize,
    strategy: String,
    total: u128,
    cache_entries: usize,
    elapsed_ms: f64,
}

fn total(n: usize, strategy: StrategyArg, progress_every: Option<usize>) -> Result<()> {
    let group = Group::new(n)?;
    let mut out = Vec::new();
    for strategy in strategy.strategies() {
        let cfg = CountCfg {
            strategy,
            progress_every,
        };
        let r = CosetCounter::new().report(&group, &cfg)?;
        tracing::info!(
            n,
            strategy = %r.strategy,
            total = %r.total,
            cache_entries = r.cache_entries,
            elapsed_ms = r.elapsed.as_secs_f64() * 1e3,
            "p_n"
        );
        out.push(TotalOut {
            n,
            strategy: r.strategy.to_string(),
            total: r.total,
            cache_entries: r.cache_entries,
            elapsed_ms: r.elapsed.as_secs_f64() * 1e3,
        });
    }
    emit(&out)
}

#[derive(Serialize)]
struct CosetOut {
    coset: String,
    minimal: String,
    maximal: String,
    minimal_length: usize,
    maximal_length: usize,
    rank: usize,
    cardinality: u128,
}

fn coset(perm: &str, left: Vec<usize>, right: Vec<usize>) -> Result<()> {
    let w = parse_perm(perm)?;
    let n = w.n();
    let i = IndexSet::new(n, left).context("left index set")?;
    let j = IndexSet::new(n, right).context("right index set")?;
    let dc = DoubleCoset::new(i, w, j)?;
    let (lo, hi) = (dc.minimal(), dc.maximal());
    tracing::info!(coset = %dc, "coset");
    emit(&CosetOut {
        coset: dc.to_string(),
        minimal: lo.to_string(),
        maximal: hi.to_string(),
        minimal_length: lo.length(),
        maximal_length: hi.length(),
        rank: dc.rank(),
        cardinality: dc.cardinality(),
    })
}

#[derive(Serialize)]
struct IntervalOut {
    parabolic: bool,
    left: Vec<usize>,
    right: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cardinality: Option<u128>,
    /// Minimum actually reached when the interval is not a coset.
    #[serde(skip_serializing_if = "Option::is_none")]
    minimal: Option<String>,
}

fn interval(lower: &str, upper: &str) -> Result<()> {
    let a = parse_perm(lower)?;
    let b = parse_perm(upper)?;
    let doc = match presentation(&a, &b) {
        Ok(dc) => IntervalOut {
            parabolic: true,
            left: dc.left().iter().collect(),
            right: dc.right().iter().collect(),
            cardinality: Some(dc.cardinality()),
            minimal: None,
        },
        Err(IntervalError::NotParabolic {
            left,
            right,
            minimal,
        }) => IntervalOut {
            parabolic: false,
            left: left.iter().collect(),
            right: right.iter().collect(),
            cardinality: None,
            minimal: Some(minimal.to_string()),
        },
        Err(e) => return Err(e.into()),
    };
    tracing::info!(lower, upper, parabolic = doc.parabolic, "interval");
    emit(&doc)
}

#[derive(Serialize)]
struct SequenceOut {
    family: String,
    index: usize,
    terms: Vec<u128>,
}

fn sequence(family: Family, index: usize, count: usize) -> Result<()> {
    let terms = SequenceTable::new().terms(family, index, count)?;
    emit(&SequenceOut {
        family: family.to_string(),
        index,
        terms,
    })
}

fn survey(n: usize, duplicates: bool) -> Result<()> {
    let group = Group::new(n)?;
    if duplicates {
        let pairs = duplicate_pairs(&group);
        let shared = duplicate_oceans(&group).len();
        tracing::info!(n, shared, pairs = pairs.len(), "duplicate oceans");
        emit(&json!({
            "n": n,
            "duplicate_oceans": shared,
            "pairs": pairs
                .iter()
                .map(|(o, w)| json!({ "ocean": o.to_string(), "perm": w.to_string() }))
                .collect::<Vec<_>>(),
        }))
    } else {
        let all = oceans(&group);
        tracing::info!(n, distinct = all.len(), "oceans");
        emit(&json!({
            "n": n,
            "distinct": all.len(),
            "oceans": all.iter().map(Ocean::to_string).collect::<Vec<_>>(),
        }))
    }
}

fn export(n: usize, out: PathBuf) -> Result<()> {
    let rows = table::cw_rows(n)?;
    let p_n: u64 = rows.iter().map(|r| r.c_w).sum();
    let mut df = table::frame(&rows)?;
    tracing::info!(n, rows = df.height(), cols = df.width(), p_n, "cw_table");
    table::write_frame(&mut df, &out)?;
    let payload = Payload::new(json!({
        "n": n,
        "rows": df.height(),
        "p_n": p_n,
    }))
    .note("c_w per permutation, ocean-keyed cache");
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    emit(&provenance::block(json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_serialize_as_json_numbers() {
        let small = CountOut {
            perm: "3,1,4,5,2".into(),
            c_w: 24,
        };
        assert_eq!(
            serde_json::to_string(&small).unwrap(),
            r#"{"perm":"3,1,4,5,2","c_w":24}"#
        );
        let wide = CountOut {
            perm: "1".into(),
            c_w: u128::MAX,
        };
        let text = serde_json::to_string(&wide).unwrap();
        assert!(text.contains(&format!(r#""c_w":{}"#, u128::MAX)), "{text}");
    }

    #[test]
    fn coset_and_interval_sizes_are_numbers() {
        let dc = DoubleCoset::new(
            IndexSet::full(21),
            Permutation::identity(21),
            IndexSet::full(21),
        )
        .unwrap();
        let out = CosetOut {
            coset: dc.to_string(),
            minimal: dc.minimal().to_string(),
            maximal: dc.maximal().to_string(),
            minimal_length: 0,
            maximal_length: dc.rank(),
            rank: dc.rank(),
            cardinality: dc.cardinality(),
        };
        let text = serde_json::to_string(&out).unwrap();
        assert!(
            text.contains(r#""cardinality":51090942171709440000"#),
            "{text}"
        );

        let refused = IntervalOut {
            parabolic: false,
            left: vec![1],
            right: vec![],
            cardinality: None,
            minimal: Some("1,2".into()),
        };
        let text = serde_json::to_string(&refused).unwrap();
        assert!(!text.contains("cardinality"), "{text}");
    }
}
