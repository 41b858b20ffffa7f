//! Per-permutation c_w table for S_n, exported with polars.

use anyhow::{bail, Context, Result};
use pdc::api::{ocean, CosetCounter, Group};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// One row per permutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CwRow {
    pub perm: String,
    pub length: u32,
    pub rafts: u32,
    pub floats: u32,
    pub ropes: u32,
    pub tethers: u32,
    pub c_w: u64,
}

/// Rows for every `w ∈ S_n`, sorted by `w`.
pub fn cw_rows(n: usize) -> Result<Vec<CwRow>> {
    let group = Group::new(n)?;
    let mut counter = CosetCounter::new();
    counter
        .cw_table(&group)?
        .into_iter()
        .map(|(w, c)| {
            let o = ocean(&w);
            Ok(CwRow {
                perm: w.to_string(),
                length: w.length() as u32,
                rafts: o.rafts.len() as u32,
                floats: o.floats.len() as u32,
                ropes: o.ropes.len() as u32,
                tethers: o.tethers.len() as u32,
                c_w: u64::try_from(c).with_context(|| format!("c_w of {w} exceeds u64"))?,
            })
        })
        .collect()
}

pub fn frame(rows: &[CwRow]) -> Result<DataFrame> {
    let col = |f: fn(&CwRow) -> u32| rows.iter().map(f).collect::<Vec<u32>>();
    let df = df!(
        "perm" => rows.iter().map(|r| r.perm.as_str()).collect::<Vec<_>>(),
        "length" => col(|r| r.length),
        "rafts" => col(|r| r.rafts),
        "floats" => col(|r| r.floats),
        "ropes" => col(|r| r.ropes),
        "tethers" => col(|r| r.tethers),
        "c_w" => rows.iter().map(|r| r.c_w).collect::<Vec<u64>>()
    )?;
    Ok(df)
}

/// Write CSV or Parquet, chosen by the extension of `out`.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let parquet = match ext.as_deref() {
        Some("csv") => false,
        Some("parquet") => true,
        _ => bail!("unsupported table format {} (use .csv or .parquet)", out.display()),
    };
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if parquet {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).finish(df)?;
    }
    Ok(())
}
