//! One-shot subcommands: `generate`, `nearest`, `rings`.

use std::io::Write;
use std::path::Path;

use commute_core::Coordinate;
use serde::Serialize;
use commute_points::{candidate_count, commute_rings, find_nearest_index, generate, RandomSource};

use crate::input::load_candidates;

pub(crate) fn run_generate<W, R>(
    out: &mut W,
    office: Coordinate,
    count: Option<i64>,
    default_count: usize,
    rng: &mut R,
) -> anyhow::Result<()>
where
    W: Write,
    R: RandomSource,
{
    let count = match count {
        Some(raw) => candidate_count(raw)?,
        None => default_count,
    };
    let houses = generate(office, count, rng)?;
    serde_json::to_writer_pretty(&mut *out, &houses)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct NearestReport {
    pub(crate) office: Coordinate,
    pub(crate) index: usize,
    pub(crate) nearest: Coordinate,
    pub(crate) score: f64,
}

pub(crate) fn run_nearest<W: Write>(
    out: &mut W,
    office: Coordinate,
    candidates_path: &Path,
) -> anyhow::Result<()> {
    let candidates = load_candidates(candidates_path)?;
    let index = find_nearest_index(office, &candidates)?;
    let nearest = candidates[index];
    tracing::info!(%office, index, %nearest, "nearest house found");

    let report = NearestReport {
        office,
        index,
        nearest,
        score: commute_points::proximity_score(office, nearest),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn run_rings<W: Write>(
    out: &mut W,
    office: Coordinate,
    radii_m: [f64; 3],
) -> anyhow::Result<()> {
    let rings = commute_rings(office, radii_m);
    serde_json::to_writer_pretty(&mut *out, &rings)?;
    writeln!(out)?;
    Ok(())
}
