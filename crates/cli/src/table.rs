//! Tabular I/O for classified points (polars; CSV or Parquet by extension).

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use reeve::api::{LatticeSample, Location};
use reeve::Vec3;

/// Output format chosen from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Format::Csv),
            Some("parquet") => Ok(Format::Parquet),
            other => bail!(
                "unsupported table extension {:?} for {} (expected .csv or .parquet)",
                other,
                path.display()
            ),
        }
    }
}

/// One row per lattice sample: numerators, coordinates, and location.
pub fn samples_frame(samples: &[LatticeSample], denom: u32) -> PolarsResult<DataFrame> {
    let i: Vec<i64> = samples.iter().map(|s| s.index[0]).collect();
    let j: Vec<i64> = samples.iter().map(|s| s.index[1]).collect();
    let k: Vec<i64> = samples.iter().map(|s| s.index[2]).collect();
    let x: Vec<f64> = samples.iter().map(|s| s.point.x).collect();
    let y: Vec<f64> = samples.iter().map(|s| s.point.y).collect();
    let z: Vec<f64> = samples.iter().map(|s| s.point.z).collect();
    let loc: Vec<&str> = samples.iter().map(|s| s.location.as_str()).collect();
    let denom = vec![denom; samples.len()];
    df!(
        "i" => i,
        "j" => j,
        "k" => k,
        "denom" => denom,
        "x" => x,
        "y" => y,
        "z" => z,
        "location" => loc
    )
}

/// One row per query point with its location.
pub fn located_frame(points: &[Vec3<f64>], locations: &[Location]) -> PolarsResult<DataFrame> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    let z: Vec<f64> = points.iter().map(|p| p.z).collect();
    let loc: Vec<&str> = locations.iter().map(|l| l.as_str()).collect();
    df!("x" => x, "y" => y, "z" => z, "location" => loc)
}

pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    let format = Format::from_path(out)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        Format::Csv => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Format::Parquet => {
            ParquetWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
    }
    Ok(())
}

/// Read `x`, `y`, `z` columns of a CSV file as points. Integer columns are cast.
pub fn read_points_csv(path: &Path) -> Result<Vec<Vec3<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y,z from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let zs = df.column("z")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, ((x, y), z)) in xs.into_iter().zip(ys).zip(zs).enumerate() {
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => out.push(Vec3::new(x, y, z)),
            _ => bail!("{}: row {row} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}
