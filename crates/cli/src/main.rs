use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use reeve::api::{
    classify_many, count_dilate, ehrhart_reeve, ehrhart_reeve_interior, par_tally, reeve_dilate,
    sweep, tally, Bounds3, ClassifyCfg, Lattice, LatticeCounts, ReeveCheck, Tet, EPS,
};
use reeve::geom3::cfg::VIEW_MARGIN;
use reeve::Vec3;
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "reeve-cli")]
#[command(about = "Classify points against Reeve tetrahedra and check lattice-count identities")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Tolerance for every classifier zero test
    #[arg(long, global = true, default_value_t = EPS)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

/// Selects `t·T_r`.
#[derive(Args, Clone, Copy, Debug)]
struct TetArgs {
    /// Reeve height r (>= 1)
    #[arg(long)]
    r: u32,
    /// Integer dilation factor t (>= 1)
    #[arg(long, default_value_t = 1)]
    dilate: u32,
}

impl TetArgs {
    fn build(self) -> Result<Tet> {
        Ok(reeve_dilate(self.r, self.dilate)?)
    }
}

/// Lattice `Z_n` and the sweep box margin.
#[derive(Args, Clone, Copy, Debug)]
struct SweepArgs {
    /// Lattice denominator n (sweeps (1/n)·Z³)
    #[arg(long, default_value_t = 1)]
    denom: u32,
    /// Margin added around the tetrahedron's bounding box
    #[arg(long, default_value_t = VIEW_MARGIN)]
    margin: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Classify one point as Interior, Boundary, or Outside
    Classify {
        #[command(flatten)]
        tet: TetArgs,
        #[arg(
            num_args = 3,
            required = true,
            allow_negative_numbers = true,
            value_names = ["X", "Y", "Z"]
        )]
        point: Vec<f64>,
    },
    /// Tally lattice points of t·T_r by location
    Count {
        #[command(flatten)]
        tet: TetArgs,
        #[command(flatten)]
        sweep: SweepArgs,
        /// Split the sweep across threads
        #[arg(long)]
        parallel: bool,
    },
    /// Recover vol(T_r) from Z³ and Z_2 counts via Reeve's formula
    Reeve {
        #[arg(long)]
        r: u32,
    },
    /// Compare counted lattice points of t·T_r with the Ehrhart polynomial
    Ehrhart {
        #[arg(long)]
        r: u32,
        #[arg(long, default_value_t = 4)]
        max_t: u32,
    },
    /// Write every classified lattice point to a CSV or Parquet table
    Dump {
        #[command(flatten)]
        tet: TetArgs,
        #[command(flatten)]
        sweep: SweepArgs,
        #[arg(long)]
        out: PathBuf,
        /// Drop Outside points
        #[arg(long)]
        closed_only: bool,
    },
    /// Classify x,y,z rows of a CSV file and write them with a location column
    Locate {
        #[command(flatten)]
        tet: TetArgs,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize, Debug, PartialEq)]
struct CountsOut {
    interior: u64,
    boundary: u64,
    outside: u64,
    closed: u64,
}

impl From<LatticeCounts> for CountsOut {
    fn from(c: LatticeCounts) -> Self {
        Self {
            interior: c.interior,
            boundary: c.boundary,
            outside: c.outside,
            closed: c.closed(),
        }
    }
}

#[derive(Serialize, Debug)]
struct ClassifyOut {
    r: u32,
    dilate: u32,
    point: [f64; 3],
    location: String,
}

#[derive(Serialize, Debug)]
struct CountOut {
    r: u32,
    dilate: u32,
    denom: u32,
    counts: CountsOut,
    /// Ehrhart value, reported for integer sweeps only.
    ehrhart: Option<i64>,
}

#[derive(Serialize, Debug)]
struct ReeveOut {
    r: u32,
    z1: CountsOut,
    z2: CountsOut,
    volume_formula: f64,
    volume_exact: f64,
    consistent: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct EhrhartRow {
    t: u32,
    counted: u64,
    polynomial: i64,
    interior_counted: u64,
    interior_polynomial: i64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = ClassifyCfg::with_eps(cmd.eps);
    let out = match cmd.action {
        Action::Classify { tet, point } => serde_json::to_value(classify(tet, &point, cfg)?)?,
        Action::Count {
            tet,
            sweep,
            parallel,
        } => serde_json::to_value(count(tet, sweep, parallel, cfg)?)?,
        Action::Reeve { r } => {
            let res = reeve(r, cfg)?;
            if !res.consistent {
                println!("{}", serde_json::to_string_pretty(&res)?);
                bail!(
                    "Reeve formula gave volume {} but r/6 = {}",
                    res.volume_formula,
                    res.volume_exact
                );
            }
            serde_json::to_value(res)?
        }
        Action::Ehrhart { r, max_t } => serde_json::to_value(ehrhart(r, max_t, cfg)?)?,
        Action::Dump {
            tet,
            sweep,
            out,
            closed_only,
        } => dump(tet, sweep, out, closed_only, cfg, cmd.tag)?,
        Action::Locate { tet, input, out } => locate(tet, input, out, cfg, cmd.tag)?,
        Action::Report => provenance::report_block(cmd.tag),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn classify(args: TetArgs, point: &[f64], cfg: ClassifyCfg) -> Result<ClassifyOut> {
    let &[x, y, z] = point else {
        bail!("expected 3 coordinates, got {}", point.len());
    };
    let tet = args.build()?;
    let location = tet.classify_with(Vec3::new(x, y, z), cfg);
    tracing::info!(r = args.r, dilate = args.dilate, x, y, z, %location, "classify");
    Ok(ClassifyOut {
        r: args.r,
        dilate: args.dilate,
        point: [x, y, z],
        location: location.to_string(),
    })
}

fn count(args: TetArgs, sw: SweepArgs, parallel: bool, cfg: ClassifyCfg) -> Result<CountOut> {
    let tet = args.build()?;
    let lattice = Lattice::new(sw.denom)?;
    let bounds = Bounds3::around(&tet, sw.margin);
    tracing::info!(
        r = args.r,
        dilate = args.dilate,
        denom = sw.denom,
        points = lattice.count_in(&bounds),
        parallel,
        "count"
    );
    let counts = if parallel {
        par_tally(&tet, lattice, &bounds, cfg)
    } else {
        tally(&tet, lattice, &bounds, cfg)
    };
    Ok(CountOut {
        r: args.r,
        dilate: args.dilate,
        denom: sw.denom,
        counts: counts.into(),
        ehrhart: (sw.denom == 1).then(|| ehrhart_reeve(args.r, args.dilate as i64)),
    })
}

fn reeve(r: u32, cfg: ClassifyCfg) -> Result<ReeveOut> {
    let check = ReeveCheck::run(r, cfg)?;
    tracing::info!(
        r,
        volume_formula = check.volume_formula,
        volume_exact = check.volume_exact,
        "reeve"
    );
    Ok(ReeveOut {
        r,
        z1: check.z1.into(),
        z2: check.z2.into(),
        volume_formula: check.volume_formula,
        volume_exact: check.volume_exact,
        consistent: check.consistent(),
    })
}

fn ehrhart(r: u32, max_t: u32, cfg: ClassifyCfg) -> Result<Vec<EhrhartRow>> {
    let mut rows = Vec::with_capacity(max_t as usize);
    for t in 1..=max_t {
        let counts = count_dilate(r, t, cfg)?;
        let row = EhrhartRow {
            t,
            counted: counts.closed(),
            polynomial: ehrhart_reeve(r, t as i64),
            interior_counted: counts.interior,
            interior_polynomial: ehrhart_reeve_interior(r, t as i64),
        };
        if row.counted as i64 != row.polynomial {
            tracing::warn!(
                r,
                t,
                counted = row.counted,
                polynomial = row.polynomial,
                "ehrhart mismatch"
            );
        }
        rows.push(row);
    }
    tracing::info!(r, max_t, "ehrhart");
    Ok(rows)
}

fn dump(
    args: TetArgs,
    sw: SweepArgs,
    out: PathBuf,
    closed_only: bool,
    cfg: ClassifyCfg,
    tag: Option<String>,
) -> Result<serde_json::Value> {
    let tet = args.build()?;
    let lattice = Lattice::new(sw.denom)?;
    let bounds = Bounds3::around(&tet, sw.margin);
    let mut samples = sweep(&tet, lattice, &bounds, cfg);
    if closed_only {
        samples.retain(|s| s.location.is_closed());
    }
    let mut df = table::samples_frame(&samples, sw.denom)?;
    table::write_table(&mut df, &out)?;
    tracing::info!(rows = df.height(), out = %out.display(), tag = ?tag, "dump");

    let params = json!({
        "r": args.r,
        "dilate": args.dilate,
        "denom": sw.denom,
        "margin": sw.margin,
        "eps": cfg.eps,
        "closed_only": closed_only,
    });
    let prov = write_sidecar(&out, Payload::new(params.clone()).tagged(tag))?;
    Ok(json!({
        "rows": df.height(),
        "params": params,
        "outputs": [out.to_string_lossy(), prov.to_string_lossy()],
    }))
}

fn locate(
    args: TetArgs,
    input: PathBuf,
    out: PathBuf,
    cfg: ClassifyCfg,
    tag: Option<String>,
) -> Result<serde_json::Value> {
    let tet = args.build()?;
    let points = table::read_points_csv(&input)?;
    let locations = classify_many(&tet, &points, cfg);
    let mut counts = LatticeCounts::default();
    for &loc in &locations {
        counts.record(loc);
    }
    let mut df = table::located_frame(&points, &locations)?;
    table::write_table(&mut df, &out)?;
    tracing::info!(
        rows = points.len(),
        input = %input.display(),
        out = %out.display(),
        "locate"
    );

    let params = json!({
        "r": args.r,
        "dilate": args.dilate,
        "eps": cfg.eps,
        "input": input.to_string_lossy(),
    });
    let prov = write_sidecar(&out, Payload::new(params).tagged(tag))?;
    Ok(json!({
        "counts": CountsOut::from(counts),
        "outputs": [out.to_string_lossy(), prov.to_string_lossy()],
    }))
}
