use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convexity::algorithms::{Crossing, HullAlgorithm, IntersectionPolicy};
use convexity::data::{DirectedEdge, Point};
use convexity::io;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "convexity")]
#[command(about = "Convex hulls and polygon self-intersection tests on point files")]
struct Cmd {
  #[command(subcommand)]
  action: Action,
}

#[derive(Subcommand)]
enum Action {
  /// Print the convex hull of the points in FILE
  Hull {
    /// Point file, one `x y` pair per line
    file: PathBuf,
    #[arg(long, short, default_value_t = HullAlgorithm::JarvisMarch)]
    algorithm: HullAlgorithm,
    /// Print a JSON array of `[x, y]` pairs
    #[arg(long)]
    json: bool,
  },
  /// Check whether the closed polygon through the points in FILE crosses itself
  Intersect {
    file: PathBuf,
    /// Tried first; the other policy is tried if this one finds nothing
    #[arg(long, short, default_value_t = IntersectionPolicy::Wrapping)]
    policy: IntersectionPolicy,
    #[arg(long)]
    json: bool,
  },
  /// List hull algorithms and intersection policies
  Algorithms,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
  let cmd = Cmd::parse();
  let out = match cmd.action {
    Action::Hull {
      file,
      algorithm,
      json,
    } => hull(&file, algorithm, json)?,
    Action::Intersect { file, policy, json } => intersect(&file, policy, json)?,
    Action::Algorithms => algorithms(),
  };
  print!("{}", out);
  Ok(())
}

fn load(file: &Path) -> Result<Vec<Point<f64>>> {
  io::read_points(file).with_context(|| format!("reading points from {}", file.display()))
}

fn hull(file: &Path, algorithm: HullAlgorithm, json: bool) -> Result<String> {
  let pts = load(file)?;
  tracing::info!(%algorithm, points = pts.len(), "hull");
  let start = Instant::now();
  let hull = algorithm
    .checked_run(&pts)
    .with_context(|| format!("{} needs at least {} points", algorithm, HullAlgorithm::MIN_POINTS))?;
  let elapsed = start.elapsed();
  tracing::info!(
    %algorithm,
    hull = hull.len(),
    elapsed_us = elapsed.as_micros() as u64,
    "hull computed"
  );
  if json {
    let arr: Vec<Value> = hull.iter().map(point_json).collect();
    Ok(format!("{}\n", serde_json::to_string(&arr)?))
  } else {
    Ok(io::format_points(&hull))
  }
}

fn intersect(file: &Path, policy: IntersectionPolicy, json: bool) -> Result<String> {
  let pts = load(file)?;
  tracing::info!(%policy, points = pts.len(), "intersect");
  let mut found = policy
    .checked_run(&pts)
    .with_context(|| format!("a polygon needs at least {} points", IntersectionPolicy::MIN_POINTS))?
    .map(|crossing| (policy, crossing));
  if found.is_none() {
    let fallback = policy.other();
    tracing::info!(%policy, %fallback, "nothing found; trying the other policy");
    found = fallback.run(&pts).map(|crossing| (fallback, crossing));
  }

  if json {
    let obj = match &found {
      Some((by, crossing)) => json!({
        "intersects": true,
        "policy": by.name(),
        "edges": [
          { "index": crossing.first_index, "segment": edge_json(&crossing.first) },
          { "index": crossing.second_index, "segment": edge_json(&crossing.second) },
        ],
      }),
      None => json!({ "intersects": false }),
    };
    return Ok(format!("{}\n", serde_json::to_string_pretty(&obj)?));
  }
  Ok(match found {
    Some((by, crossing)) => describe(by, &crossing),
    None => "polygon does not intersect itself\n".to_string(),
  })
}

fn describe(by: IntersectionPolicy, crossing: &Crossing<f64>) -> String {
  let show = |edge: &DirectedEdge<f64>| {
    format!(
      "({}, {}) -> ({}, {})",
      edge.src.x_coord(),
      edge.src.y_coord(),
      edge.dst.x_coord(),
      edge.dst.y_coord()
    )
  };
  format!(
    "polygon intersects itself ({})\nedge {}: {}\nedge {}: {}\n",
    by,
    crossing.first_index,
    show(&crossing.first),
    crossing.second_index,
    show(&crossing.second)
  )
}

fn algorithms() -> String {
  let mut out = String::from("hull algorithms:\n");
  for algo in HullAlgorithm::ALL {
    out.push_str(&format!("  {}\n", algo));
  }
  out.push_str("intersection policies:\n");
  for policy in IntersectionPolicy::ALL {
    out.push_str(&format!("  {}\n", policy));
  }
  out
}

fn point_json(pt: &Point<f64>) -> Value {
  json!([pt.x_coord(), pt.y_coord()])
}

fn edge_json(edge: &DirectedEdge<f64>) -> Value {
  json!([point_json(&edge.src), point_json(&edge.dst)])
}
