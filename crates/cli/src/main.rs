use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use exactgeo::api::{Entity, Point, Polygon, Scalar};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod parse;

#[derive(Parser)]
#[command(name = "exactgeo-cli")]
#[command(about = "Exact 2D polygon queries", version = exactgeo::VERSION)]
struct Cmd {
    /// Log at debug level (normalization, calipers walk)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Vertices, area, perimeter, centroid, bounds and convexity
    Describe {
        /// Vertex list, e.g. "0,0 4,0 4,3"
        #[arg(long)]
        poly: String,
    },
    /// Strict interior test for a point
    Encloses {
        #[arg(long)]
        poly: String,
        #[arg(long)]
        point: String,
    },
    /// Distance between two convex polygons, or a polygon and a point
    Distance {
        #[arg(long)]
        a: String,
        /// A vertex list, or a single `x,y` pair
        #[arg(long)]
        b: String,
    },
    /// Boundary intersection as points and segments
    Intersect {
        #[arg(long)]
        a: String,
        /// A vertex list, or a single `x,y` pair
        #[arg(long)]
        b: String,
    },
    /// Same vertex cycle up to rotation and reversal
    Equal {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let out = match cmd.action {
        Action::Describe { poly } => describe(&poly)?,
        Action::Encloses { poly, point } => encloses(&poly, &point)?,
        Action::Distance { a, b } => distance(&a, &b)?,
        Action::Intersect { a, b } => intersect(&a, &b)?,
        Action::Equal { a, b } => equal(&a, &b)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

#[derive(Serialize)]
struct Description {
    vertices: Vec<[String; 2]>,
    area: String,
    perimeter: f64,
    centroid: Option<[String; 2]>,
    bounds: [String; 4],
    convex: bool,
}

fn describe(poly: &str) -> Result<Value> {
    let p = parse::polygon(poly).context("parsing --poly")?;
    tracing::info!(vertices = p.vertices().len(), "describe");
    let b = p.bounds();
    let d = Description {
        vertices: p.vertices().iter().map(coords).collect(),
        area: p.area().to_string(),
        perimeter: p.perimeter(),
        centroid: p.centroid().ok().as_ref().map(coords),
        bounds: [&b.xmin, &b.ymin, &b.xmax, &b.ymax].map(Scalar::to_string),
        convex: p.is_convex(),
    };
    Ok(serde_json::to_value(d)?)
}

fn encloses(poly: &str, point: &str) -> Result<Value> {
    let p = parse::polygon(poly).context("parsing --poly")?;
    let q = parse::point(point).context("parsing --point")?;
    Ok(json!(p.encloses_point(&q)))
}

/// A single pair is a point; anything longer is a polygon.
fn operand(s: &str) -> Result<Entity> {
    let pts = parse::points(s)?;
    Ok(match <[Point; 1]>::try_from(pts) {
        Ok([p]) => Entity::Point(p),
        Err(pts) => Entity::Polygon(Polygon::from_points(pts)?),
    })
}

fn distance(a: &str, b: &str) -> Result<Value> {
    let a = Entity::Polygon(parse::polygon(a).context("parsing --a")?);
    let b = operand(b).context("parsing --b")?;
    let d = a
        .distance(&b)
        .with_context(|| format!("distance between {a} and {b}"))?;
    Ok(json!(d))
}

fn intersect(a: &str, b: &str) -> Result<Value> {
    let a = parse::polygon(a).context("parsing --a")?;
    let b = operand(b).context("parsing --b")?;
    let found = a.intersection(&b);
    tracing::debug!(pieces = found.len(), "intersection");
    Ok(Value::Array(found.iter().map(entity).collect()))
}

fn equal(a: &str, b: &str) -> Result<Value> {
    let a = parse::polygon(a).context("parsing --a")?;
    let b = parse::polygon(b).context("parsing --b")?;
    Ok(json!(a == b))
}

fn coords(p: &Point) -> [String; 2] {
    [p.x().to_string(), p.y().to_string()]
}

fn entity(e: &Entity) -> Value {
    match e {
        Entity::Point(p) => json!({ "point": coords(p) }),
        Entity::Segment(s) => {
            let (lo, hi) = s.sort_key();
            json!({ "segment": [coords(lo), coords(hi)] })
        }
        other => json!({ "kind": other.kind_name(), "repr": other.to_string() }),
    }
}
