//! Coordinate lists on the command line: `"x,y x,y ..."`.
//!
//! Pairs are separated by whitespace or `;`, coordinates by a comma. Each
//! coordinate goes through `parse_scalar`, so `1/3`, `-2` and `0.25` are
//! all exact.

use anyhow::{bail, Context, Result};
use exactgeo::api::{parse_scalar, Point, Polygon};

pub fn point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected `x,y`, got `{s}`");
    };
    let x = parse_scalar(x).with_context(|| format!("x coordinate of `{s}`"))?;
    let y = parse_scalar(y).with_context(|| format!("y coordinate of `{s}`"))?;
    Ok(Point::from_scalars(x, y))
}

pub fn points(s: &str) -> Result<Vec<Point>> {
    let pts = s
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
        .map(point)
        .collect::<Result<Vec<_>>>()?;
    if pts.is_empty() {
        bail!("no coordinates given");
    }
    Ok(pts)
}

pub fn polygon(s: &str) -> Result<Polygon> {
    let pts = points(s)?;
    Ok(Polygon::from_points(pts)?)
}
