use num::integer::Roots;
use num_traits::Float;

use crate::data::Point;
use crate::PolygonScalar;

use super::{graham_scan, highest_point, lowest_point};

/// Divide-and-conquer hull in the style of Chan's algorithm.
///
/// Inputs with fewer than six points go straight to
/// [`graham_scan::convex_hull`]. Larger inputs are processed as follows:
///
/// 1. The points, in input order, are cut into contiguous chunks of
///    `n / ⌊√n⌋` points. The last chunk may be shorter.
/// 2. Each chunk with at least three points is replaced by its Graham scan
///    hull; shorter chunks are kept as they are.
/// 3. The skeleton is the Graham scan hull of the smallest point of every
///    chunk hull.
/// 4. Between each pair of neighbouring skeleton points `a, b` (no
///    wraparound), the interior of the hull of the first chunk whose smallest
///    point is `a` and largest point is `b` is spliced in. The interior is the
///    chunk hull without its first and last point. Pairs without such a chunk
///    get nothing spliced.
///
/// This is a simplified merge, not the output-sensitive wrapping merge of the
/// textbook algorithm, and its result is generally not the full hull.
///
/// Inputs with fewer than three points are returned unchanged.
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar + Float,
{
  let n = pts.len();
  if n < 6 {
    return graham_scan::convex_hull(pts);
  }

  let chunk_size = n / n.sqrt();
  let chunks: Vec<&[Point<T>]> = pts.chunks(chunk_size).collect();
  let chunk_hulls: Vec<Vec<Point<T>>> = chunks.iter().map(|chunk| chunk_hull(chunk)).collect();

  let minima: Vec<Point<T>> = chunk_hulls
    .iter()
    .filter_map(|hull| lowest_point(hull).copied())
    .collect();
  let skeleton = graham_scan::convex_hull(&minima);

  let mut hull = Vec::with_capacity(n);
  for (i, pt) in skeleton.iter().enumerate() {
    hull.push(*pt);
    let Some(next) = skeleton.get(i + 1) else {
      break;
    };
    match matching_chunk(&chunks, pt, next) {
      Some(idx) => hull.extend_from_slice(interior(&chunk_hulls[idx])),
      None => {
        tracing::debug!(?pt, ?next, "no chunk spans this skeleton edge; nothing spliced");
      }
    }
  }
  hull
}

fn chunk_hull<T>(chunk: &[Point<T>]) -> Vec<Point<T>>
where
  T: PolygonScalar + Float,
{
  if chunk.len() < 3 {
    chunk.to_vec()
  } else {
    graham_scan::convex_hull(chunk)
  }
}

// Index of the first chunk whose smallest point is `a` and largest point is `b`.
fn matching_chunk<T>(chunks: &[&[Point<T>]], a: &Point<T>, b: &Point<T>) -> Option<usize>
where
  T: PolygonScalar,
{
  chunks
    .iter()
    .position(|chunk| lowest_point(chunk) == Some(a) && highest_point(chunk) == Some(b))
}

// Hull without its first and last point.
fn interior<T>(hull: &[Point<T>]) -> &[Point<T>] {
  if hull.len() > 2 {
    &hull[1..hull.len() - 1]
  } else {
    &[]
  }
}
