use {
  super::{by_distance, padded, Neighbour, SpatialIndex},
  crate::{
    geometry::{Circle, PixelSpace, P2},
    quadtree::{Quadrant, Quadtree}
  },
  euclid::Box2D,
  std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::{Debug, Formatter}
  }
};

/// Entries a leaf holds before it splits.
const BUCKET_SIZE: usize = 8;
const MAX_DEPTH: u8 = 12;

#[derive(Debug, Copy, Clone)]
struct Entry {
  seq: usize,
  circle: Circle
}

type Node = Quadtree<Vec<Entry>, f64>;

/// Point quadtree over circle centers, updated in place on every insert.
///
/// Queries run best-first over node rectangles, so only the neighbourhood of the query point is
/// visited. Centers outside the root rectangle are kept in the root bucket and still found.
#[derive(Clone)]
pub struct TreeIndex {
  tree: Node,
  k: usize,
  len: usize
}

impl TreeIndex {
  pub fn new(bounds: Box2D<f64, PixelSpace>, k: usize) -> Self {
    Self {
      tree: Quadtree::new(bounds.to_rect(), MAX_DEPTH, vec![]),
      k,
      len: 0
    }
  }

  pub fn build(bounds: Box2D<f64, PixelSpace>, circles: &[Circle], k: usize) -> Self {
    let mut index = Self::new(bounds, k);
    circles.iter().for_each(|&circle| index.insert(circle));
    index
  }

  pub fn k(&self) -> usize {
    self.k
  }
}

fn insert_entry(node: &mut Node, entry: Entry) {
  if let Some(children) = node.children.as_deref_mut() {
    match Quadrant::get(node.rect, entry.circle.center) {
      Some(quad) => insert_entry(&mut children[quad as usize], entry),
      None => node.data.push(entry)
    }
    return;
  }
  node.data.push(entry);
  if node.data.len() > BUCKET_SIZE && node.depth < node.max_depth {
    let entries = std::mem::take(&mut node.data);
    node.subdivide(|_| vec![]);
    entries.into_iter().for_each(|entry| insert_entry(node, entry));
  }
}

/// Tree node awaiting a visit, nearest first.
struct Visit<'a> {
  distance: f64,
  node: &'a Node
}

impl PartialEq for Visit<'_> {
  fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}
impl Eq for Visit<'_> {}
impl PartialOrd for Visit<'_> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Ord for Visit<'_> {
  // reversed: BinaryHeap pops the closest node first
  fn cmp(&self, other: &Self) -> Ordering { other.distance.total_cmp(&self.distance) }
}

impl SpatialIndex for TreeIndex {
  fn insert(&mut self, circle: Circle) {
    insert_entry(&mut self.tree, Entry { seq: self.len, circle });
    self.len += 1;
  }

  fn query_nearest(&self, point: P2, k: usize) -> Vec<Neighbour> {
    // max-heap of the k best (distance, seq) so far
    let mut best: BinaryHeap<(OrdDistance, usize, usize)> = BinaryHeap::with_capacity(k + 1);
    let mut circles = vec![];
    let mut frontier = BinaryHeap::new();
    frontier.push(Visit { distance: self.tree.distance_to(point), node: &self.tree });

    while let Some(Visit { distance, node }) = frontier.pop() {
      if k == 0 { break; }
      if best.len() == k && best.peek().map_or(false, |worst| distance > worst.0.0) {
        break;
      }
      for entry in node.data.iter() {
        best.push((OrdDistance(entry.circle.center.distance_to(point)), entry.seq, circles.len()));
        circles.push(entry.circle);
        if best.len() > k {
          best.pop();
        }
      }
      if let Some(children) = node.children.as_deref() {
        children.iter()
          .for_each(|child| frontier.push(Visit { distance: child.distance_to(point), node: child }));
      }
    }

    let mut found: Vec<_> = best.into_iter()
      .map(|(distance, seq, slot)| (distance.0, (seq, slot)))
      .collect();
    found.sort_by(by_distance);
    padded(
      found.into_iter().map(|(distance, (_, slot))| Neighbour { distance, circle: Some(circles[slot]) }),
      k
    )
  }

  fn len(&self) -> usize {
    self.len
  }

  fn neighbour_limit(&self) -> Option<usize> {
    Some(self.k)
  }
}

/// `f64` with a total order, for the result heap.
#[derive(Debug, Copy, Clone)]
struct OrdDistance(f64);

impl PartialEq for OrdDistance {
  fn eq(&self, other: &Self) -> bool { self.0.total_cmp(&other.0) == Ordering::Equal }
}
impl Eq for OrdDistance {}
impl PartialOrd for OrdDistance {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Ord for OrdDistance {
  fn cmp(&self, other: &Self) -> Ordering { self.0.total_cmp(&other.0) }
}

impl Debug for TreeIndex {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    let mut total_nodes = 0u64;
    let mut total_size = 0usize;
    let mut max_depth = 0u8;
    self.tree.traverse(&mut |node| {
      total_nodes += 1;
      total_size += std::mem::size_of::<Node>()
        + node.data.capacity() * std::mem::size_of::<Entry>();
      max_depth = max_depth.max(node.depth);
    });
    f.debug_struct("TreeIndex")
      .field("len", &self.len)
      .field("k", &self.k)
      .field("total_nodes", &total_nodes)
      .field("max_depth", &max_depth)
      .field("size", &total_size.file_size(options::BINARY).unwrap_or_else(|e| e))
      .finish()
  }
}
