//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing the block grid.
//! The index is rebuilt (bulk-loaded) on every layout pass and answers point
//! queries in O(log n); candidates are then filtered by the exact half-open
//! containment rule, which keeps border and margin gutters unselectable.

use crate::types::Block;
use rstar::{AABB, RTree, RTreeObject};
use std::cmp::Ordering;

/// A spatial entry covering one block's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct BlockEntry {
    /// Index into the block sequence this entry was built from
    pub block_index: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BlockEntry {
    fn new(block_index: usize, block: &Block) -> Self {
        Self {
            block_index,
            min_x: block.x,
            min_y: block.y,
            max_x: block.x + block.width,
            max_y: block.y + block.height,
        }
    }

    /// Half-open containment: right/bottom edges belong to the gutter.
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

impl RTreeObject for BlockEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Point-query index over the current block sequence.
pub struct SpatialIndex {
    tree: RTree<BlockEntry>,
    len: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            len: 0,
        }
    }

    /// Replace the index contents with the given block sequence.
    pub fn rebuild(&mut self, blocks: &[Block]) {
        let entries: Vec<BlockEntry> = blocks
            .iter()
            .enumerate()
            .map(|(index, block)| BlockEntry::new(index, block))
            .collect();

        self.len = entries.len();
        self.tree = RTree::bulk_load(entries);
    }

    /// Resolve a surface coordinate to the block containing it, if any.
    ///
    /// Candidates are resolved in row-major order (ascending y, then x);
    /// with disjoint cells at most one candidate survives the containment
    /// filter anyway.
    pub fn block_at(&self, x: f32, y: f32) -> Option<usize> {
        let point = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point)
            .filter(|entry| entry.contains_point(x, y))
            .min_by(|a, b| {
                (a.min_y, a.min_x)
                    .partial_cmp(&(b.min_y, b.min_x))
                    .unwrap_or(Ordering::Equal)
            })
            .map(|entry| entry.block_index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
