//! Scaling of stripe weights onto terminal cells.
//!
//! Converts a flag's relative stripe weights into an exact integer
//! partition of the available terminal dimension (rows for horizontal
//! rendering, columns for vertical), with no gaps, no overlaps, and
//! stripe order preserved.

use crate::model::FlagDefinition;
use tracing::debug;

/// Integer cell-count per stripe, in stripe order, summing exactly to the
/// dimension it was scaled for. Recomputed on every resize, never stored.
pub type Partition = Vec<usize>;

/// Partitions `available_size` cells across the flag's stripes.
///
/// Uses cumulative weight boundaries: stripe `i` ends at
/// `floor(c_i * available_size)` where `c_i` is the cumulative weight
/// fraction, and its run-length is the difference between consecutive
/// boundaries. The telescoping sum makes the partition exact; rounding
/// loss accumulates into later stripes instead of leaving a gap. Stripes
/// may legitimately receive zero cells when the terminal is smaller than
/// the stripe count.
pub fn scale(flag: &FlagDefinition, available_size: usize) -> Partition {
    let total = flag.total_weight();
    let count = flag.stripe_count();
    let mut partition = Vec::with_capacity(count);

    let mut cumulative = 0.0;
    let mut previous_boundary = 0;
    for (index, stripe) in flag.stripes().iter().enumerate() {
        cumulative += stripe.weight();
        let boundary = if index == count - 1 {
            // Pin the final boundary; float drift in the cumulative sum
            // must not shave off the last cell.
            available_size
        } else {
            (cumulative / total * available_size as f64).floor() as usize
        };
        partition.push(boundary - previous_boundary);
        previous_boundary = boundary;
    }

    debug!(stripes = count, available_size, ?partition, "scaled flag");
    partition
}

/// Like [`scale`], but preserves the flag's natural proportions as an
/// integer multiple of its stripe weights instead of stretching to fill
/// the terminal. Leftover cells are left blank; a terminal too small to
/// hold one natural repeat yields an all-zero partition.
pub fn scale_hold(flag: &FlagDefinition, available_size: usize) -> Partition {
    let natural = flag.total_weight();
    let max_scale = (available_size as f64 / natural).floor();
    let held_size = (natural * max_scale) as usize;
    scale(flag, held_size.min(available_size))
}
