/*!
# Graph Representation

This module provides [`AdjMapGraph`], a labelled undirected graph backed by
an adjacency map, together with its canonical serialization used for
equality, hashing and digests.
*/

mod adj_map;
mod canonical;

pub use adj_map::*;
pub use canonical::*;

/// Stable arena key of a vertex slot. Slot keys are crate-internal and
/// never exposed to callers; labels are the public identity.
pub(crate) type SlotId = u32;

/// Edge-table key: the two slot keys in ascending order.
pub(crate) type PairKey = (SlotId, SlotId);

pub(crate) fn pair_key(u: SlotId, v: SlotId) -> PairKey {
    (u.min(v), u.max(v))
}
