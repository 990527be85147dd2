/*!
# Utilities

Provides internal helpers for the random generators, most notably
[`BernoulliBits`]: the buffered coin-flip source behind
[`Gnp`](crate::gens::Gnp) graphs.
*/

mod bernoulli;

pub use bernoulli::*;
