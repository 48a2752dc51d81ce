//! How many quarter turns a single piece needs to travel between two
//! `(slot, alignment)` states, ignoring every other piece. These are lower
//! bounds for any search that has to bring that piece home.

use std::sync::LazyLock;

use log::debug;

use crate::{cube::Orbit, moves::MOVES};

const UNREACHABLE: u8 = u8::MAX;

/// A single piece's location and twist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceState {
    pub slot: u8,
    pub alignment: u8,
}

impl PieceState {
    #[must_use]
    pub fn new(slot: u8, alignment: u8) -> Self {
        PieceState { slot, alignment }
    }
}

/// All-pairs distances for one orbit.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    orbit: Orbit,
    // `states * states` entries, row-major by source state
    distances: Box<[u8]>,
}

static EDGE_DISTANCES: LazyLock<DistanceTable> =
    LazyLock::new(|| DistanceTable::compute(Orbit::Edges));
static CORNER_DISTANCES: LazyLock<DistanceTable> =
    LazyLock::new(|| DistanceTable::compute(Orbit::Corners));

impl DistanceTable {
    #[must_use]
    pub fn edges() -> &'static DistanceTable {
        &EDGE_DISTANCES
    }

    #[must_use]
    pub fn corners() -> &'static DistanceTable {
        &CORNER_DISTANCES
    }

    fn state_count(orbit: Orbit) -> usize {
        orbit.piece_count() * orbit.orientation_count() as usize
    }

    fn index(&self, state: PieceState) -> Option<usize> {
        let piece_count = self.orbit.piece_count();
        if state.slot as usize >= piece_count || state.alignment >= self.orbit.orientation_count() {
            return None;
        }
        Some(state.alignment as usize * piece_count + state.slot as usize)
    }

    /// Floyd-Warshall over the graph whose edges are single quarter turns.
    #[must_use]
    pub fn compute(orbit: Orbit) -> DistanceTable {
        let n = Self::state_count(orbit);
        let piece_count = orbit.piece_count();
        let orientation_count = orbit.orientation_count() as usize;
        let mut distances = vec![UNREACHABLE; n * n].into_boxed_slice();

        for move_ in MOVES.quarter_turn_metric() {
            let (perm, ori) = move_.cube.orbit(orbit);
            for (slot, (&to, &twist)) in perm.iter().zip(ori).enumerate() {
                for alignment in 0..orientation_count {
                    let from = alignment * piece_count + slot;
                    let to = (alignment + twist as usize) % orientation_count * piece_count
                        + to as usize;
                    distances[from * n + to] = 1;
                }
            }
        }

        for i in 0..n {
            distances[i * n + i] = 0;
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = distances[i * n + k].saturating_add(distances[k * n + j]);
                    if through < distances[i * n + j] {
                        distances[i * n + j] = through;
                    }
                }
            }
        }

        let table = DistanceTable { orbit, distances };
        debug!(
            "Computed {orbit} distance table over {n} states, diameter {}",
            table.diameter()
        );
        table
    }

    #[must_use]
    pub fn orbit(&self) -> Orbit {
        self.orbit
    }

    /// `None` if either state is out of range for this orbit or `to` cannot
    /// be reached from `from`.
    #[must_use]
    pub fn get(&self, from: PieceState, to: PieceState) -> Option<u8> {
        let n = Self::state_count(self.orbit);
        let distance = self.distances[self.index(from)? * n + self.index(to)?];
        (distance != UNREACHABLE).then_some(distance)
    }

    /// The largest finite distance in the table.
    #[must_use]
    pub fn diameter(&self) -> u8 {
        self.distances
            .iter()
            .copied()
            .filter(|&d| d != UNREACHABLE)
            .max()
            .unwrap_or(0)
    }
}
