//! Observation records: one JSON object per simulated frame.
//!
//! Records are built from a [`GameSnapshot`] and carry a stable `state_hash`
//! so two runs can be compared line by line.

use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::core::{GameSnapshot, PipeKind};

/// Stable 64-bit FNV-1a hasher (std's `DefaultHasher` is not stable across
/// releases).
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Serialized as 16 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateHash(pub u64);

impl Serialize for StateHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut buf = [0u8; 16];
        for (i, slot) in buf.iter_mut().enumerate() {
            let shift = (15 - i) * 4;
            *slot = HEX[((self.0 >> shift) & 0x0f) as usize];
        }
        // Only ASCII hex digits were written.
        let s = std::str::from_utf8(&buf).map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Serialize)]
pub struct BirdRecord {
    pub x: f32,
    pub y: f32,
    pub velocity_y: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipeRecord {
    pub kind: &'static str,
    pub x: f32,
    pub y: f32,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObservationRecord {
    #[serde(rename = "type")]
    pub msg_type: RecordType,
    pub seq: u64,
    pub frame: u64,
    pub phase: &'static str,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub score: f64,
    pub spawned_pairs: u32,
    pub bird: BirdRecord,
    pub pipes: Vec<PipeRecord>,
    pub state_hash: StateHash,
}

fn kind_str(kind: PipeKind) -> &'static str {
    match kind {
        PipeKind::Top => "top",
        PipeKind::Bottom => "bottom",
    }
}

/// Hash everything that affects future frames.
pub fn state_hash(snap: &GameSnapshot) -> StateHash {
    let mut hasher = Fnv1aHasher::new();
    snap.phase.hash(&mut hasher);
    snap.bird.y.to_bits().hash(&mut hasher);
    snap.bird.velocity_y.to_bits().hash(&mut hasher);
    snap.pipe_count.hash(&mut hasher);
    for pipe in &snap.pipes {
        kind_str(pipe.kind).hash(&mut hasher);
        pipe.x.to_bits().hash(&mut hasher);
        pipe.y.to_bits().hash(&mut hasher);
        pipe.passed.hash(&mut hasher);
    }
    snap.score_halves.hash(&mut hasher);
    snap.episode_id.hash(&mut hasher);
    snap.spawned_pairs.hash(&mut hasher);
    snap.seed.hash(&mut hasher);
    StateHash(hasher.finish())
}

pub fn build_observation(snap: &GameSnapshot, seq: u64) -> ObservationRecord {
    ObservationRecord {
        msg_type: RecordType::Observation,
        seq,
        frame: snap.frame,
        phase: snap.phase.as_str(),
        game_over: snap.game_over(),
        episode_id: snap.episode_id,
        seed: snap.seed,
        score: snap.score(),
        spawned_pairs: snap.spawned_pairs,
        bird: BirdRecord {
            x: snap.bird.x,
            y: snap.bird.y,
            velocity_y: snap.bird.velocity_y,
        },
        pipes: snap
            .pipes
            .iter()
            .map(|p| PipeRecord {
                kind: kind_str(p.kind),
                x: p.x,
                y: p.y,
                passed: p.passed,
            })
            .collect(),
        state_hash: state_hash(snap),
    }
}
