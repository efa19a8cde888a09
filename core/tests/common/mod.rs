//! Seeded sample generation shared by the integration tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_LEN: usize = 64;
pub const SEED: u64 = 0x5EED_D1C7;

const USERS: &[&str] = &["alice", "bob", "carol", "dave", "erin", "frank"];
const OPS: &[&str] = &["read", "write", "delete", "list"];

/// One fixed-size log-like record: shared structure, varying fields.
pub fn record(rng: &mut StdRng) -> [u8; SAMPLE_LEN] {
    let line = format!(
        "{{\"id\":{},\"user\":\"{}\",\"op\":\"{}\",\"ok\":{}}}",
        rng.gen_range(1000..10000),
        USERS[rng.gen_range(0..USERS.len())],
        OPS[rng.gen_range(0..OPS.len())],
        rng.gen_bool(0.8),
    );
    let mut out = [b' '; SAMPLE_LEN];
    let n = line.len().min(SAMPLE_LEN);
    out[..n].copy_from_slice(&line.as_bytes()[..n]);
    out
}

pub fn records(seed: u64, count: usize) -> Vec<[u8; SAMPLE_LEN]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| record(&mut rng)).collect()
}
