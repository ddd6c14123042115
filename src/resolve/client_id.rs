//! Random client-identifier generation.

use rand::Rng;

/// Fixed prefix on every generated identifier.
const CLIENT_ID_PREFIX: &str = "NJS";

/// Generates a client identifier: `"NJS"` followed by a uniformly drawn
/// integer in `[1, 99999]`, zero-padded to five digits (e.g. `7` becomes
/// `"NJS00007"`).
///
/// No uniqueness guarantee; collisions across calls are possible. Uses the
/// thread-local generator, so concurrent callers never share RNG state.
pub fn generate_client_id() -> String {
    let v: u32 = rand::thread_rng().gen_range(1..=99_999);
    format!("{}{:05}", CLIENT_ID_PREFIX, v)
}
