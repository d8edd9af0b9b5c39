// 🔑 Stable Identity - content-addressed ids for roster entities
// Replaces autoincrement keys: the id is a pure function of the natural key

use sha2::{Digest, Sha256};

/// Hex chars kept from the digest. 16 chars = 64 bits, enough to make
/// collisions between a few thousand roster entities a non-issue while
/// keeping the ids short in SQL and URLs.
pub const ID_HEX_LEN: usize = 16;

/// Separator between natural-key parts before hashing.
/// Not expected to occur in team names, rider names, or nations.
const PART_SEPARATOR: &str = "|";

/// Derive a stable id from a prefix and the entity's natural-key parts.
///
/// Each part is trimmed, then all parts are joined with `|` and hashed
/// with SHA-256; the id is `prefix + "_" + first 16 hex chars`.
///
/// Two calls with the same prefix and same trimmed parts always return
/// the same id, across runs and machines. Nothing else is guaranteed:
/// callers must normalize case/accents themselves if they want variants
/// to collapse to one identity.
pub fn stable_id(prefix: &str, parts: &[&str]) -> String {
    let base = parts
        .iter()
        .map(|p| p.trim())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR);

    let digest = format!("{:x}", Sha256::digest(base.as_bytes()));
    format!("{}_{}", prefix, &digest[..ID_HEX_LEN])
}

// ============================================================================
// TESTS
// ============================================================================
