//! Reversible seed codes built from a 64-word trail list.
//! Code format: `WT-<WORD><NN>`, e.g. `WT-OXBOW42`.

const PREFIX: &str = "WT";

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub const WORD_LIST: [&str; 64] = [
    "OXBOW", "PRAIRIE", "WAGON", "BISON", "COYOTE", "MESA", "CANYON", "RIVER", "FORD", "FERRY",
    "SADDLE", "LANTERN", "BONNET", "SKILLET", "FLOUR", "BACON", "COFFEE", "BEANS", "HARDTACK",
    "KETTLE", "AXLE", "WHEEL", "TONGUE", "YOKE", "HITCH", "RIFLE", "POWDER", "FLINT", "BLANKET",
    "QUILT", "CANVAS", "TARP", "SAGE", "JUNIPER", "ASPEN", "CEDAR", "PINE", "WILLOW", "BLUFF",
    "RIDGE", "SUMMIT", "PASS", "VALLEY", "BASIN", "DIVIDE", "SPRING", "CREEK", "MARSH", "DUST",
    "THUNDER", "FROST", "EMBER", "CAMPFIRE", "BUGLE", "FIDDLE", "HARMONY", "DRIFTER", "SCOUT",
    "GUIDE", "PIONEER", "SETTLER", "HOMESTEAD", "HARVEST", "FRONTIER",
];

#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    word_index & 0x01FF | ((u16::from(nn) & 0x7F) << 9)
}

#[inline]
fn unpack(packed: u16) -> (u16, u8) {
    let nn = u8::try_from((packed >> 9) & 0x7F).unwrap_or(0);
    (packed & 0x01FF, nn)
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    let [low, high] = packed.to_le_bytes();
    // Domain-separated FNV input
    let mut buf = [0u8; 9];
    buf[..6].copy_from_slice(b"WESTW-");
    buf[6] = low;
    buf[7] = high;
    buf[8] = 0xA5;
    let h = fnv1a64(&buf);
    (h & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

/// Render the low 16 bits of `seed` as a share code.
#[must_use]
pub fn encode_seed_code(seed: u64) -> String {
    let packed = u16::try_from(seed & 0xFFFF).unwrap_or(0);
    let (wi, nn) = unpack(packed);
    let word = WORD_LIST
        .get(usize::from(wi))
        .copied()
        .unwrap_or(WORD_LIST[0]);
    format!("{PREFIX}-{word}{:02}", nn % 100)
}

/// Turn a share code back into the seed it stands for.
#[must_use]
pub fn decode_seed_code(code: &str) -> Option<u64> {
    let s = code.trim();
    let (prefix, rest) = s.split_once('-')?;
    if !prefix.eq_ignore_ascii_case(PREFIX) || rest.len() < 3 {
        return None;
    }
    let (word_part, nn_part) = rest.split_at_checked(rest.len() - 2)?;
    let nn: u8 = nn_part.parse().ok()?;
    if nn > 99 {
        return None;
    }
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| sanitize_word(w) == word)?;
    let wi = u16::try_from(idx).ok()?;
    Some(compose_seed(wi, nn))
}

/// Build a fresh code from arbitrary entropy (clock, OS randomness).
#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    let wi = u16::try_from(entropy % WORD_LIST.len() as u64).unwrap_or(0);
    let nn = u8::try_from((entropy >> 17) % 100).unwrap_or(0);
    encode_seed_code(compose_seed(wi, nn))
}

/// Accept either a share code or a plain decimal seed.
#[must_use]
pub fn parse_seed(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .ok()
        .or_else(|| decode_seed_code(trimmed))
}
