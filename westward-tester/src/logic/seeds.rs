use anyhow::{Context, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use westward_game::seed::WORD_LIST;
use westward_game::{decode_seed_code, encode_seed_code};

/// Seed metadata used for logic runs and the play view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: u64,
    pub code: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed, code: None }
    }

    #[must_use]
    pub const fn from_share_code(seed: u64, code: String) -> Self {
        Self {
            seed,
            code: Some(code),
        }
    }

    /// Share code for this seed, preferring the one it was parsed from.
    #[must_use]
    pub fn share_code(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| encode_seed_code(self.seed))
    }

    #[must_use]
    pub fn label(&self) -> String {
        match &self.code {
            Some(code) => format!("{code} ({})", self.seed),
            None => self.seed.to_string(),
        }
    }
}

enum SeedToken {
    Everything,
    Seed(SeedInfo),
}

fn classify(token: &str) -> Result<SeedToken> {
    if ["all", "available"]
        .iter()
        .any(|keyword| token.eq_ignore_ascii_case(keyword))
    {
        return Ok(SeedToken::Everything);
    }
    // Negative numbers fold onto their magnitude.
    if let Some(seed) = token
        .parse::<u64>()
        .ok()
        .or_else(|| token.parse::<i64>().ok().map(i64::unsigned_abs))
    {
        return Ok(SeedToken::Seed(SeedInfo::from_numeric(seed)));
    }
    let seed = decode_seed_code(token).with_context(|| format!("unrecognized seed: {token}"))?;
    Ok(SeedToken::Seed(SeedInfo::from_share_code(
        seed,
        token.trim().to_uppercase(),
    )))
}

/// Turn `--seeds` tokens into seeds to run, in first-seen order.
///
/// Tokens may be integers, `WT-` share codes, or `all`/`available` for the
/// full share-code space. A seed named twice keeps its share code if either
/// mention had one. No tokens means the default seed 1337.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut wanted = Vec::new();
    let mut everything = false;
    for token in tokens.iter().filter(|t| !t.is_empty()) {
        match classify(token)? {
            SeedToken::Everything => everything = true,
            SeedToken::Seed(info) => wanted.push(info),
        }
    }
    if everything {
        wanted.extend(every_share_code_seed()?);
    }

    let mut resolved: Vec<SeedInfo> = Vec::with_capacity(wanted.len());
    let mut positions: HashMap<u64, usize> = HashMap::new();
    for info in wanted {
        match positions.entry(info.seed) {
            Entry::Occupied(slot) => {
                let kept = &mut resolved[*slot.get()];
                if kept.code.is_none() {
                    kept.code = info.code;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(resolved.len());
                resolved.push(info);
            }
        }
    }

    if resolved.is_empty() {
        resolved.push(SeedInfo::from_numeric(1337));
    }
    Ok(resolved)
}

fn every_share_code_seed() -> Result<Vec<SeedInfo>> {
    WORD_LIST
        .iter()
        .flat_map(|word| (0..100).map(move |suffix| format!("WT-{word}{suffix:02}")))
        .map(|code| {
            let seed = decode_seed_code(&code)
                .with_context(|| format!("share code {code} does not decode"))?;
            Ok(SeedInfo::from_share_code(seed, code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_codes_resolve_in_order() {
        let raw = ["42", "-7", "wt-oxbow42"].map(String::from);
        let seeds = resolve_seed_inputs(&raw).unwrap();
        assert_eq!(seeds[0], SeedInfo::from_numeric(42));
        assert_eq!(seeds[1], SeedInfo::from_numeric(7));
        let coded = seeds
            .iter()
            .find(|s| s.code.as_deref() == Some("WT-OXBOW42"))
            .expect("share code seed");
        assert_eq!(coded.share_code(), "WT-OXBOW42");
        assert!(coded.label().starts_with("WT-OXBOW42 ("));
    }

    #[test]
    fn all_keyword_covers_the_share_code_space() {
        let seeds = resolve_seed_inputs(&["ALL".to_string()]).unwrap();
        assert_eq!(seeds.len(), WORD_LIST.len() * 100);
        assert!(seeds.iter().all(|info| info.code.is_some()));
    }

    #[test]
    fn duplicates_keep_the_coded_entry() {
        let code = "WT-RIVER07".to_string();
        let seed = decode_seed_code(&code).unwrap();
        let seeds = resolve_seed_inputs(&[seed.to_string(), code.clone()]).unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].code, Some(code));
    }

    #[test]
    fn empty_input_falls_back_to_default_seed() {
        let seeds = resolve_seed_inputs(&[]).unwrap();
        assert_eq!(seeds, vec![SeedInfo::from_numeric(1337)]);
        assert!(resolve_seed_inputs(&["nope".to_string()]).is_err());
    }
}
