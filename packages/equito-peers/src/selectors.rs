//! Chain Selector Resolution
//!
//! Equito identifies each supported blockchain by a numeric selector.
//! Deployment tooling refers to chains by name, so a small table maps a
//! selector to the lowercase name aliases that resolve to it:
//!
//! ```json
//! { "1": ["ethereum", "eth"], "137": ["polygon"] }
//! ```
//!
//! The table is loaded once at startup, validated for alias uniqueness,
//! and never mutated afterwards, so it is safe to share across tasks.
//! Lookup is a linear scan; the table holds tens of entries at most.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::Error;

/// Numeric chain selector assigned by the Equito routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChainSelector(pub u64);

impl ChainSelector {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainSelector {
    fn from(id: u64) -> Self {
        ChainSelector(id)
    }
}

/// One table entry: a selector and the lowercase aliases that resolve to it.
#[derive(Debug, Clone)]
struct SelectorEntry {
    selector: ChainSelector,
    aliases: Vec<String>,
}

/// Immutable name → selector table.
#[derive(Debug, Clone)]
pub struct ChainSelectorTable {
    entries: Vec<SelectorEntry>,
}

impl ChainSelectorTable {
    /// Load the table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse the table from a JSON string of the form
    /// `{"<selector>": ["alias", ...], ...}`.
    ///
    /// Fails fast on a non-integer selector key and on an alias that appears
    /// under two different selectors. Aliases are lower-cased on load so
    /// resolution only ever compares lowercase strings.
    pub fn from_json_str(raw: &str) -> Result<Self, Error> {
        let parsed: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)?;

        let mut entries = Vec::with_capacity(parsed.len());
        for (key, aliases) in parsed {
            let selector: u64 = key
                .parse()
                .map_err(|_| Error::InvalidSelectorKey { key: key.clone() })?;
            entries.push(SelectorEntry {
                selector: ChainSelector(selector),
                aliases: aliases.into_iter().map(|a| a.to_lowercase()).collect(),
            });
        }

        let table = Self { entries };
        table.check_alias_uniqueness()?;

        tracing::debug!(entries = table.entries.len(), "Chain selector table loaded");
        Ok(table)
    }

    /// Resolve a chain name to its selector, case-insensitively.
    ///
    /// Linear scan over entries, returning the first whose alias list
    /// contains the lower-cased name. The error carries the original input.
    pub fn resolve(&self, name: &str) -> Result<ChainSelector, Error> {
        let lowered = name.to_lowercase();

        for entry in &self.entries {
            if entry.aliases.iter().any(|alias| *alias == lowered) {
                return Ok(entry.selector);
            }
        }

        Err(Error::UnknownChain {
            name: name.to_string(),
        })
    }

    /// Number of selector entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_alias_uniqueness(&self) -> Result<(), Error> {
        let mut seen: BTreeMap<&str, u64> = BTreeMap::new();
        for entry in &self.entries {
            for alias in &entry.aliases {
                if let Some(&first) = seen.get(alias.as_str()) {
                    if first != entry.selector.0 {
                        return Err(Error::DuplicateAlias {
                            alias: alias.clone(),
                            first,
                            second: entry.selector.0,
                        });
                    }
                } else {
                    seen.insert(alias, entry.selector.0);
                }
            }
        }
        Ok(())
    }
}
