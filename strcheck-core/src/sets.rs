//! Named character sets loaded from TOML
//!
//! The standard sets (decimal digits, hex digits, upper-case letters and a
//! few more) ship as an embedded document parsed on first use. Callers can
//! load their own documents in the same format and merge them on top.
//!
//! ```toml
//! [sets.vowels]
//! description = "Lower-case vowels"
//! chars = "aeiou"
//!
//! [sets.octal_digits]
//! ranges = ["[0,7]"]
//! ```

use crate::charset::CharacterSet;
use crate::error::{Error, Result};
use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

const STANDARD_SETS_TOML: &str = include_str!("../configs/standard_sets.toml");

/// Name of the ASCII decimal digit set
pub const DECIMAL_DIGITS: &str = "decimal_digits";
/// Name of the hexadecimal digit set
pub const HEX_DIGITS: &str = "hex_digits";
/// Name of the ASCII upper-case letter set
pub const UPPER_ALPHA: &str = "upper_alpha";

/// On-disk shape of a set document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetsDocument {
    #[serde(default)]
    pub sets: BTreeMap<String, SetDefinition>,
}

/// One named set: explicit characters plus interval ranges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetDefinition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub chars: String,
    #[serde(default)]
    pub ranges: Vec<Interval<char>>,
}

impl SetDefinition {
    /// Materialize the definition
    pub fn build(&self) -> CharacterSet {
        let listed = CharacterSet::from(self.chars.as_str());
        self.ranges
            .iter()
            .map(|range| range.values().collect::<CharacterSet>())
            .fold(listed, |acc, set| acc.union(&set))
    }
}

/// A collection of named character sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetRegistry {
    sets: BTreeMap<String, CharacterSet>,
}

impl SetRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of standard sets, parsed once per process
    pub fn standard() -> &'static SetRegistry {
        &standard_sets().registry
    }

    /// Parse a set document
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let parsed: SetsDocument = toml::from_str(document)
            .map_err(|e| Error::Config(format!("Failed to parse set document: {e}")))?;
        Self::from_document(&parsed)
    }

    /// Read and parse a set document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)?;
        log::debug!("Loading character sets from {}", path.display());

        let parsed: SetsDocument = toml::from_str(&document)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
        Self::from_document(&parsed)
    }

    /// Build a registry from an already-parsed document
    pub fn from_document(document: &SetsDocument) -> Result<Self> {
        let mut registry = Self::new();
        for (name, definition) in &document.sets {
            if name.trim().is_empty() {
                return Err(Error::Config("set names must not be blank".to_string()));
            }
            registry.insert(name.clone(), definition.build());
        }
        Ok(registry)
    }

    /// Add or replace a set, returning the previous definition
    pub fn insert(&mut self, name: impl Into<String>, set: CharacterSet) -> Option<CharacterSet> {
        self.sets.insert(name.into(), set)
    }

    /// Merge `other` into this registry; sets in `other` win
    pub fn merge(&mut self, other: SetRegistry) {
        for (name, set) in other.sets {
            if self.sets.insert(name.clone(), set).is_some() {
                log::warn!("Character set `{name}` overridden");
            }
        }
        log::debug!("Set registry now holds {} sets", self.sets.len());
    }

    /// Look up a set by name
    pub fn get(&self, name: &str) -> Option<&CharacterSet> {
        self.sets.get(name)
    }

    /// Look up a set by name, failing with `InvalidArgument` when unknown
    pub fn require(&self, name: &str) -> Result<&CharacterSet> {
        self.get(name).ok_or_else(|| {
            Error::invalid_argument("name", format!("unknown character set `{name}`"))
        })
    }

    /// Set names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Number of sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the registry holds no sets
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

struct StandardSets {
    registry: SetRegistry,
    decimal_digits: CharacterSet,
    hex_digits: CharacterSet,
    upper_alpha: CharacterSet,
}

static STANDARD_SETS: OnceLock<StandardSets> = OnceLock::new();

fn load_standard_sets() -> Result<StandardSets> {
    let registry = SetRegistry::from_toml_str(STANDARD_SETS_TOML)?;

    let required = |name: &str| {
        registry
            .get(name)
            .cloned()
            .ok_or_else(|| Error::Config(format!("standard set `{name}` is missing")))
    };
    let decimal_digits = required(DECIMAL_DIGITS)?;
    let hex_digits = required(HEX_DIGITS)?;
    let upper_alpha = required(UPPER_ALPHA)?;

    log::debug!("Loaded {} standard character sets", registry.len());

    Ok(StandardSets {
        registry,
        decimal_digits,
        hex_digits,
        upper_alpha,
    })
}

fn standard_sets() -> &'static StandardSets {
    STANDARD_SETS
        .get_or_init(|| load_standard_sets().expect("Failed to load embedded standard sets"))
}

/// `0-9`
pub fn decimal_digits() -> &'static CharacterSet {
    &standard_sets().decimal_digits
}

/// `0-9`, `A-F` and `a-f`
pub fn hex_digits() -> &'static CharacterSet {
    &standard_sets().hex_digits
}

/// `A-Z`
pub fn upper_alpha() -> &'static CharacterSet {
    &standard_sets().upper_alpha
}
