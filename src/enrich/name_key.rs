use std::collections::HashMap;
use std::fmt;

/// Case-insensitive player name used to join records across providers.
///
/// Two different players with the same name collapse onto one key. Callers
/// keep the first record seen for a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index `items` by name; the first item for each key wins.
pub fn index_by_name<'a, T, F>(items: &'a [T], name_of: F) -> HashMap<NameKey, &'a T>
where
    F: Fn(&T) -> &str,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(NameKey::new(name_of(item))).or_insert(item);
    }
    index
}
