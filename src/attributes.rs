use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style attribute value. Numbers stay numbers so `opacity: 0.5`
/// survives the trip through a plan file untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&AttrValue> for svg::node::Value {
    fn from(value: &AttrValue) -> Self {
        value.to_string().into()
    }
}

/// Insertion-ordered attribute map. Writing an existing key replaces its
/// value but keeps its original position.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Attributes {
        Attributes(Vec::new())
    }

    /// Builder flavoured insert.
    pub fn with<K: Into<String>, V: Into<AttrValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<AttrValue>>(&mut self, key: K, value: V) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    /// Later values win.
    pub fn merge(&mut self, other: &Attributes) -> &mut Self {
        for (key, value) in other.iter() {
            self.insert(key.as_str(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, AttrValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_replace_keeps_position() {
        let mut attrs = Attributes::new()
            .with("stroke", "black")
            .with("opacity", 0.5)
            .with("fill", "#55FF66");
        attrs.insert("stroke", "red");
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["stroke", "opacity", "fill"]);
        assert_eq!(attrs.get("stroke"), Some(&AttrValue::from("red")));
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = Attributes::new().with("stroke", "black");
        let extra: Attributes = vec![("fill", "blue"), ("stroke", "green")]
            .into_iter()
            .collect();
        base.merge(&extra);
        assert_eq!(base.get("stroke"), Some(&AttrValue::from("green")));
        assert_eq!(base.get("fill").map(|v| v.to_string()), Some("blue".to_string()));
    }

    #[test]
    fn test_ron_untagged_values() {
        let attrs: Attributes = ron::from_str("[(\"opacity\", 0.5), (\"fill\", \"#55FF66\")]")
            .expect("Failed to parse attributes");
        assert_eq!(attrs.get("opacity"), Some(&AttrValue::Number(0.5)));
        assert_eq!(attrs.get("fill"), Some(&AttrValue::Text("#55FF66".into())));
    }
}
