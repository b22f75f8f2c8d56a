//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer for the `tags` field.
///
/// A single string is split on commas, each piece trimmed, empty pieces
/// dropped; a sequence is used as-is; any other shape (number, bool, mapping)
/// normalizes to an empty list.
fn tags_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use std::fmt;

    struct TagsField;

    impl<'de> Visitor<'de> for TagsField {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            self.visit_str(&value)
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                if let serde_yaml::Value::String(s) = item {
                    vec.push(s);
                }
            }
            Ok(vec)
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(TagsField)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Kept as an opaque string; the catalog never parses or validates dates
    pub date: Option<String>,
    #[serde(deserialize_with = "tags_field", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Split the leading front-matter block from a file's content.
    ///
    /// Returns `(front_matter, body)`. The block must start on the first line
    /// and is fenced by `---` before and after. A missing fence, a missing
    /// closing fence, or YAML that fails to parse all degrade to empty
    /// front-matter with the full content returned as body.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(rest) = content.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches(['\r', '\n']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat the whole file as body
            return (FrontMatter::default(), content);
        };

        let yaml_block = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\r', '\n']);

        if yaml_block.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_block) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("malformed front-matter, degrading to empty metadata: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }
}
