//! Front-matter parsing
//!
//! Every content file may start with a YAML block delimited by `---` lines.
//! The block is deserialized into a fixed schema per entity type; keys the
//! schema does not know about are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ContentError, Result};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Custom deserializer that accepts any YAML scalar as text, so that
/// `name: 2024` or `icon: true` read as the strings they were written as
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarText)
}

/// [`lenient_string`] for fields where a missing value is the empty string
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

/// Metadata carried by a `_header.md` marker file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderMeta {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    pub order: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
}

/// Metadata carried by a `_category.md` marker file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryMeta {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    pub order: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    /// Only an explicit `false` hides the icon
    #[serde(default = "default_true")]
    pub show_icon_in_header: bool,
}

impl Default for CategoryMeta {
    fn default() -> Self {
        Self {
            name: None,
            description: String::new(),
            order: 0,
            icon: None,
            show_icon_in_header: true,
        }
    }
}

/// Front-matter of a blog post. `title` and `date` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// How a snippet is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetKind {
    #[default]
    Markdown,
    Interactive,
}

/// Front-matter of a snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: SnippetKind,
    #[serde(default)]
    pub asset_path: Option<String>,
}

/// A content file split into typed metadata and Markdown body
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    pub meta: T,
    pub body: String,
}

impl<T: DeserializeOwned> Document<T> {
    /// Read and parse a content file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::fs(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse file content; `path` is only used for error reporting
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let (yaml, body) = split(content);

        // A missing or empty block still goes through the schema so that
        // required fields are reported.
        let value: serde_yaml::Value = match yaml {
            Some(yaml) if !yaml.trim().is_empty() => {
                serde_yaml::from_str(yaml).map_err(|e| ContentError::parse(path, e))?
            }
            _ => serde_yaml::Value::Null,
        };
        let value = match value {
            serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
            other => other,
        };

        let meta = serde_yaml::from_value(value).map_err(|e| ContentError::parse(path, e))?;

        Ok(Self {
            meta,
            body: body.to_string(),
        })
    }
}

/// Split content into the raw YAML block (if any) and the body
fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = strip_fence(content) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    // No closing fence: the whole file is body
    (None, content)
}

/// Strip the opening `---` line, returning what follows it
fn strip_fence(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    if let Some(rest) = rest.strip_prefix("\r\n") {
        Some(rest)
    } else if let Some(rest) = rest.strip_prefix('\n') {
        Some(rest)
    } else if rest.trim().is_empty() {
        Some("")
    } else {
        None
    }
}
