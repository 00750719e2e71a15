use crate::error::{AgoError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A registered document: the base name of the file it was copied from and
/// the id of the directory holding the copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Id")]
    pub id: u64,
}

impl Document {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// Contents of the document-info file.
///
/// `docs` keeps insertion order, which is also the listing order.
/// `next_id` only ever grows, so ids of removed documents are never handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsInfo {
    // Field names follow the existing on-disk format
    #[serde(rename = "Docs", default, deserialize_with = "null_as_empty")]
    pub docs: Vec<Document>,
    #[serde(rename = "Next_id", default)]
    pub next_id: u64,
}

// Info files written before the first add may carry `"Docs":null`
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Document>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Document>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DocumentsInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: u64) -> Option<&Document> {
        self.docs.iter().find(|doc| doc.id == id)
    }

    /// The value `next_id` takes once the current id is handed out.
    pub fn following_id(&self) -> Result<u64> {
        self.next_id
            .checked_add(1)
            .ok_or(AgoError::IdsExhausted(self.next_id))
    }

    /// Appends a record under the current `next_id` and advances the counter.
    pub fn push(&mut self, name: impl Into<String>) -> Result<Document> {
        let following = self.following_id()?;
        let doc = Document::new(name, self.next_id);
        self.next_id = following;
        self.docs.push(doc.clone());
        Ok(doc)
    }

    /// Drops the record with `id`, keeping the relative order of the rest.
    pub fn remove(&mut self, id: u64) -> Option<Document> {
        let idx = self.docs.iter().position(|doc| doc.id == id)?;
        Some(self.docs.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut info = DocumentsInfo::new();
        assert_eq!(info.push("a.txt").unwrap().id, 0);
        assert_eq!(info.push("b.txt").unwrap().id, 1);
        assert_eq!(info.next_id, 2);
    }

    #[test]
    fn remove_keeps_order_and_counter() {
        let mut info = DocumentsInfo::new();
        info.push("a.txt").unwrap();
        info.push("b.txt").unwrap();
        info.push("c.txt").unwrap();

        let removed = info.remove(1).unwrap();
        assert_eq!(removed.name, "b.txt");
        let names: Vec<_> = info.docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "c.txt"]);
        assert_eq!(info.next_id, 3);
        assert!(info.remove(1).is_none());
    }

    #[test]
    fn push_refuses_to_wrap_the_counter() {
        let mut info: DocumentsInfo =
            serde_json::from_str(r#"{"Docs":[],"Next_id":18446744073709551615}"#).unwrap();

        assert!(matches!(
            info.push("a.txt"),
            Err(AgoError::IdsExhausted(u64::MAX))
        ));
        assert!(info.docs.is_empty());
        assert_eq!(info.next_id, u64::MAX);
    }

    #[test]
    fn uses_capitalized_field_names() {
        let mut info = DocumentsInfo::new();
        info.push("a.txt").unwrap();
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"Docs":[{"Name":"a.txt","Id":0}],"Next_id":1}"#);
    }

    #[test]
    fn accepts_null_docs_from_empty_store() {
        let info: DocumentsInfo = serde_json::from_str(r#"{"Docs":null,"Next_id":4}"#).unwrap();
        assert!(info.docs.is_empty());
        assert_eq!(info.next_id, 4);
    }

    #[test]
    fn displays_as_id_and_name() {
        assert_eq!(Document::new("notes.txt", 7).to_string(), "7: notes.txt");
    }
}
