//! Raw Notion pages, parsed into typed property values at the API boundary.
//!
//! Property types this service never reads collapse into
//! [`PropertyValue::Unsupported`]; missing optional fields default. The
//! accessors on [`Properties`] return `None` (or an empty slice) when a
//! property is absent or has a different type than expected.

use std::collections::HashMap;

use serde::Deserialize;

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
}

/// One row of a Notion database.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Properties(HashMap<String, PropertyValue>);

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    Status {
        #[serde(default)]
        status: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    People {
        #[serde(default)]
        people: Vec<Person>,
    },
    PhoneNumber {
        #[serde(default)]
        phone_number: Option<String>,
    },
    Url {
        #[serde(default)]
        url: Option<String>,
    },
    Files {
        #[serde(default)]
        files: Vec<FileObject>,
    },
    Date {
        #[serde(default)]
        date: Option<DateRange>,
    },
    CreatedTime {
        #[serde(default)]
        created_time: Option<String>,
    },
    Relation {
        #[serde(default)]
        relation: Vec<Reference>,
    },
    UniqueId {
        #[serde(default)]
        unique_id: Option<UniqueId>,
    },
    #[serde(other)]
    Unsupported,
}

/// A rich-text run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: Option<String>,
    #[serde(default)]
    pub text: Option<TextContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
}

impl RichText {
    /// Rendered text of the run. Falls back to the raw content for runs
    /// that carry no `plain_text`, like the echo of a create request.
    pub fn plain(&self) -> Option<&str> {
        self.plain_text
            .as_deref()
            .or_else(|| self.text.as_ref().map(|t| t.content.as_str()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub person: Option<PersonDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonDetail {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileObject {
    #[serde(default)]
    pub external: Option<ExternalFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UniqueId {
    #[serde(default)]
    pub number: Option<i64>,
}

impl Properties {
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn unique_id(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            PropertyValue::UniqueId { unique_id } => unique_id.as_ref()?.number,
            _ => None,
        }
    }

    /// First run of a title property.
    pub fn title(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::Title { title } => title.first()?.plain(),
            _ => None,
        }
    }

    /// First run of a rich-text property.
    pub fn rich_text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::RichText { rich_text } => rich_text.first()?.plain(),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            PropertyValue::Number { number } => *number,
            _ => None,
        }
    }

    pub fn select(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::Select { select } => select.as_ref().map(|s| s.name.as_str()),
            _ => None,
        }
    }

    pub fn status(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::Status { status } => status.as_ref().map(|s| s.name.as_str()),
            _ => None,
        }
    }

    pub fn multi_select(&self, name: &str) -> &[SelectOption] {
        match self.get(name) {
            Some(PropertyValue::MultiSelect { multi_select }) => multi_select,
            _ => &[],
        }
    }

    pub fn people(&self, name: &str) -> &[Person] {
        match self.get(name) {
            Some(PropertyValue::People { people }) => people,
            _ => &[],
        }
    }

    pub fn phone_number(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::PhoneNumber { phone_number } => phone_number.as_deref(),
            _ => None,
        }
    }

    pub fn url(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::Url { url } => url.as_deref(),
            _ => None,
        }
    }

    pub fn files(&self, name: &str) -> &[FileObject] {
        match self.get(name) {
            Some(PropertyValue::Files { files }) => files,
            _ => &[],
        }
    }

    pub fn date(&self, name: &str) -> Option<&DateRange> {
        match self.get(name)? {
            PropertyValue::Date { date } => date.as_ref(),
            _ => None,
        }
    }

    pub fn created_time(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::CreatedTime { created_time } => created_time.as_deref(),
            _ => None,
        }
    }

    pub fn relation(&self, name: &str) -> &[Reference] {
        match self.get(name) {
            Some(PropertyValue::Relation { relation }) => relation,
            _ => &[],
        }
    }
}
