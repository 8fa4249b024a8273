//! Extraction collaborator: raw markup in, normalized page record out
//!
//! Everything in this module is a pure function of the parsed document; it
//! holds no state and drives no control flow. The crawl core only interprets
//! `PageRecord::links`; the rest of the structured data is pass-through
//! payload for the caller.

mod structured;
mod text;

use scraper::Html;
use serde::{Deserialize, Serialize};

/// Normalized output of fetching and extracting one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The canonical URL that was fetched
    pub url: String,

    /// Flattened, whitespace-collapsed page text (script/style excluded)
    pub text: String,

    /// Ordered (anchor text, raw href) pairs found on the page
    pub links: Vec<Link>,

    /// Structured fields not interpreted by the crawl core
    pub structure: StructuredData,
}

/// A hyperlink as it appears in the markup
///
/// `href` is the raw attribute value; canonicalization happens in the crawl
/// core against the URL of the page the link was found on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Structured fields extracted from a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredData {
    pub title: Option<String>,
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    pub lists: Vec<ItemList>,
    pub tables: Vec<Table>,
    pub forms: Vec<Form>,
    pub dropdowns: Vec<Dropdown>,
    pub emails: Vec<String>,
    pub images: Vec<Image>,
}

/// A heading element with its level (1 through 6)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Kind of an HTML list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ul,
    Ol,
}

/// An ordered or unordered list and its item texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    pub kind: ListKind,
    pub items: Vec<String>,
}

/// A table split into header cells and body rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A form and its input fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub action: String,
    pub method: String,
    pub inputs: Vec<FormInput>,
}

/// One input, textarea or select inside a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    /// The input type attribute, or the tag name for textarea/select
    pub kind: String,
    pub name: String,
    pub id: String,
    pub placeholder: String,
    pub value: String,
}

/// A select element and its options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub name: String,
    pub id: String,
    pub options: Vec<DropdownOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// An image reference with its alt text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Extracts a full page record from raw HTML
///
/// `url` is the canonical URL the markup was fetched from; it is recorded on
/// the result and used as the base for resolving image sources.
pub fn extract_page(html: &str, url: &str) -> PageRecord {
    let document = Html::parse_document(html);

    let links = structured::extract_links(&document);
    let text = text::flatten_text(&document);
    let structure = structured::extract_structured(&document, &text, url);

    PageRecord {
        url: url.to_string(),
        text,
        links,
        structure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_carries_url() {
        let record = extract_page("<html><body>hi</body></html>", "http://x.com/a");
        assert_eq!(record.url, "http://x.com/a");
        assert_eq!(record.text, "hi");
    }

    #[test]
    fn test_links_are_raw_hrefs() {
        let html = r#"<html><body><a href="/b">To B</a><a href="http://other.com/c">C</a></body></html>"#;
        let record = extract_page(html, "http://x.com/a");
        assert_eq!(
            record.links,
            vec![
                Link {
                    text: "To B".to_string(),
                    href: "/b".to_string()
                },
                Link {
                    text: "C".to_string(),
                    href: "http://other.com/c".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_page_yields_empty_record() {
        let record = extract_page("<html><body></body></html>", "http://x.com");
        assert!(record.text.is_empty());
        assert!(record.links.is_empty());
        assert_eq!(record.structure, StructuredData::default());
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = extract_page(
            r#"<html><head><title>T</title></head><body><p>hello</p></body></html>"#,
            "http://x.com",
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"url\":\"http://x.com\""));
        assert!(json.contains("\"title\":\"T\""));
    }
}
