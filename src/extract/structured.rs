//! Structured-field extraction
//!
//! Pulls the individual structured fields (title, headings, tables, forms,
//! emails and so on) out of a parsed document. Each extractor is independent;
//! a page missing a field simply yields an empty collection.

use crate::extract::{
    Dropdown, DropdownOption, Form, FormInput, Heading, Image, ItemList, Link, ListKind,
    StructuredData, Table,
};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Extracts all anchor links as (anchor text, raw href) pairs, in document order
pub fn extract_links(document: &Html) -> Vec<Link> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(Link {
                    text: element_text(&element),
                    href: href.to_string(),
                });
            }
        }
    }

    links
}

/// Extracts every structured field from a parsed document
///
/// `text` is the already-flattened page text (emails are found in it), and
/// `base_url` is the fetched URL used to resolve image sources.
pub fn extract_structured(document: &Html, text: &str, base_url: &str) -> StructuredData {
    StructuredData {
        title: extract_title(document),
        headings: extract_headings(document),
        paragraphs: extract_paragraphs(document),
        lists: extract_lists(document),
        tables: extract_tables(document),
        forms: extract_forms(document),
        dropdowns: extract_dropdowns(document),
        emails: extract_emails(text),
        images: extract_images(document, base_url),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element_text(&element))
        .filter(|title| !title.is_empty())
}

fn extract_headings(document: &Html) -> Vec<Heading> {
    let mut headings = Vec::new();

    for level in 1..=6u8 {
        if let Ok(selector) = Selector::parse(&format!("h{}", level)) {
            for element in document.select(&selector) {
                headings.push(Heading {
                    level,
                    text: element_text(&element),
                });
            }
        }
    }

    headings
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    let mut paragraphs = Vec::new();

    if let Ok(selector) = Selector::parse("p") {
        for element in document.select(&selector) {
            paragraphs.push(element_text(&element));
        }
    }

    paragraphs
}

fn extract_lists(document: &Html) -> Vec<ItemList> {
    let mut lists = Vec::new();

    let item_selector = match Selector::parse("li") {
        Ok(s) => s,
        Err(_) => return lists,
    };

    if let Ok(selector) = Selector::parse("ul, ol") {
        for element in document.select(&selector) {
            let kind = if element.value().name() == "ol" {
                ListKind::Ol
            } else {
                ListKind::Ul
            };

            let items = element
                .select(&item_selector)
                .map(|item| element_text(&item))
                .collect();

            lists.push(ItemList { kind, items });
        }
    }

    lists
}

fn extract_tables(document: &Html) -> Vec<Table> {
    let mut tables = Vec::new();

    let (table_sel, header_sel, row_sel, cell_sel) = match (
        Selector::parse("table"),
        Selector::parse("th"),
        Selector::parse("tr"),
        Selector::parse("td, th"),
    ) {
        (Ok(t), Ok(h), Ok(r), Ok(c)) => (t, h, r, c),
        _ => return tables,
    };

    for table in document.select(&table_sel) {
        let headers = table
            .select(&header_sel)
            .map(|cell| element_text(&cell))
            .collect();

        let mut rows = Vec::new();
        for row in table.select(&row_sel) {
            let cells: Vec<String> = row.select(&cell_sel).map(|cell| element_text(&cell)).collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        tables.push(Table { headers, rows });
    }

    tables
}

fn extract_forms(document: &Html) -> Vec<Form> {
    let mut forms = Vec::new();

    let (form_sel, input_sel) = match (
        Selector::parse("form"),
        Selector::parse("input, textarea, select"),
    ) {
        (Ok(f), Ok(i)) => (f, i),
        _ => return forms,
    };

    for form in document.select(&form_sel) {
        let inputs = form
            .select(&input_sel)
            .map(|field| {
                // Bare inputs default to type "text"; textarea/select report
                // their tag name as the kind.
                let kind = if field.value().name() == "input" {
                    field.value().attr("type").unwrap_or("text").to_string()
                } else {
                    field.value().name().to_string()
                };

                FormInput {
                    kind,
                    name: attr_or_empty(&field, "name"),
                    id: attr_or_empty(&field, "id"),
                    placeholder: attr_or_empty(&field, "placeholder"),
                    value: attr_or_empty(&field, "value"),
                }
            })
            .collect();

        forms.push(Form {
            action: attr_or_empty(&form, "action"),
            method: form.value().attr("method").unwrap_or("get").to_string(),
            inputs,
        });
    }

    forms
}

fn extract_dropdowns(document: &Html) -> Vec<Dropdown> {
    let mut dropdowns = Vec::new();

    let (select_sel, option_sel) = match (Selector::parse("select"), Selector::parse("option")) {
        (Ok(s), Ok(o)) => (s, o),
        _ => return dropdowns,
    };

    for select in document.select(&select_sel) {
        let options = select
            .select(&option_sel)
            .map(|option| DropdownOption {
                value: attr_or_empty(&option, "value"),
                text: element_text(&option),
                selected: option.value().attr("selected").is_some(),
            })
            .collect();

        dropdowns.push(Dropdown {
            name: attr_or_empty(&select, "name"),
            id: attr_or_empty(&select, "id"),
            options,
        });
    }

    dropdowns
}

/// Finds email addresses in the flattened page text, de-duplicated in
/// first-seen order
fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut emails = Vec::new();

    for found in EMAIL_PATTERN.find_iter(text) {
        let email = found.as_str().to_string();
        if seen.insert(email.clone()) {
            emails.push(email);
        }
    }

    emails
}

fn extract_images(document: &Html, base_url: &str) -> Vec<Image> {
    let mut images = Vec::new();

    let base = Url::parse(base_url).ok();

    if let Ok(selector) = Selector::parse("img[src]") {
        for element in document.select(&selector) {
            if let Some(src) = element.value().attr("src") {
                let resolved = base
                    .as_ref()
                    .and_then(|b| b.join(src).ok())
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| src.to_string());

                images.push(Image {
                    src: resolved,
                    alt: attr_or_empty(&element, "alt"),
                });
            }
        }
    }

    images
}

/// Collapsed inner text of an element
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn attr_or_empty(element: &ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_extract_title() {
        let doc = parse("<html><head><title>  Test Page </title></head><body></body></html>");
        assert_eq!(extract_title(&doc), Some("Test Page".to_string()));
    }

    #[test]
    fn test_no_title() {
        let doc = parse("<html><head></head><body></body></html>");
        assert_eq!(extract_title(&doc), None);
    }

    #[test]
    fn test_extract_links_keeps_raw_hrefs() {
        let doc = parse(r#"<html><body><a href="/rel">Rel</a><a href="javascript:void(0)">JS</a></body></html>"#);
        let links = extract_links(&doc);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "/rel");
        assert_eq!(links[1].href, "javascript:void(0)");
    }

    #[test]
    fn test_extract_headings_with_levels() {
        let doc = parse("<html><body><h1>One</h1><h2>Two</h2><h2>Other</h2></body></html>");
        let headings = extract_headings(&doc);
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], Heading { level: 1, text: "One".to_string() });
        assert_eq!(headings[1].level, 2);
    }

    #[test]
    fn test_extract_paragraphs() {
        let doc = parse("<html><body><p>First</p><p>  Second  </p></body></html>");
        assert_eq!(extract_paragraphs(&doc), vec!["First", "Second"]);
    }

    #[test]
    fn test_extract_lists() {
        let doc = parse("<html><body><ul><li>a</li><li>b</li></ul><ol><li>c</li></ol></body></html>");
        let lists = extract_lists(&doc);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].kind, ListKind::Ul);
        assert_eq!(lists[0].items, vec!["a", "b"]);
        assert_eq!(lists[1].kind, ListKind::Ol);
    }

    #[test]
    fn test_extract_tables() {
        let doc = parse(
            "<html><body><table>\
             <tr><th>Name</th><th>Age</th></tr>\
             <tr><td>Ada</td><td>36</td></tr>\
             </table></body></html>",
        );
        let tables = extract_tables(&doc);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, vec!["Name", "Age"]);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].rows[1], vec!["Ada", "36"]);
    }

    #[test]
    fn test_extract_forms() {
        let doc = parse(
            r#"<html><body><form action="/search" method="post">
               <input type="text" name="q" placeholder="Query">
               <input name="untyped">
               <textarea name="notes"></textarea>
               </form></body></html>"#,
        );
        let forms = extract_forms(&doc);
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].action, "/search");
        assert_eq!(forms[0].method, "post");
        assert_eq!(forms[0].inputs.len(), 3);
        assert_eq!(forms[0].inputs[0].kind, "text");
        assert_eq!(forms[0].inputs[0].name, "q");
        assert_eq!(forms[0].inputs[1].kind, "text");
        assert_eq!(forms[0].inputs[2].kind, "textarea");
    }

    #[test]
    fn test_form_method_defaults_to_get() {
        let doc = parse(r#"<html><body><form action="/go"></form></body></html>"#);
        assert_eq!(extract_forms(&doc)[0].method, "get");
    }

    #[test]
    fn test_extract_dropdowns() {
        let doc = parse(
            r#"<html><body><select name="lang" id="lang-picker">
               <option value="en" selected>English</option>
               <option value="fr">French</option>
               </select></body></html>"#,
        );
        let dropdowns = extract_dropdowns(&doc);
        assert_eq!(dropdowns.len(), 1);
        assert_eq!(dropdowns[0].name, "lang");
        assert_eq!(dropdowns[0].options.len(), 2);
        assert!(dropdowns[0].options[0].selected);
        assert!(!dropdowns[0].options[1].selected);
    }

    #[test]
    fn test_extract_emails_deduplicated_in_order() {
        let emails = extract_emails("contact a@x.com or b@y.org, again a@x.com");
        assert_eq!(emails, vec!["a@x.com", "b@y.org"]);
    }

    #[test]
    fn test_extract_images_resolved_against_base() {
        let doc = parse(r#"<html><body><img src="/logo.png" alt="Logo"></body></html>"#);
        let images = extract_images(&doc, "http://x.com/page");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "http://x.com/logo.png");
        assert_eq!(images[0].alt, "Logo");
    }

    #[test]
    fn test_image_with_unresolvable_base_kept_raw() {
        let doc = parse(r#"<html><body><img src="logo.png"></body></html>"#);
        let images = extract_images(&doc, "not a url");
        assert_eq!(images[0].src, "logo.png");
        assert_eq!(images[0].alt, "");
    }
}
