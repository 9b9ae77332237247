//! Queryable document tree over fetched markup
//!
//! Thin adapter over `scraper::Html` exposing the four capabilities the
//! extractors need: selector queries, text extraction, attribute extraction
//! and node removal. Text and attribute semantics follow jQuery-style
//! accessors: text concatenates every match, attributes come from the first.
//!
//! `scraper::Html` is not `Send`. Callers that cross an await point must pull
//! what they need out of the tree first and drop it.

use ego_tree::NodeId;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// Parsed HTML document
pub struct DocumentTree {
    html: Html,
}

impl DocumentTree {
    /// Parse a full HTML document. Malformed markup is recovered, never rejected.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Iterate over all elements matching `selector`, in document order
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// Check if at least one element matches
    #[must_use]
    pub fn exists(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }

    /// Concatenated text of every matching element (untrimmed)
    #[must_use]
    pub fn text(&self, selector: &Selector) -> String {
        self.html.select(selector).flat_map(|el| el.text()).collect()
    }

    /// Value of `name` on the first matching element
    #[must_use]
    pub fn attr(&self, selector: &Selector, name: &str) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// Detach every matching element (and its subtree) from the document
    ///
    /// Returns the number of removed elements.
    pub fn remove(&mut self, selector: &Selector) -> usize {
        // Collect first: detaching while the select iterator borrows the tree is not possible
        let ids: Vec<NodeId> = self.html.select(selector).map(|el| el.id()).collect();
        let mut removed = 0;
        for id in ids {
            if let Some(mut node) = self.html.tree.get_mut(id) {
                node.detach();
                removed += 1;
            }
        }
        removed
    }
}

/// Concatenated text of every element matching `selector` below `element`
#[must_use]
pub fn text_within(element: ElementRef<'_>, selector: &Selector) -> String {
    element.select(selector).flat_map(|el| el.text()).collect()
}

/// Value of `name` on the first element matching `selector` below `element`
#[must_use]
pub fn attr_within<'a>(element: ElementRef<'a>, selector: &Selector, name: &str) -> Option<&'a str> {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(name))
}
