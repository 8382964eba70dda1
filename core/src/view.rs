//! Backend-neutral description of a rendered page

use crate::chart::Chart;
use crate::data::Table;
use crate::form::PatientForm;
use crate::router::Page;

/// One element of a page, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(String),
    Bullets(Vec<String>),
    Subheader(String),
    /// Neutral notice, drawn with the info accent
    Info(String),
    /// Positive notice, drawn with the success accent
    Success(String),
    Table(Table),
    Chart(Chart),
    /// Patient input form with its current values
    Form(PatientForm),
}

/// Everything one render pass produces for a page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub page: Page,
    pub icon: &'static str,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl PageView {
    pub fn new(page: Page, icon: &'static str, title: impl Into<String>) -> Self {
        Self {
            page,
            icon,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.push(Block::Text(text.into()))
    }

    pub fn subheader(self, text: impl Into<String>) -> Self {
        self.push(Block::Subheader(text.into()))
    }

    /// Title followed by every subheader
    pub fn headings(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.blocks.iter().filter_map(|b| match b {
                Block::Subheader(s) => Some(s.as_str()),
                _ => None,
            }))
            .collect()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart(c) => Some(c),
            _ => None,
        })
    }

    /// Whether any heading, text, bullet or notice contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        if self.title.contains(needle) {
            return true;
        }
        self.blocks.iter().any(|b| match b {
            Block::Text(s) | Block::Subheader(s) | Block::Info(s) | Block::Success(s) => {
                s.contains(needle)
            }
            Block::Bullets(items) => items.iter().any(|i| i.contains(needle)),
            _ => false,
        })
    }
}
