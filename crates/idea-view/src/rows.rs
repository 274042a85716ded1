//! Row View-Models
//!
//! Turns ideas into plain-text table rows, independent of any DOM.

use crate::filter::filter_ideas;
use crate::format::{fmt_date, safe_text, DateRenderer};
use crate::models::Idea;

/// One table row. Every cell is literal text, never markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaRow {
    pub id: String,
    pub text: String,
    pub created: String,
}

impl IdeaRow {
    fn from_idea<R: DateRenderer + ?Sized>(idea: &Idea, renderer: &R) -> Self {
        Self {
            id: idea.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            text: safe_text(idea.idea_text.as_deref()),
            created: fmt_date(idea.created_at.as_deref().unwrap_or_default(), renderer),
        }
    }
}

/// Rows for `ideas`, in the order given
pub fn render_rows<'a, I, R>(ideas: I, renderer: &R) -> Vec<IdeaRow>
where
    I: IntoIterator<Item = &'a Idea>,
    R: DateRenderer + ?Sized,
{
    ideas
        .into_iter()
        .map(|idea| IdeaRow::from_idea(idea, renderer))
        .collect()
}

/// The dashboard view: rows of `all` filtered by `raw_query`
pub fn visible_rows<R: DateRenderer + ?Sized>(
    all: &[Idea],
    raw_query: &str,
    renderer: &R,
) -> Vec<IdeaRow> {
    render_rows(filter_ideas(all, raw_query), renderer)
}
