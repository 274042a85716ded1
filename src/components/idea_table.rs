//! Idea Table Component
//!
//! Read-only table of idea rows.

use idea_view::IdeaRow;
use leptos::prelude::*;

/// Table body is rebuilt from `rows` on every change.
///
/// Cells are text nodes only, so idea content can never become markup.
#[component]
pub fn IdeaTable(#[prop(into)] rows: Signal<Vec<IdeaRow>>) -> impl IntoView {
    view! {
        <table class="ideas-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Idea"</th>
                    <th>"Created"</th>
                </tr>
            </thead>
            <tbody id="tbody">
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td>{row.id}</td>
                                <td>{row.text}</td>
                                <td class="small">{row.created}</td>
                            </tr>
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
