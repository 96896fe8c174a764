//! Roadmap section: checklist columns revealed on first scroll into view.

use leptos::prelude::*;

use super::{
    class_list, HeadingLevel, Icon, PageSectionContainer, SectionTextHeader, TextSnippet,
    ICON_CHECK_CIRCLE,
};
use crate::motion::RevealTransition;
use crate::types::{TodoItem, TodoList, TodoListContent};
use crate::PageAssets;

/// Whether the list at zero-based `index` is right-aligned.
///
/// Columns alternate starting from the right so the outer edges of a
/// two-column layout mirror each other.
pub fn aligned_right(index: usize) -> bool {
    index % 2 == 0
}

fn alignment_class(index: usize) -> &'static str {
    if aligned_right(index) {
        "align-right"
    } else {
        "align-left"
    }
}

/// Two or more checklists side by side over a star backdrop.
///
/// The columns container is a one-shot reveal target (see
/// [`crate::motion`]); items carry their staggered delay inline, counted in
/// document order across all columns.
#[component]
pub fn PageSectionTodoList(
    content: TodoListContent,
    #[prop(optional)] assets: PageAssets,
) -> impl IntoView {
    let TodoListContent {
        title,
        subtitle,
        lists,
    } = content;
    let timing = RevealTransition::TODO_ITEMS;
    let backdrop = format!("background-image: url('{}');", assets.stars_background);

    let mut first_item = 0;
    let columns = lists
        .into_iter()
        .enumerate()
        .map(|(index, list)| {
            let first = first_item;
            first_item += list.items.len();
            view! { <TodoColumn list=list index=index first_item=first timing=timing /> }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="todo-section" style=backdrop>
            <SectionTextHeader
                id="next"
                title=title
                subtitle=subtitle
                big_subtitle=true
                big_text=true
                centered=true
            />
            <PageSectionContainer>
                <div class="todo-lists reveal" data-reveal="once">
                    {columns}
                </div>
            </PageSectionContainer>
        </section>
    }
}

/// One titled checklist column.
#[component]
fn TodoColumn(
    list: TodoList,
    index: usize,
    first_item: usize,
    timing: RevealTransition,
) -> impl IntoView {
    let align = alignment_class(index);
    let title_class = class_list([("todo-title", true), (align, true)]);
    let items_class = class_list([("todo-items", true), (align, true)]);

    view! {
        <div class="todo-list">
            <TextSnippet class=title_class title=list.title title_level=HeadingLevel::H3 />
            <div class=items_class>
                {list
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(offset, item)| {
                        let style = timing.item_style(first_item + offset);
                        view! { <TodoEntry item=item style=style /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// A checklist entry: optional badge, text, completion overlay.
#[component]
fn TodoEntry(item: TodoItem, style: String) -> impl IntoView {
    let TodoItem {
        text,
        label,
        complete,
    } = item;
    let content_class = class_list([("todo-content", true), ("complete", complete)]);

    view! {
        <div class="todo-item" data-reveal-item="" style=style>
            {(!label.is_empty()).then(move || view! { <div class="todo-label">{label}</div> })}
            <div class=content_class>{text}</div>
            {complete
                .then(|| {
                    view! {
                        <div class="todo-check" role="img" aria-label="Completed">
                            <Icon path=ICON_CHECK_CIRCLE size="32" />
                        </div>
                    }
                })}
        </div>
    }
}
