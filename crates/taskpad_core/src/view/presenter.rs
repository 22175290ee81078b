//! Task list presenter.
//!
//! # Responsibility
//! - Stable-sort and partition the task collection into pending/completed
//!   sections with aggregate counters.
//! - HTML-escape task text exactly once, so view-model text is markup-safe.
//!
//! # Invariants
//! - The input collection is never mutated; this is a pure transform.
//! - Aggregates are computed over the original unsorted collection.
//! - `empty_state` is true only for a truly empty input; an all-completed
//!   collection still renders its completed section.

use crate::model::task::{Priority, Task, TaskId};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// One render-ready task row. `text` is already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemView {
    pub id: TaskId,
    pub text: String,
    /// Effective priority: absent on the record reads as medium.
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Partitioned, sorted, aggregate-annotated output for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskViewModel {
    /// Pending tasks, priority-ranked, newest first within a rank.
    pub incomplete: Vec<TaskItemView>,
    /// Completed tasks, priority-ranked, earliest created first within a
    /// rank (completion time is not tracked; creation time stands in).
    pub completed: Vec<TaskItemView>,
    /// Present only when both sections are non-empty; carries the
    /// completed-section length for the separator label.
    pub separator_count: Option<usize>,
    pub total: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    /// Pending tasks with effective priority high.
    pub high_priority_pending: usize,
    pub empty_state: bool,
}

/// Renders the task collection into a `TaskViewModel`.
///
/// Stateless; invoked after every store mutation.
pub fn render(tasks: &[Task]) -> TaskViewModel {
    if tasks.is_empty() {
        return TaskViewModel {
            empty_state: true,
            ..TaskViewModel::default()
        };
    }

    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| presentation_order(a, b));

    let mut incomplete = Vec::new();
    let mut completed = Vec::new();
    for task in ordered {
        let item = item_view(task);
        if task.completed {
            completed.push(item);
        } else {
            incomplete.push(item);
        }
    }

    let total = tasks.len();
    let completed_count = tasks.iter().filter(|task| task.completed).count();
    let high_priority_pending = tasks
        .iter()
        .filter(|task| !task.completed && task.effective_priority() == Priority::High)
        .count();

    let separator_count = if !incomplete.is_empty() && !completed.is_empty() {
        Some(completed.len())
    } else {
        None
    };

    TaskViewModel {
        incomplete,
        completed,
        separator_count,
        total,
        completed_count,
        pending_count: total - completed_count,
        high_priority_pending,
        empty_state: false,
    }
}

/// Total presentation order:
/// 1. incomplete before completed;
/// 2. priority rank descending;
/// 3. creation time — newest first among pending, earliest first among
///    completed.
fn presentation_order(a: &Task, b: &Task) -> Ordering {
    match a.completed.cmp(&b.completed) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    match b.priority_rank().cmp(&a.priority_rank()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    if a.completed {
        a.created_at.cmp(&b.created_at)
    } else {
        b.created_at.cmp(&a.created_at)
    }
}

fn item_view(task: &Task) -> TaskItemView {
    TaskItemView {
        id: task.id,
        text: escape_html(&task.text),
        priority: task.effective_priority(),
        completed: task.completed,
        created_at: task.created_at,
    }
}

/// Escapes text for direct insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#39;chips&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("buy milk"), "buy milk");
    }
}
