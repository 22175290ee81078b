use chrono::{TimeZone, Utc};
use taskpad_core::{render, Priority, Task};

fn task(id: i64, text: &str, priority: Option<Priority>, completed: bool, secs: i64) -> Task {
    Task {
        id,
        text: text.to_string(),
        priority,
        completed,
        created_at: Utc.timestamp_opt(secs, 0).unwrap(),
    }
}

#[test]
fn render_empty_collection_signals_empty_state() {
    let view = render(&[]);

    assert!(view.empty_state);
    assert!(view.incomplete.is_empty());
    assert!(view.completed.is_empty());
    assert_eq!(view.separator_count, None);
    assert_eq!(view.total, 0);
    assert_eq!(view.pending_count, 0);
}

#[test]
fn render_orders_equal_priority_pending_tasks_newest_first() {
    let tasks = vec![
        task(1, "A", Some(Priority::High), false, 10),
        task(2, "B", Some(Priority::High), false, 20),
        task(3, "C", Some(Priority::Low), true, 5),
    ];

    let view = render(&tasks);

    let pending: Vec<_> = view.incomplete.iter().map(|item| item.id).collect();
    assert_eq!(pending, vec![2, 1]);
    let done: Vec<_> = view.completed.iter().map(|item| item.id).collect();
    assert_eq!(done, vec![3]);
    assert_eq!(view.separator_count, Some(1));
}

#[test]
fn render_ranks_pending_tasks_by_priority_before_recency() {
    let tasks = vec![
        task(1, "low but new", Some(Priority::Low), false, 100),
        task(2, "high but old", Some(Priority::High), false, 1),
        task(3, "medium", Some(Priority::Medium), false, 50),
    ];

    let view = render(&tasks);

    let pending: Vec<_> = view.incomplete.iter().map(|item| item.id).collect();
    assert_eq!(pending, vec![2, 3, 1]);
}

#[test]
fn render_treats_absent_priority_as_medium_without_mutating_input() {
    let tasks = vec![
        task(1, "no priority", None, false, 100),
        task(2, "low", Some(Priority::Low), false, 200),
    ];

    let view = render(&tasks);

    // Absent ranks as medium, so it beats low despite being older.
    assert_eq!(view.incomplete[0].id, 1);
    assert_eq!(view.incomplete[0].priority, Priority::Medium);
    assert_eq!(tasks[0].priority, None);
}

#[test]
fn render_orders_completed_tasks_earliest_created_first() {
    let tasks = vec![
        task(1, "done late", Some(Priority::Medium), true, 300),
        task(2, "done early", Some(Priority::Medium), true, 100),
        task(3, "done middle", Some(Priority::Medium), true, 200),
    ];

    let view = render(&tasks);

    assert!(!view.empty_state);
    assert!(view.incomplete.is_empty());
    assert_eq!(view.separator_count, None);
    let done: Vec<_> = view.completed.iter().map(|item| item.id).collect();
    assert_eq!(done, vec![2, 3, 1]);
}

#[test]
fn render_computes_aggregates_over_the_original_collection() {
    let tasks = vec![
        task(1, "pending high", Some(Priority::High), false, 1),
        task(2, "pending medium", Some(Priority::Medium), false, 2),
        task(3, "done high", Some(Priority::High), true, 3),
        task(4, "done low", Some(Priority::Low), true, 4),
    ];

    let view = render(&tasks);

    assert_eq!(view.total, 4);
    assert_eq!(view.completed_count, 2);
    assert_eq!(view.pending_count, 2);
    // Completed high-priority tasks do not count.
    assert_eq!(view.high_priority_pending, 1);
    assert_eq!(view.separator_count, Some(2));
}

#[test]
fn render_escapes_item_text_exactly_once() {
    let tasks = vec![task(
        1,
        "<script>alert('x')</script> & more",
        Some(Priority::Medium),
        false,
        1,
    )];

    let view = render(&tasks);

    assert_eq!(
        view.incomplete[0].text,
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"
    );
    // The underlying record keeps its raw text.
    assert_eq!(tasks[0].text, "<script>alert('x')</script> & more");
}

#[test]
fn render_omits_separator_when_nothing_is_completed() {
    let tasks = vec![
        task(1, "one", Some(Priority::Medium), false, 1),
        task(2, "two", Some(Priority::Medium), false, 2),
    ];

    let view = render(&tasks);

    assert_eq!(view.separator_count, None);
    assert!(view.completed.is_empty());
    assert_eq!(view.pending_count, 2);
}
