use taskdeck_core::{StoreError, Task, TaskAction, TaskFilter, TaskPatch, TaskStore};
use uuid::Uuid;

fn sample_task(title: &str, due_date: &str) -> Task {
    Task::new(title, "details", due_date)
}

#[test]
fn add_count_matches_adds_and_tasks_are_retrievable() {
    let mut store = TaskStore::new();
    let mut ids = Vec::new();

    for n in 0..5 {
        let task = sample_task(&format!("task {n}"), "2026-01-01");
        ids.push(store.add(task).unwrap());
    }

    assert_eq!(store.len(), 5);
    for (n, id) in ids.iter().enumerate() {
        let task = store.get(*id).expect("added task should be retrievable");
        assert_eq!(task.title, format!("task {n}"));
        assert_eq!(task.description, "details");
        assert_eq!(task.due_date, "2026-01-01");
        assert!(!task.completed);
    }
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = TaskStore::new();
    let first = store.add(sample_task("first", "2026-01-01")).unwrap();
    let second = store.add(sample_task("second", "2026-01-02")).unwrap();

    let held: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(held, vec![first, second]);
}

#[test]
fn add_rejects_duplicate_id_and_leaves_store_unchanged() {
    let mut store = TaskStore::new();
    let task = sample_task("original", "2026-01-01");
    let id = store.add(task.clone()).unwrap();

    let before = store.clone();
    let duplicate = Task::with_id(id, "imposter", "details", "2026-01-01");
    let err = store.add(duplicate).unwrap_err();

    assert_eq!(err, StoreError::DuplicateId(id));
    assert_eq!(store, before);
}

#[test]
fn add_rejects_invalid_task() {
    let mut store = TaskStore::new();
    let err = store.add(Task::new("", "details", "2026-01-01")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn edit_merges_only_provided_fields() {
    let mut store = TaskStore::new();
    let id = store.add(sample_task("draft", "2026-01-01")).unwrap();

    let patch = TaskPatch {
        title: Some("final".to_string()),
        ..TaskPatch::default()
    };
    store.edit(id, &patch).unwrap();

    let task = store.get(id).unwrap();
    assert_eq!(task.title, "final");
    assert_eq!(task.description, "details");
    assert_eq!(task.due_date, "2026-01-01");
}

#[test]
fn edit_with_current_values_is_idempotent() {
    let mut store = TaskStore::new();
    let id = store.add(sample_task("stable", "2026-01-01")).unwrap();

    let patch = TaskPatch {
        title: Some("stable".to_string()),
        description: Some("details".to_string()),
        due_date: Some("2026-01-01".to_string()),
        completed: Some(false),
    };

    store.edit(id, &patch).unwrap();
    let once = store.clone();
    store.edit(id, &patch).unwrap();
    assert_eq!(store, once);
}

#[test]
fn edit_missing_id_errors_and_leaves_store_unchanged() {
    let mut store = TaskStore::new();
    store.add(sample_task("only", "2026-01-01")).unwrap();
    let before = store.clone();

    let missing = Uuid::new_v4();
    let patch = TaskPatch {
        title: Some("x".to_string()),
        ..TaskPatch::default()
    };
    let err = store.edit(missing, &patch).unwrap_err();

    assert_eq!(err, StoreError::NotFound(missing));
    assert_eq!(store, before);
}

#[test]
fn edit_rejects_merge_that_blanks_a_required_field() {
    let mut store = TaskStore::new();
    let id = store.add(sample_task("keep", "2026-01-01")).unwrap();
    let before = store.clone();

    let patch = TaskPatch {
        title: Some("  ".to_string()),
        ..TaskPatch::default()
    };
    let err = store.edit(id, &patch).unwrap_err();

    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store, before);
}

#[test]
fn delete_is_idempotent() {
    let mut store = TaskStore::new();
    let id = store.add(sample_task("gone soon", "2026-01-01")).unwrap();

    assert!(store.delete(id));
    let after_first = store.clone();
    assert!(!store.delete(id));
    assert_eq!(store, after_first);
    assert!(store.is_empty());
}

#[test]
fn toggle_twice_is_an_involution() {
    let mut store = TaskStore::new();
    let id = store.add(sample_task("flip", "2026-01-01")).unwrap();

    assert!(store.toggle_complete(id).unwrap());
    assert!(!store.toggle_complete(id).unwrap());
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn toggle_missing_id_errors() {
    let mut store = TaskStore::new();
    let missing = Uuid::new_v4();
    assert_eq!(
        store.toggle_complete(missing).unwrap_err(),
        StoreError::NotFound(missing)
    );
}

#[test]
fn set_filter_replaces_selector() {
    let mut store = TaskStore::new();
    assert_eq!(store.filter(), TaskFilter::All);

    store.set_filter(TaskFilter::Overdue);
    assert_eq!(store.filter(), TaskFilter::Overdue);
}

#[test]
fn filter_parsing_rejects_unknown_names() {
    assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
    assert_eq!(" Pending ".parse::<TaskFilter>().unwrap(), TaskFilter::Pending);
    assert!("urgent".parse::<TaskFilter>().is_err());
    assert!("".parse::<TaskFilter>().is_err());
}

#[test]
fn apply_dispatches_every_action_kind() {
    let mut store = TaskStore::new();
    let task = sample_task("dispatched", "2026-01-01");
    let id = task.id;

    store.apply(TaskAction::Add(task)).unwrap();
    store
        .apply(TaskAction::Edit {
            id,
            patch: TaskPatch {
                description: Some("rewritten".to_string()),
                ..TaskPatch::default()
            },
        })
        .unwrap();
    store.apply(TaskAction::ToggleComplete(id)).unwrap();
    store.apply(TaskAction::SetFilter(TaskFilter::Completed)).unwrap();

    let held = store.get(id).unwrap();
    assert_eq!(held.description, "rewritten");
    assert!(held.completed);
    assert_eq!(store.filter(), TaskFilter::Completed);

    store.apply(TaskAction::Delete(id)).unwrap();
    assert!(store.is_empty());

    // Deleting again through the action path stays an error-free no-op.
    store.apply(TaskAction::Delete(id)).unwrap();
}
