use taskdeck_core::{ServiceError, TaskDraft, TaskFilter, TaskPatch, TaskService};
use uuid::Uuid;

fn draft(title: &str, due_date: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: "details".to_string(),
        due_date: due_date.to_string(),
    }
}

#[test]
fn add_then_toggle_leaves_one_completed_task() {
    let mut service = TaskService::new();
    let id = service
        .add_task(&TaskDraft {
            title: "A".to_string(),
            description: "d".to_string(),
            due_date: "2024-01-01".to_string(),
        })
        .unwrap();

    assert!(service.toggle_complete(id).unwrap());

    assert_eq!(service.task_count(), 1);
    let task = service.get_task(id).unwrap();
    assert!(task.completed);
    assert_eq!(task.title, "A");
}

#[test]
fn add_rejects_blank_drafts_without_touching_the_store() {
    let mut service = TaskService::new();

    let err = service.add_task(&draft("", "2026-01-01")).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let err = service.add_task(&draft("title", "someday")).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    assert_eq!(service.task_count(), 0);
}

#[test]
fn edit_missing_task_reports_not_found() {
    let mut service = TaskService::new();
    let missing = Uuid::new_v4();
    let patch = TaskPatch {
        title: Some("x".to_string()),
        ..TaskPatch::default()
    };

    let err = service.edit_task(missing, &patch).unwrap_err();
    assert!(matches!(err, ServiceError::TaskNotFound(id) if id == missing));
}

#[test]
fn delete_reports_whether_anything_was_removed() {
    let mut service = TaskService::new();
    let id = service.add_task(&draft("short-lived", "2026-01-01")).unwrap();

    assert!(service.delete_task(id));
    assert!(!service.delete_task(id));
    assert_eq!(service.task_count(), 0);
}

#[test]
fn visible_tasks_follow_the_active_filter_and_search() {
    let mut service = TaskService::new();
    service.add_task(&draft("pay rent", "2020-01-01")).unwrap();
    let trip = service.add_task(&draft("plan trip", "2099-01-01")).unwrap();
    let taxes = service.add_task(&draft("file taxes", "2021-06-30")).unwrap();
    service.toggle_complete(taxes).unwrap();

    service.set_filter(TaskFilter::Overdue);
    let overdue: Vec<_> = service
        .visible_tasks("", "2024-01-01")
        .iter()
        .map(|task| task.title.clone())
        .collect();
    assert_eq!(overdue, vec!["pay rent"]);

    service.set_filter(TaskFilter::Pending);
    let searched: Vec<_> = service
        .visible_tasks("TRIP", "2024-01-01")
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(searched, vec![trip]);
}

#[test]
fn filter_defaults_to_all() {
    let service = TaskService::new();
    assert_eq!(service.filter(), TaskFilter::All);
}
