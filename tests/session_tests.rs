mod common;
use common::memory_pool;

use timetracker::config::IdPolicy;
use timetracker::core::project::ProjectLogic;
use timetracker::core::session::SessionLogic;
use timetracker::core::summary::SummaryLogic;
use timetracker::db::pool::DbPool;
use timetracker::errors::AppError;
use timetracker::models::project::Project;

fn seed_projects(pool: &DbPool) {
    ProjectLogic::add(pool, "P-100", "Website").expect("add project");
    ProjectLogic::add(pool, "P-200", "Backend").expect("add project");
}

#[test]
fn test_add_session_computes_fractional_hours() {
    let pool = memory_pool();
    seed_projects(&pool);

    let row = SessionLogic::add(&pool, "1 - P-100: Website", "2025-01-02", "09:00", "17:30")
        .expect("add session");

    assert_eq!(row.id, 1);
    assert_eq!(row.project, "Website");
    assert_eq!(row.date, "2025-01-02");
    assert_eq!(row.start, "09:00");
    assert_eq!(row.end, "17:30");
    assert_eq!(row.duration, 8.5);
}

#[test]
fn test_add_session_rejects_end_not_after_start() {
    let pool = memory_pool();
    seed_projects(&pool);

    let equal = SessionLogic::add(&pool, "Website", "2025-01-02", "09:00", "09:00");
    assert!(matches!(equal, Err(AppError::Order(_))));

    let before = SessionLogic::add(&pool, "Website", "2025-01-02", "17:00", "09:00");
    assert!(matches!(before, Err(AppError::Order(_))));

    assert!(SessionLogic::list(&pool).expect("list").is_empty());
}

#[test]
fn test_add_session_validation_order() {
    let pool = memory_pool();
    seed_projects(&pool);

    let blank = SessionLogic::add(&pool, "", "2025-01-02", "09:00", "10:00");
    assert!(matches!(blank, Err(AppError::Validation(_))));

    let blank_time = SessionLogic::add(&pool, "Website", "2025-01-02", "  ", "10:00");
    assert!(matches!(blank_time, Err(AppError::Validation(_))));

    let bad_date = SessionLogic::add(&pool, "Website", "02/01/2025", "09:00", "10:00");
    assert!(matches!(bad_date, Err(AppError::Format(_))));

    let bad_time = SessionLogic::add(&pool, "Website", "2025-01-02", "9am", "10:00");
    assert!(matches!(bad_time, Err(AppError::Format(_))));

    // Format problems are reported before an unknown project.
    let both = SessionLogic::add(&pool, "Nope", "2025-01-02", "25:00", "10:00");
    assert!(matches!(both, Err(AppError::Format(_))));

    let unknown = SessionLogic::add(&pool, "Nope", "2025-01-02", "09:00", "10:00");
    assert!(matches!(unknown, Err(AppError::Lookup(_))));

    assert!(SessionLogic::list(&pool).expect("list").is_empty());
}

#[test]
fn test_project_resolution_forms() {
    let pool = memory_pool();
    seed_projects(&pool);

    let by_label = SessionLogic::add(&pool, "2 - P-200: Backend", "2025-01-02", "09:00", "10:00")
        .expect("label");
    assert_eq!(by_label.project, "Backend");

    let by_name = SessionLogic::add(&pool, "Website", "2025-01-02", "09:00", "10:00")
        .expect("name");
    assert_eq!(by_name.project, "Website");

    let by_id = SessionLogic::add(&pool, "2", "2025-01-02", "09:00", "10:00").expect("id");
    assert_eq!(by_id.project, "Backend");

    // A label whose id does not exist is not accepted.
    let stale = SessionLogic::add(&pool, "9 - P-900: Gone", "2025-01-02", "09:00", "10:00");
    assert!(matches!(stale, Err(AppError::Lookup(_))));
}

#[test]
fn test_project_add_requires_both_fields() {
    let pool = memory_pool();

    assert!(matches!(
        ProjectLogic::add(&pool, "  ", "Website"),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        ProjectLogic::add(&pool, "P-100", ""),
        Err(AppError::Validation(_))
    ));
    assert!(ProjectLogic::list(&pool).expect("list").is_empty());

    let p = ProjectLogic::add(&pool, " P-100 ", " Website ").expect("add");
    assert_eq!(p.number, "P-100");
    assert_eq!(p.name, "Website");
}

#[test]
fn test_project_label_round_trip() {
    let pool = memory_pool();
    seed_projects(&pool);

    let projects = ProjectLogic::list(&pool).expect("list");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].label(), "1 - P-100: Website");

    for p in &projects {
        assert_eq!(Project::id_from_label(&p.label()), Some(p.id));
    }
    assert_eq!(Project::id_from_label("Website"), None);
    assert_eq!(Project::id_from_label("x - P-1: Bad"), None);
}

#[test]
fn test_delete_without_selection() {
    let pool = memory_pool();
    seed_projects(&pool);
    SessionLogic::add(&pool, "Website", "2025-01-02", "09:00", "10:00").expect("add");

    let err = SessionLogic::delete(&pool, None, IdPolicy::Contiguous);
    assert!(matches!(err, Err(AppError::Selection(_))));
    assert_eq!(SessionLogic::list(&pool).expect("list").len(), 1);

    let missing = SessionLogic::delete(&pool, Some(42), IdPolicy::Contiguous);
    assert!(matches!(missing, Err(AppError::Lookup(_))));
}

#[test]
fn test_delete_renumbers_contiguously() {
    let pool = memory_pool();
    seed_projects(&pool);
    SessionLogic::add(&pool, "Website", "2025-01-02", "08:00", "09:00").expect("add");
    SessionLogic::add(&pool, "Website", "2025-01-03", "09:00", "10:00").expect("add");
    SessionLogic::add(&pool, "Backend", "2025-01-04", "10:00", "11:00").expect("add");

    SessionLogic::delete(&pool, Some(2), IdPolicy::Contiguous).expect("delete");

    let rows = SessionLogic::list(&pool).expect("list");
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(rows[0].date, "2025-01-02");
    // The former session 3 keeps its data under its new id.
    assert_eq!(rows[1].date, "2025-01-04");
    assert_eq!(rows[1].project, "Backend");

    // The next insert continues after the renumbered range.
    let next = SessionLogic::add(&pool, "Website", "2025-01-05", "10:00", "11:00").expect("add");
    assert_eq!(next.id, 3);
}

#[test]
fn test_delete_keeps_gaps_with_monotonic_ids() {
    let pool = memory_pool();
    seed_projects(&pool);
    SessionLogic::add(&pool, "Website", "2025-01-02", "08:00", "09:00").expect("add");
    SessionLogic::add(&pool, "Website", "2025-01-03", "09:00", "10:00").expect("add");
    SessionLogic::add(&pool, "Backend", "2025-01-04", "10:00", "11:00").expect("add");

    SessionLogic::delete(&pool, Some(2), IdPolicy::Monotonic).expect("delete");

    let ids: Vec<i64> = SessionLogic::list(&pool)
        .expect("list")
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    // Deleting the highest id does not free it for the next session.
    SessionLogic::delete(&pool, Some(3), IdPolicy::Monotonic).expect("delete");
    let next = SessionLogic::add(&pool, "Website", "2025-01-05", "10:00", "11:00").expect("add");
    assert_eq!(next.id, 4);

    let ids: Vec<i64> = SessionLogic::list(&pool)
        .expect("list")
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn test_contiguous_ids_continue_after_deleting_highest() {
    let pool = memory_pool();
    seed_projects(&pool);
    SessionLogic::add(&pool, "Website", "2025-01-02", "08:00", "09:00").expect("add");
    SessionLogic::add(&pool, "Website", "2025-01-03", "09:00", "10:00").expect("add");
    SessionLogic::add(&pool, "Backend", "2025-01-04", "10:00", "11:00").expect("add");

    SessionLogic::delete(&pool, Some(3), IdPolicy::Contiguous).expect("delete");
    let next = SessionLogic::add(&pool, "Website", "2025-01-05", "10:00", "11:00").expect("add");
    assert_eq!(next.id, 3);
}

#[test]
fn test_summary_totals_per_project() {
    let pool = memory_pool();
    seed_projects(&pool);
    ProjectLogic::add(&pool, "P-300", "Idle").expect("add project");

    SessionLogic::add(&pool, "Backend", "2025-02-10", "09:00", "11:00").expect("add");
    SessionLogic::add(&pool, "Backend", "2025-03-05", "13:00", "16:15").expect("add");
    SessionLogic::add(&pool, "Website", "2025-01-02", "09:00", "17:30").expect("add");

    let summary = SummaryLogic::summarize(&pool).expect("summary");
    assert_eq!(summary.len(), 2);

    // Ordered by project name; projects without sessions are absent.
    assert_eq!(summary[0].project, "Backend");
    assert_eq!(summary[0].total_hours, 5.25);
    assert_eq!(summary[1].project, "Website");
    assert_eq!(summary[1].total_hours, 8.5);
    assert!(summary.iter().all(|s| s.project != "Idle"));
}

#[test]
fn test_deleted_session_leaves_summary() {
    let pool = memory_pool();
    seed_projects(&pool);
    SessionLogic::add(&pool, "Website", "2025-01-02", "09:00", "11:00").expect("add");
    SessionLogic::add(&pool, "Backend", "2025-01-02", "11:00", "12:00").expect("add");

    SessionLogic::delete(&pool, Some(1), IdPolicy::Contiguous).expect("delete");

    let summary = SummaryLogic::summarize(&pool).expect("summary");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].project, "Backend");
    assert_eq!(summary[0].total_hours, 1.0);
}
