//! Composer state machine tests — mode exclusivity, submit guards, and the
//! reset/restore semantics around an in-flight submission.

use chrono::{TimeZone, Utc};

use wakili::catalog;
use wakili::composer::{Composer, Mode, Resume};
use wakili::errors::AppError;
use wakili::pdf::{TextCapture, layout};

fn fixed_now() -> chrono::DateTime<chrono::Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

fn assert_validation(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::Validation(_)) => {}
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_new_composer_is_idle_with_one_empty_page() {
    let c = Composer::new();
    assert_eq!(*c.mode(), Mode::Idle);
    assert_eq!(c.pages(), &[String::new()]);
    assert!(c.chosen_file().is_none());
    assert!(c.template_id().is_none());
}

#[test]
fn test_choosing_a_file_clears_template_and_pages() {
    let mut c = Composer::new();
    let seed = catalog::seed_text("affidavit").expect("seed");
    c.choose_template("affidavit", "Affidavit", seed).expect("template");
    c.add_page().expect("add page");
    c.edit_page(1, "extra prose".to_string()).expect("edit");

    c.choose_file("scan.pdf", "application/pdf", b"bytes".to_vec())
        .expect("file");

    assert_eq!(*c.mode(), Mode::Uploading);
    assert!(c.template_id().is_none());
    assert_eq!(c.pages(), &[String::new()]);
    assert_eq!(c.chosen_file().expect("file kept").name, "scan.pdf");
}

#[test]
fn test_choosing_a_template_clears_the_file() {
    let mut c = Composer::new();
    c.choose_file("scan.pdf", "application/pdf", b"bytes".to_vec())
        .expect("file");

    c.choose_template("summons", "Summons", "seed text".to_string())
        .expect("template");

    assert_eq!(*c.mode(), Mode::Editing);
    assert!(c.chosen_file().is_none());
    assert_eq!(c.template_id(), Some("summons"));
    assert_eq!(c.pages(), &["seed text".to_string()]);
}

#[test]
fn test_page_editing_is_rejected_while_a_file_is_chosen() {
    let mut c = Composer::new();
    c.choose_file("scan.pdf", "application/pdf", b"bytes".to_vec())
        .expect("file");

    assert_validation(c.add_page());
    assert_validation(c.edit_page(0, "text".to_string()));
}

#[test]
fn test_edit_page_out_of_range_is_a_validation_error() {
    let mut c = Composer::new();
    assert_validation(c.edit_page(5, "text".to_string()));
}

#[test]
fn test_upload_guard_requires_a_file() {
    let mut c = Composer::new();
    assert_validation(c.begin_upload(Some(7), true));
    assert_eq!(*c.mode(), Mode::Idle, "failed guard must not change mode");
}

#[test]
fn test_upload_guard_requires_a_case_when_scoped() {
    let mut c = Composer::new();
    c.choose_file("scan.pdf", "application/pdf", b"bytes".to_vec())
        .expect("file");

    assert_validation(c.begin_upload(None, true));
    assert_eq!(*c.mode(), Mode::Uploading);

    // An explicit "general" choice lifts the requirement.
    let job = c.begin_upload(None, false).expect("general upload");
    assert_eq!(job.case_id, None);
    assert_eq!(job.file.name, "scan.pdf");
}

#[test]
fn test_generate_guard_rejects_an_all_blank_document() {
    let mut c = Composer::new();
    c.add_page().expect("add");
    c.edit_page(0, "   \n  ".to_string()).expect("edit");

    assert_validation(c.begin_generate(None, fixed_now()));
    assert_eq!(*c.mode(), Mode::Editing);
}

#[test]
fn test_generate_names_artifact_after_the_template() {
    let mut c = Composer::new();
    c.choose_template("affidavit", "Affidavit", "sworn text".to_string())
        .expect("template");

    let job = c.begin_generate(Some(7), fixed_now()).expect("generate");
    assert_eq!(job.document_name, "Affidavit.pdf");
    assert_eq!(job.case_id, Some(7));
}

#[test]
fn test_generate_without_template_uses_timestamp_name() {
    let mut c = Composer::new();
    c.edit_page(0, "free text".to_string()).expect("edit");

    let job = c.begin_generate(None, fixed_now()).expect("generate");
    assert_eq!(job.document_name, "document-20260314-092653.pdf");
}

#[test]
fn test_no_second_submission_while_one_is_in_flight() {
    let mut c = Composer::new();
    c.edit_page(0, "text".to_string()).expect("edit");
    c.begin_generate(None, fixed_now()).expect("first");

    assert_eq!(*c.mode(), Mode::Submitting(Resume::Editing));
    assert_validation(c.begin_generate(None, fixed_now()));
    assert_validation(c.add_page());
    assert_validation(c.choose_file("f.pdf", "application/pdf", vec![1]));
}

#[test]
fn test_success_resets_to_idle() {
    let mut c = Composer::new();
    c.edit_page(0, "text".to_string()).expect("edit");
    c.begin_generate(None, fixed_now()).expect("generate");

    c.finish(true);
    assert_eq!(*c.mode(), Mode::Idle);
    assert_eq!(c.pages(), &[String::new()]);
}

#[test]
fn test_failure_restores_the_pre_submit_state() {
    let mut c = Composer::new();
    c.edit_page(0, "keep me".to_string()).expect("edit");
    c.begin_generate(None, fixed_now()).expect("generate");

    c.finish(false);
    assert_eq!(*c.mode(), Mode::Editing);
    assert_eq!(c.pages(), &["keep me".to_string()]);

    let mut u = Composer::new();
    u.choose_file("scan.pdf", "application/pdf", b"bytes".to_vec())
        .expect("file");
    u.begin_upload(Some(7), true).expect("upload");
    u.finish(false);
    assert_eq!(*u.mode(), Mode::Uploading);
    assert_eq!(u.chosen_file().expect("file retained").name, "scan.pdf");
}

#[test]
fn test_generated_artifact_contains_seed_then_appended_page() {
    let mut c = Composer::new();
    let seed = catalog::seed_text("affidavit").expect("seed");
    c.choose_template("affidavit", "Affidavit", seed).expect("template");
    c.add_page().expect("add");
    c.edit_page(1, "FURTHER DEPOSITIONS of the second page".to_string())
        .expect("edit");

    let job = c.begin_generate(Some(7), fixed_now()).expect("generate");

    let mut capture = TextCapture::new();
    layout::render(&mut capture, &job.pages);
    let rendered = capture.joined();

    let seed_pos = rendered.find("AFFIDAVIT").expect("seed text rendered");
    let appended_pos = rendered
        .find("FURTHER DEPOSITIONS")
        .expect("appended page rendered");
    assert!(seed_pos < appended_pos, "seed text must precede appended page");
    assert!(capture.page_count() >= 2, "second page starts a new artifact page");
}
