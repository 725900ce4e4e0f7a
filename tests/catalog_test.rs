//! Template catalog tests — stable enumeration, deterministic seed text,
//! and placement replay onto a surface.

use wakili::catalog;
use wakili::errors::AppError;
use wakili::pdf::TextCapture;

#[test]
fn test_catalog_order_is_stable() {
    let ids: Vec<&str> = catalog::all().iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec![
            "affidavit",
            "summons",
            "contract",
            "witness-statement",
            "power-of-attorney"
        ]
    );
}

#[test]
fn test_every_template_has_content() {
    for template in catalog::all() {
        assert!(!template.name.is_empty());
        assert!(!template.description.is_empty());
        assert!(!template.pages.is_empty(), "{} has no pages", template.id);
        let seed = catalog::seed_text(template.id).expect("seed");
        assert!(!seed.trim().is_empty(), "{} seeds empty text", template.id);
    }
}

#[test]
fn test_seed_text_is_deterministic_and_ordered() {
    let first = catalog::seed_text("affidavit").expect("seed");
    let second = catalog::seed_text("affidavit").expect("seed");
    assert_eq!(first, second);

    // Fragments come out in placement call order, newline-separated.
    assert!(first.starts_with("AFFIDAVIT"));
    let heading = first.find("AFFIDAVIT").unwrap();
    let oath = first.find("make oath").expect("body text present");
    let jurat = first.find("Commissioner for Oaths").expect("jurat present");
    assert!(heading < oath && oath < jurat);
}

#[test]
fn test_unknown_template_is_not_found() {
    match catalog::seed_text("no-such-template") {
        Err(AppError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_render_replays_every_placement() {
    let template = catalog::find("summons").expect("summons");
    let mut capture = TextCapture::new();
    catalog::render(template, &mut capture);

    let placed: usize = template.pages.iter().map(|p| p.len()).sum();
    assert_eq!(capture.fragments().len(), placed);
    assert_eq!(capture.page_count(), template.pages.len());
}
