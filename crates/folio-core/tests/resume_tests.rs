// Host-side tests for the resume text and status strings.

use folio_core::*;

#[test]
fn one_section_per_shape() {
    assert_eq!(RESUME_SECTIONS.len(), Shape::COUNT);
    assert_eq!(section(Shape::Education).title, "EDUCATION");
    assert_eq!(section(Shape::Skills).title, "SKILLS");
    assert_eq!(section(Shape::Projects).title, "PERSONAL PROJECTS");
    assert_eq!(section(Shape::Experience).title, "WORK EXPERIENCE");
    for s in &RESUME_SECTIONS {
        assert!(!s.lines.is_empty());
    }
}

#[test]
fn line_classification() {
    assert_eq!(LineKind::classify(""), LineKind::Blank);
    assert_eq!(LineKind::classify("- Built things"), LineKind::Bullet);
    assert_eq!(LineKind::classify("1. A University"), LineKind::Heading);
    assert_eq!(LineKind::classify("12. Twelfth"), LineKind::Heading);
    assert_eq!(LineKind::classify("(May 2025)"), LineKind::Plain);
    assert_eq!(LineKind::classify("2023 was busy"), LineKind::Plain);
}

#[test]
fn every_section_starts_with_a_heading() {
    for s in &RESUME_SECTIONS {
        assert_eq!(LineKind::classify(s.lines[0]), LineKind::Heading, "{}", s.title);
    }
}

#[test]
fn status_labels() {
    assert_eq!(
        status_label(Shape::Skills, true, false, false),
        "SKILLS (Auto-changing)"
    );
    assert_eq!(
        status_label(Shape::Skills, false, false, false),
        "SKILLS (Tap to toggle)"
    );
    assert_eq!(status_label(Shape::Skills, true, true, false), "SKILLS (Auto)");
    assert_eq!(status_label(Shape::Skills, false, true, false), "SKILLS");
    assert_eq!(status_label(Shape::Projects, true, false, true), "Morphing...");
}

#[test]
fn nav_hint_reports_position() {
    assert!(nav_hint(Shape::Projects, false).ends_with("Section 3 of 4"));
    assert!(nav_hint(Shape::Education, true).contains("Swipe"));
    assert!(nav_hint(Shape::Education, true).ends_with("Section 1 of 4"));
}
