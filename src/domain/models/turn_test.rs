use super::Author;
use super::SourceRef;
use super::Turn;
use super::TurnKind;

#[test]
fn it_executes_new() {
    let turn = Turn::new(Author::Johar, "Johar! Welcome.");
    assert_eq!(turn.author, Author::Johar);
    assert_eq!(turn.author.to_string(), "Johar");
    assert_eq!(turn.text, "Johar! Welcome.".to_string());
    assert_eq!(turn.kind, TurnKind::Normal);
    assert!(turn.sources.is_empty());
    assert!(!turn.id.is_empty());
}

#[test]
fn it_executes_new_replacing_tabs() {
    let turn = Turn::new(Author::Johar, "\t\tWelcome.");
    assert_eq!(turn.text, "    Welcome.".to_string());
}

#[test]
fn it_executes_new_with_kind() {
    let turn = Turn::new_with_kind(Author::Johar, TurnKind::Error, "It broke!");
    assert_eq!(turn.kind(), TurnKind::Error);
    assert_eq!(turn.text, "It broke!".to_string());
}

#[test]
fn it_generates_unique_ids() {
    let first = Turn::new(Author::User, "Netarhat");
    let second = Turn::new(Author::User, "Netarhat");
    assert_ne!(first.id, second.id);
}

#[test]
fn it_attaches_sources() {
    let turn = Turn::new(Author::Model, "Dassam Falls is near Ranchi.").with_sources(vec![
        SourceRef {
            uri: "https://tourism.jharkhand.gov.in/dassam".to_string(),
            title: "Dassam Falls".to_string(),
        },
    ]);

    assert_eq!(turn.sources.len(), 1);
    assert_eq!(turn.sources[0].title, "Dassam Falls");
}

#[test]
fn it_wraps_long_lines() {
    let turn = Turn::new(
        Author::Model,
        "Netarhat is a beautiful hill station famous for sunrises",
    );
    let lines = turn.as_string_lines(20);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.len() <= 20);
    }
    assert_eq!(
        lines.join(" "),
        "Netarhat is a beautiful hill station famous for sunrises"
    );
}

#[test]
fn it_keeps_blank_lines_as_spacers() {
    let turn = Turn::new(Author::Model, "Day 1: Ranchi\n\nDay 2: Netarhat");
    let lines = turn.as_string_lines(80);

    assert_eq!(lines, vec!["Day 1: Ranchi", " ", "Day 2: Netarhat"]);
}
