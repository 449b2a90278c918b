//! Integration tests for interaction script parsing.

use voyage_cli::script::{ScriptError, parse_line, parse_script};
use voyage_dash::Event;
use voyage_model::WidgetId;

#[test]
fn parses_every_command() {
    let script = "\
# explore the scatter
goto /relationship

select x-axis-dropdown RoomService
clear y-axis-dropdown
";
    let events = parse_script(script).unwrap();
    assert_eq!(
        events,
        vec![
            Event::Navigate("/relationship".to_string()),
            Event::Select {
                widget: WidgetId::RelationshipX,
                value: Some("RoomService".to_string()),
            },
            Event::Select {
                widget: WidgetId::RelationshipY,
                value: None,
            },
        ]
    );
}

#[test]
fn goto_keeps_path_verbatim() {
    // Routing is exact, so odd paths must reach the router untouched.
    assert_eq!(
        parse_line(1, "goto /outcome/?x=1").unwrap(),
        Some(Event::Navigate("/outcome/?x=1".to_string()))
    );
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_line(1, "   ").unwrap(), None);
    assert_eq!(parse_line(2, "  # goto /").unwrap(), None);
}

#[test]
fn unknown_widget_is_rejected() {
    assert_eq!(
        parse_script("goto /\nselect planet-dropdown Earth").unwrap_err(),
        ScriptError::UnknownWidget {
            line: 2,
            widget: "planet-dropdown".to_string(),
        }
    );
}

#[test]
fn select_requires_a_value() {
    let error = parse_line(3, "select dist-dropdown").unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"line 3: 'select' is missing its value");
}

#[test]
fn unknown_command_is_rejected() {
    let error = parse_line(1, "navigate /").unwrap_err();
    insta::assert_snapshot!(
        error.to_string(),
        @"line 1: unknown command 'navigate' (expected goto, select, or clear)"
    );
}

#[test]
fn goto_requires_a_path() {
    assert!(matches!(
        parse_line(1, "goto"),
        Err(ScriptError::MissingArgument { what: "path", .. })
    ));
}
