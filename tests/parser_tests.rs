use worklog2jira::core::date::normalize_date;
use worklog2jira::core::issue::parse_issue;
use worklog2jira::core::reader::read_records;
use worklog2jira::core::record::{RecordParser, parse_minutes};
use worklog2jira::models::{RawRecord, WorklogEntry};

#[test]
fn test_issue_with_description() {
    let issue = parse_issue("ABC-123 fix bug");
    assert_eq!(issue.number.as_deref(), Some("ABC-123"));
    assert_eq!(issue.description, "fix bug");
}

#[test]
fn test_issue_description_is_trimmed() {
    let issue = parse_issue("XXX-12345   review merge request  ");
    assert_eq!(issue.number.as_deref(), Some("XXX-12345"));
    assert_eq!(issue.description, "review merge request");
}

#[test]
fn test_issue_prefix_allows_digits() {
    let issue = parse_issue("B2B-7: pricing page");
    assert_eq!(issue.number.as_deref(), Some("B2B-7"));
    assert_eq!(issue.description, ": pricing page");
}

#[test]
fn test_issue_leading_text_is_dropped() {
    let issue = parse_issue("meeting about PROJ-42 roadmap");
    assert_eq!(issue.number.as_deref(), Some("PROJ-42"));
    assert_eq!(issue.description, "roadmap");
}

#[test]
fn test_issue_number_needs_ascii_digits() {
    let issue = parse_issue("ABC-١٢٣ fix bug");
    assert_eq!(issue.number, None);
    assert_eq!(issue.description, "ABC-١٢٣ fix bug");
}

#[test]
fn test_issue_without_description() {
    let issue = parse_issue("ABC-9");
    assert_eq!(issue.number.as_deref(), Some("ABC-9"));
    assert_eq!(issue.description, "");
}

#[test]
fn test_no_issue_keeps_text_unchanged() {
    for text in ["  lunch with the team ", "abc-123 lowercase", "A-1 too short", ""] {
        let issue = parse_issue(text);
        assert_eq!(issue.number, None, "no key expected in {text:?}");
        assert_eq!(issue.description, text);
    }
}

#[test]
fn test_normalize_two_digit_year() {
    assert_eq!(normalize_date("27/01/16"), "2016-01-27");
}

#[test]
fn test_normalize_keeps_four_digit_year_and_padding() {
    assert_eq!(normalize_date("3/2/2024"), "2024-2-3");
    assert_eq!(normalize_date(" 01/12/2023 "), "2023-12-01");
}

#[test]
fn test_normalize_is_not_idempotent() {
    let once = normalize_date("27/01/16");
    assert_ne!(normalize_date(&once), once);
}

#[test]
fn test_record_parser_date_marker_then_activity() {
    let rows = vec![
        RawRecord::new("", "27/01/16"),
        RawRecord::new("ABC-123 fix bug", "30"),
    ];

    let worklog = RecordParser::new().parse_all(&rows);

    assert_eq!(
        worklog,
        vec![WorklogEntry::new(
            Some("2016-01-27".to_string()),
            Some("ABC-123".to_string()),
            "fix bug",
            30
        )]
    );
}

#[test]
fn test_record_parser_marker_only_affects_following_rows() {
    let rows = vec![
        RawRecord::new("ABC-1 before any date", "10"),
        RawRecord::new("", "27/01/16"),
        RawRecord::new("ABC-2 first day", "20"),
        RawRecord::new("", "28/01/16"),
        RawRecord::new("ABC-3 second day", "30"),
    ];

    let mut parser = RecordParser::new();
    let worklog = parser.parse_all(&rows);

    let dates: Vec<Option<&str>> = worklog.iter().map(|e| e.date.as_deref()).collect();
    assert_eq!(dates, vec![None, Some("2016-01-27"), Some("2016-01-28")]);
    assert_eq!(parser.current_date(), Some("2016-01-28"));
}

#[test]
fn test_record_parser_row_without_activity_or_date() {
    let mut parser = RecordParser::new();
    let entry = parser.parse(&RawRecord::new("", "15")).expect("not a marker");
    assert_eq!(entry.issue_number, None);
    assert_eq!(entry.description, "");
    assert_eq!(entry.minutes, 15);
}

#[test]
fn test_parse_minutes() {
    assert_eq!(parse_minutes("30"), 30);
    assert_eq!(parse_minutes(" 45 "), 45);
    assert_eq!(parse_minutes("12.6"), 13);
    assert_eq!(parse_minutes("-5"), -5);
    assert_eq!(parse_minutes("half an hour"), 0);
    assert_eq!(parse_minutes(""), 0);
}

#[test]
fn test_read_records_skips_comments_and_allows_short_rows() {
    let csv = "# exported by Daily\n,27/01/16\n\"ABC-1 quoted, with comma\",30\nlonely\n";
    let records = read_records(csv.as_bytes(), b',').expect("read csv");

    assert_eq!(
        records,
        vec![
            RawRecord::new("", "27/01/16"),
            RawRecord::new("ABC-1 quoted, with comma", "30"),
            RawRecord::new("lonely", ""),
        ]
    );
}

#[test]
fn test_read_records_with_custom_delimiter() {
    let csv = ";27/01/16\nABC-1 one, two;30\n";
    let records = read_records(csv.as_bytes(), b';').expect("read csv");

    assert_eq!(records[1], RawRecord::new("ABC-1 one, two", "30"));
    assert!(records[0].is_date_marker());
}
