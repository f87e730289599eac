mod support;

use hackterm::{navigate, HistoryDirection, Session, Submission};
use pretty_assertions::assert_eq;

use support::Harness;

fn entries(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[test]
fn older_steps_walk_back_then_newer_steps_return_to_empty() {
    let history = entries(&["help", "ls", "cd projects", "pwd"]);

    for count in 1..=history.len() {
        let mut cursor = None;
        let mut seen = Vec::new();
        for _ in 0..count {
            let step = navigate(&history, cursor, HistoryDirection::Older).expect("history step");
            cursor = step.cursor;
            seen.push(step.buffer);
        }
        let expected: Vec<String> = history.iter().rev().take(count).cloned().collect();
        assert_eq!(seen, expected);

        let mut buffer = String::new();
        for _ in 0..count {
            let step = navigate(&history, cursor, HistoryDirection::Newer).expect("history step");
            cursor = step.cursor;
            buffer = step.buffer;
        }
        assert_eq!(buffer, "");
        assert_eq!(cursor, None);
    }
}

#[test]
fn older_at_oldest_entry_stays_put() {
    let history = entries(&["ls"]);
    let step = navigate(&history, Some(0), HistoryDirection::Older).expect("history step");
    assert_eq!(step.cursor, Some(0));
    assert_eq!(step.buffer, "ls");
}

#[test]
fn empty_history_leaves_input_alone() {
    assert_eq!(navigate(&[], None, HistoryDirection::Older), None);

    let mut session = Session::new();
    session.set_input("half typed");
    session.navigate(HistoryDirection::Older);
    session.navigate(HistoryDirection::Newer);
    assert_eq!(session.input, "half typed");
}

#[test]
fn submitting_resets_navigation() {
    let mut harness = Harness::new();
    for line in ["ls", "pwd", "whoami"] {
        harness.run(line);
    }

    let session = harness.shell.session_mut();
    session.navigate(HistoryDirection::Older);
    session.navigate(HistoryDirection::Older);
    assert_eq!(session.input, "pwd");

    assert!(matches!(session.submit_input(), Submission::Accepted(_)));
    session.complete(session.cwd);
    assert_eq!(session.history().cursor(), None);

    session.navigate(HistoryDirection::Older);
    assert_eq!(session.input, "pwd");
    assert_eq!(session.history().len(), 4);
}

#[test]
fn busy_and_empty_submissions_are_not_recorded() {
    let mut session = Session::new();
    assert_eq!(session.submit_line("   "), Submission::Empty);
    assert!(matches!(session.submit_line("ls"), Submission::Accepted(_)));
    assert_eq!(session.submit_line("pwd"), Submission::Busy);
    assert_eq!(session.history().entries(), &["ls".to_string()]);
}
