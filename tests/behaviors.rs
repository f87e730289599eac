mod support;

use hackterm::behaviors::{HACK_PROGRESS, HANDSHAKE_PROGRESS, MAIL_LINK_LABEL};
use hackterm::{ContentKey, ContentTable, Location, MailLink, RngSource, StyleClass};
use pretty_assertions::assert_eq;

use support::{behavior_output, texts, Harness};

fn content() -> &'static ContentTable {
    ContentTable::builtin()
}

#[test]
fn help_renders_status_then_help_block() {
    let mut harness = Harness::new();
    let output = behavior_output(&harness.run_fresh("help"));

    assert_eq!(
        texts(&output),
        vec![
            "Executing command: help...",
            "Checksum verification: OK",
            "Operation complete. Elapsed time: 147ms.",
            content().get(ContentKey::Help),
        ]
    );
    assert_eq!(output[3].style, StyleClass::Output);
}

#[test]
fn ls_lists_directory_specific_entries() {
    let mut harness = Harness::new();

    let root = behavior_output(&harness.run_fresh("ls"));
    let root_entries: Vec<&str> = texts(&root)[5..].to_vec();
    let expected_root: Vec<&str> = content().root_listing.iter().map(String::as_str).collect();
    assert_eq!(root_entries, expected_root);
    assert_eq!(root[4].text, "\nDirectory listing:");

    harness.run("cd projects");
    let projects = behavior_output(&harness.run_fresh("ls"));
    let project_entries: Vec<&str> = texts(&projects)[5..].to_vec();
    let expected_projects: Vec<&str> = content()
        .projects_listing
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(project_entries, expected_projects);
}

#[test]
fn cd_round_trip_restores_root() {
    let mut harness = Harness::new();

    let into = behavior_output(&harness.run_fresh("cd projects"));
    assert_eq!(harness.shell.session().cwd, Location::Projects);
    assert!(texts(&into).contains(&"Changing directory to: /projects"));
    assert!(texts(&into).contains(&"Directory changed successfully."));
    assert_eq!(
        harness.transcript.prompt(),
        Some("guest@bradhudson.dev:/projects$ ")
    );

    harness.run_fresh("cd ..");
    assert_eq!(harness.shell.session().cwd, Location::Root);
    assert_eq!(harness.transcript.prompt(), Some("guest@bradhudson.dev:/$ "));
}

#[test]
fn cd_transitions_only_follow_the_table() {
    let mut harness = Harness::new();

    let up_from_root = behavior_output(&harness.run_fresh("cd .."));
    assert_eq!(harness.shell.session().cwd, Location::Root);
    assert!(texts(&up_from_root).contains(&"Error: Directory '..' not found"));

    harness.run("cd projects");
    let nested = behavior_output(&harness.run_fresh("cd projects"));
    assert_eq!(harness.shell.session().cwd, Location::Projects);
    assert!(texts(&nested).contains(&"Error: Directory 'projects' not found"));
}

#[test]
fn restricted_directories_are_denied_from_anywhere() {
    let mut harness = Harness::new();

    for location_setup in [None, Some("cd projects")] {
        if let Some(setup) = location_setup {
            harness.run(setup);
        }
        let before = harness.shell.session().cwd;
        for target in ["data", ".secrets"] {
            let output = behavior_output(&harness.run_fresh(&format!("cd {target}")));
            let styled: Vec<(StyleClass, &str)> = output
                .iter()
                .map(|line| (line.style, line.text.as_str()))
                .collect();
            assert_eq!(
                styled[1..4].to_vec(),
                vec![
                    (
                        StyleClass::Warning,
                        "Attempting to access restricted directory..."
                    ),
                    (StyleClass::Error, "ACCESS DENIED: Insufficient privileges"),
                    (StyleClass::Warning, "Security breach attempt logged"),
                ]
            );
            assert_eq!(harness.shell.session().cwd, before);
        }
    }
}

#[test]
fn cd_without_argument_reports_and_stops() {
    let mut harness = Harness::new();

    for line in ["cd", "cd  projects"] {
        let output = behavior_output(&harness.run_fresh(line));
        assert_eq!(
            texts(&output),
            vec!["Executing command: cd ...", "Error: No directory specified"]
        );
        assert_eq!(output[1].style, StyleClass::Error);
        assert_eq!(harness.transcript.prompt(), None);
    }
    assert_eq!(harness.shell.session().cwd, Location::Root);
}

#[test]
fn cat_about_is_identical_in_every_directory() {
    let mut harness = Harness::new();

    let at_root = behavior_output(&harness.run_fresh("cat about.txt"));
    harness.run("cd projects");
    let in_projects = behavior_output(&harness.run_fresh("cat about.txt"));

    assert_eq!(at_root, in_projects);
    assert!(texts(&at_root).contains(&content().get(ContentKey::About)));
}

#[test]
fn cat_contact_points_to_message_command() {
    let mut harness = Harness::new();
    let output = behavior_output(&harness.run_fresh("cat contact.msg"));

    assert!(output.iter().any(|line| line.style == StyleClass::Error
        && line.text == "Error: File is encrypted with quantum encryption"));
    assert!(output.iter().any(|line| line.style == StyleClass::Warning
        && line.text == "Use 'message' command to establish secure communication"));
}

#[test]
fn cat_unknown_or_missing_file_is_an_error_line() {
    let mut harness = Harness::new();

    let unknown = behavior_output(&harness.run_fresh("cat resume.pdf"));
    assert!(texts(&unknown).contains(&"Error: File 'resume.pdf' not found or access denied"));

    let missing = behavior_output(&harness.run_fresh("cat"));
    assert_eq!(
        texts(&missing),
        vec!["Executing command: cat ...", "Error: No filename specified"]
    );
}

#[test]
fn message_plays_handshake_and_offers_mail_link() {
    let mut harness = Harness::new();
    let output = behavior_output(&harness.run_fresh("message"));

    let progress: Vec<&str> = output
        .iter()
        .filter(|line| line.text.starts_with("Secure handshake progress"))
        .map(|line| line.text.as_str())
        .collect();
    let expected: Vec<String> = HANDSHAKE_PROGRESS
        .iter()
        .map(|percent| format!("Secure handshake progress: {percent}%..."))
        .collect();
    assert_eq!(progress, expected);

    let link_line = output
        .iter()
        .find(|line| line.link.is_some())
        .expect("message renders an interactive line");
    assert_eq!(link_line.text, MAIL_LINK_LABEL);
    assert_eq!(
        link_line.link,
        Some(MailLink::new(
            "brad@bradhudson.dev",
            "Hello from Terminal Portfolio"
        ))
    );
    assert!(texts(&output).contains(&content().get(ContentKey::Contact)));
    assert_eq!(
        output.last().map(|line| line.text.as_str()),
        Some("Operation complete. Elapsed time: 1247ms.")
    );
}

#[test]
fn projects_renders_catalog() {
    let mut harness = Harness::new();
    let output = behavior_output(&harness.run_fresh("projects"));

    assert_eq!(output[0].text, "Executing command: projects...");
    assert!(texts(&output).contains(&content().get(ContentKey::Projects)));
}

#[test]
fn hack_always_ends_with_public_info() {
    for seed in [1, 2, 3, 99] {
        let mut harness = Harness::with_random(Box::new(RngSource::seeded(seed)));
        let output = behavior_output(&harness.run_fresh("hack personal_data"));

        let tail: Vec<&str> = texts(&output).into_iter().rev().take(4).collect();
        assert_eq!(
            tail,
            vec![
                "Operation complete. Elapsed time: 3.7 seconds.",
                content().get(ContentKey::PublicInfo),
                "Here's some public info about Brad instead:",
                "Just kidding! 😄",
            ]
        );

        let progress: Vec<&str> = output
            .iter()
            .filter(|line| line.text.starts_with("Access progress"))
            .map(|line| line.text.as_str())
            .collect();
        let expected: Vec<String> = HACK_PROGRESS
            .iter()
            .map(|percent| format!("Access progress: {percent}%..."))
            .collect();
        assert_eq!(progress, expected);
    }
}

#[test]
fn whoami_renders_identity_lines() {
    let mut harness = Harness::new();
    let output = behavior_output(&harness.run_fresh("whoami"));

    assert_eq!(
        texts(&output)[1..5].to_vec(),
        vec![
            "Current User: guest",
            "Host: bradhudson.dev",
            "Session: Terminal Portfolio v2.1",
            "Access Level: Visitor (Read-Only)",
        ]
    );
    assert_eq!(output[4].style, StyleClass::Warning);
}

#[test]
fn pwd_tracks_current_directory() {
    let mut harness = Harness::new();

    let root = behavior_output(&harness.run_fresh("pwd"));
    assert_eq!(root[1].text, "/");

    harness.run("cd projects");
    let projects = behavior_output(&harness.run_fresh("pwd"));
    assert_eq!(projects[1].text, "/projects");
}

#[test]
fn clear_empties_transcript_after_long_behavior() {
    let mut harness = Harness::new();
    harness.run("hack personal_data");
    assert!(harness.transcript.len() > 20);

    harness.run("clear");
    assert!(harness.transcript.is_empty());
    assert_eq!(harness.shell.session().history().len(), 2);
}
