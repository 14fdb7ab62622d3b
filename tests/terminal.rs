// Integration tests (native) for the terminal interpreter.
// A short scripted session: navigation, history recall, completion and the
// commands that schedule work for later.

use portfolio_os::terminal::{Action, LineKind, Terminal, complete, content};

#[test]
fn navigation_session() {
    let mut term = Terminal::new();

    let out = term.execute("cd projects");
    assert_eq!(term.path(), "~/projects");
    // only the echoed command, no error line
    assert_eq!(out.actions.len(), 1);

    let out = term.execute("ls");
    let listing = out.lines().nth(1).unwrap();
    assert!(listing.contains("edgeproxy/"));
    assert!(listing.contains(r#"class="dir-entry directory""#));

    term.execute("cd ..");
    assert_eq!(term.path(), "~");

    let out = term.execute("cd nowhere");
    assert_eq!(term.path(), "~");
    assert!(out.lines().any(|l| l.contains("Diretório não encontrado")));

    let out = term.execute("pwd");
    assert_eq!(out.lines().last(), Some("~"));
}

#[test]
fn echo_line_shows_prompt_and_path() {
    let mut term = Terminal::new();
    term.execute("cd ~/skills");
    let out = term.execute("whoami");
    match &out.actions[0] {
        Action::Line { html, kind } => {
            assert_eq!(*kind, LineKind::Command);
            assert!(html.contains("andrebassi@portfolio:~/skills$"));
            assert!(html.contains("whoami"));
        }
        other => panic!("expected echo line, got {other:?}"),
    }
    assert_eq!(out.actions[1], Action::Block(content::WHOAMI));
}

#[test]
fn aliases_print_the_same_section() {
    let mut term = Terminal::new();
    let a = term.execute("stack").actions[1].clone();
    let b = term.execute("SKILLS").actions[1].clone();
    let c = term.execute("cat skills").actions[1].clone();
    assert_eq!(a, Action::Block(content::SKILLS));
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn history_recall_walks_back_and_forth() {
    let mut term = Terminal::new();
    assert_eq!(term.recall(true), None);
    term.execute("help");
    term.execute("ls");
    term.execute("ls");
    // consecutive duplicates collapse
    assert_eq!(term.history(), ["help", "ls"]);

    assert_eq!(term.recall(true), Some("ls"));
    assert_eq!(term.recall(true), Some("help"));
    assert_eq!(term.recall(true), Some("help"));
    assert_eq!(term.recall(false), Some("ls"));
    assert_eq!(term.recall(false), Some(""));
}

#[test]
fn tab_completion_uses_first_match() {
    assert_eq!(complete("ne"), Some("neofetch"));
    assert_eq!(complete("EX"), Some("experience"));
    assert_eq!(complete("c"), Some("contact"));
    assert_eq!(complete("zz"), None);
}

#[test]
fn user_text_is_escaped() {
    let mut term = Terminal::new();
    let out = term.execute("echo <b>hi</b>");
    assert_eq!(out.lines().last(), Some("&lt;b&gt;hi&lt;/b&gt;"));
    let out = term.execute("<script>");
    assert!(out.lines().all(|l| !l.contains("<script>")));
}

#[test]
fn side_effect_commands() {
    let mut term = Terminal::new();
    assert!(term.execute("clear").actions.contains(&Action::Clear));
    assert!(term.execute("date").actions.contains(&Action::LocalTime));
    assert!(
        term.execute("github")
            .actions
            .contains(&Action::OpenUrl("https://github.com/andrebassi"))
    );

    let out = term.execute("matrix");
    assert!(out.actions.contains(&Action::Glitch(true)));
    assert_eq!(out.delayed.len(), 1);
    assert_eq!(out.delayed[0].after_ms, 300);
    assert_eq!(out.delayed[0].actions[0], Action::Glitch(false));

    let out = term.execute("exit");
    assert_eq!(out.delayed[0].after_ms, 1000);
}
