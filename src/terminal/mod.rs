//! Terminal-style portfolio browser (`terminal.html`).
//!
//! [`Terminal`] interprets command lines against a tiny fake filesystem and
//! answers with [`Response`] values: lines to print now, plus actions to
//! replay after a delay. The browser binding in [`dom`] performs them, so the
//! interpreter itself never touches the page.

pub mod content;
pub mod dom;

pub const HOME: &str = "~";
pub const PROMPT_USER: &str = "andrebassi@portfolio";

const DIRECTORIES: &[&str] = &["~/about", "~/projects", "~/skills", "~/experience", "~/contact"];

/// Names in completion order; the first prefix match wins on Tab.
pub const COMMAND_NAMES: &[&str] = &[
    "help", "whoami", "skills", "projects", "experience", "contact", "ls", "cd", "cat", "pwd",
    "clear", "history", "neofetch", "matrix", "sudo", "echo", "date", "uptime", "man", "exit",
    "about", "bio", "tech", "stack", "exp", "trabalho", "contato", "projetos", "repos", "github",
    "linkedin",
];

const GITHUB_URL: &str = "https://github.com/andrebassi";
const LINKEDIN_URL: &str = "https://linkedin.com/in/andrebassi";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Whoami,
    Skills,
    Projects,
    Experience,
    Contact,
    Ls,
    Cd,
    Cat,
    Pwd,
    Clear,
    History,
    Neofetch,
    Matrix,
    Sudo,
    Echo,
    Date,
    Uptime,
    Man,
    Exit,
    Github,
    Linkedin,
}

impl Command {
    /// Resolve a command name or alias. Names are matched as given.
    pub fn parse(name: &str) -> Option<Command> {
        Some(match name {
            "help" => Command::Help,
            "whoami" | "about" | "bio" => Command::Whoami,
            "skills" | "tech" | "stack" => Command::Skills,
            "projects" | "projetos" | "repos" => Command::Projects,
            "experience" | "exp" | "trabalho" => Command::Experience,
            "contact" | "contato" => Command::Contact,
            "ls" => Command::Ls,
            "cd" => Command::Cd,
            "cat" => Command::Cat,
            "pwd" => Command::Pwd,
            "clear" => Command::Clear,
            "history" => Command::History,
            "neofetch" => Command::Neofetch,
            "matrix" => Command::Matrix,
            "sudo" => Command::Sudo,
            "echo" => Command::Echo,
            "date" => Command::Date,
            "uptime" => Command::Uptime,
            "man" => Command::Man,
            "exit" => Command::Exit,
            "github" => Command::Github,
            "linkedin" => Command::Linkedin,
            _ => return None,
        })
    }
}

/// CSS modifier of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Command,
    Error,
    Info,
    Success,
    Warning,
    Muted,
}

impl LineKind {
    pub fn class(self) -> &'static str {
        match self {
            LineKind::Plain => "",
            LineKind::Command => "command",
            LineKind::Error => "error",
            LineKind::Info => "info",
            LineKind::Success => "success",
            LineKind::Warning => "warning",
            LineKind::Muted => "muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One `.output-line` with HTML content.
    Line { html: String, kind: LineKind },
    /// A block of HTML appended as-is.
    Block(&'static str),
    /// Current local date and time as an info line.
    LocalTime,
    Clear,
    OpenUrl(&'static str),
    /// Toggle the `glitch` class on `<body>`.
    Glitch(bool),
}

impl Action {
    fn line(kind: LineKind, html: impl Into<String>) -> Self {
        Action::Line { html: html.into(), kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delayed {
    pub after_ms: i32,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub actions: Vec<Action>,
    pub delayed: Vec<Delayed>,
}

impl Response {
    fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn print(&mut self, kind: LineKind, html: impl Into<String>) {
        self.actions.push(Action::line(kind, html));
    }

    fn later(&mut self, after_ms: i32, actions: Vec<Action>) {
        self.delayed.push(Delayed { after_ms, actions });
    }

    /// Lines printed immediately, without markup.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().filter_map(|a| match a {
            Action::Line { html, .. } => Some(html.as_str()),
            _ => None,
        })
    }
}

/// Escape text for insertion into HTML, like assigning `textContent` and
/// reading back `innerHTML`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// First command name starting with `input` (lower-cased).
pub fn complete(input: &str) -> Option<&'static str> {
    let needle = input.to_lowercase();
    COMMAND_NAMES.iter().copied().find(|name| name.starts_with(&needle))
}

fn listing(path: &str) -> &'static [(&'static str, bool)] {
    match path {
        "~/about" => &[("bio.txt", false), ("links.txt", false)],
        "~/projects" => &[("edgeproxy/", true), ("infra-operator/", true), ("runner.codes/", true)],
        "~/skills" => &[
            ("cloud.txt", false),
            ("kubernetes.txt", false),
            ("languages.txt", false),
            ("tools.txt", false),
        ],
        "~/experience" => &[("stats.txt", false), ("roles.txt", false)],
        "~/contact" => &[("email.txt", false), ("social.txt", false)],
        _ => &[
            ("about/", true),
            ("projects/", true),
            ("skills/", true),
            ("experience/", true),
            ("contact/", true),
            ("README.md", false),
            (".gitconfig", false),
        ],
    }
}

#[derive(Debug, Clone)]
pub struct Terminal {
    path: String,
    history: Vec<String>,
    history_index: usize,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self { path: HOME.to_string(), history: Vec::new(), history_index: 0 }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn welcome(&self) -> Action {
        Action::Block(content::WELCOME)
    }

    /// Move through history; `older` is the ↑ key. Returns the text to put in
    /// the input, `Some("")` past the newest entry, `None` with no history.
    pub fn recall(&mut self, older: bool) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        if older {
            self.history_index = self.history_index.saturating_sub(1);
        } else {
            self.history_index += 1;
            if self.history_index >= self.history.len() {
                self.history_index = self.history.len();
                return Some("");
            }
        }
        self.history.get(self.history_index).map(String::as_str)
    }

    pub fn execute(&mut self, line: &str) -> Response {
        let trimmed = line.trim();
        let mut out = Response::default();
        out.print(
            LineKind::Command,
            format!(
                r#"<span class="prompt-echo">{PROMPT_USER}:{}$</span> <span class="cmd-echo">{}</span>"#,
                self.path,
                escape_html(trimmed)
            ),
        );
        if trimmed.is_empty() {
            return out;
        }

        if self.history.last().map(String::as_str) != Some(trimmed) {
            self.history.push(trimmed.to_string());
        }
        self.history_index = self.history.len();

        let mut parts = trimmed.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        match Command::parse(&name) {
            Some(cmd) => self.run(cmd, &args, &mut out),
            None => out.print(
                LineKind::Error,
                format!(
                    "bash: {}: comando não encontrado. Digite 'help' para ver comandos disponíveis.",
                    escape_html(&name)
                ),
            ),
        }
        out
    }

    fn run(&mut self, cmd: Command, args: &[&str], out: &mut Response) {
        match cmd {
            Command::Help => out.push(Action::Block(content::HELP)),
            Command::Whoami => out.push(Action::Block(content::WHOAMI)),
            Command::Skills => out.push(Action::Block(content::SKILLS)),
            Command::Projects => out.push(Action::Block(content::PROJECTS)),
            Command::Experience => out.push(Action::Block(content::EXPERIENCE)),
            Command::Contact => out.push(Action::Block(content::CONTACT)),
            Command::Neofetch => out.push(Action::Block(content::NEOFETCH)),
            Command::Ls => out.print(LineKind::Plain, self.ls()),
            Command::Cd => self.cd(args.first().copied(), out),
            Command::Cat => self.cat(args.first().copied(), out),
            Command::Pwd => out.print(LineKind::Info, self.path.clone()),
            Command::Clear => out.push(Action::Clear),
            Command::History => {
                if self.history.is_empty() {
                    out.print(LineKind::Muted, "Histórico vazio");
                }
                for (i, entry) in self.history.iter().enumerate() {
                    out.print(LineKind::Muted, format!("  {}  {}", i + 1, escape_html(entry)));
                }
            }
            Command::Matrix => {
                out.print(LineKind::Success, "Iniciando Matrix...");
                out.push(Action::Glitch(true));
                out.later(
                    300,
                    vec![
                        Action::Glitch(false),
                        Action::line(LineKind::Success, "Wake up, Neo..."),
                        Action::line(LineKind::Success, "The Matrix has you..."),
                        Action::line(LineKind::Success, "Follow the white rabbit."),
                        Action::line(LineKind::Plain, ""),
                        Action::line(LineKind::Muted, "Knock, knock, Neo."),
                    ],
                );
            }
            Command::Sudo => Self::sudo(args, out),
            Command::Echo => out.print(LineKind::Info, escape_html(&args.join(" "))),
            Command::Date => out.push(Action::LocalTime),
            Command::Uptime => {
                out.print(LineKind::Info, "up 20 years, 0 users, load average: 0.42, 0.42, 0.42")
            }
            Command::Man => Self::man(args.first().copied(), out),
            Command::Exit => {
                out.print(LineKind::Muted, "logout");
                out.print(LineKind::Plain, "");
                out.print(LineKind::Success, "Obrigado por visitar! 👋");
                out.print(LineKind::Plain, "");
                out.later(
                    1000,
                    vec![Action::line(LineKind::Muted, "Connection to portfolio closed.")],
                );
            }
            Command::Github => {
                out.print(LineKind::Info, "Abrindo GitHub...");
                out.push(Action::OpenUrl(GITHUB_URL));
            }
            Command::Linkedin => {
                out.print(LineKind::Info, "Abrindo LinkedIn...");
                out.push(Action::OpenUrl(LINKEDIN_URL));
            }
        }
    }

    fn ls(&self) -> String {
        let mut html = String::from(r#"<div style="display: flex; flex-wrap: wrap;">"#);
        for (name, is_dir) in listing(&self.path) {
            let class = if *is_dir { "directory" } else { "file" };
            html.push_str(&format!(r#"<span class="dir-entry {class}">{name}</span>"#));
        }
        html.push_str("</div>");
        html
    }

    fn cd(&mut self, target: Option<&str>, out: &mut Response) {
        let target = match target {
            None | Some(HOME) => {
                self.path = HOME.to_string();
                return;
            }
            Some(t) => t,
        };
        if target == ".." {
            if let Some((parent, _)) = self.path.rsplit_once('/') {
                self.path = if parent.is_empty() { HOME.to_string() } else { parent.to_string() };
            }
            return;
        }

        let joined = if target.starts_with('~') {
            target.to_string()
        } else {
            format!("{}/{}", self.path, target).replacen("//", "/", 1)
        };
        let candidate = joined.strip_suffix('/').unwrap_or(&joined);
        if candidate == HOME || DIRECTORIES.contains(&candidate) {
            self.path = candidate.to_string();
        } else {
            out.print(
                LineKind::Error,
                format!("bash: cd: {}: Diretório não encontrado", escape_html(target)),
            );
        }
    }

    fn cat(&mut self, file: Option<&str>, out: &mut Response) {
        let Some(file) = file else {
            out.print(LineKind::Error, "cat: faltando operando de arquivo");
            return;
        };
        let target = match file {
            "skills" => Command::Skills,
            "projects" => Command::Projects,
            "experience" => Command::Experience,
            "contact" => Command::Contact,
            "whoami" | "bio.txt" => Command::Whoami,
            "README.md" => {
                out.push(self.welcome());
                return;
            }
            _ => {
                out.print(
                    LineKind::Error,
                    format!(
                        "cat: {}: Arquivo não encontrado. Tente 'ls' para ver arquivos disponíveis.",
                        escape_html(file)
                    ),
                );
                return;
            }
        };
        self.run(target, &[], out);
    }

    fn sudo(args: &[&str], out: &mut Response) {
        if args.first() == Some(&"rm") && args.contains(&"-rf") && args.contains(&"/") {
            out.print(LineKind::Warning, "Nice try! 😏");
            out.print(LineKind::Error, "Permissão negada: Você não tem superpoderes aqui.");
        } else if args.join(" ").contains("hire") {
            out.print(LineKind::Success, "Permissão concedida! 🎉");
            out.print(LineKind::Info, "Envie um email para: contato@andrebassi.com.br");
        } else {
            out.print(LineKind::Muted, "[sudo] senha para andrebassi: ");
            out.later(
                500,
                vec![Action::line(
                    LineKind::Error,
                    "andrebassi não está no arquivo sudoers. Este incidente será relatado.",
                )],
            );
        }
    }

    fn man(page: Option<&str>, out: &mut Response) {
        let Some(page) = page else {
            out.print(LineKind::Warning, "Qual manual você quer ver? Ex: man whoami");
            return;
        };
        if Command::parse(page).is_none() {
            out.print(
                LineKind::Error,
                format!("Nenhuma entrada de manual para {}", escape_html(page)),
            );
            return;
        }
        let upper = page.to_uppercase();
        out.print(
            LineKind::Info,
            format!("{upper}(1)                     User Commands                     {upper}(1)"),
        );
        out.print(LineKind::Plain, "");
        out.print(LineKind::Info, "NAME");
        out.print(LineKind::Muted, format!("       {page} - comando do portfolio interativo"));
        out.print(LineKind::Plain, "");
        out.print(LineKind::Info, "SYNOPSIS");
        out.print(LineKind::Muted, format!("       {page} [opções]"));
        out.print(LineKind::Plain, "");
        out.print(LineKind::Info, "DESCRIPTION");
        out.print(LineKind::Muted, "       Execute o comando para ver mais informações.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_line_escapes_input() {
        let mut t = Terminal::new();
        let r = t.execute("  echo <b>hi</b> ");
        let lines: Vec<_> = r.lines().collect();
        assert!(lines[0].contains("echo &lt;b&gt;hi&lt;/b&gt;"));
        assert_eq!(lines[1], "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_empty_line_only_echoes() {
        let mut t = Terminal::new();
        let r = t.execute("   ");
        assert_eq!(r.actions.len(), 1);
        assert!(t.history().is_empty());
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        let mut t = Terminal::new();
        let r = t.execute("WHOAMI");
        assert_eq!(r.actions[1], Action::Block(content::WHOAMI));
    }

    #[test]
    fn test_unknown_command() {
        let mut t = Terminal::new();
        let r = t.execute("vim");
        let last = r.lines().last().unwrap();
        assert!(last.starts_with("bash: vim: comando não encontrado"));
    }

    #[test]
    fn test_history_collapses_consecutive_duplicates() {
        let mut t = Terminal::new();
        t.execute("ls");
        t.execute("ls");
        t.execute("pwd");
        t.execute("ls");
        assert_eq!(t.history(), ["ls", "pwd", "ls"]);
    }

    #[test]
    fn test_recall_walks_history() {
        let mut t = Terminal::new();
        assert_eq!(t.recall(true), None);
        t.execute("ls");
        t.execute("pwd");
        assert_eq!(t.recall(true), Some("pwd"));
        assert_eq!(t.recall(true), Some("ls"));
        assert_eq!(t.recall(true), Some("ls"));
        assert_eq!(t.recall(false), Some("pwd"));
        assert_eq!(t.recall(false), Some(""));
    }

    #[test]
    fn test_complete_first_match() {
        assert_eq!(complete("ex"), Some("experience"));
        assert_eq!(complete("H"), Some("help"));
        assert_eq!(complete("zz"), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Command::parse("bio"), Some(Command::Whoami));
        assert_eq!(Command::parse("stack"), Some(Command::Skills));
        assert_eq!(Command::parse("trabalho"), Some(Command::Experience));
        assert_eq!(Command::parse("repos"), Some(Command::Projects));
        assert_eq!(Command::parse("contato"), Some(Command::Contact));
    }

    #[test]
    fn test_delayed_output() {
        let mut t = Terminal::new();
        let r = t.execute("matrix");
        assert_eq!(r.actions.last(), Some(&Action::Glitch(true)));
        assert_eq!(r.delayed[0].after_ms, 300);
        assert_eq!(r.delayed[0].actions[0], Action::Glitch(false));

        let r = t.execute("sudo make me a sandwich");
        assert_eq!(r.delayed[0].after_ms, 500);
        let r = t.execute("sudo hire andre");
        assert!(r.delayed.is_empty());
    }
}
