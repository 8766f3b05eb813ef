//! Interactive session: wires the shell, the input panel and the table view
//! together and draws them as one text page.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use course_core::{Action, CourseApi, DraftField, InputPanel, Shell, TableView, Transport};

use crate::command::{Command, HELP};

pub const TITLE: &str = "ZA CRUD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<T> {
    shell: Shell<T>,
    panel: InputPanel,
}

impl<T: Transport> Session<T> {
    pub fn new(api: CourseApi<T>) -> Self {
        Self {
            shell: Shell::new(api),
            panel: InputPanel::new(),
        }
    }

    pub fn shell(&self) -> &Shell<T> {
        &self.shell
    }

    pub fn panel(&self) -> &InputPanel {
        &self.panel
    }

    /// First load of the course list.
    pub fn start(&mut self) {
        self.shell.mount();
    }

    /// Apply one command. The status banner only survives until the next
    /// command unless that command is another submit.
    pub fn handle(&mut self, command: Command) -> Flow {
        if command != Command::Submit {
            self.shell.clear_status();
        }
        match command {
            Command::Action(action) => {
                self.shell.select_action(action);
                self.panel.set_action(action);
            }
            Command::Set(field, value) => self.panel.set_field(field, value),
            Command::Select(id) => {
                let selected = self.shell.select_course(id);
                self.panel.sync(selected);
            }
            Command::Clear => self.panel.clear(),
            Command::Submit => self.shell.submit(self.panel.submit()),
            Command::Show | Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}");
        let _ = writeln!(out);

        let selector: Vec<String> = Action::ALL
            .iter()
            .map(|&action| {
                if action == self.shell.selected_action() {
                    format!("[{action}]")
                } else {
                    format!(" {action} ")
                }
            })
            .collect();
        let _ = writeln!(out, "Action: {}", selector.join(" "));
        let _ = writeln!(out);

        out.push_str(&TableView::render(self.shell.courses()));
        let _ = writeln!(out);

        let _ = writeln!(out, "Course Input Panel");
        let draft = self.panel.draft();
        for field in DraftField::ALL {
            let _ = writeln!(out, "  {:<12} {}", format!("{field}:"), draft.field(field));
        }
        let _ = writeln!(out, "  <{}>", self.panel.action());

        if let Some(message) = self.shell.status_message() {
            let _ = writeln!(out);
            let _ = writeln!(out, "** {message} **");
        }
        out
    }
}

/// Read commands from `input` until EOF or `quit`, redrawing after each.
pub fn run<T, R, W>(session: &mut Session<T>, input: R, output: &mut W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    session.start();
    write!(output, "{}", session.render())?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                let help = command == Command::Help;
                if session.handle(command) == Flow::Quit {
                    break;
                }
                if help {
                    writeln!(output, "{HELP}")?;
                } else {
                    write!(output, "{}", session.render())?;
                }
            }
            Err(e) => writeln!(output, "error: {e}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
