use clap::Parser;
use colored::*;
use console::Term;
use notz::api::{ConfirmGate, NotzApi};
use notz::error::Result;
use notz::init;
use notz::store::fs::FileBackend;
use notz::validate::{TEXT_MAX, TEXT_MIN};
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init::initialize(cli.data_dir);
    let term = Term::stdout();
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    render(&api, &term)?;
    loop {
        prompt("> ")?;
        let line = match input.next() {
            Some(line) => line?,
            // EOF: treat like quit
            None => break,
        };

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "q" | "quit" => break,
            "h" | "help" => print_help(&term)?,
            "a" | "add" => handle_add(&mut api, &mut input)?,
            "s" | "search" => {
                api.search_changed(rest);
            }
            "p" | "page" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => api.select_page(n),
                _ => println!("{}", "Usage: page <number>".red()),
            },
            "d" | "delete" => handle_delete(&mut api, &mut input, rest)?,
            other => println!("{}", format!("Unknown command: {}", other).red()),
        }

        render(&api, &term)?;
    }
    Ok(())
}

/// Walk the create dialog: prompt per field, re-prompting while the
/// field's validation error is displayed. `/cancel` at either prompt
/// abandons the draft.
fn handle_add(api: &mut NotzApi<FileBackend>, input: &mut InputLines) -> Result<()> {
    api.open_dialog();

    loop {
        prompt("Title: ")?;
        let Some(line) = read(input)? else {
            api.close_dialog();
            return Ok(());
        };
        if line == "/cancel" {
            api.close_dialog();
            return Ok(());
        }
        api.title_input(line);
        api.title_blur();
        match api.draft_errors().title {
            Some(reason) => println!("{}", format!("Title {}.", reason).red()),
            None => break,
        }
    }

    loop {
        prompt(&format!("Text ({}-{} chars): ", TEXT_MIN, TEXT_MAX))?;
        let Some(line) = read(input)? else {
            api.close_dialog();
            return Ok(());
        };
        if line == "/cancel" {
            api.close_dialog();
            return Ok(());
        }
        api.text_input(line);
        api.text_blur();
        match api.draft_errors().text {
            Some(reason) => println!("{}", format!("Note text {}.", reason).red()),
            None => break,
        }
    }

    match api.submit_draft()? {
        Some(note) => println!("{}", format!("Note created: {}", note.title).green()),
        None => println!("{}", "Note not created.".red()),
    }
    Ok(())
}

/// Delete by position on the currently visible page, behind the y/N gate.
fn handle_delete(
    api: &mut NotzApi<FileBackend>,
    input: &mut InputLines,
    arg: &str,
) -> Result<()> {
    let view = api.visible_page();
    let id = match arg.parse::<usize>() {
        Ok(n) if n >= 1 && n <= view.notes.len() => view.notes[n - 1].id,
        _ => {
            println!("{}", "Usage: delete <number on this page>".red());
            return Ok(());
        }
    };

    let mut gate = PromptGate { input };
    if api.delete_note(&id, &mut gate)? {
        println!("{}", "Note deleted.".green());
    } else {
        println!("{}", "Kept.".dimmed());
    }
    Ok(())
}

struct PromptGate<'a, 'b> {
    input: &'a mut InputLines<'b>,
}

impl ConfirmGate for PromptGate<'_, '_> {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message.yellow());
        io::stdout().flush().ok();
        match self.input.next() {
            Some(Ok(line)) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

fn read(input: &mut InputLines) -> Result<Option<String>> {
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const PREVIEW_CHARS: usize = 50;

fn render(api: &NotzApi<FileBackend>, term: &Term) -> Result<()> {
    let view = api.visible_page();

    term.write_line("")?;
    if !api.search_term().is_empty() {
        term.write_line(&format!(
            "{}",
            format!("Filter: {}", api.search_term()).dimmed()
        ))?;
    }

    if view.filtered_count == 0 {
        term.write_line("No notes found.")?;
        return Ok(());
    }

    for (i, note) in view.notes.iter().enumerate() {
        let idx = format!("{}. ", i + 1);

        let preview: String = note
            .text
            .chars()
            .take(PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = format!("{} {}", note.title, preview);

        let available = LINE_WIDTH.saturating_sub(idx.width() + TIME_WIDTH);
        let display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(display.width());

        term.write_line(&format!(
            "{}{}{}{}",
            idx,
            display,
            " ".repeat(padding),
            format_time_ago(note.created_at).dimmed()
        ))?;
    }

    term.write_line(&format!(
        "{}",
        format!("page {} of {}", api.current_page(), view.total_pages).dimmed()
    ))?;
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            out.push('…');
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let text = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", text, width = TIME_WIDTH)
}

fn print_help(term: &Term) -> Result<()> {
    term.write_line("Commands:")?;
    term.write_line("  add            create a note (/cancel to abort)")?;
    term.write_line("  search <text>  filter notes; `search` alone clears")?;
    term.write_line("  page <n>       jump to page n")?;
    term.write_line("  delete <n>     delete note n on this page (asks first)")?;
    term.write_line("  help, quit")?;
    Ok(())
}
