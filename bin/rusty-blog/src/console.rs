//! Line-oriented front end over a [`BlogContext`].
//!
//! Stands in for the page layer: it shows whatever the capability flags
//! allow and prints a failed operation's single error message.

use std::io::{self, BufRead, Write};

use rb_core::{AppError, BlogContext, NavItem, Post};
use uuid::Uuid;

const HELP: &str = "\
commands:
  login <username> <password>
  logout
  post <title> | <content>
  comment <post> <text>
  list
  show <post>
  nav
  dump
  help
  quit
<post> is a list position (1 = newest) or a post id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Post { title: String, content: String },
    Comment { post: String, text: String },
    List,
    Show { post: String },
    Nav,
    Dump,
    Help,
    Quit,
}

impl Command {
    /// `None` for a blank line.
    ///
    /// The login password is kept exactly as typed, trailing spaces included.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word {
            "" => return Ok(None),
            "login" => {
                let mut parts = rest.splitn(2, char::is_whitespace);
                Command::Login {
                    username: parts.next().unwrap_or_default().to_string(),
                    password: parts.next().unwrap_or_default().trim_start().to_string(),
                }
            }
            "logout" => Command::Logout,
            "post" => {
                let (title, content) = rest.split_once('|').unwrap_or((rest, ""));
                Command::Post {
                    title: title.trim().to_string(),
                    content: content.trim().to_string(),
                }
            }
            "comment" => {
                let (post, text) = rest
                    .trim_end()
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "usage: comment <post> <text>".to_string())?;
                Command::Comment {
                    post: post.to_string(),
                    text: text.trim().to_string(),
                }
            }
            "list" => Command::List,
            "show" if !rest.trim_end().is_empty() => Command::Show {
                post: rest.trim_end().to_string(),
            },
            "show" => return Err("usage: show <post>".to_string()),
            "nav" => Command::Nav,
            "dump" => Command::Dump,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command `{other}`, try `help`")),
        };
        Ok(Some(command))
    }
}

/// Reads commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut BlogContext,
    site_title: &str,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{site_title}")?;
    write_nav(ctx, &mut out)?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(ctx, command, &mut out)?,
            Err(usage) => writeln!(out, "{usage}")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn execute<W: Write>(ctx: &mut BlogContext, command: Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Login { username, password } => {
            match ctx.login(&username, &password) {
                Ok(_) => {
                    writeln!(out, "Welcome, {username}")?;
                    write_nav(ctx, out)?;
                }
                Err(err) => report(&err, out)?,
            }
        }
        Command::Logout => {
            ctx.logout();
            write_nav(ctx, out)?;
        }
        Command::Post { title, content } => {
            match ctx.create_post(&title, &content) {
                Ok(post) => writeln!(out, "created {}", post.id)?,
                Err(err) => report(&err, out)?,
            }
        }
        Command::Comment { post, text } => {
            let post_id = resolve_post(ctx, &post);
            match ctx.add_comment(post_id, &text) {
                Ok(comment) => writeln!(out, "{comment}")?,
                Err(err) => report(&err, out)?,
            }
        }
        Command::List => {
            for (index, post) in ctx.list_posts().iter().enumerate() {
                writeln!(out, "{}. {} ({})", index + 1, post.title, post.id)?;
            }
        }
        Command::Show { post } => {
            let post_id = resolve_post(ctx, &post);
            match ctx.get_post(post_id) {
                Ok(post) => write_post(post, out)?,
                Err(err) => report(&err, out)?,
            }
        }
        Command::Nav => write_nav(ctx, out)?,
        Command::Dump => {
            let json = serde_json::to_string_pretty(ctx.list_posts())
                .map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

/// Prints the single current error message.
fn report<W: Write>(err: &AppError, out: &mut W) -> io::Result<()> {
    writeln!(out, "error: {err}")
}

/// A 1-based list position or a literal post id.
///
/// Unresolvable tokens map to the nil id so the lookup itself reports
/// `NotFound` through the context.
fn resolve_post(ctx: &BlogContext, token: &str) -> Uuid {
    let resolved = match token.parse::<usize>() {
        Ok(position) => position
            .checked_sub(1)
            .and_then(|index| ctx.list_posts().get(index))
            .map(|post| post.id),
        Err(_) => Uuid::parse_str(token).ok(),
    };
    resolved.unwrap_or_else(Uuid::nil)
}

fn write_nav<W: Write>(ctx: &BlogContext, out: &mut W) -> io::Result<()> {
    let labels: Vec<String> = ctx
        .capabilities()
        .nav_items()
        .iter()
        .map(|item: &NavItem| format!("[{}]", item.label()))
        .collect();
    writeln!(out, "{}", labels.join(" "))
}

fn write_post<W: Write>(post: &Post, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", post.title)?;
    writeln!(out, "{}", post.content)?;
    writeln!(out)?;
    writeln!(out, "Comments")?;
    for comment in &post.comments {
        writeln!(out, "  {comment}")?;
    }
    Ok(())
}
