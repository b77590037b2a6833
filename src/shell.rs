use std::io::{BufRead, Write};

use log::debug;

use crate::command::Command;
use crate::store::MultiValueStore;
use crate::{MvError, Result};

/// Default prompt written before each input line.
pub const DEFAULT_PROMPT: &str = "> ";

/// The interactive shell driving a [`MultiValueStore`].
///
/// Generic over the input and output streams so tests can run scripted
/// sessions against in-memory buffers. Each line is parsed into a
/// [`Command`], dispatched to the store, and the result rendered back;
/// every command failure is recoverable and the loop continues. Only a
/// stream failure terminates the loop with an error.
pub struct Shell<R: BufRead, W: Write> {
    store: MultiValueStore,
    reader: R,
    writer: W,
    prompt: String,
}

/// Outcome of one executed command, prior to rendering.
#[derive(Debug)]
enum Reply {
    /// A one-word acknowledgement such as `Added`.
    Message(&'static str),
    /// A boolean answer.
    Bool(bool),
    /// A numbered list of entries.
    List(Vec<String>),
    /// The explicit empty-result indicator.
    EmptySet,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given streams with an empty store.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_prompt(reader, writer, DEFAULT_PROMPT)
    }

    /// Creates a shell with a custom prompt string.
    pub fn with_prompt(reader: R, writer: W, prompt: &str) -> Self {
        Self {
            store: MultiValueStore::new(),
            reader,
            writer,
            prompt: prompt.to_string(),
        }
    }

    /// Runs the read-dispatch-render loop until `EXIT` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}", self.prompt)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("end of input stream");
                break;
            }

            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => {
                    debug!("EXIT received");
                    break;
                }
                Ok(Some(cmd)) => {
                    debug!("dispatching {:?}", cmd);
                    match self.execute(cmd) {
                        Ok(reply) => self.render(&reply)?,
                        Err(err) => self.render_error(err)?,
                    }
                }
                Err(err) => self.render_error(err)?,
            }
        }
        Ok(())
    }

    /// Dispatches one command against the store.
    ///
    /// List output is sorted here for stable display; the store itself
    /// makes no ordering promise.
    fn execute(&mut self, cmd: Command) -> Result<Reply> {
        let reply = match cmd {
            Command::Keys => match self.store.keys() {
                Some(keys) => Reply::List(sorted(keys)),
                None => Reply::EmptySet,
            },
            Command::Members { key } => {
                let members = self.store.members(&key)?;
                Reply::List(sorted(members.into_iter().collect()))
            }
            Command::Add { key, member } => {
                self.store.add(key, member)?;
                Reply::Message("Added")
            }
            Command::Remove { key, member } => {
                self.store.remove(&key, &member)?;
                Reply::Message("Removed")
            }
            Command::RemoveAll { key } => {
                self.store.remove_all(&key)?;
                Reply::Message("Removed")
            }
            Command::Clear => {
                self.store.clear();
                Reply::Message("Cleared")
            }
            Command::KeyExists { key } => Reply::Bool(self.store.key_exists(&key)),
            Command::ValueExists { key, member } => {
                Reply::Bool(self.store.value_exists(&key, &member))
            }
            Command::AllMembers => match self.store.all_members() {
                Some(members) => Reply::List(sorted(members)),
                None => Reply::EmptySet,
            },
            Command::Items => match self.store.items() {
                Some(items) => {
                    let mut pairs: Vec<String> = items
                        .iter()
                        .flat_map(|(key, members)| {
                            members.iter().map(move |m| format!("{key}: {m}"))
                        })
                        .collect();
                    pairs.sort();
                    Reply::List(pairs)
                }
                None => Reply::EmptySet,
            },
            Command::Intersection { key_a, key_b } => {
                let common = self.store.intersection(&key_a, &key_b);
                if common.is_empty() {
                    Reply::EmptySet
                } else {
                    Reply::List(sorted(common.into_iter().collect()))
                }
            }
            // EXIT is handled by the loop before dispatch.
            Command::Exit => unreachable!("EXIT never reaches execute"),
        };
        Ok(reply)
    }

    fn render(&mut self, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Message(msg) => writeln!(self.writer, ") {msg}")?,
            Reply::Bool(value) => writeln!(self.writer, ") {value}")?,
            Reply::List(entries) => {
                for (n, entry) in entries.iter().enumerate() {
                    writeln!(self.writer, "{}) {entry}", n + 1)?;
                }
            }
            Reply::EmptySet => writeln!(self.writer, "(empty set)")?,
        }
        Ok(())
    }

    fn render_error(&mut self, err: MvError) -> Result<()> {
        // Stream failures are fatal, everything else is a protocol-level
        // message and the loop carries on.
        if let MvError::Io(_) = err {
            return Err(err);
        }
        writeln!(self.writer, ") ERROR, {err}")?;
        Ok(())
    }
}

fn sorted(mut entries: Vec<String>) -> Vec<String> {
    entries.sort();
    entries
}
