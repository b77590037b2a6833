use crate::{MvError, Result};

/// A parsed protocol command.
///
/// One variant per verb of the line protocol. Parsing validates the
/// argument count up front, so the store is never touched by a
/// malformed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every key in the store.
    Keys,
    /// List the members of a key.
    Members {
        /// The key to list.
        key: String,
    },
    /// Add a member to a key, creating the key if absent.
    Add {
        /// The key to add to.
        key: String,
        /// The member to add.
        member: String,
    },
    /// Remove a member from a key.
    Remove {
        /// The key to remove from.
        key: String,
        /// The member to remove.
        member: String,
    },
    /// Remove a key and all of its members.
    RemoveAll {
        /// The key to remove.
        key: String,
    },
    /// Clear the whole store.
    Clear,
    /// Check whether a key exists.
    KeyExists {
        /// The key to check.
        key: String,
    },
    /// Check whether a member exists under a key.
    ValueExists {
        /// The key to check.
        key: String,
        /// The member to check.
        member: String,
    },
    /// List every member across every key.
    AllMembers,
    /// List every key-member pair.
    Items,
    /// List the members common to two keys.
    Intersection {
        /// The first key.
        key_a: String,
        /// The second key.
        key_b: String,
    },
    /// Terminate the shell loop.
    Exit,
}

impl Command {
    /// Parses one input line into a command.
    ///
    /// Returns `Ok(None)` for a blank line. Verbs are case-sensitive; a
    /// known verb with the wrong argument count fails with
    /// [`MvError::BadArity`], anything else with
    /// [`MvError::UnknownCommand`].
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let cmd = match (verb, args) {
            ("KEYS", []) => Command::Keys,
            ("MEMBERS", [key]) => Command::Members {
                key: key.to_string(),
            },
            ("ADD", [key, member]) => Command::Add {
                key: key.to_string(),
                member: member.to_string(),
            },
            ("REMOVE", [key, member]) => Command::Remove {
                key: key.to_string(),
                member: member.to_string(),
            },
            ("REMOVEALL", [key]) => Command::RemoveAll {
                key: key.to_string(),
            },
            ("CLEAR", []) => Command::Clear,
            ("KEYEXISTS", [key]) => Command::KeyExists {
                key: key.to_string(),
            },
            ("VALUEEXISTS", [key, member]) => Command::ValueExists {
                key: key.to_string(),
                member: member.to_string(),
            },
            ("ALLMEMBERS", []) => Command::AllMembers,
            ("ITEMS", []) => Command::Items,
            ("INTERSECTION", [key_a, key_b]) => Command::Intersection {
                key_a: key_a.to_string(),
                key_b: key_b.to_string(),
            },
            ("EXIT", []) => Command::Exit,
            ("KEYS" | "MEMBERS" | "ADD" | "REMOVE" | "REMOVEALL" | "CLEAR"
            | "KEYEXISTS" | "VALUEEXISTS" | "ALLMEMBERS" | "ITEMS"
            | "INTERSECTION" | "EXIT", _) => return Err(MvError::BadArity),
            _ => return Err(MvError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(cmd))
    }
}
