use clap::{Parser, Subcommand};
use rolo::error::{Result, RoloError};
use rolo::model::ContactId;

/// Flags accepted by the `rolo` binary itself. Everything else happens as
/// session commands once the shell is running.
#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "A fast, in-memory contact book for the command line", long_about = None)]
pub struct Cli {
    /// Start with an empty book instead of the starter contacts
    #[arg(long)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of session input, parsed clap-style without a binary name.
#[derive(Parser, Debug)]
#[command(name = "rolo", no_binary_name = true)]
#[command(about = "Contact book session commands", long_about = None)]
pub struct SessionCli {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a contact
    #[command(alias = "a")]
    Add {
        /// Full name (quote multi-word names)
        name: String,

        /// Email address
        email: String,

        /// Phone number
        phone: String,

        /// Comma-separated tags (e.g. work,family)
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Replace every field of a contact
    #[command(alias = "edit")]
    Update {
        /// Id of the contact
        id: ContactId,

        /// Full name (quote multi-word names)
        name: String,

        /// Email address
        email: String,

        /// Phone number
        phone: String,

        /// Comma-separated tags (e.g. work,family)
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Id of the contact
        id: ContactId,
    },

    /// Show one contact in full
    #[command(alias = "view")]
    Show {
        /// Id of the contact
        id: ContactId,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// List the contacts carrying every given tag
    Filter {
        /// Tags to require (e.g. work business)
        #[arg(num_args = 0.., value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List every tag in the book (duplicates included)
    Tags,

    /// Print the whole book as JSON
    Export,
}

/// Split a session line into argv-style words. Double or single quotes group
/// words; there is no escape syntax.
pub fn split_line(input: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted = false;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    quoted = true;
                }
                c if c.is_whitespace() => {
                    if !current.is_empty() || quoted {
                        words.push(std::mem::take(&mut current));
                    }
                    quoted = false;
                }
                _ => current.push(c),
            },
        }
    }

    if quote.is_some() {
        return Err(RoloError::Input("Unterminated quote".to_string()));
    }
    if !current.is_empty() || quoted {
        words.push(current);
    }
    Ok(words)
}

/// Trim whitespace around tags and drop empties, so `--tags "a, b,"` comes
/// out as `["a", "b"]`.
pub fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
