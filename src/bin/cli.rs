//! lexd CLI Client
//!
//! Command-line client for the dictionary server: builds one request,
//! sends it as a JSON line, prints the response.

use std::io::BufReader;
use std::net::TcpStream;

use clap::{Parser, Subcommand};

use lexd::protocol::{
    read_response, write_request, Request, Status, MEANING_SEPARATOR, OLD_NEW_SEPARATOR,
};

/// lexd CLI
#[derive(Parser, Debug)]
#[command(name = "lexd-cli")]
#[command(about = "CLI for the lexd dictionary server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:7878")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a word
    Query {
        /// The word to look up
        word: String,
    },

    /// Add a new word with one or more meanings
    Add {
        /// The word to add
        word: String,

        /// Its meanings
        #[arg(required = true)]
        meanings: Vec<String>,
    },

    /// Remove a word
    Remove {
        /// The word to remove
        word: String,
    },

    /// Replace a meaning: old*new1~new2~...
    Update {
        /// The word to update
        word: String,

        /// Combined old/new field, e.g. "feline*mammal~predator"
        replacement: String,
    },

    /// Append one meaning to an existing word
    AddMeaning {
        /// The word to extend
        word: String,

        /// The meaning to append
        meaning: String,
    },
}

fn build_request(command: Commands) -> Result<Request, String> {
    match command {
        Commands::Query { word } => Ok(Request::query(word)),
        Commands::Add { word, meanings } => Ok(Request::add(word, meanings)),
        Commands::Remove { word } => Ok(Request::remove(word)),
        Commands::Update { word, replacement } => {
            let Some((old, new)) = replacement.split_once(OLD_NEW_SEPARATOR) else {
                return Err(format!(
                    "update expects old{}new1{}new2{}...",
                    OLD_NEW_SEPARATOR, MEANING_SEPARATOR, MEANING_SEPARATOR
                ));
            };
            Ok(Request::update(word, old, new))
        }
        Commands::AddMeaning { word, meaning } => Ok(Request::add_meaning(word, meaning)),
    }
}

fn main() {
    let args = Args::parse();

    let request = match build_request(args.command) {
        Ok(r) => r,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let stream = match TcpStream::connect(&args.server) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to clone stream: {e}");
            std::process::exit(1);
        }
    });
    let mut writer = stream;

    if let Err(e) = write_request(&mut writer, &request) {
        eprintln!("Failed to send request: {e}");
        std::process::exit(1);
    }

    match read_response(&mut reader) {
        Ok(Some(response)) => {
            let tag = match response.status {
                Status::Success => "ok",
                Status::Error => "error",
            };
            println!("{}: {}", tag, response.message);
            if let Some(data) = response.data {
                for meaning in data {
                    println!("  - {meaning}");
                }
            }
            if response.status == Status::Error {
                std::process::exit(1);
            }
        }
        Ok(None) => {
            eprintln!("Server closed the connection without responding");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to read response: {e}");
            std::process::exit(1);
        }
    }
}
