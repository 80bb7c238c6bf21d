//! Console caller: a minimal REPL over the same GuidanceClient the HTTP API
//! uses. Each line is treated as a whole profile; `exit` quits.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use rahnuma_api::config::Config;
use rahnuma_api::llm_client::{GuidanceClient, GuidanceError};

const CONSOLE_STUDY_LEVEL: &str = "O-Level/A-Level";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    let client = GuidanceClient::new(config.api_key);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter your subjects, grades, and interests (type 'exit' to quit): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match client.generate(input, CONSOLE_STUDY_LEVEL).await {
            Ok(guidance) => {
                println!("\nAI Guidance:");
                println!("{guidance}\n");
            }
            Err(err) => {
                eprintln!("An error occurred: {err}");
                match err {
                    GuidanceError::Network { .. } => {
                        eprintln!("Please check your internet connection and API key.")
                    }
                    GuidanceError::Parse { .. } | GuidanceError::MalformedResponse { .. } => {
                        eprintln!("The service returned an unexpected response; try again later.")
                    }
                }
            }
        }
    }

    Ok(())
}
