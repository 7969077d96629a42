use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    sync::Mutex,
};

/// Line reader over stdin shared by the shell loop and [`TerminalPrompt`].
pub type SharedInput = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> SharedInput {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Blocking user interaction: confirmations before destructive actions and
/// alerts for failed actions on an already rendered list.
#[async_trait]
pub trait Prompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
    async fn alert(&self, message: &str);
}

/// [`Prompt`] that asks on stdout and reads the answer from stdin.
pub struct TerminalPrompt {
    input: SharedInput,
}

impl TerminalPrompt {
    pub fn new(input: SharedInput) -> Self {
        Self { input }
    }
}

/// Accepts `y` and `yes` in any case; everything else declines.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl Prompt for TerminalPrompt {
    async fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = std::io::stdout().flush();

        match self.input.lock().await.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }

    async fn alert(&self, message: &str) {
        println!("!! {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
