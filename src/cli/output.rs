//! Colored output helpers for the CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Output {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Print the question and its answer
    pub fn answer(&self, question: &str, answer: &str) {
        if self.colored {
            println!("{} {}", "Q:".bright_cyan().bold(), question.bold());
            println!("{} {}", "A:".green().bold(), answer);
        } else {
            println!("Q: {}", question);
            println!("A: {}", answer);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("[ERROR] {}", message);
        }
    }
}
