//! UI utilities for the client.

use std::io::Write;

/// Prompt shown while waiting for user input
pub const PROMPT: &str = "> ";

/// Redisplay the prompt after receiving a message
pub fn redisplay_prompt() {
    print!("{}", PROMPT);
    std::io::stdout().flush().ok();
}
