// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use room_desk_privacy::UnlockPrompt;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Collects reveal-code attempts from standard input.
///
/// An empty line cancels. Only the calling flow waits on the prompt; the
/// engine timers keep running.
pub struct StdinPrompt;

impl UnlockPrompt for StdinPrompt {
    async fn read_pin(&mut self) -> Option<String> {
        eprint!("Code de sécurité (ligne vide pour annuler): ");
        let _ = std::io::stderr().flush();

        let mut line: String = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        reader.read_line(&mut line).await.ok()?;

        let attempt: &str = line.trim();
        if attempt.is_empty() {
            None
        } else {
            Some(attempt.to_string())
        }
    }
}
