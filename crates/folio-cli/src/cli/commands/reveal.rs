//! One-shot text reveal on stdout.

use std::io::{IsTerminal, Write, stdout};

use anyhow::Result;
use folio_core::interrupt;
use folio_core::reveal::RevealText;

/// Types `text` out, rewriting the current line on each new character.
///
/// Piped output gets only the final line. Ctrl+C stops the run where it is,
/// prints the partial text and returns `InterruptedError`.
pub async fn run(text: &str, delay_ms: f64, step_ms: f64) -> Result<()> {
    let interactive = stdout().is_terminal();
    let mut reveal = RevealText::from_millis(text, delay_ms, step_ms);

    loop {
        tokio::select! {
            changed = reveal.changed() => {
                if !changed {
                    break;
                }
                if interactive {
                    let mut out = stdout().lock();
                    write!(out, "\r{}", reveal.revealed())?;
                    out.flush()?;
                }
            }
            () = interrupt::wait_for_interrupt() => {
                reveal.dispose();
                finish_line(interactive, &reveal.revealed())?;
                return Err(interrupt::InterruptedError.into());
            }
        }
    }

    finish_line(interactive, &reveal.revealed())
}

fn finish_line(interactive: bool, revealed: &str) -> Result<()> {
    let mut out = stdout().lock();
    if interactive {
        write!(out, "\r{revealed}")?;
    } else {
        write!(out, "{revealed}")?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
