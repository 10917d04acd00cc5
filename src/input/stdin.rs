use std::io;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use log::{debug, warn};

use super::protocol_interpreter::ProtocolInterpreter;

/// Forwards every line on stdin that `I` understands, until stdin closes or
/// the receiving side hangs up.
pub fn listen_to_stdin<I: ProtocolInterpreter>(input_tx: Sender<I::Command>) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("failed stdin read: {err}");
                return;
            },
        };

        match I::line_to_command(&line) {
            Some(command) => {
                if input_tx.send(command).is_err() {
                    return;
                }
            },
            None => debug!("ignored input {line:?}"),
        }
    }
}
