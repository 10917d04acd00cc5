use anyhow::Result;
use chess::ChessMove;
use thiserror::Error;
use crate::core::position::GamePosition;
use crate::core::search::search_result::BestMove;
use crate::tests::epd::EPDRecord;

mod tactics;

#[derive(Error, Debug, Copy, Clone)]
pub enum TestError {
    #[error("Engine made the wrong move (expected {expected}, got {actual})")]
    WrongMove {
        expected: ChessMove,
        actual: BestMove,
    },
    #[error("Engine found no move (expected {expected})")]
    NoMove {
        expected: ChessMove,
    },
}

pub fn check_position<F>(record: &EPDRecord, search_method: F) -> Result<()>
    where F: Fn(&mut GamePosition) -> Result<Option<BestMove>> {

    if let Some(record_id) = record.id.clone() {
        println!("{record_id}");
    }

    let mut position = GamePosition::from_fen(&record.fen)?;
    let expected = record.best_move;

    match search_method(&mut position)? {
        Some(actual) if actual == BestMove::from(expected) => Ok(()),
        Some(actual) => Err(TestError::WrongMove { expected, actual }.into()),
        None => Err(TestError::NoMove { expected }.into()),
    }
}

pub fn log_failed_positions(positions: impl IntoIterator<Item = (Option<String>, anyhow::Error)>) {
    for (id, error) in positions.into_iter() {
        println!("Failed {id:?}: {error}");
    }
}

/// The same position seen from the other side: ranks flipped, colors swapped.
pub fn mirror_fen(fen: &str) -> String {
    let fields = fen.split_whitespace().collect::<Vec<_>>();

    let swap_case = |c: char| match c.is_ascii_uppercase() {
        true => c.to_ascii_lowercase(),
        false => c.to_ascii_uppercase(),
    };

    let placement = fields[0].split('/')
        .rev()
        .map(|rank| rank.chars().map(swap_case).collect::<String>())
        .collect::<Vec<_>>()
        .join("/");
    let side = match fields[1] {
        "w" => "b",
        _ => "w",
    };
    let castling = match fields[2] {
        "-" => "-".to_string(),
        rights => {
            let mut swapped = rights.chars().map(swap_case).collect::<Vec<_>>();
            swapped.sort_by_key(|c| (c.is_ascii_lowercase(), *c != 'K' && *c != 'k'));
            swapped.into_iter().collect()
        },
    };
    let en_passant = match fields[3] {
        "-" => "-".to_string(),
        square => square.chars()
            .map(|c| match c {
                '3' => '6',
                '6' => '3',
                other => other,
            })
            .collect(),
    };

    let mut mirrored = vec![placement, side.to_string(), castling, en_passant];
    mirrored.extend(fields[4..].iter().map(|x| x.to_string()));
    mirrored.join(" ")
}
