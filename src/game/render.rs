use chess::{Color, File, Rank, Square};
use itertools::Itertools;
use crate::core::position::{Occupant, Position};
use crate::game::MoveRecord;

fn occupant_char(occupant: Option<Occupant>) -> char {
    match occupant {
        None => '.',
        Some(Occupant { color: Color::White, symbol }) => symbol.to_ascii_uppercase(),
        Some(Occupant { color: Color::Black, symbol }) => symbol,
    }
}

/// The board seen from White's side, 8th rank on top.
pub fn render_board<P: Position + ?Sized>(position: &P) -> String {
    let mut lines = (0..8).rev()
        .map(|rank| {
            let squares = (0..8)
                .map(|file| Square::make_square(Rank::from_index(rank), File::from_index(file)))
                .map(|square| occupant_char(position.piece_at(square)))
                .join(" ");
            format!("{} {}", rank + 1, squares)
        })
        .collect::<Vec<_>>();
    lines.push("  a b c d e f g h".to_string());

    lines.join("\n")
}

/// Numbered move list, e.g. `1. e4 e5 2. Nf3`.
pub fn render_history(history: &[MoveRecord]) -> String {
    let mut parts = Vec::new();
    let mut move_number = 1;

    for (index, record) in history.iter().enumerate() {
        match record.color {
            Color::White => parts.push(format!("{move_number}. {}", record.san)),
            Color::Black if index == 0 => {
                parts.push(format!("{move_number}... {}", record.san));
                move_number += 1;
            },
            Color::Black => {
                parts.push(record.san.clone());
                move_number += 1;
            },
        }
    }

    parts.join(" ")
}
