use std::path::PathBuf;
use anyhow::{bail, Result};
use chess::Square;
use crate::config::Difficulty;
use crate::core::notation::to_san;
use crate::core::position::GamePosition;
use crate::core::search::search_result::BestMove;
use crate::core::search::{find_best_move, find_best_move_with, RootPerspective, SearchConfig};
use crate::tests::epd::EPDRecord;
use crate::tests::{check_position, epd, log_failed_positions};

const TACTICS_PATH: &str = "./src/tests/assets/tactics.epd";
const DEPTH: u32 = 2;

/// Whether the recorded best move mates. Mated nodes are scored statically, so
/// mates are only reliably preferred when they sit on the last searched ply.
fn is_mate(record: &EPDRecord) -> Result<bool> {
    let position = GamePosition::from_fen(&record.fen)?;
    Ok(to_san(position.board(), record.best_move).ends_with('#'))
}

fn check_tactics<R>(config: SearchConfig, depth: u32, keep: R) -> Result<()>
    where R: Fn(&EPDRecord) -> Result<bool> {

    let tactics_path = PathBuf::from(TACTICS_PATH);

    println!("{:?}", tactics_path);
    let records = epd::read_epd(tactics_path.as_path())?;

    let mut checked = 0;
    let mut failed_positions = vec![];
    for record in records.iter() {
        if !keep(record)? {
            continue;
        }
        checked += 1;

        let result = check_position(record, |position| {
            let outcome = find_best_move_with(position, depth, &config)?;
            println!("{outcome:?}");

            Ok(outcome.map(|x| x.best_move()))
        });

        if let Err(error) = result {
            failed_positions.push((record.id.clone(), error));
        }
    }
    assert!(checked > 0);

    let some_failed_position = !failed_positions.is_empty();
    log_failed_positions(failed_positions);

    if some_failed_position {
        bail!("Failed some positions");
    }
    Ok(())
}

#[test]
fn check_tactics_depth_two() -> Result<()> {
    check_tactics(SearchConfig::default(), DEPTH, |_| Ok(true))
}

#[test]
fn check_material_tactics_medium() -> Result<()> {
    check_tactics(SearchConfig::default(), Difficulty::Medium.depth(), |record| Ok(!is_mate(record)?))
}

#[test]
fn check_mate_missed_at_depth_three() -> Result<()> {
    // With a ply left after Qxf7#, the mated position is only worth its material,
    // and a quiet queen move that wins more later scores higher
    let mut position = GamePosition::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")?;

    let outcome = find_best_move(&mut position, 3)?.expect("white has moves");
    assert_eq!(outcome.best_move(), BestMove { source: Square::H5, dest: Square::G5 });

    let outcome = find_best_move(&mut position, 2)?.expect("white has moves");
    assert_eq!(outcome.best_move(), BestMove { source: Square::H5, dest: Square::F7 });
    Ok(())
}

#[test]
fn check_scholars_mate() -> Result<()> {
    let records = epd::read_epd(PathBuf::from(TACTICS_PATH).as_path())?;
    let record = records.iter()
        .find(|x| x.id.as_deref() == Some("scholars.mate"))
        .expect("scholars.mate is in the tactics file");

    check_position(record, |position| {
        Ok(find_best_move(position, DEPTH)?.map(|x| x.best_move()))
    })
}

#[test]
fn check_white_perspective_with_white_to_move() -> Result<()> {
    // White to move: both perspectives agree
    let config = SearchConfig {
        root_perspective: RootPerspective::White,
    };
    let records = epd::read_epd(PathBuf::from(TACTICS_PATH).as_path())?;

    for record in records.iter().filter(|x| x.fen.split(' ').nth(1) == Some("w")) {
        check_position(record, |position| {
            Ok(find_best_move_with(position, DEPTH, &config)?.map(|x| x.best_move()))
        })?;
    }

    Ok(())
}
