use std::io::BufRead;

use error::InputResult;
use interactor::{Game, Input};
use models::olympics::{MiniGame, MiniGameKind, OlympicsSnapshot, Registers};
use models::Actors;
use strategy::OlympicsStrategy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlympicsSetup {
    pub player_idx: usize,
    pub nb_games: usize,
}

pub struct Olympics;

impl Game for Olympics {
    type Setup = OlympicsSetup;
    type Snapshot = OlympicsSnapshot;
    type Strategy = OlympicsStrategy;

    fn read_setup<R: BufRead>(input: &mut Input<R>) -> InputResult<OlympicsSetup> {
        let player_idx = input.value("player_idx")?;
        let nb_games = input.value("nb_games")?;
        info!("player {} of 3, {} games", player_idx, nb_games);
        Ok(OlympicsSetup { player_idx, nb_games })
    }

    fn read_turn<R: BufRead>(
        input: &mut Input<R>,
        setup: &OlympicsSetup,
    ) -> InputResult<Option<OlympicsSnapshot>> {
        let mut totals = [0; 3];
        for (i, total) in totals.iter_mut().enumerate() {
            let mut tokens = if i == 0 {
                match input.next_tokens()? {
                    Some(tokens) => tokens,
                    None => return Ok(None),
                }
            } else {
                input.tokens()?
            };
            *total = tokens.next("score")?;
            let mut medals = [0i64; 12];
            for medal in medals.iter_mut() {
                *medal = tokens.next("medal")?;
            }
            debug!("player {}: total {} medals {:?}", i, total, medals);
        }

        let mut games = Vec::with_capacity(setup.nb_games);
        for i in 0..setup.nb_games {
            let mut tokens = input.tokens()?;
            let gpu: String = tokens.next("gpu")?;
            let mut regs: Registers = [0; 7];
            for reg in regs.iter_mut() {
                *reg = tokens.next("reg")?;
            }
            if let Some(kind) = MiniGameKind::from_index(i) {
                games.push(MiniGame::new(kind, &gpu, regs, setup.player_idx));
            }
        }

        Ok(Some(OlympicsSnapshot {
            reported_scores: Actors::from_players(totals, setup.player_idx),
            games,
        }))
    }

    fn strategy(_: &OlympicsSetup) -> OlympicsStrategy {
        OlympicsStrategy::new()
    }
}
