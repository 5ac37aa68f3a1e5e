use std::io::BufRead;

use error::{InputError, InputResult};
use interactor::{Game, Input, Tokens};
use models::squad::{Agent, AgentSpec, SquadSetup, SquadTurn, Tile};
use models::{Bounds, Coord, Grid};
use strategy::SquadStrategy;

fn read_spec(mut tokens: Tokens) -> InputResult<AgentSpec> {
    Ok(AgentSpec {
        id: tokens.next("agentId")?,
        player: tokens.next("player")?,
        shoot_cooldown: tokens.next("shootCooldown")?,
        optimal_range: tokens.next("optimalRange")?,
        soaking_power: tokens.next("soakingPower")?,
        splash_bombs: tokens.next("splashBombs")?,
    })
}

fn read_tile(tokens: &mut Tokens) -> InputResult<(Coord, Tile)> {
    let x = tokens.next("x")?;
    let y = tokens.next("y")?;
    let code: i64 = tokens.next("tileType")?;
    match Tile::from_code(code) {
        Some(tile) => Ok((Coord::new(x, y), tile)),
        None => Err(InputError::BadToken {
            line: tokens.line,
            what: "tileType",
            token: code.to_string(),
        }),
    }
}

pub struct Soak;

impl Game for Soak {
    type Setup = SquadSetup;
    type Snapshot = SquadTurn;
    type Strategy = SquadStrategy;

    fn read_setup<R: BufRead>(input: &mut Input<R>) -> InputResult<SquadSetup> {
        let my_id = input.value("my_id")?;
        let count: usize = input.value("agent_data_count")?;
        let mut roster = Vec::with_capacity(count);
        for _ in 0..count {
            roster.push(read_spec(input.tokens()?)?);
        }

        let mut tokens = input.tokens()?;
        let width = tokens.next("width")?;
        let height = tokens.next("height")?;
        let mut tiles = Grid::filled(Bounds::new(width, height), Tile::Empty);
        for _ in 0..height {
            let mut row = input.tokens()?;
            for _ in 0..width {
                let (pos, tile) = read_tile(&mut row)?;
                if !tiles.set(pos, tile) {
                    warn!("tile outside the map at {:?}", pos);
                }
            }
        }
        info!("player {}, {} agents, map {}x{}", my_id, roster.len(), width, height);
        Ok(SquadSetup { my_id, roster, tiles })
    }

    fn read_turn<R: BufRead>(
        input: &mut Input<R>,
        setup: &SquadSetup,
    ) -> InputResult<Option<SquadTurn>> {
        let count: usize = match input.next_tokens()? {
            Some(mut tokens) => tokens.next("agent_count")?,
            None => return Ok(None),
        };
        let mut agents = Vec::with_capacity(count);
        for _ in 0..count {
            let mut tokens = input.tokens()?;
            let id = tokens.next("agentId")?;
            let x = tokens.next("x")?;
            let y = tokens.next("y")?;
            let cooldown = tokens.next("cooldown")?;
            let splash_bombs = tokens.next("splashBombs")?;
            let wetness = tokens.next("wetness")?;
            match setup.spec(id) {
                Some(&spec) => agents.push(Agent {
                    spec,
                    pos: Coord::new(x, y),
                    cooldown,
                    splash_bombs,
                    wetness,
                }),
                None => warn!("agent {} is not in the roster, skipping", id),
            }
        }
        let my_agent_count = input.value("my_agent_count")?;
        Ok(Some(SquadTurn { agents, my_agent_count }))
    }

    fn strategy(setup: &SquadSetup) -> SquadStrategy {
        SquadStrategy::new(setup.clone())
    }
}
