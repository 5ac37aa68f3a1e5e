use std::io::BufRead;

use error::InputResult;
use interactor::{Game, Input, Tokens};
use models::cellularena::{Cell, CellSnapshot, ProteinStock};
use models::{Bounds, Coord, Grid};
use strategy::CellularenaStrategy;

fn read_stock(mut tokens: Tokens) -> InputResult<ProteinStock> {
    Ok(ProteinStock {
        a: tokens.next("protein A")?,
        b: tokens.next("protein B")?,
        c: tokens.next("protein C")?,
        d: tokens.next("protein D")?,
    })
}

fn read_cell(mut tokens: Tokens) -> InputResult<Cell> {
    let x = tokens.next("x")?;
    let y = tokens.next("y")?;
    Ok(Cell {
        pos: Coord::new(x, y),
        cell_type: tokens.next("type")?,
        owner: tokens.next("owner")?,
        organ_id: tokens.next("organId")?,
        organ_dir: tokens.next("organDir")?,
        organ_parent_id: tokens.next("organParentId")?,
        organ_root_id: tokens.next("organRootId")?,
    })
}

pub struct Cellularena;

impl Game for Cellularena {
    type Setup = Bounds;
    type Snapshot = CellSnapshot;
    type Strategy = CellularenaStrategy;

    fn read_setup<R: BufRead>(input: &mut Input<R>) -> InputResult<Bounds> {
        let mut tokens = input.tokens()?;
        let width = tokens.next("width")?;
        let height = tokens.next("height")?;
        info!("arena {}x{}", width, height);
        Ok(Bounds::new(width, height))
    }

    fn read_turn<R: BufRead>(
        input: &mut Input<R>,
        bounds: &Bounds,
    ) -> InputResult<Option<CellSnapshot>> {
        let entity_count: usize = match input.next_tokens()? {
            Some(mut tokens) => tokens.next("entity_count")?,
            None => return Ok(None),
        };
        let mut grid = Grid::filled(*bounds, None);
        for _ in 0..entity_count {
            let cell = read_cell(input.tokens()?)?;
            let pos = cell.pos;
            if !grid.set(pos, Some(cell)) {
                warn!("entity outside the arena at {:?}", pos);
            }
        }
        let my_stock = read_stock(input.tokens()?)?;
        let opponent_stock = read_stock(input.tokens()?)?;
        let required_actions = input.value("required_actions_count")?;
        Ok(Some(CellSnapshot {
            grid,
            my_stock,
            opponent_stock,
            required_actions,
        }))
    }

    fn strategy(_: &Bounds) -> CellularenaStrategy {
        CellularenaStrategy::new()
    }
}
