use std::fmt;
use std::str::FromStr;

use models::grid::{Coord, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protein {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Wall,
    Root,
    Basic,
    Tentacle,
    Harvester,
    Sporer,
    Protein(Protein),
}

impl CellType {
    pub fn is_protein(self) -> bool {
        match self {
            CellType::Protein(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            CellType::Wall => "WALL",
            CellType::Root => "ROOT",
            CellType::Basic => "BASIC",
            CellType::Tentacle => "TENTACLE",
            CellType::Harvester => "HARVESTER",
            CellType::Sporer => "SPORER",
            CellType::Protein(Protein::A) => "A",
            CellType::Protein(Protein::B) => "B",
            CellType::Protein(Protein::C) => "C",
            CellType::Protein(Protein::D) => "D",
        })
    }
}

impl FromStr for CellType {
    type Err = ();

    fn from_str(s: &str) -> Result<CellType, ()> {
        Ok(match s {
            "WALL" => CellType::Wall,
            "ROOT" => CellType::Root,
            "BASIC" => CellType::Basic,
            "TENTACLE" => CellType::Tentacle,
            "HARVESTER" => CellType::Harvester,
            "SPORER" => CellType::Sporer,
            "A" => CellType::Protein(Protein::A),
            "B" => CellType::Protein(Protein::B),
            "C" => CellType::Protein(Protein::C),
            "D" => CellType::Protein(Protein::D),
            _ => return Err(()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Me,
    Opponent,
    Neutral,
}

impl FromStr for Owner {
    type Err = ();

    fn from_str(s: &str) -> Result<Owner, ()> {
        match s {
            "1" => Ok(Owner::Me),
            "0" => Ok(Owner::Opponent),
            "-1" => Ok(Owner::Neutral),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganDir {
    N,
    E,
    S,
    W,
    X,
}

impl OrganDir {
    pub fn towards(from: Coord, to: Coord) -> OrganDir {
        if from.x == to.x {
            if from.y < to.y {
                OrganDir::S
            } else {
                OrganDir::N
            }
        } else if from.x < to.x {
            OrganDir::E
        } else {
            OrganDir::W
        }
    }

    pub fn step(self) -> (i64, i64) {
        match self {
            OrganDir::N => (0, -1),
            OrganDir::E => (1, 0),
            OrganDir::S => (0, 1),
            OrganDir::W => (-1, 0),
            OrganDir::X => (0, 0),
        }
    }
}

impl fmt::Display for OrganDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            OrganDir::N => "N",
            OrganDir::E => "E",
            OrganDir::S => "S",
            OrganDir::W => "W",
            OrganDir::X => "X",
        })
    }
}

impl FromStr for OrganDir {
    type Err = ();

    fn from_str(s: &str) -> Result<OrganDir, ()> {
        match s {
            "N" => Ok(OrganDir::N),
            "E" => Ok(OrganDir::E),
            "S" => Ok(OrganDir::S),
            "W" => Ok(OrganDir::W),
            "X" => Ok(OrganDir::X),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub pos: Coord,
    pub cell_type: CellType,
    pub owner: Owner,
    pub organ_id: i64,
    pub organ_dir: OrganDir,
    pub organ_parent_id: i64,
    pub organ_root_id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProteinStock {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

#[derive(Debug, Clone)]
pub struct CellSnapshot {
    pub grid: Grid<Option<Cell>>,
    pub my_stock: ProteinStock,
    pub opponent_stock: ProteinStock,
    pub required_actions: usize,
}

impl CellSnapshot {
    pub fn cell(&self, c: Coord) -> Option<&Cell> {
        self.grid.get(c).and_then(|cell| cell.as_ref())
    }

    pub fn entities<'a>(&'a self) -> impl Iterator<Item = &'a Cell> + 'a {
        self.grid.column_major().filter_map(|(_, cell)| cell.as_ref())
    }

    pub fn my_cells(&self) -> Vec<&Cell> {
        self.entities().filter(|cell| cell.owner == Owner::Me).collect()
    }

    pub fn my_roots(&self) -> Vec<&Cell> {
        self.entities()
            .filter(|cell| cell.owner == Owner::Me && cell.cell_type == CellType::Root)
            .collect()
    }

    pub fn proteins(&self) -> Vec<&Cell> {
        self.entities().filter(|cell| cell.cell_type.is_protein()).collect()
    }

    pub fn harvestable_proteins(&self) -> Vec<&Cell> {
        self.entities()
            .filter(|cell| cell.cell_type.is_protein() && !self.has_harvester_next_to(cell.pos))
            .collect()
    }

    pub fn has_harvester_next_to(&self, c: Coord) -> bool {
        c.neighbours().iter().any(|&n| {
            self.cell(n)
                .map_or(false, |cell| cell.cell_type == CellType::Harvester)
        })
    }

    pub fn protein_in_range(&self) -> bool {
        self.my_cells().iter().any(|cell| {
            let p = cell.pos;
            [p.offset(2, 0), p.offset(-2, 0), p.offset(0, 2), p.offset(0, -2)]
                .iter()
                .any(|&c| self.cell(c).map_or(false, |other| other.cell_type.is_protein()))
        })
    }

    pub fn is_free(&self, c: Coord) -> bool {
        self.grid.bounds().contains(c) && self.cell(c).is_none()
    }
}
