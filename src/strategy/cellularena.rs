use command::Action;
use models::cellularena::{Cell, CellSnapshot, CellType, OrganDir, Owner};
use models::Coord;
use strategy::{evaluate, first_min_by, Rule, Strategy, Turn};

pub struct Organism<'a> {
    pub snapshot: &'a CellSnapshot,
    pub root: &'a Cell,
}

impl<'a> Organism<'a> {
    pub fn cells(&self) -> Vec<&'a Cell> {
        let root_id = self.root.organ_id;
        self.snapshot
            .entities()
            .filter(|cell| cell.owner == Owner::Me && cell.organ_root_id == root_id)
            .collect()
    }

    pub fn origin(&self) -> Coord {
        self.cells().first().map_or(self.root.pos, |cell| cell.pos)
    }

    pub fn closest_harvestable_protein(&self) -> Option<&'a Cell> {
        let origin = self.origin();
        first_min_by(self.snapshot.harvestable_proteins(), |protein| {
            protein.pos.euclidean(origin)
        })
    }

    fn grow(&self, pos: Coord, organ: CellType, dir: OrganDir) -> Action {
        Action::grow(self.root.organ_id, pos, organ, dir)
    }
}

fn can_grow_harvester(organism: &Organism) -> bool {
    let stock = organism.snapshot.my_stock;
    stock.c >= 1
        && stock.d >= 1
        && !organism.snapshot.proteins().is_empty()
        && organism.snapshot.protein_in_range()
}

fn grow_harvester(organism: &Organism) -> Action {
    match organism.closest_harvestable_protein() {
        Some(protein) => {
            let dir = OrganDir::towards(organism.root.pos, protein.pos);
            let (dx, dy) = dir.step();
            organism.grow(protein.pos.offset(-dx, -dy), CellType::Harvester, dir)
        }
        None => Action::wait(),
    }
}

fn always(_: &Organism) -> bool {
    true
}

fn grow_basic(organism: &Organism) -> Action {
    if let Some(protein) = organism.closest_harvestable_protein() {
        return organism.grow(protein.pos, CellType::Basic, OrganDir::X);
    }
    let snapshot = organism.snapshot;
    for cell in organism.cells() {
        let p = cell.pos;
        let free = [p.offset(0, -1), p.offset(0, 1), p.offset(1, 0), p.offset(-1, 0)]
            .iter()
            .cloned()
            .find(|&c| snapshot.is_free(c));
        if let Some(free) = free {
            return organism.grow(free, CellType::Basic, OrganDir::X);
        }
    }
    Action::wait()
}

fn rules<'a>() -> [Rule<Organism<'a>, Action>; 2] {
    [
        Rule {
            name: "harvester",
            applies: can_grow_harvester,
            act: grow_harvester,
        },
        Rule {
            name: "basic",
            applies: always,
            act: grow_basic,
        },
    ]
}

#[derive(Debug, Default)]
pub struct CellularenaStrategy;

impl CellularenaStrategy {
    pub fn new() -> CellularenaStrategy {
        CellularenaStrategy
    }
}

impl Strategy for CellularenaStrategy {
    type Snapshot = CellSnapshot;
    type Command = Action;

    fn tick(&mut self, turn: Turn, snapshot: &CellSnapshot) -> Vec<Action> {
        let roots = snapshot.my_roots();
        debug!(
            "turn {}: {} roots, {} actions required, stock {:?}",
            turn,
            roots.len(),
            snapshot.required_actions,
            snapshot.my_stock
        );
        (0..snapshot.required_actions)
            .map(|i| match roots.get(i).or_else(|| roots.first()) {
                Some(&root) => {
                    let organism = Organism { snapshot, root };
                    evaluate(&rules(), &organism).unwrap_or_else(Action::wait)
                }
                None => Action::wait(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command::Growth;
    use models::cellularena::{Protein, ProteinStock};
    use models::{Bounds, Grid};

    fn cell(x: i64, y: i64, cell_type: CellType, owner: Owner, organ_id: i64) -> Cell {
        Cell {
            pos: Coord::new(x, y),
            cell_type,
            owner,
            organ_id,
            organ_dir: OrganDir::X,
            organ_parent_id: 0,
            organ_root_id: organ_id,
        }
    }

    fn root(x: i64, y: i64, id: i64) -> Cell {
        cell(x, y, CellType::Root, Owner::Me, id)
    }

    fn protein(x: i64, y: i64) -> Cell {
        cell(x, y, CellType::Protein(Protein::A), Owner::Neutral, 0)
    }

    fn snapshot(
        width: i64,
        height: i64,
        cells: Vec<Cell>,
        stock: ProteinStock,
        required: usize,
    ) -> CellSnapshot {
        let mut grid = Grid::filled(Bounds::new(width, height), None);
        for c in cells {
            let pos = c.pos;
            grid.set(pos, Some(c));
        }
        CellSnapshot {
            grid,
            my_stock: stock,
            opponent_stock: ProteinStock::default(),
            required_actions: required,
        }
    }

    fn rich() -> ProteinStock {
        ProteinStock { a: 5, b: 5, c: 5, d: 5 }
    }

    #[test]
    fn harvester_faces_protein_from_the_roots_side() {
        let s = snapshot(6, 6, vec![root(1, 1, 7), protein(3, 1)], rich(), 1);
        let actions = CellularenaStrategy::new().tick(0, &s);
        let harvester = Action::grow(7, Coord::new(2, 1), CellType::Harvester, OrganDir::E);
        assert_eq!(actions, vec![harvester]);

        let s = snapshot(6, 6, vec![root(2, 4, 7), protein(2, 2)], rich(), 1);
        let actions = CellularenaStrategy::new().tick(0, &s);
        let harvester = Action::grow(7, Coord::new(2, 3), CellType::Harvester, OrganDir::N);
        assert_eq!(actions, vec![harvester]);

        let s = snapshot(6, 6, vec![root(2, 0, 7), protein(2, 2)], rich(), 1);
        let actions = CellularenaStrategy::new().tick(0, &s);
        assert_eq!(actions[0].to_string(), "GROW 7 2 1 HARVESTER S");
    }

    #[test]
    fn basic_growth_without_harvester_proteins() {
        let poor = ProteinStock { a: 3, b: 0, c: 0, d: 0 };
        let s = snapshot(6, 6, vec![root(0, 0, 1), protein(4, 4), protein(1, 3)], poor, 1);
        let actions = CellularenaStrategy::new().tick(0, &s);
        assert_eq!(actions[0].to_string(), "GROW 1 1 3 BASIC X");
    }

    #[test]
    fn basic_growth_fills_a_free_neighbour() {
        let s = snapshot(
            3,
            3,
            vec![root(1, 0, 1), cell(0, 0, CellType::Wall, Owner::Neutral, 0)],
            ProteinStock::default(),
            1,
        );
        let actions = CellularenaStrategy::new().tick(0, &s);
        // north is off the map, south is free
        let expected = Growth::Grow {
            organ_id: 1,
            pos: Coord::new(1, 1),
            organ: CellType::Basic,
            dir: OrganDir::X,
        };
        assert_eq!(*actions[0].growth(), expected);
    }

    #[test]
    fn one_action_per_required_organism() {
        let s = snapshot(4, 4, vec![root(0, 0, 1), root(3, 3, 2)], ProteinStock::default(), 3);
        let actions = CellularenaStrategy::new().tick(0, &s);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].to_string(), "GROW 1 0 1 BASIC X");
        assert_eq!(actions[1].to_string(), "GROW 2 3 2 BASIC X");
        assert_eq!(actions[2].to_string(), "GROW 1 0 1 BASIC X");
    }

    #[test]
    fn waits_without_roots() {
        let s = snapshot(4, 4, vec![protein(1, 1)], rich(), 2);
        assert_eq!(CellularenaStrategy::new().tick(0, &s), vec![Action::wait(), Action::wait()]);
    }
}
