use models::point::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Coord {
        Coord { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Coord {
        Coord::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    pub fn manhattan(self, other: Coord) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn chebyshev(self, other: Coord) -> i64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn euclidean(self, other: Coord) -> f64 {
        self.to_point().dist(other.to_point())
    }

    pub fn neighbours(self) -> [Coord; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    pub fn splash_area(self) -> Vec<Coord> {
        let mut area = vec![self];
        for dx in -1..2 {
            for dy in -1..2 {
                if dx != 0 || dy != 0 {
                    area.push(self.offset(dx, dy));
                }
            }
        }
        area
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    pub fn new(width: i64, height: i64) -> Bounds {
        Bounds { width, height }
    }

    pub fn contains(&self, c: Coord) -> bool {
        0 <= c.x && c.x < self.width && 0 <= c.y && c.y < self.height
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.y * self.width + c.x) as usize)
        } else {
            None
        }
    }

    fn area(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    pub fn cells_within(&self, center: Coord, radius: i64) -> Vec<Coord> {
        let mut cells = vec![];
        for dx in -radius..radius + 1 {
            for dy in -radius..radius + 1 {
                let c = center.offset(dx, dy);
                if self.contains(c) && center.manhattan(c) <= radius {
                    cells.push(c);
                }
            }
        }
        cells
    }

    pub fn ring(&self, center: Coord, distance: i64) -> Vec<Coord> {
        self.cells_within(center, distance)
            .into_iter()
            .filter(|&c| center.manhattan(c) == distance)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Grid<T> {
    bounds: Bounds,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(bounds: Bounds, value: T) -> Grid<T> {
        Grid {
            bounds,
            cells: vec![value; bounds.area()],
        }
    }
}

impl<T> Grid<T> {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn get(&self, c: Coord) -> Option<&T> {
        self.bounds.index(c).map(|i| &self.cells[i])
    }

    /// Returns `false` when `c` is out of bounds.
    pub fn set(&mut self, c: Coord, value: T) -> bool {
        match self.bounds.index(c) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn column_major<'a>(&'a self) -> impl Iterator<Item = (Coord, &'a T)> + 'a {
        let Bounds { width, height } = self.bounds;
        let cells = &self.cells;
        (0..width).flat_map(move |x| {
            (0..height).map(move |y| (Coord::new(x, y), &cells[(y * width + x) as usize]))
        })
    }

    pub fn row_major<'a>(&'a self) -> impl Iterator<Item = (Coord, &'a T)> + 'a {
        let Bounds { width, height } = self.bounds;
        let cells = &self.cells;
        (0..height).flat_map(move |y| {
            (0..width).map(move |x| (Coord::new(x, y), &cells[(y * width + x) as usize]))
        })
    }
}
