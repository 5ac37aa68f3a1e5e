#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Actors<T> {
    pub me: T,
    pub enemies: [T; 2],
}

impl<T: Copy> Actors<T> {
    pub fn from_players(players: [T; 3], my_index: usize) -> Actors<T> {
        Actors {
            me: players[my_index % 3],
            enemies: [players[(my_index + 1) % 3], players[(my_index + 2) % 3]],
        }
    }

    pub fn all(&self) -> [T; 3] {
        [self.me, self.enemies[0], self.enemies[1]]
    }

    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> Actors<U> {
        Actors {
            me: f(self.me),
            enemies: [f(self.enemies[0]), f(self.enemies[1])],
        }
    }
}
