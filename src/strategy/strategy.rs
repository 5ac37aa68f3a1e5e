use command::Command;

pub type Turn = i64;

pub trait Strategy {
    type Snapshot;
    type Command: Command;

    /// One line per returned command, in order.
    fn tick(&mut self, turn: Turn, snapshot: &Self::Snapshot) -> Vec<Self::Command>;
}
