use time::precise_time_s;

use command::Command;
use config::config;
use strategy::{Strategy, Turn};

pub struct TimingWrapper<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> TimingWrapper<S> {
    pub fn new(strategy: S) -> TimingWrapper<S> {
        TimingWrapper { strategy }
    }
}

impl<S: Strategy> Strategy for TimingWrapper<S> {
    type Snapshot = S::Snapshot;
    type Command = S::Command;

    fn tick(&mut self, turn: Turn, snapshot: &S::Snapshot) -> Vec<S::Command> {
        let start = precise_time_s();
        let mut commands = self.strategy.tick(turn, snapshot);
        let elapsed_ms = (precise_time_s() - start) * 1000.0;
        if elapsed_ms > config().turn_budget_ms {
            warn!("turn {}: SLOW {:.2}ms", turn, elapsed_ms);
        }
        for command in &mut commands {
            command.add_debug_message(format!("{:.2}ms", elapsed_ms));
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command::{AgentOrders, SquadAction};
    use models::Move;

    struct Fixed;

    impl Strategy for Fixed {
        type Snapshot = ();
        type Command = Move;

        fn tick(&mut self, _: Turn, _: &()) -> Vec<Move> {
            vec![Move::Up, Move::Down]
        }
    }

    struct Sniper;

    impl Strategy for Sniper {
        type Snapshot = ();
        type Command = AgentOrders;

        fn tick(&mut self, _: Turn, _: &()) -> Vec<AgentOrders> {
            vec![AgentOrders::new(1, vec![SquadAction::Shoot(2)])]
        }
    }

    #[test]
    fn decisions_pass_through() {
        let mut strategy = TimingWrapper::new(Fixed);
        assert_eq!(strategy.tick(0, &()), vec![Move::Up, Move::Down]);
        assert_eq!(strategy.tick(1, &()), vec![Move::Up, Move::Down]);
    }

    #[test]
    fn timing_is_appended_as_a_message() {
        let orders = TimingWrapper::new(Sniper).tick(0, &());
        assert_eq!(orders.len(), 1);
        let line = orders[0].to_string();
        assert!(line.starts_with("1;SHOOT 2;MESSAGE "), "{}", line);
        assert!(line.ends_with("ms"), "{}", line);
    }
}
