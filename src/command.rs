use std::fmt;

use models::cellularena::{CellType, OrganDir};
use models::squad::AgentId;
use models::{Coord, Move, Point};

pub trait Command: fmt::Display {
    fn add_debug_message(&mut self, _message: String) {}
}

impl Command for Move {}

fn write_message(f: &mut fmt::Formatter, separator: &str, messages: &[String]) -> fmt::Result {
    if messages.is_empty() {
        return Ok(());
    }
    write!(f, "{}{}", separator, messages.join(" "))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Growth {
    Wait,
    Grow {
        organ_id: i64,
        pos: Coord,
        organ: CellType,
        dir: OrganDir,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    growth: Growth,
    debug_messages: Vec<String>,
}

impl Action {
    pub fn wait() -> Action {
        Action::from(Growth::Wait)
    }

    pub fn grow(organ_id: i64, pos: Coord, organ: CellType, dir: OrganDir) -> Action {
        Action::from(Growth::Grow {
            organ_id,
            pos,
            organ,
            dir,
        })
    }

    pub fn growth(&self) -> &Growth {
        &self.growth
    }
}

impl From<Growth> for Action {
    fn from(growth: Growth) -> Action {
        Action {
            growth,
            debug_messages: vec![],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.growth {
            Growth::Wait => f.write_str("WAIT")?,
            Growth::Grow {
                organ_id,
                pos,
                organ,
                dir,
            } => write!(f, "GROW {} {} {} {} {}", organ_id, pos.x, pos.y, organ, dir)?,
        }
        write_message(f, " ", &self.debug_messages)
    }
}

impl Command for Action {
    fn add_debug_message(&mut self, message: String) {
        self.debug_messages.push(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquadAction {
    Move(Coord),
    Shoot(AgentId),
    Throw(Coord),
    HunkerDown,
}

impl fmt::Display for SquadAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SquadAction::Move(c) => write!(f, "MOVE {} {}", c.x, c.y),
            SquadAction::Shoot(id) => write!(f, "SHOOT {}", id),
            SquadAction::Throw(c) => write!(f, "THROW {} {}", c.x, c.y),
            SquadAction::HunkerDown => f.write_str("HUNKER_DOWN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentOrders {
    pub agent_id: AgentId,
    pub actions: Vec<SquadAction>,
    debug_messages: Vec<String>,
}

impl AgentOrders {
    pub fn new(agent_id: AgentId, actions: Vec<SquadAction>) -> AgentOrders {
        AgentOrders {
            agent_id,
            actions,
            debug_messages: vec![],
        }
    }
}

impl fmt::Display for AgentOrders {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.agent_id)?;
        for action in &self.actions {
            write!(f, ";{}", action)?;
        }
        write_message(f, ";MESSAGE ", &self.debug_messages)
    }
}

impl Command for AgentOrders {
    fn add_debug_message(&mut self, message: String) {
        self.debug_messages.push(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub point: Point,
    debug_messages: Vec<String>,
}

impl Destination {
    pub fn new(point: Point) -> Destination {
        Destination {
            point,
            debug_messages: vec![],
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let round = |v: f64| (v + 0.5).floor() as i64;
        write!(f, "{} {}", round(self.point.x), round(self.point.y))?;
        write_message(f, " ", &self.debug_messages)
    }
}

impl Command for Destination {
    fn add_debug_message(&mut self, message: String) {
        self.debug_messages.push(message)
    }
}
