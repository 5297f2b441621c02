//! Selection state over the four-level inventory tree.
//!
//! Each level keeps a transient `cursor` and the `committed` index recorded
//! when the operator last drilled into the level below it. Sibling lists
//! below the root are always resolved through the committed ancestry.

use crate::model::{Dataset, Inventory, Pool, Snapshot, ZBox};

pub const LEVEL_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Box,
    Pool,
    Dataset,
    Snapshot,
}

impl Level {
    pub const ALL: [Level; LEVEL_COUNT] =
        [Level::Box, Level::Pool, Level::Dataset, Level::Snapshot];

    pub fn index(self) -> usize {
        match self {
            Level::Box => 0,
            Level::Pool => 1,
            Level::Dataset => 2,
            Level::Snapshot => 3,
        }
    }

    pub fn next(self) -> Option<Level> {
        match self {
            Level::Box => Some(Level::Pool),
            Level::Pool => Some(Level::Dataset),
            Level::Dataset => Some(Level::Snapshot),
            Level::Snapshot => None,
        }
    }

    pub fn prev(self) -> Option<Level> {
        match self {
            Level::Box => None,
            Level::Pool => Some(Level::Box),
            Level::Dataset => Some(Level::Pool),
            Level::Snapshot => Some(Level::Dataset),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Box => "ZBox",
            Level::Pool => "ZPools",
            Level::Dataset => "Datasets",
            Level::Snapshot => "Snapshots",
        }
    }
}

/// A sibling list at one level of the tree.
#[derive(Clone, Copy, Debug)]
pub enum Siblings<'a> {
    Boxes(&'a [ZBox]),
    Pools(&'a [Pool]),
    Datasets(&'a [Dataset]),
    Snapshots(&'a [Snapshot]),
}

/// One entity of the tree.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Box(&'a ZBox),
    Pool(&'a Pool),
    Dataset(&'a Dataset),
    Snapshot(&'a Snapshot),
}

impl<'a> Siblings<'a> {
    pub fn len(&self) -> usize {
        match self {
            Siblings::Boxes(s) => s.len(),
            Siblings::Pools(s) => s.len(),
            Siblings::Datasets(s) => s.len(),
            Siblings::Snapshots(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node(&self, idx: usize) -> Option<Node<'a>> {
        match *self {
            Siblings::Boxes(s) => s.get(idx).map(Node::Box),
            Siblings::Pools(s) => s.get(idx).map(Node::Pool),
            Siblings::Datasets(s) => s.get(idx).map(Node::Dataset),
            Siblings::Snapshots(s) => s.get(idx).map(Node::Snapshot),
        }
    }

    pub fn names(&self) -> Vec<String> {
        (0..self.len())
            .filter_map(|i| self.node(i))
            .map(|n| n.name().to_string())
            .collect()
    }
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Node::Box(b) => &b.name,
            Node::Pool(p) => &p.name,
            Node::Dataset(d) => &d.name,
            Node::Snapshot(s) => &s.name,
        }
    }

    pub fn children(&self) -> Option<Siblings<'a>> {
        match *self {
            Node::Box(b) => Some(Siblings::Pools(&b.pools)),
            Node::Pool(p) => Some(Siblings::Datasets(&p.datasets)),
            Node::Dataset(d) => Some(Siblings::Snapshots(&d.snapshots)),
            Node::Snapshot(_) => None,
        }
    }
}

/// Resolves the sibling list at depth `path.len()`, where `path[i]` is the
/// chosen index at level `i`. `None` when any step is out of range.
pub fn resolve<'a>(inv: &'a Inventory, path: &[usize]) -> Option<Siblings<'a>> {
    path.iter()
        .try_fold(Siblings::Boxes(&inv.boxes), |siblings, &idx| {
            siblings.node(idx)?.children()
        })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LevelState {
    cursor: usize,
    committed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Up,
    Down,
    In,
    Out,
    Quit,
    Resize { width: u16, height: u16 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    levels: [LevelState; LEVEL_COUNT],
    active: Level,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            levels: [LevelState::default(); LEVEL_COUNT],
            active: Level::Box,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Level {
        self.active
    }

    pub fn cursor(&self, level: Level) -> usize {
        self.levels[level.index()].cursor
    }

    pub fn committed(&self, level: Level) -> usize {
        self.levels[level.index()].committed
    }

    fn state_mut(&mut self, level: Level) -> &mut LevelState {
        &mut self.levels[level.index()]
    }

    /// Committed indices of every level above `level`.
    pub fn committed_path(&self, level: Level) -> Vec<usize> {
        self.levels[..level.index()]
            .iter()
            .map(|s| s.committed)
            .collect()
    }

    /// Siblings at `level` under the committed ancestry.
    pub fn siblings<'a>(&self, level: Level, inv: &'a Inventory) -> Option<Siblings<'a>> {
        resolve(inv, &self.committed_path(level))
    }

    pub fn sibling_count(&self, level: Level, inv: &Inventory) -> usize {
        self.siblings(level, inv).map_or(0, |s| s.len())
    }

    pub fn move_up(&mut self) {
        let state = self.state_mut(self.active);
        state.cursor = state.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, inv: &Inventory) {
        let count = self.sibling_count(self.active, inv);
        let state = self.state_mut(self.active);
        if state.cursor + 1 < count {
            state.cursor += 1;
        }
    }

    pub fn drill_in(&mut self, inv: &Inventory) {
        let Some(next) = self.active.next() else {
            return;
        };
        if self.sibling_count(self.active, inv) == 0 {
            return;
        }
        let active = self.active;
        let state = self.state_mut(active);
        state.committed = state.cursor;
        self.active = next;
        self.state_mut(next).cursor = 0;
        tracing::trace!(from = ?active, to = ?next, "drill in");
    }

    pub fn drill_out(&mut self) {
        let Some(prev) = self.active.prev() else {
            return;
        };
        tracing::trace!(from = ?self.active, to = ?prev, "drill out");
        self.active = prev;
        let state = self.state_mut(prev);
        state.cursor = state.committed;
    }

    /// Applies one input event. Resize is not consumed here.
    pub fn apply(&mut self, event: NavEvent, inv: &Inventory) -> Flow {
        match event {
            NavEvent::Up => self.move_up(),
            NavEvent::Down => self.move_down(inv),
            NavEvent::In => self.drill_in(inv),
            NavEvent::Out => self.drill_out(),
            NavEvent::Quit => return Flow::Quit,
            NavEvent::Resize { .. } => {}
        }
        Flow::Continue
    }
}

#[cfg(test)]
#[path = "tests/nav_tests.rs"]
mod tests;
