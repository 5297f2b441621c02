use std::fmt;

use crate::model::Inventory;
use crate::nav::{Level, NavState, Node, Siblings, resolve};

/// One column of names, with an optional marked row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    pub level: Option<Level>,
    pub items: Vec<String>,
    pub marked: Option<usize>,
}

impl Column {
    fn from_siblings(level: Level, siblings: Option<Siblings<'_>>, marked: Option<usize>) -> Self {
        let items = siblings.map(|s| s.names()).unwrap_or_default();
        let marked = marked.filter(|&i| i < items.len());
        Column {
            level: Some(level),
            items,
            marked,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detail {
    pub fields: Vec<(&'static str, String)>,
}

impl Detail {
    fn of(node: Node<'_>) -> Self {
        let fields = match node {
            Node::Box(b) => vec![
                ("Name", b.name.clone()),
                ("Hostname", b.hostname.clone()),
                ("User", b.user.clone()),
            ],
            Node::Pool(p) => vec![
                ("Name", p.name.clone()),
                ("Health", p.health.clone()),
                ("Datasets", p.num_datasets.to_string()),
                ("Snapshots", p.num_snapshots.to_string()),
            ],
            Node::Dataset(d) => vec![
                ("Name", d.name.clone()),
                ("Used", d.used.clone()),
                ("Available", d.available.clone()),
                ("Mountpoint", d.mountpoint.clone()),
            ],
            Node::Snapshot(s) => vec![
                ("Name", s.name.clone()),
                ("Size", s.size.clone()),
                ("Date", s.date.clone()),
            ],
        };
        Detail { fields }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in &self.fields {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    pub active: Level,
    pub parent: Column,
    pub current: Column,
    pub next: Column,
    pub detail: Detail,
}

pub fn project(inv: &Inventory, nav: &NavState) -> Projection {
    let active = nav.active();

    let parent = match active.prev() {
        Some(level) => Column::from_siblings(
            level,
            nav.siblings(level, inv),
            Some(nav.committed(level)),
        ),
        None => Column::default(),
    };

    let current_siblings = nav.siblings(active, inv);
    let cursor = nav.cursor(active);
    let current = Column::from_siblings(active, current_siblings, Some(cursor));

    // Preview follows the cursor, not the committed choice.
    let next = match active.next() {
        Some(level) => {
            let mut path = nav.committed_path(active);
            path.push(cursor);
            Column::from_siblings(level, resolve(inv, &path), None)
        }
        None => Column::default(),
    };

    let detail = current_siblings
        .and_then(|s| s.node(cursor))
        .map(Detail::of)
        .unwrap_or_default();

    Projection {
        active,
        parent,
        current,
        next,
        detail,
    }
}
