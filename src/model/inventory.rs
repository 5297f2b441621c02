use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub size: String,
    /// `DD-MM-YYYY`, or the raw creation field when it was not an epoch value.
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub used: String,
    pub available: String,
    pub mountpoint: String,
    pub snapshots: Vec<Snapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub name: String,
    pub health: String,
    pub num_datasets: usize,
    pub num_snapshots: usize,
    pub datasets: Vec<Dataset>,
}

impl Pool {
    /// Builds a pool and caches its aggregate counts. Counts are never
    /// recomputed after this.
    pub fn new(name: String, health: String, datasets: Vec<Dataset>) -> Self {
        let num_datasets = datasets.len();
        let num_snapshots = datasets.iter().map(|d| d.snapshots.len()).sum();
        Pool {
            name,
            health,
            num_datasets,
            num_snapshots,
            datasets,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZBox {
    pub name: String,
    pub hostname: String,
    pub user: String,
    pub pools: Vec<Pool>,
}

/// Root of the browsable tree. Usually holds the single local box.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub boxes: Vec<ZBox>,
}

impl Inventory {
    pub fn single(zbox: ZBox) -> Self {
        Inventory { boxes: vec![zbox] }
    }

    /// Fixed two-host inventory used by `--demo`.
    pub fn demo() -> Self {
        fn snap(name: &str, size: &str, date: &str) -> Snapshot {
            Snapshot {
                name: name.to_string(),
                size: size.to_string(),
                date: date.to_string(),
            }
        }
        fn dataset(name: &str, used: &str, avail: &str, snapshots: Vec<Snapshot>) -> Dataset {
            Dataset {
                name: name.to_string(),
                used: used.to_string(),
                available: avail.to_string(),
                mountpoint: format!("/{}", name),
                snapshots,
            }
        }

        let alpha = ZBox {
            name: "ZBox alpha".to_string(),
            hostname: "alpha.lan".to_string(),
            user: "operator".to_string(),
            pools: vec![
                Pool::new(
                    "tank".to_string(),
                    "ONLINE".to_string(),
                    vec![
                        dataset(
                            "tank",
                            "52428800",
                            "1073741824",
                            vec![snap("tank@initial", "0", "01-01-2024")],
                        ),
                        dataset(
                            "tank/data",
                            "41943040",
                            "1073741824",
                            vec![
                                snap("tank/data@daily-1", "1048576", "14-03-2024"),
                                snap("tank/data@daily-2", "2097152", "15-03-2024"),
                                snap("tank/data@manual", "4096", "not-a-number"),
                            ],
                        ),
                        dataset("tank/scratch", "8192", "1073741824", Vec::new()),
                    ],
                ),
                Pool::new("backup".to_string(), "DEGRADED".to_string(), Vec::new()),
            ],
        };

        let beta = ZBox {
            name: "ZBox beta".to_string(),
            hostname: "beta.lan".to_string(),
            user: "operator".to_string(),
            pools: vec![Pool::new(
                "rpool".to_string(),
                "ONLINE".to_string(),
                vec![dataset(
                    "rpool/home",
                    "209715200",
                    "536870912",
                    vec![snap("rpool/home@weekly", "65536", "07-04-2024")],
                )],
            )],
        };

        Inventory {
            boxes: vec![alpha, beta],
        }
    }
}
