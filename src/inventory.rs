use std::fs;

use thiserror::Error;

use crate::model::{Dataset, Pool, Snapshot, ZBox};

mod command;
mod parse;

pub use self::command::{CommandError, CommandRunner, SystemRunner};
pub use self::parse::format_creation;

pub const LOCAL_BOX_NAME: &str = "Local ZBox";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("list pools")]
    Pools {
        #[source]
        source: CommandError,
    },

    #[error("list datasets of pool {pool}")]
    Datasets {
        pool: String,
        #[source]
        source: CommandError,
    },
}

/// Identity attributes of the inspected host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostIdentity {
    pub name: String,
    pub hostname: String,
    pub user: String,
}

impl HostIdentity {
    pub fn detect() -> Self {
        let hostname = ["/proc/sys/kernel/hostname", "/etc/hostname"]
            .iter()
            .filter_map(|p| fs::read_to_string(p).ok())
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "localhost".to_string());

        HostIdentity {
            name: LOCAL_BOX_NAME.to_string(),
            hostname,
            user: std::env::var("USER").unwrap_or_default(),
        }
    }
}

/// Builds the inventory tree by walking pools, then datasets, then snapshots.
/// Each external command runs once per entity, serially.
pub struct Loader<R> {
    runner: R,
}

impl<R: CommandRunner> Loader<R> {
    pub fn new(runner: R) -> Self {
        Loader { runner }
    }

    pub fn load_box(&self, identity: HostIdentity) -> Result<ZBox, LoadError> {
        let out =
            command::list_pools(&self.runner).map_err(|source| LoadError::Pools { source })?;

        let mut pools = Vec::new();
        for row in parse::pool_rows(&out) {
            let datasets = self.load_datasets(&row.name)?;
            let pool = Pool::new(row.name, row.health, datasets);
            tracing::debug!(
                pool = %pool.name,
                datasets = pool.num_datasets,
                snapshots = pool.num_snapshots,
                "loaded pool"
            );
            pools.push(pool);
        }

        tracing::info!(host = %identity.hostname, pools = pools.len(), "inventory loaded");
        Ok(ZBox {
            name: identity.name,
            hostname: identity.hostname,
            user: identity.user,
            pools,
        })
    }

    fn load_datasets(&self, pool: &str) -> Result<Vec<Dataset>, LoadError> {
        let out = command::list_datasets(&self.runner, pool).map_err(|source| {
            LoadError::Datasets {
                pool: pool.to_string(),
                source,
            }
        })?;

        Ok(parse::dataset_rows(&out)
            .into_iter()
            .map(|row| {
                let snapshots = self.load_snapshots(&row.name);
                Dataset {
                    name: row.name,
                    used: row.used,
                    available: row.available,
                    mountpoint: row.mountpoint,
                    snapshots,
                }
            })
            .collect())
    }

    /// Never fails: a dataset whose snapshots cannot be listed has none.
    fn load_snapshots(&self, dataset: &str) -> Vec<Snapshot> {
        let out = match command::list_snapshots(&self.runner, dataset) {
            Ok(out) => out,
            Err(err) => {
                tracing::debug!(dataset, error = %err, "snapshot listing failed; treating as empty");
                return Vec::new();
            }
        };

        parse::snapshot_rows(&out)
            .into_iter()
            .map(|row| Snapshot {
                name: row.name,
                size: row.size,
                date: format_creation(&row.creation),
            })
            .collect()
    }
}

impl Loader<SystemRunner> {
    pub fn system() -> Self {
        Loader::new(SystemRunner)
    }
}
