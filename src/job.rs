use std::{
    fs, io,
    path::{Path, PathBuf},
};

use maxrects::{Heuristic, Item, MaxRectsPacker, SplitHeuristic};
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// A packing job, read from a TOML file.
///
/// A job describes a single bin and the items that should be packed into it,
/// in the order they should be placed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Job {
    /// The width and height of the bin.
    pub bin_size: (u32, u32),

    /// Whether items are allowed to be rotated. Recorded on the packer, but
    /// placement never rotates items.
    #[serde(default = "default_rotation")]
    pub rotation: bool,

    /// The heuristic to use when none is given on the command line.
    #[serde(default, deserialize_with = "deserialize_heuristic")]
    pub heuristic: Option<Heuristic>,

    /// Reserved; accepted and passed to the packer, which ignores it.
    #[serde(default)]
    pub rectangle_merge: bool,

    /// Reserved; only `default` is recognized.
    #[serde(default)]
    pub split_heuristic: SplitHeuristicName,

    #[serde(default)]
    pub items: Vec<ItemConfig>,

    /// The path that this job came from.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Job {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, JobError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| JobError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, JobError> {
        let mut job: Self = toml::from_str(contents).map_err(|source| JobError::Toml {
            path: path.to_owned(),
            source,
        })?;
        job.file_path = path.to_owned();
        job.validate()?;

        log::trace!(
            "Loaded job from {} with {} item groups",
            path.display(),
            job.items.len()
        );

        Ok(job)
    }

    fn validate(&self) -> Result<(), JobError> {
        for item in &self.items {
            if item.size.0 == 0 || item.size.1 == 0 {
                return Err(self.invalid(format!(
                    "item '{}' has size {}x{}, but both dimensions must be positive",
                    item.name, item.size.0, item.size.1
                )));
            }

            if item.count == 0 {
                return Err(self.invalid(format!("item '{}' has a count of zero", item.name)));
            }
        }

        Ok(())
    }

    fn invalid(&self, message: String) -> JobError {
        JobError::Invalid {
            path: self.file_path.clone(),
            message,
        }
    }

    /// Creates a packer configured for this job's bin.
    pub fn packer(&self) -> MaxRectsPacker {
        MaxRectsPacker::new(self.bin_size)
            .with_rotation(self.rotation)
            .with_rectangle_merge(self.rectangle_merge)
            .with_split_heuristic(self.split_heuristic.into())
    }

    /// Expands the job's item groups into individual named items, in order.
    ///
    /// Groups with a count above one produce items named `name#1`, `name#2`,
    /// and so on.
    pub fn items(&self) -> Vec<(String, Item)> {
        let mut items = Vec::new();

        for config in &self.items {
            if config.count == 1 {
                items.push((config.name.clone(), Item::new(config.size)));
                continue;
            }

            for index in 1..=config.count {
                let name = format!("{}#{}", config.name, index);
                items.push((name, Item::new(config.size)));
            }
        }

        items
    }
}

fn default_rotation() -> bool {
    true
}

fn deserialize_heuristic<'de, D>(deserializer: D) -> Result<Option<Heuristic>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;

    name.map(|name| name.parse().map_err(de::Error::custom))
        .transpose()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ItemConfig {
    /// Used to refer to this item in reports.
    pub name: String,

    pub size: (u32, u32),

    /// How many copies of this item to pack.
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitHeuristicName {
    Default,
}

impl Default for SplitHeuristicName {
    fn default() -> Self {
        SplitHeuristicName::Default
    }
}

impl From<SplitHeuristicName> for SplitHeuristic {
    fn from(name: SplitHeuristicName) -> Self {
        match name {
            SplitHeuristicName::Default => SplitHeuristic::Default,
        }
    }
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{source} in {}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{message} in {}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

impl JobError {
    /// Tells whether this JobError originated because of a path not existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            JobError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(contents: &str) -> Result<Job, JobError> {
        Job::parse(contents, Path::new("job.toml"))
    }

    #[test]
    fn minimal_job() {
        let job = parse("bin-size = [8, 4]").unwrap();

        assert_eq!(job.bin_size, (8, 4));
        assert!(job.rotation);
        assert_eq!(job.heuristic, None);
        assert!(!job.rectangle_merge);
        assert_eq!(job.split_heuristic, SplitHeuristicName::Default);
        assert!(job.items.is_empty());
        assert_eq!(job.file_path, Path::new("job.toml"));
    }

    #[test]
    fn full_job() {
        let job = parse(
            r#"
            bin-size = [8, 4]
            rotation = false
            heuristic = "contact-point"
            rectangle-merge = true
            split-heuristic = "default"

            [[items]]
            name = "a"
            size = [2, 2]

            [[items]]
            name = "b"
            size = [1, 3]
            count = 3
            "#,
        )
        .unwrap();

        assert_eq!(job.heuristic, Some(Heuristic::ContactPoint));

        let packer = job.packer();
        assert_eq!(packer.bin_size(), (8, 4));
        assert!(!packer.allows_rotation());
        assert!(packer.rectangle_merge());

        let names: Vec<_> = job.items().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b#1", "b#2", "b#3"]);
    }

    #[test]
    fn unknown_heuristic() {
        let err = parse("bin-size = [8, 4]\nheuristic = \"worst-fit\"").unwrap_err();

        assert!(matches!(err, JobError::Toml { .. }));
        assert!(err.to_string().contains("worst-fit"));
    }

    #[test]
    fn unknown_field() {
        let err = parse("bin-size = [8, 4]\nbin-count = 2").unwrap_err();

        assert!(matches!(err, JobError::Toml { .. }));
    }

    #[test]
    fn zero_sized_item() {
        let err = parse(
            r#"
            bin-size = [8, 4]

            [[items]]
            name = "flat"
            size = [3, 0]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, JobError::Invalid { .. }));
        assert!(err.to_string().contains("flat"));
        assert!(err.to_string().contains("job.toml"));
    }

    #[test]
    fn zero_count() {
        let err = parse(
            r#"
            bin-size = [8, 4]

            [[items]]
            name = "none"
            size = [1, 1]
            count = 0
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, JobError::Invalid { .. }));
    }

    #[test]
    fn demo_job() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/sprites.toml");
        let job = Job::read_from_file(&path).unwrap();

        assert_eq!(job.bin_size, (256, 256));
        assert!(!job.rotation);
        assert_eq!(job.heuristic, Some(Heuristic::BestShortSide));
        assert_eq!(job.file_path, path);
        assert_eq!(job.items().len(), 20);
    }

    #[test]
    fn missing_file() {
        let err = Job::read_from_file("this-job-does-not-exist.toml").unwrap_err();

        assert!(err.is_not_found());
    }
}
