use std::collections::HashMap;
use std::io::{self, BufWriter, Write};

use fs_err as fs;
use maxrects::{Heuristic, Id};
use serde::Serialize;

use crate::job::Job;
use crate::options::PackOptions;

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let job = Job::read_from_file(&options.job)?;
    let heuristic = options
        .heuristic
        .or(job.heuristic)
        .unwrap_or(Heuristic::BestArea);

    let report = PackReport::from_job(&job, heuristic);

    if !report.unplaced.is_empty() {
        log::info!(
            "{} of {} items did not fit into the bin",
            report.unplaced.len(),
            report.unplaced.len() + report.placed.len()
        );
    }

    match &options.output {
        Some(path) => {
            let mut file = BufWriter::new(fs::File::create(path)?);
            serde_json::to_writer_pretty(&mut file, &report)?;
            writeln!(file)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &report)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

/// Where every item of a job ended up after packing it with one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackReport {
    pub bin: (u32, u32),
    pub heuristic: String,
    pub utilization: f64,
    pub placed: Vec<PlacedItem>,
    pub unplaced: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlacedItem {
    pub name: String,
    pub position: (u32, u32),
    pub size: (u32, u32),
}

impl PackReport {
    pub fn from_job(job: &Job, heuristic: Heuristic) -> Self {
        let named_items = job.items();
        let mut names: HashMap<Id, String> = named_items
            .iter()
            .map(|(name, item)| (item.id(), name.clone()))
            .collect();

        let mut packer = job.packer();
        let output = packer.pack(named_items.into_iter().map(|(_, item)| item), heuristic);

        let mut name_of = |id: Id| names.remove(&id).unwrap_or_else(|| id.to_string());

        let placed = output
            .placed()
            .iter()
            .map(|item| PlacedItem {
                name: name_of(item.id()),
                position: item.position(),
                size: item.size(),
            })
            .collect();

        let unplaced = output
            .unplaced()
            .iter()
            .map(|item| name_of(item.id()))
            .collect();

        PackReport {
            bin: output.bin_size(),
            heuristic: heuristic.to_string(),
            utilization: output.utilization(),
            placed,
            unplaced,
        }
    }
}
