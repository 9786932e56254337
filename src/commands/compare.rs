use maxrects::Heuristic;

use crate::commands::PackReport;
use crate::job::Job;
use crate::options::CompareOptions;

pub fn compare(options: CompareOptions) -> anyhow::Result<()> {
    let job = Job::read_from_file(&options.job)?;

    for line in summarize(&job) {
        println!("{}", line);
    }

    Ok(())
}

/// Packs the job with every heuristic, producing one line per heuristic.
fn summarize(job: &Job) -> Vec<String> {
    Heuristic::ALL
        .iter()
        .map(|&heuristic| {
            let report = PackReport::from_job(job, heuristic);
            let total = report.placed.len() + report.unplaced.len();

            log::debug!("{} left {} items unplaced", heuristic, report.unplaced.len());

            format!(
                "{:<16} {:>4}/{:<4} {:>6.2}%",
                heuristic.name(),
                report.placed.len(),
                total,
                report.utilization * 100.0
            )
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    use std::path::Path;

    #[test]
    fn one_line_per_heuristic() {
        let job = Job::parse(
            r#"
            bin-size = [4, 4]

            [[items]]
            name = "square"
            size = [2, 2]
            count = 5
            "#,
            Path::new("job.toml"),
        )
        .unwrap();

        let lines = summarize(&job);

        assert_eq!(lines.len(), Heuristic::ALL.len());
        assert_eq!(lines[0], "first-fit           4/5    100.00%");
        assert!(lines.iter().all(|line| line.ends_with("100.00%")));
    }
}
