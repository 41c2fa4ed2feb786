use crate::config::RunConfig;
use crate::consts::DUPLICATE_PRIORITY_PHRASE;
use crate::errors::{AppErrors, AppResult};
use crate::models::csv_models::firewall_rule::FirewallRuleRecord;
use crate::models::invocation::{FailureKind, ProcessOutput, RowOutcome};
use crate::models::policy::PolicyContext;
use crate::services::commands::traits::command_executor_trait::CommandExecutorTrait;
use crate::services::translator::{RowTranslation, translate};
use csv::ReaderBuilder;
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};

/// Per-outcome counters for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub created: usize,
    pub skipped: usize,
    pub duplicates: usize,
    pub failures: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &RowOutcome) {
        self.processed += 1;
        match outcome {
            RowOutcome::Skipped { .. } => self.skipped += 1,
            RowOutcome::Created { .. } => self.created += 1,
            RowOutcome::Failed {
                kind: FailureKind::DuplicatePriority,
                ..
            } => self.duplicates += 1,
            RowOutcome::Failed { .. } => self.failures += 1,
        }
    }
}

/// Creates one firewall rule per row of the configured CSV file.
///
/// # Arguments
/// * `config` - The resolved run settings (CSV path and target policy).
/// * `executor` - Runs each built command line.
///
/// # Returns
/// * `AppResult<RunSummary>` - Outcome counts, or `AppErrors::InputFileNotFound`
///   if the file does not exist. Per-row failures never end the run.
pub fn run_from_csv_path(
    config: &RunConfig,
    executor: &dyn CommandExecutorTrait,
) -> AppResult<RunSummary> {
    let path = config.csv_path.display().to_string();
    let file = File::open(&config.csv_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppErrors::InputFileNotFound(path.clone()),
        _ => AppErrors::Io(format!("open {path}: {e}")),
    })?;
    run_from_reader(BufReader::new(file), &config.policy, executor)
}

/// Walks the CSV rows in file order, translating and executing each one
/// before moving to the next.
///
/// A row that cannot be decoded aborts the run with `AppErrors::Csv`.
pub fn run_from_reader<R: Read>(
    reader: R,
    policy: &PolicyContext,
    executor: &dyn CommandExecutorTrait,
) -> AppResult<RunSummary> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut summary = RunSummary::default();
    for rec in rdr.deserialize::<FirewallRuleRecord>() {
        let record = rec?;
        let outcome = process_row(&record, policy, executor)?;
        summary.record(&outcome);
    }

    info!(
        "Run finished: {} rows, {} created, {} skipped, {} duplicate priorities, {} failed",
        summary.processed, summary.created, summary.skipped, summary.duplicates, summary.failures
    );
    Ok(summary)
}

/// Translates and executes a single row, logging its outcome.
fn process_row(
    record: &FirewallRuleRecord,
    policy: &PolicyContext,
    executor: &dyn CommandExecutorTrait,
) -> AppResult<RowOutcome> {
    info!("Processing row: {record:?}");

    let cmd = match translate(record, policy) {
        RowTranslation::Invocation(cmd) => cmd,
        RowTranslation::Skipped { missing } => {
            warn!(
                "Skipping row due to missing required field {missing} \
                 (PRIORITY, ACTION, DESCRIPTION are required): {record:?}"
            );
            return Ok(RowOutcome::Skipped { missing });
        }
    };
    info!("Final command: {cmd}");

    // Translation guarantees a non-empty priority from here on.
    let priority = record.priority.clone().unwrap_or_default();
    let output = executor.run(&cmd)?;
    let outcome = classify(priority, &output);

    match &outcome {
        RowOutcome::Created { priority } => {
            let printed = output.output_text.trim_end();
            if !printed.is_empty() {
                info!("{printed}");
            }
            info!("{}", created_message(priority, executor.is_dry_run()));
        }
        RowOutcome::Failed {
            priority,
            kind: FailureKind::DuplicatePriority,
        } => {
            error!("Firewall rule with priority {priority} already exists.");
            error!("Command executed: {cmd}");
        }
        RowOutcome::Failed {
            kind: FailureKind::GenericFailure { error_text },
            ..
        } => {
            error!("Error creating firewall rule: {}", error_text.trim_end());
            error!("Command executed: {cmd}");
        }
        RowOutcome::Skipped { .. } => {}
    }
    Ok(outcome)
}

fn created_message(priority: &str, dry_run: bool) -> String {
    if dry_run {
        format!("[dry-run] Firewall rule would be created: {priority}")
    } else {
        format!("Firewall rule created successfully: {priority}")
    }
}

/// Maps a finished process to the row outcome.
///
/// Zero exit is `Created`; otherwise the error text is searched for the
/// duplicate-priority phrase.
pub fn classify(priority: String, output: &ProcessOutput) -> RowOutcome {
    if output.success {
        return RowOutcome::Created { priority };
    }
    let kind = if output.error_text.contains(DUPLICATE_PRIORITY_PHRASE) {
        FailureKind::DuplicatePriority
    } else {
        FailureKind::GenericFailure {
            error_text: output.error_text.clone(),
        }
    };
    RowOutcome::Failed { priority, kind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invocation::CommandInvocation;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io::Write;
    use std::path::PathBuf;

    /// Records every invocation and replays scripted outputs (success once
    /// the script runs out).
    #[derive(Default)]
    struct FakeExecutor {
        calls: RefCell<Vec<CommandInvocation>>,
        script: RefCell<VecDeque<ProcessOutput>>,
    }

    impl FakeExecutor {
        fn with_script(outputs: impl IntoIterator<Item = ProcessOutput>) -> Self {
            Self {
                calls: RefCell::default(),
                script: RefCell::new(outputs.into_iter().collect()),
            }
        }

        fn priorities(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|c| c.tokens[6].clone())
                .collect()
        }
    }

    impl CommandExecutorTrait for FakeExecutor {
        fn run(&self, invocation: &CommandInvocation) -> AppResult<ProcessOutput> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok(self
                .script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(ProcessOutput::ok))
        }
    }

    struct BrokenExecutor;

    impl CommandExecutorTrait for BrokenExecutor {
        fn run(&self, invocation: &CommandInvocation) -> AppResult<ProcessOutput> {
            Err(AppErrors::Spawn {
                program: invocation.program().to_string(),
                source: std::io::Error::from(ErrorKind::NotFound),
            })
        }
    }

    const HEADER: &str = "PRIORITY,ACTION,DESCRIPTION,DIRECTION\n";

    #[test]
    fn row_missing_description_is_skipped_and_others_run() {
        // arrange
        let data = format!("{HEADER}100,allow,first,INGRESS\n200,deny,,EGRESS\n300,allow,third,\n");
        let exec = FakeExecutor::default();
        let policy = PolicyContext::new("poc", false);

        // act
        let summary = run_from_reader(data.as_bytes(), &policy, &exec).unwrap();

        // assert
        assert_eq!(exec.priorities(), ["100", "300"]);
        assert_eq!(
            summary,
            RunSummary {
                processed: 3,
                created: 2,
                skipped: 1,
                duplicates: 0,
                failures: 0,
            }
        );
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        // arrange
        let data = format!("{HEADER}1,allow,a,\n2,allow,b,\n3,allow,c,\n");
        let exec = FakeExecutor::with_script([
            ProcessOutput::failed(
                "ERROR: (gcloud) Invalid value: Cannot have rules with the same priorities.",
            ),
            ProcessOutput::failed("ERROR: (gcloud) permission denied"),
        ]);

        // act
        let summary =
            run_from_reader(data.as_bytes(), &PolicyContext::new("poc", true), &exec).unwrap();

        // assert
        assert_eq!(exec.priorities(), ["1", "2", "3"]);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.created, 1);
    }

    #[test]
    fn cell_whitespace_is_preserved() {
        // arrange
        let data = "PRIORITY,ACTION,DESCRIPTION,TARGET_SECURE_TAGS\n\
                    100,allow,\"  padded desc  \",\" tagValues/1 \"\n\
                    \"  \",allow,ws-priority,\n";
        let exec = FakeExecutor::default();

        // act
        let summary =
            run_from_reader(data.as_bytes(), &PolicyContext::new("poc", false), &exec).unwrap();

        // assert
        assert_eq!(summary.created, 2);
        assert_eq!(summary.skipped, 0);
        let calls = exec.calls.borrow();
        assert_eq!(calls[0].value_of("--description"), Some("  padded desc  "));
        assert_eq!(calls[0].value_of("--target-secure-tags"), Some(" tagValues/1 "));
        assert_eq!(calls[1].tokens[6], "  ");
    }

    #[test]
    fn padded_headers_still_match_columns() {
        let data = " PRIORITY , ACTION ,DESCRIPTION\n7,deny,x\n";
        let exec = FakeExecutor::default();

        let summary =
            run_from_reader(data.as_bytes(), &PolicyContext::new("poc", false), &exec).unwrap();

        assert_eq!(summary.created, 1);
        assert_eq!(exec.priorities(), ["7"]);
    }

    #[test]
    fn created_message_marks_dry_runs() {
        assert_eq!(
            created_message("100", false),
            "Firewall rule created successfully: 100"
        );
        assert_eq!(
            created_message("100", true),
            "[dry-run] Firewall rule would be created: 100"
        );
    }

    #[test]
    fn classify_recognises_duplicate_priority_phrase() {
        let out = ProcessOutput::failed("Cannot have rules with the same priorities");
        assert_eq!(
            classify("10".into(), &out),
            RowOutcome::Failed {
                priority: "10".into(),
                kind: FailureKind::DuplicatePriority,
            }
        );
    }

    #[test]
    fn classify_other_failures_as_generic() {
        let out = ProcessOutput::failed("quota exceeded");
        assert_eq!(
            classify("10".into(), &out),
            RowOutcome::Failed {
                priority: "10".into(),
                kind: FailureKind::GenericFailure {
                    error_text: "quota exceeded".into()
                },
            }
        );
        assert_eq!(
            classify("10".into(), &ProcessOutput::ok()),
            RowOutcome::Created {
                priority: "10".into()
            }
        );
    }

    #[test]
    fn spawn_error_aborts_the_run() {
        let data = format!("{HEADER}1,allow,a,\n");
        let res = run_from_reader(data.as_bytes(), &PolicyContext::new("poc", false), &BrokenExecutor);
        assert!(matches!(res, Err(AppErrors::Spawn { .. })));
    }

    #[test]
    fn missing_file_is_reported_before_any_row() {
        // arrange
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            csv_path: dir.path().join("nope.csv"),
            policy: PolicyContext::new("poc", false),
            dry_run: false,
        };
        let exec = FakeExecutor::default();

        // act
        let res = run_from_csv_path(&config, &exec);

        // assert
        assert!(matches!(res, Err(AppErrors::InputFileNotFound(p)) if p.ends_with("nope.csv")));
        assert!(exec.calls.borrow().is_empty());
    }

    #[test]
    fn reads_rules_from_file_on_disk() {
        // arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "PRIORITY,ACTION,DESCRIPTION,ENABLE_LOGGING,EXTRA\n\
             42,allow,from disk,TRUE,ignored\n"
        )
        .unwrap();
        let config = RunConfig {
            csv_path: PathBuf::from(file.path()),
            policy: PolicyContext::new("disk-policy", false),
            dry_run: false,
        };
        let exec = FakeExecutor::default();

        // act
        let summary = run_from_csv_path(&config, &exec).unwrap();

        // assert
        assert_eq!(summary.created, 1);
        let calls = exec.calls.borrow();
        assert_eq!(calls[0].value_of("--firewall-policy"), Some("disk-policy"));
        assert_eq!(calls[0].value_of("--description"), Some("from disk"));
        assert_eq!(calls[0].count("--enable-logging"), 1);
    }
}
