//! Simulated upload lifecycle driven through the runtime and the real
//! UploadService, on tokio's paused clock.

use std::{collections::HashMap, time::Duration};

use color_eyre::Result;
use pretty_assertions::assert_eq;
use tokio::{sync::mpsc, time::timeout};
use tokio_util::sync::CancellationToken;

use studyplatform::{
    core::msg::{upload::UploadMsg, Msg},
    domain::upload::{SelectedFile, UploadId, UploadRecord, UploadStatus},
    infrastructure::{
        config::{Config, UploadSettings},
        upload_service::UploadService,
    },
    integration::runtime::Runtime,
    AppState, RawMsg,
};

struct Harness {
    runtime: Runtime,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    cancel: CancellationToken,
}

impl Harness {
    fn new(seed: u64) -> Result<Self> {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let settings = UploadSettings {
            seed: Some(seed),
            ..Default::default()
        };
        let (op_tx, cancel, service) = UploadService::new(settings, raw_tx)?;
        service.run();

        let state = AppState::new_with_config(Config::embedded()?);
        Ok(Self {
            runtime: Runtime::new_with_upload_executor(state, op_tx),
            raw_rx,
            cancel,
        })
    }

    fn apply(&mut self, raw: RawMsg) -> Result<()> {
        self.runtime.send_raw_msg(raw);
        self.runtime
            .run_update_cycle()
            .map_err(|e| color_eyre::eyre::eyre!(e))?;
        Ok(())
    }

    fn records(&self) -> &[UploadRecord] {
        &self.runtime.state().upload.records
    }

    fn all_completed(&self) -> bool {
        self.records().iter().all(UploadRecord::is_completed)
    }
}

fn files(ids: &[&str]) -> Vec<SelectedFile> {
    ids.iter()
        .map(|id| SelectedFile::new(UploadId::new(*id), format!("{id}.pdf"), 4096))
        .collect()
}

fn allowed_transition(from: UploadStatus, to: UploadStatus) -> bool {
    use UploadStatus::*;
    matches!(
        (from, to),
        (Uploading, Uploading | Processing)
            | (Processing, Processing | Completed)
            | (Completed, Completed)
    )
}

#[tokio::test(start_paused = true)]
async fn test_selection_creates_fresh_records() -> Result<()> {
    let mut harness = Harness::new(1)?;

    harness.apply(RawMsg::FilesSelected(files(&["a", "b", "c"])))?;

    let records = harness.records();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
    for record in records {
        assert_eq!(record.status, UploadStatus::Uploading);
        assert_eq!(record.progress, 0.0);
    }
    harness.cancel.cancel();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_progress_is_monotonic_and_states_are_not_skipped() -> Result<()> {
    let mut harness = Harness::new(7)?;
    harness.apply(RawMsg::FilesSelected(files(&["a", "b"])))?;

    let mut seen: HashMap<UploadId, Vec<UploadStatus>> = HashMap::new();
    timeout(Duration::from_secs(120), async {
        while !harness.all_completed() {
            let Some(raw) = harness.raw_rx.recv().await else {
                break;
            };
            let before: Vec<UploadRecord> = harness.records().to_vec();
            harness.apply(raw)?;

            for (old, new) in before.iter().zip(harness.records()) {
                assert_eq!(old.id, new.id);
                assert!(new.progress >= old.progress, "{} went backwards", new.id);
                assert!(
                    allowed_transition(old.status, new.status),
                    "{}: {:?} -> {:?}",
                    new.id,
                    old.status,
                    new.status
                );
                let history = seen.entry(new.id.clone()).or_default();
                if history.last() != Some(&new.status) {
                    history.push(new.status);
                }
            }
        }
        Ok::<_, color_eyre::Report>(())
    })
    .await??;

    for record in harness.records() {
        assert_eq!(record.progress, 100.0);
        assert_eq!(
            seen[&record.id],
            vec![
                UploadStatus::Uploading,
                UploadStatus::Processing,
                UploadStatus::Completed
            ]
        );
    }
    let toast = harness.runtime.state().system.toast().cloned();
    assert_eq!(
        toast.map(|t| t.title),
        Some("Document processed successfully".to_string())
    );
    harness.cancel.cancel();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_remove_deletes_exactly_one_record_and_stops_its_task() -> Result<()> {
    let mut harness = Harness::new(3)?;
    harness.apply(RawMsg::FilesSelected(files(&["a", "b", "c"])))?;
    let before = harness.records().to_vec();

    harness
        .runtime
        .send_msg(Msg::Upload(UploadMsg::Remove(UploadId::new("b"))));
    harness
        .runtime
        .run_update_cycle()
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    assert_eq!(
        harness.records(),
        &[before[0].clone(), before[2].clone()][..]
    );

    let removed = UploadId::new("b");
    timeout(Duration::from_secs(120), async {
        while !harness.all_completed() {
            let Some(raw) = harness.raw_rx.recv().await else {
                break;
            };
            match &raw {
                RawMsg::UploadProgress { id, .. } | RawMsg::UploadProcessed { id } => {
                    assert_ne!(id, &removed, "cancelled task kept reporting");
                }
                _ => {}
            }
            harness.apply(raw)?;
        }
        Ok::<_, color_eyre::Report>(())
    })
    .await??;

    assert_eq!(harness.records().len(), 2);
    harness.cancel.cancel();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_removing_unknown_id_changes_nothing() -> Result<()> {
    let mut harness = Harness::new(5)?;
    harness.apply(RawMsg::FilesSelected(files(&["a"])))?;
    let before = harness.records().to_vec();

    harness
        .runtime
        .send_msg(Msg::Upload(UploadMsg::Remove(UploadId::new("zzz"))));
    let commands = harness.runtime.process_all_messages();

    assert!(commands.is_empty());
    assert_eq!(harness.records(), &before[..]);
    harness.cancel.cancel();
    Ok(())
}
