use std::{collections::HashMap, path::PathBuf};

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    domain::upload::{SelectedFile, UploadId},
    infrastructure::config::UploadSettings,
    RawMsg,
};

/// Work the upload service performs on behalf of `Cmd`s
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOperation {
    /// Read metadata of the given paths and report the regular files as a selection
    Probe { paths: Vec<PathBuf> },
    /// Start the progress simulation of a record
    Start { id: UploadId },
    /// Stop the simulation of a record
    Cancel { id: UploadId },
}

impl UploadOperation {
    pub fn name(&self) -> &'static str {
        match self {
            UploadOperation::Probe { .. } => "Probe",
            UploadOperation::Start { .. } => "Start",
            UploadOperation::Cancel { .. } => "Cancel",
        }
    }
}

struct SimulationTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// UploadService owns the simulated upload pipeline
/// - File probing (metadata of picked/dropped paths)
/// - One progress task per record, cancellable individually
/// - Shutdown of all tasks through the service token
pub struct UploadService {
    settings: UploadSettings,
    rng: StdRng,
    tasks: HashMap<UploadId, SimulationTask>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<UploadOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewUploadService = (
    mpsc::UnboundedSender<UploadOperation>, // op_tx - operations to send
    CancellationToken,                      // shutdown signal
    UploadService,
);

impl UploadService {
    /// Create a new UploadService
    pub fn new(
        settings: UploadSettings,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Result<NewUploadService> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok((
            op_tx,
            cancel_token.clone(),
            Self {
                settings,
                rng,
                tasks: HashMap::new(),
                op_rx,
                cancel_token,
                raw_tx,
            },
        ))
    }

    /// Run the UploadService in background task
    pub fn run(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let result = self.run_service().await;
            if let Err(e) = result {
                log::error!("UploadService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("UploadService error: {e}")));
            }
        })
    }

    /// Main service loop
    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => {
                            if let Err(e) = self.handle_operation(op).await {
                                log::error!("Failed to handle upload operation: {e}");
                                let _ = self
                                    .raw_tx
                                    .send(RawMsg::Error(format!("Upload operation failed: {e}")));
                            }
                        }
                        None => {
                            log::info!("UploadService: operation channel closed");
                            break;
                        }
                    }
                }

                // Check for termination signal
                _ = self.cancel_token.cancelled() => {
                    log::info!("UploadService received cancellation signal");
                    break;
                }
            }
        }

        // Child tokens follow the service token; this covers the closed-channel exit too
        self.cancel_all();
        Ok(())
    }

    async fn handle_operation(&mut self, op: UploadOperation) -> Result<()> {
        log::debug!("Handling UploadOperation: {}", op.name());
        self.tasks.retain(|_, task| !task.handle.is_finished());

        match op {
            UploadOperation::Probe { paths } => self.probe(paths).await?,
            UploadOperation::Start { id } => self.start(id),
            UploadOperation::Cancel { id } => {
                if let Some(task) = self.tasks.remove(&id) {
                    log::debug!("cancelling upload {id}");
                    task.token.cancel();
                }
            }
        }

        Ok(())
    }

    async fn probe(&mut self, paths: Vec<PathBuf>) -> Result<()> {
        let total = paths.len();
        let mut files = Vec::with_capacity(total);

        for path in paths {
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    files.push(SelectedFile::new(
                        UploadId::generate(&mut self.rng),
                        name,
                        meta.len(),
                    ));
                }
                Ok(_) => log::info!("skipping {}: not a regular file", path.display()),
                Err(e) => log::info!("skipping {}: {e}", path.display()),
            }
        }

        let skipped = total - files.len();
        if !files.is_empty() {
            self.raw_tx.send(RawMsg::FilesSelected(files))?;
        }
        if skipped > 0 {
            self.raw_tx.send(RawMsg::SystemMessage(format!(
                "Skipped {skipped} of {total} path(s): not a readable file"
            )))?;
        }

        Ok(())
    }

    fn start(&mut self, id: UploadId) {
        if self.tasks.contains_key(&id) {
            log::warn!("upload {id} is already running");
            return;
        }

        let token = self.cancel_token.child_token();
        let rng = StdRng::seed_from_u64(self.rng.gen());
        let handle = tokio::spawn(simulate(
            id.clone(),
            self.settings.clone(),
            rng,
            token.clone(),
            self.raw_tx.clone(),
        ));
        self.tasks.insert(id, SimulationTask { token, handle });
    }

    fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.token.cancel();
        }
    }
}

/// Progress simulation of one record: random increments every tick until 100,
/// then a fixed processing delay before completion
async fn simulate(
    id: UploadId,
    settings: UploadSettings,
    mut rng: StdRng,
    token: CancellationToken,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
) {
    let mut interval = tokio::time::interval(settings.tick());
    // the first tick completes immediately
    interval.tick().await;

    let mut progress = 0.0_f64;
    while progress < 100.0 {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = interval.tick() => {
                progress = (progress + rng.gen::<f64>() * settings.max_increment).min(100.0);
                let msg = RawMsg::UploadProgress { id: id.clone(), progress };
                if raw_tx.send(msg).is_err() {
                    return;
                }
            }
        }
    }

    tokio::select! {
        _ = token.cancelled() => {}
        _ = tokio::time::sleep(settings.processing_delay()) => {
            let _ = raw_tx.send(RawMsg::UploadProcessed { id });
        }
    }
}
