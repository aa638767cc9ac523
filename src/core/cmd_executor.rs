use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::upload_service::UploadOperation,
};

/// Command executor that routes Elm commands to the services that own the side effects
#[derive(Clone, Default)]
pub struct CmdExecutor {
    upload_sender: Option<mpsc::UnboundedSender<UploadOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create a new command executor with no services attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor with UploadService support
    pub fn new_with_upload(upload_sender: mpsc::UnboundedSender<UploadOperation>) -> Self {
        Self {
            upload_sender: Some(upload_sender),
            ..Default::default()
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    fn send_upload(&self, operation: UploadOperation) -> Result<()> {
        match &self.upload_sender {
            Some(sender) => sender.send(operation)?,
            None => log::warn!("{} ignored: UploadService not available", operation.name()),
        }
        Ok(())
    }

    /// Execute a single command by forwarding it to the owning service
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            // Upload simulation - route to UploadService
            Cmd::ProbeFiles { paths } => {
                self.send_upload(UploadOperation::Probe {
                    paths: paths.clone(),
                })?;
            }

            Cmd::StartUpload { id } => {
                self.send_upload(UploadOperation::Start { id: id.clone() })?;
            }

            Cmd::CancelUpload { id } => {
                self.send_upload(UploadOperation::Cancel { id: id.clone() })?;
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                } else {
                    log::debug!("CmdExecutor: render request dropped (no render sender)");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {}x{}",
                        width,
                        height
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {}", message);
            }
        }

        Ok(())
    }

    /// Execute commands in the order `update` produced them, one log line each
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        commands
            .iter()
            .map(|cmd| match self.execute_command(cmd) {
                Ok(()) => format!("✓ Executed: {}", cmd.name()),
                Err(e) => {
                    let line = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{line}");
                    line
                }
            })
            .collect()
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_upload_sender: self.upload_sender.is_some(),
            is_upload_sender_closed: self.upload_sender.as_ref().map(|s| s.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_upload_sender: bool,
    pub is_upload_sender_closed: Option<bool>,
}
