use std::{path::PathBuf, sync::Arc};

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::{sync::mpsc, sync::Mutex, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{nav::NavMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::section::Section,
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource},
        upload_service::UploadService,
    },
    integration::{
        coalescer::Coalescer, renderer::Renderer, runtime::Runtime,
        update_executor::UpdateExecutor,
    },
};

/// What woke the main loop up
enum Input {
    Event(Option<tui::Event>),
    Raw(RawMsg),
}

/// Drives the Elm loop: terminal events and service messages in, renders out.
pub struct AppRunner {
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    runtime: Runtime,
    renderer: Renderer,
    coalescer: Coalescer,
    // Messages from services; the sender is kept so the channel never closes
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // For service termination
    upload_cancel: CancellationToken,
    upload_handle: Option<JoinHandle<()>>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Sender that feeds the loop as if a service had produced the message
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_tx.clone()
    }

    /// Create a new AppRunner with the runtime and the UploadService started.
    /// Must be called inside a tokio runtime.
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Result<Self> {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel::<RawMsg>();

        let (upload_tx, upload_cancel, upload_service) =
            UploadService::new(config.upload.clone(), raw_tx.clone())?;
        let upload_handle = upload_service.run();

        let mut runtime =
            Runtime::new_with_upload_executor(AppState::new_with_config(config), upload_tx);

        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel::<()>();
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(|e| eyre!(e))?;
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            tui,
            events,
            runtime,
            renderer: Renderer::new(),
            coalescer: Coalescer::new(),
            raw_tx,
            raw_rx,
            render_req_rx,
            tui_cmd_rx,
            upload_cancel,
            upload_handle: Some(upload_handle),
        })
    }

    /// Open the upload panel with files given on the command line
    pub fn preselect(&mut self, files: Vec<PathBuf>) -> Result<()> {
        if files.is_empty() {
            return Ok(());
        }
        self.runtime
            .send_msg(Msg::Nav(NavMsg::SelectSection(Section::Upload)));
        self.runtime
            .execute_command(&Cmd::ProbeFiles { paths: files })
            .map_err(|e| eyre!(e))
    }

    /// Run the main loop until the state asks to quit.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        UpdateExecutor::process_update_cycle(&mut self.runtime, None);
        self.render().await?;

        loop {
            let input = tokio::select! {
                event = self.events.next() => Input::Event(event),
                Some(raw) = self.raw_rx.recv() => Input::Raw(raw),
            };
            match input {
                Input::Event(event) => self.handle_event(event),
                Input::Raw(raw) => self.runtime.send_raw_msg(raw),
            }
            // Drain service messages too so progress never lags behind input
            while let Ok(raw) = self.raw_rx.try_recv() {
                self.runtime.send_raw_msg(raw);
            }

            self.update().await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if self.coalescer.take_render() {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.shutdown().await
    }

    fn handle_event(&mut self, event: Option<tui::Event>) {
        match event {
            Some(tui::Event::Render) => self.coalescer.note_render_event(),
            Some(tui::Event::Resize(w, h)) => self.coalescer.note_resize(w, h),
            Some(tui::Event::Key(key)) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Some(tui::Event::Paste(text)) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            Some(tui::Event::Tick) => self.runtime.send_raw_msg(RawMsg::Tick),
            Some(tui::Event::Quit) => self.runtime.send_raw_msg(RawMsg::Quit),
            Some(tui::Event::Error) => {
                log::error!("terminal event stream reported an error");
            }
            Some(
                tui::Event::Init
                | tui::Event::Closed
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Mouse(_),
            ) => {}
            // End of input
            None => self.runtime.send_raw_msg(RawMsg::Quit),
        }
    }

    /// One update cycle, then apply what it asked of the terminal
    async fn update(&mut self) -> Result<()> {
        UpdateExecutor::process_update_cycle(&mut self.runtime, self.coalescer.take_resize());

        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    self.coalescer.request_render();
                }
            }
        }

        while self.render_req_rx.try_recv().is_ok() {
            self.coalescer.request_render();
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update().await
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer
            .render(&self.tui, self.runtime.state())
            .await
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.upload_cancel.cancel();
        if let Some(handle) = self.upload_handle.take() {
            if let Err(e) = handle.await {
                log::error!("UploadService task failed: {e}");
            }
        }
        self.tui.lock().await.exit()
    }
}
