//! Pure application core
//!
//! `RawMsg` from the outside world is translated into `Msg`, `update` turns
//! the current `AppState` and a `Msg` into the next state plus `Cmd`s, and
//! the `CmdExecutor` hands those commands to the services.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
