//! Contract file loading

use std::path::{Path, PathBuf};

use paranoid_core::prelude::*;
use paranoid_core::validate_contract_path;
use tokio::sync::mpsc;

use super::send_message;
use crate::message::Message;

/// Read `path` and report the outcome to the event loop.
pub(super) async fn load_contract_file(path: PathBuf, msg_tx: mpsc::Sender<Message>) {
    let loaded = read(&path)
        .await
        .with_context(|| format!("Failed to load contract {}", path.display()));

    let msg = match loaded {
        Ok(text) => Message::ContractFileLoaded { path, text },
        Err(e) => Message::ContractFileRejected {
            path,
            reason: e.to_string(),
        },
    };

    if let Err(e) = send_message(&msg_tx, msg).await {
        warn!("Dropped contract load result: {}", e);
    }
}

async fn read(path: &Path) -> Result<String> {
    validate_contract_path(path)?;
    Ok(tokio::fs::read_to_string(path).await?)
}
