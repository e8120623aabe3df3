//! Artifact delivery boundary.
//!
//! Delivery transports are external collaborators consumed through one
//! narrow interface. A `DeliveryError` is surfaced to the caller
//! unmodified; the already-produced artifact is not discarded, so
//! delivery alone can be retried.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Delivery refused: {0}")]
    Refused(String),
}

/// Where a finished artifact should go.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    /// Save into a local directory under the artifact's file name.
    LocalDir(PathBuf),
    /// Hand off as an email attachment.
    EmailAttachment {
        recipient: String,
        subject: String,
        body: String,
    },
}

pub trait Deliver {
    fn deliver(
        &self,
        bytes: &[u8],
        file_name: &str,
        destination: &Destination,
    ) -> Result<(), DeliveryError>;
}

/// Writes artifacts to the local filesystem. Email destinations need a
/// mail transport and are refused here.
#[derive(Debug, Default)]
pub struct FileSink;

impl Deliver for FileSink {
    fn deliver(
        &self,
        bytes: &[u8],
        file_name: &str,
        destination: &Destination,
    ) -> Result<(), DeliveryError> {
        match destination {
            Destination::LocalDir(dir) => {
                let path = dir.join(file_name);
                fs::write(&path, bytes)?;
                log::info!("saved artifact to {}", path.display());
                Ok(())
            }
            Destination::EmailAttachment { recipient, .. } => Err(DeliveryError::Refused(
                format!("no mail transport configured for {}", recipient),
            )),
        }
    }
}
