//! Stdin fragment source.
//!
//! Stands in for an external token-streaming source: each line read from
//! stdin is delivered as one text fragment. The channel is bounded, so a
//! slow pipeline back-pressures the reader instead of buffering without
//! limit.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 64;

pub fn start() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).await.is_err() {
                        // Pipeline hung up, stop reading.
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Error while reading stdin: {e}");
                    break;
                }
            }
        }
    });

    rx
}
