//! Stream plumbing for the checking pipeline
//!
//! Two primitives shape the token stream before validation:
//! - [`duplicate`] fans one channel out into `N` independent copies
//! - [`filter`] runs a stateful [`GroupFilter`] over a channel, producing grouped [`Item`]s
//!
//! Both spawn a single task and close their outputs when their input closes, so closing the lexeme source is
//! enough to drain and terminate the whole pipeline.

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::Token;

/// One element of a filtered stream.
///
/// Group boundaries are an explicit variant rather than a reserved token kind, so a boundary can never be mistaken
/// for source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Token(Token),
    /// End of the current group
    Boundary,
}

impl From<Token> for Item {
    fn from(token: Token) -> Self {
        Item::Token(token)
    }
}

/// A stateful stream shaper.
///
/// `accept` sees every item in order and appends whatever it wants forwarded to `out`, including the
/// [`Item::Boundary`] that closes each group it builds. `finish` runs once after the input closes.
pub trait GroupFilter: Send + 'static {
    fn accept(&mut self, item: Item, out: &mut Vec<Item>);

    fn finish(&mut self, _out: &mut Vec<Item>) {}
}

/// Fan `rx` out into `N` receivers that each see every item, in order.
///
/// A copy whose receiver has been dropped is skipped from then on; the forwarding task stops early once every
/// copy is gone.
pub fn duplicate<T, const N: usize>(mut rx: Receiver<T>, capacity: usize) -> [Receiver<T>; N]
where
    T: Clone + Send + 'static,
{
    let mut senders: Vec<Option<Sender<T>>> = Vec::with_capacity(N);
    let receivers = std::array::from_fn(|_| {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        senders.push(Some(tx));
        rx
    });

    tokio::spawn(async move {
        while let Some(item) = rx.recv().await {
            for slot in senders.iter_mut() {
                let closed = match slot {
                    Some(tx) => tx.send(item.clone()).await.is_err(),
                    None => false,
                };
                if closed {
                    *slot = None;
                }
            }
            if senders.iter().all(Option::is_none) {
                break;
            }
        }
    });

    receivers
}

/// Run `group_filter` over `rx` on its own task and return the filtered stream.
pub fn filter<I, F>(mut rx: Receiver<I>, mut group_filter: F, capacity: usize) -> Receiver<Item>
where
    I: Into<Item> + Send + 'static,
    F: GroupFilter,
{
    let (tx, out) = mpsc::channel(capacity.max(1));

    tokio::spawn(async move {
        let mut buf = Vec::new();
        while let Some(item) = rx.recv().await {
            group_filter.accept(item.into(), &mut buf);
            if !forward(&tx, &mut buf).await {
                return;
            }
        }
        group_filter.finish(&mut buf);
        forward(&tx, &mut buf).await;
    });

    out
}

/// Send everything buffered; `false` once the downstream receiver is gone.
async fn forward(tx: &Sender<Item>, buf: &mut Vec<Item>) -> bool {
    for item in buf.drain(..) {
        if tx.send(item).await.is_err() {
            return false;
        }
    }
    true
}
