use crossterm::event::{KeyEvent, MouseEvent};

use crate::error::DispatchError;
use crate::http::dispatch::DispatchId;
use crate::model::ResponseDescriptor;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// Outcome of a dispatch, sent before the dispatch releases its busy guard.
    Response(DispatchId, Result<ResponseDescriptor, DispatchError>),
    /// The dispatch has ended, with or without a `Response`.
    DispatchSettled(DispatchId),
}
