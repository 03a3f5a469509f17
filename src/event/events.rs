use crate::{audio::traits::TransportEvent, http::SubmitError};

/// Messages produced off the draw loop and drained by the event handler.
#[derive(Debug)]
pub enum Event {
    Transport(TransportEvent),
    SubmissionFinished(Result<(), SubmitError>),
}
