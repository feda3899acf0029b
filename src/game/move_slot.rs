use std::fmt;
use std::str::FromStr;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::coordinate::Coordinate;

use super::error::{GameError, InputError};

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));

/// A move as a human enters it, e.g. `e2e4`. It only becomes a `Move` once it
/// is matched against a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRequest {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl MoveRequest {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }
}

impl FromStr for MoveRequest {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let caps = COORD_RE.captures(input.trim()).ok_or_else(invalid)?;
        let from = caps[1].parse().map_err(|_| invalid())?;
        let to = caps[2].parse().map_err(|_| invalid())?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[derive(Default)]
struct SlotState {
    pending: Option<MoveRequest>,
    closed: bool,
}

/// Single-slot rendezvous between whoever types moves and the player waiting
/// for them. At most one move can be pending at a time.
#[derive(Default)]
pub struct MoveSlot {
    state: Mutex<SlotState>,
    ready: Condvar,
}

impl MoveSlot {
    pub fn new() -> Self {
        Default::default()
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hands a move to the waiting player. Fails if the previous one has not
    /// been taken yet or the slot was closed.
    pub fn submit(&self, request: MoveRequest) -> Result<(), GameError> {
        let mut state = self.lock();
        if state.closed {
            return Err(GameError::Disconnected);
        }
        if state.pending.is_some() {
            return Err(GameError::MoveAlreadyPending);
        }
        debug!("move submitted: {}", request);
        state.pending = Some(request);
        self.ready.notify_one();
        Ok(())
    }

    /// Blocks until a move is submitted. A pending move is still delivered
    /// after the slot is closed; after that `take` fails.
    pub fn take(&self) -> Result<MoveRequest, GameError> {
        let mut state = self.lock();
        loop {
            if let Some(request) = state.pending.take() {
                return Ok(request);
            }
            if state.closed {
                return Err(GameError::Disconnected);
            }
            state = self
                .ready
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending.is_some()
    }

    /// Wakes any waiting player; no more moves will come.
    pub fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coordinate::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_parse_move_request() {
        assert_eq!(Ok(MoveRequest::new(E2, E4)), "e2e4".parse());
        assert_eq!(Ok(MoveRequest::new(G8, F6)), " g8f6\n".parse());
        assert!("e2-e4".parse::<MoveRequest>().is_err());
        assert!("e9e4".parse::<MoveRequest>().is_err());
        assert!("E2E4".parse::<MoveRequest>().is_err());
    }

    #[test]
    fn test_second_submit_is_rejected() {
        let slot = MoveSlot::new();
        slot.submit(MoveRequest::new(E2, E4)).unwrap();
        assert_eq!(
            Err(GameError::MoveAlreadyPending),
            slot.submit(MoveRequest::new(D2, D4))
        );
        assert_eq!(Ok(MoveRequest::new(E2, E4)), slot.take());
        assert!(!slot.is_pending());
        slot.submit(MoveRequest::new(D2, D4)).unwrap();
    }

    #[test]
    fn test_take_waits_for_submit() {
        let slot = Arc::new(MoveSlot::new());
        let producer = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.submit(MoveRequest::new(B1, C3)))
        };
        assert_eq!(Ok(MoveRequest::new(B1, C3)), slot.take());
        producer.join().unwrap().unwrap();
    }

    #[test]
    fn test_close_releases_a_waiting_taker() {
        let slot = Arc::new(MoveSlot::new());
        let taker = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.take())
        };
        slot.close();
        assert_eq!(Err(GameError::Disconnected), taker.join().unwrap());
        assert_eq!(
            Err(GameError::Disconnected),
            slot.submit(MoveRequest::new(E2, E4))
        );
    }
}
