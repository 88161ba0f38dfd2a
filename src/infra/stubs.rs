use std::cell::RefCell;

use anyhow::{bail, Result};

use crate::{
    domain::exchange::ExchangeRequest, infra::contracts::ExternalOpener,
    usecases::contracts::ExchangeDispatcher,
};

/// Keeps dispatched requests so tests can inspect bodies and feed completions.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub requests: RefCell<Vec<ExchangeRequest>>,
}

impl ExchangeDispatcher for RecordingDispatcher {
    fn dispatch(&self, request: ExchangeRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// Records every target instead of launching anything.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_owned());
        if self.fail {
            bail!("no handler registered for {target}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_opener_keeps_targets_even_when_failing() {
        let opener = RecordingOpener::failing();

        assert!(opener.open("tel://1").is_err());
        assert_eq!(*opener.opened.borrow(), vec!["tel://1".to_owned()]);
    }
}
