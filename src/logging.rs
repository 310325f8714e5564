use log::Level::Trace;
use log::{log_enabled, trace};

use crate::parser::Parsable;
use crate::prelude::ParseResult;
use crate::{util, LOG_TARGET};
use std::fmt::Debug;

pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;
    fn log_inputs(&self, msg: &str, input: &str);
    fn log_success(&self, msg: &str, res: &ParseResult);
    fn log_failure<Error: Debug>(&self, msg: &str, input: &str, error: &Error);
}

impl<P> Loggable for P
where
    P: Parsable + ?Sized,
{
    fn log_inputs(&self, msg: &str, input: &str) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {msg:<lw$}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = self.name(),
                inp = util::formatter_str(input),
            );
        }
    }

    fn log_success(&self, msg: &str, res: &ParseResult) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {msg:<lw$} -> {res:?}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = self.name(),
                inp = util::formatter_str(res.rest()),
                res = res.captures(),
            );
        }
    }

    fn log_failure<Error: Debug>(&self, msg: &str, input: &str, error: &Error) {
        trace!(
            target: LOG_TARGET,
            "{inp:<iw$} {label:<lw$} : {msg:<lw$} -> {e:?}",
            iw = Self::INPUT_WIDTH,
            lw = Self::LABEL_WIDTH,
            label = self.name(),
            inp = util::formatter_str(input),
            e = error,
        );
    }
}
