//! Correlation of start and finish events by test identifier.

use crate::grammar::EventGrammar;
use crate::model::{FinishData, FinishEvent, LineEvent, StartEvent, TestRecord};
use std::collections::HashMap;
use tracing::debug;

/// Records keyed by test identifier, plus the lines dropped while building it.
#[derive(Debug, Clone, Default)]
pub struct CorrelationTable {
    records: HashMap<String, TestRecord>,
    omitted_lines: usize,
}

impl CorrelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `text` line by line with the shared grammar.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(EventGrammar::shared(), text)
    }

    pub fn from_text_with(grammar: &EventGrammar, text: &str) -> Self {
        let mut table = Self::new();
        for (idx, line) in split_lines(text).enumerate() {
            let event = grammar.classify(line);
            if matches!(event, LineEvent::Unrecognized) {
                debug!(line_no = idx + 1, reason = "unrecognized", "omitting line");
            }
            table.apply(event, idx + 1);
        }
        table
    }

    /// Fold one classified line into the table.
    pub fn apply(&mut self, event: LineEvent, line_no: usize) {
        match event {
            LineEvent::Start(start) => self.record_start(start),
            LineEvent::Finish(finish) => {
                if !self.record_finish(finish) {
                    debug!(line_no, reason = "finish_without_start", "omitting line");
                }
            }
            LineEvent::Unrecognized => self.omitted_lines += 1,
        }
    }

    /// Insert a record, or overwrite the name of an existing one.
    ///
    /// A start that arrives after the finish for the same id attaches its
    /// name to the already complete record.
    pub fn record_start(&mut self, start: StartEvent) {
        self.records.entry(start.id).or_default().name = Some(start.name);
    }

    /// Attach finish data to a started record. Returns `false` (and counts
    /// an omitted line) when the id was never started.
    pub fn record_finish(&mut self, finish: FinishEvent) -> bool {
        let Some(record) = self.records.get_mut(&finish.id) else {
            self.omitted_lines += 1;
            return false;
        };

        // An error from an earlier finish line survives a later one without.
        let error = match (finish.error, record.finish.take()) {
            (Some(e), _) => Some(e),
            (None, Some(prev)) => prev.error,
            (None, None) => None,
        };
        record.finish = Some(FinishData {
            duration_ms: finish.duration_ms,
            result: finish.result,
            error,
        });
        true
    }

    pub fn get(&self, id: &str) -> Option<&TestRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lines dropped during the scan. Unfinished records are not included
    /// here; they are counted at reduction time.
    pub fn omitted_lines(&self) -> usize {
        self.omitted_lines
    }

    pub fn records(&self) -> impl Iterator<Item = (&str, &TestRecord)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }

    pub fn incomplete_count(&self) -> usize {
        self.records.values().filter(|r| !r.is_complete()).count()
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line. Blank lines at
/// the end of the text are not lines; blank lines between events are.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim_end_matches(['\n', '\r']).lines()
}
