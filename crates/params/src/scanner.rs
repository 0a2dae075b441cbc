use crate::record::{FIELD_CAP, LINE_CAP, Parameter};
use std::mem;

/// Character-by-character state machine for one parameter line.
///
/// Three markers track progress through a line: the first significant
/// character, whether the literal `=` separator has been seen, and
/// whether the value has begun. All three reset when a line ends, so a
/// single scanner instance can be fed an entire file line by line.
#[derive(Debug, Default)]
pub(crate) struct LineScanner {
    first: Option<char>,
    separator_seen: bool,
    value_started: bool,
    name: String,
    value: String,
}

impl LineScanner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Scans one line and returns the record it emits, if any.
    ///
    /// At most [`LINE_CAP`] bytes of the line are considered; the rest is
    /// dropped. The end of the line acts as the terminator that decides
    /// whether the accumulated buffers form a complete record.
    pub(crate) fn scan_line(&mut self, line: &str) -> Option<Parameter> {
        let mut budget = LINE_CAP;
        for ch in line.chars() {
            let width = ch.len_utf8();
            if width > budget {
                break;
            }
            budget -= width;
            self.scan_char(ch);
        }
        self.finish_line()
    }

    fn scan_char(&mut self, ch: char) {
        // Blanks are insignificant everywhere except inside a comment
        // line, where they are part of the scanned text. Line terminators
        // are structure, never content.
        if ((ch == ' ' || ch == '\t') && self.first != Some('#')) || ch == '\r' || ch == '\n' {
            return;
        }

        if self.first.is_none() {
            self.first = Some(ch);
        } else if !self.separator_seen && ch == '=' {
            self.separator_seen = true;
        } else if self.separator_seen && !self.value_started {
            self.value_started = true;
        }

        if self.first == Some('#') {
            return;
        }
        if !self.separator_seen && self.name.len() + ch.len_utf8() <= FIELD_CAP {
            self.name.push(ch);
        }
        if self.separator_seen && self.value_started && self.value.len() + ch.len_utf8() <= FIELD_CAP
        {
            self.value.push(ch);
        }
    }

    /// Ends the current line, emitting a record when the line carried a
    /// non-comment name, a separator, and at least one value character.
    fn finish_line(&mut self) -> Option<Parameter> {
        let complete = self
            .first
            .is_some_and(|first| first != '#' && first != '=')
            && self.separator_seen
            && self.value_started;

        let record = complete.then(|| {
            Parameter::new(mem::take(&mut self.name), mem::take(&mut self.value))
        });

        self.first = None;
        self.separator_seen = false;
        self.value_started = false;
        self.name.clear();
        self.value.clear();
        record
    }
}
