// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::Chars;

use chrono::NaiveTime;

/// One element of a message prefix format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A character copied verbatim, including the character following an unknown `%` escape.
    Literal(char),
    /// `%t`, the current time as `HH:MM:SS`.
    Time,
    /// `%x`, the address of the conversation partner.
    Xid,
    /// `%a`, the display alias of the sender.
    Alias,
    /// `%s`, the secure or insecure symbol depending on the OTR state.
    SecureSymbol,
}

/// The values substituted for the placeholders of a `PrefixFormat`.
#[derive(Debug, Clone, Copy)]
pub struct PrefixContext<'a> {
    pub xid: &'a str,
    pub alias: &'a str,
    pub secure_symbol: &'a str,
    pub time: NaiveTime,
}

/// A message prefix format such as `"< %s(%t) %a: "`.
///
/// A `%` applies to exactly the following character. `%t`, `%x`, `%a` and `%s` are
/// placeholders, every other escaped character stands for itself (so `%%` yields `%`).
/// A lone `%` at the end of the format is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFormat<'a> {
    format: &'a str,
}

impl<'a> PrefixFormat<'a> {
    pub fn new(format: &'a str) -> Self {
        Self { format }
    }

    pub fn segments(&self) -> Segments<'a> {
        Segments {
            chars: self.format.chars(),
        }
    }

    pub fn render(&self, ctx: &PrefixContext<'_>) -> String {
        let mut output = String::with_capacity(self.format.len());

        for segment in self.segments() {
            match segment {
                Segment::Literal(c) => output.push(c),
                Segment::Time => output.push_str(&ctx.time.format("%H:%M:%S").to_string()),
                Segment::Xid => output.push_str(ctx.xid),
                Segment::Alias => output.push_str(ctx.alias),
                Segment::SecureSymbol => output.push_str(ctx.secure_symbol),
            }
        }

        output
    }
}

pub struct Segments<'a> {
    chars: Chars<'a>,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        if c != '%' {
            return Some(Segment::Literal(c));
        }

        let segment = match self.chars.next()? {
            't' => Segment::Time,
            'x' => Segment::Xid,
            'a' => Segment::Alias,
            's' => Segment::SecureSymbol,
            other => Segment::Literal(other),
        };
        Some(segment)
    }
}
