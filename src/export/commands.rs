//! Range Command Compiler.
//!
//! Turns one block's flat, offset-based annotations into an ordered command
//! stream and partitions the text into contiguous segments, each paired with
//! the commands taking effect at its start offset.
//!
//! Offsets count characters, not bytes, matching how the editor addresses
//! text. Out-of-range offsets are clamped to the text length.

use std::iter::Peekable;

use crate::content::{Block, EntityKey};

/// A positional event driving the stack machines.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartText,
    StopText,
    StartInlineStyle(String),
    StopInlineStyle(String),
    StartEntity(EntityKey),
    StopEntity(EntityKey),
}

/// Iterator over one block's `(segment, commands)` pairs, in offset order.
///
/// Within a group sharing one offset, construction order is preserved: text
/// markers first, then style commands in range order, then entity commands in
/// range order. That order is the tie-break that fixes nesting when several
/// spans start or stop at the same offset.
pub struct CommandGroups<'a> {
    text: &'a str,
    /// Byte index of each character, with a trailing `text.len()` sentinel.
    char_starts: Vec<usize>,
    commands: Peekable<std::vec::IntoIter<(usize, Command)>>,
}

impl<'a> CommandGroups<'a> {
    pub fn new(block: &'a Block) -> Self {
        let text = block.text.as_str();
        let char_starts: Vec<usize> = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = char_starts.len() - 1;

        let mut commands = vec![(0, Command::StartText), (char_len, Command::StopText)];
        for range in &block.style_ranges {
            let start = range.offset.min(char_len);
            let stop = range.offset.saturating_add(range.length).min(char_len);
            commands.push((start, Command::StartInlineStyle(range.style.clone())));
            commands.push((stop, Command::StopInlineStyle(range.style.clone())));
        }
        for range in &block.entity_ranges {
            let start = range.offset.min(char_len);
            let stop = range.offset.saturating_add(range.length).min(char_len);
            commands.push((start, Command::StartEntity(range.key.clone())));
            commands.push((stop, Command::StopEntity(range.key.clone())));
        }
        // Stable sort: equal offsets keep construction order.
        commands.sort_by_key(|(offset, _)| *offset);

        Self {
            text,
            char_starts,
            commands: commands.into_iter().peekable(),
        }
    }

    fn byte_at(&self, char_offset: usize) -> usize {
        self.char_starts[char_offset.min(self.char_starts.len() - 1)]
    }
}

impl<'a> Iterator for CommandGroups<'a> {
    type Item = (&'a str, Vec<Command>);

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, first) = self.commands.next()?;
        let mut group = vec![first];
        while self
            .commands
            .peek()
            .is_some_and(|(next_offset, _)| *next_offset == offset)
        {
            if let Some((_, command)) = self.commands.next() {
                group.push(command);
            }
        }

        let start = self.byte_at(offset);
        let next_offset = self.commands.peek().map(|(next_offset, _)| *next_offset);
        let end = match next_offset {
            Some(next_offset) => self.byte_at(next_offset),
            None => self.text.len(),
        };
        Some((&self.text[start..end], group))
    }
}
